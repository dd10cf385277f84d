use gloo_timers::callback::Interval;
use serde_json::json;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::chrome::{Footer, Header, StatusWidget};
use crate::config::AppConfig;
use crate::controller::Controller;
use crate::log;
use crate::pages;
use crate::preview::{plan_preview, Viewport};
use crate::session::Screen;
use crate::ticker::{Ticker, TickerAction};

fn current_viewport() -> Viewport {
    let width = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1024.0);
    Viewport { width: width as u32 }
}

#[function_component(App)]
pub fn app() -> Html {
    let refresh = use_force_update();
    let controller = use_memo((), move |_| {
        let config = AppConfig::default();
        log::set_debug_enabled(config.debug_logs);
        Controller::new(config, Callback::from(move |_| refresh.force_update()))
    });
    let ticker = use_reducer(Ticker::default);

    // Status ticker: one interval per mount, cancelled by dropping it.
    {
        let ticker = ticker.clone();
        let every_ms = controller.config().ticker_interval_ms;
        use_effect_once(move || {
            let interval = Interval::new(every_ms, move || ticker.dispatch(TickerAction::Advance));
            move || drop(interval)
        });
    }

    {
        let controller = controller.clone();
        use_effect_once(move || {
            log::info("app_mounted", json!({ "api_base": controller.config().api_base }));
            move || controller.teardown()
        });
    }

    let (state, screen) = controller.snapshot();

    let body = match screen {
        Screen::Input => {
            let on_input = {
                let c = controller.clone();
                Callback::from(move |url: String| c.set_url(url))
            };
            let on_submit = {
                let c = controller.clone();
                Callback::from(move |_: ()| c.lookup())
            };
            let on_paste = {
                let c = controller.clone();
                Callback::from(move |_: ()| c.paste())
            };
            html! {
                <pages::input::InputPage
                    url={state.url.clone()}
                    platform={state.platform}
                    loading={state.loading}
                    {on_input}
                    {on_submit}
                    {on_paste}
                />
            }
        }
        Screen::Select => match state.info.clone() {
            Some(info) => {
                let preview = plan_preview(
                    &info,
                    state.platform,
                    &state.url,
                    current_viewport(),
                    controller.config().mobile_breakpoint_px,
                );
                let on_toggle_format = {
                    let c = controller.clone();
                    Callback::from(move |_: ()| c.toggle_format())
                };
                let on_quality = {
                    let c = controller.clone();
                    Callback::from(move |q: String| c.select_quality(q))
                };
                let on_download = {
                    let c = controller.clone();
                    Callback::from(move |_: ()| c.start_download())
                };
                html! {
                    <pages::select::SelectPage
                        {info}
                        {preview}
                        format={state.format}
                        selected_quality={state.selected_quality.clone()}
                        {on_toggle_format}
                        {on_quality}
                        {on_download}
                    />
                }
            }
            None => html! {},
        },
        Screen::Progress => match state.job.clone() {
            Some(job) => {
                let on_dismiss = {
                    let c = controller.clone();
                    Callback::from(move |_: ()| c.dismiss_job())
                };
                html! { <pages::progress::ProgressPage {job} format={state.format} {on_dismiss} /> }
            }
            None => html! {},
        },
    };

    html! {
        <div class="app-container">
            <div class="orb orb-1" />
            <div class="orb orb-2" />
            <Header />
            <div class="clean-card">
                { body }
            </div>
            <Footer />
            <StatusWidget text={ticker.current().to_string()} />
        </div>
    }
}
