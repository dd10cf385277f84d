use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::components::platforms::{PlatformBadge, PlatformGrid};
use crate::types::Platform;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub url: String,
    pub platform: Option<Platform>,
    pub loading: bool,
    pub on_input: Callback<String>,
    pub on_submit: Callback<()>,
    pub on_paste: Callback<()>,
}

#[function_component(InputPage)]
pub fn input_page(props: &Props) -> Html {
    let on_input = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<web_sys::HtmlInputElement>().value();
            on_input.emit(value);
        })
    };

    let on_keydown = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_submit.emit(());
            }
        })
    };

    let on_find = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| on_submit.emit(()))
    };

    let on_paste = {
        let on_paste = props.on_paste.clone();
        Callback::from(move |_: MouseEvent| on_paste.emit(()))
    };

    html! {
        <>
            <div class="badge-container">
                { match props.platform {
                    Some(platform) => html! { <PlatformBadge {platform} /> },
                    None => html! {},
                }}
            </div>

            <div style="margin-bottom: 32px;">
                <label class="input-label" for="url-input">{"Video Link"}</label>
                <div class="input-wrapper">
                    <input
                        id="url-input"
                        class="clean-input"
                        placeholder="Paste URL here..."
                        value={props.url.clone()}
                        oninput={on_input}
                        onkeydown={on_keydown}
                    />
                    <button type="button" class="paste-btn" onclick={on_paste} title="Paste from clipboard">
                        <Icon icon_id={IconId::LucideClipboard} width={"14"} height={"14"} />
                        {"PASTE"}
                    </button>
                </div>
            </div>

            <button
                type="button"
                class="primary-btn"
                onclick={on_find}
                disabled={props.loading || props.url.trim().is_empty()}
            >
                { if props.loading {
                    html! { {"Searching..."} }
                } else {
                    html! { <>
                        <Icon icon_id={IconId::LucideSearch} width={"18"} height={"18"} />
                        {"Find Video"}
                    </> }
                }}
            </button>

            <PlatformGrid />
        </>
    }
}
