use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::components::preview_frame::PreviewFrame;
use crate::preview::Preview;
use crate::types::{quality_label, MediaFormat, VideoInfo};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub info: VideoInfo,
    pub preview: Preview,
    pub format: MediaFormat,
    pub selected_quality: String,
    pub on_toggle_format: Callback<()>,
    pub on_quality: Callback<String>,
    pub on_download: Callback<()>,
}

#[function_component(SelectPage)]
pub fn select_page(props: &Props) -> Html {
    let is_audio = props.format.is_audio();

    let on_toggle = {
        let cb = props.on_toggle_format.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let on_quality_change = {
        let cb = props.on_quality.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<web_sys::HtmlSelectElement>().value();
            cb.emit(value);
        })
    };

    let on_download = {
        let cb = props.on_download.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <>
            <div class="preview-container">
                <PreviewFrame preview={props.preview.clone()} title={props.info.title.clone()} />
            </div>
            <div class="media-title">{ props.info.title.clone() }</div>

            <div class="controls-row">
                <div style="flex: 1;">
                    <span class="toggle-label">{"Format"}</span>
                </div>
                <div class={classes!("switch-container", is_audio.then_some("audio-mode"))} onclick={on_toggle}>
                    <div class={classes!("switch-option", (!is_audio).then_some("active"))}>
                        <Icon icon_id={IconId::LucideVideo} width={"14"} height={"14"} />
                        {"Video"}
                    </div>
                    <div class={classes!("switch-option", is_audio.then_some("active"))}>
                        <Icon icon_id={IconId::LucideMusic} width={"14"} height={"14"} />
                        {"Audio"}
                    </div>
                </div>
            </div>

            { if !is_audio && !props.info.qualities.is_empty() {
                html! {
                    <>
                        <label class="input-label" for="quality-select">{"Select Quality"}</label>
                        <select id="quality-select" class="clean-select" onchange={on_quality_change}>
                            { for props.info.qualities.iter().map(|q| html! {
                                <option key={q.clone()} value={q.clone()} selected={*q == props.selected_quality}>
                                    { quality_label(q) }
                                </option>
                            }) }
                        </select>
                    </>
                }
            } else { html! {} }}

            <button type="button" class="primary-btn" onclick={on_download}>
                <Icon icon_id={IconId::LucideDownload} width={"18"} height={"18"} />
                { if is_audio { "Download MP3 Audio" } else { "Download Video File" } }
            </button>
        </>
    }
}
