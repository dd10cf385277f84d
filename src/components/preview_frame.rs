use yew::prelude::*;

use crate::preview::Preview;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub preview: Preview,
    pub title: AttrValue,
}

#[function_component(PreviewFrame)]
pub fn preview_frame(props: &Props) -> Html {
    match &props.preview {
        Preview::Youtube { src, shorts, .. } => html! {
            <div class={classes!("yt-container", shorts.then_some("shorts-mode"))}>
                <iframe
                    class="preview-iframe"
                    src={src.clone()}
                    title="YouTube Preview"
                    allow="autoplay; encrypted-media"
                    allowfullscreen=true
                />
            </div>
        },
        Preview::Instagram { src } => html! {
            <iframe
                class="preview-iframe vertical"
                src={src.clone()}
                title="Instagram Preview"
                scrolling="no"
                allowtransparency="true"
            />
        },
        Preview::FacebookPlugin { src } => html! {
            <iframe
                class="preview-iframe"
                src={src.clone()}
                title="Facebook Preview"
                allow="autoplay; clipboard-write; encrypted-media; picture-in-picture; web-share"
                allowfullscreen=true
            />
        },
        Preview::Video { src, poster } => html! {
            <video
                class="preview-video"
                src={src.clone()}
                poster={poster.clone()}
                controls=true
                autoplay=true
                muted=true
                loop=true
                playsinline=true
                referrerpolicy="no-referrer"
            />
        },
        Preview::Image { src } => html! {
            <img class="preview-img" src={src.clone()} alt={props.title.clone()} referrerpolicy="no-referrer" />
        },
    }
}
