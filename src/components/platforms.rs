use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::types::Platform;

fn platform_icon(p: Platform) -> IconId {
    match p {
        Platform::Youtube => IconId::LucideYoutube,
        Platform::Instagram => IconId::LucideInstagram,
        Platform::Facebook => IconId::LucideFacebook,
    }
}

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    pub platform: Platform,
}

#[function_component(PlatformBadge)]
pub fn platform_badge(props: &BadgeProps) -> Html {
    html! {
        <div class={classes!("badge", format!("badge-{}", props.platform.css_key()))}>
            { format!("{} Detected", props.platform.label()) }
        </div>
    }
}

#[function_component(PlatformGrid)]
pub fn platform_grid() -> Html {
    html! {
        <div class="supported-platforms">
            <span class="platform-label">{"Supported Platforms"}</span>
            <div class="platform-grid">
                { for Platform::ALL.into_iter().map(|p| html! {
                    <div class="platform-item" key={p.css_key()}>
                        <Icon icon_id={platform_icon(p)} class={classes!("platform-icon", p.css_key())} width={"24"} height={"24"} />
                        <span class="platform-name">{ p.label() }</span>
                    </div>
                }) }
            </div>
        </div>
    }
}
