use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <div class="header">
            <div class="brand">{"Vid"}<span>{"Sync"}</span></div>
            <div class="brand-subtitle">
                {"Premium Downloader for "}<span>{"Video (MP4)"}</span>{" & "}<span>{"Audio (MP3)"}</span>
            </div>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();
    html! {
        <footer class="footer">
            <div class="footer-links">
                <a href="#" class="footer-link">{"Terms"}</a>
                <a href="#" class="footer-link">{"Privacy"}</a>
                <a href="#" class="footer-link">{"Support"}</a>
            </div>
            <div class="footer-text" style="text-align: center;">
                { format!("© {year} VidSync Inc.") }<br />
                <span style="font-size: 10px; opacity: 0.5;">
                    {"Users are responsible for respecting platform terms and copyright"}
                </span>
            </div>
            <div class="social-tag">{"Secured by SSL"}</div>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub text: AttrValue,
}

#[function_component(StatusWidget)]
pub fn status_widget(props: &StatusProps) -> Html {
    html! {
        <div class="status-widget">
            <div class="status-dot"></div>
            <span>{ props.text.clone() }</span>
        </div>
    }
}
