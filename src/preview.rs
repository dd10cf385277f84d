use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{Platform, VideoInfo};

static INSTAGRAM_POST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:p|reel|tv)/([A-Za-z0-9_-]+)").expect("valid instagram regex"));

/// What the selection screen should embed for the fetched media.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    Youtube { video_id: String, shorts: bool, src: String },
    /// Always rendered as a vertical frame.
    Instagram { src: String },
    FacebookPlugin { src: String },
    Video { src: String, poster: String },
    Image { src: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
}

impl Viewport {
    pub fn is_mobile(&self, breakpoint_px: u32) -> bool {
        self.width <= breakpoint_px
    }
}

/// Pick the preview for `info`. Identifier extraction failures fall
/// through to the generic video/thumbnail preview instead of erroring.
pub fn plan_preview(
    info: &VideoInfo,
    platform: Option<Platform>,
    url: &str,
    viewport: Viewport,
    mobile_breakpoint_px: u32,
) -> Preview {
    match platform {
        Some(Platform::Youtube) => {
            if let Some((video_id, shorts)) = youtube_id(url) {
                // Mobile browsers refuse unmuted autoplay, which kills the sound.
                let autoplay = if viewport.is_mobile(mobile_breakpoint_px) { 0 } else { 1 };
                let src = format!(
                    "https://www.youtube.com/embed/{video_id}?autoplay={autoplay}&mute=0&controls=1&playsinline=1&modestbranding=1&rel=0"
                );
                return Preview::Youtube { video_id, shorts, src };
            }
        }
        Some(Platform::Instagram) => {
            if let Some(id) = instagram_id(url) {
                return Preview::Instagram {
                    src: format!("https://www.instagram.com/p/{id}/embed/captioned"),
                };
            }
        }
        Some(Platform::Facebook) => {
            if info.preview.is_none() {
                return Preview::FacebookPlugin {
                    src: format!(
                        "https://www.facebook.com/plugins/video.php?href={}&show_text=false&t=0",
                        urlencoding::encode(url)
                    ),
                };
            }
        }
        None => {}
    }

    match &info.preview {
        Some(src) => Preview::Video {
            src: src.clone(),
            poster: info.thumbnail.clone(),
        },
        None => Preview::Image {
            src: info.thumbnail.clone(),
        },
    }
}

/// Returns the video id and whether the link is a Shorts link.
pub fn youtube_id(url: &str) -> Option<(String, bool)> {
    const SHORTS_END: &[char] = &['?', '&', '#', '/'];
    const WATCH_END: &[char] = &['&', '#'];
    const SHARE_END: &[char] = &['?', '#', '/'];

    let (rest, terminators, shorts) = if url.contains("shorts") {
        (url.split_once("shorts/")?.1, SHORTS_END, true)
    } else if url.contains("v=") {
        (url.split_once("v=")?.1, WATCH_END, false)
    } else if url.contains("youtu.be") {
        (url.split_once("youtu.be/")?.1, SHARE_END, false)
    } else {
        return None;
    };

    let id = rest.split(terminators).next().unwrap_or_default();
    if id.is_empty() {
        None
    } else {
        Some((id.to_string(), shorts))
    }
}

pub fn instagram_id(url: &str) -> Option<&str> {
    INSTAGRAM_POST
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: Viewport = Viewport { width: 1440 };
    const PHONE: Viewport = Viewport { width: 390 };

    fn info(preview: Option<&str>) -> VideoInfo {
        VideoInfo {
            title: "Clip".into(),
            thumbnail: "https://img.example/t.jpg".into(),
            preview: preview.map(str::to_string),
            qualities: vec!["720".into()],
        }
    }

    #[test]
    fn shorts_links_render_vertical() {
        let url = "https://www.youtube.com/shorts/aBc123?feature=share";
        match plan_preview(&info(None), Some(Platform::Youtube), url, DESKTOP, 768) {
            Preview::Youtube { video_id, shorts, src } => {
                assert_eq!(video_id, "aBc123");
                assert!(shorts);
                assert!(src.contains("autoplay=1"));
            }
            other => panic!("unexpected preview {other:?}"),
        }
    }

    #[test]
    fn watch_links_are_not_shorts() {
        let url = "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42";
        match plan_preview(&info(None), Some(Platform::Youtube), url, PHONE, 768) {
            Preview::Youtube { video_id, shorts, src } => {
                assert_eq!(video_id, "dQw4w9WgXcQ");
                assert!(!shorts);
                assert!(src.contains("autoplay=0"));
            }
            other => panic!("unexpected preview {other:?}"),
        }
    }

    #[test]
    fn short_domain_ids_drop_query() {
        assert_eq!(
            youtube_id("https://youtu.be/dQw4w9WgXcQ?si=xyz"),
            Some(("dQw4w9WgXcQ".to_string(), false))
        );
    }

    #[test]
    fn unparseable_youtube_link_falls_back() {
        let url = "https://www.youtube.com/channel/UC123";
        assert_eq!(
            plan_preview(&info(Some("https://cdn/p.mp4")), Some(Platform::Youtube), url, DESKTOP, 768),
            Preview::Video {
                src: "https://cdn/p.mp4".into(),
                poster: "https://img.example/t.jpg".into()
            }
        );
        // "shorts" without the path separator is not an id.
        assert_eq!(youtube_id("https://youtube.com/shorts"), None);
    }

    #[test]
    fn instagram_reels_embed_by_shortcode() {
        let url = "https://www.instagram.com/reel/Cx_9-ab/?igsh=1";
        assert_eq!(
            plan_preview(&info(None), Some(Platform::Instagram), url, DESKTOP, 768),
            Preview::Instagram {
                src: "https://www.instagram.com/p/Cx_9-ab/embed/captioned".into()
            }
        );
    }

    #[test]
    fn instagram_profile_falls_back_to_thumbnail() {
        let url = "https://www.instagram.com/";
        assert_eq!(
            plan_preview(&info(None), Some(Platform::Instagram), url, DESKTOP, 768),
            Preview::Image { src: "https://img.example/t.jpg".into() }
        );
    }

    #[test]
    fn facebook_prefers_direct_preview() {
        let url = "https://www.facebook.com/watch/?v=10";
        assert!(matches!(
            plan_preview(&info(Some("https://cdn/fb.mp4")), Some(Platform::Facebook), url, DESKTOP, 768),
            Preview::Video { .. }
        ));
        match plan_preview(&info(None), Some(Platform::Facebook), url, DESKTOP, 768) {
            Preview::FacebookPlugin { src } => {
                assert!(src.starts_with("https://www.facebook.com/plugins/video.php?href=https%3A%2F%2Fwww.facebook.com"));
                assert!(src.ends_with("&show_text=false&t=0"));
            }
            other => panic!("unexpected preview {other:?}"),
        }
    }

    #[test]
    fn unknown_platform_uses_thumbnail() {
        assert_eq!(
            plan_preview(&info(None), None, "https://vimeo.com/1", DESKTOP, 768),
            Preview::Image { src: "https://img.example/t.jpg".into() }
        );
    }
}
