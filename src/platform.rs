use crate::types::Platform;

// Order matters: the first matching fragment wins.
const FRAGMENTS: &[(&str, Platform)] = &[
    ("youtube", Platform::Youtube),
    ("youtu.be", Platform::Youtube),
    ("instagram", Platform::Instagram),
    ("facebook", Platform::Facebook),
    ("fb.watch", Platform::Facebook),
];

/// Classify a pasted link by the domain fragments it contains.
/// No well-formedness check is made.
pub fn detect_platform(url: &str) -> Option<Platform> {
    FRAGMENTS
        .iter()
        .find(|(fragment, _)| url.contains(fragment))
        .map(|(_, platform)| *platform)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_known_domains() {
        let cases = [
            ("https://www.youtube.com/watch?v=dQw4w9WgXcQ", Some(Platform::Youtube)),
            ("https://youtu.be/dQw4w9WgXcQ", Some(Platform::Youtube)),
            ("https://www.instagram.com/reel/Cx1/", Some(Platform::Instagram)),
            ("https://www.facebook.com/watch/?v=10", Some(Platform::Facebook)),
            ("https://fb.watch/abc/", Some(Platform::Facebook)),
        ];
        for (url, expected) in cases {
            assert_eq!(detect_platform(url), expected, "{url}");
        }
    }

    #[test]
    fn unknown_or_empty_is_none() {
        assert_eq!(detect_platform(""), None);
        assert_eq!(detect_platform("https://vimeo.com/123"), None);
        assert_eq!(detect_platform("not a url at all"), None);
    }
}
