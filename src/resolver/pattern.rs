//! Pattern matches over opaque third-party markup and script text.
//!
//! The embed site's format is versionless; every assumption about its literal
//! layout lives here.

use std::sync::LazyLock;

use regex::Regex;

/// First `src="..."` attribute on the embed page (the player iframe).
pub static IFRAME_SRC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"src="([^"]*)""#).unwrap());

/// `src: '...'` literal in the rcp page script, pointing at the prorcp page.
pub static RCP_SOURCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"src:\s*'([^']*)'").unwrap());

/// `file: '...'` literal in the prorcp page script, the final media URL.
pub static PRORCP_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"file:\s*'([^']*)'").unwrap());

/// Returns the first capture group of the first match, or `None` when there is
/// no match or the capture is empty.
pub fn extract_first_match(text: &str, pattern: &Regex) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iframe_src_takes_first() {
        let html = r#"<script src="/a.js"></script><iframe id="player_iframe" src="//cloudnestra.com/rcp/x"></iframe>"#;
        assert_eq!(
            extract_first_match(html, &IFRAME_SRC).as_deref(),
            Some("/a.js")
        );
    }

    #[test]
    fn test_rcp_source_tolerates_spacing() {
        let script = "$('#the_frame').html(''); var cfg = { src:    '/prorcp/ZGVhZGJlZWY=', id: 1 };";
        assert_eq!(
            extract_first_match(script, &RCP_SOURCE).as_deref(),
            Some("/prorcp/ZGVhZGJlZWY=")
        );

        let tight = "{src:'/prorcp/abc'}";
        assert_eq!(
            extract_first_match(tight, &RCP_SOURCE).as_deref(),
            Some("/prorcp/abc")
        );
    }

    #[test]
    fn test_prorcp_file() {
        let script = "var player = new Playerjs({id:\"player_parent\", file: 'https://tmstr.example/pl/H4sI/master.m3u8', cuid:\"x\"});";
        assert_eq!(
            extract_first_match(script, &PRORCP_FILE).as_deref(),
            Some("https://tmstr.example/pl/H4sI/master.m3u8")
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(extract_first_match("<html>blocked</html>", &RCP_SOURCE), None);
        assert_eq!(extract_first_match("file: \"double\"", &PRORCP_FILE), None);
    }

    #[test]
    fn test_empty_capture_is_none() {
        assert_eq!(extract_first_match("file: ''", &PRORCP_FILE), None);
        assert_eq!(extract_first_match(r#"<iframe src="">"#, &IFRAME_SRC), None);
    }
}
