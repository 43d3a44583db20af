//! HTML helper functions

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG_RE: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Default excerpt length used by `strip_html`
pub const DEFAULT_EXCERPT_LENGTH: usize = 120;

/// Strip HTML tags and truncate the text for preview display.
///
/// The ellipsis is appended unconditionally, even when the stripped
/// text is shorter than `max_length`.
pub fn strip_html(html: &str, max_length: Option<usize>) -> String {
    let max_length = max_length.unwrap_or(DEFAULT_EXCERPT_LENGTH);
    let text = TAG_RE.replace_all(html, "");
    let truncated: String = text.chars().take(max_length).collect();
    format!("{}...", truncated)
}

/// Badge style token for a result type. Posts get the blue badge,
/// everything else the green one.
pub fn type_badge_color(kind: &str) -> &'static str {
    if kind == "post" {
        "bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-300"
    } else {
        "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-300"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html_removes_tags() {
        let result = strip_html("<p>Hello <b>World</b></p>", None);
        assert_eq!(result, "Hello World...");
    }

    #[test]
    fn test_strip_html_appends_ellipsis_to_short_input() {
        assert_eq!(strip_html("<p>Hi</p>", Some(120)), "Hi...");
    }

    #[test]
    fn test_strip_html_truncates_long_input() {
        let long = "x".repeat(300);
        let result = strip_html(&long, Some(10));
        assert_eq!(result, format!("{}...", "x".repeat(10)));
    }

    #[test]
    fn test_strip_html_default_length() {
        let long = "y".repeat(300);
        let result = strip_html(&long, None);
        assert_eq!(result.chars().count(), DEFAULT_EXCERPT_LENGTH + 3);
    }

    #[test]
    fn test_type_badge_color() {
        assert_ne!(type_badge_color("post"), type_badge_color("page"));
        assert_eq!(type_badge_color("anything-else"), type_badge_color("page"));
    }
}
