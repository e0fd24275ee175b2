//! Small HTML snippet builders for the host's web views.

use crate::text;

/// Wrap content in a `<span>` with a CSS class; empty output for blank content.
pub fn span(content: &str, css_class: &str) -> String {
    if text::is_blank(content) {
        return String::new();
    }
    format!(r#"<span class="{css_class}">{content}</span>"#)
}

/// Wrap content in a `<div>` with a CSS class; empty output for blank content.
pub fn div(content: &str, css_class: &str) -> String {
    if text::is_blank(content) {
        return String::new();
    }
    format!(r#"<div class="{css_class}">{content}</div>"#)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn span_wraps_content_with_class() {
        assert_eq!(span("12:45", "departure"), r#"<span class="departure">12:45</span>"#);
    }

    #[test]
    fn span_allows_empty_class() {
        assert_eq!(span("x", ""), r#"<span class="">x</span>"#);
    }

    #[test]
    fn blank_content_yields_empty_output() {
        assert_eq!(span("", "c"), "");
        assert_eq!(span("   ", "c"), "");
        assert_eq!(div("", "c"), "");
    }

    #[test]
    fn div_wraps_content_with_class() {
        assert_eq!(div("note", "remark"), r#"<div class="remark">note</div>"#);
    }
}
