//! HTML escaping for text interpolated into templates

/// Escape text for HTML element content and double-quoted attribute values.
///
/// `None` and empty input both produce an empty string.
pub fn escape_html(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Shorthand for a present value
pub fn escape(text: &str) -> String {
    escape_html(Some(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup() {
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape(r#"say "hi" it's"#), "say &quot;hi&quot; it&#39;s");
    }

    #[test]
    fn test_escape_absent_and_empty() {
        assert_eq!(escape_html(None), "");
        assert_eq!(escape_html(Some("")), "");
    }

    #[test]
    fn test_escape_is_not_idempotent_on_entities() {
        assert_eq!(escape("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_escape_keeps_unicode() {
        assert_eq!(escape("Café Ñ ü"), "Café Ñ ü");
    }
}
