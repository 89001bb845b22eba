//! HTML escaping for text and attribute contexts.

/// Escape a string for HTML text content.
pub fn text(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
    output
}

/// Escape a string for an HTML attribute value.
pub fn attr(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#39;"),
            _ => output.push(c),
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_escapes_markup() {
        assert_eq!(text("<b>bold & proud</b>"), "&lt;b&gt;bold &amp; proud&lt;/b&gt;");
    }

    #[test]
    fn test_text_leaves_quotes() {
        assert_eq!(text(r#"say "hi""#), r#"say "hi""#);
    }

    #[test]
    fn test_attr_escapes_quotes() {
        assert_eq!(attr(r#"a"b'c"#), "a&quot;b&#39;c");
        assert_eq!(attr("<div>"), "&lt;div&gt;");
    }

    #[test]
    fn test_plain_strings_pass_through() {
        assert_eq!(text("plain"), "plain");
        assert_eq!(attr("plain"), "plain");
    }
}
