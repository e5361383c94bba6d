//! Markup escaping helpers

/// Escape XML special characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Strip invalid XML control characters (except tab, newline, carriage return)
/// XML 1.0 only allows: #x9 | #xA | #xD | [#x20-#xD7FF] | [#xE000-#xFFFD] | [#x10000-#x10FFFF]
pub fn strip_invalid_xml_chars(s: &str) -> String {
    s.chars()
        .filter(|&c| {
            c == '\t'
                || c == '\n'
                || c == '\r'
                || ('\u{0020}'..='\u{D7FF}').contains(&c)
                || ('\u{E000}'..='\u{FFFD}').contains(&c)
                || ('\u{10000}'..='\u{10FFFF}').contains(&c)
        })
        .collect()
}

/// `mailto:` href for an address; empty input stays empty
pub fn mailto(email: &str) -> String {
    let email = email.trim();
    if email.is_empty() || email.starts_with("mailto:") {
        email.to_string()
    } else {
        format!("mailto:{}", email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("AAC & <ALAC>"), "AAC &amp; &lt;ALAC&gt;");
        assert_eq!(escape_xml("Lou's \"day\""), "Lou&apos;s &quot;day&quot;");
    }

    #[test]
    fn test_strip_invalid_xml_chars() {
        assert_eq!(strip_invalid_xml_chars("a\u{0001}b\nc"), "ab\nc");
    }

    #[test]
    fn test_mailto() {
        assert_eq!(mailto("hello@example.com"), "mailto:hello@example.com");
        assert_eq!(mailto("mailto:a@b.c"), "mailto:a@b.c");
        assert_eq!(mailto(" "), "");
    }
}
