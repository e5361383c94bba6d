//! Markdown rendering for free-text content blocks

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};

/// Renders the prose fields of the portfolio (tagline, now, about)
pub struct MarkdownRenderer {
    options: Options,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self {
            options: Options::ENABLE_STRIKETHROUGH | Options::ENABLE_SMART_PUNCTUATION,
        }
    }

    /// Render markdown to HTML. Raw HTML in the source is escaped, so the
    /// output is safe to embed unescaped.
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options).map(escape_raw_html);
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }

    /// Render markdown without the paragraph wrapper, for text placed
    /// inside an existing block element
    pub fn render_inline(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options)
            .filter(|event| {
                !matches!(
                    event,
                    Event::Start(Tag::Paragraph) | Event::End(TagEnd::Paragraph)
                )
            })
            .map(escape_raw_html);
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out.trim_end().to_string()
    }
}

/// Turn raw HTML into plain text so `push_html` escapes it
fn escape_raw_html(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_paragraph() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("Hello *world*");
        assert_eq!(html.trim(), "<p>Hello <em>world</em></p>");
    }

    #[test]
    fn test_render_inline_drops_paragraph() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render_inline("Reading **Murakami**");
        assert_eq!(html, "Reading <strong>Murakami</strong>");
    }

    #[test]
    fn test_render_escapes_html_text() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render_inline("AAC < ALAC & friends");
        assert!(html.contains("&lt;"));
        assert!(html.contains("&amp;"));
    }

    #[test]
    fn test_render_inline_escapes_raw_tags() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render_inline("Now <script>alert(1)</script> reading");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_render_escapes_html_block() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("<div onclick=\"x()\">hi</div>\n\nAfter");
        assert!(!html.contains("<div"));
        assert!(html.contains("&lt;div"));
        assert!(html.contains("<p>After</p>"));
    }
}
