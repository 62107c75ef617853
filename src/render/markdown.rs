//! Markdown to HTML conversion

use pulldown_cmark::{html, Event, Options, Parser};

/// Convert markdown to HTML. Raw HTML in the source is escaped, not passed through.
pub fn to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_and_emphasis() {
        assert_eq!(to_html("Hello **world**"), "<p>Hello <strong>world</strong></p>\n");
    }

    #[test]
    fn test_citation_link() {
        let html = to_html("See [[0]](https://a).");
        assert_eq!(html, "<p>See <a href=\"https://a\">[0]</a>.</p>\n");
    }

    #[test]
    fn test_bare_citation_kept() {
        assert_eq!(to_html("See [0]."), "<p>See [0].</p>\n");
    }

    #[test]
    fn test_list() {
        let html = to_html("* one\n* two\n");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn test_raw_html_escaped() {
        let html = to_html("a <script>alert(1)</script> b");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
