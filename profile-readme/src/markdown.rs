//! Markdown to HTML rendering of the generated README.

use pulldown_cmark::{html, Options, Parser};

/// Renders a Markdown document to HTML.
///
/// Inline and block HTML in the document is passed through unchanged, so
/// the generated fragments survive as-is.
#[must_use]
pub fn render_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(markdown, options);

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_markdown_blocks() {
        let html = render_html("# Hi there\n\nSome *text*.\n");

        assert!(html.contains("<h1>Hi there</h1>"));
        assert!(html.contains("<p>Some <em>text</em>.</p>"));
    }

    #[test]
    fn passes_raw_html_through() {
        let html = render_html("<p align=center><strong>Hello</strong></p>\n");

        assert!(html.contains("<p align=center><strong>Hello</strong></p>"));
    }
}
