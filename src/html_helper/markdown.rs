//! Markdown to HTML conversion for descriptions imported as Markdown.
//!
//! Conversion is delegated to `pulldown-cmark`. Descriptions from some sources
//! mix Markdown with `<br>` line breaks and expect images to span the full
//! width, so the text is cleaned before rendering and images are rewritten
//! while rendering.

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};
use regex::Regex;
use std::sync::LazyLock;

/// `<br>` glued in front of a list marker
static LIST_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br\s*/?>[ \t]*([*+\-][ \t])").expect("LIST_BREAK_RE: hardcoded regex is valid")
});

/// Markdown image syntax the renderer left untouched (inside raw HTML blocks)
static MARKDOWN_IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[[^\]]*\]\s*\(((?:ftp|https?)://[^\s)]+)\)")
        .expect("MARKDOWN_IMAGE_RE: hardcoded regex is valid")
});

fn full_width_image(url: &str) -> String {
    format!(
        r#"<img src="{}" width="100%"/>"#,
        html_escape::encode_double_quoted_attribute(url)
    )
}

/// Convert Markdown (possibly mixed with HTML) to HTML.
///
/// 1. `<br>` immediately before a `*`, `-` or `+` list marker is replaced by
///    a newline so the marker starts a list item
/// 2. the text is rendered with `pulldown-cmark` (tables and strikethrough on)
/// 3. every image becomes `<img src="url" width="100%"/>`, dropping alt text
///
/// # Example
/// ```
/// use description_editor::html_helper::markdown_to_html;
///
/// let html = markdown_to_html("**Bold** ![shot](https://cdn.example.com/a.jpg)");
/// assert!(html.contains("<strong>Bold</strong>"));
/// assert!(html.contains(r#"<img src="https://cdn.example.com/a.jpg" width="100%"/>"#));
/// ```
#[must_use]
pub fn markdown_to_html(markdown: &str) -> String {
    if markdown.is_empty() {
        return String::new();
    }

    let source = LIST_BREAK_RE.replace_all(markdown, "\n$1");

    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(&source, options);

    // Alt text arrives as events between Start(Image) and End(Image)
    let mut image_depth = 0usize;
    let events = parser.filter_map(move |event| match event {
        Event::Start(Tag::Image { dest_url, .. }) => {
            image_depth += 1;
            if image_depth == 1 {
                Some(Event::InlineHtml(CowStr::from(full_width_image(&dest_url))))
            } else {
                None
            }
        }
        Event::End(TagEnd::Image) => {
            image_depth = image_depth.saturating_sub(1);
            None
        }
        _ if image_depth > 0 => None,
        other => Some(other),
    });

    let mut rendered = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut rendered, events);

    let result = MARKDOWN_IMAGE_RE.replace_all(&rendered, |caps: &regex::Captures| {
        full_width_image(&caps[1])
    });

    log::debug!(
        "Converted {} bytes of Markdown into {} bytes of HTML",
        markdown.len(),
        result.len()
    );
    result.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_basic_markdown() {
        let html = markdown_to_html("# Title\n\nSome *text*.");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>text</em>"));
    }

    #[test]
    fn test_images_are_full_width() {
        let html = markdown_to_html("![cover art](https://example.com/cover.png)");
        assert!(html.contains(r#"<img src="https://example.com/cover.png" width="100%"/>"#));
        assert!(!html.contains("cover art"));
    }

    #[test]
    fn test_break_before_list_marker() {
        let html = markdown_to_html("Features:<br>* Fast<br>* Small");
        assert!(html.contains("<li>Fast</li>"));
        assert!(html.contains("<li>Small</li>"));
        assert!(!html.contains("<br>"));
    }

    #[test]
    fn test_literal_image_inside_html_block() {
        let html = markdown_to_html("<div>\n![x](https://example.com/a.png)\n</div>");
        assert!(html.contains(r#"<img src="https://example.com/a.png" width="100%"/>"#));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(markdown_to_html(""), "");
    }
}
