//! Regex-level tag rewrites: tag removal, headers, paragraphs and line breaks.
//!
//! These work on raw text and never build a DOM, so they tolerate broken
//! fragments but have no notion of nesting. Tag names match case-insensitively.

use regex::Regex;
use std::sync::LazyLock;

use super::formatting::html_format_remove;

static HEADER_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<h[1-6](?:\s[^>]*)?>").expect("HEADER_OPEN_RE: hardcoded regex is valid")
});

static HEADER_CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</h[1-6]\s*>").expect("HEADER_CLOSE_RE: hardcoded regex is valid")
});

/// A maximal run of `<br>`, `<br/>` or `<br />` tags
static BREAK_RUN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:<br\s*/?>)+").expect("BREAK_RUN_RE: hardcoded regex is valid")
});

static EMPTY_PARAGRAPH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<p>\s*</p>").expect("EMPTY_PARAGRAPH_RE: hardcoded regex is valid")
});

/// Two adjacent break tags in any spelling: `<br>`, `</br>`, `<br/>`, `<br />`
static DOUBLE_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?br\s*/?></?br\s*/?>").expect("DOUBLE_BREAK_RE: hardcoded regex is valid")
});

/// Build the opening/closing patterns for `tag`.
///
/// The name is escaped and must be followed by whitespace, `/` or `>`, so
/// `b` never swallows `<br>` and `p` never swallows `<pre>`.
fn tag_patterns(tag: &str) -> Option<(Regex, Regex)> {
    let name = regex::escape(tag.trim());
    if name.is_empty() {
        return None;
    }

    let open = Regex::new(&format!(r"(?i)<{name}(?:[\s/][^>]*)?>"));
    let close = Regex::new(&format!(r"(?i)</{name}(?:\s[^>]*)?>"));

    match (open, close) {
        (Ok(open), Ok(close)) => Some((open, close)),
        (Err(e), _) | (_, Err(e)) => {
            log::warn!("Failed to build tag pattern for '{}': {}", tag, e);
            None
        }
    }
}

/// Replace every opening `tag` with `open_replacement` and every closing
/// `tag` with `close_replacement`.
///
/// Content between the tags is left in place.
///
/// # Example
/// ```
/// use description_editor::html_helper::remove_tag;
///
/// let html = "<p>One</p><P class=\"x\">Two</P>";
/// assert_eq!(remove_tag(html, "p", "", "<br>"), "One<br>Two<br>");
/// ```
#[must_use]
pub fn remove_tag(html: &str, tag: &str, open_replacement: &str, close_replacement: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let Some((open, close)) = tag_patterns(tag) else {
        return html.to_string();
    };

    let result = open.replace_all(html, regex::NoExpand(open_replacement));
    let result = close.replace_all(&result, regex::NoExpand(close_replacement));
    result.into_owned()
}

/// Remove every `tag` without replacement, keeping its content
#[must_use]
pub fn strip_tag(html: &str, tag: &str) -> String {
    remove_tag(html, tag, "", "")
}

/// Turn `<h1>`…`<h6>` headers into bold text framed by line breaks.
///
/// Opening headers become `<br><br><b>`, closing headers `</b><br>`. The
/// heading level is lost.
#[must_use]
pub fn header_to_bold(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let result = HEADER_OPEN_RE.replace_all(html, "<br><br><b>");
    let result = HEADER_CLOSE_RE.replace_all(&result, "</b><br>");
    result.into_owned()
}

/// Drop `<p>` tags, ending every paragraph with a double line break
#[must_use]
pub fn paragraph_remove(html: &str) -> String {
    remove_tag(html, "p", "", "<br><br>")
}

/// Turn double line breaks into paragraphs.
///
/// The text is flattened, split on every pair of adjacent break tags, and each
/// segment is wrapped in `<p>…</p>`. Empty paragraphs are dropped, both those
/// already in a segment and segments left with no content.
#[must_use]
pub fn br_br_to_p(html: &str) -> String {
    let flat = html_format_remove(html);
    if flat.is_empty() {
        return flat;
    }

    DOUBLE_BREAK_RE
        .split(&flat)
        .map(|segment| EMPTY_PARAGRAPH_RE.replace_all(segment, ""))
        .filter(|segment| !segment.trim().is_empty())
        .map(|segment| format!("<p>{}</p>", segment.trim()))
        .collect()
}

/// Replace every run of exactly `count_initial` consecutive `<br>` tags with
/// `count_final` `<br>` tags.
///
/// Runs are matched whole: with `count_initial = 2`, a run of three breaks is
/// left as is. The text is flattened first; `count_initial = 0` only
/// flattens.
#[must_use]
pub fn br_remove(html: &str, count_initial: usize, count_final: usize) -> String {
    let flat = html_format_remove(html);
    if flat.is_empty() || count_initial == 0 {
        return flat;
    }

    let replacement = "<br>".repeat(count_final);
    BREAK_RUN_RE
        .replace_all(&flat, |caps: &regex::Captures| {
            let run = &caps[0];
            // One `<` per break tag in the run
            if run.matches('<').count() == count_initial {
                replacement.clone()
            } else {
                run.to_string()
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_tag_case_insensitive() {
        let html = r#"<IMG src="a.png"><p>Text</p><img src="b.png"/>"#;
        assert_eq!(strip_tag(html, "img"), "<p>Text</p>");
    }

    #[test]
    fn test_remove_tag_does_not_match_prefix() {
        let html = "<b>bold</b><br><pre>code</pre>";
        assert_eq!(strip_tag(html, "b"), "bold<br><pre>code</pre>");
        assert_eq!(strip_tag(html, "p"), html);
    }

    #[test]
    fn test_remove_tag_replacement_is_literal() {
        let html = "<span>x</span>";
        assert_eq!(remove_tag(html, "span", "$1", "$2"), "$1x$2");
    }

    #[test]
    fn test_header_to_bold() {
        assert_eq!(header_to_bold("<h1>Title</h1>"), "<br><br><b>Title</b><br>");
        assert_eq!(
            header_to_bold(r#"<H3 class="x">Sub</H3><head>"#),
            "<br><br><b>Sub</b><br><head>"
        );
    }

    #[test]
    fn test_paragraph_remove() {
        assert_eq!(paragraph_remove("<p>One</p><p>Two</p>"), "One<br><br>Two<br><br>");
    }

    #[test]
    fn test_br_br_to_p() {
        let html = "First line<br><br>Second<BR/><br />Third<br><br>";
        assert_eq!(br_br_to_p(html), "<p>First line</p><p>Second</p><p>Third</p>");
    }

    #[test]
    fn test_br_br_to_p_drops_empty_paragraphs() {
        assert_eq!(br_br_to_p("<p></p>text<br><br>more"), "<p>text</p><p>more</p>");
        assert_eq!(br_br_to_p("<P> </P><br><br>x"), "<p>x</p>");
    }

    #[test]
    fn test_br_br_to_p_single_break_kept() {
        assert_eq!(br_br_to_p("a<br>b"), "<p>a<br>b</p>");
    }

    #[test]
    fn test_br_remove_exact_run() {
        assert_eq!(br_remove("a<br><br>b", 2, 1), "a<br>b");
        assert_eq!(br_remove("a<br><br><br>b", 3, 2), "a<br><br>b");
    }

    #[test]
    fn test_br_remove_longer_run_is_not_collapsed() {
        assert_eq!(br_remove("a<br><br><br>b", 2, 1), "a<br><br><br>b");
        assert_eq!(br_remove("a<br><br><br>b<br><br>c", 2, 1), "a<br><br><br>b<br>c");
    }

    #[test]
    fn test_br_remove_mixed_spellings_form_one_run() {
        assert_eq!(br_remove("a<BR/><br />b", 2, 1), "a<br>b");
        assert_eq!(br_remove("a<br>b<br>c", 1, 0), "abc");
    }

    #[test]
    fn test_br_remove_zero_initial() {
        assert_eq!(br_remove("a<br>\n    b", 0, 1), "a<br>b");
    }
}
