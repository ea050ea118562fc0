//! Flattening and pretty-printing of description HTML.
//!
//! Two inverse operations share this module:
//! - [`html_format_remove`] collapses a fragment to a single line with minimal
//!   whitespace (regex-level, tolerant of any input)
//! - [`html_format`] flattens, parses the fragment into a DOM with `scraper`
//!   and writes it back one node per line with nested indentation

use ego_tree::NodeRef;
use regex::Regex;
use scraper::node::Node;
use scraper::{ElementRef, Html};
use std::sync::LazyLock;

use crate::utils::{DEFAULT_INDENT, INVISIBLE_FILLER, NEW_LINE};

// ============================================================================
// Regex Patterns for Flattening
// ============================================================================

// Indent units at the start of a line. Other leading whitespace is kept so a
// text node written as `indent + " text"` keeps its space.
static DEFAULT_INDENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    indent_regex(DEFAULT_INDENT).expect("DEFAULT_INDENT_RE: hardcoded regex is valid")
});

static NEWLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n?|\n").expect("NEWLINE_RE: hardcoded regex is valid"));

static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN_RE: hardcoded regex is valid"));

// Covers `>   <` as well as text followed by a tag
static SPACE_BEFORE_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+<").expect("SPACE_BEFORE_TAG_RE: hardcoded regex is valid"));

/// Elements whose text children are written verbatim
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Collapse an HTML fragment to a single line.
///
/// Steps, in order:
/// 1. remove the invisible U+2800 filler
/// 2. strip 4-space indent units at the start of every line
/// 3. remove `\r\n`, `\r` and `\n`
/// 4. collapse every whitespace run to one space
/// 5. remove whitespace in front of any `<`
///
/// Flattening is a fixed point: flattening already-flat text returns it as is.
///
/// # Example
/// ```
/// use description_editor::html_helper::html_format_remove;
///
/// let html = "<div>\n    <p>Hello   world</p>\n</div>";
/// assert_eq!(html_format_remove(html), "<div><p>Hello world</p></div>");
/// ```
#[must_use]
pub fn html_format_remove(html: &str) -> String {
    flatten_with(html, &DEFAULT_INDENT_RE)
}

/// Collapse an HTML fragment pretty-printed with `indent`.
///
/// Same as [`html_format_remove`], except that line-leading runs of `indent`
/// are stripped along with the default 4-space unit.
#[must_use]
pub fn html_format_remove_with_indent(html: &str, indent: &str) -> String {
    if indent.is_empty() || indent == DEFAULT_INDENT {
        return flatten_with(html, &DEFAULT_INDENT_RE);
    }

    match Regex::new(&format!(
        r"(?m)^(?:{}|{})+",
        regex::escape(indent),
        regex::escape(DEFAULT_INDENT)
    )) {
        Ok(re) => flatten_with(html, &re),
        Err(e) => {
            log::warn!("Failed to build indent pattern for {:?}: {}", indent, e);
            flatten_with(html, &DEFAULT_INDENT_RE)
        }
    }
}

fn indent_regex(indent: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?m)^(?:{})+", regex::escape(indent)))
}

fn flatten_with(html: &str, line_indent: &Regex) -> String {
    if html.is_empty() {
        return String::new();
    }

    let result: String = html.chars().filter(|&c| c != INVISIBLE_FILLER).collect();
    let result = line_indent.replace_all(&result, "");
    let result = NEWLINE_RE.replace_all(&result, "");
    let result = WHITESPACE_RUN_RE.replace_all(&result, " ");
    let result = SPACE_BEFORE_TAG_RE.replace_all(&result, "<");

    result.into_owned()
}

/// Pretty-print an HTML fragment with the default 4-space indent.
#[must_use]
pub fn html_format(html: &str) -> String {
    html_format_with_indent(html, DEFAULT_INDENT)
}

/// Pretty-print an HTML fragment using `indent` once per nesting level.
///
/// The fragment is flattened first, then parsed with the tolerant html5ever
/// parser behind `scraper`. Every node lands on its own line. Nodes without
/// children (void elements, empty elements, text, comments) are written as
/// their outer markup; elements with children get an opening line, their
/// children one level deeper, and a closing line.
#[must_use]
pub fn html_format_with_indent(html: &str, indent: &str) -> String {
    let flat = html_format_remove_with_indent(html, indent);
    if flat.is_empty() {
        return flat;
    }

    let document = Html::parse_fragment(&flat);
    let root = document.root_element();

    let mut output = String::with_capacity(flat.len() * 2);
    for child in root.children() {
        write_node(child, 0, indent, &mut output);
    }

    log::trace!("Formatted {} bytes of HTML into {} bytes", flat.len(), output.len());
    output
}

fn push_indent(output: &mut String, indent: &str, depth: usize) {
    for _ in 0..depth {
        output.push_str(indent);
    }
}

fn write_node(node: NodeRef<'_, Node>, depth: usize, indent: &str, output: &mut String) {
    match node.value() {
        Node::Text(text) => {
            push_indent(output, indent, depth);
            if is_raw_text_parent(node) {
                output.push_str(text);
            } else {
                push_escaped_text(output, text);
            }
            output.push_str(NEW_LINE);
        }
        Node::Comment(comment) => {
            push_indent(output, indent, depth);
            output.push_str("<!--");
            output.push_str(comment);
            output.push_str("-->");
            output.push_str(NEW_LINE);
        }
        Node::Element(element) => {
            push_indent(output, indent, depth);

            if !node.has_children() {
                if let Some(leaf) = ElementRef::wrap(node) {
                    output.push_str(&leaf.html());
                }
                output.push_str(NEW_LINE);
                return;
            }

            output.push('<');
            output.push_str(element.name());
            for (name, value) in element.attrs() {
                output.push(' ');
                output.push_str(name);
                output.push_str("=\"");
                output.push_str(&html_escape::encode_double_quoted_attribute(value));
                output.push('"');
            }
            output.push('>');
            output.push_str(NEW_LINE);

            for child in node.children() {
                write_node(child, depth + 1, indent, output);
            }

            push_indent(output, indent, depth);
            output.push_str("</");
            output.push_str(element.name());
            output.push('>');
            output.push_str(NEW_LINE);
        }
        _ => {
            // Document, Fragment, Doctype, ProcessingInstruction - skip
        }
    }
}

fn is_raw_text_parent(node: NodeRef<'_, Node>) -> bool {
    node.parent()
        .and_then(|parent| parent.value().as_element())
        .is_some_and(|element| RAW_TEXT_ELEMENTS.contains(&element.name()))
}

// Non-breaking spaces go back out as entities so a later flatten does not
// fold them into ordinary whitespace
fn push_escaped_text(output: &mut String, text: &str) {
    let escaped = html_escape::encode_text(text);
    if escaped.contains('\u{a0}') {
        output.push_str(&escaped.replace('\u{a0}', "&nbsp;"));
    } else {
        output.push_str(&escaped);
    }
}
