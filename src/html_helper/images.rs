//! Image tag styling.
//!
//! Centering is a plain regex wrap. Size edits need to touch one attribute
//! among many on each `<img>`, so they go through a mutable `kuchiki` DOM.

use anyhow::{Context, Result, anyhow};
use kuchiki::NodeRef;
use kuchiki::traits::TendrilSink;
use regex::Regex;
use std::sync::LazyLock;

static IMG_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(<img\b[^>]*>)").expect("IMG_TAG_RE: hardcoded regex is valid"));

/// Declaration appended by [`add_100_percent_style`]
const FULL_WIDTH_DECLARATION: &str = "width: 100%;";

/// Wrap every `<img>` tag in its own centered `<div>`
///
/// # Example
/// ```
/// use description_editor::html_helper::center_image;
///
/// assert_eq!(
///     center_image(r#"<img src="a.png">"#),
///     r#"<div style="text-align:center;"><img src="a.png"></div>"#
/// );
/// ```
#[must_use]
pub fn center_image(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    IMG_TAG_RE
        .replace_all(html, r#"<div style="text-align:center;">${1}</div>"#)
        .into_owned()
}

/// Make every image span the full width.
///
/// For each `<img>`: the `width` attribute is removed, `width` declarations
/// are dropped from the inline style and `width: 100%;` is appended. Other
/// declarations keep their order.
///
/// # Errors
/// Returns an error if the rewritten document cannot be serialized.
pub fn add_100_percent_style(html: &str) -> Result<String> {
    rewrite_images(html, |attributes| {
        attributes.remove("width");
        let kept = retain_declarations(attributes.get("style"), &["width"]);
        attributes.insert("style", format!("{kept}{FULL_WIDTH_DECLARATION}"));
    })
}

/// Remove every explicit image size.
///
/// Drops `width`/`height` attributes and declarations. A `style` attribute
/// left without declarations is removed entirely.
///
/// # Errors
/// Returns an error if the rewritten document cannot be serialized.
pub fn remove_size_style(html: &str) -> Result<String> {
    rewrite_images(html, |attributes| {
        attributes.remove("width");
        attributes.remove("height");
        let kept = retain_declarations(attributes.get("style"), &["width", "height"]);
        if kept.is_empty() {
            attributes.remove("style");
        } else {
            attributes.insert("style", kept);
        }
    })
}

/// Parse `html`, apply `edit` to the attributes of every `<img>` and return
/// the serialized body content.
///
/// Input without any image is returned as is, so documents the parser would
/// reshape are left alone when there is nothing to edit.
fn rewrite_images<F>(html: &str, mut edit: F) -> Result<String>
where
    F: FnMut(&mut kuchiki::Attributes),
{
    if html.is_empty() {
        return Ok(String::new());
    }

    let document = kuchiki::parse_html().one(html.to_string());

    // Must collect before mutating
    let images: Vec<_> = document
        .select("img")
        .map_err(|()| anyhow!("Invalid CSS selector: img"))?
        .collect();

    if images.is_empty() {
        return Ok(html.to_string());
    }

    log::debug!("Rewriting size styles on {} images", images.len());

    for image in &images {
        let mut attributes = image.attributes.borrow_mut();
        edit(&mut attributes);
    }

    let body = document
        .select_first("body")
        .map_err(|()| anyhow!("Parsed document has no body"))?;

    serialize_children(body.as_node())
}

fn serialize_children(node: &NodeRef) -> Result<String> {
    let mut output = Vec::new();
    for child in node.children() {
        child
            .serialize(&mut output)
            .context("Failed to serialize HTML after image rewrite")?;
    }

    String::from_utf8(output).context("Failed to convert HTML bytes to UTF-8 after image rewrite")
}

/// Keep the declarations of `style` whose property is not in `dropped`.
///
/// Declarations are trimmed, empty ones skipped, and each kept one is
/// terminated by `;`.
fn retain_declarations(style: Option<&str>, dropped: &[&str]) -> String {
    let Some(style) = style else {
        return String::new();
    };

    style
        .split(';')
        .map(str::trim)
        .filter(|declaration| !declaration.is_empty())
        .filter(|declaration| {
            let property = declaration
                .split_once(':')
                .map_or(*declaration, |(property, _)| property)
                .trim();
            !dropped.iter().any(|name| property.eq_ignore_ascii_case(name))
        })
        .map(|declaration| format!("{declaration};"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_each_image() {
        let html = r#"<p><IMG src="a.png"> and <img src="b.png"/></p>"#;
        let result = center_image(html);
        assert_eq!(
            result,
            r#"<p><div style="text-align:center;"><IMG src="a.png"></div> and <div style="text-align:center;"><img src="b.png"/></div></p>"#
        );
    }

    #[test]
    fn test_full_width_overrides_width() -> Result<()> {
        let html = r#"<img width="50" style="height:10px;width:50px;">"#;
        let result = add_100_percent_style(html)?;
        assert!(!result.contains("width=\"50\""));
        assert!(result.contains(r#"style="height:10px;width: 100%;""#));
        Ok(())
    }

    #[test]
    fn test_full_width_without_style() -> Result<()> {
        let html = r#"<p>Intro</p><img src="a.png">"#;
        let result = add_100_percent_style(html)?;
        assert!(result.contains("<p>Intro</p>"));
        assert!(result.contains(r#"style="width: 100%;""#));
        Ok(())
    }

    #[test]
    fn test_full_width_keeps_max_width() -> Result<()> {
        let html = r#"<img style="max-width:200px">"#;
        let result = add_100_percent_style(html)?;
        assert!(result.contains(r#"style="max-width:200px;width: 100%;""#));
        Ok(())
    }

    #[test]
    fn test_remove_size_style() -> Result<()> {
        let html = r#"<img src="a.png" width="10" height="20" style="border:0;WIDTH: 10px;height:20px">"#;
        let result = remove_size_style(html)?;
        assert!(!result.contains("width"));
        assert!(!result.contains("height"));
        assert!(result.contains(r#"style="border:0;""#));
        Ok(())
    }

    #[test]
    fn test_remove_size_style_drops_empty_style() -> Result<()> {
        let html = r#"<img src="a.png" style="width:10px;">"#;
        let result = remove_size_style(html)?;
        assert!(!result.contains("style"));
        assert!(result.contains(r#"src="a.png""#));
        Ok(())
    }

    #[test]
    fn test_no_images_returns_input() -> Result<()> {
        let html = "<p>Nothing   here</p>";
        assert_eq!(add_100_percent_style(html)?, html);
        assert_eq!(remove_size_style(html)?, html);
        Ok(())
    }

    #[test]
    fn test_retain_declarations() {
        assert_eq!(
            retain_declarations(Some(" color:red ; width:1px;;height: 2px "), &["width"]),
            "color:red;height: 2px;"
        );
        assert_eq!(retain_declarations(None, &["width"]), "");
    }
}
