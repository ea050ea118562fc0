//! Image snippet builder for the "insert image" panel.
//!
//! The panel captures an [`ImageInsertion`] right before the user confirms;
//! [`build_image_html`] turns it into formatted markup ready to be spliced
//! into the description.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::formatting::html_format;
use crate::utils::{DEFAULT_TEXT_PLACEHOLDER, is_well_formed_url};

static NON_DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]+").expect("NON_DIGIT_RE: hardcoded regex is valid"));

/// How the inserted image is sized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSizing {
    /// Width as a percentage of the container
    Percent(u32),
    /// Width in pixels
    Pixels(u32),
    /// No explicit size
    None,
}

impl Default for ImageSizing {
    fn default() -> Self {
        Self::Percent(0)
    }
}

impl ImageSizing {
    /// Inline style declaration for this sizing, empty when there is none
    #[must_use]
    pub fn style(self) -> String {
        match self {
            Self::Percent(size) if size > 0 => format!("width:{size}%;"),
            Self::Pixels(size) if size > 0 => format!("width:{size}px;"),
            _ => String::new(),
        }
    }
}

/// Horizontal placement of the inserted image
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePlacement {
    Left,
    #[default]
    Center,
    Right,
}

/// Settings captured from the insert-image panel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInsertion {
    pub url: String,
    pub sizing: ImageSizing,
    pub placement: ImagePlacement,
}

impl ImageInsertion {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_sizing(mut self, sizing: ImageSizing) -> Self {
        self.sizing = sizing;
        self
    }

    #[must_use]
    pub fn with_placement(mut self, placement: ImagePlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Whether the URL is usable; the insert button stays disabled otherwise
    #[must_use]
    pub fn is_insertable(&self) -> bool {
        is_well_formed_url(self.url.trim())
    }

    /// Placement choice is meaningless for an image filling the whole width
    #[must_use]
    pub fn placement_enabled(&self) -> bool {
        !matches!(self.sizing, ImageSizing::Percent(size) if size >= 100)
    }
}

/// Keep only the digits of a size typed by the user
///
/// # Example
/// ```
/// use description_editor::html_helper::sanitize_size_input;
///
/// assert_eq!(sanitize_size_input("12a0 px"), "120");
/// ```
#[must_use]
pub fn sanitize_size_input(input: &str) -> String {
    NON_DIGIT_RE.replace_all(input, "").into_owned()
}

/// Parse a size field, treating anything unparsable as 0
#[must_use]
pub fn parse_size_input(input: &str) -> u32 {
    sanitize_size_input(input).parse().unwrap_or(0)
}

/// Build the formatted markup for an image insertion.
///
/// `placeholder` fills the text cell next to a left/right image; `None` uses
/// the default placeholder.
#[must_use]
pub fn build_image_html(insertion: &ImageInsertion, placeholder: Option<&str>) -> String {
    let src = html_escape::encode_double_quoted_attribute(insertion.url.trim());
    let image = format!(r#"<img src="{src}" style="{}">"#, insertion.sizing.style());
    let placeholder = placeholder.unwrap_or(DEFAULT_TEXT_PLACEHOLDER);

    let snippet = match insertion.placement {
        ImagePlacement::Center => format!(r#"<div style="text-align:center;">{image}</div>"#),
        ImagePlacement::Left => image_table(&image, placeholder),
        ImagePlacement::Right => image_table(placeholder, &image),
    };

    html_format(&snippet)
}

fn image_table(left: &str, right: &str) -> String {
    format!(
        r#"<table style="border:0;width:100%;border-spacing:10px;"><tr><td>{left}</td><td>{right}</td></tr></table>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizing_style() {
        assert_eq!(ImageSizing::Percent(50).style(), "width:50%;");
        assert_eq!(ImageSizing::Pixels(320).style(), "width:320px;");
        assert_eq!(ImageSizing::Pixels(0).style(), "");
        assert_eq!(ImageSizing::None.style(), "");
    }

    #[test]
    fn test_centered_image() {
        let insertion = ImageInsertion::new("https://example.com/a.png")
            .with_sizing(ImageSizing::Percent(80));
        let html = build_image_html(&insertion, None);
        assert!(html.starts_with("<div style=\"text-align:center;\">\n"));
        assert!(html.contains(r#"src="https://example.com/a.png""#));
        assert!(html.contains(r#"style="width:80%;""#));
        assert!(html.ends_with("</div>\n"));
    }

    #[test]
    fn test_left_image_has_placeholder_on_right() {
        let insertion = ImageInsertion::new("a.png").with_placement(ImagePlacement::Left);
        let html = build_image_html(&insertion, Some("Write here"));
        let image_at = html.find("<img").expect("image present");
        let text_at = html.find("Write here").expect("placeholder present");
        assert!(image_at < text_at);
        assert!(html.contains("<table"));
    }

    #[test]
    fn test_right_image_has_placeholder_on_left() {
        let insertion = ImageInsertion::new("a.png").with_placement(ImagePlacement::Right);
        let html = build_image_html(&insertion, None);
        let image_at = html.find("<img").expect("image present");
        let text_at = html.find(DEFAULT_TEXT_PLACEHOLDER).expect("placeholder present");
        assert!(text_at < image_at);
    }

    #[test]
    fn test_placement_enabled() {
        assert!(ImageInsertion::new("a.png").placement_enabled());
        let full = ImageInsertion::new("a.png").with_sizing(ImageSizing::Percent(100));
        assert!(!full.placement_enabled());
        let pixels = ImageInsertion::new("a.png").with_sizing(ImageSizing::Pixels(1000));
        assert!(pixels.placement_enabled());
    }

    #[test]
    fn test_size_input() {
        assert_eq!(sanitize_size_input("-4x2"), "42");
        assert_eq!(parse_size_input(""), 0);
        assert_eq!(parse_size_input("1 5 0"), 150);
    }

    #[test]
    fn test_is_insertable() {
        assert!(ImageInsertion::new(" https://example.com/a.png ").is_insertable());
        assert!(!ImageInsertion::new("").is_insertable());
    }
}
