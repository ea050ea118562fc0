//! Core configuration types for the description editor
//!
//! `EditorConfig` is handed to every `EditorSession` at construction. It
//! carries what the host used to provide through global resource lookups:
//! formatting indent, localized placeholder text and preview theme.

use serde::{Deserialize, Serialize};

use crate::utils::{
    DEFAULT_DESCRIPTION_TAB_TITLE, DEFAULT_HIGHLIGHT_STYLE, DEFAULT_INDENT,
    DEFAULT_TEXT_PLACEHOLDER,
};

/// Theme values applied to the live HTML preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewTheme {
    pub font_size: f64,
    pub font_family: String,
    /// CSS color of body text
    pub text_color: String,
    /// CSS color of links
    pub link_color: String,
}

impl Default for PreviewTheme {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            font_family: "Trebuchet MS".to_string(),
            text_color: "#ffffff".to_string(),
            link_color: "#48a8ff".to_string(),
        }
    }
}

/// Main configuration struct for editor sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Indent unit of the pretty-printer.
    ///
    /// **INVARIANT:** non-empty and whitespace only (validated in builder),
    /// so flattening always strips it again.
    pub(crate) indent: String,

    /// Text written in the empty cell of a left/right image table
    pub(crate) text_placeholder: String,

    /// Inline style of the preview span marking the current selection
    pub(crate) highlight_style: String,

    /// Title of the host tab that shows the description field
    pub(crate) description_tab_title: String,

    pub(crate) preview_theme: PreviewTheme,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            text_placeholder: DEFAULT_TEXT_PLACEHOLDER.to_string(),
            highlight_style: DEFAULT_HIGHLIGHT_STYLE.to_string(),
            description_tab_title: DEFAULT_DESCRIPTION_TAB_TITLE.to_string(),
            preview_theme: PreviewTheme::default(),
        }
    }
}

impl EditorConfig {
    #[must_use]
    pub fn builder() -> super::builder::EditorConfigBuilder {
        super::builder::EditorConfigBuilder::new()
    }
}
