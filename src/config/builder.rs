//! Validating builder for `EditorConfig`
//!
//! Every field has a default; `build()` only fails when a value would break
//! an invariant the transforms rely on.

use anyhow::{Result, anyhow};

use super::types::{EditorConfig, PreviewTheme};

#[derive(Debug, Clone, Default)]
pub struct EditorConfigBuilder {
    config: EditorConfig,
}

impl EditorConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.config.indent = indent.into();
        self
    }

    #[must_use]
    pub fn text_placeholder(mut self, text: impl Into<String>) -> Self {
        self.config.text_placeholder = text.into();
        self
    }

    #[must_use]
    pub fn highlight_style(mut self, style: impl Into<String>) -> Self {
        self.config.highlight_style = style.into();
        self
    }

    #[must_use]
    pub fn description_tab_title(mut self, title: impl Into<String>) -> Self {
        self.config.description_tab_title = title.into();
        self
    }

    #[must_use]
    pub fn preview_theme(mut self, theme: PreviewTheme) -> Self {
        self.config.preview_theme = theme;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the indent is empty, a single space or contains
    /// non-whitespace, if the highlight style contains a double quote, or if
    /// the preview font size is not a positive number.
    pub fn build(self) -> Result<EditorConfig> {
        let config = self.config;

        if config.indent.is_empty() || !config.indent.chars().all(char::is_whitespace) {
            return Err(anyhow!(
                "Invalid indent {:?}: must be non-empty whitespace",
                config.indent
            ));
        }

        // Flattening would strip the space a text node starts with
        if config.indent == " " {
            return Err(anyhow!("Invalid indent {:?}: a single space is ambiguous", config.indent));
        }

        if config.highlight_style.contains('"') {
            return Err(anyhow!(
                "Invalid highlight style {:?}: must not contain double quotes",
                config.highlight_style
            ));
        }

        if !(config.preview_theme.font_size.is_finite() && config.preview_theme.font_size > 0.0) {
            return Err(anyhow!(
                "Invalid preview font size {}: must be positive",
                config.preview_theme.font_size
            ));
        }

        Ok(config)
    }
}
