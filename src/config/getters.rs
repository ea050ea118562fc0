//! Getter methods for `EditorConfig`

use super::types::{EditorConfig, PreviewTheme};

impl EditorConfig {
    #[must_use]
    pub fn indent(&self) -> &str {
        &self.indent
    }

    #[must_use]
    pub fn text_placeholder(&self) -> &str {
        &self.text_placeholder
    }

    #[must_use]
    pub fn highlight_style(&self) -> &str {
        &self.highlight_style
    }

    #[must_use]
    pub fn description_tab_title(&self) -> &str {
        &self.description_tab_title
    }

    #[must_use]
    pub fn preview_theme(&self) -> &PreviewTheme {
        &self.preview_theme
    }
}

impl PreviewTheme {
    /// Stylesheet applied to the preview document
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "body {{ font-family: {}; font-size: {}px; color: {}; }} a {{ color: {}; }}",
            self.font_family, self.font_size, self.text_color, self.link_color
        )
    }
}
