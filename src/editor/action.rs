//! Toolbar and game-menu actions mapped onto the transform library.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::{EditorError, EditorResult};
use crate::html_helper;
use crate::utils::DEFAULT_INDENT;

/// One text transform the user can trigger, from the editor toolbar or in bulk
/// from the game menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TransformAction {
    HtmlFormat,
    HtmlFormatRemove,
    MarkdownToHtml,
    HeaderToBold,
    ParagraphRemove,
    BrBrToP,
    BrRemove { initial: usize, replacement: usize },
    SteamRemoveAbout,
    RemoveTag { tag: String },
    RemoveImages,
    Add100PercentImages,
    RemoveImageSize,
    CenterImages,
}

impl TransformAction {
    /// Every toolbar action in toolbar order
    #[must_use]
    pub fn toolbar() -> Vec<TransformAction> {
        vec![
            Self::HtmlFormat,
            Self::HtmlFormatRemove,
            Self::MarkdownToHtml,
            Self::HeaderToBold,
            Self::ParagraphRemove,
            Self::BrBrToP,
            Self::BrRemove { initial: 2, replacement: 1 },
            Self::BrRemove { initial: 3, replacement: 1 },
            Self::BrRemove { initial: 3, replacement: 2 },
            Self::SteamRemoveAbout,
            Self::RemoveImages,
            Self::Add100PercentImages,
            Self::RemoveImageSize,
            Self::CenterImages,
        ]
    }

    /// Short human-readable label
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::HtmlFormat => "Format HTML".to_string(),
            Self::HtmlFormatRemove => "Remove HTML formatting".to_string(),
            Self::MarkdownToHtml => "Markdown to HTML".to_string(),
            Self::HeaderToBold => "Headers to bold".to_string(),
            Self::ParagraphRemove => "<p>...</p> => ...<br><br>".to_string(),
            Self::BrBrToP => "...<br><br> => <p>...</p>".to_string(),
            Self::BrRemove { initial, replacement } => format!(
                "{} => {}",
                "<br>".repeat(*initial),
                "<br>".repeat(*replacement)
            ),
            Self::SteamRemoveAbout => "Remove \"About the Game\"".to_string(),
            Self::RemoveTag { tag } => format!("Remove <{tag}>"),
            Self::RemoveImages => "Remove images".to_string(),
            Self::Add100PercentImages => "Images at 100% width".to_string(),
            Self::RemoveImageSize => "Remove image sizes".to_string(),
            Self::CenterImages => "Center images".to_string(),
        }
    }

    /// Run the transform with the default indent
    ///
    /// # Errors
    /// Returns an error when a DOM-level transform cannot serialize its output.
    pub fn apply(&self, html: &str) -> Result<String> {
        self.apply_with_indent(html, DEFAULT_INDENT)
    }

    /// Run the transform, pretty-printing with `indent`
    ///
    /// # Errors
    /// Returns an error when a DOM-level transform cannot serialize its output.
    pub fn apply_with_indent(&self, html: &str, indent: &str) -> Result<String> {
        let result = match self {
            Self::HtmlFormat => html_helper::html_format_with_indent(html, indent),
            Self::HtmlFormatRemove => html_helper::html_format_remove_with_indent(html, indent),
            Self::MarkdownToHtml => html_helper::markdown_to_html(html),
            Self::HeaderToBold => html_helper::header_to_bold(html),
            Self::ParagraphRemove => html_helper::paragraph_remove(html),
            Self::BrBrToP => html_helper::br_br_to_p(html),
            Self::BrRemove { initial, replacement } => {
                html_helper::br_remove(html, *initial, *replacement)
            }
            Self::SteamRemoveAbout => html_helper::steam_remove_about(html),
            Self::RemoveTag { tag } => html_helper::strip_tag(html, tag),
            Self::RemoveImages => html_helper::strip_tag(html, "img"),
            Self::Add100PercentImages => html_helper::add_100_percent_style(html)?,
            Self::RemoveImageSize => html_helper::remove_size_style(html)?,
            Self::CenterImages => html_helper::center_image(html),
        };
        Ok(result)
    }
}

impl TransformAction {
    /// Run the transform, reporting failures as [`EditorError::Transform`]
    ///
    /// # Errors
    /// Returns [`EditorError::Transform`] carrying the action label and the
    /// full error chain.
    pub fn run(&self, html: &str, indent: &str) -> EditorResult<String> {
        self.apply_with_indent(html, indent)
            .map_err(|e| EditorError::Transform {
                action: self.label(),
                message: format!("{e:#}"),
            })
    }
}

impl fmt::Display for TransformAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatches_to_transforms() -> Result<()> {
        assert_eq!(
            TransformAction::HeaderToBold.apply("<h2>x</h2>")?,
            "<br><br><b>x</b><br>"
        );
        assert_eq!(
            TransformAction::BrRemove { initial: 2, replacement: 1 }.apply("a<br><br>b")?,
            "a<br>b"
        );
        assert_eq!(TransformAction::RemoveImages.apply(r#"a<img src="x">b"#)?, "ab");
        Ok(())
    }

    #[test]
    fn test_run_reports_transform_errors() -> EditorResult<()> {
        let html = TransformAction::RemoveImageSize.run(r#"<img width="9">"#, DEFAULT_INDENT)?;
        assert_eq!(html, "<img>");
        Ok(())
    }

    #[test]
    fn test_labels() {
        let action = TransformAction::BrRemove { initial: 3, replacement: 2 };
        assert_eq!(action.to_string(), "<br><br><br> => <br><br>");
        assert_eq!(TransformAction::RemoveTag { tag: "span".into() }.label(), "Remove <span>");
    }

    #[test]
    fn test_serde_tagging() -> Result<()> {
        let action = TransformAction::BrRemove { initial: 2, replacement: 1 };
        let json = serde_json::to_string(&action)?;
        assert_eq!(json, r#"{"action":"br_remove","initial":2,"replacement":1}"#);
        let back: TransformAction = serde_json::from_str(&json)?;
        assert_eq!(back, action);
        Ok(())
    }

    #[test]
    fn test_toolbar_contains_every_break_variant() {
        let toolbar = TransformAction::toolbar();
        assert_eq!(toolbar.len(), 14);
        assert!(toolbar.contains(&TransformAction::BrRemove { initial: 3, replacement: 2 }));
    }
}
