//! Edit-window contribution point.
//!
//! The host reports when a window loads and when its tabs change; the
//! contribution answers whether the "Description editor" button should be
//! attached and visible, and opens editor sessions on request. Failures are
//! logged with the window or control involved and otherwise ignored, so the
//! worst outcome is a button that never shows up.

use crate::config::EditorConfig;
use crate::editor::{DescriptionField, EditorSession};
use crate::utils::GAME_EDIT_WINDOW_ID;

#[derive(Debug, Clone)]
pub struct EditWindowContribution {
    config: EditorConfig,
    attached: bool,
    button_visible: bool,
}

impl EditWindowContribution {
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            attached: false,
            button_visible: false,
        }
    }

    /// Called for every window the host loads. Returns true when the button
    /// should be attached to it.
    pub fn on_window_loaded(&mut self, window_id: &str) -> bool {
        if window_id != GAME_EDIT_WINDOW_ID {
            tracing::trace!(window = window_id, "Ignoring window");
            return false;
        }

        tracing::debug!(window = window_id, "Attaching description editor button");
        self.attached = true;
        self.button_visible = false;
        true
    }

    /// Called when the game-edit window closes
    pub fn on_window_closed(&mut self) {
        self.attached = false;
        self.button_visible = false;
    }

    /// Called when the edit window's tab selection changes.
    ///
    /// `tab_texts` are the text blocks shown in the newly selected tab; the
    /// button is visible only on the tab carrying the description title.
    pub fn on_tab_selected(&mut self, tab_texts: &[&str]) -> bool {
        if !self.attached {
            tracing::warn!(
                control = "TabControlMain",
                "Tab selection received before the edit window was loaded"
            );
            return false;
        }

        let title = self.config.description_tab_title();
        self.button_visible = tab_texts
            .iter()
            .any(|text| text.trim().eq_ignore_ascii_case(title.trim()));
        self.button_visible
    }

    #[must_use]
    pub fn button_visible(&self) -> bool {
        self.button_visible
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Open an editor session on the window's description field
    #[must_use]
    pub fn open_editor(&self, field: &dyn DescriptionField) -> Option<EditorSession> {
        if !self.attached {
            tracing::warn!(window = GAME_EDIT_WINDOW_ID, "Editor requested without an edit window");
            return None;
        }
        Some(EditorSession::open(field, self.config.clone()))
    }
}
