//! Editor session: buffer, live preview, undo history and action dispatch.
//!
//! Every write to the buffer goes through one path. Unless the write replays
//! a snapshot (undo/redo), it records a new snapshot. The history starts
//! empty: the pristine description is not recorded, so the first edit creates
//! the first snapshot and undo can never return past it.

use regex::Regex;
use std::sync::LazyLock;

use super::action::TransformAction;
use super::errors::{EditorError, EditorResult};
use super::history::UndoHistory;
use crate::config::EditorConfig;
use crate::html_helper::{ImageInsertion, build_image_html};
use crate::utils::{NEW_LINE, char_byte_offset, slice_chars};

// Selections touching tag markup are not highlighted in the preview
static SELECTION_OPENS_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.?<").expect("SELECTION_OPENS_TAG_RE: hardcoded regex is valid"));

static SELECTION_CLOSES_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">.?$").expect("SELECTION_CLOSES_TAG_RE: hardcoded regex is valid"));

static SELECTION_ENDS_SLASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/.?$").expect("SELECTION_ENDS_SLASH_RE: hardcoded regex is valid"));

/// The host text field the session was opened from
pub trait DescriptionField {
    fn text(&self) -> String;
    fn set_text(&mut self, text: &str);
}

/// Session state over the buffer.
///
/// `Dirty` and `Replaying` only last for one buffer write, so between calls
/// [`EditorSession::state`] always reports `Idle`. Every transition is traced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Buffer matches the latest snapshot
    Idle,
    /// Buffer changed and the snapshot is being recorded
    Dirty,
    /// A snapshot is being written back; the write is not recorded
    Replaying,
}

/// A key press forwarded by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub control: bool,
    pub key: char,
}

impl KeyChord {
    #[must_use]
    pub fn ctrl(key: char) -> Self {
        Self { control: true, key }
    }
}

#[derive(Debug, Clone)]
pub struct EditorSession {
    config: EditorConfig,
    buffer: String,
    preview: String,
    /// Caret position in characters
    caret: usize,
    state: SessionState,
    history: UndoHistory,
}

impl EditorSession {
    /// Start a session on `description`
    #[must_use]
    pub fn new(description: impl Into<String>, config: EditorConfig) -> Self {
        let buffer = description.into();
        tracing::debug!(len = buffer.len(), "Opening description editor session");
        Self {
            config,
            preview: buffer.clone(),
            buffer,
            caret: 0,
            state: SessionState::Idle,
            history: UndoHistory::new(),
        }
    }

    /// Start a session seeded from the host's description field
    #[must_use]
    pub fn open(field: &dyn DescriptionField, config: EditorConfig) -> Self {
        Self::new(field.text(), config)
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// HTML shown in the live preview
    #[must_use]
    pub fn preview(&self) -> &str {
        &self.preview
    }

    /// Standalone page rendering the preview with the configured theme
    #[must_use]
    pub fn preview_document(&self) -> String {
        format!(
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><style>{}</style></head><body>{}</body></html>",
            self.config.preview_theme().css(),
            self.preview
        )
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[must_use]
    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn set_caret(&mut self, caret: usize) {
        self.caret = caret.min(self.buffer.chars().count());
    }

    /// Whether the undo button is enabled
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether the redo button is enabled
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Replace the buffer with text typed by the user
    pub fn edit(&mut self, text: impl Into<String>) {
        self.write_buffer(text.into());
    }

    /// Run `action` on the buffer and write the result back.
    ///
    /// # Errors
    /// Returns [`EditorError::Transform`] when the transform fails; the buffer
    /// and history are left untouched.
    pub fn apply(&mut self, action: &TransformAction) -> EditorResult<()> {
        let result = action
            .run(&self.buffer, self.config.indent())
            .inspect_err(|e| tracing::warn!(action = %action, error = %e, "Transform failed, buffer unchanged"))?;

        tracing::debug!(action = %action, before = self.buffer.len(), after = result.len(), "Applied transform");
        self.write_buffer(result);
        Ok(())
    }

    /// Insert an image snippet at the caret.
    ///
    /// The snippet is framed by newlines. A caret at 0 inserts at the start.
    /// The caret moves past the inserted text.
    ///
    /// # Errors
    /// Returns [`EditorError::InvalidImageUrl`] when the URL is empty or
    /// malformed; nothing is inserted.
    pub fn insert_image(&mut self, insertion: &ImageInsertion) -> EditorResult<()> {
        if !insertion.is_insertable() {
            return Err(EditorError::InvalidImageUrl(insertion.url.clone()));
        }

        let snippet = format!(
            "{NEW_LINE}{}{NEW_LINE}",
            build_image_html(insertion, Some(self.config.text_placeholder()))
        );

        let at = char_byte_offset(&self.buffer, self.caret);
        let mut text = String::with_capacity(self.buffer.len() + snippet.len());
        text.push_str(&self.buffer[..at]);
        text.push_str(&snippet);
        text.push_str(&self.buffer[at..]);

        let caret = self.caret + snippet.chars().count();
        self.write_buffer(text);
        self.set_caret(caret);
        Ok(())
    }

    /// Step back one snapshot. Returns false when undo is disabled.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo().map(str::to_string) else {
            return false;
        };
        self.set_state(SessionState::Replaying);
        self.write_buffer(snapshot);
        true
    }

    /// Step forward one snapshot. Returns false when redo is disabled.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo().map(str::to_string) else {
            return false;
        };
        self.set_state(SessionState::Replaying);
        self.write_buffer(snapshot);
        true
    }

    /// Handle Ctrl+Z / Ctrl+Y. Returns whether the key press was consumed.
    pub fn handle_shortcut(&mut self, chord: KeyChord) -> bool {
        if !chord.control {
            return false;
        }
        match chord.key.to_ascii_lowercase() {
            'z' if self.can_undo() => self.undo(),
            'y' if self.can_redo() => self.redo(),
            _ => false,
        }
    }

    /// Highlight the selection (in characters) in the preview.
    ///
    /// The preview is reset to the buffer first. Every occurrence of the
    /// selected text is wrapped in a highlight span, unless the selection
    /// starts at or ends on tag markup.
    pub fn select(&mut self, start: usize, length: usize) {
        self.preview = self.buffer.clone();

        let selected = slice_chars(&self.buffer, start, length);
        if selected.is_empty() {
            return;
        }

        let extended_start = start.saturating_sub(1);
        let extended = slice_chars(&self.buffer, extended_start, length.saturating_add(2));

        if SELECTION_OPENS_TAG_RE.is_match(extended)
            || SELECTION_CLOSES_TAG_RE.is_match(extended)
            || SELECTION_ENDS_SLASH_RE.is_match(extended)
        {
            return;
        }

        let highlighted = format!(
            r#"<span style="{}">{selected}</span>"#,
            self.config.highlight_style()
        );
        self.preview = self.buffer.replace(selected, &highlighted);
    }

    /// Write the buffer back to the host field and end the session
    pub fn commit(self, field: &mut dyn DescriptionField) {
        tracing::debug!(len = self.buffer.len(), snapshots = self.history.len(), "Committing description");
        field.set_text(&self.buffer);
    }

    /// End the session without touching the host field
    pub fn cancel(self) {
        tracing::debug!(snapshots = self.history.len(), "Discarding description edits");
    }

    fn write_buffer(&mut self, text: String) {
        self.buffer = text;
        self.preview.clone_from(&self.buffer);
        self.caret = self.caret.min(self.buffer.chars().count());

        if self.state == SessionState::Replaying {
            self.set_state(SessionState::Idle);
            return;
        }

        self.set_state(SessionState::Dirty);
        self.history.record(self.buffer.clone());
        self.set_state(SessionState::Idle);
    }

    fn set_state(&mut self, next: SessionState) {
        tracing::trace!(from = ?self.state, to = ?next, "Session state change");
        self.state = next;
    }
}
