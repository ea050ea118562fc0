//! Linear undo/redo history of buffer snapshots.

/// Snapshots of the edited text plus a cursor on the current one.
///
/// Recording after an undo discards every snapshot past the cursor.
/// **INVARIANT:** `cursor < snapshots.len()` whenever the history is not empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndoHistory {
    snapshots: Vec<String>,
    cursor: usize,
}

impl UndoHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` as the newest snapshot and move the cursor onto it.
    pub fn record(&mut self, text: impl Into<String>) {
        if !self.snapshots.is_empty() {
            self.snapshots.truncate(self.cursor + 1);
        }
        self.snapshots.push(text.into());
        self.cursor = self.snapshots.len() - 1;
    }

    /// Step back one snapshot, returning it
    pub fn undo(&mut self) -> Option<&str> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.current()
    }

    /// Step forward one snapshot, returning it
    pub fn redo(&mut self) -> Option<&str> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.current()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.snapshots.get(self.cursor).map(String::as_str)
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    #[must_use]
    pub fn snapshots(&self) -> &[String] {
        &self.snapshots
    }
}
