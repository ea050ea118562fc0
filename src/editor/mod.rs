//! Editor session state and toolbar dispatch

pub mod action;
pub mod errors;
pub mod history;
pub mod session;

pub use action::TransformAction;
pub use errors::{EditorError, EditorResult};
pub use history::UndoHistory;
pub use session::{DescriptionField, EditorSession, KeyChord, SessionState};
