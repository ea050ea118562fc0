//! Description editor for game-library descriptions.
//!
//! [`html_helper`] holds the stateless HTML transforms. [`editor`] wraps them
//! in an editing session with preview and undo history. [`plugin`] connects
//! both to the host application.

pub mod config;
pub mod editor;
pub mod html_helper;
pub mod plugin;
pub mod utils;

pub use config::{EditorConfig, EditorConfigBuilder, PreviewTheme};
pub use editor::{
    DescriptionField, EditorError, EditorResult, EditorSession, KeyChord, SessionState,
    TransformAction, UndoHistory,
};
pub use html_helper::{ImageInsertion, ImagePlacement, ImageSizing};
pub use plugin::{
    BulkReport, DescriptionEditorPlugin, DescriptionEditorSettings, Dialogs, Game, GameDatabase,
    GameMenuItem, GenericPlugin, JsonFileSettingsStore, PLUGIN_ID, PluginError, PluginResult,
    SettingsStore, SettingsViewModel,
};
