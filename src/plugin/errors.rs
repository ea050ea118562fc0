//! Error types for host integration

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for host integration operations
pub type PluginResult<T> = Result<T, PluginError>;

/// Error types for host integration operations
#[derive(Debug, Error)]
pub enum PluginError {
    /// The host database rejected an update
    #[error("Failed to update game {game_id}: {message}")]
    GameUpdate { game_id: Uuid, message: String },

    /// Stored settings exist but cannot be parsed
    #[error("Invalid settings file {path}: {message}")]
    Settings { path: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
