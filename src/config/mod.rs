//! Configuration module for editor sessions
//!
//! This module provides the `EditorConfig` struct and its validating builder
//! with sensible defaults for every field.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::EditorConfigBuilder;
pub use types::{EditorConfig, PreviewTheme};
