//! Plugin settings and their persistence

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::errors::{PluginError, PluginResult};
use crate::utils::SETTINGS_FILE_NAME;

/// Persisted plugin settings.
///
/// The plugin currently has nothing to configure. Older releases stored a
/// version-check flag, which is still read so their files load cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescriptionEditorSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_check_version: Option<bool>,
}

/// Where settings live between runs
pub trait SettingsStore {
    /// Load stored settings, `None` when nothing has been saved yet
    ///
    /// # Errors
    /// Returns an error when stored settings exist but cannot be read.
    fn load(&self) -> PluginResult<Option<DescriptionEditorSettings>>;

    /// # Errors
    /// Returns an error when the settings cannot be written.
    fn save(&self, settings: &DescriptionEditorSettings) -> PluginResult<()>;
}

/// Settings stored as JSON in the plugin's data directory
#[derive(Debug, Clone)]
pub struct JsonFileSettingsStore {
    path: PathBuf,
}

impl JsonFileSettingsStore {
    #[must_use]
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(SETTINGS_FILE_NAME),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileSettingsStore {
    fn load(&self) -> PluginResult<Option<DescriptionEditorSettings>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let settings = serde_json::from_str(&content).map_err(|e| PluginError::Settings {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(Some(settings))
    }

    fn save(&self, settings: &DescriptionEditorSettings) -> PluginResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(settings)?)?;
        Ok(())
    }
}

/// Settings as seen by the host's settings view
#[derive(Debug)]
pub struct SettingsViewModel<S: SettingsStore> {
    store: S,
    settings: DescriptionEditorSettings,
    editing_clone: Option<DescriptionEditorSettings>,
}

impl<S: SettingsStore> SettingsViewModel<S> {
    /// Load settings from `store`, falling back to defaults when they are
    /// missing or unreadable
    pub fn new(store: S) -> Self {
        let settings = match store.load() {
            Ok(Some(settings)) => settings,
            Ok(None) => DescriptionEditorSettings::default(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to load settings, using defaults");
                DescriptionEditorSettings::default()
            }
        };
        Self {
            store,
            settings,
            editing_clone: None,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &DescriptionEditorSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut DescriptionEditorSettings {
        &mut self.settings
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing_clone.is_some()
    }

    /// Settings view opened
    pub fn begin_edit(&mut self) {
        self.editing_clone = Some(self.settings.clone());
    }

    /// Settings view closed with cancel; revert to the state at `begin_edit`
    pub fn cancel_edit(&mut self) {
        if let Some(original) = self.editing_clone.take() {
            self.settings = original;
        }
    }

    /// Settings view closed with save
    ///
    /// # Errors
    /// Returns an error when the store cannot persist the settings.
    pub fn end_edit(&mut self) -> PluginResult<()> {
        self.editing_clone = None;
        self.store.save(&self.settings)
    }

    /// Validate pending edits before the view is closed.
    ///
    /// # Errors
    /// Returns one message per invalid setting.
    pub fn verify_settings(&self) -> Result<(), Vec<String>> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_flag_is_tolerated() -> serde_json::Result<()> {
        let settings: DescriptionEditorSettings =
            serde_json::from_str(r#"{"EnableCheckVersion":true}"#)?;
        assert_eq!(settings.enable_check_version, Some(true));
        let empty: DescriptionEditorSettings = serde_json::from_str("{}")?;
        assert_eq!(empty, DescriptionEditorSettings::default());
        assert_eq!(serde_json::to_string(&empty)?, "{}");
        Ok(())
    }
}
