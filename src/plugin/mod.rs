//! Integration with the game-library host.
//!
//! The host drives the plugin through [`GenericPlugin`] and exposes its game
//! database and dialogs through [`GameDatabase`] and [`Dialogs`]. The plugin
//! contributes a button to the game-edit window ([`EditWindowContribution`])
//! and bulk transforms in the game menu ([`menu`]).

pub mod contribution;
pub mod errors;
pub mod host;
pub mod menu;
pub mod settings;

pub use contribution::EditWindowContribution;
pub use errors::{PluginError, PluginResult};
pub use host::{Dialogs, Game, GameDatabase, GenericPlugin};
pub use menu::{BulkReport, GameMenuItem, game_menu_items, run_bulk_action};
pub use settings::{
    DescriptionEditorSettings, JsonFileSettingsStore, SettingsStore, SettingsViewModel,
};

use uuid::Uuid;

use crate::config::EditorConfig;

/// Identifier the host registers this plugin under
pub const PLUGIN_ID: Uuid = Uuid::from_u128(0x7600a469_4616_4547_94b8_0c330db02b8f);

/// The description editor plugin as loaded by the host
#[derive(Debug)]
pub struct DescriptionEditorPlugin<S: SettingsStore> {
    settings: SettingsViewModel<S>,
    edit_window: EditWindowContribution,
}

impl<S: SettingsStore> DescriptionEditorPlugin<S> {
    pub fn new(store: S, config: EditorConfig) -> Self {
        tracing::info!(plugin_id = %PLUGIN_ID, "Loading description editor");
        Self {
            settings: SettingsViewModel::new(store),
            edit_window: EditWindowContribution::new(config),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &SettingsViewModel<S> {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SettingsViewModel<S> {
        &mut self.settings
    }

    #[must_use]
    pub fn edit_window(&self) -> &EditWindowContribution {
        &self.edit_window
    }

    pub fn edit_window_mut(&mut self) -> &mut EditWindowContribution {
        &mut self.edit_window
    }

    /// Run a game-menu item over the selected games. Separators do nothing.
    pub fn run_menu_item(
        &self,
        item: &GameMenuItem,
        ids: &[Uuid],
        db: &mut dyn GameDatabase,
        dialogs: &dyn Dialogs,
    ) -> BulkReport {
        match &item.action {
            Some(action) => run_bulk_action(action, ids, db, dialogs),
            None => BulkReport::default(),
        }
    }
}

impl<S: SettingsStore> GenericPlugin for DescriptionEditorPlugin<S> {
    fn id(&self) -> Uuid {
        PLUGIN_ID
    }

    fn game_menu_items(&self, _games: &[Uuid]) -> Vec<GameMenuItem> {
        game_menu_items()
    }
}
