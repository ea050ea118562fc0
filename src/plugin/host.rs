//! Contracts the host application implements.
//!
//! The host owns the game database, modal dialogs and plugin lifecycle. These
//! traits are the only surface the plugin sees of it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::PluginResult;
use super::menu::GameMenuItem;

/// A game record as far as this plugin cares
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: Uuid,
    pub name: String,
    /// HTML description; `None` when the game has none
    pub description: Option<String>,
}

impl Game {
    #[must_use]
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description,
        }
    }
}

/// Access to the host's game database
pub trait GameDatabase {
    fn get(&self, id: Uuid) -> Option<Game>;

    /// Persist a modified game
    ///
    /// # Errors
    /// Returns an error when the host refuses the update.
    fn update(&mut self, game: Game) -> PluginResult<()>;
}

/// Modal dialogs shown by the host
pub trait Dialogs {
    /// Ask a yes/no question, returning true on yes
    fn confirm(&self, message: &str, title: &str) -> bool;
}

/// Plugin lifecycle as driven by the host.
///
/// Every hook defaults to a no-op; the description editor only contributes
/// game-menu items and the edit-window button.
pub trait GenericPlugin {
    fn id(&self) -> Uuid;

    fn on_game_selected(&mut self, _games: &[Uuid]) {}

    fn on_game_installed(&mut self, _game: &Game) {}

    fn on_game_uninstalled(&mut self, _game: &Game) {}

    fn on_game_starting(&mut self, _game: &Game) {}

    fn on_game_started(&mut self, _game: &Game) {}

    fn on_game_stopped(&mut self, _game: &Game, _elapsed_seconds: u64) {}

    fn on_library_updated(&mut self) {}

    fn on_application_started(&mut self) {}

    fn on_application_stopped(&mut self) {}

    fn game_menu_items(&self, _games: &[Uuid]) -> Vec<GameMenuItem> {
        Vec::new()
    }
}
