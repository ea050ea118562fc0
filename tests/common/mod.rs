//! Test utilities shared by the description editor test suite

use std::cell::RefCell;
use std::collections::HashMap;

use description_editor::{DescriptionField, Dialogs, Game, GameDatabase, PluginError, PluginResult};
use uuid::Uuid;

/// Route tracing output to the test harness, filtered by `RUST_LOG`
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// In-memory description field
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct MemoryField(pub String);

impl DescriptionField for MemoryField {
    fn text(&self) -> String {
        self.0.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.0 = text.to_string();
    }
}

/// In-memory game database; updates for ids in `reject` fail
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct MemoryDatabase {
    pub games: HashMap<Uuid, Game>,
    pub reject: Vec<Uuid>,
    pub updates: usize,
}

#[allow(dead_code)]
impl MemoryDatabase {
    pub fn with_games(games: impl IntoIterator<Item = Game>) -> Self {
        Self {
            games: games.into_iter().map(|game| (game.id, game)).collect(),
            ..Self::default()
        }
    }

    pub fn description(&self, id: Uuid) -> Option<&str> {
        self.games.get(&id).and_then(|game| game.description.as_deref())
    }
}

impl GameDatabase for MemoryDatabase {
    fn get(&self, id: Uuid) -> Option<Game> {
        self.games.get(&id).cloned()
    }

    fn update(&mut self, game: Game) -> PluginResult<()> {
        if self.reject.contains(&game.id) {
            return Err(PluginError::GameUpdate {
                game_id: game.id,
                message: "read-only".to_string(),
            });
        }
        self.updates += 1;
        self.games.insert(game.id, game);
        Ok(())
    }
}

/// Dialogs answering every confirmation with `answer`, recording the prompts
#[allow(dead_code)]
#[derive(Debug)]
pub struct ScriptedDialogs {
    pub answer: bool,
    pub prompts: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl ScriptedDialogs {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            prompts: RefCell::new(Vec::new()),
        }
    }
}

impl Dialogs for ScriptedDialogs {
    fn confirm(&self, message: &str, _title: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        self.answer
    }
}
