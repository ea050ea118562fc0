//! Game-menu entries and the bulk transform they trigger

use serde::Serialize;
use uuid::Uuid;

use super::host::{Dialogs, GameDatabase};
use crate::editor::TransformAction;
use crate::utils::{DEFAULT_INDENT, MENU_ROOT};

/// One entry of the host's game context menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameMenuItem {
    /// Menu path, segments separated by `|`
    pub section: String,
    /// Visible label; `-` for separators
    pub description: String,
    /// `None` for separators
    pub action: Option<TransformAction>,
}

impl GameMenuItem {
    fn action(section: &str, action: TransformAction) -> Self {
        Self {
            section: section.to_string(),
            description: action.label(),
            action: Some(action),
        }
    }

    fn separator(section: &str) -> Self {
        Self {
            section: section.to_string(),
            description: "-".to_string(),
            action: None,
        }
    }

    #[must_use]
    pub fn is_separator(&self) -> bool {
        self.action.is_none()
    }
}

/// Game-menu entries, grouped under the plugin's root section
#[must_use]
pub fn game_menu_items() -> Vec<GameMenuItem> {
    let image = format!("{MENU_ROOT}|Image");
    let html = format!("{MENU_ROOT}|HTML");
    let steam = format!("{MENU_ROOT}|Steam");

    vec![
        GameMenuItem::action(&image, TransformAction::RemoveImages),
        GameMenuItem::action(&image, TransformAction::Add100PercentImages),
        GameMenuItem::action(&image, TransformAction::RemoveImageSize),
        GameMenuItem::separator(&image),
        GameMenuItem::action(&image, TransformAction::CenterImages),
        GameMenuItem::action(&html, TransformAction::HeaderToBold),
        GameMenuItem::separator(&html),
        GameMenuItem::action(&html, TransformAction::ParagraphRemove),
        GameMenuItem::action(&html, TransformAction::BrBrToP),
        GameMenuItem::separator(&html),
        GameMenuItem::action(&html, TransformAction::BrRemove { initial: 2, replacement: 1 }),
        GameMenuItem::action(&html, TransformAction::BrRemove { initial: 3, replacement: 1 }),
        GameMenuItem::action(&html, TransformAction::BrRemove { initial: 3, replacement: 2 }),
        GameMenuItem::action(&steam, TransformAction::SteamRemoveAbout),
        GameMenuItem::separator(MENU_ROOT),
        GameMenuItem::action(MENU_ROOT, TransformAction::MarkdownToHtml),
    ]
}

/// Outcome of a bulk transform over a game selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BulkReport {
    /// False when the user declined the confirmation
    pub confirmed: bool,
    pub updated: usize,
    /// Ids unknown to the database
    pub missing: usize,
    /// Games without a description
    pub skipped: usize,
    /// Transform or update failures
    pub failed: usize,
}

/// Apply `action` to the description of every game in `ids`.
///
/// The user is asked once for the whole selection. Per-game failures are
/// logged and counted; they never stop the remaining games.
pub fn run_bulk_action(
    action: &TransformAction,
    ids: &[Uuid],
    db: &mut dyn GameDatabase,
    dialogs: &dyn Dialogs,
) -> BulkReport {
    let mut report = BulkReport::default();
    if ids.is_empty() {
        return report;
    }

    let message = format!("Apply \"{}\" to {} game(s)?", action.label(), ids.len());
    if !dialogs.confirm(&message, MENU_ROOT) {
        tracing::debug!(action = %action, "Bulk action declined");
        return report;
    }
    report.confirmed = true;

    for &id in ids {
        let Some(mut game) = db.get(id) else {
            tracing::warn!(game_id = %id, "Game not found");
            report.missing += 1;
            continue;
        };

        let Some(description) = game.description.as_deref() else {
            report.skipped += 1;
            continue;
        };

        let transformed = match action.run(description, DEFAULT_INDENT) {
            Ok(transformed) => transformed,
            Err(e) => {
                tracing::warn!(game_id = %id, error = %e, "Transform failed");
                report.failed += 1;
                continue;
            }
        };

        game.description = Some(transformed);
        match db.update(game) {
            Ok(()) => report.updated += 1,
            Err(e) => {
                tracing::warn!(game_id = %id, error = %e, "Update failed");
                report.failed += 1;
            }
        }
    }

    tracing::info!(
        action = %action,
        updated = report.updated,
        missing = report.missing,
        skipped = report.skipped,
        failed = report.failed,
        "Bulk action finished"
    );
    report
}
