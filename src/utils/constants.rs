//! Shared constants for the description editor
//!
//! Default values used by the formatter, the image snippet builder and the
//! host contribution point. Keeping them here avoids magic strings scattered
//! across the transform modules.

/// Indentation unit used by the pretty-printer: 4 spaces
pub const DEFAULT_INDENT: &str = "    ";

/// Line separator emitted by the pretty-printer
pub const NEW_LINE: &str = "\n";

/// Invisible filler some storefront descriptions pad their text with
/// (U+2800 BRAILLE PATTERN BLANK).
pub const INVISIBLE_FILLER: char = '\u{2800}';

/// Placeholder written in the empty cell of a left/right image table
pub const DEFAULT_TEXT_PLACEHOLDER: &str = "Your text here!";

/// Inline style applied to the preview span wrapping the current selection
pub const DEFAULT_HIGHLIGHT_STYLE: &str = "background-color: yellow; color: black;";

/// Automation id the host gives its game-edit window
pub const GAME_EDIT_WINDOW_ID: &str = "WindowGameEdit";

/// Title of the host tab that shows the description field
pub const DEFAULT_DESCRIPTION_TAB_TITLE: &str = "Description";

/// Root section of every game-menu entry contributed by the plugin
pub const MENU_ROOT: &str = "Description Editor";

/// Settings file name inside the plugin data directory
pub const SETTINGS_FILE_NAME: &str = "config.json";
