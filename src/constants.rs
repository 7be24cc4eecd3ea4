//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Application
pub const APP_NAME: &str = "thrifty";
pub const CONFIG_FILE_NAME: &str = "thrifty.toml";
pub const DATABASE_FILE_NAME: &str = "thrifty.sqlite";
pub const LOG_FILE_NAME: &str = "thrifty.log";
pub const DATABASE_PATH_ENV: &str = "SQLITE_DB_PATH";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "€";
pub const DEFAULT_ICONS_DIR: &str = "icons";

// Success Messages
pub const SUCCESS_FLOW_CREATED: &str = "✅ Flow created";
pub const SUCCESS_FLOW_UPDATED: &str = "✅ Flow updated";
pub const SUCCESS_FLOW_DELETED: &str = "✅ Flow deleted";

// Error Messages
pub const ERROR_FLOW_CREATE_FAILED: &str = "❌ Failed to create flow";
pub const ERROR_FLOW_UPDATE_FAILED: &str = "❌ Failed to update flow";
pub const ERROR_FLOW_DELETE_FAILED: &str = "❌ Failed to delete flow";
pub const ERROR_FLOW_LOAD_FAILED: &str = "❌ Failed to load flows";
pub const ERROR_INVALID_AMOUNT: &str = "❌ Amount must be a number";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const STATUS_SHORTCUTS: &str = "n: new • e: edit • d: delete • ?: help • q: quit";
pub const DIALOG_INSTRUCTIONS: &str = "Tab: next field • ←/→: icon • Enter: save • Esc: cancel";
pub const EMPTY_LIST_HINT: &str = "No flows yet. Press 'n' to add one.";

// Icons
/// Shown for flows whose icon is not part of the loaded icon library
pub const ICON_UNKNOWN: &str = "◆";
/// Shown for flows without an icon
pub const ICON_NONE: &str = "·";

// UI Layout Constants
pub const TOOLBAR_HEIGHT: u16 = 3;
pub const STATUS_BAR_HEIGHT: u16 = 1;
pub const DIALOG_WIDTH_PERCENT: u16 = 60;
pub const DIALOG_HEIGHT_PERCENT: u16 = 60;
