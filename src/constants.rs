//! Constants used throughout the application
//!
//! This module centralizes default values and user-facing text so the
//! service, configuration and web layers agree on them.

// Item defaults
/// Color assigned to an item when none (or a blank one) is supplied
pub const DEFAULT_COLOR: &str = "#dff";
/// Number of items returned by a query when no limit is given
pub const DEFAULT_LIMIT: u64 = 10;

// Display Constants
/// Smallest page size accepted from configuration
pub const PAGE_SIZE_MIN: u64 = 1;
/// Largest page size accepted from configuration
pub const PAGE_SIZE_MAX: u64 = 100;

// Server defaults
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

// Application directories and files
pub const APP_DIR_NAME: &str = "todolist";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOCAL_CONFIG_FILE_NAME: &str = "todolist.toml";
pub const DATABASE_FILE_NAME: &str = "todolist.db";
pub const LOG_FILE_NAME: &str = "todolist.log";
pub const IN_MEMORY_DATABASE_URL: &str = "sqlite::memory:";

// Validation Error Messages
pub const ERROR_TITLE_REQUIRED: &str = "The Title field is required.";

// Page Titles
pub const PAGE_TITLE_INDEX: &str = "To-do items";
pub const PAGE_TITLE_DETAILS: &str = "Details";
pub const PAGE_TITLE_CREATE: &str = "Create";
pub const PAGE_TITLE_EDIT: &str = "Edit";
pub const PAGE_TITLE_DELETE: &str = "Delete";

// Error Pages
pub const ERROR_PAGE_NOT_FOUND: &str = "The requested to-do item does not exist.";
pub const ERROR_PAGE_CONFLICT: &str =
    "The item was changed or removed by someone else while you were editing it. Reload and try again.";
pub const ERROR_PAGE_STORE: &str = "The to-do store is currently unavailable.";

// UI Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
