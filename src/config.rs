//! Application configuration constants
//!
//! Central location for the configuration constants and pre-fill values
//! used throughout the core.

// ===== Persistence =====

/// File name of the persisted invoice history, relative to the data directory
pub const HISTORY_FILE_NAME: &str = "invoices.json";

/// File name of the persisted default settings, relative to the data directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";

// ===== New Invoice Defaults =====

/// Days between the issue date and the pre-filled due date
pub const DUE_DATE_OFFSET_DAYS: i64 = 30;

/// Prefix of auto-generated invoice numbers (`INV-YYYYMM-RRRR`)
pub const INVOICE_NUMBER_PREFIX: &str = "INV";

/// Client fields pre-filled on a new invoice
pub const PLACEHOLDER_CLIENT_NAME: &str = "Client Company";
pub const PLACEHOLDER_CLIENT_ADDRESS: &str = "456 Client Avenue, Client City, 54321";

/// Line item pre-filled on a new invoice
pub const PLACEHOLDER_ITEM_DESCRIPTION: &str = "Service Description";
pub const PLACEHOLDER_ITEM_QUANTITY: f64 = 1.0;
pub const PLACEHOLDER_ITEM_PRICE: f64 = 100.0;

/// Notes text pre-filled on a new invoice
pub const DEFAULT_NOTES: &str =
    "Thank you for your business. Please make payment within 30 days.";
