//! Services module
//!
//! Business logic that sits between the UI shell and the store.

pub mod session;
pub mod settings;

pub use session::SessionController;
pub use settings::{Settings, SettingsService};
