//! Storage module
//!
//! Durable persistence for the invoice history and the settings
//! singleton: a two-record JSON store over the application data directory.

pub mod store;

pub use store::Store;
