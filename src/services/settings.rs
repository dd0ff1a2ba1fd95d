//! Settings service
//!
//! Default field values applied to newly created invoices, persisted as a
//! single JSON record. A save always overwrites the whole record; saves
//! happen on the explicit save action, not per keystroke.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::Currency;
use crate::storage::Store;

/// Defaults pre-filled on a newly created invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_issuer_name")]
    pub default_issuer_name: String,
    #[serde(default = "default_issuer_address")]
    pub default_issuer_address: String,
    #[serde(default = "default_tax_rate_percent")]
    pub default_tax_rate_percent: f64,
    #[serde(default)]
    pub default_currency: Currency,
}

fn default_issuer_name() -> String {
    "Your Company".to_string()
}

fn default_issuer_address() -> String {
    "123 Your Street, Your City, 12345".to_string()
}

fn default_tax_rate_percent() -> f64 {
    5.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_issuer_name: default_issuer_name(),
            default_issuer_address: default_issuer_address(),
            default_tax_rate_percent: default_tax_rate_percent(),
            default_currency: Currency::default(),
        }
    }
}

/// Service for loading and saving the settings singleton
#[derive(Clone)]
pub struct SettingsService {
    store: Store,
}

impl SettingsService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Load settings, falling back to the hard-coded defaults when the
    /// store has no (or a malformed) record
    pub async fn load(&self) -> Settings {
        match self.store.load_settings().await {
            Some(settings) => settings,
            None => {
                tracing::info!("No persisted settings, using defaults");
                Settings::default()
            }
        }
    }

    /// Save settings, overwriting the entire record
    pub async fn save(&self, settings: &Settings) -> Result<()> {
        self.store.save_settings(settings).await?;
        tracing::info!("Settings saved");
        Ok(())
    }
}
