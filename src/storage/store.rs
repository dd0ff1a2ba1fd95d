//! Two-record JSON store
//!
//! Persists the invoice history and the settings singleton as whole JSON
//! documents in the data directory. Loads fail soft: a missing or
//! malformed record yields the empty value, so a corrupt store never
//! surfaces as an error. Saves overwrite the whole record; histories are
//! small and saves are user-triggered, so O(history) per write needs no
//! incremental scheme or partial-write recovery.
//!
//! Date fields are re-hydrated from their ISO-8601 serialized form by the
//! typed serde deserializer; additive schema evolution goes through
//! `#[serde(default)]` on the model structs.

use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::config::{HISTORY_FILE_NAME, SETTINGS_FILE_NAME};
use crate::error::Result;
use crate::model::Invoice;
use crate::services::Settings;

/// Two-record JSON store over a data directory
#[derive(Clone)]
pub struct Store {
    data_dir: PathBuf,
}

impl Store {
    /// Create a store rooted at the given data directory
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Initialize the store (create the data directory if needed)
    pub async fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir).await?;
        tracing::info!("Store initialized at: {:?}", self.data_dir);
        Ok(())
    }

    /// Load the invoice history. Missing or malformed records yield an
    /// empty history rather than an error.
    pub async fn load_history(&self) -> Vec<Invoice> {
        let history: Vec<Invoice> = self
            .read_record(&self.history_path())
            .await
            .unwrap_or_default();
        tracing::debug!("Loaded {} invoice(s) from history", history.len());
        history
    }

    /// Persist the full history, overwriting any prior value
    pub async fn save_history(&self, history: &[Invoice]) -> Result<()> {
        self.write_record(&self.history_path(), history).await?;
        tracing::debug!("Persisted {} invoice(s) to history", history.len());
        Ok(())
    }

    /// Load the settings record; `None` when absent or malformed
    pub async fn load_settings(&self) -> Option<Settings> {
        self.read_record(&self.settings_path()).await
    }

    /// Persist the settings record, overwriting any prior value
    pub async fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.write_record(&self.settings_path(), settings).await
    }

    fn history_path(&self) -> PathBuf {
        self.data_dir.join(HISTORY_FILE_NAME)
    }

    fn settings_path(&self) -> PathBuf {
        self.data_dir.join(SETTINGS_FILE_NAME)
    }

    /// Read and deserialize one record, failing soft on any error
    async fn read_record<T: serde::de::DeserializeOwned>(&self, path: &Path) -> Option<T> {
        if !path.exists() {
            return None;
        }

        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read {:?}, treating as absent: {}", path, e);
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Malformed record in {:?}, treating as absent: {}", path, e);
                None
            }
        }
    }

    /// Serialize and write one record via a temp file rename (atomic write)
    async fn write_record<T: serde::Serialize + ?Sized>(
        &self,
        path: &Path,
        value: &T,
    ) -> Result<()> {
        let content = serde_json::to_string_pretty(value)?;

        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(content.as_bytes()).await?;
        file.sync_all().await?;

        fs::rename(temp_path, path).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{generate_invoice_number, new_id, Currency, InvoiceItem};
    use crate::themes;
    use chrono::Utc;
    use tempfile::TempDir;

    async fn create_test_store() -> (Store, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::new(temp_dir.path().join("data"));
        store.initialize().await.unwrap();
        (store, temp_dir)
    }

    fn sample_invoice(client_name: &str) -> Invoice {
        let now = Utc::now();
        Invoice {
            id: new_id(),
            invoice_number: generate_invoice_number(now),
            issue_date: now,
            due_date: now + chrono::Duration::days(30),
            issuer_name: "Issuer".to_string(),
            issuer_address: "1 Issuer Way".to_string(),
            client_name: client_name.to_string(),
            client_address: "2 Client Road".to_string(),
            items: vec![InvoiceItem::new("Design work".to_string(), 2.0, 450.0)],
            notes: "Net 30".to_string(),
            tax_rate_percent: 5.0,
            theme_id: themes::DEFAULT_THEME_ID.to_string(),
            currency: Currency::Eur,
        }
    }

    #[tokio::test]
    async fn test_missing_history_loads_empty() {
        let (store, _temp) = create_test_store().await;
        assert!(store.load_history().await.is_empty());
    }

    #[tokio::test]
    async fn test_history_round_trip_preserves_every_field() {
        let (store, _temp) = create_test_store().await;

        let history = vec![sample_invoice("Acme"), sample_invoice("Globex")];
        store.save_history(&history).await.unwrap();

        let loaded = store.load_history().await;

        // Field-for-field equality, including exact date equality
        assert_eq!(loaded, history);
    }

    #[tokio::test]
    async fn test_save_overwrites_whole_history() {
        let (store, _temp) = create_test_store().await;

        store
            .save_history(&[sample_invoice("Acme"), sample_invoice("Globex")])
            .await
            .unwrap();
        let shorter = vec![sample_invoice("Initech")];
        store.save_history(&shorter).await.unwrap();

        let loaded = store.load_history().await;
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].client_name, "Initech");
    }

    #[tokio::test]
    async fn test_malformed_history_loads_empty() {
        let (store, _temp) = create_test_store().await;

        fs::write(store.history_path(), "{ not json ]")
            .await
            .unwrap();
        assert!(store.load_history().await.is_empty());

        // Wrong shape fails soft too
        fs::write(store.history_path(), r#"{"invoices": 3}"#)
            .await
            .unwrap();
        assert!(store.load_history().await.is_empty());
    }

    #[tokio::test]
    async fn test_settings_round_trip() {
        let (store, _temp) = create_test_store().await;

        assert!(store.load_settings().await.is_none());

        let settings = Settings {
            default_issuer_name: "ArchiDesigns LLC".to_string(),
            default_issuer_address: "123 Studio Lane".to_string(),
            default_tax_rate_percent: 10.0,
            default_currency: Currency::Gbp,
        };
        store.save_settings(&settings).await.unwrap();

        assert_eq!(store.load_settings().await, Some(settings));
    }

    #[tokio::test]
    async fn test_partial_settings_record_fills_defaults() {
        let (store, _temp) = create_test_store().await;

        // A record written by an older version that lacks newer fields
        fs::write(
            store.settings_path(),
            r#"{"default_issuer_name": "Old Co"}"#,
        )
        .await
        .unwrap();

        let settings = store.load_settings().await.unwrap();
        assert_eq!(settings.default_issuer_name, "Old Co");
        assert_eq!(settings.default_tax_rate_percent, 5.0);
        assert_eq!(settings.default_currency, Currency::Usd);
    }

    #[tokio::test]
    async fn test_history_record_without_optional_fields_loads() {
        let (store, _temp) = create_test_store().await;

        // Minimal record: no notes, theme, or currency fields
        let record = r#"[{
            "id": "abc",
            "invoice_number": "INV-202401-0001",
            "issue_date": "2024-01-15T10:30:00Z",
            "due_date": "2024-02-14T10:30:00Z",
            "issuer_name": "Issuer",
            "issuer_address": "",
            "client_name": "Client",
            "client_address": "",
            "items": [],
            "tax_rate_percent": 0.0
        }]"#;
        fs::write(store.history_path(), record).await.unwrap();

        let loaded = store.load_history().await;
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].theme_id, themes::DEFAULT_THEME_ID);
        assert_eq!(loaded[0].currency, Currency::Usd);
        assert!(loaded[0].notes.is_empty());
        assert_eq!(loaded[0].issue_date.to_rfc3339(), "2024-01-15T10:30:00+00:00");
    }
}
