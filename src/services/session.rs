//! Invoice session controller
//!
//! In-memory owner of the active invoice and the saved history. All
//! mutations flow through here; the injected store mirrors whatever the
//! controller last wrote. Operations are total — lookup misses are
//! defined no-ops, distinguishable from successes by the return value.

use chrono::{Duration, Utc};

use crate::config;
use crate::error::Result;
use crate::model::{self, Invoice, InvoiceItem};
use crate::render;
use crate::services::Settings;
use crate::storage::Store;
use crate::themes;

pub struct SessionController {
    store: Store,
    /// Newest-first; unique by invoice id
    history: Vec<Invoice>,
    active: Option<Invoice>,
}

impl SessionController {
    /// Create a controller, loading persisted history from the store.
    /// The most recent saved invoice becomes the active one.
    pub async fn new(store: Store) -> Self {
        let history = store.load_history().await;
        let active = history.first().cloned();
        Self {
            store,
            history,
            active,
        }
    }

    /// Build a fresh invoice seeded from settings and make it active.
    /// History and store are untouched until an explicit save.
    pub fn create_new(&mut self, settings: &Settings) -> &Invoice {
        let now = Utc::now();
        let invoice = Invoice {
            id: model::new_id(),
            invoice_number: model::generate_invoice_number(now),
            issue_date: now,
            due_date: now + Duration::days(config::DUE_DATE_OFFSET_DAYS),
            issuer_name: settings.default_issuer_name.clone(),
            issuer_address: settings.default_issuer_address.clone(),
            client_name: config::PLACEHOLDER_CLIENT_NAME.to_string(),
            client_address: config::PLACEHOLDER_CLIENT_ADDRESS.to_string(),
            items: vec![InvoiceItem::new(
                config::PLACEHOLDER_ITEM_DESCRIPTION.to_string(),
                config::PLACEHOLDER_ITEM_QUANTITY,
                config::PLACEHOLDER_ITEM_PRICE,
            )],
            notes: config::DEFAULT_NOTES.to_string(),
            tax_rate_percent: settings.default_tax_rate_percent,
            theme_id: themes::DEFAULT_THEME_ID.to_string(),
            currency: settings.default_currency,
        };

        tracing::info!("Created new invoice {}", invoice.invoice_number);

        &*self.active.insert(invoice)
    }

    /// Make the invoice with the given id active (as a working copy;
    /// edits reach history only through `save`). On an unknown id,
    /// returns `None` and the prior active invoice remains.
    pub fn load(&mut self, id: &str) -> Option<&Invoice> {
        let found = self.history.iter().find(|inv| inv.id == id)?.clone();

        tracing::info!("Loaded invoice {}", found.invoice_number);

        Some(&*self.active.insert(found))
    }

    /// Upsert the active invoice into history and write through to the
    /// store before returning. A new id is prepended (newest first); a
    /// known id replaces the matching entry in place, position preserved.
    /// Returns `false` when there is no active invoice.
    pub async fn save(&mut self) -> Result<bool> {
        let Some(active) = self.active.clone() else {
            return Ok(false);
        };

        match self.history.iter_mut().find(|inv| inv.id == active.id) {
            Some(existing) => *existing = active,
            None => self.history.insert(0, active),
        }

        self.store.save_history(&self.history).await?;

        if let Some(invoice) = self.active.as_ref() {
            tracing::info!("Saved invoice {}", invoice.invoice_number);
        }

        Ok(true)
    }

    /// Remove an invoice from history and persist the result. Deleting
    /// the active invoice promotes the most recent remaining entry, or
    /// clears the active invoice when history is now empty. Returns
    /// `false` (store untouched) on an unknown id.
    pub async fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.history.len();
        self.history.retain(|inv| inv.id != id);
        if self.history.len() == before {
            return Ok(false);
        }

        self.store.save_history(&self.history).await?;

        if self.active.as_ref().is_some_and(|inv| inv.id == id) {
            self.active = self.history.first().cloned();
        }

        tracing::info!("Deleted invoice {}", id);

        Ok(true)
    }

    /// Switch the active invoice's theme in place. Never auto-saves;
    /// returns `false` without an active invoice.
    pub fn set_theme(&mut self, theme_id: &str) -> bool {
        match self.active.as_mut() {
            Some(invoice) => {
                invoice.theme_id = theme_id.to_string();
                true
            }
            None => false,
        }
    }

    /// Case-insensitive history filter by client name or invoice number.
    /// An empty query yields the full history.
    pub fn search(&self, query: &str) -> Vec<&Invoice> {
        let query = query.to_lowercase();
        self.history
            .iter()
            .filter(|inv| {
                inv.client_name.to_lowercase().contains(&query)
                    || inv.invoice_number.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Save, then render the active invoice. Rendering is sequenced
    /// strictly after the persist completes, so the exported document
    /// always reflects the just-saved state. `None` without an active
    /// invoice.
    pub async fn save_and_export(&mut self) -> Result<Option<String>> {
        if !self.save().await? {
            return Ok(None);
        }

        match self.active.as_ref() {
            Some(invoice) => Ok(Some(render::render_invoice(invoice)?)),
            None => Ok(None),
        }
    }

    pub fn active(&self) -> Option<&Invoice> {
        self.active.as_ref()
    }

    /// Mutable access for the form editor's field edits
    pub fn active_mut(&mut self) -> Option<&mut Invoice> {
        self.active.as_mut()
    }

    pub fn history(&self) -> &[Invoice] {
        &self.history
    }
}
