//! Invoice data model
//!
//! Rust structs for invoices and their line items, plus the pure
//! derivation functions for totals. Totals are never persisted; they are
//! recomputed from the line items on every read so a stale stored value
//! can never disagree with the items that produced it.

use chrono::{DateTime, Datelike, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config;
use crate::themes;

/// Fiat currencies selectable on an invoice.
///
/// Serialized as the upper-case ISO 4217 code (`"USD"`, `"EUR"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Jpy,
    Cad,
    Aud,
    Inr,
}

impl Currency {
    /// Every supported currency, in display order for selector UIs
    pub const ALL: [Currency; 7] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Jpy,
        Currency::Cad,
        Currency::Aud,
        Currency::Inr,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
            Currency::Inr => "INR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "\u{20ac}",
            Currency::Gbp => "\u{a3}",
            Currency::Jpy => "\u{a5}",
            Currency::Cad => "CA$",
            Currency::Aud => "A$",
            Currency::Inr => "\u{20b9}",
        }
    }

    /// Fraction digits shown for amounts (yen has none)
    pub fn decimal_places(&self) -> usize {
        match self {
            Currency::Jpy => 0,
            _ => 2,
        }
    }

    /// Render an amount for display: sign, symbol, thousands grouping,
    /// fixed fraction digits (`-$1,234.50`, `¥1,500`).
    pub fn format(&self, amount: f64) -> String {
        let rounded = format!("{:.*}", self.decimal_places(), amount.abs());
        let (whole, frac) = match rounded.split_once('.') {
            Some((whole, frac)) => (whole.to_string(), Some(frac.to_string())),
            None => (rounded, None),
        };

        let mut grouped = String::new();
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        let sign = if amount < 0.0 { "-" } else { "" };
        match frac {
            Some(frac) => format!("{}{}{}.{}", sign, self.symbol(), grouped, frac),
            None => format!("{}{}{}", sign, self.symbol(), grouped),
        }
    }
}

/// One billable row within an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    /// Opaque identifier, stable for the item's lifetime within its invoice
    pub id: String,
    pub description: String,
    /// No validation: zero and negative quantities are allowed and flow
    /// into the totals unchanged (credits and discounts are negative rows)
    pub quantity: f64,
    pub unit_price: f64,
}

impl InvoiceItem {
    pub fn new(description: String, quantity: f64, unit_price: f64) -> Self {
        Self {
            id: new_id(),
            description,
            quantity,
            unit_price,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

/// The billable document entity edited and persisted by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Opaque identifier assigned at creation; immutable, the history key
    pub id: String,
    /// Display label, auto-generated but user-editable; not guaranteed unique
    pub invoice_number: String,
    pub issue_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub issuer_name: String,
    pub issuer_address: String,
    pub client_name: String,
    pub client_address: String,
    /// Insertion order is display order
    pub items: Vec<InvoiceItem>,
    #[serde(default)]
    pub notes: String,
    pub tax_rate_percent: f64,
    /// Registry identifier; kept as a plain string so an unknown persisted
    /// value still deserializes and falls back only at render time
    #[serde(default = "default_theme_id")]
    pub theme_id: String,
    #[serde(default)]
    pub currency: Currency,
}

fn default_theme_id() -> String {
    themes::DEFAULT_THEME_ID.to_string()
}

impl Invoice {
    pub fn subtotal(&self) -> f64 {
        compute_subtotal(&self.items)
    }

    pub fn tax_amount(&self) -> f64 {
        compute_tax(self.subtotal(), self.tax_rate_percent)
    }

    pub fn total(&self) -> f64 {
        let subtotal = self.subtotal();
        compute_total(subtotal, compute_tax(subtotal, self.tax_rate_percent))
    }

    /// Append a line item (display order is insertion order)
    pub fn add_item(&mut self, item: InvoiceItem) {
        self.items.push(item);
    }

    /// Remove the line item with the given id; false if no item matches
    pub fn remove_item(&mut self, item_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != item_id);
        self.items.len() != before
    }
}

/// Sum of `quantity * unit_price` over all items; empty yields exactly 0
pub fn compute_subtotal(items: &[InvoiceItem]) -> f64 {
    items.iter().map(InvoiceItem::line_total).sum()
}

pub fn compute_tax(subtotal: f64, rate_percent: f64) -> f64 {
    subtotal * rate_percent / 100.0
}

pub fn compute_total(subtotal: f64, tax: f64) -> f64 {
    subtotal + tax
}

/// Generate a unique-enough opaque token for invoice and item ids
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Generate a display invoice number: `INV-YYYYMM-RRRR` with a uniform
/// random zero-padded 4-digit suffix. Collisions are possible and
/// accepted; this is a label, not a key.
pub fn generate_invoice_number(now: DateTime<Utc>) -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..10_000);
    format!(
        "{}-{}{:02}-{:04}",
        config::INVOICE_NUMBER_PREFIX,
        now.year(),
        now.month(),
        suffix
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn item(quantity: f64, unit_price: f64) -> InvoiceItem {
        InvoiceItem::new("Work".to_string(), quantity, unit_price)
    }

    fn invoice_with(items: Vec<InvoiceItem>, tax_rate_percent: f64) -> Invoice {
        let now = Utc::now();
        Invoice {
            id: new_id(),
            invoice_number: generate_invoice_number(now),
            issue_date: now,
            due_date: now,
            issuer_name: "Issuer".to_string(),
            issuer_address: String::new(),
            client_name: "Client".to_string(),
            client_address: String::new(),
            items,
            notes: String::new(),
            tax_rate_percent,
            theme_id: themes::DEFAULT_THEME_ID.to_string(),
            currency: Currency::Usd,
        }
    }

    #[test]
    fn test_subtotal_of_empty_items_is_zero() {
        assert_eq!(compute_subtotal(&[]), 0.0);
    }

    #[test]
    fn test_subtotal_sums_line_totals() {
        let items = vec![item(2.0, 10.0), item(3.0, 5.5)];
        assert_eq!(compute_subtotal(&items), 36.5);
    }

    #[test]
    fn test_total_identity_holds() {
        for &(subtotal, rate) in &[(1500.0, 5.0), (-200.0, 10.0), (123.45, 0.0)] {
            let tax = compute_tax(subtotal, rate);
            assert_eq!(compute_total(subtotal, tax), subtotal + subtotal * rate / 100.0);
        }
    }

    #[test]
    fn test_standard_invoice_scenario() {
        let invoice = invoice_with(vec![item(10.0, 150.0)], 5.0);
        assert_eq!(invoice.subtotal(), 1500.0);
        assert_eq!(invoice.tax_amount(), 75.0);
        assert_eq!(invoice.total(), 1575.0);
    }

    #[test]
    fn test_negative_quantity_flows_into_totals() {
        let invoice = invoice_with(vec![item(-2.0, 50.0), item(5.0, 20.0)], 5.0);
        assert_eq!(invoice.subtotal(), 0.0);
        assert_eq!(invoice.tax_amount(), 0.0);
        assert_eq!(invoice.total(), 0.0);
    }

    #[test]
    fn test_remove_item_by_id() {
        let mut invoice = invoice_with(vec![item(1.0, 10.0), item(2.0, 20.0)], 0.0);
        let removed_id = invoice.items[0].id.clone();

        assert!(invoice.remove_item(&removed_id));
        assert_eq!(invoice.items.len(), 1);
        assert_eq!(invoice.items[0].quantity, 2.0);

        // Unknown id is a no-op
        assert!(!invoice.remove_item("missing"));
        assert_eq!(invoice.items.len(), 1);
    }

    #[test]
    fn test_invoice_number_format() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
        let number = generate_invoice_number(now);

        assert!(number.starts_with("INV-202403-"));
        let suffix = number.rsplit('-').next().unwrap();
        assert_eq!(suffix.len(), 4);
        assert!(suffix.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_new_ids_are_unique() {
        let a = new_id();
        let b = new_id();
        assert_ne!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn test_currency_codes_round_trip_serde() {
        for currency in Currency::ALL {
            let json = serde_json::to_string(&currency).unwrap();
            assert_eq!(json, format!("\"{}\"", currency.code()));
            let back: Currency = serde_json::from_str(&json).unwrap();
            assert_eq!(back, currency);
        }
    }

    #[test]
    fn test_currency_formatting() {
        assert_eq!(Currency::Usd.format(1234.5), "$1,234.50");
        assert_eq!(Currency::Usd.format(0.0), "$0.00");
        assert_eq!(Currency::Eur.format(-100.0), "-\u{20ac}100.00");
        assert_eq!(Currency::Jpy.format(1500.0), "\u{a5}1,500");
        assert_eq!(Currency::Inr.format(1234567.891), "\u{20b9}1,234,567.89");
    }
}
