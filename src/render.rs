//! Invoice document renderer
//!
//! Renders an invoice into a self-contained printable HTML document: a
//! deterministic function of the invoice and its theme with no hidden
//! state. The template is embedded at compile time to ensure
//! availability; user-entered text is HTML-escaped, theme tokens come
//! from the static registry and are injected verbatim.

use tera::{Context, Tera};

use crate::error::Result;
use crate::model::Invoice;
use crate::themes;

// Embed template at compile time to ensure availability
const INVOICE_TEMPLATE: &str = include_str!("../templates/invoice.html.tera");
const TEMPLATE_NAME: &str = "invoice.html";

/// Pre-formatted table row handed to the template
#[derive(serde::Serialize)]
struct ItemRow {
    description: String,
    quantity: String,
    unit_price: String,
    line_total: String,
}

/// Render the invoice as a printable HTML document. Unknown theme ids
/// fall back to the default theme.
pub fn render_invoice(invoice: &Invoice) -> Result<String> {
    let theme = themes::lookup(&invoice.theme_id);

    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, INVOICE_TEMPLATE)?;

    let items: Vec<ItemRow> = invoice
        .items
        .iter()
        .map(|item| ItemRow {
            description: item.description.clone(),
            quantity: trim_number(item.quantity),
            unit_price: invoice.currency.format(item.unit_price),
            line_total: invoice.currency.format(item.line_total()),
        })
        .collect();

    let mut context = Context::new();
    context.insert("invoice", invoice);
    context.insert("theme", theme);
    context.insert("items", &items);
    context.insert("issue_date", &invoice.issue_date.format("%b %d, %Y").to_string());
    context.insert("due_date", &invoice.due_date.format("%b %d, %Y").to_string());
    context.insert("tax_rate", &trim_number(invoice.tax_rate_percent));
    context.insert("subtotal", &invoice.currency.format(invoice.subtotal()));
    context.insert("tax_amount", &invoice.currency.format(invoice.tax_amount()));
    context.insert("total", &invoice.currency.format(invoice.total()));

    let html = tera.render(TEMPLATE_NAME, &context)?;

    tracing::debug!("Rendered invoice {} ({} bytes)", invoice.invoice_number, html.len());

    Ok(html)
}

/// Display a numeric value without a trailing ".0" on whole numbers
fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
