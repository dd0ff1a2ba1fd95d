//! Theme registry
//!
//! Static table of the built-in presentational themes. Themes are pure
//! data: a display name, a font stack, preview swatches for selector UIs,
//! and the CSS tokens the document renderer injects inline. There are no
//! mutation operations; the registry is fixed at compile time.

use serde::Serialize;

/// Identifier of the fallback theme used when a persisted invoice carries
/// an unknown theme id
pub const DEFAULT_THEME_ID: &str = "modern";

/// Style tokens consumed by the document renderer. Each token is a CSS
/// declaration list applied to the matching document section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleSet {
    pub container: &'static str,
    pub header: &'static str,
    pub from_to: &'static str,
    pub table_header: &'static str,
    pub table_row: &'static str,
    pub totals: &'static str,
    pub total_row: &'static str,
    pub footer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    pub font: &'static str,
    /// Swatch colors for theme pickers: background, primary, secondary
    pub preview: [&'static str; 3],
    pub styles: StyleSet,
}

pub const THEMES: [Theme; 5] = [
    Theme {
        id: "classic",
        name: "Classic",
        font: "Merriweather, Georgia, serif",
        preview: ["#f3f4f6", "#1f2937", "#e5e7eb"],
        styles: StyleSet {
            container: "background:#ffffff;color:#1f2937",
            header: "border-bottom:2px solid #1f2937;padding-bottom:16px;margin-bottom:32px",
            from_to: "font-size:13px",
            table_header: "background:#f3f4f6;border-bottom:2px solid #d1d5db;font-weight:700;color:#111827",
            table_row: "border-bottom:1px solid #e5e7eb",
            totals: "",
            total_row: "border-top:2px solid #1f2937;color:#111827",
            footer: "text-align:center;font-size:11px;color:#6b7280;padding-top:16px;margin-top:32px;border-top:1px solid #e5e7eb",
        },
    },
    Theme {
        id: "modern",
        name: "Modern",
        font: "Roboto, Helvetica, Arial, sans-serif",
        preview: ["#ffffff", "#2563eb", "#dbeafe"],
        styles: StyleSet {
            container: "background:#ffffff;color:#111827",
            header: "margin-bottom:40px",
            from_to: "font-size:13px",
            table_header: "background:#eff6ff;color:#1d4ed8;font-weight:500;text-transform:uppercase;letter-spacing:0.05em;font-size:11px",
            table_row: "border-bottom:1px solid #e5e7eb",
            totals: "",
            total_row: "color:#1d4ed8",
            footer: "text-align:center;font-size:11px;color:#6b7280;padding-top:16px;margin-top:32px",
        },
    },
    Theme {
        id: "minimal",
        name: "Minimal",
        font: "Lato, Helvetica, Arial, sans-serif",
        preview: ["#ffffff", "#000000", "#f3f4f6"],
        styles: StyleSet {
            container: "background:#ffffff;color:#000000",
            header: "margin-bottom:48px",
            from_to: "font-size:11px;margin-bottom:40px",
            table_header: "border-bottom:2px solid #000000;font-weight:700;text-transform:uppercase;letter-spacing:0.1em;font-size:11px",
            table_row: "border-bottom:1px solid #e5e7eb",
            totals: "margin-top:32px",
            total_row: "border-top:1px solid #000000",
            footer: "text-align:center;font-size:11px;color:#9ca3af;padding-top:16px;margin-top:32px",
        },
    },
    Theme {
        id: "bold",
        name: "Bold",
        font: "Montserrat, Helvetica, Arial, sans-serif",
        preview: ["#1f2937", "#facc15", "#374151"],
        styles: StyleSet {
            container: "background:#111827;color:#ffffff",
            header: "margin-bottom:32px;background:#1f2937;padding:24px;border-radius:8px",
            from_to: "font-size:13px",
            table_header: "background:#facc15;color:#111827;text-transform:uppercase;font-size:13px;font-weight:700",
            table_row: "border-bottom:1px solid #374151",
            totals: "",
            total_row: "color:#facc15",
            footer: "text-align:center;font-size:13px;color:#9ca3af;padding-top:16px;margin-top:32px;border-top:1px solid #374151",
        },
    },
    Theme {
        id: "elegant",
        name: "Elegant",
        font: "'Playfair Display', Georgia, serif",
        preview: ["#fbf9f6", "#4b4237", "#eae6e1"],
        styles: StyleSet {
            container: "background:#fbf9f6;color:#4b4237",
            header: "text-align:center;margin-bottom:48px",
            from_to: "font-size:13px",
            table_header: "border-top:1px solid #dcd6cc;border-bottom:1px solid #dcd6cc;font-weight:400;color:#4b4237;text-transform:uppercase;font-size:11px;letter-spacing:0.1em",
            table_row: "border-bottom:1px solid #eae6e1",
            totals: "",
            total_row: "color:#4b4237",
            footer: "text-align:center;font-size:13px;color:#928b81;padding-top:24px;margin-top:40px;border-top:1px solid #eae6e1",
        },
    },
];

/// The fallback theme (`modern`)
pub const DEFAULT_THEME: &Theme = &THEMES[1];

/// Look up a theme by id. Unknown or empty identifiers fall back to the
/// default theme — a corrupt or future-version persisted invoice must
/// still render.
pub fn lookup(theme_id: &str) -> &'static Theme {
    THEMES
        .iter()
        .find(|theme| theme.id == theme_id)
        .unwrap_or(DEFAULT_THEME)
}

/// All registered themes, for selector UIs
pub fn all() -> &'static [Theme] {
    &THEMES
}
