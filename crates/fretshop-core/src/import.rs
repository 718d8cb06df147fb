//! # Service Bulk Import
//!
//! Parses pasted CSV/TSV text into previewable service-catalog rows.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Paste from spreadsheet                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse_import_rows() ── every row kept, valid or not ──► preview table  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  valid rows → ServiceInput[] → bulk create call (out of scope)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Parsing never fails: bad rows are flagged with a message and shown in
//! the preview so the user can fix their spreadsheet, not a stack trace.
//!
//! Expected columns, in order: name, service type, price, service, notes.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::ServiceInput;

/// One parsed row of pasted import data, valid or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ParsedServiceRow {
    /// Zero-based index of the source line (header included in the count).
    pub row_index: usize,
    pub name: String,
    pub service_type: String,
    /// Price column exactly as pasted, for the preview table.
    pub price_string: String,
    /// Parsed price in cents.
    pub price_cents: i64,
    pub service: String,
    pub notes: String,
    pub is_valid: bool,
    pub error_message: Option<String>,
}

impl ParsedServiceRow {
    /// Converts a valid row into the create payload. Empty optional columns
    /// become `None` rather than empty strings.
    pub fn to_input(&self) -> ServiceInput {
        ServiceInput {
            name: self.name.clone(),
            service_type: non_empty(&self.service_type),
            service: non_empty(&self.service),
            notes: non_empty(&self.notes),
            price_cents: Some(self.price_cents),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Parses pasted CSV/TSV text into rows.
///
/// ## Rules
/// - Blank lines are dropped
/// - Delimiter is `\t` when the first line contains a tab, `,` otherwise
/// - One layer of surrounding quotes (single or double) is stripped per cell
/// - A first row whose name cell reads `name`, `service` or `service name`
///   (any case) is treated as a header and skipped
/// - A row is invalid when the name is empty or the price doesn't parse to
///   a positive amount; the row is kept either way
pub fn parse_import_rows(text: &str) -> Vec<ParsedServiceRow> {
    let lines: Vec<&str> = text.trim().lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.is_empty() {
        return Vec::new();
    }

    let delimiter = if lines[0].contains('\t') { '\t' } else { ',' };

    let mut rows = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        let cells: Vec<String> = line.split(delimiter).map(clean_cell).collect();

        if index == 0 && is_header(cells.first().map(String::as_str).unwrap_or("")) {
            continue;
        }

        let cell = |i: usize| cells.get(i).cloned().unwrap_or_default();
        let name = cell(0);
        let service_type = cell(1);
        let price_string = cell(2);
        let service = cell(3);
        let notes = cell(4);

        let mut is_valid = true;
        let mut error_message = None;
        let mut price_cents = 0;

        if name.trim().is_empty() {
            is_valid = false;
            error_message = Some("Service name is required".to_string());
        }

        if is_valid {
            price_cents = Money::parse(&price_string).cents();
            if price_cents <= 0 {
                is_valid = false;
                error_message = Some("Price must be greater than zero".to_string());
            }
        }

        rows.push(ParsedServiceRow {
            row_index: index,
            name,
            service_type,
            price_string,
            price_cents,
            service,
            notes,
            is_valid,
            error_message,
        });
    }

    rows
}

/// Trims a cell and strips one layer of surrounding quotes.
fn clean_cell(cell: &str) -> String {
    let cell = cell.trim();
    let cell = cell.strip_prefix(&['"', '\''][..]).unwrap_or(cell);
    let cell = cell.strip_suffix(&['"', '\''][..]).unwrap_or(cell);
    cell.to_string()
}

fn is_header(first_cell: &str) -> bool {
    matches!(
        first_cell.to_lowercase().as_str(),
        "name" | "service" | "service name"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_rows() {
        let rows = parse_import_rows("Fret level,Fretwork,150.00,Full level and crown,6-string\nSetup,Maintenance,75.00,,");
        assert_eq!(rows.len(), 2);
        assert!(rows[0].is_valid);
        assert_eq!(rows[0].name, "Fret level");
        assert_eq!(rows[0].service_type, "Fretwork");
        assert_eq!(rows[0].price_cents, 15000);
        assert_eq!(rows[1].price_cents, 7500);
    }

    #[test]
    fn test_tab_delimiter_detected_from_first_line() {
        let rows = parse_import_rows("Fret level\tFretwork\t150.00\t\t\nSetup\tMaintenance\t75.00\t\t");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].service_type, "Fretwork");
        assert_eq!(rows[1].price_cents, 7500);
    }

    #[test]
    fn test_header_row_skipped() {
        let rows = parse_import_rows("Name,Type,Price\nSetup,Maintenance,75.00");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Setup");
        // Row index counts the skipped header
        assert_eq!(rows[0].row_index, 1);
    }

    #[test]
    fn test_header_variants() {
        assert!(is_header("name"));
        assert!(is_header("Service Name"));
        assert!(is_header("SERVICE"));
        assert!(!is_header("Fret level"));
    }

    #[test]
    fn test_quoted_cells() {
        let rows = parse_import_rows("\"Fret level\",'Fretwork',\"150.00\"");
        assert_eq!(rows[0].name, "Fret level");
        assert_eq!(rows[0].service_type, "Fretwork");
        assert_eq!(rows[0].price_cents, 15000);
    }

    #[test]
    fn test_missing_name_flagged() {
        let rows = parse_import_rows(",Fretwork,150.00");
        assert!(!rows[0].is_valid);
        assert_eq!(rows[0].error_message.as_deref(), Some("Service name is required"));
    }

    #[test]
    fn test_zero_or_unparseable_price_flagged() {
        let rows = parse_import_rows("Setup,Maintenance,0.00\nRestring,Maintenance,free");
        assert!(!rows[0].is_valid);
        assert!(!rows[1].is_valid);
        assert_eq!(rows[0].error_message.as_deref(), Some("Price must be greater than zero"));
    }

    #[test]
    fn test_blank_lines_and_empty_input() {
        assert!(parse_import_rows("").is_empty());
        assert!(parse_import_rows("  \n\n  ").is_empty());
        let rows = parse_import_rows("Setup,Maintenance,75.00\n\nRestring,Maintenance,25.00");
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_to_input_drops_empty_optionals() {
        let rows = parse_import_rows("Setup,,75.00,,");
        let input = rows[0].to_input();
        assert_eq!(input.name, "Setup");
        assert_eq!(input.service_type, None);
        assert_eq!(input.notes, None);
        assert_eq!(input.price_cents, Some(7500));
    }
}
