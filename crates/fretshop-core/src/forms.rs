//! # Forms Module
//!
//! Text-field representations of invoices and work orders, and the
//! conversions between them and the domain types.
//!
//! ## Why String Fields?
//! Form inputs hold text while the user types. Totals shown live in the
//! editor are computed straight from that text, so the preview and the
//! persisted amounts always come from the same parse:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Invoice editor                                                         │
//! │                                                                         │
//! │  { qty: "1", unit_price: "150.00", discount: "10" }                     │
//! │        │                                  │                             │
//! │        │ line_total() (live preview)      │ to_line_item() (on save)    │
//! │        ▼                                  ▼                             │
//! │     $135.00                    { quantity: 1, unit_price_cents:         │
//! │                                  15000, discount_percent: 10 }          │
//! │                                                                         │
//! │  Work-order editor                                                      │
//! │                                                                         │
//! │  WorkOrderForm { cost: "150.00", sheet: RepairSheet }                   │
//! │        │ to_input()                                                     │
//! │        ▼                                                                │
//! │  WorkOrderInput { cost_cents: 15000, notes: sheet.encode() }            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{self, clamp_percent, parse_percent, Money};
use crate::sheet::RepairSheet;
use crate::types::{
    CustomerId, Invoice, InvoiceInput, InvoiceLineItem, WorkOrder, WorkOrderInput, WorkOrderStatus,
};

// =============================================================================
// Invoice Line Items
// =============================================================================

/// One editable invoice row. All fields are raw text exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLineItemForm {
    pub description: String,
    /// Decimal text, expected to be a non-negative count.
    pub quantity: String,
    /// Decimal text, dollars.
    pub unit_price: String,
    /// Decimal text, percentage 0-100.
    pub discount: String,
}

/// A fresh row: one unit, zero dollars, no discount.
impl Default for InvoiceLineItemForm {
    fn default() -> Self {
        InvoiceLineItemForm {
            description: String::new(),
            quantity: "1".to_string(),
            unit_price: "0.00".to_string(),
            discount: "0".to_string(),
        }
    }
}

impl InvoiceLineItemForm {
    /// Live total for this row. Parsing is total, so a half-typed row
    /// simply previews as `$0.00` rather than erroring.
    pub fn line_total(&self) -> Money {
        money::line_total(
            parse_quantity(&self.quantity),
            Money::parse(&self.unit_price),
            parse_percent(&self.discount),
        )
    }

    /// Converts the row to the persisted line item. The discount is clamped
    /// into [0, 100] and floored to a whole percent.
    pub fn to_line_item(&self) -> InvoiceLineItem {
        InvoiceLineItem {
            description: self.description.clone(),
            quantity: parse_quantity(&self.quantity),
            unit_price_cents: Money::parse(&self.unit_price).cents(),
            discount_percent: clamp_percent(parse_percent(&self.discount)).floor() as u32,
        }
    }

    /// Pre-fills a row from a persisted line item (edit flow).
    pub fn from_line_item(item: &InvoiceLineItem) -> Self {
        InvoiceLineItemForm {
            description: item.description.clone(),
            quantity: item.quantity.to_string(),
            unit_price: item.unit_price().to_input_value(),
            discount: item.discount_percent.to_string(),
        }
    }
}

/// Parses quantity text the way the numeric input behaves: leading digits
/// count, anything else defaults to zero.
pub fn parse_quantity(value: &str) -> u64 {
    let trimmed = value.trim_start();
    let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Invoice total: the sum of every row's line total, nothing layered on
/// top (discounts apply per line only).
///
/// ## Example
/// ```rust
/// use fretshop_core::forms::{invoice_total, InvoiceLineItemForm};
///
/// let items = vec![
///     InvoiceLineItemForm {
///         description: "Fret leveling".to_string(),
///         quantity: "1".to_string(),
///         unit_price: "150.00".to_string(),
///         discount: "10".to_string(),
///     },
///     InvoiceLineItemForm {
///         description: "Setup".to_string(),
///         quantity: "2".to_string(),
///         unit_price: "75.00".to_string(),
///         discount: "0".to_string(),
///     },
/// ];
/// assert_eq!(invoice_total(&items).to_string(), "$285.00");
/// ```
pub fn invoice_total(items: &[InvoiceLineItemForm]) -> Money {
    items.iter().map(InvoiceLineItemForm::line_total).sum()
}

/// Builds the create/update payload from the editor state.
pub fn invoice_input(customer_id: CustomerId, items: &[InvoiceLineItemForm]) -> InvoiceInput {
    InvoiceInput {
        customer_id,
        items: items.iter().map(InvoiceLineItemForm::to_line_item).collect(),
    }
}

/// Pre-fills the editor from a persisted invoice (edit flow).
pub fn invoice_form_items(invoice: &Invoice) -> Vec<InvoiceLineItemForm> {
    invoice.items.iter().map(InvoiceLineItemForm::from_line_item).collect()
}

// =============================================================================
// Work Orders
// =============================================================================

/// Editor state for a work order, repair sheet included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrderForm {
    pub customer_id: CustomerId,
    pub description: String,
    pub status: WorkOrderStatus,
    /// Decimal text, dollars.
    pub cost: String,
    pub sheet: RepairSheet,
}

impl WorkOrderForm {
    /// Pre-fills the editor from a persisted work order, decoding the
    /// repair sheet out of the notes column.
    pub fn from_work_order(order: &WorkOrder) -> Self {
        WorkOrderForm {
            customer_id: order.customer_id,
            description: order.description.clone(),
            status: order.status,
            cost: order.cost().to_input_value(),
            sheet: order.sheet(),
        }
    }

    /// Builds the create/update payload. The repair sheet is re-encoded
    /// into the notes column on every save.
    pub fn to_input(&self) -> WorkOrderInput {
        WorkOrderInput {
            customer_id: self.customer_id,
            description: self.description.clone(),
            status: self.status,
            cost_cents: Money::parse(&self.cost).cents(),
            notes: Some(self.sheet.encode()),
            services: Vec::new(),
            images: None,
        }
    }
}
