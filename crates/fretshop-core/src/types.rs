//! # Domain Types
//!
//! Core domain types mirroring the records the remote ledger service stores.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Customer     │   │    Invoice      │   │   WorkOrder     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name           │   │  customer_id    │   │  customer_id    │       │
//! │  │  email/phone    │   │  items[]        │   │  status         │       │
//! │  │  address        │   │  amounts        │   │  cost_cents     │       │
//! │  └─────────────────┘   │  photos         │   │  notes (sheet)  │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Service      │   │ InvoiceLineItem │   │ WorkOrderStatus │       │
//! │  │  price catalog  │   │ qty × price - % │   │ 7 states        │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All monetary fields are integer cents. Timestamps arrive from the ledger
//! service as nanoseconds since the Unix epoch (`created_at_ns`); see
//! [`crate::report`] for the chrono conversions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;
use crate::report;
use crate::sheet::RepairSheet;

// =============================================================================
// Identifiers
// =============================================================================

/// Sequential id assigned by the ledger service.
pub type CustomerId = u64;
pub type InvoiceId = u64;
pub type WorkOrderId = u64;
pub type ServiceId = u64;

/// Formats an invoice id for display: `42` → `"INV-0042"`.
///
/// ## Example
/// ```rust
/// use fretshop_core::types::format_invoice_number;
///
/// assert_eq!(format_invoice_number(42), "INV-0042");
/// assert_eq!(format_invoice_number(12345), "INV-12345");
/// ```
pub fn format_invoice_number(id: InvoiceId) -> String {
    format!("INV-{id:04}")
}

// =============================================================================
// Customer
// =============================================================================

/// A shop customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
}

/// Fields sent when creating or updating a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInput {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
}

// =============================================================================
// Service Catalog
// =============================================================================

/// A catalog entry: a named repair service or part with an optional price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub service_type: Option<String>,
    pub service: Option<String>,
    pub notes: Option<String>,
    pub price_cents: Option<i64>,
}

impl Service {
    /// Returns the catalog price as Money, if one is set.
    #[inline]
    pub fn price(&self) -> Option<Money> {
        self.price_cents.map(Money::from_cents)
    }
}

/// Fields sent when creating or updating a catalog entry (also the unit of
/// bulk import, see [`crate::import`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInput {
    pub name: String,
    pub service_type: Option<String>,
    pub service: Option<String>,
    pub notes: Option<String>,
    pub price_cents: Option<i64>,
}

// =============================================================================
// Photos
// =============================================================================

/// A photo attached to an invoice or work order. The pixels live in remote
/// blob storage; this record only carries identity and metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// Client-generated identifier (UUID v4), assigned before upload.
    pub id: String,
    /// Blob-store handle returned by the upload call.
    pub blob_id: String,
    pub filename: Option<String>,
    pub content_type: String,
}

impl Photo {
    /// Creates a photo record with a fresh client-side id.
    pub fn new(blob_id: impl Into<String>, filename: Option<String>, content_type: impl Into<String>) -> Self {
        Photo {
            id: Uuid::new_v4().to_string(),
            blob_id: blob_id.into(),
            filename,
            content_type: content_type.into(),
        }
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// One row of an invoice: a quantity of a described service/part at a unit
/// price with an optional percentage discount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLineItem {
    pub description: String,
    pub quantity: u64,
    /// Unit price in cents.
    pub unit_price_cents: i64,
    /// Whole-number discount percentage, 0-100.
    pub discount_percent: u32,
}

impl InvoiceLineItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Computes this line's total (quantity × unit price, minus discount,
    /// clamped at zero). See [`crate::money::line_total`] for the exact rule.
    pub fn line_total(&self) -> Money {
        crate::money::line_total(self.quantity, self.unit_price(), self.discount_percent as f64)
    }
}

/// An invoice as stored by the ledger service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: InvoiceId,
    pub customer_id: CustomerId,
    pub items: Vec<InvoiceLineItem>,
    pub is_paid: bool,
    /// Payments recorded so far, in cents.
    pub amount_paid_cents: i64,
    /// Outstanding balance, in cents.
    pub amount_due_cents: i64,
    pub before_photos: Vec<Photo>,
    pub after_photos: Vec<Photo>,
    /// Nanoseconds since the Unix epoch, as the ledger service reports it.
    pub created_at_ns: u64,
}

impl Invoice {
    /// Total invoice amount: payments recorded plus balance outstanding.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_paid_cents + self.amount_due_cents)
    }

    /// Sum of all line totals. No additional rounding is layered on top.
    pub fn items_total(&self) -> Money {
        self.items.iter().map(InvoiceLineItem::line_total).sum()
    }

    /// Creation time as a chrono timestamp.
    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        report::created_at_to_datetime(self.created_at_ns)
    }
}

/// Fields sent when creating or updating an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceInput {
    pub customer_id: CustomerId,
    pub items: Vec<InvoiceLineItem>,
}

// =============================================================================
// Work Order
// =============================================================================

/// The lifecycle of a repair job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderStatus {
    SentForApproval,
    Cancelled,
    PendingPayment,
    InProgress,
    Complete,
    Approved,
    Finalized,
}

/// Visual weight of the status badge rendered next to a work order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
    Outline,
}

impl WorkOrderStatus {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            WorkOrderStatus::SentForApproval => "Sent for Approval",
            WorkOrderStatus::Cancelled => "Cancelled",
            WorkOrderStatus::PendingPayment => "Pending Payment",
            WorkOrderStatus::InProgress => "In Progress",
            WorkOrderStatus::Complete => "Complete",
            WorkOrderStatus::Approved => "Approved",
            WorkOrderStatus::Finalized => "Finalized",
        }
    }

    /// Badge styling for list and detail views.
    pub fn badge_variant(&self) -> BadgeVariant {
        match self {
            WorkOrderStatus::Complete => BadgeVariant::Default,
            WorkOrderStatus::InProgress => BadgeVariant::Secondary,
            WorkOrderStatus::Cancelled => BadgeVariant::Destructive,
            _ => BadgeVariant::Outline,
        }
    }
}

/// New work orders start in progress.
impl Default for WorkOrderStatus {
    fn default() -> Self {
        WorkOrderStatus::InProgress
    }
}

/// A repair job. The free-text `notes` column doubles as the persisted form
/// of the structured repair sheet (see [`crate::sheet`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrder {
    pub id: WorkOrderId,
    pub customer_id: CustomerId,
    pub description: String,
    pub status: WorkOrderStatus,
    /// Quoted cost in cents.
    pub cost_cents: i64,
    pub notes: Option<String>,
    pub services: Vec<ServiceId>,
    pub images: Vec<Photo>,
    /// Nanoseconds since the Unix epoch.
    pub created_at_ns: u64,
}

impl WorkOrder {
    /// Returns the quoted cost as Money.
    #[inline]
    pub fn cost(&self) -> Money {
        Money::from_cents(self.cost_cents)
    }

    /// Decodes the structured repair sheet out of the notes column.
    /// Missing or hand-edited notes yield a partially-populated sheet.
    pub fn sheet(&self) -> RepairSheet {
        RepairSheet::decode(self.notes.as_deref().unwrap_or(""))
    }

    /// Creation time as a chrono timestamp.
    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        report::created_at_to_datetime(self.created_at_ns)
    }
}

/// Fields sent when creating or updating a work order. Create and update
/// take the same shape; the id travels separately on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrderInput {
    pub customer_id: CustomerId,
    pub description: String,
    pub status: WorkOrderStatus,
    pub cost_cents: i64,
    pub notes: Option<String>,
    pub services: Vec<ServiceId>,
    pub images: Option<Vec<Photo>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_invoice_number() {
        assert_eq!(format_invoice_number(1), "INV-0001");
        assert_eq!(format_invoice_number(42), "INV-0042");
        assert_eq!(format_invoice_number(9999), "INV-9999");
        assert_eq!(format_invoice_number(12345), "INV-12345");
    }

    #[test]
    fn test_line_item_total() {
        let item = InvoiceLineItem {
            description: "Fret leveling".to_string(),
            quantity: 1,
            unit_price_cents: 15000,
            discount_percent: 10,
        };
        assert_eq!(item.line_total().cents(), 13500);
    }

    #[test]
    fn test_invoice_amount_is_paid_plus_due() {
        let invoice = Invoice {
            id: 7,
            customer_id: 1,
            items: vec![],
            is_paid: false,
            amount_paid_cents: 10000,
            amount_due_cents: 18500,
            before_photos: vec![],
            after_photos: vec![],
            created_at_ns: 0,
        };
        assert_eq!(invoice.amount().cents(), 28500);
        assert_eq!(invoice.amount().to_string(), "$285.00");
    }

    #[test]
    fn test_items_total_sums_line_totals() {
        let invoice = Invoice {
            id: 1,
            customer_id: 1,
            items: vec![
                InvoiceLineItem {
                    description: "Fret leveling".to_string(),
                    quantity: 1,
                    unit_price_cents: 15000,
                    discount_percent: 10,
                },
                InvoiceLineItem {
                    description: "Setup".to_string(),
                    quantity: 2,
                    unit_price_cents: 7500,
                    discount_percent: 0,
                },
            ],
            is_paid: false,
            amount_paid_cents: 0,
            amount_due_cents: 28500,
            before_photos: vec![],
            after_photos: vec![],
            created_at_ns: 0,
        };
        assert_eq!(invoice.items_total().cents(), 28500);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(WorkOrderStatus::PendingPayment.label(), "Pending Payment");
        assert_eq!(WorkOrderStatus::SentForApproval.label(), "Sent for Approval");
        assert_eq!(WorkOrderStatus::InProgress.label(), "In Progress");
    }

    #[test]
    fn test_status_badges() {
        assert_eq!(WorkOrderStatus::Complete.badge_variant(), BadgeVariant::Default);
        assert_eq!(WorkOrderStatus::InProgress.badge_variant(), BadgeVariant::Secondary);
        assert_eq!(WorkOrderStatus::Cancelled.badge_variant(), BadgeVariant::Destructive);
        assert_eq!(WorkOrderStatus::Approved.badge_variant(), BadgeVariant::Outline);
        assert_eq!(WorkOrderStatus::Finalized.badge_variant(), BadgeVariant::Outline);
    }

    #[test]
    fn test_status_serde_snake_case() {
        let json = serde_json::to_string(&WorkOrderStatus::PendingPayment).unwrap();
        assert_eq!(json, r#""pending_payment""#);
        let back: WorkOrderStatus = serde_json::from_str(r#""sent_for_approval""#).unwrap();
        assert_eq!(back, WorkOrderStatus::SentForApproval);
    }

    #[test]
    fn test_work_order_sheet_decodes_notes() {
        let order = WorkOrder {
            id: 3,
            customer_id: 9,
            description: "Fret buzz".to_string(),
            status: WorkOrderStatus::default(),
            cost_cents: 15000,
            notes: Some("[INSTRUMENT]\nBrand: Fender".to_string()),
            services: vec![],
            images: vec![],
            created_at_ns: 0,
        };
        assert_eq!(order.sheet().brand, "Fender");

        let no_notes = WorkOrder { notes: None, ..order };
        assert_eq!(no_notes.sheet(), RepairSheet::default());
    }

    #[test]
    fn test_photo_new_assigns_uuid() {
        let photo = Photo::new("blob-1", Some("neck.jpg".to_string()), "image/jpeg");
        assert_eq!(photo.id.len(), 36);
        assert_ne!(photo.id, Photo::new("blob-2", None, "image/png").id);
    }
}
