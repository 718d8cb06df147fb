//! # fretshop-core: Pure Business Logic for Fretshop
//!
//! Fretshop is the business-management app for a guitar-repair shop:
//! customers, service catalog, invoices and repair work orders. Persistence
//! and authorization live in a remote ledger service; rendering lives in
//! the web client. This crate is everything in between that is worth
//! getting exactly right, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Fretshop Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                       Web Client                                │   │
//! │  │   Customers ──► Invoices ──► Services ──► Work Orders          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ generated TS bindings (ts-rs)          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ fretshop-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ │   │
//! │  │  │  money  │ │  sheet  │ │  forms  │ │ import  │ │validation│ │   │
//! │  │  │  Money  │ │ Repair  │ │ editor  │ │ CSV/TSV │ │  rules   │ │   │
//! │  │  │ totals  │ │  Sheet  │ │  state  │ │  rows   │ │  checks  │ │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘ └──────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              Remote Ledger Service (out of scope)               │   │
//! │  │        CRUD, payment recording, photo blobs, auth               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!),
//!   percentage helpers and the invoice line-item math
//! - [`sheet`] - the structured repair sheet and its notes-column codec
//! - [`types`] - domain types (Customer, Invoice, WorkOrder, Service, ...)
//! - [`forms`] - text-field editor state and domain conversions
//! - [`import`] - CSV/TSV service-catalog bulk import parsing
//! - [`report`] - invoice report date helpers
//! - [`validation`] - submission validation rules
//! - [`error`] - domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Total Parsing**: User text and the notes column parse without failing;
//!    malformed input degrades to zero/empty, never to a panic or an error
//!
//! ## Example Usage
//!
//! ```rust
//! use fretshop_core::forms::{invoice_total, InvoiceLineItemForm};
//!
//! let items = vec![
//!     InvoiceLineItemForm {
//!         description: "Fret leveling".to_string(),
//!         quantity: "1".to_string(),
//!         unit_price: "150.00".to_string(),
//!         discount: "10".to_string(),
//!     },
//!     InvoiceLineItemForm {
//!         description: "Setup".to_string(),
//!         quantity: "2".to_string(),
//!         unit_price: "75.00".to_string(),
//!         discount: "0".to_string(),
//!     },
//! ];
//!
//! // 13500 + 15000 cents
//! assert_eq!(invoice_total(&items).to_string(), "$285.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod forms;
pub mod import;
pub mod money;
pub mod report;
pub mod sheet;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use fretshop_core::Money` instead of
// `use fretshop_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use sheet::{BeforeAfter, RepairSheet};
pub use types::*;
