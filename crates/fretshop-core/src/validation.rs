//! # Validation Module
//!
//! Input validation for form submissions.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: THIS MODULE - submission validation                           │
//! │  ├── Rejects empty required fields, non-numeric quantities,            │
//! │  │   out-of-[0,100] discounts BEFORE anything is converted             │
//! │  └── Produces the exact messages the UI toasts                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Defensive clamping (money module)                             │
//! │  ├── clamp_percent inside line_total                                    │
//! │  └── Both layers agree: 0-100 is the valid discount band               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Remote ledger service (out of scope here)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::forms::InvoiceLineItemForm;
use crate::money::parse_percent;
use crate::types::{CustomerId, CustomerInput};

/// Result type for single-field validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Discount percentages live in this closed band.
pub const DISCOUNT_MIN: i64 = 0;
pub const DISCOUNT_MAX: i64 = 100;

// =============================================================================
// Invoice Submission
// =============================================================================

/// Validates a complete invoice submission: a selected customer plus at
/// least one fully filled-in line item.
///
/// ## Example
/// ```rust
/// use fretshop_core::forms::InvoiceLineItemForm;
/// use fretshop_core::validation::validate_invoice_submission;
///
/// let items = vec![InvoiceLineItemForm {
///     description: "Setup".to_string(),
///     quantity: "2".to_string(),
///     unit_price: "75.00".to_string(),
///     discount: "0".to_string(),
/// }];
/// assert!(validate_invoice_submission(3, &items).is_ok());
/// assert!(validate_invoice_submission(0, &items).is_err());
/// ```
pub fn validate_invoice_submission(
    customer_id: CustomerId,
    items: &[InvoiceLineItemForm],
) -> CoreResult<()> {
    if customer_id == 0 {
        return Err(CoreError::MissingCustomer);
    }
    if items.is_empty() {
        return Err(CoreError::EmptyInvoice);
    }
    for item in items {
        validate_line_item(item)?;
    }
    Ok(())
}

/// Validates one line item's raw form fields.
pub fn validate_line_item(item: &InvoiceLineItemForm) -> CoreResult<()> {
    if item.description.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "description".to_string(),
        }
        .into());
    }
    validate_quantity_text(&item.quantity)?;
    if item.unit_price.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "unit price".to_string(),
        }
        .into());
    }
    validate_discount_text(&item.discount)?;
    Ok(())
}

/// Rejects empty or non-numeric quantity text.
///
/// The conversion layer tolerates trailing junk (`"3x"` counts as 3, the
/// way the form's numeric input behaves); validation only insists the field
/// starts with a digit.
pub fn validate_quantity_text(quantity: &str) -> ValidationResult<()> {
    let quantity = quantity.trim();
    if quantity.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }
    if !quantity.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "must be a non-negative number".to_string(),
        });
    }
    Ok(())
}

/// Rejects a raw discount value outside [0, 100].
///
/// This runs on the raw parse, before any clamping, so a typo like `150`
/// comes back to the user instead of being silently capped. (The money
/// module still clamps defensively at computation time; both layers agree
/// on the 0-100 band.)
pub fn validate_discount_text(discount: &str) -> ValidationResult<()> {
    if discount.trim().is_empty() {
        // Blank means no discount
        return Ok(());
    }
    let value = parse_percent(discount);
    if !(DISCOUNT_MIN as f64..=DISCOUNT_MAX as f64).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: DISCOUNT_MIN,
            max: DISCOUNT_MAX,
        });
    }
    Ok(())
}

// =============================================================================
// Payments
// =============================================================================

/// Validates a payment amount in cents.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Cannot pay zero or negative amounts
pub fn validate_payment_amount(cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "payment amount".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Customers
// =============================================================================

/// Validates customer fields before create/update.
pub fn validate_customer_input(input: &CustomerInput) -> ValidationResult<()> {
    validate_customer_name(&input.name)?;
    validate_email(&input.email)?;
    if input.phone.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "phone".to_string(),
        });
    }
    Ok(())
}

/// Validates a customer name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }
    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }
    Ok(())
}

/// Validates an email address. Shallow on purpose: the ledger service does
/// its own verification, this only catches obvious slips.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }
    if !email.contains('@') {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must contain '@'".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Service Catalog
// =============================================================================

/// Validates a catalog service name (also used per-row by bulk import).
pub fn validate_service_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "service name".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(description: &str, quantity: &str, unit_price: &str, discount: &str) -> InvoiceLineItemForm {
        InvoiceLineItemForm {
            description: description.to_string(),
            quantity: quantity.to_string(),
            unit_price: unit_price.to_string(),
            discount: discount.to_string(),
        }
    }

    #[test]
    fn test_submission_requires_customer() {
        let items = vec![item("Setup", "1", "75.00", "0")];
        assert!(matches!(
            validate_invoice_submission(0, &items),
            Err(CoreError::MissingCustomer)
        ));
        assert!(validate_invoice_submission(1, &items).is_ok());
    }

    #[test]
    fn test_submission_requires_items() {
        assert!(matches!(
            validate_invoice_submission(1, &[]),
            Err(CoreError::EmptyInvoice)
        ));
    }

    #[test]
    fn test_line_item_required_fields() {
        assert!(validate_line_item(&item("", "1", "75.00", "0")).is_err());
        assert!(validate_line_item(&item("Setup", "", "75.00", "0")).is_err());
        assert!(validate_line_item(&item("Setup", "1", "", "0")).is_err());
        assert!(validate_line_item(&item("Setup", "1", "75.00", "0")).is_ok());
    }

    #[test]
    fn test_quantity_text() {
        assert!(validate_quantity_text("3").is_ok());
        assert!(validate_quantity_text(" 12 ").is_ok());
        assert!(validate_quantity_text("").is_err());
        assert!(validate_quantity_text("abc").is_err());
        assert!(validate_quantity_text("-1").is_err());
    }

    #[test]
    fn test_discount_band() {
        assert!(validate_discount_text("0").is_ok());
        assert!(validate_discount_text("42").is_ok());
        assert!(validate_discount_text("100").is_ok());
        assert!(validate_discount_text("").is_ok());
        assert!(validate_discount_text("150").is_err());
    }

    #[test]
    fn test_payment_amount() {
        assert!(validate_payment_amount(1).is_ok());
        assert!(validate_payment_amount(0).is_err());
        assert!(validate_payment_amount(-500).is_err());
    }

    #[test]
    fn test_customer_input() {
        let input = CustomerInput {
            name: "Jay Reyes".to_string(),
            email: "jay@example.com".to_string(),
            address: "12 Fret St".to_string(),
            phone: "555-0101".to_string(),
        };
        assert!(validate_customer_input(&input).is_ok());

        let mut bad = input.clone();
        bad.name = "  ".to_string();
        assert!(validate_customer_input(&bad).is_err());

        let mut bad = input.clone();
        bad.email = "not-an-email".to_string();
        assert!(validate_customer_input(&bad).is_err());

        let mut bad = input;
        bad.phone = String::new();
        assert!(validate_customer_input(&bad).is_err());
    }

    #[test]
    fn test_service_name() {
        assert!(validate_service_name("Fret level").is_ok());
        assert!(validate_service_name("  ").is_err());
    }
}
