//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely, plus the
//! invoice line-item math used by the invoice editor.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every amount is an integer number of cents (i64).                    │
//! │    Parsing, discounts and totals are computed with integer math,        │
//! │    so the same inputs always produce the same cents.                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Where Money Flows
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "150.00" (form input) ──► Money::parse ──► 15000 cents                 │
//! │                                                                         │
//! │  15000 cents ──► line_total(qty, price, discount%) ──► 13500 cents      │
//! │                                                                         │
//! │  13500 cents ──► Display ──► "$135.00" (rendered by UI)                 │
//! │                                                                         │
//! │  Every monetary value sent to the ledger service is integer cents.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative intermediate values (change, refunds)
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use fretshop_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Parses user-entered currency text into cents.
    ///
    /// This is the single entry point for every dollars-and-cents text field
    /// in the app (unit price, payment amount, work-order cost, import price
    /// column). Parsing is **total**: it never fails, malformed input simply
    /// becomes `$0.00`.
    ///
    /// ## Rules
    /// - Every character except ASCII digits and `.` is stripped first, so
    ///   `"$1,234.56"` parses the same as `"1234.56"`
    /// - Only the leading decimal number counts; a second `.` ends the number
    ///   (`"1.2.3"` parses as `1.20`)
    /// - The empty string (after stripping) parses as zero
    /// - The dollar value is converted to cents with half-up rounding on the
    ///   third fractional digit (`"0.125"` → 13 cents)
    ///
    /// ## Example
    /// ```rust
    /// use fretshop_core::money::Money;
    ///
    /// assert_eq!(Money::parse("12.50").cents(), 1250);
    /// assert_eq!(Money::parse("$1,234.56").cents(), 123456);
    /// assert_eq!(Money::parse("abc").cents(), 0);
    /// assert_eq!(Money::parse("").cents(), 0);
    /// ```
    pub fn parse(value: &str) -> Money {
        let mut whole = String::new();
        let mut frac = String::new();
        let mut seen_point = false;

        for c in value.chars() {
            if c.is_ascii_digit() {
                if seen_point {
                    frac.push(c);
                } else {
                    whole.push(c);
                }
            } else if c == '.' {
                // A second decimal point terminates the number
                if seen_point {
                    break;
                }
                seen_point = true;
            }
            // Every other character ($, commas, letters, spaces) is stripped
        }

        if whole.is_empty() && frac.is_empty() {
            return Money::zero();
        }

        // Integer-exact conversion: dollars × 100, rounding half up on the
        // third fractional digit. Inputs are non-negative by construction
        // (the sign character was stripped), so half-up equals half away
        // from zero.
        let dollars: i64 = whole.parse().unwrap_or(0);
        let mut digits = frac.chars().map(|c| c as i64 - '0' as i64);
        let tens = digits.next().unwrap_or(0);
        let units = digits.next().unwrap_or(0);
        let round_up = digits.next().unwrap_or(0) >= 5;

        let mut cents = dollars.saturating_mul(100).saturating_add(tens * 10 + units);
        if round_up {
            cents = cents.saturating_add(1);
        }
        Money(cents)
    }

    /// Formats the value for pre-filling a text input: plain decimal dollars
    /// with two fraction digits, no symbol, no grouping.
    ///
    /// ## Example
    /// ```rust
    /// use fretshop_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1250).to_input_value(), "12.50");
    /// assert_eq!(Money::from_cents(123456).to_input_value(), "1234.56");
    /// ```
    pub fn to_input_value(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

/// Display renders the localized currency form shown throughout the UI:
/// dollar sign, en-US thousands grouping, exactly two decimal places.
///
/// ## Example
/// ```rust
/// use fretshop_core::money::Money;
///
/// assert_eq!(Money::from_cents(1250).to_string(), "$12.50");
/// assert_eq!(Money::from_cents(123456).to_string(), "$1,234.56");
/// assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
/// ```
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            group_thousands(self.dollars().abs()),
            self.cents_part()
        )
    }
}

/// Inserts en-US thousands separators into a non-negative integer.
fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Percentage Helpers
// =============================================================================

/// Parses user-entered percentage text into a decimal number.
///
/// Uses the same character-stripping rule as [`Money::parse`] but keeps the
/// decimal value as-is (no ×100). Empty or malformed input yields `0.0`;
/// this function never fails.
///
/// ## Example
/// ```rust
/// use fretshop_core::money::parse_percent;
///
/// assert_eq!(parse_percent("10"), 10.0);
/// assert_eq!(parse_percent("12.5%"), 12.5);
/// assert_eq!(parse_percent(""), 0.0);
/// ```
pub fn parse_percent(value: &str) -> f64 {
    let mut cleaned = String::new();
    let mut seen_point = false;
    for c in value.chars() {
        if c.is_ascii_digit() {
            cleaned.push(c);
        } else if c == '.' {
            if seen_point {
                break;
            }
            seen_point = true;
            cleaned.push(c);
        }
    }
    if cleaned.is_empty() || cleaned == "." {
        return 0.0;
    }
    cleaned.parse().unwrap_or(0.0)
}

/// Clamps a percentage into the closed interval [0, 100].
///
/// The form layer rejects out-of-band discounts outright; this clamp is the
/// second line of defense, applied before any value is used in a total or
/// persisted.
///
/// ## Example
/// ```rust
/// use fretshop_core::money::clamp_percent;
///
/// assert_eq!(clamp_percent(-5.0), 0.0);
/// assert_eq!(clamp_percent(150.0), 100.0);
/// assert_eq!(clamp_percent(42.0), 42.0);
/// ```
pub fn clamp_percent(value: f64) -> f64 {
    if value < 0.0 {
        return 0.0;
    }
    if value > 100.0 {
        return 100.0;
    }
    value
}

/// Formats a percentage for display (`10` → `"10%"`).
pub fn format_percent(value: f64) -> String {
    format!("{value}%")
}

// =============================================================================
// Line-Item Math
// =============================================================================

/// Computes the total for one invoice line:
/// quantity × unit price, minus a percentage discount, clamped at zero.
///
/// ## Discount Rule
/// The discount percentage is first floored to a whole number of hundredths
/// (`12.345%` → `1234` hundredths), then applied with integer floor division.
/// Flooring the percentage *before* the division avoids a second fractional
/// rounding step:
///
/// ```text
/// subtotal = quantity × unit_price
/// discount = subtotal × floor(percent × 100) / 10000     (integer division)
/// total    = max(subtotal − discount, 0)
/// ```
///
/// The percentage is clamped into [0, 100] before use, so the result can
/// never exceed the subtotal and never goes negative.
///
/// ## Example
/// ```rust
/// use fretshop_core::money::{line_total, Money};
///
/// // 1 × $150.00 at 10% off = $135.00
/// let total = line_total(1, Money::from_cents(15000), 10.0);
/// assert_eq!(total.cents(), 13500);
/// ```
pub fn line_total(quantity: u64, unit_price: Money, discount_percent: f64) -> Money {
    let percent = clamp_percent(discount_percent);

    // i128 intermediates: qty × price can exceed i64 before clamping
    let subtotal = quantity as i128 * unit_price.cents() as i128;
    let discount_hundredths = (percent * 100.0).floor() as i128; // 0..=10000
    let discount = subtotal * discount_hundredths / 10000;

    if subtotal > discount {
        Money::from_cents((subtotal - discount) as i64)
    } else {
        Money::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_parse_plain_amounts() {
        assert_eq!(Money::parse("12.50").cents(), 1250);
        assert_eq!(Money::parse("150.00").cents(), 15000);
        assert_eq!(Money::parse("0.99").cents(), 99);
        assert_eq!(Money::parse("7").cents(), 700);
    }

    #[test]
    fn test_parse_strips_formatting() {
        assert_eq!(Money::parse("$1,234.56").cents(), 123456);
        assert_eq!(Money::parse("  $ 10.00 ").cents(), 1000);
        assert_eq!(Money::parse("USD 45.99").cents(), 4599);
    }

    #[test]
    fn test_parse_degrades_to_zero() {
        assert_eq!(Money::parse("").cents(), 0);
        assert_eq!(Money::parse("abc").cents(), 0);
        assert_eq!(Money::parse("$").cents(), 0);
        assert_eq!(Money::parse("-").cents(), 0);
    }

    #[test]
    fn test_parse_second_point_ends_number() {
        assert_eq!(Money::parse("1.2.3").cents(), 120);
        assert_eq!(Money::parse("10.99.99").cents(), 1099);
    }

    #[test]
    fn test_parse_rounds_half_up() {
        assert_eq!(Money::parse("0.125").cents(), 13);
        assert_eq!(Money::parse("0.124").cents(), 12);
        assert_eq!(Money::parse("2.999").cents(), 300);
    }

    #[test]
    fn test_parse_leading_point() {
        assert_eq!(Money::parse(".50").cents(), 50);
        assert_eq!(Money::parse(".5").cents(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::from_cents(0).to_string(), "$0.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
    }

    #[test]
    fn test_display_thousands_grouping() {
        assert_eq!(Money::from_cents(123456).to_string(), "$1,234.56");
        assert_eq!(Money::from_cents(100000000).to_string(), "$1,000,000.00");
        assert_eq!(Money::from_cents(28500).to_string(), "$285.00");
    }

    #[test]
    fn test_to_input_value() {
        assert_eq!(Money::from_cents(1250).to_input_value(), "12.50");
        assert_eq!(Money::from_cents(123456).to_input_value(), "1234.56");
        assert_eq!(Money::from_cents(5).to_input_value(), "0.05");
    }

    #[test]
    fn test_parse_format_round_trip() {
        // Already-normalized two-decimal strings survive a round trip
        for s in ["12.50", "0.01", "999.99", "150.00"] {
            let cents = Money::parse(s);
            assert_eq!(cents.to_input_value(), s);
        }
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);
    }

    #[test]
    fn test_sum() {
        let total: Money = [1000, 250, 99].iter().map(|c| Money::from_cents(*c)).sum();
        assert_eq!(total.cents(), 1349);
    }

    #[test]
    fn test_parse_percent() {
        assert_eq!(parse_percent("10"), 10.0);
        assert_eq!(parse_percent("12.5"), 12.5);
        assert_eq!(parse_percent("12.5%"), 12.5);
        assert_eq!(parse_percent(""), 0.0);
        assert_eq!(parse_percent("abc"), 0.0);
    }

    #[test]
    fn test_clamp_percent() {
        assert_eq!(clamp_percent(-5.0), 0.0);
        assert_eq!(clamp_percent(150.0), 100.0);
        assert_eq!(clamp_percent(42.0), 42.0);
        assert_eq!(clamp_percent(0.0), 0.0);
        assert_eq!(clamp_percent(100.0), 100.0);
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(10.0), "10%");
        assert_eq!(format_percent(12.5), "12.5%");
    }

    #[test]
    fn test_line_total_no_discount() {
        let total = line_total(2, Money::from_cents(7500), 0.0);
        assert_eq!(total.cents(), 15000);
    }

    #[test]
    fn test_line_total_ten_percent() {
        // 1 × $150.00 at 10%: subtotal 15000, discount 1500
        let total = line_total(1, Money::from_cents(15000), 10.0);
        assert_eq!(total.cents(), 13500);
    }

    #[test]
    fn test_line_total_full_discount_is_zero() {
        let total = line_total(3, Money::from_cents(999), 100.0);
        assert_eq!(total.cents(), 0);
    }

    #[test]
    fn test_line_total_fractional_percent_floors() {
        // 10000 × 12.345% → hundredths floor to 1234 → 10000 × 1234 / 10000 = 1234
        let total = line_total(1, Money::from_cents(10000), 12.345);
        assert_eq!(total.cents(), 10000 - 1234);
    }

    #[test]
    fn test_line_total_discount_floors_toward_customer() {
        // subtotal 999, 10% → discount floor(99.9) = 99
        let total = line_total(1, Money::from_cents(999), 10.0);
        assert_eq!(total.cents(), 900);
    }

    #[test]
    fn test_line_total_clamps_percent() {
        assert_eq!(line_total(1, Money::from_cents(1000), 150.0).cents(), 0);
        assert_eq!(line_total(1, Money::from_cents(1000), -20.0).cents(), 1000);
    }

    #[test]
    fn test_line_total_never_exceeds_subtotal() {
        for d in [0.0, 0.5, 33.3, 50.0, 99.9, 100.0] {
            for (q, p) in [(1u64, 999i64), (7, 12345), (100, 1)] {
                let total = line_total(q, Money::from_cents(p), d);
                assert!(total.cents() <= q as i64 * p);
                assert!(total.cents() >= 0);
            }
        }
    }
}
