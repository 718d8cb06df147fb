//! # Report Helpers
//!
//! Date handling for the invoice report: the ledger service timestamps
//! records in nanoseconds since the Unix epoch, the report filters by
//! calendar day.

use chrono::{DateTime, NaiveDate, Utc};

/// Converts a ledger timestamp (nanoseconds since the Unix epoch) to a
/// chrono timestamp. Millisecond precision is kept; the report never needs
/// more. An out-of-range value degrades to the epoch.
pub fn created_at_to_datetime(created_at_ns: u64) -> DateTime<Utc> {
    let millis = (created_at_ns / 1_000_000) as i64;
    DateTime::from_timestamp_millis(millis).unwrap_or(DateTime::UNIX_EPOCH)
}

/// Checks whether an invoice falls within a date range. Both bounds are
/// inclusive and widened to whole days (start of day / end of day), and
/// either side may be open.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use fretshop_core::report::invoice_in_range;
///
/// // 2024-03-10 12:00:00 UTC in nanoseconds
/// let created_at = 1_710_072_000_000_000_000;
/// let march_1 = NaiveDate::from_ymd_opt(2024, 3, 1);
/// let march_10 = NaiveDate::from_ymd_opt(2024, 3, 10);
///
/// assert!(invoice_in_range(created_at, march_1, march_10));
/// assert!(invoice_in_range(created_at, None, None));
/// assert!(!invoice_in_range(created_at, None, march_1));
/// ```
pub fn invoice_in_range(
    created_at_ns: u64,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> bool {
    let date = created_at_to_datetime(created_at_ns).date_naive();

    if let Some(start) = start {
        if date < start {
            return false;
        }
    }
    if let Some(end) = end {
        if date > end {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-03-10 12:00:00 UTC
    const NOON_MARCH_10_NS: u64 = 1_710_072_000_000_000_000;

    #[test]
    fn test_ns_to_datetime() {
        let dt = created_at_to_datetime(NOON_MARCH_10_NS);
        assert_eq!(dt.to_rfc3339(), "2024-03-10T12:00:00+00:00");
    }

    #[test]
    fn test_sub_millisecond_precision_truncated() {
        let dt = created_at_to_datetime(NOON_MARCH_10_NS + 999_999);
        assert_eq!(dt, created_at_to_datetime(NOON_MARCH_10_NS));
    }

    #[test]
    fn test_open_range_matches_everything() {
        assert!(invoice_in_range(0, None, None));
        assert!(invoice_in_range(NOON_MARCH_10_NS, None, None));
    }

    #[test]
    fn test_bounds_are_inclusive_whole_days() {
        let march_10 = NaiveDate::from_ymd_opt(2024, 3, 10);
        // Same calendar day matches on both sides, regardless of time of day
        assert!(invoice_in_range(NOON_MARCH_10_NS, march_10, None));
        assert!(invoice_in_range(NOON_MARCH_10_NS, None, march_10));
        assert!(invoice_in_range(NOON_MARCH_10_NS, march_10, march_10));
    }

    #[test]
    fn test_outside_range() {
        let march_11 = NaiveDate::from_ymd_opt(2024, 3, 11);
        let march_9 = NaiveDate::from_ymd_opt(2024, 3, 9);
        assert!(!invoice_in_range(NOON_MARCH_10_NS, march_11, None));
        assert!(!invoice_in_range(NOON_MARCH_10_NS, None, march_9));
    }
}
