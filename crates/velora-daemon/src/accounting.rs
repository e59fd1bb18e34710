//! Accounting-day helpers.
//!
//! Earnings summaries bucket the ledger by UTC day; day boundaries fall at
//! 00:00 UTC.

use velora_types::ACCOUNTING_DAY_SECS;

/// Current Unix time in seconds.
pub fn now_unix() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// The accounting day index for a Unix timestamp.
pub fn day_of(timestamp: u64) -> u64 {
    timestamp / ACCOUNTING_DAY_SECS
}

/// The current accounting day index.
pub fn current_day() -> u64 {
    day_of(now_unix())
}

/// Seconds until the next day boundary.
#[allow(dead_code)]
pub fn seconds_until_next_day() -> u64 {
    ACCOUNTING_DAY_SECS - (now_unix() % ACCOUNTING_DAY_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_of() {
        assert_eq!(day_of(0), 0);
        assert_eq!(day_of(86_399), 0);
        assert_eq!(day_of(86_400), 1);
        assert_eq!(day_of(1_700_000_000), 19_675);
    }

    #[test]
    fn test_current_day_reasonable() {
        // > 19000 since ~2022.
        assert!(current_day() > 19_000);
    }

    #[test]
    fn test_seconds_until_next_day() {
        let secs = seconds_until_next_day();
        assert!(secs <= ACCOUNTING_DAY_SECS);
        assert!(secs > 0);
    }
}
