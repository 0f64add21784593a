//! Timestamps
//!
//! All persisted timestamps are epoch milliseconds.

/// Milliseconds in one day
pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Source of "now" for stores, replaceable in tests
pub type Clock = fn() -> i64;

/// Current wall-clock time in epoch milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Whole days elapsed between `created_at` and `now` (floored)
pub fn age_in_days(created_at: i64, now: i64) -> i64 {
    (now - created_at).div_euclid(DAY_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_floors_partial_days() {
        assert_eq!(age_in_days(0, DAY_MS - 1), 0);
        assert_eq!(age_in_days(0, DAY_MS), 1);
        assert_eq!(age_in_days(0, 3 * DAY_MS + DAY_MS / 2), 3);
    }

    #[test]
    fn test_age_of_future_timestamp_is_negative() {
        assert_eq!(age_in_days(DAY_MS / 2, 0), -1);
    }
}
