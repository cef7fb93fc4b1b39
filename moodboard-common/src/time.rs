//! Timestamp utilities

use chrono::{DateTime, Duration, Utc};

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Milliseconds since the UNIX epoch
pub fn epoch_millis(at: DateTime<Utc>) -> i64 {
    at.timestamp_millis()
}

/// Start of a trailing window of `length` ending at `now`
pub fn window_start(now: DateTime<Utc>, length: Duration) -> DateTime<Utc> {
    now - length
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_returns_recent_timestamp() {
        let timestamp = now();
        // After 2000-01-01 and before 2100-01-01
        assert!(timestamp.timestamp() > 946_684_800);
        assert!(timestamp.timestamp() < 4_102_444_800);
    }

    #[test]
    fn test_epoch_millis() {
        let at = DateTime::from_timestamp(1_700_000_000, 5_000_000).unwrap();
        assert_eq!(epoch_millis(at), 1_700_000_000_005);
    }

    #[test]
    fn test_window_start_ten_minutes() {
        let at = DateTime::from_timestamp(1_700_000_600, 0).unwrap();
        let start = window_start(at, Duration::minutes(10));
        assert_eq!(start.timestamp(), 1_700_000_000);
    }
}
