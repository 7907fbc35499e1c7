//! Time source for ledger timestamps
//!
//! All persisted timestamps are display strings rendered in Japan Standard
//! Time (UTC+9) with minute resolution, matching the format shown to users.
//! The clock is injectable so services can be tested against a fixed instant.

use chrono::{DateTime, FixedOffset, Utc};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Display format for persisted timestamps, e.g. "2025/04/01 12:00"
pub const STAMP_FORMAT: &str = "%Y/%m/%d %H:%M";

/// Fixed UTC+9 offset used for all rendered timestamps
fn jst() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).expect("UTC+9 is a valid offset")
}

/// A cloneable time source
///
/// `Clock::system()` reads the wall clock; `Clock::fixed(..)` pins the clock
/// to a known instant that tests can advance manually. Clones of a fixed
/// clock share the same instant, so a service holding a clone observes
/// `advance_minutes` calls made through the original.
#[derive(Debug, Clone)]
pub struct Clock {
    fixed: Option<Arc<AtomicI64>>,
}

impl Clock {
    /// Create a clock that follows the system time
    pub fn system() -> Self {
        Self { fixed: None }
    }

    /// Create a clock pinned to the given instant
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self {
            fixed: Some(Arc::new(AtomicI64::new(at.timestamp()))),
        }
    }

    /// The current instant according to this clock
    pub fn now(&self) -> DateTime<Utc> {
        match &self.fixed {
            Some(seconds) => DateTime::from_timestamp(seconds.load(Ordering::SeqCst), 0)
                .unwrap_or_else(Utc::now),
            None => Utc::now(),
        }
    }

    /// Advance a fixed clock by whole minutes; system clocks are unaffected
    pub fn advance_minutes(&self, minutes: i64) {
        if let Some(seconds) = &self.fixed {
            seconds.fetch_add(minutes * 60, Ordering::SeqCst);
        }
    }

    /// Render the current instant as a persisted timestamp string
    pub fn stamp(&self) -> String {
        self.now().with_timezone(&jst()).format(STAMP_FORMAT).to_string()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::system()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_stamp() {
        // 2025-04-01 03:00 UTC renders as 12:00 in UTC+9
        let instant = Utc.with_ymd_and_hms(2025, 4, 1, 3, 0, 0).unwrap();
        let clock = Clock::fixed(instant);
        assert_eq!(clock.stamp(), "2025/04/01 12:00");
    }

    #[test]
    fn test_advance_minutes() {
        let instant = Utc.with_ymd_and_hms(2025, 4, 1, 3, 0, 0).unwrap();
        let clock = Clock::fixed(instant);
        clock.advance_minutes(90);
        assert_eq!(clock.stamp(), "2025/04/01 13:30");
    }

    #[test]
    fn test_clones_share_the_instant() {
        let instant = Utc.with_ymd_and_hms(2025, 4, 1, 3, 0, 0).unwrap();
        let clock = Clock::fixed(instant);
        let clone = clock.clone();
        clock.advance_minutes(1);
        assert_eq!(clone.stamp(), "2025/04/01 12:01");
    }

    #[test]
    fn test_stamp_crosses_midnight_in_display_zone() {
        // 15:30 UTC is already the next day in UTC+9
        let instant = Utc.with_ymd_and_hms(2025, 12, 31, 15, 30, 0).unwrap();
        let clock = Clock::fixed(instant);
        assert_eq!(clock.stamp(), "2026/01/01 00:30");
    }

    #[test]
    fn test_system_clock_ignores_advance() {
        let clock = Clock::system();
        let before = clock.now();
        clock.advance_minutes(60);
        let after = clock.now();
        assert!(after.signed_duration_since(before).num_seconds() < 5);
    }
}
