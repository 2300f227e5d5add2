//! Injectable time source
//!
//! Lockout expiry and daily-counter resets are evaluated lazily against the
//! current time, so tests need to control "now". The [`Clock`] trait is that
//! seam: production code uses [`SystemClock`], tests drive a [`ManualClock`].

use crate::types::Timestamp;
use chrono::{Duration, NaiveDate, Utc};
use std::sync::Mutex;

/// Source of the current wall-clock time and calendar date
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;

    /// Today's calendar date, derived from `now`
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Real wall-clock time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }
}

/// Manually-driven clock for deterministic tests
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Timestamp>,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Move the clock forward
    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.lock().unwrap();
        *now = *now + delta;
    }

    pub fn set(&self, at: Timestamp) {
        *self.now.lock().unwrap() = at;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.now.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_manual_clock_advance() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let clock = ManualClock::new(start);
        assert_eq!(clock.now(), start);

        clock.advance(Duration::minutes(5));
        assert_eq!(clock.now(), start + Duration::minutes(5));
    }

    #[test]
    fn test_today_crosses_midnight() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 23, 30, 0).unwrap();
        let clock = ManualClock::new(start);
        assert_eq!(clock.today(), start.date_naive());

        clock.advance(Duration::hours(1));
        assert_eq!(
            clock.today(),
            NaiveDate::from_ymd_opt(2024, 6, 2).unwrap()
        );
    }

    #[test]
    fn test_system_clock_monotonic_enough() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
