//! Time source used for ids and timestamps.

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

/// Wall-clock source.
pub trait Clock: Send {
    fn now(&self) -> DateTime<Utc>;
}

/// The system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic clock that advances by a fixed step on every read.
///
/// Keeps millisecond-timestamp ids distinct in tests.
#[derive(Debug)]
pub struct SteppingClock {
    millis: AtomicI64,
    step_millis: i64,
}

impl SteppingClock {
    pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            millis: AtomicI64::new(start.timestamp_millis()),
            step_millis: step.num_milliseconds(),
        }
    }

    /// Start at `start` and advance one millisecond per read.
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self::new(start, Duration::milliseconds(1))
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let millis = self.millis.fetch_add(self.step_millis, Ordering::SeqCst);
        Utc.timestamp_millis_opt(millis).single().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stepping_clock_advances() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let clock = SteppingClock::starting_at(start);

        let first = clock.now();
        let second = clock.now();
        assert_eq!(first, start);
        assert_eq!(second - first, Duration::milliseconds(1));
    }
}
