//! Clock implementations.

use std::sync::atomic::{AtomicI32, Ordering};

use chrono::{DateTime, Duration, Utc};

use blog_core::ports::Clock;

/// Wall clock backed by `Utc::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic clock that moves forward by a fixed step on every reading.
///
/// The first call returns `start`, the n-th call `start + step * (n - 1)`.
#[derive(Debug)]
pub struct StepClock {
    start: DateTime<Utc>,
    step: Duration,
    ticks: AtomicI32,
}

impl StepClock {
    pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            start,
            step,
            ticks: AtomicI32::new(0),
        }
    }

    /// Value of the n-th reading (zero-based) without advancing the clock.
    pub fn reading(&self, n: i32) -> DateTime<Utc> {
        self.start + self.step * n
    }
}

impl Clock for StepClock {
    fn now(&self) -> DateTime<Utc> {
        let n = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.reading(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_clock_advances() {
        let start = Utc::now();
        let clock = StepClock::new(start, Duration::seconds(1));
        assert_eq!(clock.now(), start);
        assert_eq!(clock.now(), start + Duration::seconds(1));
        assert_eq!(clock.now(), clock.reading(2));
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.now();
        assert!(clock.now() >= first);
    }
}
