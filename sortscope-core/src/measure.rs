//! Run Timing
//!
//! Monotonic timer used for both the run's execution time and the relative
//! timestamps stamped on each step.

use std::time::{Duration, Instant};

/// Timer started when a run's sort body begins
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Time since the timer was started
    #[inline(always)]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer() {
        let timer = Timer::start();
        std::thread::sleep(Duration::from_millis(10));
        let elapsed = timer.elapsed();

        // Should be at least 5ms
        assert!(elapsed >= Duration::from_millis(5));
    }

    #[test]
    fn test_elapsed_is_monotonic() {
        let timer = Timer::start();
        let a = timer.elapsed();
        let b = timer.elapsed();
        assert!(b >= a);
    }
}
