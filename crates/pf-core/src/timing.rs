//! Lightweight wall-clock timing for solve phases.

use std::time::Instant;

/// A simple timer that measures elapsed time.
pub struct Timer {
    label: &'static str,
    start: Instant,
}

impl Timer {
    /// Create and start a new timer with the given label.
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }

    /// Elapsed time in seconds without stopping the timer.
    pub fn elapsed_s(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    /// Stop the timer, log the result at debug level and return elapsed seconds.
    pub fn stop(self) -> f64 {
        let elapsed = self.elapsed_s();
        tracing::debug!(phase = self.label, elapsed_s = elapsed, "timer stopped");
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_is_monotonic() {
        let t = Timer::start("test");
        let first = t.elapsed_s();
        let second = t.stop();
        assert!(second >= first);
        assert!(first >= 0.0);
    }
}
