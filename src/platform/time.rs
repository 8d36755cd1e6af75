//! Wall-clock time source
//!
//! The engine never reads the clock directly; it asks a [`Clock`] so tests
//! and replays can drive time by hand.

use std::cell::Cell;

/// Millisecond wall clock
pub trait Clock {
    /// Current time in milliseconds since the Unix epoch
    fn now_ms(&self) -> f64;
}

/// Browser `Date.now()` on wasm, `SystemTime` natively
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[cfg(target_arch = "wasm32")]
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn now_ms(&self) -> f64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}

/// Hand-driven clock for tests and scripted sessions
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance_ms(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn advance_secs(&self, secs: f64) {
        self.advance_ms(secs * 1000.0);
    }

    pub fn set_ms(&self, ms: f64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::new(500.0);
        assert_eq!(clock.now_ms(), 500.0);
        clock.advance_secs(1.5);
        assert_eq!(clock.now_ms(), 2000.0);
        clock.set_ms(10.0);
        assert_eq!(clock.now_ms(), 10.0);
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock;
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(a > 0.0);
        assert!(b >= a);
    }
}
