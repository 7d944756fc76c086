//! Soft-drop hold tracking.
//!
//! Most terminals only report key presses (plus auto-repeat), so holding Down
//! shows up as a stream of presses. The latch stays engaged while presses keep
//! arriving and lets go after a grace period without one.

use crate::types::SOFT_DROP_GRACE_MS;

#[derive(Debug, Clone)]
pub struct SoftDropLatch {
    engaged: bool,
    since_press_ms: f64,
    grace_ms: f64,
}

impl SoftDropLatch {
    pub fn new() -> Self {
        Self::with_grace_ms(SOFT_DROP_GRACE_MS)
    }

    pub fn with_grace_ms(grace_ms: f64) -> Self {
        Self {
            engaged: false,
            since_press_ms: 0.0,
            grace_ms,
        }
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// Record a Down press; returns true if this engaged the latch.
    pub fn press(&mut self) -> bool {
        self.since_press_ms = 0.0;
        let newly = !self.engaged;
        self.engaged = true;
        newly
    }

    /// Explicit key release (terminals with enhanced keyboard reporting).
    pub fn release(&mut self) {
        self.engaged = false;
        self.since_press_ms = 0.0;
    }

    /// Advance by one frame; returns true when the latch timed out this frame.
    pub fn update(&mut self, dt_ms: f64) -> bool {
        if !self.engaged {
            return false;
        }
        self.since_press_ms += dt_ms;
        if self.since_press_ms > self.grace_ms {
            self.release();
            return true;
        }
        false
    }
}

impl Default for SoftDropLatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_engages_once() {
        let mut latch = SoftDropLatch::new();
        assert!(latch.press());
        assert!(!latch.press());
        assert!(latch.is_engaged());
    }

    #[test]
    fn test_times_out_without_presses() {
        let mut latch = SoftDropLatch::new();
        latch.press();
        assert!(!latch.update(100.0));
        assert!(!latch.update(50.0));
        assert!(latch.update(16.0));
        assert!(!latch.is_engaged());
        assert!(!latch.update(1000.0));
    }

    #[test]
    fn test_repeated_presses_keep_it_engaged() {
        let mut latch = SoftDropLatch::with_grace_ms(150.0);
        latch.press();
        for _ in 0..20 {
            assert!(!latch.update(100.0));
            latch.press();
        }
        assert!(latch.is_engaged());
    }

    #[test]
    fn test_release() {
        let mut latch = SoftDropLatch::new();
        latch.press();
        latch.release();
        assert!(!latch.is_engaged());
        assert!(!latch.update(500.0));
    }
}
