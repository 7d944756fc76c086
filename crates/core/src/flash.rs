//! Tetris flash animation state.
//!
//! A four-line clear plays a short inversion animation. The engine only keeps
//! the countdown; views decide how an inversion looks.

use crate::types::{FLASH_STEP_MS, TETRIS_FLASH_TOGGLES};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineFlash {
    active: bool,
    timer_ms: f64,
    toggles_remaining: u8,
}

impl LineFlash {
    /// Start (or restart) the animation from the first inversion.
    pub fn start(&mut self) {
        self.active = true;
        self.timer_ms = 0.0;
        self.toggles_remaining = TETRIS_FLASH_TOGGLES;
    }

    /// Advance by `dt_ms`, consuming at most one toggle per call.
    ///
    /// Time beyond one step carries over to the next call. Does nothing while
    /// inactive.
    pub fn update(&mut self, dt_ms: f64) {
        if !self.active {
            return;
        }
        self.timer_ms += dt_ms.max(0.0);
        if self.timer_ms >= FLASH_STEP_MS {
            self.timer_ms -= FLASH_STEP_MS;
            self.toggles_remaining = self.toggles_remaining.saturating_sub(1);
            if self.toggles_remaining == 0 {
                self.active = false;
                self.timer_ms = 0.0;
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn toggles_remaining(&self) -> u8 {
        self.toggles_remaining
    }

    /// Filled cells should currently be drawn inverted.
    pub fn inverted(&self) -> bool {
        self.active && self.toggles_remaining % 2 == 1
    }
}
