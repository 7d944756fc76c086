//! Per-frame event draining.

use std::io;
use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{self, Event};

use crate::map::{map_key_event, InputEvent};

/// Events beyond this many in one frame are dropped.
pub const MAX_EVENTS_PER_FRAME: usize = 32;

/// One frame's worth of input.
pub type FrameInput = ArrayVec<InputEvent, MAX_EVENTS_PER_FRAME>;

/// Wait up to `timeout` for the first event, then drain everything already
/// queued into `out` without blocking.
///
/// Returns true if the terminal was resized, so the caller can force a full redraw.
pub fn poll_frame(timeout: Duration, out: &mut FrameInput) -> io::Result<bool> {
    out.clear();
    let mut resized = false;
    let mut wait = timeout;

    while event::poll(wait)? {
        wait = Duration::ZERO;
        match event::read()? {
            Event::Key(key) => {
                if let Some(input) = map_key_event(key) {
                    let _ = out.try_push(input);
                }
            }
            Event::Resize(_, _) => resized = true,
            _ => {}
        }
    }

    Ok(resized)
}
