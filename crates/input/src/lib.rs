//! Terminal input module (engine-facing).
//!
//! This crate is independent of any rendering code. It maps `crossterm` key
//! events into [`InputEvent`]s, drains each frame's pending events without
//! allocating, and keeps the soft-drop latch needed on terminals that never
//! report key releases.

pub mod latch;
pub mod map;
pub mod poll;

pub use termv_types as types;

pub use latch::SoftDropLatch;
pub use map::{map_key_event, InputEvent};
pub use poll::{poll_frame, FrameInput, MAX_EVENTS_PER_FRAME};
