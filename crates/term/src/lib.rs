//! Terminal front-end for the engine.
//!
//! Rendering is split in two: a pure view that paints a [`GameSnapshot`]
//! into a [`FrameBuffer`], and a renderer that diffs framebuffers and flushes
//! the changed runs to the terminal with crossterm.
//!
//! [`GameSnapshot`]: termv_core::GameSnapshot

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod theme;

pub use termv_core as core;
pub use termv_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{
    encode_diff_into, encode_enter_into, encode_exit_into, encode_full_into, TerminalRenderer,
};
pub use theme::{Theme, ThemeKind};
