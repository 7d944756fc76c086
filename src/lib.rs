//! termv (workspace facade crate).
//!
//! Re-exports the workspace crates as `termv::{core, input, term, types}` so
//! the binary, integration tests and benches depend on one package.

pub use termv_core as core;
pub use termv_input as input;
pub use termv_term as term;
pub use termv_types as types;
