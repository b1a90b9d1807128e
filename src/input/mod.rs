//! Input handling
//!
//! Action-based keyboard input. Bindings live in `actions`, per-frame
//! polling in `state`.

mod actions;
mod state;

pub use actions::*;
pub use state::*;
