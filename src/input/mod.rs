//! Input handling
//!
//! The simulation consumes an `InputFrame` snapshot built once per frame by
//! whoever owns the windowing layer. The demo binary builds it from the
//! keyboard via `InputState`; tests build it by hand.

pub mod actions;
pub mod state;

pub use actions::{Action, InputFrame};
pub use state::InputState;
