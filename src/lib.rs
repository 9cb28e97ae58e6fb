//! RAVINE: gameplay runtime for a 2D side-scrolling platformer
//!
//! Player locomotion with air-control damping, a boundary-constrained
//! camera with proximity shake and hysteresis-gated boundary triggers, and
//! an ordered multi-image level transition sequencer.
//!
//! The simulation is headless: a caller-owned loop feeds fixed-rate
//! physics ticks and per-frame updates into `game::GameWorld`, renders
//! from its state, and plays whatever `audio::AudioDirector` queued. The
//! demo binary does exactly that with macroquad.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod math;
pub mod input;
pub mod world;
pub mod game;
pub mod audio;
