//! Gameplay systems
//!
//! The simulation is headless and frame-driven: a caller-owned loop feeds
//! fixed-rate physics ticks and per-frame updates into `GameWorld`, which
//! orchestrates player movement, the boundary-constrained camera, and the
//! level transition sequencer. Physics always steps before the camera reads
//! the player position within a frame, so the camera never clamps against a
//! stale body.

pub mod air_control;
pub mod player;
pub mod camera;
pub mod transition;
pub mod event;
pub mod world;

pub use air_control::AirControl;
pub use player::{Body, Movement, PlayerSettings};
pub use camera::{CameraController, CameraFrame, CameraSettings, Edge};
pub use transition::{TransitionEntry, TransitionScreen, TransitionSequencer, TransitionEffects};
pub use event::Events;
pub use world::{GameWorld, PHYSICS_STEP};
