//! Camera controller
//!
//! Follows the player with a fixed offset, clamped to the current level
//! boundaries. Dwelling at a boundary fires a single transition trigger
//! (hysteresis-gated), and approaching an armed boundary ramps up a
//! deterministic shake plus a rumble volume the frontend feeds to a loop
//! source. Sampled once per frame, after physics has moved the target.

use serde::{Serialize, Deserialize};
use crate::math::{Vec2, lerp};

/// Tolerance for "the clamped position sits at a boundary"
pub const BOUNDARY_EPSILON: f32 = 1e-4;

/// Which level boundary was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
}

/// Camera tuning, authored in the world file
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Offset from the followed target
    pub offset: Vec2,
    pub left_boundary: f32,
    pub right_boundary: f32,
    pub top_boundary: f32,
    pub bottom_boundary: f32,
    /// Clamp vertically as well (off by default: most levels scroll freely)
    pub constrain_vertical: bool,
    /// Shake amplitude at full intensity, world units
    pub max_shake_intensity: f32,
    /// Shake oscillation frequency, rad/s
    pub shake_frequency: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            offset: Vec2::new(0.0, 2.0),
            left_boundary: -20.0,
            right_boundary: 20.0,
            top_boundary: 5.0,
            bottom_boundary: -5.0,
            constrain_vertical: false,
            max_shake_intensity: 0.03,
            shake_frequency: 40.0,
        }
    }
}

/// Hysteresis state for the boundary trigger zones.
///
/// `*_armed` gates the shake ramp: dwelling at an edge disarms that side,
/// and the first sample strictly inside re-arms it. `*_fired` gates the
/// one-shot trigger the same way, so a trigger fires at most once per
/// continuous dwell.
#[derive(Debug, Clone, Copy)]
pub struct ZoneState {
    pub left_armed: bool,
    pub right_armed: bool,
    pub left_fired: bool,
    pub right_fired: bool,
}

impl Default for ZoneState {
    fn default() -> Self {
        Self {
            left_armed: true,
            right_armed: true,
            left_fired: false,
            right_fired: false,
        }
    }
}

/// A manually triggered, timed shake effect
#[derive(Debug, Clone, Copy)]
struct ManualShake {
    remaining: f32,
    intensity: f32,
}

/// Result of one camera update
#[derive(Debug, Clone, Copy)]
pub struct CameraFrame {
    /// Final camera position (clamped + shake)
    pub position: Vec2,
    /// Rumble loop volume in [0, 1]; zero means the loop should stop
    pub rumble_volume: f32,
    /// Set when a boundary trigger fired this frame
    pub boundary_hit: Option<Edge>,
}

/// Boundary-constrained follow camera with proximity shake
#[derive(Debug)]
pub struct CameraController {
    pub settings: CameraSettings,
    zones: ZoneState,
    manual: Option<ManualShake>,
    position: Vec2,
}

impl CameraController {
    pub fn new(settings: CameraSettings) -> Self {
        Self {
            settings,
            zones: ZoneState::default(),
            manual: None,
            position: Vec2::ZERO,
        }
    }

    /// Final camera position from the most recent update
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn zones(&self) -> ZoneState {
        self.zones
    }

    /// Overwrite the horizontal boundaries. Called by the transition
    /// completion step and nothing else.
    pub fn set_bounds(&mut self, left: f32, right: f32) {
        if left >= right {
            eprintln!("camera: ignoring inverted bounds ({}, {})", left, right);
            return;
        }
        self.settings.left_boundary = left;
        self.settings.right_boundary = right;
    }

    /// Start a timed shake. A re-trigger restarts the effect; it does not
    /// stack with a running one.
    pub fn trigger_shake(&mut self, duration: f32, intensity: f32) {
        self.manual = Some(ManualShake {
            remaining: duration.max(0.0),
            intensity,
        });
    }

    /// Per-frame update, called after physics has moved the target.
    /// `time` is elapsed time, `dt` the frame delta.
    pub fn update(&mut self, target: Vec2, time: f32, dt: f32) -> CameraFrame {
        let desired = target + self.settings.offset;

        let clamped_x = desired
            .x
            .clamp(self.settings.left_boundary, self.settings.right_boundary);
        let clamped_y = if self.settings.constrain_vertical {
            desired
                .y
                .clamp(self.settings.bottom_boundary, self.settings.top_boundary)
        } else {
            desired.y
        };
        let clamped = Vec2::new(clamped_x, clamped_y);

        let boundary_hit = self.check_boundaries(clamped_x);

        let intensity = self.ambient_intensity(target.x);
        let mut shake = Vec2::ZERO;
        if intensity > 0.0 {
            let amplitude = intensity * self.settings.max_shake_intensity;
            let f = self.settings.shake_frequency;
            shake.x = (time * f).sin() * amplitude;
            shake.y = (time * f * 1.1).cos() * amplitude;
        }
        shake = shake + self.manual_offset(time, dt);

        self.position = clamped + shake;

        CameraFrame {
            position: self.position,
            rumble_volume: intensity.clamp(0.0, 1.0),
            boundary_hit,
        }
    }

    /// Boundary dwell detection with hysteresis. Fires at most once per
    /// continuous dwell; the fired flag re-arms on the first sample
    /// strictly inside the boundary.
    fn check_boundaries(&mut self, clamped_x: f32) -> Option<Edge> {
        let at_left = (clamped_x - self.settings.left_boundary).abs() <= BOUNDARY_EPSILON;
        let at_right = (clamped_x - self.settings.right_boundary).abs() <= BOUNDARY_EPSILON;

        let mut hit = None;
        if at_left {
            if self.zones.left_armed && !self.zones.left_fired {
                self.zones.left_fired = true;
                hit = Some(Edge::Left);
            }
            self.zones.left_armed = false;
        } else {
            // Proximity re-arm: each zone resets independently once the
            // position is strictly inside its boundary
            self.zones.left_armed = true;
            self.zones.left_fired = false;
        }

        if at_right {
            if self.zones.right_armed && !self.zones.right_fired {
                self.zones.right_fired = true;
                hit = Some(Edge::Right);
            }
            self.zones.right_armed = false;
        } else {
            self.zones.right_armed = true;
            self.zones.right_fired = false;
        }

        hit
    }

    /// Proximity shake: the target's position normalized across the
    /// boundary span ramps intensity from 0 at the quarter mark to 1 at an
    /// armed edge.
    fn ambient_intensity(&self, target_x: f32) -> f32 {
        let span = self.settings.right_boundary - self.settings.left_boundary;
        if span <= BOUNDARY_EPSILON {
            return 0.0;
        }
        let normalized = (target_x - self.settings.left_boundary) / span;

        if self.zones.left_armed && normalized <= 0.25 {
            lerp(0.0, 1.0, ((0.25 - normalized) / 0.25).clamp(0.0, 1.0))
        } else if self.zones.right_armed && normalized >= 0.75 {
            lerp(0.0, 1.0, ((normalized - 0.75) / 0.25).clamp(0.0, 1.0))
        } else {
            0.0
        }
    }

    /// Timed manual shake offset; expires by dt, restarted by
    /// `trigger_shake`.
    fn manual_offset(&mut self, time: f32, dt: f32) -> Vec2 {
        let Some(mut shake) = self.manual else {
            return Vec2::ZERO;
        };

        shake.remaining -= dt;
        if shake.remaining <= 0.0 {
            self.manual = None;
            return Vec2::ZERO;
        }
        self.manual = Some(shake);

        let f = self.settings.shake_frequency;
        Vec2::new(
            (time * f * 1.7).sin() * shake.intensity,
            (time * f * 1.9).cos() * shake.intensity,
        )
    }
}
