//! Air control
//!
//! Resolves horizontal velocity from a move intent. On the ground the
//! player has full authority; in the air the velocity is blended toward the
//! target by a fixed per-step factor, so responsiveness is tied to the
//! physics step rate.

use crate::math::lerp;
use super::player::Body;

/// Horizontal velocity resolver
#[derive(Debug, Clone, Copy)]
pub struct AirControl {
    /// Per-step blend factor in (0, 1] used while airborne
    pub factor: f32,
}

impl AirControl {
    pub fn new(factor: f32) -> Self {
        Self { factor }
    }

    /// Resolve the body's horizontal velocity for this physics step.
    /// The vertical component is left untouched.
    pub fn apply(&self, body: &mut Body, move_input: f32, max_speed: f32, grounded: bool) {
        let desired = move_input * max_speed;
        if grounded {
            // Full control on ground
            body.velocity.x = desired;
        } else {
            // Limited directional control in air
            body.velocity.x = lerp(body.velocity.x, desired, self.factor);
        }
    }
}

impl Default for AirControl {
    fn default() -> Self {
        Self { factor: 0.3 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;

    #[test]
    fn test_grounded_sets_velocity_directly() {
        let mut body = Body::at(Vec2::ZERO);
        body.velocity = Vec2::new(-3.0, 4.5);

        AirControl::default().apply(&mut body, 0.5, 6.0, true);

        assert_eq!(body.velocity.x, 3.0);
        // Vertical untouched
        assert_eq!(body.velocity.y, 4.5);
    }

    #[test]
    fn test_airborne_converges_without_overshoot() {
        let mut body = Body::at(Vec2::ZERO);
        body.velocity = Vec2::new(-6.0, 1.0);
        let air = AirControl::default();
        let target = 1.0 * 6.0;

        let mut previous_gap = (target - body.velocity.x).abs();
        for _ in 0..200 {
            air.apply(&mut body, 1.0, 6.0, false);
            let gap = (target - body.velocity.x).abs();
            // Monotone approach, never past the target
            assert!(gap <= previous_gap);
            assert!(body.velocity.x <= target);
            previous_gap = gap;
        }
        assert!((body.velocity.x - target).abs() < 1e-3);
        assert_eq!(body.velocity.y, 1.0);
    }

    #[test]
    fn test_airborne_zero_intent_damps_toward_zero() {
        let mut body = Body::at(Vec2::ZERO);
        body.velocity = Vec2::new(5.0, 0.0);
        let air = AirControl::new(0.3);

        air.apply(&mut body, 0.0, 6.0, false);
        assert!((body.velocity.x - 3.5).abs() < 1e-6);
    }
}
