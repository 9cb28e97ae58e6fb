//! Player movement
//!
//! Fixed-step movement controller: circular ground probe, single jump with
//! held-button jump height, air-control damped horizontal velocity, and the
//! asymmetric gravity shaping that gives fast falls and cancellable jumps.

use serde::{Serialize, Deserialize};
use crate::math::{Vec2, Rect};
use crate::input::InputFrame;
use crate::world::WorldState;
use super::air_control::AirControl;

/// Tuning for the player controller, authored in the world file
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Horizontal speed, units/s
    pub speed: f32,
    /// Upward velocity applied on jump, units/s
    pub jump_force: f32,
    /// Gravity, units/s^2 (negative is down)
    pub gravity: f32,
    /// Extra gravity scale while descending
    pub fall_multiplier: f32,
    /// Extra gravity scale while ascending with jump released
    pub low_jump_multiplier: f32,
    /// Per-step airborne velocity blend factor
    pub air_control: f32,
    /// Ground probe center, relative to the body position
    pub ground_probe_offset: Vec2,
    /// Ground probe radius
    pub ground_probe_radius: f32,
    /// Collision half extents of the player box
    pub half_extents: Vec2,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            speed: 6.0,
            jump_force: 12.0,
            gravity: -30.0,
            fall_multiplier: 2.5,
            low_jump_multiplier: 2.0,
            air_control: 0.3,
            ground_probe_offset: Vec2::new(0.0, -0.55),
            ground_probe_radius: 0.2,
            half_extents: Vec2::new(0.4, 0.5),
        }
    }
}

/// Physics body: position and velocity, both in world units
#[derive(Debug, Clone, Copy, Default)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Body {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
        }
    }

    /// Collision box at the current position
    pub fn aabb(&self, half_extents: Vec2) -> Rect {
        Rect::from_center(self.position, half_extents)
    }
}

/// Player movement controller, advanced once per physics step
#[derive(Debug)]
pub struct Movement {
    pub settings: PlayerSettings,
    air: AirControl,
    grounded: bool,
    probe_warned: bool,
}

impl Movement {
    pub fn new(settings: PlayerSettings) -> Self {
        Self {
            air: AirControl::new(settings.air_control),
            settings,
            grounded: false,
            probe_warned: false,
        }
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Run one physics step. Returns true if a jump started this step.
    pub fn fixed_update(
        &mut self,
        body: &mut Body,
        world: &WorldState,
        input: &InputFrame,
        dt: f32,
    ) -> bool {
        self.grounded = self.probe_ground(body, world);

        // Jump only from the ground, horizontal velocity preserved
        let mut jumped = false;
        if input.jump_pressed && self.grounded {
            body.velocity.y = self.settings.jump_force;
            jumped = true;
        }

        self.air
            .apply(body, input.move_axis, self.settings.speed, self.grounded);

        self.apply_jump_physics(body, input.jump_held, dt);
        self.move_and_collide(body, world, dt);

        jumped
    }

    /// Circular overlap test against the ground layer.
    /// A degenerate probe radius is a configuration fault: warn once and
    /// report airborne rather than halting.
    fn probe_ground(&mut self, body: &Body, world: &WorldState) -> bool {
        if self.settings.ground_probe_radius <= 0.0 {
            if !self.probe_warned {
                eprintln!(
                    "player: ground probe radius {} is not positive, grounding disabled",
                    self.settings.ground_probe_radius
                );
                self.probe_warned = true;
            }
            return false;
        }
        world.overlap_circle(
            body.position + self.settings.ground_probe_offset,
            self.settings.ground_probe_radius,
        )
    }

    /// Base gravity plus the asymmetric shaping: descending is scaled by
    /// fall_multiplier, ascending without the jump button held is scaled by
    /// low_jump_multiplier to cut the jump short.
    fn apply_jump_physics(&self, body: &mut Body, jump_held: bool, dt: f32) {
        let g = self.settings.gravity;
        if body.velocity.y < 0.0 {
            body.velocity.y += g * (self.settings.fall_multiplier - 1.0) * dt;
        } else if body.velocity.y > 0.0 && !jump_held {
            body.velocity.y += g * (self.settings.low_jump_multiplier - 1.0) * dt;
        }
        body.velocity.y += g * dt;
    }

    /// Integrate the step and resolve against ground colliders, one axis at
    /// a time: stop at walls, land on top, bonk on the underside.
    fn move_and_collide(&self, body: &mut Body, world: &WorldState, dt: f32) {
        let half = self.settings.half_extents;

        let new_x = body.position.x + body.velocity.x * dt;
        let horizontal = Rect::from_center(Vec2::new(new_x, body.position.y), half);
        if let Some(hit) = world.first_overlap(&horizontal) {
            if body.velocity.x > 0.0 {
                body.position.x = hit.x - half.x;
            } else if body.velocity.x < 0.0 {
                body.position.x = hit.right() + half.x;
            }
            body.velocity.x = 0.0;
        } else {
            body.position.x = new_x;
        }

        let new_y = body.position.y + body.velocity.y * dt;
        let vertical = Rect::from_center(Vec2::new(body.position.x, new_y), half);
        if let Some(hit) = world.first_overlap(&vertical) {
            if body.velocity.y < 0.0 {
                body.position.y = hit.top() + half.y;
            } else if body.velocity.y > 0.0 {
                body.position.y = hit.y - half.y;
            }
            body.velocity.y = 0.0;
        } else {
            body.position.y = new_y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{WorldDef, LevelDef, WorldState};
    use crate::game::camera::CameraSettings;

    const DT: f32 = 1.0 / 60.0;

    fn flat_world() -> WorldState {
        let def = WorldDef {
            name: "flat".to_string(),
            levels: vec![LevelDef {
                name: "floor".to_string(),
                ground: vec![Rect::new(-50.0, -2.0, 100.0, 2.0)],
                tint: [0.5, 0.5, 0.5],
            }],
            start_level: "floor".to_string(),
            player_start: Vec2::new(0.0, 0.5),
            player: PlayerSettings::default(),
            camera: CameraSettings::default(),
            transitions: Vec::new(),
        };
        WorldState::new(&def)
    }

    fn standing_body() -> Body {
        // Floor top is y = 0, player half height 0.5
        Body::at(Vec2::new(0.0, 0.5))
    }

    fn idle_input() -> InputFrame {
        InputFrame::default()
    }

    #[test]
    fn test_grounded_on_floor() {
        let world = flat_world();
        let mut movement = Movement::new(PlayerSettings::default());
        let mut body = standing_body();

        movement.fixed_update(&mut body, &world, &idle_input(), DT);
        assert!(movement.is_grounded());
        // Still resting on the floor surface
        assert!((body.position.y - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let world = flat_world();
        let mut movement = Movement::new(PlayerSettings::default());
        let mut body = standing_body();

        let press = InputFrame {
            jump_pressed: true,
            jump_held: true,
            ..InputFrame::default()
        };
        let jumped = movement.fixed_update(&mut body, &world, &press, DT);
        assert!(jumped);
        assert!(body.velocity.y > 0.0);

        // Rise clear of the ground probe, then press again mid-air
        let held = InputFrame { jump_held: true, ..InputFrame::default() };
        for _ in 0..3 {
            movement.fixed_update(&mut body, &world, &held, DT);
        }
        assert!(!movement.is_grounded());

        let rising = body.velocity.y;
        let jumped_again = movement.fixed_update(&mut body, &world, &press, DT);
        assert!(!jumped_again);
        assert!(body.velocity.y < rising);
    }

    #[test]
    fn test_falling_uses_fall_multiplier() {
        let world = flat_world();
        let settings = PlayerSettings::default();
        let mut movement = Movement::new(settings);
        // High in the air, already descending
        let mut body = Body::at(Vec2::new(0.0, 20.0));
        body.velocity.y = -1.0;

        movement.fixed_update(&mut body, &world, &idle_input(), DT);
        let expected = -1.0 + settings.gravity * settings.fall_multiplier * DT;
        assert!((body.velocity.y - expected).abs() < 1e-4);
    }

    #[test]
    fn test_released_jump_rises_slower() {
        let world = flat_world();
        let settings = PlayerSettings::default();

        let mut held = Body::at(Vec2::new(0.0, 20.0));
        held.velocity.y = 8.0;
        let mut released = held;

        let mut m1 = Movement::new(settings);
        let mut m2 = Movement::new(settings);
        m1.fixed_update(
            &mut held,
            &world,
            &InputFrame { jump_held: true, ..InputFrame::default() },
            DT,
        );
        m2.fixed_update(&mut released, &world, &idle_input(), DT);

        // Low-jump gravity cut bleeds upward velocity faster
        assert!(released.velocity.y < held.velocity.y);
    }

    #[test]
    fn test_lands_on_floor() {
        let world = flat_world();
        let mut movement = Movement::new(PlayerSettings::default());
        let mut body = Body::at(Vec2::new(0.0, 5.0));

        for _ in 0..600 {
            movement.fixed_update(&mut body, &world, &idle_input(), DT);
        }
        assert!(movement.is_grounded());
        assert!((body.position.y - 0.5).abs() < 1e-3);
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn test_grounded_move_sets_exact_speed() {
        let world = flat_world();
        let settings = PlayerSettings::default();
        let mut movement = Movement::new(settings);
        let mut body = standing_body();

        let input = InputFrame { move_axis: 1.0, ..InputFrame::default() };
        movement.fixed_update(&mut body, &world, &input, DT);
        assert_eq!(body.velocity.x, settings.speed);
    }

    #[test]
    fn test_degenerate_probe_disables_grounding() {
        let world = flat_world();
        let settings = PlayerSettings {
            ground_probe_radius: 0.0,
            ..PlayerSettings::default()
        };
        let mut movement = Movement::new(settings);
        let mut body = standing_body();

        movement.fixed_update(&mut body, &world, &idle_input(), DT);
        assert!(!movement.is_grounded());
    }
}
