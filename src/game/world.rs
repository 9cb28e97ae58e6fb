//! Game orchestration
//!
//! `GameWorld` owns every gameplay component and wires them together:
//! input flows into player movement, the moved body feeds the camera, a
//! boundary hit starts the next transition, and a completed transition
//! swaps levels, relocates the player, and rewrites the camera bounds.
//! Keeping both the camera and the sequencer behind one owner is what lets
//! the transition completion mutate camera state without shared references.

use crate::input::InputFrame;
use crate::world::{WorldDef, WorldState};
use crate::audio::{AudioDirector, SoundCue};
use super::player::{Body, Movement};
use super::camera::CameraController;
use super::transition::{TransitionScreen, TransitionSequencer, TransitionEffects};
use super::event::{Events, BoundaryHitEvent, TransitionStartedEvent, TransitionFinishedEvent, JumpEvent};

/// Fixed physics step, seconds. Air control responsiveness is tied to
/// this rate, so it is a constant rather than the frame delta.
pub const PHYSICS_STEP: f32 = 1.0 / 60.0;

/// Cap on accumulated frame time, so a long hitch cannot spiral into an
/// unbounded number of catch-up steps
const MAX_FRAME_DELTA: f32 = 0.25;

/// The running game: world state, player, camera, transitions, events
pub struct GameWorld {
    pub world: WorldState,
    pub body: Body,
    pub movement: Movement,
    pub camera: CameraController,
    pub sequencer: TransitionSequencer,
    pub events: Events,
    pub audio: AudioDirector,
    accumulator: f32,
    /// Jump press awaiting the next physics step. Frames shorter than the
    /// physics step run zero steps, so the edge has to outlive its frame.
    pending_jump: bool,
}

impl GameWorld {
    pub fn new(def: &WorldDef) -> Self {
        Self {
            world: WorldState::new(def),
            body: Body::at(def.player_start),
            movement: Movement::new(def.player),
            camera: CameraController::new(def.camera),
            sequencer: TransitionSequencer::new(def.transitions.clone()),
            events: Events::new(),
            audio: AudioDirector::new(),
            accumulator: 0.0,
            pending_jump: false,
        }
    }

    /// The transition UI surface, for rendering
    pub fn transition_screen(&self) -> &TransitionScreen {
        self.sequencer.screen()
    }

    /// One fixed-rate physics step
    pub fn fixed_update(&mut self, input: &InputFrame, dt: f32) {
        let jumped = self
            .movement
            .fixed_update(&mut self.body, &self.world, input, dt);
        if jumped {
            self.events.jumped.send(JumpEvent { position: self.body.position });
        }
    }

    /// Per-frame update, run after the physics steps of the frame so the
    /// camera samples the already-moved body.
    pub fn update(&mut self, input: &InputFrame, time: f32, dt: f32) {
        // Route the advance signal while transition artwork is up
        if input.interact_pressed && self.sequencer.is_awaiting_input() {
            self.audio.play_one_shot(SoundCue::PageTurn);
            if let Some(effects) = self.sequencer.advance() {
                self.apply_transition(effects);
            }
        }

        // Tick the zero-image fixed wait
        if let Some(effects) = self.sequencer.update(dt) {
            self.apply_transition(effects);
        }

        let frame = self.camera.update(self.body.position, time, dt);

        if let Some(edge) = frame.boundary_hit {
            self.audio.play_one_shot(SoundCue::BoundaryThud);
            self.events.boundary_hit.send(BoundaryHitEvent {
                edge,
                camera_x: frame.position.x,
            });
            if let Some(entry_index) = self.sequencer.start_next_transition() {
                self.events
                    .transition_started
                    .send(TransitionStartedEvent { entry_index });
            }
        }

        self.audio.set_rumble(frame.rumble_volume);
    }

    /// Full frame: catch up fixed physics steps, then the per-frame
    /// update. A jump press is buffered until a physics step consumes it,
    /// so presses arriving on frames that run zero steps (render rate above
    /// the physics rate) still jump on the next step; it applies to one
    /// step only. Events are cleared at the end; callers that want them
    /// should drive `fixed_update`/`update` directly.
    pub fn frame(&mut self, input: &InputFrame, time: f32, dt: f32) {
        self.accumulator = (self.accumulator + dt).min(MAX_FRAME_DELTA);
        self.pending_jump |= input.jump_pressed;

        let mut step_input = *input;
        while self.accumulator >= PHYSICS_STEP {
            step_input.jump_pressed = self.pending_jump;
            self.fixed_update(&step_input, PHYSICS_STEP);
            self.pending_jump = false;
            step_input = step_input.without_edges();
            self.accumulator -= PHYSICS_STEP;
        }

        self.update(input, time, dt);
        self.events.clear_all();
    }

    /// Apply a completed transition: swap levels, relocate the player,
    /// and overwrite the camera bounds. Runs synchronously in the tick
    /// that completed the transition.
    fn apply_transition(&mut self, effects: TransitionEffects) {
        self.world.deactivate(&effects.from_level);
        self.world.activate(&effects.to_level);
        self.body.position = effects.spawn_point;
        self.camera
            .set_bounds(effects.new_left_boundary, effects.new_right_boundary);

        println!("transition complete: now in '{}'", effects.to_level);
        self.audio.play_one_shot(SoundCue::TransitionDone);
        self.events.transition_finished.send(TransitionFinishedEvent {
            entry_index: effects.entry_index,
            to_level: effects.to_level,
            spawn_point: effects.spawn_point,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Vec2, Rect};
    use crate::world::LevelDef;
    use crate::game::player::PlayerSettings;
    use crate::game::camera::CameraSettings;
    use crate::game::transition::TransitionEntry;

    const DT: f32 = 1.0 / 60.0;

    /// Two levels, camera bounds -20..20, one zero-image transition to
    /// bounds (-10, 10) with spawn (5, 0)
    fn transition_world() -> WorldDef {
        WorldDef {
            name: "e2e".to_string(),
            levels: vec![
                LevelDef {
                    name: "from".to_string(),
                    ground: vec![Rect::new(-50.0, -2.0, 100.0, 2.0)],
                    tint: [0.5, 0.5, 0.5],
                },
                LevelDef {
                    name: "to".to_string(),
                    ground: vec![Rect::new(-50.0, -2.0, 100.0, 2.0)],
                    tint: [0.5, 0.5, 0.5],
                },
            ],
            start_level: "from".to_string(),
            player_start: Vec2::new(0.0, 0.5),
            player: PlayerSettings::default(),
            camera: CameraSettings {
                offset: Vec2::ZERO,
                ..CameraSettings::default()
            },
            transitions: vec![TransitionEntry {
                from_level: "from".to_string(),
                to_level: "to".to_string(),
                spawn_point: Vec2::new(5.0, 0.0),
                images: Vec::new(),
                new_left_boundary: -10.0,
                new_right_boundary: 10.0,
            }],
        }
    }

    #[test]
    fn test_boundary_hit_starts_transition_once() {
        let mut game = GameWorld::new(&transition_world());
        // Park the player past the left boundary
        game.body.position = Vec2::new(-25.0, 0.5);

        game.update(&InputFrame::default(), 0.0, DT);
        assert_eq!(game.events.boundary_hit.len(), 1);
        assert_eq!(game.events.transition_started.len(), 1);
        assert!(game.sequencer.is_active());

        // Dwelling does not re-trigger, and the in-flight transition
        // rejects further starts
        game.update(&InputFrame::default(), DT, DT);
        assert_eq!(game.events.boundary_hit.len(), 1);
    }

    #[test]
    fn test_end_to_end_zero_image_transition() {
        let mut game = GameWorld::new(&transition_world());
        game.body.position = Vec2::new(-25.0, 0.5);

        // Frame 1: boundary hit, transition starts its fixed wait
        game.update(&InputFrame::default(), 0.0, DT);
        assert!(game.sequencer.is_active());
        assert!(game.transition_screen().visible);

        // Run updates until the 1 s wait elapses
        let mut time = 0.0;
        for _ in 0..80 {
            time += DT;
            game.update(&InputFrame::default(), time, DT);
        }

        assert!(!game.sequencer.is_active());
        assert_eq!(game.camera.settings.left_boundary, -10.0);
        assert_eq!(game.camera.settings.right_boundary, 10.0);
        assert_eq!(game.body.position, Vec2::new(5.0, 0.0));
        assert!(!game.world.is_active("from"));
        assert!(game.world.is_active("to"));
        assert!(!game.transition_screen().visible);
        // Applied exactly once
        assert_eq!(game.events.transition_finished.len(), 1);
    }

    #[test]
    fn test_interact_advances_artwork() {
        let mut def = transition_world();
        def.transitions[0].images =
            vec!["card-1".to_string(), "card-2".to_string()];
        let mut game = GameWorld::new(&def);
        game.body.position = Vec2::new(-25.0, 0.5);

        game.update(&InputFrame::default(), 0.0, DT);
        assert_eq!(game.transition_screen().image.as_deref(), Some("card-1"));

        let interact = InputFrame { interact_pressed: true, ..InputFrame::default() };
        game.update(&interact, DT, DT);
        assert_eq!(game.transition_screen().image.as_deref(), Some("card-2"));
        assert!(game.sequencer.is_active());

        // Second advance completes and applies the swap
        game.update(&interact, DT * 2.0, DT);
        assert!(!game.sequencer.is_active());
        assert_eq!(game.body.position, Vec2::new(5.0, 0.0));

        // Interact while idle is ignored
        game.update(&interact, DT * 3.0, DT);
        assert_eq!(game.body.position, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_frame_steps_physics_and_clears_events() {
        let mut game = GameWorld::new(&transition_world());

        let jump = InputFrame {
            jump_pressed: true,
            jump_held: true,
            ..InputFrame::default()
        };
        // A frame spanning several physics steps applies the jump edge once
        game.frame(&jump, 0.0, 3.5 * PHYSICS_STEP);
        assert!(game.body.velocity.y > 0.0);
        // frame() clears the event queues after the update
        assert!(game.events.jumped.is_empty());
    }

    #[test]
    fn test_jump_press_survives_zero_step_frame() {
        let mut game = GameWorld::new(&transition_world());

        // A frame shorter than the physics step runs zero steps; the press
        // must not vanish with it
        let press = InputFrame {
            jump_pressed: true,
            jump_held: true,
            ..InputFrame::default()
        };
        game.frame(&press, 0.0, 0.4 * PHYSICS_STEP);
        assert_eq!(game.body.velocity.y, 0.0);

        // The next frame accumulates enough for one step, which consumes
        // the buffered press
        let held = InputFrame { jump_held: true, ..InputFrame::default() };
        game.frame(&held, DT, 0.7 * PHYSICS_STEP);
        assert!(game.body.velocity.y > 0.0);

        // Consumed: further frames without a press do not re-jump
        let vy = game.body.velocity.y;
        game.frame(&held, DT * 2.0, PHYSICS_STEP);
        assert!(game.body.velocity.y < vy);
    }

    #[test]
    fn test_rumble_follows_camera() {
        let mut game = GameWorld::new(&transition_world());
        game.body.position = Vec2::new(-19.0, 0.5);

        game.update(&InputFrame::default(), 0.0, DT);
        assert!(game.audio.rumble_playing());
        assert!(game.audio.rumble_volume() > 0.0);

        game.body.position = Vec2::new(0.0, 0.5);
        game.update(&InputFrame::default(), DT, DT);
        assert!(!game.audio.rumble_playing());
    }
}
