//! Keyboard input state
//!
//! Polls macroquad's keyboard and folds it into the action-based API and
//! the per-frame `InputFrame` snapshot the simulation consumes.

use macroquad::prelude::*;
use super::{Action, InputFrame};

/// Keyboard-backed input source for the demo binary
#[derive(Debug, Default)]
pub struct InputState;

impl InputState {
    pub fn new() -> Self {
        Self
    }

    /// Check if action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
            Action::MoveRight => is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
            Action::Jump => is_key_down(KeyCode::Space),
            Action::Interact => is_key_down(KeyCode::E),
            Action::ToggleDebug => is_key_down(KeyCode::F1),
            Action::Reset => is_key_down(KeyCode::R),
        }
    }

    /// Check if action was just pressed this frame
    pub fn action_pressed(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => is_key_pressed(KeyCode::A) || is_key_pressed(KeyCode::Left),
            Action::MoveRight => is_key_pressed(KeyCode::D) || is_key_pressed(KeyCode::Right),
            Action::Jump => is_key_pressed(KeyCode::Space),
            Action::Interact => is_key_pressed(KeyCode::E),
            Action::ToggleDebug => is_key_pressed(KeyCode::F1),
            Action::Reset => is_key_pressed(KeyCode::R),
        }
    }

    /// Build this frame's input snapshot
    pub fn frame(&self) -> InputFrame {
        let mut axis = 0.0;
        if self.action_down(Action::MoveLeft) {
            axis -= 1.0;
        }
        if self.action_down(Action::MoveRight) {
            axis += 1.0;
        }

        InputFrame {
            move_axis: axis,
            jump_pressed: self.action_pressed(Action::Jump),
            jump_held: self.action_down(Action::Jump),
            interact_pressed: self.action_pressed(Action::Interact),
        }
    }
}
