//! Game action definitions
//!
//! A single shared action vocabulary for all components, instead of each
//! component owning its own binding set.

/// All actions the game responds to
///
/// Key mappings (demo binary):
/// - A/D or Left/Right = Move
/// - Space = Jump
/// - E = Interact (advance transition artwork)
/// - F1 = Toggle debug overlay
/// - R = Reset world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Interact,

    // Demo/system actions
    ToggleDebug,
    Reset,
}

/// Per-frame input snapshot consumed by the simulation.
///
/// `*_pressed` fields are edges (true on the frame the key went down),
/// `jump_held` is level state used for the low-jump gravity cut.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputFrame {
    /// Horizontal move intent in [-1, 1]
    pub move_axis: f32,
    pub jump_pressed: bool,
    pub jump_held: bool,
    pub interact_pressed: bool,
}

impl InputFrame {
    /// Snapshot with all edges cleared, keeping level state.
    /// Used when one frame spans several physics steps so a jump press
    /// only fires on the first step.
    pub fn without_edges(&self) -> InputFrame {
        InputFrame {
            move_axis: self.move_axis,
            jump_pressed: false,
            jump_held: self.jump_held,
            interact_pressed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_edges() {
        let frame = InputFrame {
            move_axis: -1.0,
            jump_pressed: true,
            jump_held: true,
            interact_pressed: true,
        };
        let next = frame.without_edges();
        assert_eq!(next.move_axis, -1.0);
        assert!(next.jump_held);
        assert!(!next.jump_pressed);
        assert!(!next.interact_pressed);
    }
}
