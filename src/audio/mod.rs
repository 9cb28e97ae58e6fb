//! Audio direction
//!
//! The simulation describes what should be heard; it never touches a
//! device. One-shot cues queue up until a frontend drains them, and the
//! boundary rumble is a loop source whose volume tracks shake intensity.
//! A frontend with no sound assets can ignore all of it and the game keeps
//! running.

/// Sound cues the simulation can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Camera hit a level boundary
    BoundaryThud,
    /// Transition artwork advanced
    PageTurn,
    /// Transition completed
    TransitionDone,
}

/// Frame-level audio state owned by the simulation
#[derive(Debug, Default)]
pub struct AudioDirector {
    one_shots: Vec<SoundCue>,
    rumble_volume: f32,
    rumble_playing: bool,
}

impl AudioDirector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a one-shot cue for the frontend
    pub fn play_one_shot(&mut self, cue: SoundCue) {
        self.one_shots.push(cue);
    }

    /// Take the queued one-shot cues
    pub fn drain_one_shots(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.one_shots)
    }

    /// Track the rumble loop volume; the loop plays while volume is above
    /// zero and stops when it returns to zero.
    pub fn set_rumble(&mut self, volume: f32) {
        self.rumble_volume = volume.clamp(0.0, 1.0);
        self.rumble_playing = self.rumble_volume > 0.0;
    }

    pub fn rumble_volume(&self) -> f32 {
        self.rumble_volume
    }

    pub fn rumble_playing(&self) -> bool {
        self.rumble_playing
    }
}
