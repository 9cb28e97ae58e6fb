//! Level transition sequencer
//!
//! Consumes an ordered list of transition entries, one per boundary
//! trigger. Each transition shows its artwork images one at a time
//! (advanced by the interact action), or waits a fixed beat when an entry
//! has no artwork, then completes: level swap, player relocation, and new
//! camera boundaries, all applied synchronously by the orchestrator.

use serde::{Serialize, Deserialize};
use crate::math::Vec2;

/// Fixed delay before completing an entry with no artwork, seconds
pub const ZERO_IMAGE_DELAY: f32 = 1.0;

/// One configured level-to-level handoff. Authored in the world file,
/// never mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionEntry {
    pub from_level: String,
    pub to_level: String,
    /// Where the player lands in the destination level
    pub spawn_point: Vec2,
    /// Artwork shown in order, advanced by the interact action
    #[serde(default)]
    pub images: Vec<String>,
    pub new_left_boundary: f32,
    pub new_right_boundary: f32,
}

/// The UI surface the frontend renders: a visibility toggle and the
/// current artwork name.
#[derive(Debug, Clone, Default)]
pub struct TransitionScreen {
    pub visible: bool,
    pub image: Option<String>,
}

/// Everything a completed transition changes, applied synchronously by
/// the orchestrator in the same tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionEffects {
    pub entry_index: usize,
    pub from_level: String,
    pub to_level: String,
    pub spawn_point: Vec2,
    pub new_left_boundary: f32,
    pub new_right_boundary: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    /// Showing `image` and awaiting the advance input
    ShowingImage { image: usize },
    /// Fixed delay for a zero-image entry
    Waiting { remaining: f32 },
}

/// The transition state machine. One instance per session; a second start
/// request while a transition is in flight is rejected.
#[derive(Debug)]
pub struct TransitionSequencer {
    entries: Vec<TransitionEntry>,
    /// Index of the next entry to consume; monotonically non-decreasing
    next_index: usize,
    /// Entry currently in flight
    active: Option<usize>,
    phase: Phase,
    screen: TransitionScreen,
}

impl TransitionSequencer {
    pub fn new(entries: Vec<TransitionEntry>) -> Self {
        Self {
            entries,
            next_index: 0,
            active: None,
            phase: Phase::Idle,
            screen: TransitionScreen::default(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Awaiting the external advance signal
    pub fn is_awaiting_input(&self) -> bool {
        matches!(self.phase, Phase::ShowingImage { .. })
    }

    /// Index of the next unconsumed entry
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    pub fn screen(&self) -> &TransitionScreen {
        &self.screen
    }

    /// Begin the next configured transition. Rejected with a warning while
    /// one is in flight or when the list is exhausted; neither is an error.
    /// Returns the index of the entry that started.
    pub fn start_next_transition(&mut self) -> Option<usize> {
        if self.active.is_some() {
            eprintln!("transition: already in flight, ignoring start request");
            return None;
        }
        if self.next_index >= self.entries.len() {
            eprintln!("transition: no more transitions configured");
            return None;
        }

        let index = self.next_index;
        self.next_index += 1;
        self.active = Some(index);
        self.screen.visible = true;

        println!(
            "starting transition {} of {}",
            index + 1,
            self.entries.len()
        );

        if self.entries[index].images.is_empty() {
            // Straight to the level change after a fixed beat
            self.screen.image = None;
            self.phase = Phase::Waiting { remaining: ZERO_IMAGE_DELAY };
        } else {
            self.show_image(index, 0);
        }

        Some(index)
    }

    /// External advance signal. Accepted only while showing an image;
    /// steps to the next one or completes the transition.
    pub fn advance(&mut self) -> Option<TransitionEffects> {
        let Phase::ShowingImage { image } = self.phase else {
            return None;
        };
        let index = self.active?;

        let next = image + 1;
        if next < self.entries[index].images.len() {
            self.show_image(index, next);
            None
        } else {
            Some(self.complete(index))
        }
    }

    /// Tick the fixed-delay wait. Returns effects when the wait elapses.
    pub fn update(&mut self, dt: f32) -> Option<TransitionEffects> {
        let Phase::Waiting { remaining } = self.phase else {
            return None;
        };
        let index = self.active?;

        let remaining = remaining - dt;
        if remaining <= 0.0 {
            Some(self.complete(index))
        } else {
            self.phase = Phase::Waiting { remaining };
            None
        }
    }

    fn show_image(&mut self, index: usize, image: usize) {
        self.screen.image = Some(self.entries[index].images[image].clone());
        self.phase = Phase::ShowingImage { image };
    }

    /// Synchronous completion: hide the screen, return to Idle, and hand
    /// the level swap back to the orchestrator.
    fn complete(&mut self, index: usize) -> TransitionEffects {
        let entry = &self.entries[index];
        let effects = TransitionEffects {
            entry_index: index,
            from_level: entry.from_level.clone(),
            to_level: entry.to_level.clone(),
            spawn_point: entry.spawn_point,
            new_left_boundary: entry.new_left_boundary,
            new_right_boundary: entry.new_right_boundary,
        };

        self.phase = Phase::Idle;
        self.active = None;
        self.screen.visible = false;
        self.screen.image = None;

        effects
    }
}
