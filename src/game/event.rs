//! Event system
//!
//! Events decouple gameplay systems from the frontends that react to them:
//! the simulation sends boundary hits and transition milestones, and a
//! frontend can read them for sound, logging, or screen feedback without
//! the systems knowing about each other. Queues are drained or cleared at
//! the end of each frame.

use crate::math::Vec2;
use super::camera::Edge;

/// Typed queue of gameplay events. Fills during the frame; the
/// orchestrator empties every queue at end of frame, so nothing outlives
/// the frame that produced it.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Queue an event for this frame
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Take every queued event, leaving the queue empty
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Container for all game events
#[derive(Debug, Default)]
pub struct Events {
    /// Camera reached a level boundary (at most once per dwell)
    pub boundary_hit: EventQueue<BoundaryHitEvent>,

    /// A transition entry started
    pub transition_started: EventQueue<TransitionStartedEvent>,

    /// A transition completed and its effects were applied
    pub transition_finished: EventQueue<TransitionFinishedEvent>,

    /// The player jumped
    pub jumped: EventQueue<JumpEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty every queue. Called once per frame by the orchestrator.
    pub fn clear_all(&mut self) {
        self.boundary_hit.clear();
        self.transition_started.clear();
        self.transition_finished.clear();
        self.jumped.clear();
    }
}

// =============================================================================
// Event Types
// =============================================================================

/// The camera dwelled into a level boundary
#[derive(Debug, Clone, Copy)]
pub struct BoundaryHitEvent {
    pub edge: Edge,
    /// Clamped camera x at the moment of the hit
    pub camera_x: f32,
}

/// A transition entry was started
#[derive(Debug, Clone, Copy)]
pub struct TransitionStartedEvent {
    pub entry_index: usize,
}

/// A transition completed; level swap and relocation already applied
#[derive(Debug, Clone)]
pub struct TransitionFinishedEvent {
    pub entry_index: usize,
    pub to_level: String,
    pub spawn_point: Vec2,
}

/// The player left the ground
#[derive(Debug, Clone, Copy)]
pub struct JumpEvent {
    pub position: Vec2,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_queue() {
        let mut queue: EventQueue<i32> = EventQueue::new();

        queue.send(1);
        queue.send(2);
        queue.send(3);

        assert_eq!(queue.len(), 3);

        let collected: Vec<_> = queue.drain().collect();
        assert_eq!(collected, vec![1, 2, 3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_events_container() {
        let mut events = Events::new();

        events.boundary_hit.send(BoundaryHitEvent {
            edge: Edge::Left,
            camera_x: -20.0,
        });
        events.jumped.send(JumpEvent { position: Vec2::ZERO });

        assert_eq!(events.boundary_hit.len(), 1);

        events.clear_all();
        assert!(events.boundary_hit.is_empty());
        assert!(events.jumped.is_empty());
    }
}
