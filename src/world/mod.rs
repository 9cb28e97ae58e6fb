//! World data model
//!
//! A world is a set of named levels (flat ground-collider lists), a player
//! start, tuning blocks for player and camera, and the ordered list of
//! level transitions. Authored as RON files, loaded once at startup and
//! never mutated; `WorldState` carries the only runtime bit per level
//! (its active flag).

pub mod io;
pub mod sample;

pub use io::{load_world, load_world_from_str, save_world, validate_world, WorldError};
pub use sample::sample_world;

use serde::{Serialize, Deserialize};
use crate::math::{Vec2, Rect};
use crate::game::player::PlayerSettings;
use crate::game::camera::CameraSettings;
use crate::game::transition::TransitionEntry;

/// One authored level: a name and its ground colliders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelDef {
    pub name: String,
    /// Ground-layer colliders (world space, axis aligned)
    pub ground: Vec<Rect>,
    /// Flat render color for the demo, RGB in [0,1]
    #[serde(default = "default_tint")]
    pub tint: [f32; 3],
}

fn default_tint() -> [f32; 3] {
    [0.45, 0.42, 0.38]
}

/// Complete authored world definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldDef {
    pub name: String,
    pub levels: Vec<LevelDef>,
    /// The one level active at startup
    pub start_level: String,
    pub player_start: Vec2,
    #[serde(default)]
    pub player: PlayerSettings,
    #[serde(default)]
    pub camera: CameraSettings,
    /// Consumed strictly in order; the index never decreases or wraps
    #[serde(default)]
    pub transitions: Vec<TransitionEntry>,
}

/// Runtime state of one level
#[derive(Debug, Clone)]
pub struct LevelState {
    pub def: LevelDef,
    pub active: bool,
}

/// Runtime view over the authored levels.
///
/// Exactly one level is active at startup; transitions flip active flags
/// as the player moves through the world.
#[derive(Debug)]
pub struct WorldState {
    pub levels: Vec<LevelState>,
}

impl WorldState {
    pub fn new(def: &WorldDef) -> Self {
        let levels = def
            .levels
            .iter()
            .map(|l| LevelState {
                def: l.clone(),
                active: l.name == def.start_level,
            })
            .collect();
        Self { levels }
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut LevelState> {
        self.levels.iter_mut().find(|l| l.def.name == name)
    }

    /// Activate a level by name. Unknown names degrade with a warning.
    pub fn activate(&mut self, name: &str) {
        match self.find_mut(name) {
            Some(level) => level.active = true,
            None => eprintln!("activate: unknown level '{}'", name),
        }
    }

    /// Deactivate a level by name. Unknown names degrade with a warning.
    pub fn deactivate(&mut self, name: &str) {
        match self.find_mut(name) {
            Some(level) => level.active = false,
            None => eprintln!("deactivate: unknown level '{}'", name),
        }
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.levels
            .iter()
            .any(|l| l.def.name == name && l.active)
    }

    /// Iterate active levels (for rendering and collision)
    pub fn active_levels(&self) -> impl Iterator<Item = &LevelState> {
        self.levels.iter().filter(|l| l.active)
    }

    /// Circle query against the ground colliders of active levels.
    /// This is the "overlap circle against ground layer" ground probe.
    pub fn overlap_circle(&self, center: Vec2, radius: f32) -> bool {
        self.active_levels()
            .flat_map(|l| l.def.ground.iter())
            .any(|r| r.overlap_circle(center, radius))
    }

    /// AABB query against the ground colliders of active levels,
    /// returning the first overlapping collider.
    pub fn first_overlap(&self, aabb: &Rect) -> Option<&Rect> {
        self.active_levels()
            .flat_map(|l| l.def.ground.iter())
            .find(|r| r.intersects(aabb))
    }
}
