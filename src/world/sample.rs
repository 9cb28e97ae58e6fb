//! Built-in sample world
//!
//! Two levels in a gorge, wired with transitions in both directions.
//! Used by the demo when no world file is present, and by tests that need
//! a realistic world definition.

use crate::math::{Vec2, Rect};
use crate::game::player::PlayerSettings;
use crate::game::camera::CameraSettings;
use crate::game::transition::TransitionEntry;
use super::{WorldDef, LevelDef};

pub fn sample_world() -> WorldDef {
    WorldDef {
        name: "gorge".to_string(),
        levels: vec![
            LevelDef {
                name: "gorge-west".to_string(),
                ground: vec![
                    // Floor
                    Rect::new(-24.0, -4.0, 48.0, 3.0),
                    // Stepping platforms
                    Rect::new(-8.0, 0.5, 4.0, 0.6),
                    Rect::new(2.0, 2.0, 4.0, 0.6),
                    Rect::new(12.0, 3.5, 4.0, 0.6),
                ],
                tint: [0.45, 0.42, 0.38],
            },
            LevelDef {
                name: "gorge-east".to_string(),
                ground: vec![
                    Rect::new(22.0, -4.0, 52.0, 3.0),
                    Rect::new(36.0, 0.5, 5.0, 0.6),
                    Rect::new(52.0, 1.5, 5.0, 0.6),
                ],
                tint: [0.36, 0.42, 0.46],
            },
        ],
        start_level: "gorge-west".to_string(),
        player_start: Vec2::new(0.0, 0.5),
        player: PlayerSettings::default(),
        camera: CameraSettings {
            left_boundary: -20.0,
            right_boundary: 20.0,
            ..CameraSettings::default()
        },
        transitions: vec![
            TransitionEntry {
                from_level: "gorge-west".to_string(),
                to_level: "gorge-east".to_string(),
                spawn_point: Vec2::new(26.0, 0.5),
                images: vec![
                    "descent-01".to_string(),
                    "descent-02".to_string(),
                ],
                new_left_boundary: 24.0,
                new_right_boundary: 72.0,
            },
            TransitionEntry {
                from_level: "gorge-east".to_string(),
                to_level: "gorge-west".to_string(),
                spawn_point: Vec2::new(0.0, 0.5),
                images: Vec::new(),
                new_left_boundary: -20.0,
                new_right_boundary: 20.0,
            },
        ],
    }
}
