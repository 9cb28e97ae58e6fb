//! World loading and saving
//!
//! Uses RON (Rusty Object Notation) for human-readable world files.
//! Every load runs a validation pass so a bad file degrades into an error
//! at startup instead of NaNs mid-game.

use std::fs;
use std::path::Path;
use super::WorldDef;
use crate::math::{Vec2, Rect};
use crate::game::transition::TransitionEntry;

/// Validation limits to prevent resource exhaustion from malicious files
pub mod limits {
    /// Maximum number of levels in a world
    pub const MAX_LEVELS: usize = 64;
    /// Maximum ground colliders per level
    pub const MAX_COLLIDERS: usize = 512;
    /// Maximum transition entries
    pub const MAX_TRANSITIONS: usize = 64;
    /// Maximum artwork images per transition
    pub const MAX_IMAGES: usize = 32;
    /// Maximum string length for names
    pub const MAX_STRING_LEN: usize = 128;
    /// Maximum coordinate value (prevents overflow issues)
    pub const MAX_COORD: f32 = 1_000_000.0;
}

/// Error type for world loading
#[derive(Debug)]
pub enum WorldError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
    ValidationError(String),
}

impl From<std::io::Error> for WorldError {
    fn from(e: std::io::Error) -> Self {
        WorldError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for WorldError {
    fn from(e: ron::error::SpannedError) -> Self {
        WorldError::ParseError(e)
    }
}

impl From<ron::Error> for WorldError {
    fn from(e: ron::Error) -> Self {
        WorldError::SerializeError(e)
    }
}

impl std::fmt::Display for WorldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorldError::IoError(e) => write!(f, "IO error: {}", e),
            WorldError::ParseError(e) => write!(f, "Parse error: {}", e),
            WorldError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            WorldError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for WorldError {}

/// Check if a float is valid (not NaN or Inf, within coordinate limits)
fn is_valid_float(f: f32) -> bool {
    f.is_finite() && f.abs() <= limits::MAX_COORD
}

fn validate_vec2(v: Vec2, context: &str) -> Result<(), String> {
    if !is_valid_float(v.x) || !is_valid_float(v.y) {
        return Err(format!("{}: invalid vector ({}, {})", context, v.x, v.y));
    }
    Ok(())
}

fn validate_rect(r: &Rect, context: &str) -> Result<(), String> {
    for (label, value) in [("x", r.x), ("y", r.y), ("w", r.w), ("h", r.h)] {
        if !is_valid_float(value) {
            return Err(format!("{}: invalid {} = {}", context, label, value));
        }
    }
    if r.w < 0.0 || r.h < 0.0 {
        return Err(format!("{}: negative size ({} x {})", context, r.w, r.h));
    }
    Ok(())
}

fn validate_name(name: &str, context: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err(format!("{}: empty name", context));
    }
    if name.len() > limits::MAX_STRING_LEN {
        return Err(format!("{}: name too long ({} > {})",
            context, name.len(), limits::MAX_STRING_LEN));
    }
    Ok(())
}

fn validate_transition(
    entry: &TransitionEntry,
    idx: usize,
    world: &WorldDef,
) -> Result<(), String> {
    let context = format!("transition[{}]", idx);

    for name in [&entry.from_level, &entry.to_level] {
        validate_name(name, &context)?;
        if !world.levels.iter().any(|l| &l.name == name) {
            return Err(format!("{}: unknown level '{}'", context, name));
        }
    }

    validate_vec2(entry.spawn_point, &format!("{} spawn_point", context))?;

    if !is_valid_float(entry.new_left_boundary) || !is_valid_float(entry.new_right_boundary) {
        return Err(format!("{}: invalid boundary values", context));
    }
    if entry.new_left_boundary >= entry.new_right_boundary {
        return Err(format!("{}: left boundary {} is not below right boundary {}",
            context, entry.new_left_boundary, entry.new_right_boundary));
    }

    if entry.images.len() > limits::MAX_IMAGES {
        return Err(format!("{}: too many images ({} > {})",
            context, entry.images.len(), limits::MAX_IMAGES));
    }
    for (i, image) in entry.images.iter().enumerate() {
        validate_name(image, &format!("{} image[{}]", context, i))?;
    }

    Ok(())
}

/// Validate an entire world definition
pub fn validate_world(world: &WorldDef) -> Result<(), WorldError> {
    let check = || -> Result<(), String> {
        validate_name(&world.name, "world")?;

        if world.levels.len() > limits::MAX_LEVELS {
            return Err(format!("too many levels ({} > {})",
                world.levels.len(), limits::MAX_LEVELS));
        }
        if world.levels.is_empty() {
            return Err("world has no levels".to_string());
        }

        for (i, level) in world.levels.iter().enumerate() {
            let context = format!("level[{}]", i);
            validate_name(&level.name, &context)?;
            if level.ground.len() > limits::MAX_COLLIDERS {
                return Err(format!("{}: too many colliders ({} > {})",
                    context, level.ground.len(), limits::MAX_COLLIDERS));
            }
            for (j, rect) in level.ground.iter().enumerate() {
                validate_rect(rect, &format!("{} ground[{}]", context, j))?;
            }
        }

        if !world.levels.iter().any(|l| l.name == world.start_level) {
            return Err(format!("start_level '{}' does not exist", world.start_level));
        }

        validate_vec2(world.player_start, "player_start")?;

        let cam = &world.camera;
        if !is_valid_float(cam.left_boundary) || !is_valid_float(cam.right_boundary) {
            return Err("camera: invalid boundary values".to_string());
        }
        if cam.left_boundary >= cam.right_boundary {
            return Err(format!("camera: left boundary {} is not below right boundary {}",
                cam.left_boundary, cam.right_boundary));
        }

        if world.transitions.len() > limits::MAX_TRANSITIONS {
            return Err(format!("too many transitions ({} > {})",
                world.transitions.len(), limits::MAX_TRANSITIONS));
        }
        for (i, entry) in world.transitions.iter().enumerate() {
            validate_transition(entry, i, world)?;
        }

        Ok(())
    };

    check().map_err(WorldError::ValidationError)
}

/// Load a world from a RON file
pub fn load_world<P: AsRef<Path>>(path: P) -> Result<WorldDef, WorldError> {
    let contents = fs::read_to_string(path)?;
    load_world_from_str(&contents)
}

/// Load a world from a RON string (for embedded worlds or testing)
pub fn load_world_from_str(s: &str) -> Result<WorldDef, WorldError> {
    let world: WorldDef = ron::from_str(s)?;
    validate_world(&world)?;
    Ok(world)
}

/// Save a world to a RON file
pub fn save_world<P: AsRef<Path>>(world: &WorldDef, path: P) -> Result<(), WorldError> {
    let config = ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .indentor("  ".to_string());

    let ron_string = ron::ser::to_string_pretty(world, config)?;
    fs::write(path, ron_string)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::sample_world;

    #[test]
    fn test_sample_world_validates() {
        assert!(validate_world(&sample_world()).is_ok());
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world.ron");

        let world = sample_world();
        save_world(&world, &path).unwrap();
        let loaded = load_world(&path).unwrap();

        assert_eq!(loaded.name, world.name);
        assert_eq!(loaded.levels.len(), world.levels.len());
        assert_eq!(loaded.transitions.len(), world.transitions.len());
        assert_eq!(loaded.start_level, world.start_level);
        assert_eq!(loaded.player_start, world.player_start);
    }

    #[test]
    fn test_rejects_inverted_camera_bounds() {
        let mut world = sample_world();
        world.camera.left_boundary = 10.0;
        world.camera.right_boundary = -10.0;
        assert!(matches!(
            validate_world(&world),
            Err(WorldError::ValidationError(_))
        ));
    }

    #[test]
    fn test_rejects_dangling_level_reference() {
        let mut world = sample_world();
        world.transitions[0].to_level = "nowhere".to_string();
        assert!(matches!(
            validate_world(&world),
            Err(WorldError::ValidationError(_))
        ));
    }

    #[test]
    fn test_rejects_non_finite_spawn() {
        let mut world = sample_world();
        world.transitions[0].spawn_point.x = f32::NAN;
        assert!(validate_world(&world).is_err());
    }

    #[test]
    fn test_rejects_missing_start_level() {
        let mut world = sample_world();
        world.start_level = "void".to_string();
        assert!(validate_world(&world).is_err());
    }

    #[test]
    fn test_parse_error_is_reported() {
        assert!(matches!(
            load_world_from_str("(this is not a world"),
            Err(WorldError::ParseError(_))
        ));
    }
}
