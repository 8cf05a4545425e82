//! Map loading and saving
//!
//! Uses RON (Rusty Object Notation) for human-readable map files. A map must
//! carry a "collision" layer; every rectangle is checked before the session
//! sees it.

use std::fs;
use std::path::Path;
use thiserror::Error;
use super::map::{Map, COLLISION_LAYER};

/// Validation limits to keep hostile files from blowing up the frame loop
pub mod limits {
    /// Maximum number of layers in a map
    pub const MAX_LAYERS: usize = 32;
    /// Maximum objects in a single layer
    pub const MAX_OBJECTS_PER_LAYER: usize = 1024;
    /// Maximum coordinate value (prevents overflow issues)
    pub const MAX_COORD: f32 = 1_000_000.0;
}

/// Error type for map loading
#[derive(Debug, Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),

    #[error("map has no \"{0}\" layer")]
    MissingLayer(String),

    #[error("Invalid map: {0}")]
    Invalid(String),
}

fn is_valid_coord(f: f32) -> bool {
    f.is_finite() && f.abs() <= limits::MAX_COORD
}

/// Validate a map before use
pub fn validate_map(map: &Map) -> Result<(), MapError> {
    if !(is_valid_coord(map.width) && is_valid_coord(map.height) && map.width > 0.0 && map.height > 0.0) {
        return Err(MapError::Invalid(format!("bad map size {}x{}", map.width, map.height)));
    }

    if map.layers.len() > limits::MAX_LAYERS {
        return Err(MapError::Invalid(format!(
            "too many layers ({} > {})", map.layers.len(), limits::MAX_LAYERS
        )));
    }

    if map.layer(COLLISION_LAYER).is_none() {
        return Err(MapError::MissingLayer(COLLISION_LAYER.to_string()));
    }

    for layer in &map.layers {
        if layer.objects.len() > limits::MAX_OBJECTS_PER_LAYER {
            return Err(MapError::Invalid(format!(
                "layer {}: too many objects ({} > {})",
                layer.name, layer.objects.len(), limits::MAX_OBJECTS_PER_LAYER
            )));
        }
        for (i, obj) in layer.objects.iter().enumerate() {
            let r = obj.rect;
            if !r.is_well_formed() || ![r.x, r.y, r.w, r.h].iter().all(|&v| is_valid_coord(v)) {
                return Err(MapError::Invalid(format!(
                    "layer {} object[{}]: invalid rect ({}, {}, {}, {})",
                    layer.name, i, r.x, r.y, r.w, r.h
                )));
            }
        }
    }

    Ok(())
}

/// Load a map from a RON string
pub fn load_map_from_str(s: &str) -> Result<Map, MapError> {
    let map: Map = ron::from_str(s)?;
    validate_map(&map)?;
    Ok(map)
}

/// Load a map from a RON file
pub fn load_map<P: AsRef<Path>>(path: P) -> Result<Map, MapError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let map: Map = match ron::from_str(&contents) {
        Ok(m) => m,
        Err(e) => {
            log::error!("RON parse error in {}: {}", path.display(), e);
            let line_idx = e.position.line.saturating_sub(1);
            if let Some(line) = contents.lines().nth(line_idx) {
                log::error!("  Line {}: {}", e.position.line, line.trim_end());
            }
            return Err(e.into());
        }
    };

    validate_map(&map)?;
    log::info!(
        "loaded map {:?} from {} ({} obstacles)",
        map.name,
        path.display(),
        map.collision_rects().len()
    );
    Ok(map)
}

/// Save a map as pretty RON
pub fn save_map<P: AsRef<Path>>(map: &Map, path: P) -> Result<(), MapError> {
    let config = ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .indentor("  ".to_string());
    let text = ron::ser::to_string_pretty(map, config)?;
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Aabb;
    use crate::world::map::{MapObject, ObjectLayer};

    const SAMPLE: &str = r#"(
        name: "crypt",
        width: 640.0,
        height: 480.0,
        layers: [
            (name: "collision", objects: [
                (rect: (x: 10.0, y: 20.0, w: 30.0, h: 40.0)),
                (name: Some("altar"), rect: (x: 300.0, y: 200.0, w: 64.0, h: 32.0)),
            ]),
            (name: "decoration"),
        ],
    )"#;

    #[test]
    fn test_load_from_str() {
        let map = load_map_from_str(SAMPLE).expect("sample parses");
        assert_eq!(map.name, "crypt");
        assert_eq!(
            map.collision_rects(),
            vec![Aabb::new(10.0, 20.0, 30.0, 40.0), Aabb::new(300.0, 200.0, 64.0, 32.0)]
        );
    }

    #[test]
    fn test_missing_collision_layer() {
        let src = r#"(width: 100.0, height: 100.0, layers: [(name: "floor")])"#;
        assert!(matches!(load_map_from_str(src), Err(MapError::MissingLayer(name)) if name == "collision"));
    }

    #[test]
    fn test_rejects_negative_rect() {
        let mut map = Map::new("bad", 100.0, 100.0);
        if let Some(layer) = map.layer_mut(COLLISION_LAYER) {
            layer.objects.push(MapObject::new(Aabb::new(0.0, 0.0, -5.0, 5.0)));
        }
        assert!(matches!(validate_map(&map), Err(MapError::Invalid(_))));
    }

    #[test]
    fn test_rejects_too_many_layers() {
        let mut map = Map::new("big", 100.0, 100.0);
        for i in 0..limits::MAX_LAYERS {
            map.layers.push(ObjectLayer::new(&format!("l{}", i)));
        }
        assert!(matches!(validate_map(&map), Err(MapError::Invalid(_))));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(load_map_from_str("(width: "), Err(MapError::Parse(_))));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("arena.ron");
        let map = Map::arena(800.0, 600.0);

        save_map(&map, &path).expect("save");
        let loaded = load_map(&path).expect("load");
        assert_eq!(loaded, map);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(matches!(load_map(dir.path().join("nope.ron")), Err(MapError::Io(_))));
    }
}
