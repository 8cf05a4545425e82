//! Map data
//!
//! A map is a play-field size plus named object layers of rectangles. The
//! session only reads the "collision" layer; other layers (decoration,
//! spawn hints) are kept for drawing and tooling.

use serde::{Serialize, Deserialize};
use crate::game::Aabb;

/// Name of the layer holding the static obstacles
pub const COLLISION_LAYER: &str = "collision";

/// A single rectangle object in a layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapObject {
    #[serde(default)]
    pub name: Option<String>,
    pub rect: Aabb,
}

impl MapObject {
    pub fn new(rect: Aabb) -> Self {
        Self { name: None, rect }
    }

    pub fn named(name: &str, rect: Aabb) -> Self {
        Self { name: Some(name.to_string()), rect }
    }
}

/// A named list of objects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectLayer {
    pub name: String,
    #[serde(default)]
    pub objects: Vec<MapObject>,
}

impl ObjectLayer {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(), objects: Vec::new() }
    }
}

/// A play-field map (world space, y-up, origin bottom-left)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Map {
    #[serde(default)]
    pub name: String,
    pub width: f32,
    pub height: f32,
    pub layers: Vec<ObjectLayer>,
}

impl Map {
    /// Empty map with a collision layer and nothing in it
    pub fn new(name: &str, width: f32, height: f32) -> Self {
        Self {
            name: name.to_string(),
            width,
            height,
            layers: vec![ObjectLayer::new(COLLISION_LAYER)],
        }
    }

    /// Built-in arena: four stone pillars around the centre.
    ///
    /// Used when no map file is configured. Pillars stay clear of the player's
    /// spawn point.
    pub fn arena(width: f32, height: f32) -> Self {
        let mut map = Self::new("arena", width, height);
        let size = (width.min(height) / 15.0).round().max(1.0);
        let (left, right) = (width * 0.2, width * 0.8 - size);
        let (bottom, top) = (height * 0.2, height * 0.8 - size);

        if let Some(layer) = map.layer_mut(COLLISION_LAYER) {
            for (i, (x, y)) in [(left, bottom), (right, bottom), (left, top), (right, top)]
                .into_iter()
                .enumerate()
            {
                layer
                    .objects
                    .push(MapObject::named(&format!("pillar_{}", i), Aabb::new(x, y, size, size)));
            }
        }
        map
    }

    pub fn layer(&self, name: &str) -> Option<&ObjectLayer> {
        self.layers.iter().find(|l| l.name == name)
    }

    pub fn layer_mut(&mut self, name: &str) -> Option<&mut ObjectLayer> {
        self.layers.iter_mut().find(|l| l.name == name)
    }

    /// Obstacle rectangles from the collision layer
    pub fn collision_rects(&self) -> Vec<Aabb> {
        self.layer(COLLISION_LAYER)
            .map(|l| l.objects.iter().map(|o| o.rect).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_map_has_empty_collision_layer() {
        let map = Map::new("test", 100.0, 100.0);
        assert!(map.layer(COLLISION_LAYER).is_some());
        assert!(map.collision_rects().is_empty());
    }

    #[test]
    fn test_arena_pillars() {
        let map = Map::arena(1280.0, 960.0);
        let rects = map.collision_rects();
        assert_eq!(rects.len(), 4);
        for r in &rects {
            assert!(r.x >= 0.0 && r.right() <= 1280.0);
            assert!(r.y >= 0.0 && r.top() <= 960.0);
        }
    }

    #[test]
    fn test_arena_keeps_spawn_clear() {
        let map = Map::arena(1280.0, 960.0);
        let spawn = Aabb::new(1280.0 / 2.0 - 14.0, 960.0 / 2.0 - 90.0, 64.0, 64.0);
        assert!(map.collision_rects().iter().all(|r| !r.overlaps(&spawn)));
    }

    #[test]
    fn test_other_layers_are_ignored() {
        let mut map = Map::new("test", 100.0, 100.0);
        let mut deco = ObjectLayer::new("decoration");
        deco.objects.push(MapObject::new(Aabb::new(1.0, 1.0, 5.0, 5.0)));
        map.layers.push(deco);
        assert!(map.collision_rects().is_empty());
    }
}
