//! Play-field camera
//!
//! The play field is drawn through a `Camera2D` that maps the field's size to
//! the whole window. `DrawScope` sets the camera when created and restores
//! the default camera when dropped, so an early return can never leave the
//! menu screens drawing in field space.

use macroquad::prelude::*;
use crate::game::Aabb;

/// Field-space drawing scope
pub struct DrawScope {
    field_height: f32,
}

impl DrawScope {
    pub fn begin(field_width: f32, field_height: f32) -> Self {
        let camera = Camera2D::from_display_rect(Rect::new(0.0, 0.0, field_width, field_height));
        set_camera(&camera);
        Self { field_height }
    }

    /// Screen rectangle for a world box (world is y-up, the camera is y-down)
    pub fn to_screen(&self, aabb: &Aabb) -> Rect {
        flip_y(aabb, self.field_height)
    }
}

impl Drop for DrawScope {
    fn drop(&mut self) {
        set_default_camera();
    }
}

/// Convert a y-up world box to a y-down rect in a field `field_height` tall
pub fn flip_y(aabb: &Aabb, field_height: f32) -> Rect {
    Rect::new(aabb.x, field_height - aabb.y - aabb.h, aabb.w, aabb.h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_y() {
        let r = flip_y(&Aabb::new(10.0, 0.0, 20.0, 30.0), 960.0);
        assert_eq!((r.x, r.y, r.w, r.h), (10.0, 930.0, 20.0, 30.0));

        let top = flip_y(&Aabb::new(0.0, 930.0, 5.0, 30.0), 960.0);
        assert_eq!(top.y, 0.0);
    }
}
