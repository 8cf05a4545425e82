//! Rectangle type for UI layout (screen space, y-down)

/// A rectangle defined by position and size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Create from screen dimensions
    pub fn screen(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Center X
    pub fn center_x(&self) -> f32 {
        self.x + self.w * 0.5
    }

    /// Center Y
    pub fn center_y(&self) -> f32 {
        self.y + self.h * 0.5
    }

    /// Check if point is inside
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink by padding on all sides
    pub fn pad(&self, padding: f32) -> Self {
        Self::new(
            self.x + padding,
            self.y + padding,
            (self.w - padding * 2.0).max(0.0),
            (self.h - padding * 2.0).max(0.0),
        )
    }

    /// A `w` x `h` rect centred horizontally in this one, `top` pixels down
    pub fn centered_h(&self, top: f32, w: f32, h: f32) -> Self {
        Self::new(self.center_x() - w * 0.5, self.y + top, w, h)
    }

    /// `count` equal rows of height `h` stacked downward from this rect's top,
    /// `spacing` pixels apart
    pub fn stack_v(&self, count: usize, h: f32, spacing: f32) -> Vec<Self> {
        (0..count)
            .map(|i| Self::new(self.x, self.y + i as f32 * (h + spacing), self.w, h))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(50.0, 40.0));
        assert!(!r.contains(5.0, 40.0));
        assert!(!r.contains(50.0, 100.0));
        // Right and bottom edges are exclusive
        assert!(!r.contains(110.0, 40.0));
    }

    #[test]
    fn test_centered_h() {
        let screen = Rect::screen(1280.0, 960.0);
        let r = screen.centered_h(100.0, 450.0, 74.0);
        assert_eq!(r, Rect::new(415.0, 100.0, 450.0, 74.0));
    }

    #[test]
    fn test_stack_v() {
        let col = Rect::new(415.0, 300.0, 450.0, 0.0);
        let rows = col.stack_v(3, 74.0, 26.0);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].y, 300.0);
        assert_eq!(rows[1].y, 400.0);
        assert_eq!(rows[2].bottom(), 574.0);
        assert!(rows.iter().all(|r| r.x == 415.0 && r.w == 450.0));
    }
}
