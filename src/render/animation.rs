//! Sprite sheets and frame animation
//!
//! Sheets are regular grids: one row per facing direction, one column per
//! animation frame. `SheetLayout` records the grid and the row order for each
//! sheet; `Animation` picks a frame from elapsed time.

use crate::game::Direction;

/// Rows and columns of a sprite sheet, plus which row holds which facing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetLayout {
    pub cols: usize,
    pub rows: usize,
    /// Frames used per row (may be fewer than `cols`)
    pub frames: usize,
    /// Row index for Up, Down, Left, Right
    pub row_order: [usize; 4],
    /// Seconds per frame
    pub frame_duration: f32,
}

impl SheetLayout {
    pub fn row(&self, direction: Direction) -> usize {
        match direction {
            Direction::Up => self.row_order[0],
            Direction::Down => self.row_order[1],
            Direction::Left => self.row_order[2],
            Direction::Right => self.row_order[3],
        }
    }

    /// Size of one frame in pixels for a sheet of the given size
    pub fn frame_size(&self, sheet_w: f32, sheet_h: f32) -> (f32, f32) {
        (sheet_w / self.cols as f32, sheet_h / self.rows as f32)
    }

    pub fn animation(&self) -> Animation {
        Animation::new(self.frames, self.frame_duration)
    }
}

/// Player walk cycle: 9x4, rows up/left/down/right
pub const PLAYER_WALK: SheetLayout = SheetLayout {
    cols: 9,
    rows: 4,
    frames: 9,
    row_order: [0, 2, 1, 3],
    frame_duration: 1.0 / 15.0,
};

/// Walk cycle speed while sprinting
pub const PLAYER_SPRINT_FRAME_DURATION: f32 = 1.0 / 30.0;

/// Melee swing: 6x4, rows up/left/down/right
pub const PLAYER_ATTACK: SheetLayout = SheetLayout {
    cols: 6,
    rows: 4,
    frames: 6,
    row_order: [0, 2, 1, 3],
    frame_duration: crate::game::weapon::SWING_FRAME_DURATION,
};

/// Ghost float cycle: 12x8 sheet, first 9 frames of rows down/left/right/up
pub const GHOST_FLOAT: SheetLayout = SheetLayout {
    cols: 12,
    rows: 8,
    frames: 9,
    row_order: [3, 0, 1, 2],
    frame_duration: 1.0 / 5.0,
};

/// Frame selection over a fixed number of equally long frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub frame_count: usize,
    pub frame_duration: f32,
}

impl Animation {
    pub fn new(frame_count: usize, frame_duration: f32) -> Self {
        Self { frame_count, frame_duration }
    }

    /// Same frames, different speed
    pub fn with_duration(self, frame_duration: f32) -> Self {
        Self { frame_duration, ..self }
    }

    /// Frame index for `elapsed` seconds.
    ///
    /// Looping animations wrap; one-shot animations hold on the last frame.
    pub fn key_frame(&self, elapsed: f32, looping: bool) -> usize {
        if self.frame_count <= 1 || self.frame_duration <= 0.0 {
            return 0;
        }
        let index = (elapsed.max(0.0) / self.frame_duration) as usize;
        if looping {
            index % self.frame_count
        } else {
            index.min(self.frame_count - 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_frame_looping() {
        let anim = Animation::new(9, 0.2);
        assert_eq!(anim.key_frame(0.0, true), 0);
        assert_eq!(anim.key_frame(0.21, true), 1);
        assert_eq!(anim.key_frame(1.85, true), 0);
        assert_eq!(anim.key_frame(2.05, true), 1);
    }

    #[test]
    fn test_key_frame_one_shot_holds() {
        let anim = Animation::new(6, 0.025);
        assert_eq!(anim.key_frame(0.06, false), 2);
        assert_eq!(anim.key_frame(10.0, false), 5);
    }

    #[test]
    fn test_degenerate_animation() {
        assert_eq!(Animation::new(1, 0.1).key_frame(5.0, true), 0);
        assert_eq!(Animation::new(4, 0.0).key_frame(5.0, true), 0);
    }

    #[test]
    fn test_rows_per_direction() {
        assert_eq!(PLAYER_WALK.row(Direction::Up), 0);
        assert_eq!(PLAYER_WALK.row(Direction::Left), 1);
        assert_eq!(PLAYER_WALK.row(Direction::Down), 2);
        assert_eq!(PLAYER_WALK.row(Direction::Right), 3);

        assert_eq!(GHOST_FLOAT.row(Direction::Down), 0);
        assert_eq!(GHOST_FLOAT.row(Direction::Left), 1);
        assert_eq!(GHOST_FLOAT.row(Direction::Right), 2);
        assert_eq!(GHOST_FLOAT.row(Direction::Up), 3);
    }

    #[test]
    fn test_frame_size() {
        assert_eq!(PLAYER_WALK.frame_size(576.0, 256.0), (64.0, 64.0));
        assert_eq!(GHOST_FLOAT.frame_size(576.0, 384.0), (48.0, 48.0));
    }
}
