//! Plain data for the player block and the falling enemies.

use crate::config::GameConfig;

/// Axis-aligned box, half-open: covers `[x, x+w) × [y, y+h)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn right(&self)  -> i32 { self.x + self.w }
    pub fn bottom(&self) -> i32 { self.y + self.h }
}

// ════════════════════════════════════════════════════════════════════════════
// Player
// ════════════════════════════════════════════════════════════════════════════

/// The player block.  Only `x` moves; `y` stays pinned above the bottom edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pub x:      i32,
    pub y:      i32,
    pub width:  i32,
    pub height: i32,
}

impl Player {
    /// A player centred horizontally at its home row.
    pub fn at_home(cfg: &GameConfig) -> Self {
        let (x, y) = cfg.player_home();
        Player { x, y, width: cfg.player_width, height: cfg.player_height }
    }

    /// Centre the block on `centre_x`, keeping it fully on a `screen_w` screen.
    pub fn follow(&mut self, centre_x: i32, screen_w: i32) {
        self.x = (centre_x - self.width / 2).clamp(0, screen_w - self.width);
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Enemy
// ════════════════════════════════════════════════════════════════════════════

/// A falling square.  `x`/`y` are its top-left corner, `speed` is pixels per
/// frame downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Enemy {
    pub x:     i32,
    pub y:     i32,
    pub size:  i32,
    pub speed: i32,
}

impl Enemy {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.size, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_centres_on_fingertip() {
        let mut p = Player::at_home(&GameConfig::default());
        p.follow(400, 1280);
        assert_eq!(p.x, 375);
    }

    #[test]
    fn follow_clamps_to_screen() {
        let mut p = Player::at_home(&GameConfig::default());
        p.follow(-100, 1280);
        assert_eq!(p.x, 0);
        p.follow(5000, 1280);
        assert_eq!(p.x, 1230);
    }

    #[test]
    fn follow_keeps_row() {
        let mut p = Player::at_home(&GameConfig::default());
        p.follow(10, 1280);
        assert_eq!(p.y, 580);
    }

    #[test]
    fn enemy_bounds_are_square() {
        let e = Enemy { x: 600, y: 570, size: 40, speed: 10 };
        let b = e.bounds();
        assert_eq!((b.right(), b.bottom()), (640, 610));
    }
}
