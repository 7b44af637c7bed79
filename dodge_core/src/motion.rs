//! Per-frame enemy motion and pass-through scoring.

use crate::entity::Enemy;

/// Move every enemy down by its speed and drop the ones now below
/// `screen_h`.  Returns how many were dropped; each one is worth a point.
///
/// An enemy is removed only once its top edge is strictly past the bottom
/// of the screen (`y > screen_h`).
pub fn advance(enemies: &mut Vec<Enemy>, screen_h: i32) -> u32 {
    let before = enemies.len();
    enemies.retain_mut(|e| {
        e.y += e.speed;
        e.y <= screen_h
    });
    let passed = (before - enemies.len()) as u32;
    if passed > 0 {
        tracing::debug!(passed, remaining = enemies.len(), "enemies left the screen");
    }
    passed
}
