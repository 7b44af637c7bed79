//! Randomised enemy creation.
//!
//! Each frame the spawner rolls once against the configured probability; a
//! hit yields one enemy at the top edge with uniformly sampled x, size, and
//! speed.  The x range is fixed by the *largest* possible size, so no enemy
//! ever pokes out past the right edge.

use rand::Rng;

use crate::config::{GameConfig, SpanI32};
use crate::entity::Enemy;

#[derive(Clone, Debug)]
pub struct Spawner {
    x_max:       i32,
    size:        SpanI32,
    speed:       SpanI32,
    probability: f64,
    cap:         Option<usize>,
}

impl Spawner {
    /// Build from an already-validated config.
    pub fn new(cfg: &GameConfig) -> Self {
        Spawner {
            x_max:       cfg.enemy_x_max(),
            size:        cfg.enemy_size,
            speed:       cfg.enemy_speed,
            probability: cfg.spawn_probability,
            cap:         cfg.max_enemies,
        }
    }

    /// One enemy with fresh random geometry, at `y = 0`.
    pub fn spawn<R: Rng + ?Sized>(&self, rng: &mut R) -> Enemy {
        Enemy {
            x:     rng.gen_range(0..=self.x_max),
            y:     0,
            size:  rng.gen_range(self.size.min..=self.size.max),
            speed: rng.gen_range(self.speed.min..=self.speed.max),
        }
    }

    /// Roll for this frame and append an enemy on success.
    ///
    /// Returns whether an enemy was added.  A full collection (when a cap is
    /// configured) skips the roll entirely.
    pub fn maybe_spawn<R: Rng + ?Sized>(&self, rng: &mut R, enemies: &mut Vec<Enemy>) -> bool {
        if self.cap.is_some_and(|cap| enemies.len() >= cap) {
            return false;
        }
        if !rng.gen_bool(self.probability) {
            return false;
        }
        let enemy = self.spawn(rng);
        tracing::trace!(x = enemy.x, size = enemy.size, speed = enemy.speed, "enemy spawned");
        enemies.push(enemy);
        true
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
