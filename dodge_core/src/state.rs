//! The play / game-over state machine.
//!
//! `GameState` owns the player, the enemies, score, and lives.  The loop
//! driver calls [`GameState::step`] once per frame while playing and feeds
//! key presses through [`GameState::apply`].
//!
//! ```text
//!            hit, lives > 0  (enemies cleared)
//!              ┌──────────┐
//!              ▼          │
//!         ┌─────────┐─────┘   hit, lives == 0   ┌──────────┐
//!  new ──►│ Playing │────────────────────────────►│ GameOver │
//!         └─────────┘◄────────────────────────────└──────────┘
//!              │              'r' (full reset)         │
//!              └──────────── 'q' ──► quit ◄──── 'q' ───┘
//! ```

use std::ops::ControlFlow;

use rand::Rng;

use crate::collision;
use crate::config::{ConfigError, GameConfig};
use crate::entity::{Enemy, Player};
use crate::hand::Fingertip;
use crate::input::Command;
use crate::motion;
use crate::spawner::Spawner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase { Playing, GameOver }

/// What the collision check decided this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// No hit (or the game was already over).
    Clear,
    /// Hit with lives to spare; every enemy was cleared.
    Hit { lives_left: u32 },
    /// Hit that took the last life.
    GameOver { final_score: u32 },
}

/// Summary of one [`GameState::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub spawned: bool,
    /// Enemies that left the bottom edge (and were scored) this frame.
    pub passed:  u32,
    pub outcome: StepOutcome,
}

impl StepReport {
    const IDLE: StepReport = StepReport { spawned: false, passed: 0, outcome: StepOutcome::Clear };
}

// ════════════════════════════════════════════════════════════════════════════
// GameState
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct GameState {
    cfg:     GameConfig,
    spawner: Spawner,

    player:  Player,
    enemies: Vec<Enemy>,
    score:   u32,
    lives:   u32,
    phase:   Phase,
}

impl GameState {
    /// Validate `cfg` and start a fresh game.
    pub fn new(cfg: GameConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(GameState {
            spawner: Spawner::new(&cfg),
            player:  Player::at_home(&cfg),
            enemies: Vec::new(),
            score:   0,
            lives:   cfg.starting_lives,
            phase:   Phase::Playing,
            cfg,
        })
    }

    // ── per-frame update ─────────────────────────────────────────────────

    /// Advance one frame: follow the fingertip, maybe spawn, move and score
    /// enemies, then check for a hit.
    ///
    /// Does nothing once the game is over.
    pub fn step<R: Rng + ?Sized>(&mut self, hand: Option<Fingertip>, rng: &mut R) -> StepReport {
        if self.phase == Phase::GameOver {
            return StepReport::IDLE;
        }

        if let Some(tip) = hand {
            self.player.follow(tip.screen_x(self.cfg.width), self.cfg.width);
        }

        let spawned = self.spawner.maybe_spawn(rng, &mut self.enemies);

        let passed = motion::advance(&mut self.enemies, self.cfg.height);
        self.score += passed;

        let outcome = match collision::first_collision(&self.player, &self.enemies) {
            Some(idx) => self.take_hit(idx),
            None      => StepOutcome::Clear,
        };

        StepReport { spawned, passed, outcome }
    }

    fn take_hit(&mut self, idx: usize) -> StepOutcome {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.phase = Phase::GameOver;
            tracing::info!(score = self.score, "game over");
            StepOutcome::GameOver { final_score: self.score }
        } else {
            tracing::debug!(
                enemy = ?self.enemies[idx],
                lives_left = self.lives,
                "player hit; clearing enemies"
            );
            self.enemies.clear();
            StepOutcome::Hit { lives_left: self.lives }
        }
    }

    // ── commands ─────────────────────────────────────────────────────────

    /// React to a key command.  `Break` means the player asked to quit.
    pub fn apply(&mut self, cmd: Command) -> ControlFlow<()> {
        match cmd {
            Command::Quit => ControlFlow::Break(()),
            Command::Restart => {
                if self.phase == Phase::GameOver {
                    self.restart();
                }
                ControlFlow::Continue(())
            }
        }
    }

    /// Full reset to the starting state, whatever the current phase.
    pub fn restart(&mut self) {
        tracing::info!(previous_score = self.score, "restarting game");
        self.player  = Player::at_home(&self.cfg);
        self.enemies.clear();
        self.score   = 0;
        self.lives   = self.cfg.starting_lives;
        self.phase   = Phase::Playing;
    }

    // ── accessors ────────────────────────────────────────────────────────

    pub fn config(&self)  -> &GameConfig { &self.cfg }
    pub fn player(&self)  -> &Player     { &self.player }
    pub fn enemies(&self) -> &[Enemy]    { &self.enemies }
    pub fn score(&self)   -> u32         { self.score }
    pub fn lives(&self)   -> u32         { self.lives }
    pub fn phase(&self)   -> Phase       { self.phase }
    pub fn is_over(&self) -> bool        { self.phase == Phase::GameOver }

    /// Direct access to the enemy collection, for scripted scenarios.
    pub fn enemies_mut(&mut self) -> &mut Vec<Enemy> { &mut self.enemies }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn quiet_game() -> GameState {
        GameState::new(GameConfig { spawn_probability: 0.0, ..GameConfig::default() }).unwrap()
    }

    fn rng() -> StdRng { StdRng::seed_from_u64(0) }

    /// An enemy that will sit on top of the home-row player after one step.
    fn on_player(game: &GameState) -> Enemy {
        let p = game.player();
        Enemy { x: p.x, y: p.y - 10, size: 40, speed: 10 }
    }

    #[test]
    fn fresh_game_defaults() {
        let g = quiet_game();
        assert_eq!(g.score(), 0);
        assert_eq!(g.lives(), 3);
        assert!(g.enemies().is_empty());
        assert_eq!(g.phase(), Phase::Playing);
        assert_eq!((g.player().x, g.player().y), (615, 580));
    }

    #[test]
    fn invalid_config_fails_fast() {
        let cfg = GameConfig { enemy_speed: crate::SpanI32::new(30, 5), ..GameConfig::default() };
        assert!(GameState::new(cfg).is_err());
    }

    #[test]
    fn hand_moves_player_x_only() {
        let mut g = quiet_game();
        g.step(Some(Fingertip::new(0.25, 0.1)), &mut rng());
        assert_eq!(g.player().x, 320 - 25);
        assert_eq!(g.player().y, 580);
    }

    #[test]
    fn no_hand_keeps_player_in_place() {
        let mut g = quiet_game();
        g.step(Some(Fingertip::new(0.0, 0.5)), &mut rng());
        g.step(None, &mut rng());
        assert_eq!(g.player().x, 0);
    }

    #[test]
    fn passing_enemies_score() {
        let mut g = quiet_game();
        g.enemies_mut().push(Enemy { x: 0, y: 635, size: 30, speed: 10 });
        g.enemies_mut().push(Enemy { x: 200, y: 639, size: 30, speed: 25 });
        let report = g.step(None, &mut rng());
        assert_eq!(report.passed, 2);
        assert_eq!(g.score(), 2);
    }

    #[test]
    fn hit_clears_enemies_and_keeps_score() {
        let mut g = quiet_game();
        g.enemies_mut().push(Enemy { x: 0, y: 635, size: 30, speed: 10 });
        g.step(None, &mut rng());
        let e = on_player(&g);
        g.enemies_mut().push(e);
        g.enemies_mut().push(Enemy { x: 0, y: 0, size: 30, speed: 10 });
        let report = g.step(None, &mut rng());
        assert_eq!(report.outcome, StepOutcome::Hit { lives_left: 2 });
        assert!(g.enemies().is_empty());
        assert_eq!(g.score(), 1);
        assert_eq!(g.phase(), Phase::Playing);
        assert_eq!(g.player().x, 615);
    }

    #[test]
    fn third_hit_ends_game() {
        let mut g = quiet_game();
        for expected in [2, 1] {
            let e = on_player(&g);
            g.enemies_mut().push(e);
            assert_eq!(g.step(None, &mut rng()).outcome, StepOutcome::Hit { lives_left: expected });
            assert!(!g.is_over());
        }
        let e = on_player(&g);
        g.enemies_mut().push(e);
        assert_eq!(g.step(None, &mut rng()).outcome, StepOutcome::GameOver { final_score: 0 });
        assert_eq!(g.lives(), 0);
        assert!(g.is_over());
    }

    #[test]
    fn game_over_freezes_state() {
        let mut g = quiet_game();
        for _ in 0..3 {
            let e = on_player(&g);
            g.enemies_mut().push(e);
            g.step(None, &mut rng());
        }
        let frozen: Vec<Enemy> = g.enemies().to_vec();
        let report = g.step(Some(Fingertip::new(0.0, 0.0)), &mut rng());
        assert_eq!(report, StepReport::IDLE);
        assert_eq!(g.enemies(), frozen.as_slice());
        assert_eq!(g.player().x, 615);
    }

    #[test]
    fn restart_only_applies_after_game_over() {
        let mut g = quiet_game();
        g.enemies_mut().push(Enemy { x: 0, y: 635, size: 30, speed: 10 });
        g.step(None, &mut rng());
        assert_eq!(g.apply(Command::Restart), ControlFlow::Continue(()));
        assert_eq!(g.score(), 1);
    }

    #[test]
    fn restart_from_game_over_resets_everything() {
        let mut g = quiet_game();
        g.enemies_mut().push(Enemy { x: 0, y: 635, size: 30, speed: 10 });
        g.step(Some(Fingertip::new(0.9, 0.5)), &mut rng());
        for _ in 0..3 {
            let e = on_player(&g);
            g.enemies_mut().push(e);
            g.step(None, &mut rng());
        }
        assert!(g.is_over());
        assert_eq!(g.apply(Command::Restart), ControlFlow::Continue(()));
        assert_eq!(g.score(), 0);
        assert_eq!(g.lives(), 3);
        assert!(g.enemies().is_empty());
        assert_eq!(g.phase(), Phase::Playing);
        assert_eq!((g.player().x, g.player().y), (615, 580));
    }

    #[test]
    fn quit_breaks_in_any_phase() {
        let mut g = quiet_game();
        assert_eq!(g.apply(Command::Quit), ControlFlow::Break(()));
        for _ in 0..3 {
            let e = on_player(&g);
            g.enemies_mut().push(e);
            g.step(None, &mut rng());
        }
        assert_eq!(g.apply(Command::Quit), ControlFlow::Break(()));
    }
}
