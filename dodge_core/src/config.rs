//! Build-time game constants and their startup validation.
//!
//! Everything the rules depend on lives in one [`GameConfig`] value.  The
//! defaults are the shipped game; [`GameConfig::validate`] rejects broken
//! combinations before the first random sample is ever drawn.

use thiserror::Error;

// ════════════════════════════════════════════════════════════════════════════
// SpanI32 — inclusive integer range
// ════════════════════════════════════════════════════════════════════════════

/// Inclusive `[min, max]` integer range used for enemy size and speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpanI32 {
    pub min: i32,
    pub max: i32,
}

impl SpanI32 {
    pub const fn new(min: i32, max: i32) -> Self {
        SpanI32 { min, max }
    }

    pub fn contains(&self, v: i32) -> bool {
        self.min <= v && v <= self.max
    }
}

// ════════════════════════════════════════════════════════════════════════════
// ConfigError
// ════════════════════════════════════════════════════════════════════════════

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} range is inverted: min {min} > max {max}")]
    InvertedRange { name: &'static str, min: i32, max: i32 },
    #[error("{name} must be at least 1, got {value}")]
    NonPositive { name: &'static str, value: i32 },
    #[error("largest enemy ({size}px) does not fit a {width}px wide screen")]
    EnemyWiderThanScreen { size: i32, width: i32 },
    #[error("player {player_w}x{player_h} (+{margin}px margin) does not fit a {width}x{height} screen")]
    PlayerDoesNotFit {
        player_w: i32,
        player_h: i32,
        margin:   i32,
        width:    i32,
        height:   i32,
    },
    #[error("spawn probability must lie in [0, 1], got {0}")]
    SpawnProbability(f64),
    #[error("starting lives must be at least 1")]
    NoLives,
    #[error("enemy cap must be at least 1 when set")]
    ZeroEnemyCap,
}

// ════════════════════════════════════════════════════════════════════════════
// GameConfig
// ════════════════════════════════════════════════════════════════════════════

/// Screen geometry, entity sizes, and spawn tuning.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub width:  i32,
    pub height: i32,

    pub player_width:  i32,
    pub player_height: i32,
    /// Gap between the player's bottom edge and the bottom of the screen.
    pub bottom_margin: i32,

    pub enemy_size:  SpanI32,
    pub enemy_speed: SpanI32,
    /// Chance per frame that one enemy is spawned.
    pub spawn_probability: f64,
    /// `None` leaves the enemy count bounded only by screen transit time.
    pub max_enemies: Option<usize>,

    pub starting_lives: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width:             1280,
            height:            640,
            player_width:      50,
            player_height:     50,
            bottom_margin:     10,
            enemy_size:        SpanI32::new(30, 120),
            enemy_speed:       SpanI32::new(10, 25),
            spawn_probability: 0.02,
            max_enemies:       None,
            starting_lives:    3,
        }
    }
}

impl GameConfig {
    /// Check every constant the spawner and state machine rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, span) in [("enemy size", self.enemy_size), ("enemy speed", self.enemy_speed)] {
            if span.min > span.max {
                return Err(ConfigError::InvertedRange { name, min: span.min, max: span.max });
            }
        }
        if self.enemy_size.min < 1 {
            return Err(ConfigError::NonPositive { name: "enemy size", value: self.enemy_size.min });
        }
        if self.enemy_speed.min < 1 {
            return Err(ConfigError::NonPositive { name: "enemy speed", value: self.enemy_speed.min });
        }
        for (name, value) in [
            ("screen width",  self.width),
            ("screen height", self.height),
            ("player width",  self.player_width),
            ("player height", self.player_height),
        ] {
            if value < 1 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.enemy_size.max > self.width {
            return Err(ConfigError::EnemyWiderThanScreen {
                size:  self.enemy_size.max,
                width: self.width,
            });
        }
        if self.bottom_margin < 0
            || self.player_width > self.width
            || self.player_height + self.bottom_margin > self.height
        {
            return Err(ConfigError::PlayerDoesNotFit {
                player_w: self.player_width,
                player_h: self.player_height,
                margin:   self.bottom_margin,
                width:    self.width,
                height:   self.height,
            });
        }
        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return Err(ConfigError::SpawnProbability(self.spawn_probability));
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::NoLives);
        }
        if self.max_enemies == Some(0) {
            return Err(ConfigError::ZeroEnemyCap);
        }
        Ok(())
    }

    /// Top-left corner the player starts from (and returns to on restart).
    pub fn player_home(&self) -> (i32, i32) {
        (
            self.width / 2 - self.player_width / 2,
            self.height - self.player_height - self.bottom_margin,
        )
    }

    /// Largest x an enemy may spawn at so its right edge stays on screen
    /// even at maximum size.
    pub fn enemy_x_max(&self) -> i32 {
        self.width - self.enemy_size.max
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
