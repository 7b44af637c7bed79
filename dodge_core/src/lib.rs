//! # dodge_core
//!
//! Rules of a falling-block dodging game, free of any window, camera, or
//! hand-tracking hardware.
//!
//! A player block slides along the bottom of the screen following a
//! fingertip.  Square enemies of random size and speed fall from the top;
//! every enemy that leaves the bottom edge scores a point, every hit costs a
//! life, and the third hit ends the game.
//!
//! ## Frame order while playing
//!
//! | Step | Module | Effect |
//! |---|---|---|
//! | 1 | [`hand`] / [`state`] | Player x follows the selected fingertip (if any) |
//! | 2 | [`spawner`] | Maybe append one enemy at the top |
//! | 3 | [`motion`] | Advance enemies, drop off-screen ones, score them |
//! | 4 | [`collision`] / [`state`] | On overlap: lose a life, clear enemies or end the game |
//!
//! [`scene`] turns the resulting [`GameState`] into draw commands; nothing in
//! this crate touches pixels.

pub mod config;
pub mod entity;
pub mod spawner;
pub mod motion;
pub mod collision;
pub mod hand;
pub mod input;
pub mod state;
pub mod scene;

pub use config::{ConfigError, GameConfig, SpanI32};
pub use entity::{Enemy, Player, Rect};
pub use hand::{Fingertip, HandPolicy};
pub use input::Command;
pub use state::{GameState, Phase, StepOutcome, StepReport};
pub use scene::DrawCommand;
