//! # hand_dodge
//!
//! Hand-tracked front end for the [`dodge_core`] falling-block game.  The
//! player block follows your index fingertip across a mirrored camera feed;
//! dodge the red squares, three hits and it's over.
//!
//! ## Per-frame pipeline
//!
//! | Stage | Module | Notes |
//! |---|---|---|
//! | Capture | [`frame`] | One frame per iteration; a failed read ends the session |
//! | Mirror | [`frame::mirror`] | So moving right moves the player right |
//! | Locate | [`tracker`] | Zero or more normalized fingertips, playing only |
//! | Update | `dodge_core::GameState::step` | Spawn, move, score, collide |
//! | Draw | [`canvas`] + [`visualizer`] | Scene rasterized over the frame |
//! | Keys | [`visualizer::Screen::poll_key`] | `q` quits, `r` restarts after game over |
//!
//! ## Feature flags
//!
//! * (default) — **Simulation mode**: synthetic backdrop, the mouse pointer
//!   is the fingertip.
//! * `camera` — real webcam frames via `nokhwa` (`--camera <index>`).
//! * `leap` — real fingertip tracking via a LeapMotion controller.
//!
//! No backend finds hands in the camera image itself.  With `camera` alone
//! the webcam is only the backdrop and the mouse pointer still steers; real
//! hand tracking needs `leap`.
//!
//! ### Keyboard
//!
//! | Key | Action |
//! |---|---|
//! | `q` | Quit (any time) |
//! | `r` | Restart (game-over screen only) |

pub mod error;
pub mod frame;
pub mod tracker;
pub mod canvas;
pub mod visualizer;
pub mod app;

pub use error::{AppError, FrameError};
