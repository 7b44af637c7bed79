//! Top-level application: backend selection and the per-frame loop.
//!
//! [`run_loop`] is generic over the three external collaborators (frame
//! source, hand locator, screen) so it can be driven by scripted stubs;
//! [`run`] wires up the real ones according to the enabled features.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use dodge_core::{scene, Command, GameConfig, GameState, HandPolicy, StepOutcome};

use crate::error::AppError;
use crate::frame::{self, FrameSource, SyntheticFrames};
use crate::tracker::HandLocator;
use crate::visualizer::{Screen, Visualizer};

// ════════════════════════════════════════════════════════════════════════════
// AppConfig
// ════════════════════════════════════════════════════════════════════════════

/// Runtime plumbing around the fixed game constants.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub game:        GameConfig,
    pub hand_policy: HandPolicy,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed:        Option<u64>,
    /// Upper bound on presented frames per second.
    pub fps:         u32,
    /// Webcam device index; `None` uses the synthetic backdrop.
    #[cfg(feature = "camera")]
    pub camera:      Option<u32>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            game:        GameConfig::default(),
            hand_policy: HandPolicy::default(),
            seed:        None,
            fps:         30,
            #[cfg(feature = "camera")]
            camera:      None,
        }
    }
}

/// What happened over a whole session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub frames:       u64,
    pub games_played: u32,
    pub best_score:   u32,
    /// Score on screen when the session ended.
    pub final_score:  u32,
}

// ════════════════════════════════════════════════════════════════════════════
// run_loop() — one iteration per frame until quit
// ════════════════════════════════════════════════════════════════════════════

/// Drive `game` until the player quits or the screen closes.
///
/// Each iteration: read a frame, mirror it, locate hands and step the game
/// (playing only), present, then apply at most one key.  The frame source
/// is released on every exit path, including a failed read.
pub fn run_loop<F, H, S, R>(
    game:   &mut GameState,
    frames: &mut F,
    hands:  &mut H,
    screen: &mut S,
    policy: HandPolicy,
    rng:    &mut R,
) -> Result<SessionSummary, AppError>
where
    F: FrameSource + ?Sized,
    H: HandLocator + ?Sized,
    S: Screen + ?Sized,
    R: Rng + ?Sized,
{
    let mut summary = SessionSummary { games_played: 1, ..SessionSummary::default() };
    let result = drive(game, frames, hands, screen, policy, rng, &mut summary);
    frames.release();
    summary.final_score = game.score();
    summary.best_score  = summary.best_score.max(game.score());

    match result {
        Ok(()) => {
            tracing::info!(
                frames = summary.frames,
                games = summary.games_played,
                best = summary.best_score,
                "session ended"
            );
            Ok(summary)
        }
        Err(e) => {
            tracing::error!(error = %e, frames = summary.frames, "session aborted");
            Err(e)
        }
    }
}

fn drive<F, H, S, R>(
    game:    &mut GameState,
    frames:  &mut F,
    hands:   &mut H,
    screen:  &mut S,
    policy:  HandPolicy,
    rng:     &mut R,
    summary: &mut SessionSummary,
) -> Result<(), AppError>
where
    F: FrameSource + ?Sized,
    H: HandLocator + ?Sized,
    S: Screen + ?Sized,
    R: Rng + ?Sized,
{
    while screen.is_open() {
        let mut image = frames.read_frame()?;
        frame::mirror(&mut image);

        let mut located = Vec::new();
        if !game.is_over() {
            located = hands.locate(&image);
            let report = game.step(policy.select(&located), rng);
            match report.outcome {
                StepOutcome::Clear => {}
                StepOutcome::Hit { lives_left } => {
                    tracing::info!(lives_left, score = game.score(), "hit");
                }
                StepOutcome::GameOver { final_score } => {
                    summary.best_score = summary.best_score.max(final_score);
                }
            }
        }
        summary.frames += 1;

        screen.present(&image, &scene::compose(game, &located))?;

        if let Some(cmd) = screen.poll_key().and_then(Command::from_key) {
            let was_over = game.is_over();
            if game.apply(cmd).is_break() {
                tracing::info!("quit requested");
                return Ok(());
            }
            if was_over && !game.is_over() {
                summary.games_played += 1;
            }
        }
    }
    Ok(())
}

// ════════════════════════════════════════════════════════════════════════════
// run() — real backends
// ════════════════════════════════════════════════════════════════════════════

/// Run the full application.
///
/// This is the entry point called from `main.rs`.  It validates the game
/// constants, opens the window, picks the frame source (synthetic by
/// default, webcam with `--features camera` and a device index) and the
/// hand locator (mouse pointer by default, LeapMotion with
/// `--features leap`), then loops until quit.
pub fn run(cfg: AppConfig) -> Result<SessionSummary, AppError> {
    let mut game = GameState::new(cfg.game.clone())?;
    let (w, h) = (cfg.game.width as u32, cfg.game.height as u32);

    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    // ── Visualizer (owns the window) ─────────────────────────────────────
    let mut vis = Visualizer::new(w as usize, h as usize, cfg.fps)?;

    // ── Hand locator ─────────────────────────────────────────────────────
    #[cfg(not(feature = "leap"))]
    let mut hands = {
        let (tx, locator) = crate::tracker::pointer_channel();
        vis.attach_pointer(tx);
        locator
    };
    #[cfg(feature = "leap")]
    let mut hands = crate::tracker::LeapLocator::connect().map_err(AppError::Tracker)?;

    // ── Frame source ─────────────────────────────────────────────────────
    let mut frames: Box<dyn FrameSource> = match camera_index(&cfg) {
        #[cfg(feature = "camera")]
        Some(index) => Box::new(frame::CameraFrames::open(index, w, h)?),
        _ => Box::new(SyntheticFrames::new(w, h)),
    };

    tracing::info!(
        width = w,
        height = h,
        hand_policy = %cfg.hand_policy,
        seeded = cfg.seed.is_some(),
        "session starting"
    );

    run_loop(&mut game, frames.as_mut(), &mut hands, &mut vis, cfg.hand_policy, &mut rng)
}

#[cfg(feature = "camera")]
fn camera_index(cfg: &AppConfig) -> Option<u32> { cfg.camera }

#[cfg(not(feature = "camera"))]
fn camera_index(_cfg: &AppConfig) -> Option<u32> { None }

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
