//! What to draw for a given game state.
//!
//! [`compose`] is a pure function from [`GameState`] and the hands seen this
//! frame to a list of [`DrawCommand`]s, painted in order over the camera
//! frame.  Hand markers go first so the player and enemies stay on top.  Text positions
//! are baselines (the bottom of the glyphs), and `scale` is the size of one
//! font cell in pixels.

use crate::entity::Rect;
use crate::hand::Fingertip;
use crate::state::{GameState, Phase};

// ════════════════════════════════════════════════════════════════════════════
// Palette
// ════════════════════════════════════════════════════════════════════════════

pub const PLAYER_COLOR: u32 = 0xFF00FF00;
pub const ENEMY_COLOR:  u32 = 0xFFFF0000;
pub const PANEL_COLOR:  u32 = 0xFF000000;
pub const TEXT_COLOR:   u32 = 0xFFFFFFFF;
pub const ALERT_COLOR:  u32 = 0xFFFF0000;
pub const HAND_COLOR:   u32 = 0xFF00FFFF;

/// Side of the square drawn on each tracked fingertip.
pub const HAND_MARKER: i32 = 12;

/// Score/lives panel in the top-left corner.
pub const HUD_PANEL: Rect = Rect::new(0, 0, 250, 100);

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: u32 },
    Text { text: String, x: i32, baseline: i32, scale: u32, color: u32 },
}

impl DrawCommand {
    fn text(text: impl Into<String>, x: i32, baseline: i32, scale: u32, color: u32) -> Self {
        DrawCommand::Text { text: text.into(), x, baseline, scale, color }
    }
}

/// Build the draw list for the current frame.  `hands` are only marked
/// while playing.
pub fn compose(game: &GameState, hands: &[Fingertip]) -> Vec<DrawCommand> {
    match game.phase() {
        Phase::Playing  => compose_playing(game, hands),
        Phase::GameOver => compose_game_over(game),
    }
}

fn compose_playing(game: &GameState, hands: &[Fingertip]) -> Vec<DrawCommand> {
    let cfg = game.config();
    let mut cmds = Vec::with_capacity(hands.len() + game.enemies().len() + 4);

    cmds.extend(hands.iter().map(|tip| DrawCommand::FillRect {
        rect: Rect::new(
            tip.screen_x(cfg.width) - HAND_MARKER / 2,
            tip.screen_y(cfg.height) - HAND_MARKER / 2,
            HAND_MARKER,
            HAND_MARKER,
        ),
        color: HAND_COLOR,
    }));
    cmds.push(DrawCommand::FillRect { rect: game.player().bounds(), color: PLAYER_COLOR });
    cmds.extend(
        game.enemies()
            .iter()
            .map(|e| DrawCommand::FillRect { rect: e.bounds(), color: ENEMY_COLOR }),
    );

    cmds.push(DrawCommand::FillRect { rect: HUD_PANEL, color: PANEL_COLOR });
    cmds.push(DrawCommand::text(format!("Score: {}", game.score()), 10, 40, 4, TEXT_COLOR));
    cmds.push(DrawCommand::text(format!("Lives: {}", game.lives()), 10, 80, 4, TEXT_COLOR));
    cmds
}

fn compose_game_over(game: &GameState) -> Vec<DrawCommand> {
    let cfg = game.config();
    let (cx, cy) = (cfg.width / 2, cfg.height / 2);
    vec![
        DrawCommand::FillRect { rect: Rect::new(0, 0, cfg.width, cfg.height), color: PANEL_COLOR },
        DrawCommand::text("GAME OVER", cx - 200, cy - 100, 12, ALERT_COLOR),
        DrawCommand::text(format!("Final Score: {}", game.score()), cx - 150, cy + 50, 8, TEXT_COLOR),
        DrawCommand::text("Press 'r' to Restart or 'q' to Quit", cx - 300, cy + 150, 6, TEXT_COLOR),
    ]
}
