//! hand_dodge — interactive entry point.

use anyhow::{Context, Result};
use clap::Parser;
use dodge_core::HandPolicy;
use hand_dodge::app::{run, AppConfig};

#[derive(Parser, Debug)]
#[command(name = "hand_dodge", about = "Dodge falling blocks with your fingertip")]
struct Args {
    /// Fixed RNG seed for a reproducible enemy sequence.
    #[arg(long)]
    seed: Option<u64>,

    /// Which hand steers when several are tracked: first or last.
    #[arg(long, default_value_t = HandPolicy::First)]
    hand: HandPolicy,

    /// Frame-rate cap for the window.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Webcam device index; omit for the synthetic backdrop.
    #[cfg(feature = "camera")]
    #[arg(long)]
    camera: Option<u32>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║            Hand Dodge — Fingertip Block Dodging              ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    #[cfg(feature = "leap")]
    println!("  Hand: LeapMotion hardware");
    #[cfg(not(feature = "leap"))]
    println!("  Hand: mouse pointer simulation  (use --features leap for hardware)");
    #[cfg(feature = "camera")]
    println!("  Backdrop: {}", match args.camera {
        Some(i) => format!("camera #{}", i),
        None    => "synthetic".to_string(),
    });
    println!("  Keys: Q = quit, R = restart after game over");
    println!();

    let cfg = AppConfig {
        hand_policy: args.hand,
        seed:        args.seed,
        fps:         args.fps,
        #[cfg(feature = "camera")]
        camera:      args.camera,
        ..AppConfig::default()
    };

    let summary = run(cfg).context("hand_dodge session failed")?;

    println!();
    println!("  Frames played : {}", summary.frames);
    println!("  Games played  : {}", summary.games_played);
    println!("  Best score    : {}", summary.best_score);
    println!("  Final score   : {}", summary.final_score);
    println!();
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(filter)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}
