//! Headless dodging-game simulator.
//!
//! Runs the rules with a scripted fingertip that sweeps back and forth, no
//! window or camera needed.  Handy for eyeballing balance and for profiling.
//!
//! ```text
//! cargo run -p dodge_core --features sim --bin dodge_sim -- --frames 5000
//! ```

use clap::Parser;
use dodge_core::{Fingertip, GameConfig, GameState, HandPolicy, StepOutcome};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[command(name = "dodge_sim", about = "Run the dodging game headless with a scripted hand")]
struct Args {
    /// Frames to simulate.
    #[arg(long, default_value_t = 10_000)]
    frames: u32,

    /// RNG seed for reproducible runs.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Frames for one full left→right→left sweep of the scripted hand.
    #[arg(long, default_value_t = 240)]
    sweep: u32,

    /// Which of the two scripted hands steers: first or last.
    #[arg(long, default_value_t = HandPolicy::First)]
    hand: HandPolicy,
}

#[derive(Default)]
struct Tally {
    games:   u32,
    hits:    u32,
    passed:  u32,
    spawned: u32,
    best:    u32,
    total:   u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    println!();
    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║              Dodge — Headless Simulator                  ║");
    println!("╚══════════════════════════════════════════════════════════╝");
    println!();

    let mut game = match GameState::new(GameConfig::default()) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut tally = Tally::default();
    let sweep = args.sweep.max(2);

    for frame in 0..args.frames {
        // Triangle wave in [0, 1]; a second "hand" mirrors it.
        let phase = (frame % sweep) as f32 / sweep as f32;
        let x = if phase < 0.5 { phase * 2.0 } else { 2.0 - phase * 2.0 };
        let hands = [Fingertip::new(x, 0.5), Fingertip::new(1.0 - x, 0.5)];

        let report = game.step(args.hand.select(&hands), &mut rng);
        tally.passed  += report.passed;
        tally.spawned += report.spawned as u32;

        match report.outcome {
            StepOutcome::Clear => {}
            StepOutcome::Hit { .. } => tally.hits += 1,
            StepOutcome::GameOver { final_score } => {
                tally.hits  += 1;
                tally.games += 1;
                tally.total += final_score;
                tally.best   = tally.best.max(final_score);
                game.restart();
            }
        }
    }

    println!("  Frames simulated : {}", args.frames);
    println!("  Seed / hand      : {} / {}", args.seed, args.hand);
    println!("  Enemies spawned  : {}", tally.spawned);
    println!("  Enemies dodged   : {}", tally.passed);
    println!("  Hits taken       : {}", tally.hits);
    println!("  Games finished   : {}", tally.games);
    if tally.games > 0 {
        println!("  Best score       : {}", tally.best);
        println!("  Mean score       : {:.1}", tally.total as f64 / tally.games as f64);
    }
    println!("  In-progress game : score {}, lives {}", game.score(), game.lives());
    println!();
}
