//! End-to-end rule checks against the public `dodge_core` API.

use std::ops::ControlFlow;

use dodge_core::collision;
use dodge_core::motion;
use dodge_core::{Command, Enemy, Fingertip, GameConfig, GameState, Phase, StepOutcome};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn quiet() -> GameState {
    GameState::new(GameConfig { spawn_probability: 0.0, ..GameConfig::default() }).unwrap()
}

#[test]
fn motion_then_collision_scenario() {
    let mut g = quiet();
    assert_eq!((g.player().x, g.player().y), (615, 580));

    let mut enemies = vec![Enemy { x: 600, y: 560, size: 40, speed: 10 }];
    assert_eq!(motion::advance(&mut enemies, 640), 0);
    assert_eq!(enemies, vec![Enemy { x: 600, y: 570, size: 40, speed: 10 }]);
    assert!(collision::collides(g.player(), &enemies));

    g.enemies_mut().push(Enemy { x: 600, y: 560, size: 40, speed: 10 });
    let report = g.step(None, &mut StdRng::seed_from_u64(1));
    assert_eq!(report.outcome, StepOutcome::Hit { lives_left: 2 });
}

#[test]
fn off_screen_scenario() {
    let mut g = quiet();
    g.enemies_mut().push(Enemy { x: 10, y: 635, size: 30, speed: 10 });
    let report = g.step(None, &mut StdRng::seed_from_u64(1));
    assert_eq!(report.passed, 1);
    assert_eq!(g.score(), 1);
    assert!(g.enemies().is_empty());
}

#[test]
fn score_delta_matches_removed_count() {
    let cfg = GameConfig { spawn_probability: 0.3, ..GameConfig::default() };
    let mut g = GameState::new(cfg).unwrap();
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..500 {
        let before = g.score();
        let report = g.step(Some(Fingertip::new(0.0, 1.0)), &mut rng);
        assert_eq!(g.score() - before, report.passed);
        if g.is_over() {
            break;
        }
    }
}

#[test]
fn long_random_session_respects_invariants() {
    let mut g = GameState::new(GameConfig { spawn_probability: 0.2, ..GameConfig::default() }).unwrap();
    let mut rng = StdRng::seed_from_u64(2024);
    let mut games_over = 0;
    let mut last_score = 0;

    for frame in 0..20_000u32 {
        let tip = Fingertip::new(((frame % 200) as f32) / 200.0, 0.5);
        let report = g.step(Some(tip), &mut rng);

        assert_eq!(g.lives() == 0, g.is_over());
        for e in g.enemies() {
            assert!(e.x >= 0 && e.x + e.size <= 1280);
        }
        match report.outcome {
            StepOutcome::GameOver { final_score } => {
                assert_eq!(final_score, g.score());
                games_over += 1;
                assert_eq!(g.apply(Command::Restart), ControlFlow::Continue(()));
                assert_eq!(g.phase(), Phase::Playing);
                last_score = 0;
            }
            StepOutcome::Hit { .. } => assert!(g.enemies().is_empty()),
            StepOutcome::Clear => {
                assert!(g.score() >= last_score);
                last_score = g.score();
            }
        }
    }
    assert!(games_over > 0, "a dense spawn rate should end at least one game");
}

#[test]
fn three_hits_without_reset_end_the_game() {
    let mut g = quiet();
    let mut rng = StdRng::seed_from_u64(5);
    g.enemies_mut().push(Enemy { x: 0, y: 635, size: 30, speed: 10 });
    g.step(None, &mut rng);

    for hit in 1..=3u32 {
        let p = *g.player();
        g.enemies_mut().push(Enemy { x: p.x + 5, y: p.y - 20, size: 30, speed: 15 });
        let report = g.step(None, &mut rng);
        assert_eq!(g.lives(), 3 - hit);
        assert_eq!(g.score(), 1);
        if hit < 3 {
            assert!(g.enemies().is_empty());
            assert!(!g.is_over());
            assert_eq!(report.outcome, StepOutcome::Hit { lives_left: 3 - hit });
        } else {
            assert!(g.is_over());
        }
    }

    assert_eq!(g.apply(Command::Restart), ControlFlow::Continue(()));
    assert_eq!(g.score(), 0);
    assert_eq!(g.lives(), 3);
    assert!(g.enemies().is_empty());
    assert!(!g.is_over());
    assert_eq!((g.player().x, g.player().y), (1280 / 2 - 50 / 2, 640 - 50 - 10));
}
