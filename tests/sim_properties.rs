//! Property tests for the simulation core: invariants that must hold under
//! arbitrary input sequences, not just the scripted scenarios.

use proptest::prelude::*;

use skyhop::consts::*;
use skyhop::sim::{GameState, RunPhase, TickInput, Viewport, frame_delta, tick};

const VIEWPORT: Viewport = Viewport { w: 480.0, h: 800.0 };

fn input_sequence() -> impl Strategy<Value = Vec<TickInput>> {
    prop::collection::vec(
        (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(left, right, jump)| TickInput {
            left,
            right,
            jump,
        }),
        1..300,
    )
}

fn run_sequence(seed: u64, inputs: &[TickInput]) -> GameState {
    let mut state = GameState::new(seed, VIEWPORT);
    state.start();
    let mut events = Vec::new();
    for input in inputs {
        tick(&mut state, input, 1.0, &mut events);
        if state.phase != RunPhase::Running {
            break;
        }
    }
    state
}

proptest! {
    #[test]
    fn score_is_monotone_for_any_inputs(seed in 0u64..1_000, inputs in input_sequence()) {
        let mut state = GameState::new(seed, VIEWPORT);
        state.start();
        let mut events = Vec::new();
        let mut prev = state.score;
        for input in &inputs {
            tick(&mut state, input, 1.0, &mut events);
            prop_assert!(state.score >= prev);
            prev = state.score;
        }
    }

    #[test]
    fn same_seed_and_inputs_replay_identically(seed in 0u64..1_000, inputs in input_sequence()) {
        let a = run_sequence(seed, &inputs);
        let b = run_sequence(seed, &inputs);
        prop_assert_eq!(a.player.pos, b.player.pos);
        prop_assert_eq!(a.player.vel, b.player.vel);
        prop_assert_eq!(a.score, b.score);
        prop_assert_eq!(a.platforms.len(), b.platforms.len());
        prop_assert_eq!(a.phase, b.phase);
    }

    #[test]
    fn horizontal_speed_stays_clamped(seed in 0u64..1_000, inputs in input_sequence()) {
        let mut state = GameState::new(seed, VIEWPORT);
        state.start();
        let mut events = Vec::new();
        for input in &inputs {
            tick(&mut state, input, 1.0, &mut events);
            prop_assert!(state.player.vel.x.abs() <= MAX_HORIZONTAL_SPEED);
        }
    }

    #[test]
    fn platforms_stay_inside_the_retention_band(seed in 0u64..1_000, inputs in input_sequence()) {
        let mut state = GameState::new(seed, VIEWPORT);
        state.start();
        let mut events = Vec::new();
        for input in &inputs {
            tick(&mut state, input, 1.0, &mut events);
            if state.phase != RunPhase::Running {
                break;
            }
            for platform in &state.platforms {
                let screen_y = platform.pos.y - state.camera.y;
                prop_assert!(screen_y > -RETAIN_ABOVE);
                // Streaming may spawn above, but never below the band
                prop_assert!(screen_y < VIEWPORT.h + RETAIN_BELOW);
            }
        }
    }

    #[test]
    fn frame_delta_is_bounded(ms in 0.0f32..10_000.0) {
        let delta = frame_delta(ms);
        prop_assert!(delta >= 0.0);
        prop_assert!(delta <= MAX_FRAME_MS / REFERENCE_TICK_MS);
    }

    #[test]
    fn camera_converges_on_a_static_target(y in -10_000.0f32..10_000.0) {
        let mut camera = skyhop::sim::Camera::default();
        let target = y - CAMERA_LEAD * VIEWPORT.h;
        for _ in 0..2_000 {
            camera.follow(y, VIEWPORT.h);
        }
        prop_assert!((camera.y - target).abs() < 1.0);
    }
}
