//! Fixed-pipeline simulation tick
//!
//! The orchestrator: one call advances the whole simulation in a fixed
//! component order and collects the tick's side-effect events. The function
//! has no frame-scheduling dependency, so test harnesses drive it in a tight
//! loop; `main` wraps it in the terminal frame loop.

use super::state::{GameEvent, GameState, RunPhase};
use super::{collision, physics, score, world};
use crate::consts::*;

/// Held input flags for a single tick, sampled once at the top
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Scale a wall-clock frame time into a simulation delta.
///
/// 16 ms maps to a delta of 1.0. The frame is clamped to 34 ms so a stalled
/// host (suspended terminal, debugger) cannot tunnel the player through
/// platforms or build runaway velocity.
pub fn frame_delta(frame_ms: f32) -> f32 {
    frame_ms.min(MAX_FRAME_MS) / REFERENCE_TICK_MS
}

/// Advance the simulation by one tick.
///
/// A no-op unless the run is in `Running`; pause freezes physics, collision,
/// generation, and scoring while the frontend keeps rendering. `events` is
/// cleared and refilled with this tick's side effects in emission order.
pub fn tick(state: &mut GameState, input: &TickInput, delta: f32, events: &mut Vec<GameEvent>) {
    events.clear();
    if state.phase != RunPhase::Running {
        return;
    }
    state.time_ticks += 1;

    let axis = physics::input_axis(input.left, input.right);
    physics::integrate(
        &mut state.player,
        state.viewport,
        axis,
        input.jump,
        delta,
        events,
    );

    collision::resolve_landings(&mut state.player, &state.platforms, events);
    if state.player.on_ground && !state.was_on_ground {
        events.push(GameEvent::Land);
    }
    state.was_on_ground = state.player.on_ground;

    collision::advance_moving(&mut state.platforms, state.viewport.w, delta);

    state
        .camera
        .follow(state.player.pos.y, state.viewport.h);

    world::retain_visible(&mut state.platforms, state.camera.y, state.viewport.h);

    score::update(state, events);

    if score::is_below_window(state) {
        state.phase = RunPhase::GameOver;
        events.push(GameEvent::GameOver);
        return;
    }

    world::stream_platforms(state);
}
