//! Run/score manager
//!
//! Score derives from the highest altitude ever reached, so it never
//! decreases within a run even while the player is falling. Bucket crossings
//! emit sound events; falling out of the camera window ends the run.

use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Recompute max altitude and score, emitting bucket-crossing events.
///
/// A 10 000 crossing also crosses the 1 000 bucket, so both events fire on
/// the same tick.
pub fn update(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.player.pos.y < state.max_height {
        state.max_height = state.player.pos.y;
    }
    let new_score = (state.viewport.h - state.max_height).floor().max(0.0) as u32;
    if new_score / MILESTONE_BUCKET > state.score / MILESTONE_BUCKET {
        events.push(GameEvent::Milestone);
    }
    if new_score / SCORE_BUCKET > state.score / SCORE_BUCKET {
        events.push(GameEvent::Score);
    }
    state.score = new_score;
}

/// True once the player's screen-space y is more than the margin below the
/// viewport bottom.
pub fn is_below_window(state: &GameState) -> bool {
    state.player_screen_y() > state.viewport.h + GAME_OVER_MARGIN
}
