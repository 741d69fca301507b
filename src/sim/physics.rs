//! Physics integrator
//!
//! Advances player velocity and position once per tick: input acceleration,
//! friction, speed clamp, jump impulse, gravity, then integration and
//! horizontal wraparound. The tick's `delta` is a time scale, 1.0 at the
//! 16 ms reference step.

use super::state::{GameEvent, Player, Viewport};
use crate::consts::*;

/// Resolve held flags into a horizontal axis; both held cancel out.
pub fn input_axis(left: bool, right: bool) -> f32 {
    let mut axis = 0.0;
    if left {
        axis -= 1.0;
    }
    if right {
        axis += 1.0;
    }
    axis
}

/// Advance the player by one tick.
///
/// The jump impulse is applied before the gravity step, so a jump tick still
/// receives one tick of gravity. Friction runs every tick whether or not
/// input is held.
pub fn integrate(
    player: &mut Player,
    viewport: Viewport,
    axis: f32,
    jump: bool,
    delta: f32,
    events: &mut Vec<GameEvent>,
) {
    player.vel.x += axis * 0.6 * PLAYER_ACCEL * delta;
    player.vel.x *= FRICTION;
    player.vel.x = player
        .vel
        .x
        .clamp(-MAX_HORIZONTAL_SPEED, MAX_HORIZONTAL_SPEED);

    if jump && player.on_ground {
        player.vel.y = JUMP_IMPULSE;
        player.on_ground = false;
        events.push(GameEvent::Jump);
    }
    player.vel.y += GRAVITY * delta;

    player.pos += player.vel * delta;

    // Wrap once the sprite has fully left one edge
    if player.pos.x < -PLAYER_W {
        player.pos.x = viewport.w + PLAYER_W;
    } else if player.pos.x > viewport.w + PLAYER_W {
        player.pos.x = -PLAYER_W;
    }
}
