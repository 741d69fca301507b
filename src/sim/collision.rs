//! Collision resolver
//!
//! One-sided platform landings plus moving-platform self-motion. Platforms
//! only collide from above: a player moving upward passes straight through,
//! matching platformer convention.

use super::state::{GameEvent, Platform, PlatformKind, Player};
use crate::consts::*;

/// True when the player's feet cross this platform's top surface this tick.
///
/// Detection uses the integrated pose: feet within the tolerance band below
/// the top, the tick's vertical displacement reaching back up to it, and the
/// horizontal extents strictly overlapping. Upward or resting motion
/// (`vy <= 0`) never lands.
pub fn lands_on(player: &Player, platform: &Platform) -> bool {
    if player.vel.y <= 0.0 {
        return false;
    }
    let feet = player.feet();
    feet <= platform.top() + LANDING_TOLERANCE
        && feet + player.vel.y >= platform.top()
        && player.right() > platform.left()
        && player.left() < platform.right()
}

/// Resolve landings against the active set, in iteration order.
///
/// Detection runs against a snapshot of the integrated pose so every
/// overlapping platform gets the same view of the tick; effects apply in
/// order and the last write wins. The caller detects the airborne-to-grounded
/// edge for the landing sound.
pub fn resolve_landings(player: &mut Player, platforms: &[Platform], events: &mut Vec<GameEvent>) {
    let probe = player.clone();
    player.on_ground = false;
    for platform in platforms {
        if !lands_on(&probe, platform) {
            continue;
        }
        player.pos.y = platform.top() - PLAYER_H / 2.0;
        player.vel.y = 0.0;
        player.on_ground = true;
        match platform.kind {
            PlatformKind::Spring => {
                player.vel.y = JUMP_IMPULSE * SPRING_FACTOR;
                events.push(GameEvent::Spring);
            }
            PlatformKind::Moving => {
                // One-tick carry, not continuous attachment
                player.pos.x += platform.vx * 2.0;
            }
            PlatformKind::Normal => {}
        }
    }
}

/// Advance moving platforms after landing resolution; the span bounces
/// elastically off the viewport edges.
pub fn advance_moving(platforms: &mut [Platform], viewport_w: f32, delta: f32) {
    for platform in platforms {
        if platform.kind != PlatformKind::Moving {
            continue;
        }
        platform.pos.x += platform.vx * delta;
        if platform.pos.x < 0.0 || platform.pos.x + PLATFORM_W > viewport_w {
            platform.vx = -platform.vx;
        }
    }
}
