//! World generator
//!
//! Maintains the endless platform field: initial seeding at run start,
//! streaming new platforms above the camera while the player climbs, and
//! dropping platforms that scroll out of the retention band.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{GameState, Platform, PlatformKind};
use crate::consts::*;

/// Random x for a platform's left edge. The span is clamped so a viewport
/// narrower than a platform still generates instead of panicking.
fn spawn_x(rng: &mut Pcg32, viewport_w: f32) -> f32 {
    let span = (viewport_w - PLATFORM_W).max(0.0);
    if span > 0.0 { rng.random_range(0.0..span) } else { 0.0 }
}

/// Create one platform at the given altitude.
///
/// Variant selection runs both probability draws unconditionally, so Spring
/// overrides Moving when both hit. That ordering skews the observed rates
/// and is kept as fixed policy.
pub fn spawn_platform(rng: &mut Pcg32, viewport_w: f32, y: f32) -> Platform {
    let mut platform = Platform::new(spawn_x(rng, viewport_w), y);
    if rng.random::<f32>() < MOVING_CHANCE {
        platform.kind = PlatformKind::Moving;
        let sign = if rng.random::<f32>() < 0.5 { -1.0 } else { 1.0 };
        platform.vx = sign * (MOVING_SPEED_MIN + rng.random::<f32>() * MOVING_SPEED_SPAN);
    }
    if rng.random::<f32>() < SPRING_CHANCE {
        platform.kind = PlatformKind::Spring;
        platform.vx = 0.0;
    }
    platform
}

/// Lay down the initial field and seat the player on the first platform.
///
/// Platforms stack upward from the floor with a uniform gap; the first one is
/// forced toward the horizontal center so the run always starts grounded.
pub fn seed_field(state: &mut GameState) {
    let (w, h) = (state.viewport.w, state.viewport.h);
    state.platforms.clear();
    for i in 0..INITIAL_PLATFORM_COUNT {
        let y = h - i as f32 * INITIAL_GAP - 40.0;
        let x = spawn_x(&mut state.rng, w);
        state.platforms.push(Platform::new(x, y));
    }

    state.platforms[0].pos.x = (w / 2.0 - 60.0).max(0.0);
    let first_left = state.platforms[0].left();
    let first_top = state.platforms[0].top();
    state.player.pos.x = first_left + PLATFORM_W / 2.0;
    state.player.pos.y = first_top - PLAYER_H / 2.0;
    state.player.vel = glam::Vec2::ZERO;
    state.player.on_ground = true;
}

/// Stream platforms above the frontier until it clears the camera's top
/// margin.
///
/// Only runs while the player is moving upward; with a satisfied frontier
/// this is a no-op, so it is safe to call every tick.
pub fn stream_platforms(state: &mut GameState) {
    if state.player.vel.y >= 0.0 {
        return;
    }
    let target = state.camera.y - STREAM_MARGIN;
    let mut frontier = state
        .platforms
        .iter()
        .map(|p| p.pos.y)
        .fold(state.player.pos.y, f32::min);
    while frontier > target {
        let gap = STREAM_GAP_MIN + state.rng.random::<f32>() * STREAM_GAP_SPAN;
        let platform = spawn_platform(&mut state.rng, state.viewport.w, frontier - gap);
        state.platforms.push(platform);
        frontier -= gap;
    }
}

/// Drop platforms that scrolled outside the retention band. The band is much
/// larger than the viewport so nothing the camera could still reach this
/// tick pops out.
pub fn retain_visible(platforms: &mut Vec<Platform>, camera_y: f32, viewport_h: f32) {
    platforms.retain(|p| {
        let screen_y = p.pos.y - camera_y;
        screen_y < viewport_h + RETAIN_BELOW && screen_y > -RETAIN_ABOVE
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Viewport;
    use rand::SeedableRng;

    const VIEWPORT: Viewport = Viewport { w: 480.0, h: 800.0 };

    #[test]
    fn seed_field_stacks_upward_with_uniform_gap() {
        let state = GameState::new(1, VIEWPORT);
        assert_eq!(state.platforms.len(), INITIAL_PLATFORM_COUNT);
        assert_eq!(state.platforms[0].pos.y, VIEWPORT.h - 40.0);
        for pair in state.platforms.windows(2) {
            assert_eq!(pair[0].pos.y - pair[1].pos.y, INITIAL_GAP);
        }
        assert!(state.platforms.iter().all(|p| p.kind == PlatformKind::Normal));
    }

    #[test]
    fn player_starts_grounded_on_the_first_platform() {
        let state = GameState::new(1, VIEWPORT);
        let first = &state.platforms[0];
        assert_eq!(first.pos.x, VIEWPORT.w / 2.0 - 60.0);
        assert!(state.player.on_ground);
        assert_eq!(state.player.feet(), first.top());
        assert!(state.player.pos.x > first.left() && state.player.pos.x < first.right());
    }

    #[test]
    fn degenerate_viewport_clamps_spawn_x() {
        let narrow = Viewport { w: 40.0, h: 800.0 };
        let mut rng = Pcg32::seed_from_u64(3);
        for i in 0..50 {
            let platform = spawn_platform(&mut rng, narrow.w, -(i as f32) * 90.0);
            assert_eq!(platform.pos.x, 0.0);
        }
        let state = GameState::new(3, narrow);
        assert!(state.player.on_ground);
    }

    #[test]
    fn variant_rates_roughly_match_policy() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut moving = 0usize;
        let mut spring = 0usize;
        let n = 10_000;
        for i in 0..n {
            match spawn_platform(&mut rng, VIEWPORT.w, -(i as f32)).kind {
                PlatformKind::Moving => moving += 1,
                PlatformKind::Spring => spring += 1,
                PlatformKind::Normal => {}
            }
        }
        // Moving keeps ~12% minus the ~6% the spring draw steals back
        let moving_rate = moving as f32 / n as f32;
        let spring_rate = spring as f32 / n as f32;
        assert!((0.08..0.15).contains(&moving_rate), "moving {moving_rate}");
        assert!((0.03..0.09).contains(&spring_rate), "spring {spring_rate}");
    }

    #[test]
    fn moving_speed_in_range_and_spring_is_static() {
        let mut rng = Pcg32::seed_from_u64(11);
        for i in 0..5_000 {
            let platform = spawn_platform(&mut rng, VIEWPORT.w, -(i as f32));
            match platform.kind {
                PlatformKind::Moving => {
                    let speed = platform.vx.abs();
                    assert!(
                        (MOVING_SPEED_MIN..=MOVING_SPEED_MIN + MOVING_SPEED_SPAN).contains(&speed)
                    );
                }
                _ => assert_eq!(platform.vx, 0.0),
            }
        }
    }

    #[test]
    fn streaming_fills_up_to_the_margin() {
        let mut state = GameState::new(5, VIEWPORT);
        state.player.vel.y = -1.0;
        state.camera.y = -4000.0;
        let before = state.platforms.len();
        stream_platforms(&mut state);
        assert!(state.platforms.len() > before);

        let frontier = state
            .platforms
            .iter()
            .map(|p| p.pos.y)
            .fold(f32::INFINITY, f32::min);
        assert!(frontier <= state.camera.y - STREAM_MARGIN);

        // New platforms are spaced by gaps within the sampling range
        let mut ys: Vec<f32> = state.platforms[before..].iter().map(|p| p.pos.y).collect();
        ys.sort_by(|a, b| b.partial_cmp(a).unwrap());
        for pair in ys.windows(2) {
            let gap = pair[0] - pair[1];
            assert!((STREAM_GAP_MIN..=STREAM_GAP_MIN + STREAM_GAP_SPAN).contains(&gap));
        }
    }

    #[test]
    fn streaming_is_idempotent_once_satisfied() {
        let mut state = GameState::new(5, VIEWPORT);
        state.player.vel.y = -1.0;
        state.camera.y = -4000.0;
        stream_platforms(&mut state);
        let count = state.platforms.len();
        stream_platforms(&mut state);
        stream_platforms(&mut state);
        assert_eq!(state.platforms.len(), count);
    }

    #[test]
    fn streaming_waits_for_upward_motion() {
        let mut state = GameState::new(5, VIEWPORT);
        state.player.vel.y = 2.0;
        state.camera.y = -4000.0;
        let before = state.platforms.len();
        stream_platforms(&mut state);
        assert_eq!(state.platforms.len(), before);
    }

    #[test]
    fn retention_band_boundaries() {
        let camera_y = 0.0;
        let h = VIEWPORT.h;
        let mut platforms = vec![
            Platform::new(0.0, h + RETAIN_BELOW - 1.0), // kept
            Platform::new(0.0, h + RETAIN_BELOW + 1.0), // dropped
            Platform::new(0.0, -(RETAIN_ABOVE - 1.0)),  // kept
            Platform::new(0.0, -(RETAIN_ABOVE + 1.0)),  // dropped
        ];
        retain_visible(&mut platforms, camera_y, h);
        let ys: Vec<f32> = platforms.iter().map(|p| p.pos.y).collect();
        assert_eq!(ys, vec![h + RETAIN_BELOW - 1.0, -(RETAIN_ABOVE - 1.0)]);
    }
}
