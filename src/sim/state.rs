//! Game state and core simulation types
//!
//! Everything the simulation mutates lives here. The frontend owns one
//! `GameState` and drives it through [`super::tick::tick`]; there is no
//! ambient global state, so test harnesses can run any number of instances
//! side by side.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::camera::Camera;
use super::world;
use crate::consts::*;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Freshly initialized, waiting for a start command
    Idle,
    /// Active gameplay
    Running,
    /// Simulation frozen; rendering continues
    Paused,
    /// Player fell below the camera window
    GameOver,
}

/// Discrete side-effect tags produced by a tick
///
/// The simulation never plays sounds itself; it emits these and a separate
/// dispatch step forwards them to the audio sink. The sequence itself is
/// asserted in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Player jumped off a platform
    Jump,
    /// Airborne-to-grounded transition
    Land,
    /// Landed on a spring platform
    Spring,
    /// Score crossed a 10 000 bucket
    Milestone,
    /// Score crossed a 1 000 bucket
    Score,
    /// Run ended
    GameOver,
}

/// Viewport dimensions in world units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub w: f32,
    pub h: f32,
}

/// The player-controlled character
///
/// Coordinates follow the screen convention: y grows downward, so climbing
/// means decreasing y. `pos` is the center of the collision box.
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub on_ground: bool,
}

impl Player {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            pos: Vec2::new(viewport.w / 2.0, viewport.h - 120.0),
            vel: Vec2::ZERO,
            on_ground: false,
        }
    }

    /// Bottom edge of the collision box
    pub fn feet(&self) -> f32 {
        self.pos.y + PLAYER_H / 2.0
    }

    pub fn left(&self) -> f32 {
        self.pos.x - PLAYER_W / 2.0
    }

    pub fn right(&self) -> f32 {
        self.pos.x + PLAYER_W / 2.0
    }
}

/// Platform behavior tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlatformKind {
    #[default]
    Normal,
    /// Oscillates horizontally and carries the player on landing
    Moving,
    /// Launches the player with an amplified impulse
    Spring,
}

/// A platform; `pos` is the top-left corner, `vx` is nonzero only for Moving
#[derive(Debug, Clone)]
pub struct Platform {
    pub pos: Vec2,
    pub kind: PlatformKind,
    pub vx: f32,
}

impl Platform {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            kind: PlatformKind::Normal,
            vx: 0.0,
        }
    }

    /// Top surface y, the landing line
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + PLATFORM_W
    }
}

/// Complete simulation state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Generation RNG; all randomness flows through this
    pub rng: Pcg32,
    pub viewport: Viewport,
    pub player: Player,
    /// Active platform set; insertion order is the collision iteration order
    pub platforms: Vec<Platform>,
    pub camera: Camera,
    /// Derived from the highest altitude reached, monotonic within a run
    pub score: u32,
    /// Smallest y ever reached (y decreases upward)
    pub max_height: f32,
    pub phase: RunPhase,
    /// Grounded state at the end of the previous tick, for landing edges
    pub was_on_ground: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Build an Idle-ready state with the initial platform field seeded and
    /// the player standing on the first platform.
    pub fn new(seed: u64, viewport: Viewport) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            viewport,
            player: Player::new(viewport),
            platforms: Vec::new(),
            camera: Camera::default(),
            score: 0,
            max_height: 0.0,
            phase: RunPhase::Idle,
            was_on_ground: false,
            time_ticks: 0,
        };
        world::seed_field(&mut state);
        state.max_height = state.player.pos.y;
        state.was_on_ground = state.player.on_ground;
        state
    }

    /// Start command. Idle becomes Running; a finished run is fully rebuilt
    /// first, so GameOver never resumes mid-fall.
    pub fn start(&mut self) {
        match self.phase {
            RunPhase::Idle => self.phase = RunPhase::Running,
            RunPhase::GameOver => self.restart(),
            RunPhase::Running | RunPhase::Paused => {}
        }
    }

    /// Pause toggle; meaningless outside Running/Paused
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            RunPhase::Running => RunPhase::Paused,
            RunPhase::Paused => RunPhase::Running,
            other => other,
        };
    }

    /// Full reset to an Idle-ready state. The seed advances so the new field
    /// differs from the last run while staying reproducible.
    pub fn reset(&mut self) {
        *self = Self::new(self.seed.wrapping_add(1), self.viewport);
    }

    /// Restart command: reset plus start
    pub fn restart(&mut self) {
        self.reset();
        self.phase = RunPhase::Running;
    }

    pub fn running(&self) -> bool {
        self.phase == RunPhase::Running
    }

    /// Screen-space y of the player (world y minus camera offset)
    pub fn player_screen_y(&self) -> f32 {
        self.player.pos.y - self.camera.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport { w: 480.0, h: 800.0 };

    #[test]
    fn new_state_is_idle_and_grounded() {
        let state = GameState::new(7, VIEWPORT);
        assert_eq!(state.phase, RunPhase::Idle);
        assert!(state.player.on_ground);
        assert_eq!(state.score, 0);
        assert_eq!(state.max_height, state.player.pos.y);
    }

    #[test]
    fn start_only_leaves_idle_or_game_over() {
        let mut state = GameState::new(7, VIEWPORT);
        state.start();
        assert_eq!(state.phase, RunPhase::Running);

        state.toggle_pause();
        assert_eq!(state.phase, RunPhase::Paused);
        state.start();
        assert_eq!(state.phase, RunPhase::Paused);
        state.toggle_pause();
        assert_eq!(state.phase, RunPhase::Running);
    }

    #[test]
    fn start_after_game_over_rebuilds_the_run() {
        let mut state = GameState::new(7, VIEWPORT);
        state.start();
        state.phase = RunPhase::GameOver;
        state.score = 1234;
        state.camera.y = -5000.0;

        state.start();
        assert_eq!(state.phase, RunPhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.camera.y, 0.0);
        assert!(state.player.on_ground);
    }

    #[test]
    fn toggle_pause_ignores_terminal_states() {
        let mut state = GameState::new(7, VIEWPORT);
        state.phase = RunPhase::GameOver;
        state.toggle_pause();
        assert_eq!(state.phase, RunPhase::GameOver);
    }

    #[test]
    fn same_seed_builds_the_same_field() {
        let a = GameState::new(42, VIEWPORT);
        let b = GameState::new(42, VIEWPORT);
        assert_eq!(a.platforms.len(), b.platforms.len());
        for (pa, pb) in a.platforms.iter().zip(&b.platforms) {
            assert_eq!(pa.pos, pb.pos);
            assert_eq!(pa.kind, pb.kind);
        }
    }
}
