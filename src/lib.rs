//! Skyhop - an endless vertical platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, world streaming)
//! - `input`: Input flags and pointer-zone resolution
//! - `render`: Terminal renderer
//! - `audio`: Procedural sound effects driven by simulation events
//! - `settings` / `highscores`: JSON-persisted preferences and best scores

pub mod audio;
pub mod highscores;
pub mod input;
pub mod render;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game tuning constants
pub mod consts {
    /// Reference tick length in milliseconds (`delta` of 1.0)
    pub const REFERENCE_TICK_MS: f32 = 16.0;
    /// Wall-clock clamp per frame; bounds displacement after a stall
    pub const MAX_FRAME_MS: f32 = 34.0;

    /// Player collision box
    pub const PLAYER_W: f32 = 32.0;
    pub const PLAYER_H: f32 = 40.0;
    /// Horizontal acceleration scale (units per tick² at full input)
    pub const PLAYER_ACCEL: f32 = 3.2;
    /// Vertical impulse applied on jump (negative is up)
    pub const JUMP_IMPULSE: f32 = -10.5;
    /// Horizontal speed clamp
    pub const MAX_HORIZONTAL_SPEED: f32 = 5.0;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.45;
    /// Horizontal velocity decay per tick
    pub const FRICTION: f32 = 0.98;

    /// Platform dimensions (all platforms share one size)
    pub const PLATFORM_W: f32 = 80.0;
    pub const PLATFORM_H: f32 = 12.0;
    /// Tolerance band below a platform top that still counts as a landing
    pub const LANDING_TOLERANCE: f32 = 6.0;
    /// Spring platforms multiply the jump impulse by this factor
    pub const SPRING_FACTOR: f32 = 1.6;

    /// Chance a spawned platform drifts horizontally
    pub const MOVING_CHANCE: f32 = 0.12;
    /// Chance a spawned platform is a spring (checked after, overrides Moving)
    pub const SPRING_CHANCE: f32 = 0.06;
    /// Moving platform speed range
    pub const MOVING_SPEED_MIN: f32 = 1.0;
    pub const MOVING_SPEED_SPAN: f32 = 1.2;

    /// Number of platforms laid down at run start
    pub const INITIAL_PLATFORM_COUNT: usize = 20;
    /// Uniform vertical gap in the initial field
    pub const INITIAL_GAP: f32 = 90.0;
    /// Streaming gap range while climbing
    pub const STREAM_GAP_MIN: f32 = 80.0;
    pub const STREAM_GAP_SPAN: f32 = 20.0;
    /// Generation target margin above the camera's top edge
    pub const STREAM_MARGIN: f32 = 100.0;

    /// Retention band around the viewport, in screen-space units
    pub const RETAIN_BELOW: f32 = 400.0;
    pub const RETAIN_ABOVE: f32 = 200.0;

    /// Fraction of the viewport height the camera keeps above the player
    pub const CAMERA_LEAD: f32 = 0.35;
    /// Exponential smoothing factor for camera follow
    pub const CAMERA_SMOOTHING: f32 = 0.08;

    /// How far below the viewport bottom the run ends
    pub const GAME_OVER_MARGIN: f32 = 60.0;

    /// Score buckets that trigger sound events when crossed
    pub const MILESTONE_BUCKET: u32 = 10_000;
    pub const SCORE_BUCKET: u32 = 1_000;
}
