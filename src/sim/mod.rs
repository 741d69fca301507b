//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (platform insertion order)
//! - No rendering, audio, or platform dependencies
//!
//! Side effects leave the module as [`state::GameEvent`] tags that the
//! frontend dispatches to its audio sink.

pub mod camera;
pub mod collision;
pub mod physics;
pub mod score;
pub mod state;
pub mod tick;
pub mod world;

pub use camera::Camera;
pub use state::{GameEvent, GameState, Platform, PlatformKind, Player, RunPhase, Viewport};
pub use tick::{TickInput, frame_delta, tick};
