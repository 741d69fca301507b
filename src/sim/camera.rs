//! Camera controller
//!
//! A single vertical offset smoothed toward the player's height. World y
//! minus the offset gives screen-space y.

use crate::consts::{CAMERA_LEAD, CAMERA_SMOOTHING};

/// Smoothed vertical viewport offset
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Camera {
    pub y: f32,
}

impl Camera {
    /// Ease toward the player each tick. Exponential smoothing, never a hard
    /// snap, and unclamped in both directions so descending runs track too.
    pub fn follow(&mut self, player_y: f32, viewport_h: f32) {
        let target = player_y - CAMERA_LEAD * viewport_h;
        self.y += (target - self.y) * CAMERA_SMOOTHING;
    }
}
