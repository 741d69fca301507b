//! Input latching between the terminal event pump and the simulation
//!
//! Terminal keyboards report presses but no releases, so a pressed direction
//! stays held for a short window that key auto-repeat keeps refreshing.
//! Pointer input maps the horizontal position into three zones, matching the
//! touch layout: outer bands steer, the middle band jumps.

use crate::sim::TickInput;

/// Ticks a direction key stays held after a press; auto-repeat refreshes it
const KEY_HOLD_TICKS: u8 = 8;

/// Pointer zone, resolved from the press position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerZone {
    Left,
    Jump,
    Right,
}

impl PointerZone {
    /// Resolve a horizontal position against the view width. Below 40% steers
    /// left, above 60% steers right, the middle band jumps.
    pub fn resolve(x: f32, width: f32) -> Self {
        if x < width * 0.4 {
            PointerZone::Left
        } else if x > width * 0.6 {
            PointerZone::Right
        } else {
            PointerZone::Jump
        }
    }
}

/// Latched input flags, sampled once per tick
#[derive(Debug, Default)]
pub struct InputState {
    left_ticks: u8,
    right_ticks: u8,
    jump: bool,
    pointer: Option<PointerZone>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press_left(&mut self) {
        self.left_ticks = KEY_HOLD_TICKS;
    }

    pub fn press_right(&mut self) {
        self.right_ticks = KEY_HOLD_TICKS;
    }

    /// One-shot: consumed by the next `sample`
    pub fn press_jump(&mut self) {
        self.jump = true;
    }

    /// Pointer pressed or dragged; the zones are mutually exclusive
    pub fn pointer_down(&mut self, x: f32, width: f32) {
        self.pointer = Some(PointerZone::resolve(x, width));
    }

    /// Pointer released: all pointer-held flags clear at once
    pub fn pointer_up(&mut self) {
        self.pointer = None;
    }

    /// Sample the current flags for one tick and age the latches.
    pub fn sample(&mut self) -> TickInput {
        let input = TickInput {
            left: self.left_ticks > 0 || self.pointer == Some(PointerZone::Left),
            right: self.right_ticks > 0 || self.pointer == Some(PointerZone::Right),
            jump: self.jump || self.pointer == Some(PointerZone::Jump),
        };
        self.left_ticks = self.left_ticks.saturating_sub(1);
        self.right_ticks = self.right_ticks.saturating_sub(1);
        self.jump = false;
        input
    }
}
