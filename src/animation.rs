//! Die-roll animation: spin the backdrop polygon and flicker the value.
//!
//! Every displayed value during a run is an independent draw; whatever is
//! on screen when the run times out is the committed result. The control
//! loop holds the roll button's release after the final tick so a long
//! press cannot immediately re-trigger.

use crate::config::{
    ANIMATION_DURATION_MS, ANIMATION_REROLL_EVERY_TICKS, ANIMATION_ROTATION_STEP_DEG,
};

/// What one animation tick asks the caller to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationTick {
    /// Backdrop rotation after this tick, degrees in `[0, 360)`.
    pub rotation_deg: u16,
    /// Draw a fresh roll this tick (alternate ticks only).
    pub reroll: bool,
    /// The run ended this tick; the value on screen is the result.
    pub finished: bool,
}

/// Roll animation state. The rotation angle persists between runs;
/// switching dice snaps it to the new die's base rotation.
#[derive(Clone, Copy, Debug)]
pub struct RollAnimation {
    running: bool,
    ticks: u32,
    started_at_ms: u64,
    rotation_deg: u16,
}

impl RollAnimation {
    pub const fn new(base_rotation_deg: u16) -> Self {
        Self {
            running: false,
            ticks: 0,
            started_at_ms: 0,
            rotation_deg: base_rotation_deg % 360,
        }
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn rotation_deg(&self) -> u16 {
        self.rotation_deg
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Begin (or re-begin) a run at `now`.
    pub fn start(&mut self, now_ms: u64) {
        self.running = true;
        self.ticks = 0;
        self.started_at_ms = now_ms;
    }

    /// Snap the backdrop to a die's base rotation (die switched).
    pub fn set_rotation(&mut self, base_rotation_deg: u16) {
        self.rotation_deg = base_rotation_deg % 360;
    }

    /// Advance one scheduler tick. Call only while `running()`.
    pub fn tick(&mut self, now_ms: u64) -> AnimationTick {
        self.rotation_deg = (self.rotation_deg + ANIMATION_ROTATION_STEP_DEG) % 360;
        let reroll = self.ticks % ANIMATION_REROLL_EVERY_TICKS == 0;
        self.ticks += 1;
        let finished = now_ms.saturating_sub(self.started_at_ms) > ANIMATION_DURATION_MS;
        if finished {
            self.running = false;
        }
        AnimationTick {
            rotation_deg: self.rotation_deg,
            reroll,
            finished,
        }
    }
}
