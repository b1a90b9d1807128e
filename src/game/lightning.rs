//! Lightning timer
//!
//! Drives the periodic sky flash. After every flash the wait until the next
//! strike is re-rolled, so strikes come at irregular intervals.

use rand::Rng;
use crate::config::LightningConfig;

/// What the timer did this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightningChange {
    None,
    Struck,
    Faded,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LightningTimer {
    /// Seconds since the last state change
    pub elapsed: f32,
    pub active: bool,
    /// Seconds to wait (inactive) before the next strike
    pub cooldown: f32,
    /// Seconds a strike stays visible
    pub flash_duration: f32,
    cooldown_min: i32,
    cooldown_max: i32,
}

impl LightningTimer {
    pub fn new(config: &LightningConfig) -> Self {
        Self {
            elapsed: 0.0,
            active: false,
            cooldown: config.initial_cooldown,
            flash_duration: config.flash_duration,
            cooldown_min: config.cooldown_min,
            cooldown_max: config.cooldown_max,
        }
    }

    /// Advance by `delta_time` seconds.
    ///
    /// At most one state change happens per call: a frame long enough to
    /// cover both the cooldown and the flash still shows the flash for one
    /// frame.
    pub fn update(&mut self, delta_time: f32, rng: &mut impl Rng) -> LightningChange {
        self.elapsed += delta_time;

        if !self.active && self.elapsed > self.cooldown {
            self.active = true;
            self.elapsed = 0.0;
            return LightningChange::Struck;
        }

        if self.active && self.elapsed > self.flash_duration {
            self.active = false;
            self.elapsed = 0.0;
            self.cooldown = rng.gen_range(self.cooldown_min..self.cooldown_max) as f32;
            return LightningChange::Faded;
        }

        LightningChange::None
    }
}
