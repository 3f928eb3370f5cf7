//! Tick rate bookkeeping: the user's slider value, the live speed and the
//! automatic speed-up rule.

use std::time::Duration;

use super::config::GameConfig;

/// Converts a speed in ticks per second to a tick period, rounded to the
/// nearest millisecond so fractional speeds such as 5.5 are reproducible.
pub fn tick_period(speed: f64) -> Duration {
    let millis = (1000.0 / speed).round().max(1.0);
    Duration::from_millis(millis as u64)
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpeedControl {
    min_speed: f64,
    max_speed: f64,
    increment: f64,
    every: u32,
    headroom: f64,
    slider: f64,
    current: f64,
}

impl SpeedControl {
    /// Bounds from an unvalidated config are coerced: an inverted range
    /// collapses to `min_speed`.
    pub fn new(config: &GameConfig) -> Self {
        let mut speed = Self {
            min_speed: config.min_speed,
            max_speed: config.max_speed.max(config.min_speed),
            increment: config.speed_increment,
            every: config.speedup_every.max(1),
            headroom: config.speed_headroom,
            slider: 0.0,
            current: 0.0,
        };
        speed.slider = speed.bound(config.initial_speed);
        speed.current = speed.slider;
        speed
    }

    /// Like `clamp`, without its panic on inverted or NaN bounds
    fn bound(&self, value: f64) -> f64 {
        value.max(self.min_speed).min(self.max_speed)
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn slider(&self) -> f64 {
        self.slider
    }

    pub fn period(&self) -> Duration {
        tick_period(self.current)
    }

    /// Highest speed automatic speed-ups may reach
    pub fn cap(&self) -> f64 {
        self.max_speed.min(self.slider + self.headroom)
    }

    /// Move the slider. The live speed follows it immediately.
    /// Returns true when the tick period changed.
    pub fn set_slider(&mut self, value: f64) -> bool {
        let before = self.period();
        self.slider = self.bound(value);
        self.current = self.slider;
        self.period() != before
    }

    /// Drop back to the slider value
    pub fn reset(&mut self) {
        self.current = self.slider;
    }

    /// Apply the speed-up rule after the score reached `score`.
    /// Returns true when the speed changed.
    pub fn on_score(&mut self, score: u32) -> bool {
        if score == 0 || score % self.every != 0 {
            return false;
        }

        let cap = self.cap();
        if self.current >= cap {
            return false;
        }

        self.current = (self.current + self.increment).min(cap);
        true
    }
}
