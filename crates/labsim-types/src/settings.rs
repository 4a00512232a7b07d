//! Playback settings for step-sequence visualizers.

use serde::{Deserialize, Serialize};

/// Timing configuration for step playback
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSettings {
    /// Shortest delay between steps in milliseconds (fastest playback)
    pub min_delay_ms: u32,

    /// Longest delay between steps in milliseconds (slowest playback)
    pub max_delay_ms: u32,
}

impl PlaybackSettings {
    /// Map a speed slider value onto a step delay. The slider range equals
    /// the delay range but inverted: a larger speed value means a smaller
    /// delay. Out-of-range speeds are clamped.
    pub fn delay_for_speed(&self, speed: u32) -> u32 {
        let speed = speed.clamp(self.min_delay_ms, self.max_delay_ms);
        self.min_delay_ms + self.max_delay_ms - speed
    }

    /// Default delay, from the midpoint of the speed range
    pub fn default_delay(&self) -> u32 {
        self.delay_for_speed((self.min_delay_ms + self.max_delay_ms) / 2)
    }
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            min_delay_ms: 60,
            max_delay_ms: 800,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_inversion() {
        let settings = PlaybackSettings::default();
        assert_eq!(settings.delay_for_speed(800), 60);
        assert_eq!(settings.delay_for_speed(60), 800);
        // clamped below range
        assert_eq!(settings.delay_for_speed(0), 800);
    }
}
