use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Timer periods and transition lengths, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Period between fact rotations.
    pub fact_interval_ms: u64,
    /// Fade-out before a new fact is written, and the fade-in after.
    pub fact_fade_ms: u64,
    /// Period between speed jitter updates.
    pub jitter_interval_ms: u64,
    /// Length of each jitter animation.
    pub jitter_duration_ms: u64,
    /// How long a notification banner stays before sliding out.
    pub banner_ms: u64,
    /// Period of the render-hint visibility pass.
    pub optimize_interval_ms: u64,
    /// Target time between frames.
    pub frame_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            fact_interval_ms: 4000,
            fact_fade_ms: 500,
            jitter_interval_ms: 3000,
            jitter_duration_ms: 1000,
            banner_ms: 3000,
            optimize_interval_ms: 1000,
            frame_ms: 33,
        }
    }
}

impl Timings {
    pub fn fact_interval(&self) -> Duration {
        Duration::from_millis(self.fact_interval_ms)
    }

    pub fn fact_fade(&self) -> Duration {
        Duration::from_millis(self.fact_fade_ms)
    }

    pub fn jitter_interval(&self) -> Duration {
        Duration::from_millis(self.jitter_interval_ms)
    }

    pub fn jitter_duration(&self) -> Duration {
        Duration::from_millis(self.jitter_duration_ms)
    }

    pub fn banner(&self) -> Duration {
        Duration::from_millis(self.banner_ms)
    }

    pub fn optimize_interval(&self) -> Duration {
        Duration::from_millis(self.optimize_interval_ms)
    }

    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("fact_interval_ms", self.fact_interval_ms),
            ("fact_fade_ms", self.fact_fade_ms),
            ("jitter_interval_ms", self.jitter_interval_ms),
            ("jitter_duration_ms", self.jitter_duration_ms),
            ("banner_ms", self.banner_ms),
            ("optimize_interval_ms", self.optimize_interval_ms),
            ("frame_ms", self.frame_ms),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, ms)| *ms == 0) {
            return Err(ConfigError::Invalid(format!(
                "timings.{name} must be greater than zero"
            )));
        }
        // Fade-out plus fade-in must fit in one rotation period.
        if self.fact_fade_ms * 2 > self.fact_interval_ms {
            return Err(ConfigError::Invalid(
                "timings.fact_fade_ms must be at most half of fact_interval_ms".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Timings::default().validate().is_ok());
    }

    #[test]
    fn test_zero_rejected() {
        let timings = Timings {
            jitter_duration_ms: 0,
            ..Timings::default()
        };
        let err = timings.validate().unwrap_err();
        assert!(err.to_string().contains("jitter_duration_ms"));
    }

    #[test]
    fn test_fade_longer_than_half_interval_rejected() {
        let timings = Timings {
            fact_interval_ms: 800,
            fact_fade_ms: 500,
            ..Timings::default()
        };
        assert!(timings.validate().is_err());
    }
}
