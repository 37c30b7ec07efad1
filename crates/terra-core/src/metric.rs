//! Speed metrics shown on the info cards.

use std::time::Duration;

use rand::Rng;

/// A displayed metric with its resting value and jitter amplitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedMetric {
    /// Resting value the counter settles around.
    pub base: f64,
    /// Full width of the jitter band centered on `base`.
    pub variation: f64,
    /// Unit label rendered under the value.
    pub unit: &'static str,
    /// Duration of the load-in counter animation.
    pub intro: Duration,
}

const ROTATION: SpeedMetric = SpeedMetric {
    base: 1670.0,
    variation: 5.0,
    unit: "km/h",
    intro: Duration::from_millis(2000),
};

const ORBITAL: SpeedMetric = SpeedMetric {
    base: 107_226.0,
    variation: 50.0,
    unit: "km/h",
    intro: Duration::from_millis(3000),
};

const TIME_TO_SUN: SpeedMetric = SpeedMetric {
    base: 8.0,
    variation: 0.1,
    unit: "minutes",
    intro: Duration::from_millis(1500),
};

impl SpeedMetric {
    /// Draw a value from `[base - variation/2, base + variation/2)`.
    pub fn jitter<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.base + (rng.random::<f64>() - 0.5) * self.variation
    }

    /// Inclusive bounds of every value [`SpeedMetric::jitter`] can produce.
    pub fn jitter_bounds(&self) -> (f64, f64) {
        let half = self.variation / 2.0;
        (self.base - half, self.base + half)
    }
}

/// The three metrics on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Rotation,
    Orbital,
    TimeToSun,
}

impl MetricKind {
    pub const ALL: [MetricKind; 3] = [
        MetricKind::Rotation,
        MetricKind::Orbital,
        MetricKind::TimeToSun,
    ];

    /// Position in [`MetricKind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Logical id of the display target this metric is written into.
    pub fn target_id(self) -> &'static str {
        match self {
            MetricKind::Rotation => "rotation-speed",
            MetricKind::Orbital => "orbital-speed",
            MetricKind::TimeToSun => "time-to-sun",
        }
    }

    /// Look up a metric by its display target id.
    pub fn from_target_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.target_id() == id)
    }

    /// Card title.
    pub fn label(self) -> &'static str {
        match self {
            MetricKind::Rotation => "Rotation Speed",
            MetricKind::Orbital => "Orbital Speed",
            MetricKind::TimeToSun => "Light to Earth",
        }
    }

    pub fn metric(self) -> &'static SpeedMetric {
        match self {
            MetricKind::Rotation => &ROTATION,
            MetricKind::Orbital => &ORBITAL,
            MetricKind::TimeToSun => &TIME_TO_SUN,
        }
    }
}

/// Round to the nearest integer and group thousands with commas (`107,226`).
pub fn format_grouped(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
