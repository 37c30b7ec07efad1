//! Easing curves for interpolated animation.

/// A monotonic map from animation progress `[0, 1]` to eased progress `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// `1 - (1 - p)^3`, used for periodic value updates.
    OutCubic,
    /// `1 - (1 - p)^4`, used for the load-in counters.
    #[default]
    OutQuart,
}

impl Easing {
    /// Apply the curve. Progress outside `[0, 1]` is clamped.
    pub fn apply(self, progress: f64) -> f64 {
        let p = progress.clamp(0.0, 1.0);
        match self {
            Easing::Linear => p,
            Easing::OutCubic => 1.0 - (1.0 - p).powi(3),
            Easing::OutQuart => 1.0 - (1.0 - p).powi(4),
        }
    }
}
