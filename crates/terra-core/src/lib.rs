//! Core types for the terra Earth dashboard.
//!
//! The constant tables the dashboard animates (speed metrics and facts), the
//! easing curves used to animate them, and the color themes.

mod easing;
mod facts;
mod metric;
mod theme;

pub use easing::Easing;
pub use facts::{FACTS, FactCursor, FactError, FactList};
pub use metric::{MetricKind, SpeedMetric, format_grouped};
pub use theme::ColorTheme;
