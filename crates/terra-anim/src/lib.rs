//! Time-driven animation for terra.
//!
//! Everything here reads time from an injected [`Clock`] instead of the wall
//! clock, so animations and timers can be stepped deterministically in tests
//! with a [`ManualClock`].

mod animator;
mod clock;
mod scheduler;
mod value;

pub use animator::{AnimError, FrameStatus, ValueAnimator};
pub use clock::{Clock, ManualClock, SystemClock};
pub use scheduler::{Scheduler, TimerId};
pub use value::{AnimatedValue, AnimationId};
