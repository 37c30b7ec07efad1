//! Eased interpolation between two values.

use std::time::Duration;

use terra_core::Easing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AnimError {
    #[error("animation duration must be greater than zero")]
    ZeroDuration,
}

/// Whether an animator wants another frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Running,
    Finished,
}

/// Interpolates from `start` to `end` over `duration`, shaped by an [`Easing`].
///
/// The host calls [`ValueAnimator::frame`] once per presented frame. Each call
/// delivers the value for the current time; the call that reaches full
/// progress delivers exactly `end` and reports [`FrameStatus::Finished`].
/// Frames requested after that deliver nothing.
#[derive(Debug, Clone)]
pub struct ValueAnimator {
    start: f64,
    end: f64,
    duration: Duration,
    easing: Easing,
    started_at: Duration,
    finished: bool,
}

impl ValueAnimator {
    pub fn new(
        start: f64,
        end: f64,
        duration: Duration,
        easing: Easing,
        started_at: Duration,
    ) -> Result<Self, AnimError> {
        if duration.is_zero() {
            return Err(AnimError::ZeroDuration);
        }
        Ok(Self {
            start,
            end,
            duration,
            easing,
            started_at,
            finished: false,
        })
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Linear progress in `[0, 1]` at `now`.
    pub fn progress(&self, now: Duration) -> f64 {
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Interpolated value at `now`. Exactly `end` once progress reaches 1.
    pub fn value_at(&self, now: Duration) -> f64 {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.end;
        }
        self.start + (self.end - self.start) * self.easing.apply(progress)
    }

    /// Deliver the value for `now` to `on_frame`, unless already finished.
    pub fn frame(&mut self, now: Duration, on_frame: impl FnOnce(f64)) -> FrameStatus {
        if self.finished {
            return FrameStatus::Finished;
        }
        on_frame(self.value_at(now));
        if self.progress(now) >= 1.0 {
            self.finished = true;
            FrameStatus::Finished
        } else {
            FrameStatus::Running
        }
    }
}
