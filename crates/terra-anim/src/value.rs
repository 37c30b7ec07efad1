//! A value owned by one display target, animated with cancel-and-replace.

use std::time::Duration;

use terra_core::Easing;

use crate::animator::{AnimError, FrameStatus, ValueAnimator};

/// Identifies one animation started on an [`AnimatedValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationId(u64);

/// The exact numeric value behind a display target, plus at most one
/// in-flight animation.
///
/// Starting a new animation cancels the one in flight and starts from the
/// value it had reached, so back-to-back requests never race.
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    current: f64,
    active: Option<(AnimationId, ValueAnimator)>,
    next_id: u64,
}

impl AnimatedValue {
    pub fn new(initial: f64) -> Self {
        Self {
            current: initial,
            active: None,
            next_id: 0,
        }
    }

    /// Last value delivered to this target.
    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Where the in-flight animation is heading, if any.
    pub fn target(&self) -> Option<f64> {
        self.active.as_ref().map(|(_, animator)| animator.end())
    }

    /// Replace any in-flight animation with one from the current value to `end`.
    pub fn animate_to(
        &mut self,
        end: f64,
        duration: Duration,
        easing: Easing,
        now: Duration,
    ) -> Result<AnimationId, AnimError> {
        let animator = ValueAnimator::new(self.current, end, duration, easing, now)?;
        let id = AnimationId(self.next_id);
        self.next_id += 1;
        self.active = Some((id, animator));
        Ok(id)
    }

    /// Cancel `id` if it is still the animation in flight. The value stays
    /// where the last frame left it.
    pub fn cancel(&mut self, id: AnimationId) -> bool {
        match self.active {
            Some((active, _)) if active == id => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    /// Cancel whatever is in flight and jump straight to `value`.
    pub fn set(&mut self, value: f64) {
        self.active = None;
        self.current = value;
    }

    /// Advance the in-flight animation to `now`. Returns the delivered value,
    /// or `None` when nothing is animating.
    pub fn tick(&mut self, now: Duration) -> Option<f64> {
        let (_, animator) = self.active.as_mut()?;
        let mut delivered = None;
        let status = animator.frame(now, |value| delivered = Some(value));
        if status == FrameStatus::Finished {
            self.active = None;
        }
        if let Some(value) = delivered {
            self.current = value;
        }
        delivered
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_runs_to_exact_end() {
        let mut value = AnimatedValue::new(0.0);
        value
            .animate_to(1670.0, ms(2000), Easing::OutQuart, ms(0))
            .unwrap();

        let mut now = ms(0);
        let mut last = None;
        while value.is_animating() {
            now += ms(16);
            last = value.tick(now);
        }
        assert_eq!(last, Some(1670.0));
        assert_eq!(value.current(), 1670.0);
        assert_eq!(value.tick(now + ms(16)), None);
    }

    #[test]
    fn test_back_to_back_requests_cancel_and_replace() {
        let mut value = AnimatedValue::new(0.0);
        value
            .animate_to(1000.0, ms(1000), Easing::Linear, ms(0))
            .unwrap();
        value.tick(ms(500));
        assert_eq!(value.current(), 500.0);

        // Second request before the first completes starts from 500.
        value
            .animate_to(200.0, ms(1000), Easing::Linear, ms(500))
            .unwrap();
        assert_eq!(value.target(), Some(200.0));
        assert_eq!(value.tick(ms(1000)), Some(350.0));

        // Past the first animation's end the old target never shows up again.
        let later = value.tick(ms(1200)).unwrap();
        assert!((later - 290.0).abs() < 1e-9);
        assert_eq!(value.tick(ms(1500)), Some(200.0));
        assert!(!value.is_animating());
    }

    #[test]
    fn test_same_requests_give_same_frames() {
        let run = || {
            let mut value = AnimatedValue::new(8.0);
            value
                .animate_to(7.96, ms(1000), Easing::OutCubic, ms(0))
                .unwrap();
            value
                .animate_to(8.03, ms(1000), Easing::OutCubic, ms(10))
                .unwrap();
            (1..=70).map(|i| value.tick(ms(i * 16))).collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_stale_cancel_is_ignored() {
        let mut value = AnimatedValue::new(0.0);
        let first = value
            .animate_to(10.0, ms(100), Easing::Linear, ms(0))
            .unwrap();
        let second = value
            .animate_to(20.0, ms(100), Easing::Linear, ms(0))
            .unwrap();
        assert_ne!(first, second);
        assert!(!value.cancel(first));
        assert!(value.is_animating());
        assert!(value.cancel(second));
        assert!(!value.is_animating());
    }

    #[test]
    fn test_set_cancels_in_flight() {
        let mut value = AnimatedValue::new(0.0);
        value
            .animate_to(10.0, ms(100), Easing::Linear, ms(0))
            .unwrap();
        value.set(3.0);
        assert_eq!(value.tick(ms(50)), None);
        assert_eq!(value.current(), 3.0);
    }

    #[test]
    fn test_zero_duration_keeps_previous_animation() {
        let mut value = AnimatedValue::new(0.0);
        value
            .animate_to(10.0, ms(100), Easing::Linear, ms(0))
            .unwrap();
        assert!(
            value
                .animate_to(5.0, Duration::ZERO, Easing::Linear, ms(0))
                .is_err()
        );
        assert_eq!(value.target(), Some(10.0));
    }
}
