//! Fire-and-forget notification banners.

use std::time::Duration;

use terra_core::Easing;

pub const EARTH_MESSAGE: &str = "🌍 Earth clicked! You're now in space!";
pub const SUN_MESSAGE: &str = "☀ Sun clicked! It's 15 million degrees Celsius!";
pub const ANNOUNCE_MESSAGE: &str = "🚀 Terra - Explore the universe!";

/// Delay before a banner starts sliding in.
const ENTER_DELAY: Duration = Duration::from_millis(100);
/// Length of the slide in and slide out.
const SLIDE: Duration = Duration::from_millis(300);

/// Where a banner is in its life.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Pending,
    /// Sliding in; progress in `[0, 1]`.
    Entering(f64),
    Shown,
    /// Sliding out; progress in `[0, 1]`.
    Leaving(f64),
    Expired,
}

impl Phase {
    /// How far the banner sits inside the screen, `0` hidden to `1` fully in.
    pub fn offset(self) -> f64 {
        match self {
            Phase::Pending | Phase::Expired => 0.0,
            Phase::Entering(p) => Easing::OutCubic.apply(p),
            Phase::Shown => 1.0,
            Phase::Leaving(p) => 1.0 - Easing::OutCubic.apply(p),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Banner {
    pub message: String,
    pub shown_at: Duration,
}

impl Banner {
    /// Phase at `now`. The banner starts leaving at `hold` after it was shown.
    pub fn phase(&self, now: Duration, hold: Duration) -> Phase {
        let age = now.saturating_sub(self.shown_at);
        let entered = ENTER_DELAY + SLIDE;
        if age < ENTER_DELAY {
            Phase::Pending
        } else if age < entered {
            Phase::Entering(ratio(age - ENTER_DELAY, SLIDE))
        } else if age < hold.max(entered) {
            Phase::Shown
        } else if age < hold.max(entered) + SLIDE {
            Phase::Leaving(ratio(age - hold.max(entered), SLIDE))
        } else {
            Phase::Expired
        }
    }
}

fn ratio(part: Duration, whole: Duration) -> f64 {
    part.as_nanos() as f64 / whole.as_nanos() as f64
}

/// Banners on screen, oldest first.
#[derive(Debug, Default)]
pub struct Banners {
    items: Vec<Banner>,
}

impl Banners {
    pub fn push(&mut self, message: impl Into<String>, now: Duration) {
        let message = message.into();
        log::info!(target: "banner", "{message} ({} queued)", self.len() + 1);
        self.items.push(Banner {
            message,
            shown_at: now,
        });
    }

    /// Drop expired banners.
    pub fn prune(&mut self, now: Duration, hold: Duration) {
        self.items
            .retain(|banner| banner.phase(now, hold) != Phase::Expired);
    }

    /// Banners with something to draw, paired with their phase.
    pub fn visible(&self, now: Duration, hold: Duration) -> impl Iterator<Item = (&Banner, Phase)> {
        self.items
            .iter()
            .map(move |banner| (banner, banner.phase(now, hold)))
            .filter(|(_, phase)| !matches!(phase, Phase::Pending | Phase::Expired))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOLD: Duration = Duration::from_millis(3000);

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn banner() -> Banner {
        Banner {
            message: EARTH_MESSAGE.to_string(),
            shown_at: ms(1000),
        }
    }

    #[test]
    fn test_lifecycle() {
        let banner = banner();
        assert_eq!(banner.phase(ms(1050), HOLD), Phase::Pending);
        assert_eq!(banner.phase(ms(1250), HOLD), Phase::Entering(0.5));
        assert_eq!(banner.phase(ms(1400), HOLD), Phase::Shown);
        assert_eq!(banner.phase(ms(3999), HOLD), Phase::Shown);
        assert_eq!(banner.phase(ms(4000), HOLD), Phase::Leaving(0.0));
        assert_eq!(banner.phase(ms(4300), HOLD), Phase::Expired);
    }

    #[test]
    fn test_offset() {
        assert_eq!(Phase::Pending.offset(), 0.0);
        assert_eq!(Phase::Entering(1.0).offset(), 1.0);
        assert_eq!(Phase::Shown.offset(), 1.0);
        assert_eq!(Phase::Leaving(1.0).offset(), 0.0);
        assert!(Phase::Entering(0.5).offset() > 0.5);
    }

    #[test]
    fn test_prune_and_visible() {
        let mut banners = Banners::default();
        banners.push(EARTH_MESSAGE, ms(0));
        banners.push(SUN_MESSAGE, ms(2000));
        assert_eq!(banners.visible(ms(50), HOLD).count(), 0);
        assert_eq!(banners.visible(ms(2500), HOLD).count(), 2);

        banners.prune(ms(3300), HOLD);
        assert_eq!(banners.len(), 1);
        let (remaining, _) = banners.visible(ms(3300), HOLD).next().unwrap();
        assert_eq!(remaining.message, SUN_MESSAGE);

        banners.prune(ms(5300), HOLD);
        assert!(banners.is_empty());
    }
}
