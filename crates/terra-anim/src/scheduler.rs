//! One-shot and repeating timers over caller-supplied time.

use std::time::Duration;

use crate::animator::AnimError;

/// Handle for cancelling a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Timer<E> {
    id: TimerId,
    deadline: Duration,
    period: Option<Duration>,
    event: E,
}

/// Timer queue that yields events of type `E` once their deadline passes.
///
/// Nothing fires on its own: the owner calls [`Scheduler::due`] with the
/// current time, typically once per frame. Timers that come due in the same
/// call fire in deadline order, ties broken by scheduling order. A repeating
/// timer that fell several periods behind fires once and skips the missed
/// periods.
#[derive(Debug)]
pub struct Scheduler<E> {
    timers: Vec<Timer<E>>,
    next_id: u64,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self {
            timers: Vec::new(),
            next_id: 0,
        }
    }
}

impl<E: Clone> Scheduler<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `event` once, `delay` after `now`.
    pub fn after(&mut self, now: Duration, delay: Duration, event: E) -> TimerId {
        self.push(now + delay, None, event)
    }

    /// Fire `event` every `period`, first at `now + period`.
    pub fn every(&mut self, now: Duration, period: Duration, event: E) -> Result<TimerId, AnimError> {
        if period.is_zero() {
            return Err(AnimError::ZeroDuration);
        }
        Ok(self.push(now + period, Some(period), event))
    }

    /// Remove a pending timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|timer| timer.id != id);
        self.timers.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.iter().map(|timer| timer.deadline).min()
    }

    /// Collect every event whose deadline is at or before `now`.
    pub fn due(&mut self, now: Duration) -> Vec<E> {
        let mut fired: Vec<(Duration, TimerId, E)> = Vec::new();

        self.timers.retain_mut(|timer| {
            if timer.deadline > now {
                return true;
            }
            fired.push((timer.deadline, timer.id, timer.event.clone()));
            match timer.period {
                Some(period) => {
                    while timer.deadline <= now {
                        timer.deadline += period;
                    }
                    true
                }
                None => false,
            }
        });

        fired.sort_by_key(|(deadline, id, _)| (*deadline, *id));
        fired.into_iter().map(|(_, _, event)| event).collect()
    }

    fn push(&mut self, deadline: Duration, period: Option<Duration>, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            deadline,
            period,
            event,
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Tick {
        Fact,
        Speeds,
        Reveal,
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_one_shot_fires_once() {
        let mut scheduler = Scheduler::new();
        scheduler.after(ms(0), ms(500), Tick::Reveal);
        assert!(scheduler.due(ms(499)).is_empty());
        assert_eq!(scheduler.due(ms(500)), vec![Tick::Reveal]);
        assert!(scheduler.due(ms(10_000)).is_empty());
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_interval_repeats() {
        let mut scheduler = Scheduler::new();
        scheduler.every(ms(0), ms(4000), Tick::Fact).unwrap();

        let fired: usize = (1..=40)
            .map(|s| scheduler.due(ms(s * 1000)).len())
            .sum();
        assert_eq!(fired, 10);
        assert_eq!(scheduler.next_deadline(), Some(ms(44_000)));
    }

    #[test]
    fn test_missed_periods_are_coalesced() {
        let mut scheduler = Scheduler::new();
        scheduler.every(ms(0), ms(1000), Tick::Speeds).unwrap();
        assert_eq!(scheduler.due(ms(5500)), vec![Tick::Speeds]);
        assert_eq!(scheduler.next_deadline(), Some(ms(6000)));
    }

    #[test]
    fn test_due_events_in_deadline_order() {
        let mut scheduler = Scheduler::new();
        scheduler.every(ms(0), ms(4000), Tick::Fact).unwrap();
        scheduler.every(ms(0), ms(3000), Tick::Speeds).unwrap();
        scheduler.after(ms(0), ms(3500), Tick::Reveal);
        assert_eq!(
            scheduler.due(ms(4000)),
            vec![Tick::Speeds, Tick::Reveal, Tick::Fact]
        );
    }

    #[test]
    fn test_ties_fire_in_scheduling_order() {
        let mut scheduler = Scheduler::new();
        scheduler.after(ms(0), ms(100), Tick::Reveal);
        scheduler.after(ms(0), ms(100), Tick::Fact);
        assert_eq!(scheduler.due(ms(100)), vec![Tick::Reveal, Tick::Fact]);
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.after(ms(0), ms(800), Tick::Reveal);
        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert!(scheduler.due(ms(1000)).is_empty());
    }

    #[test]
    fn test_zero_period_rejected() {
        let mut scheduler: Scheduler<Tick> = Scheduler::new();
        assert_eq!(
            scheduler.every(ms(0), Duration::ZERO, Tick::Fact),
            Err(AnimError::ZeroDuration)
        );
    }
}
