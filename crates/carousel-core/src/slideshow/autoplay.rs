//! Reactive autoplay timer
//!
//! The controller derives the desired [`Schedule`] from its state after every
//! change and hands it to [`AutoplayTimer::reconcile`]. An unchanged schedule
//! keeps the running deadline; any difference cancels the timer and arms a
//! fresh one. The timer is never adjusted in place.

use std::time::{Duration, Instant};

use tracing::debug;

/// State the autoplay deadline depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub interval: Duration,
    pub slide_count: usize,
    /// Committed index at the time the timer was armed
    pub anchor_index: usize,
}

#[derive(Debug, Clone, Copy)]
struct ArmedTimer {
    schedule: Schedule,
    deadline: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct AutoplayTimer {
    armed: Option<ArmedTimer>,
}

impl AutoplayTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the timer in line with the desired schedule
    ///
    /// Returns `true` if the timer was cancelled or re-armed.
    pub fn reconcile(&mut self, desired: Option<Schedule>, now: Instant) -> bool {
        let desired = desired.filter(|s| !s.interval.is_zero());
        let current = self.armed.map(|a| a.schedule);
        if current == desired {
            return false;
        }

        self.armed = desired.map(|schedule| ArmedTimer {
            schedule,
            deadline: now + schedule.interval,
        });

        match self.armed {
            Some(armed) => debug!(
                "Autoplay armed: every {:?} from slide {}",
                armed.schedule.interval, armed.schedule.anchor_index
            ),
            None => debug!("Autoplay cancelled"),
        }
        true
    }

    pub fn cancel(&mut self) {
        if self.armed.take().is_some() {
            debug!("Autoplay cancelled");
        }
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.armed.map(|a| a.deadline)
    }

    /// Check the deadline; on expiry schedule the next period and return `true`
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        let Some(armed) = self.armed.as_mut() else {
            return false;
        };
        if now < armed.deadline {
            return false;
        }

        armed.deadline += armed.schedule.interval;
        // Missed periods (host stalled) collapse into one fire
        if armed.deadline <= now {
            armed.deadline = now + armed.schedule.interval;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(ms: u64) -> Schedule {
        Schedule {
            interval: Duration::from_millis(ms),
            slide_count: 3,
            anchor_index: 0,
        }
    }

    #[test]
    fn test_reconcile_arms_and_keeps_deadline() {
        let start = Instant::now();
        let mut timer = AutoplayTimer::new();

        assert!(timer.reconcile(Some(schedule(1000)), start));
        assert_eq!(timer.deadline(), Some(start + Duration::from_millis(1000)));

        // Same schedule later: deadline untouched
        let later = start + Duration::from_millis(400);
        assert!(!timer.reconcile(Some(schedule(1000)), later));
        assert_eq!(timer.deadline(), Some(start + Duration::from_millis(1000)));
    }

    #[test]
    fn test_changed_schedule_recreates_timer() {
        let start = Instant::now();
        let mut timer = AutoplayTimer::new();
        timer.reconcile(Some(schedule(1000)), start);

        let later = start + Duration::from_millis(400);
        assert!(timer.reconcile(Some(schedule(500)), later));
        assert_eq!(timer.deadline(), Some(later + Duration::from_millis(500)));
    }

    #[test]
    fn test_zero_interval_disarms() {
        let mut timer = AutoplayTimer::new();
        timer.reconcile(Some(schedule(0)), Instant::now());
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_fire_is_recurring() {
        let start = Instant::now();
        let mut timer = AutoplayTimer::new();
        timer.reconcile(Some(schedule(100)), start);

        assert!(!timer.fire_if_due(start + Duration::from_millis(99)));
        assert!(timer.fire_if_due(start + Duration::from_millis(100)));
        assert_eq!(timer.deadline(), Some(start + Duration::from_millis(200)));
    }

    #[test]
    fn test_missed_periods_fire_once() {
        let start = Instant::now();
        let mut timer = AutoplayTimer::new();
        timer.reconcile(Some(schedule(100)), start);

        let stalled = start + Duration::from_millis(1050);
        assert!(timer.fire_if_due(stalled));
        assert!(!timer.fire_if_due(stalled));
        assert_eq!(timer.deadline(), Some(stalled + Duration::from_millis(100)));
    }

    #[test]
    fn test_cancel() {
        let mut timer = AutoplayTimer::new();
        timer.reconcile(Some(schedule(100)), Instant::now());
        timer.cancel();
        assert!(!timer.is_armed());
        assert!(!timer.fire_if_due(Instant::now() + Duration::from_secs(1)));
    }
}
