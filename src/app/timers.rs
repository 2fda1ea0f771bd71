//! Virtual-time timers owned by the game controller
//!
//! The controller never reads the wall clock. Callers advance the scheduler
//! by elapsed time and it hands back due timers one firing at a time, so a
//! handler that cancels timers stops them before they can fire again.

use std::time::Duration;

/// What a timer drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// 1 Hz round clock
    GameClock,
    /// 1 Hz pre-round countdown
    Countdown,
    /// Fast board reshuffle shown during the countdown
    ShufflePreview,
    /// One-shot clearing of a transient notice
    NoticeClear,
}

/// Handle to a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Timer {
    id: TimerId,
    kind: TimerKind,
    due: Duration,
    period: Option<Duration>,
}

/// Set of pending timers on a virtual clock.
#[derive(Debug, Default)]
pub struct Scheduler {
    now: Duration,
    next_id: u64,
    timers: Vec<Timer>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Fire `kind` every `period`, first firing one period from now
    pub fn every(&mut self, kind: TimerKind, period: Duration) -> TimerId {
        self.insert(kind, period, Some(period))
    }

    /// Fire `kind` once after `delay`
    pub fn after(&mut self, kind: TimerKind, delay: Duration) -> TimerId {
        self.insert(kind, delay, None)
    }

    fn insert(&mut self, kind: TimerKind, delay: Duration, period: Option<Duration>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            kind,
            due: self.now + delay,
            period: period.map(|p| p.max(Duration::from_millis(1))),
        });
        id
    }

    /// Cancel one timer. Unknown ids are ignored.
    pub fn cancel(&mut self, id: TimerId) {
        self.timers.retain(|t| t.id != id);
    }

    /// Cancel every timer of a kind
    pub fn cancel_kind(&mut self, kind: TimerKind) {
        self.timers.retain(|t| t.kind != kind);
    }

    /// Cancel everything
    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    /// Whether any timer of this kind is pending
    pub fn is_active(&self, kind: TimerKind) -> bool {
        self.timers.iter().any(|t| t.kind == kind)
    }

    /// Pop the earliest timer due at or before `until`, moving the clock to
    /// its due time. Repeating timers are rescheduled; one-shots removed.
    /// Ties fire in scheduling order.
    pub fn next_due(&mut self, until: Duration) -> Option<TimerKind> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.id.0))
            .map(|(i, _)| i)?;

        let timer = &mut self.timers[index];
        let kind = timer.kind;
        self.now = self.now.max(timer.due);
        match timer.period {
            Some(period) => timer.due += period,
            None => {
                self.timers.swap_remove(index);
            }
        }
        Some(kind)
    }

    /// Move the clock forward to `until` once all due timers are handled
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(s: &mut Scheduler, elapsed: Duration) -> Vec<TimerKind> {
        let until = s.now() + elapsed;
        let mut fired = Vec::new();
        while let Some(kind) = s.next_due(until) {
            fired.push(kind);
        }
        s.settle(until);
        fired
    }

    #[test]
    fn test_repeating_timer_fires_each_period() {
        let mut s = Scheduler::new();
        s.every(TimerKind::GameClock, Duration::from_secs(1));

        assert!(drain(&mut s, Duration::from_millis(999)).is_empty());
        assert_eq!(drain(&mut s, Duration::from_millis(1)), vec![TimerKind::GameClock]);
        assert_eq!(drain(&mut s, Duration::from_secs(3)).len(), 3);
        assert_eq!(s.now(), Duration::from_secs(4));
    }

    #[test]
    fn test_one_shot_fires_once() {
        let mut s = Scheduler::new();
        s.after(TimerKind::NoticeClear, Duration::from_secs(2));

        assert_eq!(drain(&mut s, Duration::from_secs(5)), vec![TimerKind::NoticeClear]);
        assert!(drain(&mut s, Duration::from_secs(5)).is_empty());
        assert!(!s.is_active(TimerKind::NoticeClear));
    }

    #[test]
    fn test_firings_are_time_ordered() {
        let mut s = Scheduler::new();
        s.every(TimerKind::Countdown, Duration::from_secs(1));
        s.every(TimerKind::ShufflePreview, Duration::from_millis(400));

        let fired = drain(&mut s, Duration::from_secs(1));
        assert_eq!(
            fired,
            vec![
                TimerKind::ShufflePreview,
                TimerKind::ShufflePreview,
                TimerKind::Countdown,
            ]
        );
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let mut s = Scheduler::new();
        let id = s.every(TimerKind::GameClock, Duration::from_secs(1));
        s.cancel(id);
        assert!(drain(&mut s, Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn test_cancel_during_drain_stops_later_firings() {
        let mut s = Scheduler::new();
        s.every(TimerKind::Countdown, Duration::from_secs(1));
        s.every(TimerKind::ShufflePreview, Duration::from_millis(100));

        let until = s.now() + Duration::from_secs(2);
        let mut shuffles_after_cancel = 0;
        let mut cancelled = false;
        while let Some(kind) = s.next_due(until) {
            match kind {
                TimerKind::Countdown => {
                    s.cancel_kind(TimerKind::ShufflePreview);
                    cancelled = true;
                }
                TimerKind::ShufflePreview if cancelled => shuffles_after_cancel += 1,
                _ => {}
            }
        }
        assert!(cancelled);
        assert_eq!(shuffles_after_cancel, 0);
    }

    #[test]
    fn test_cancel_all() {
        let mut s = Scheduler::new();
        s.every(TimerKind::GameClock, Duration::from_secs(1));
        s.every(TimerKind::Countdown, Duration::from_secs(1));
        s.after(TimerKind::NoticeClear, Duration::from_secs(2));
        s.cancel_all();
        assert!(drain(&mut s, Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn test_new_timer_counts_from_current_time() {
        let mut s = Scheduler::new();
        drain(&mut s, Duration::from_millis(1500));
        s.every(TimerKind::GameClock, Duration::from_secs(1));
        assert!(drain(&mut s, Duration::from_millis(900)).is_empty());
        assert_eq!(drain(&mut s, Duration::from_millis(100)), vec![TimerKind::GameClock]);
    }
}
