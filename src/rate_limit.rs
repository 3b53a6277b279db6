//! Call-rate primitives for noisy event streams.
//!
//! Both types are driven by caller-supplied instants instead of reading the
//! clock themselves, so reducers stay deterministic and tests never sleep.

use std::time::{Duration, Instant};

/// Leading-edge rate limiter.
///
/// The first call in a window runs immediately and its result is kept; calls
/// arriving while the window is open are dropped entirely (not queued, no
/// trailing-edge execution) and observe the last computed result. Losing the
/// trailing update inside a window is part of the contract.
#[derive(Debug)]
pub struct Throttle<R> {
    interval: Duration,
    open_until: Option<Instant>,
    last: Option<R>,
}

impl<R: Clone> Throttle<R> {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            open_until: None,
            last: None,
        }
    }

    /// Run `work` unless a window is open, in which case the previous result
    /// is returned unchanged.
    pub fn call<F>(&mut self, now: Instant, work: F) -> R
    where
        F: FnOnce() -> R,
    {
        if let (Some(open_until), Some(last)) = (self.open_until, self.last.as_ref()) {
            if now < open_until {
                return last.clone();
            }
        }
        self.open_until = Some(now + self.interval);
        let result = work();
        self.last = Some(result.clone());
        result
    }
}

/// Trailing-edge rate limiter: only the last trigger in a burst fires, `wait`
/// after that trigger. Polled rather than timer-backed, so whoever owns it
/// decides when (and whether) the deadline is observed.
#[derive(Debug)]
pub struct Debounce {
    wait: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the deadline `wait` from `now`. A trigger while a
    /// deadline is pending discards the earlier one.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.wait);
    }

    /// True exactly once per armed deadline: on the first poll at or past it.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn throttle_runs_first_call_and_drops_the_rest_of_the_window() {
        let mut throttle = Throttle::new(ms(100));
        let start = Instant::now();
        let mut runs = 0;

        for i in 0..5 {
            throttle.call(start + ms(i * 10), || {
                runs += 1;
            });
        }
        assert_eq!(runs, 1, "five calls inside 50ms must execute once");

        throttle.call(start + ms(101), || {
            runs += 1;
        });
        assert_eq!(runs, 2, "a call after the window closes executes again");
    }

    #[test]
    fn throttle_returns_last_result_for_dropped_calls() {
        let mut throttle = Throttle::new(ms(100));
        let start = Instant::now();

        let first = throttle.call(start, || 7);
        assert_eq!(first, 7);

        let dropped = throttle.call(start + ms(30), || 99);
        assert_eq!(dropped, 7, "dropped calls observe the previous result");

        let next = throttle.call(start + ms(150), || 99);
        assert_eq!(next, 99);
    }

    #[test]
    fn throttle_window_rearms_from_the_executing_call() {
        let mut throttle = Throttle::new(ms(100));
        let start = Instant::now();
        let mut runs = 0;

        throttle.call(start, || runs += 1);
        throttle.call(start + ms(100), || runs += 1);
        assert_eq!(runs, 2, "the window boundary itself is open");
        throttle.call(start + ms(199), || runs += 1);
        assert_eq!(runs, 2, "the second window starts at the second call");
    }

    #[test]
    fn debounce_fires_once_after_the_burst_settles() {
        let mut debounce = Debounce::new(ms(200));
        let start = Instant::now();
        let mut fired = 0;

        // Trigger every 50ms for a second; every poll in between stays quiet.
        for i in 0..=20 {
            debounce.trigger(start + ms(i * 50));
            if debounce.fire_if_due(start + ms(i * 50 + 49)) {
                fired += 1;
            }
        }
        assert_eq!(fired, 0, "no firing while triggers keep arriving");

        assert!(!debounce.fire_if_due(start + ms(1000 + 199)));
        assert!(debounce.fire_if_due(start + ms(1000 + 200)));
        fired += 1;
        assert_eq!(fired, 1);
        assert!(
            !debounce.fire_if_due(start + ms(1000 + 500)),
            "a fired deadline does not fire twice"
        );
    }

    #[test]
    fn debounce_cancel_discards_the_pending_deadline() {
        let mut debounce = Debounce::new(ms(200));
        let start = Instant::now();

        debounce.trigger(start);
        assert!(debounce.is_pending());
        debounce.cancel();
        assert!(!debounce.is_pending());
        assert!(!debounce.fire_if_due(start + ms(500)));
    }
}
