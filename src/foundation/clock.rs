use crate::foundation::core::TimeMs;

/// At-most-once-per-interval gate.
///
/// The first call always passes; after that a call passes only once at least
/// `interval_ms` has elapsed since the last passing call. Used to bound the
/// cost of reveal estimation: the throttle reduces how often the check runs,
/// it never reorders or skips the underlying erasure.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    interval_ms: u64,
    last: Option<TimeMs>,
}

impl Throttle {
    /// Gate with the given minimum interval between passing calls.
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last: None,
        }
    }

    /// Returns true (and arms the gate) when enough time has elapsed.
    pub fn ready(&mut self, now: TimeMs) -> bool {
        match self.last {
            Some(last) if now.since(last) < self.interval_ms => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

/// Fixed-interval repeating tick, optionally time-boxed.
///
/// A poll-driven replacement for `setInterval`: the ticker is plain owned
/// state, so dropping the owner is cancellation and a superseding restart is
/// a fresh value. Tick `k` (1-based) becomes due at `started + k*interval`;
/// with a duration set, ticks at or past the deadline never fire.
#[derive(Clone, Copy, Debug)]
pub struct Ticker {
    started: TimeMs,
    interval_ms: u64,
    duration_ms: Option<u64>,
    fired: u64,
}

impl Ticker {
    /// Unbounded ticker starting at `started`.
    pub fn new(started: TimeMs, interval_ms: u64) -> Self {
        Self {
            started,
            interval_ms: interval_ms.max(1),
            duration_ms: None,
            fired: 0,
        }
    }

    /// Time-boxed ticker: no tick fires at or after `started + duration_ms`.
    pub fn time_boxed(started: TimeMs, interval_ms: u64, duration_ms: u64) -> Self {
        Self {
            duration_ms: Some(duration_ms),
            ..Self::new(started, interval_ms)
        }
    }

    fn due_total(&self, now: TimeMs) -> u64 {
        let mut n = now.since(self.started) / self.interval_ms;
        if let Some(d) = self.duration_ms {
            let max = if d == 0 { 0 } else { (d - 1) / self.interval_ms };
            n = n.min(max);
        }
        n
    }

    /// Number of ticks newly due since the previous poll.
    pub fn poll(&mut self, now: TimeMs) -> u64 {
        let total = self.due_total(now);
        let fresh = total.saturating_sub(self.fired);
        self.fired = total;
        fresh
    }

    /// Total ticks delivered so far.
    pub fn fired(self) -> u64 {
        self.fired
    }

    /// Milliseconds between the start and tick `k` (1-based).
    pub fn elapsed_at(self, k: u64) -> u64 {
        k.saturating_mul(self.interval_ms)
    }

    /// True once the time box has fully elapsed. Always false when unbounded.
    pub fn is_done(self, now: TimeMs) -> bool {
        match self.duration_ms {
            Some(d) => now.since(self.started) >= d,
            None => false,
        }
    }
}
