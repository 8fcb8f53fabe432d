use std::time::{Duration, Instant};

/// Lets through at most one sample per `period`.
#[derive(Debug, Clone)]
pub struct Throttle {
    last_accept: Option<Instant>,
    period: Duration,
}

impl Throttle {
    pub fn new(period: Duration) -> Self {
        Self {
            last_accept: None,
            period,
        }
    }

    /// Returns `true` and records `now` if at least one period has passed since the
    /// last accepted sample.
    pub fn accept(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_accept {
            // samples from before the last accepted one count as zero elapsed time
            let elapsed = now.saturating_duration_since(last);

            if elapsed < self.period {
                return false;
            }
        }

        self.last_accept = Some(now);
        true
    }
}
