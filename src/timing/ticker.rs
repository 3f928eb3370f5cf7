//! The single game timer.
//!
//! A `Ticker` owns at most one `tokio` interval. Changing the period replaces
//! it, syncing to `None` drops it, so a game can never have two timers in flight.

use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

pub struct Ticker {
    timer: Option<(Duration, Interval)>,
}

impl Ticker {
    /// A stopped ticker
    pub fn new() -> Self {
        Self { timer: None }
    }

    pub fn period(&self) -> Option<Duration> {
        self.timer.as_ref().map(|(period, _)| *period)
    }

    /// Make the timer match `period`: `None` stops it, a different period
    /// reschedules it one full period from now. Returns true if anything changed.
    pub fn sync(&mut self, period: Option<Duration>) -> bool {
        if self.period() == period {
            return false;
        }

        self.timer = period.map(|period| {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            (period, interval)
        });
        true
    }

    /// Wait for the next tick. Never completes while stopped.
    pub async fn tick(&mut self) {
        match self.timer.as_mut() {
            Some((_, interval)) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}
