//! Clock capability so expiry logic never reads global time directly.

use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};

/// Source of the current time for the recovery workflow.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the operating system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to.
///
/// Lets tests issue a token "now" and then jump hours ahead without
/// sleeping or patching global state.
#[derive(Debug)]
pub struct ManualClock {
    now: RwLock<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    /// Starts the clock at the current system time.
    pub fn start_now() -> Self {
        Self::new(Utc::now())
    }

    /// Moves the clock forward by `amount` (negative moves it back).
    pub fn advance(&self, amount: Duration) {
        let mut now = self.now.write().expect("clock lock poisoned");
        *now = *now + amount;
    }

    /// Pins the clock to an absolute instant.
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.now.write().expect("clock lock poisoned") = instant;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read().expect("clock lock poisoned")
    }
}
