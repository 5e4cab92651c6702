//! Wall-clock source for execution timestamps.
//!
//! The trigger reads the clock exactly once per invocation; tests swap in
//! [`FixedClock`] to pin the value.

/// Seconds since the Unix epoch, UTC.
pub type EpochSeconds = i64;

pub trait Clock: Send + Sync {
    fn now_epoch_secs(&self) -> EpochSeconds;
}

/// Reads the system clock via `chrono`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_secs(&self) -> EpochSeconds {
        chrono::Utc::now().timestamp()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub EpochSeconds);

impl Clock for FixedClock {
    fn now_epoch_secs(&self) -> EpochSeconds {
        self.0
    }
}
