use chrono::{DateTime, Utc};

/// Port for reading the current instant.
///
/// Services compute every timestamp and window cutoff from this port so that
/// window boundaries can be exercised without waiting on wall-clock time.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
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
