// Scan clock
//
// The scan start time is read once and shared by the report header and every
// relative-age string, so a single run is internally consistent.

use chrono::{DateTime, Local};

/// Source of the scan start time.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Wall-clock time from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
