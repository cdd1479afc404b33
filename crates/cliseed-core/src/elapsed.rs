//! Human-readable elapsed-time strings.
//!
//! An elapsed time is split into whole days, hours, minutes and seconds.
//! Days and hours are only shown once they, or a larger unit, are non-zero;
//! minutes and seconds are always shown.

use std::fmt;
use std::time::Duration;

use crate::constants::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// Elapsed time decomposed into display units. Sub-second parts are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElapsedTime {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl ElapsedTime {
    /// Decompose a whole number of seconds.
    #[must_use]
    pub const fn from_secs(total: u64) -> Self {
        let rest = total % SECONDS_PER_DAY;
        Self {
            days: total / SECONDS_PER_DAY,
            hours: rest / SECONDS_PER_HOUR,
            minutes: (rest % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: rest % SECONDS_PER_MINUTE,
        }
    }
}

impl From<Duration> for ElapsedTime {
    fn from(d: Duration) -> Self {
        Self::from_secs(d.as_secs())
    }
}

impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days > 0 {
            write!(f, "{}, ", Unit(self.days, "day"))?;
        }
        if self.days > 0 || self.hours > 0 {
            write!(f, "{}, ", Unit(self.hours, "hour"))?;
        }
        write!(
            f,
            "{}, {}",
            Unit(self.minutes, "minute"),
            Unit(self.seconds, "second")
        )
    }
}

/// A count and its unit label, singular only for exactly one.
struct Unit(u64, &'static str);

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Unit(value, label) = *self;
        if value == 1 {
            write!(f, "{value} {label}")
        } else {
            write!(f, "{value} {label}s")
        }
    }
}

/// Format an elapsed duration, e.g. `"1 hour, 0 minutes, 0 seconds"`.
#[must_use]
pub fn format_elapsed(d: Duration) -> String {
    ElapsedTime::from(d).to_string()
}
