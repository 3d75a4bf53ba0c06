use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{TimeError, TimeResult};

/// Seconds in one minute
pub const SECONDS_PER_MINUTE: u32 = 60;

/// Seconds in one hour
pub const SECONDS_PER_HOUR: u32 = 3_600;

/// Seconds in one 24-hour day
pub const SECONDS_PER_DAY: u32 = 86_400;

/// A wall-clock time of day with second precision.
///
/// Stores a single canonical second count in `[0, 86400)`; the hour,
/// minute, and second components are computed on access. Instances are
/// immutable `Copy` values - arithmetic produces a new value and wraps
/// around midnight (clock-face semantics, not bounded durations).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TimeOfDay {
    total_seconds: u32,
}

impl TimeOfDay {
    /// Midnight (00:00:00)
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { total_seconds: 0 };

    /// Create a time from hour, minute, and second components.
    ///
    /// Bounds: `hours` in 0-23, `minutes` and `seconds` in 0-59.
    /// Components are validated in that order and the first violation
    /// is reported.
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> TimeResult<Self> {
        check_range(hours, 23, "hours")?;
        check_range(minutes, 59, "minutes")?;
        check_range(seconds, 59, "seconds")?;
        Ok(Self {
            total_seconds: hours * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE + seconds,
        })
    }

    /// Create a time from a raw second count since midnight (0-86399)
    pub fn from_seconds(total_seconds: u32) -> TimeResult<Self> {
        if total_seconds >= SECONDS_PER_DAY {
            return Err(TimeError::OutOfRange {
                field: "total seconds",
                min: 0,
                max: SECONDS_PER_DAY - 1,
                value: total_seconds,
            });
        }
        Ok(Self { total_seconds })
    }

    /// Hour component (0-23)
    pub fn hours(&self) -> u32 {
        self.total_seconds / SECONDS_PER_HOUR
    }

    /// Minute component (0-59)
    pub fn minutes(&self) -> u32 {
        (self.total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE
    }

    /// Second component (0-59)
    pub fn seconds(&self) -> u32 {
        self.total_seconds % SECONDS_PER_MINUTE
    }

    /// Total seconds since midnight
    pub fn to_seconds(&self) -> u32 {
        self.total_seconds
    }

    /// The `(hours, minutes, seconds)` triple
    pub fn to_components(&self) -> (u32, u32, u32) {
        (self.hours(), self.minutes(), self.seconds())
    }

    /// Clock-face sum of two times, wrapping past midnight
    pub fn add(self, other: TimeOfDay) -> TimeOfDay {
        TimeOfDay {
            total_seconds: (self.total_seconds + other.total_seconds) % SECONDS_PER_DAY,
        }
    }

    /// Clock-face difference of two times, wrapping backward through midnight
    pub fn sub(self, other: TimeOfDay) -> TimeOfDay {
        TimeOfDay {
            total_seconds: (self.total_seconds + SECONDS_PER_DAY - other.total_seconds)
                % SECONDS_PER_DAY,
        }
    }

    /// Add a plain second count, wrapping past midnight.
    ///
    /// A negative count shifts backward, so `t.add_seconds(-n)` equals
    /// `t.sub_seconds(n)`.
    pub fn add_seconds(self, seconds: i64) -> TimeOfDay {
        let offset = seconds.rem_euclid(SECONDS_PER_DAY as i64) as u32;
        TimeOfDay {
            total_seconds: (self.total_seconds + offset) % SECONDS_PER_DAY,
        }
    }

    /// Subtract a plain second count, wrapping backward through midnight
    pub fn sub_seconds(self, seconds: i64) -> TimeOfDay {
        let offset = seconds.rem_euclid(SECONDS_PER_DAY as i64) as u32;
        TimeOfDay {
            total_seconds: (self.total_seconds + SECONDS_PER_DAY - offset) % SECONDS_PER_DAY,
        }
    }
}

fn check_range(value: u32, max: u32, field: &'static str) -> TimeResult<()> {
    if value > max {
        return Err(TimeError::OutOfRange {
            field,
            min: 0,
            max,
            value,
        });
    }
    Ok(())
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self::MIDNIGHT
    }
}

impl TryFrom<u32> for TimeOfDay {
    type Error = TimeError;

    fn try_from(total_seconds: u32) -> TimeResult<Self> {
        Self::from_seconds(total_seconds)
    }
}

impl From<TimeOfDay> for u32 {
    fn from(time: TimeOfDay) -> u32 {
        time.total_seconds
    }
}

impl Add for TimeOfDay {
    type Output = TimeOfDay;

    fn add(self, other: TimeOfDay) -> TimeOfDay {
        TimeOfDay::add(self, other)
    }
}

impl Sub for TimeOfDay {
    type Output = TimeOfDay;

    fn sub(self, other: TimeOfDay) -> TimeOfDay {
        TimeOfDay::sub(self, other)
    }
}

impl Add<i64> for TimeOfDay {
    type Output = TimeOfDay;

    fn add(self, seconds: i64) -> TimeOfDay {
        self.add_seconds(seconds)
    }
}

impl Sub<i64> for TimeOfDay {
    type Output = TimeOfDay;

    fn sub(self, seconds: i64) -> TimeOfDay {
        self.sub_seconds(seconds)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    /// Parse `"HH:MM:SS"` - exactly three colon-separated base-10 fields.
    ///
    /// Fields need not be zero-padded, but each must parse as an unsigned
    /// decimal integer: signs and surrounding whitespace are rejected.
    /// Parsed components go through [`TimeOfDay::new`], so the same bounds
    /// apply.
    fn from_str(s: &str) -> TimeResult<Self> {
        let malformed = || TimeError::Malformed {
            input: s.to_string(),
        };
        let parse_field = |field: &str| field.parse::<u32>().map_err(|_| malformed());

        match s.split(':').collect::<Vec<_>>().as_slice() {
            [hours, minutes, seconds] => Self::new(
                parse_field(hours)?,
                parse_field(minutes)?,
                parse_field(seconds)?,
            ),
            _ => Err(malformed()),
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours(),
            self.minutes(),
            self.seconds()
        )
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TimeOfDay(hours={}, minutes={}, seconds={})",
            self.hours(),
            self.minutes(),
            self.seconds()
        )
    }
}
