//! Minute-precision wall-clock time of day.
//!
//! All arithmetic wraps modulo 24 hours; a `Timestamp` never refers to a
//! previous or following day.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Minutes in a day.
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// A local time of day, `{hour: 0-23, minute: 0-59}`.
///
/// Ordering is hour-major, minute-minor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp {
    pub hour: u8,
    pub minute: u8,
}

/// A signed shift of a timestamp, split into hours and minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Offset {
    /// Shift forward (`true`) or backward (`false`).
    pub add: bool,
    pub hours: u32,
    pub minutes: u32,
}

impl Offset {
    /// Builds an offset from a signed minute count.
    pub const fn from_minutes(minutes: i32) -> Self {
        let abs = minutes.unsigned_abs();
        Self {
            add: minutes >= 0,
            hours: abs / 60,
            minutes: abs % 60,
        }
    }

    /// The offset as a signed minute count.
    pub fn signed_minutes(self) -> i64 {
        let magnitude = i64::from(self.hours) * 60 + i64::from(self.minutes);
        if self.add { magnitude } else { -magnitude }
    }
}

impl Timestamp {
    /// Midnight, the first minute of the day.
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// Creates a timestamp, validating both fields.
    pub fn new(hour: u32, minute: u32) -> Result<Self, ParseError> {
        match (u8::try_from(hour), u8::try_from(minute)) {
            (Ok(h), Ok(m)) if h < 24 && m < 60 => Ok(Self { hour: h, minute: m }),
            _ => Err(ParseError::TimestampOutOfRange { hour, minute }),
        }
    }

    /// Builds a timestamp from minutes since midnight, wrapping modulo one day.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "rem_euclid bounds the value to 0..1440"
    )]
    pub const fn from_minutes(minutes: i64) -> Self {
        let wrapped = minutes.rem_euclid(MINUTES_PER_DAY as i64);
        Self {
            hour: (wrapped / 60) as u8,
            minute: (wrapped % 60) as u8,
        }
    }

    /// Minutes since midnight: `hour * 60 + minute`.
    pub fn to_minutes(self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }

    /// Whether both fields are within range.
    pub const fn is_legal(self) -> bool {
        self.hour < 24 && self.minute < 60
    }

    /// Strictly later than `other`.
    pub fn is_after(self, other: Self) -> bool {
        self > other
    }

    /// Strictly earlier than `other`.
    pub fn is_before(self, other: Self) -> bool {
        self < other
    }

    /// Shifts the timestamp, wrapping around midnight in either direction.
    pub fn offset(self, offset: Offset) -> Self {
        Self::from_minutes(i64::from(self.to_minutes()) + offset.signed_minutes())
    }

    /// Shifts the timestamp by a signed number of minutes.
    pub fn offset_minutes(self, minutes: i32) -> Self {
        self.offset(Offset::from_minutes(minutes))
    }

    /// Rounds the minute to the nearest line of a grid with `resolution`
    /// lines per hour.
    ///
    /// Ties round down. Rounding up to the full hour carries into `hour`;
    /// from 23 that carry wraps to `00:00`. `resolution` is clamped to `1..=60`.
    pub fn snap(self, resolution: u32) -> Self {
        // clamped to 1..=60, so the step is within 1..=60
        let step = u8::try_from(60 / resolution.clamp(1, 60)).unwrap_or(1);

        let mut closest = 0u8;
        let mut line = 0u8;
        while line <= 60 {
            if self.minute.abs_diff(line) < self.minute.abs_diff(closest) {
                closest = line;
            }
            line += step;
        }

        if closest == 60 {
            Self {
                hour: (self.hour + 1) % 24,
                minute: 0,
            }
        } else {
            Self {
                hour: self.hour,
                minute: closest,
            }
        }
    }

    /// Signed minutes from `self` until `other`; negative if `other` is earlier.
    pub fn duration_in_minutes_until(self, other: Self) -> i32 {
        i32::from(other.to_minutes()) - i32::from(self.to_minutes())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for Timestamp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseError::MalformedTimestamp {
            value: s.to_string(),
        };

        let (hour, minute) = s.trim().split_once(':').ok_or_else(malformed)?;
        if hour.is_empty() || minute.len() != 2 {
            return Err(malformed());
        }
        let hour: u32 = hour.parse().map_err(|_| malformed())?;
        let minute: u32 = minute.parse().map_err(|_| malformed())?;
        Self::new(hour, minute)
    }
}

impl TryFrom<String> for Timestamp {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Timestamp> for String {
    fn from(ts: Timestamp) -> Self {
        ts.to_string()
    }
}
