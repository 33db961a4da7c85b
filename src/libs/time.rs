//! Time-of-day parsing for login, logout and break fields.
//!
//! Every time entered by the user is a day-local wall-clock value written as
//! `HH:MM` or `HH:MM:SS`. This module turns those strings into [`TimeOfDay`]
//! values and seconds since midnight.
//!
//! ## Absent vs. midnight
//!
//! A blank field means "not provided" and is returned as `None`. It is never
//! mapped to `0`, so `"00:00"` (midnight) and `""` stay distinguishable.
//!
//! ## Range checks
//!
//! The parser only checks that every component is an unsigned integer.
//! Values such as `"25:99:99"` are accepted and converted arithmetically;
//! the calculator's ordering rules are what reject nonsensical inputs.
//!
//! ## Examples
//!
//! ```rust
//! use worktime::libs::time::{parse_time_to_seconds, TimeOfDay};
//!
//! assert_eq!(parse_time_to_seconds("09:15").unwrap(), Some(33300));
//! assert_eq!(parse_time_to_seconds("  ").unwrap(), None);
//!
//! let login: TimeOfDay = "08:30:05".parse().unwrap();
//! assert_eq!(login.to_string(), "08:30:05");
//! ```

use chrono::{NaiveTime, Timelike};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Why a time string could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    #[error("expected HH:MM or HH:MM:SS, got '{0}'")]
    WrongComponentCount(String),
    #[error("'{component}' in '{input}' is not a whole number")]
    InvalidComponent { input: String, component: String },
}

/// A wall-clock time within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeOfDay {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeOfDay {
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self { hours, minutes, seconds }
    }

    /// Number of seconds elapsed since midnight.
    pub fn seconds_since_midnight(&self) -> i64 {
        i64::from(self.hours) * 3600 + i64::from(self.minutes) * 60 + i64::from(self.seconds)
    }

    /// Parses an optional field, treating a blank string as absent.
    pub fn parse_optional(raw: &str) -> Result<Option<Self>, TimeParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed.parse().map(Some)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let input = raw.trim();
        let parts: Vec<&str> = input.split(':').collect();
        if parts.len() != 2 && parts.len() != 3 {
            return Err(TimeParseError::WrongComponentCount(input.to_string()));
        }

        let component = |part: &str| -> Result<u32, TimeParseError> {
            part.parse::<u32>().map_err(|_| TimeParseError::InvalidComponent {
                input: input.to_string(),
                component: part.to_string(),
            })
        };

        let hours = component(parts[0])?;
        let minutes = component(parts[1])?;
        let seconds = match parts.get(2) {
            Some(part) => component(part)?,
            None => 0,
        };

        Ok(Self { hours, minutes, seconds })
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self::new(time.hour(), time.minute(), time.second())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Converts a time string into seconds since midnight.
///
/// Returns `Ok(None)` for a blank string, `Ok(Some(seconds))` for a valid
/// `HH:MM` / `HH:MM:SS` value and an error when any component is not an
/// unsigned integer or the component count is wrong.
pub fn parse_time_to_seconds(raw: &str) -> Result<Option<i64>, TimeParseError> {
    Ok(TimeOfDay::parse_optional(raw)?.map(|time| time.seconds_since_midnight()))
}
