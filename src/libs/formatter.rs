//! Duration formatting utilities for user-friendly display.
//!
//! This module converts durations into the `HH:MM:SS` strings shown in the
//! calculator verdict, the break table and the JSON report.
//!
//! ## Format Specifications
//!
//! - Hours, minutes and seconds are zero-padded to 2 digits
//! - Hours are not capped at 24 (`30:15:00` is a valid output)
//! - The sign is dropped: the absolute value is formatted and callers convey
//!   deficit or surplus separately
//!
//! ### Examples
//! - 1800 seconds → "00:30:00"
//! - -3600 seconds → "01:00:00"
//! - 108900 seconds → "30:15:00"
//!
//! ```rust
//! use worktime::libs::formatter::{format_duration, format_seconds};
//! use chrono::Duration;
//!
//! assert_eq!(format_seconds(5400), "01:30:00");
//! assert_eq!(format_duration(&Duration::minutes(-45)), "00:45:00");
//! ```

use chrono::Duration;

/// Formats a number of seconds as `HH:MM:SS` using its absolute value.
pub fn format_seconds(seconds: i64) -> String {
    let abs_seconds = seconds.unsigned_abs();
    let hours = abs_seconds / 3600;
    let minutes = (abs_seconds % 3600) / 60;
    let secs = abs_seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Formats a `chrono::Duration` as `HH:MM:SS`.
///
/// Sub-second precision is truncated. Negative durations are rendered by
/// magnitude, like [`format_seconds`].
pub fn format_duration(duration: &Duration) -> String {
    format_seconds(duration.num_seconds())
}

/// Formats seconds as `HH:MM:SS`, keeping a leading `-` for negative values.
pub fn format_signed_seconds(seconds: i64) -> String {
    if seconds < 0 {
        format!("-{}", format_seconds(seconds))
    } else {
        format_seconds(seconds)
    }
}

/// Describes a required work duration for the verdict text.
///
/// Whole hours read as `"8-hour"`; anything else falls back to `HH:MM:SS`.
pub fn requirement_label(seconds: i64) -> String {
    if seconds > 0 && seconds % 3600 == 0 {
        format!("{}-hour", seconds / 3600)
    } else {
        format_seconds(seconds)
    }
}
