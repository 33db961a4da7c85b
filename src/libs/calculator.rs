//! Work-time balance calculation.
//!
//! This module is the core of the application: it takes the raw strings of a
//! work day (login, logout and any number of breaks), validates them and
//! reports how far the effective work time is from the daily requirement.
//!
//! ## Calculation Formula
//!
//! ```text
//! Effective Work = (Logout - Login) - Total Break Time
//! Remaining      = Required Work - Effective Work
//!
//! Remaining >  0  → deficit, "need to work X more"
//! Remaining <= 0  → surplus, "met or exceeded by X"
//! ```
//!
//! A login strictly later than the policy's penalty threshold adds a
//! lateness notice to the message; it never turns the result into an error.
//!
//! ## Validation Order
//!
//! 1. Login and logout present
//! 2. Login and logout readable
//! 3. Login strictly before logout
//! 4. Each break, in entry order: readable, then inside the work period
//!
//! The first failing check ends the calculation.
//!
//! ## Usage
//!
//! ```rust
//! use worktime::libs::calculator::{calculate, Balance, BreakEntry, WorkdayEntry};
//!
//! let entry = WorkdayEntry::new("08:00:00", "17:00:00")
//!     .with_break(BreakEntry::new("12:00:00", "12:30:00"));
//! let summary = calculate(&entry).unwrap();
//!
//! assert_eq!(summary.balance, Balance::Surplus);
//! assert_eq!(summary.duration, "00:30:00");
//! assert_eq!(summary.total_break, "00:30:00");
//! ```

use crate::libs::error::{CalcError, CalcResult};
use crate::libs::formatter::{format_seconds, requirement_label};
use crate::libs::messages::Message;
use crate::libs::time::TimeOfDay;
use chrono::Duration;
use serde::Serialize;

/// Work time required per day, in seconds (8 hours).
pub const REQUIRED_WORK_SECONDS: i64 = 8 * 3600;

/// Latest login that does not count as late (09:15:00).
pub const PENALTY_THRESHOLD: TimeOfDay = TimeOfDay {
    hours: 9,
    minutes: 15,
    seconds: 0,
};

/// The rules a work day is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkPolicy {
    pub required_work_seconds: i64,
    pub penalty_threshold: TimeOfDay,
}

impl Default for WorkPolicy {
    fn default() -> Self {
        WorkPolicy {
            required_work_seconds: REQUIRED_WORK_SECONDS,
            penalty_threshold: PENALTY_THRESHOLD,
        }
    }
}

/// One break as typed by the user. Either side may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreakEntry {
    pub break_out: Option<String>,
    pub break_in: Option<String>,
}

impl BreakEntry {
    pub fn new(break_out: impl Into<String>, break_in: impl Into<String>) -> Self {
        Self {
            break_out: Some(break_out.into()),
            break_in: Some(break_in.into()),
        }
    }
}

/// Raw input of a single calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkdayEntry {
    pub login: Option<String>,
    pub logout: Option<String>,
    pub breaks: Vec<BreakEntry>,
}

impl WorkdayEntry {
    pub fn new(login: impl Into<String>, logout: impl Into<String>) -> Self {
        Self {
            login: Some(login.into()),
            logout: Some(logout.into()),
            breaks: Vec::new(),
        }
    }

    pub fn with_break(mut self, entry: BreakEntry) -> Self {
        self.breaks.push(entry);
        self
    }
}

/// A validated break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreakInterval {
    pub break_out: TimeOfDay,
    pub break_in: TimeOfDay,
}

impl BreakInterval {
    pub fn duration_seconds(&self) -> i64 {
        self.break_in.seconds_since_midnight() - self.break_out.seconds_since_midnight()
    }

    pub fn duration(&self) -> Duration {
        Duration::seconds(self.duration_seconds())
    }
}

/// A validated work day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Workday {
    pub login: TimeOfDay,
    pub logout: TimeOfDay,
    pub breaks: Vec<BreakInterval>,
}

impl Workday {
    pub fn total_break_seconds(&self) -> i64 {
        self.breaks.iter().map(BreakInterval::duration_seconds).sum()
    }

    pub fn effective_work_seconds(&self) -> i64 {
        self.logout.seconds_since_midnight() - self.login.seconds_since_midnight() - self.total_break_seconds()
    }
}

/// Whether the day falls short of the requirement or meets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Balance {
    Deficit,
    Surplus,
}

/// Outcome of a successful calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkSummary {
    #[serde(flatten)]
    pub workday: Workday,
    pub balance: Balance,
    /// Required minus effective work; positive means time is still owed.
    pub remaining_seconds: i64,
    /// Magnitude of `remaining_seconds` as `HH:MM:SS`.
    pub duration: String,
    pub effective_work_seconds: i64,
    pub total_break_seconds: i64,
    pub total_break: String,
    pub penalty: bool,
    pub message: String,
}

impl WorkSummary {
    /// The message split into its clauses, without the trailing periods.
    pub fn lines(&self) -> Vec<&str> {
        self.message.split('.').map(str::trim).filter(|line| !line.is_empty()).collect()
    }
}

/// Calculates the work balance against the default 8-hour policy.
pub fn calculate(entry: &WorkdayEntry) -> CalcResult<WorkSummary> {
    calculate_with(entry, &WorkPolicy::default())
}

/// Calculates the work balance against `policy`.
pub fn calculate_with(entry: &WorkdayEntry, policy: &WorkPolicy) -> CalcResult<WorkSummary> {
    let workday = validate(entry)?;

    let penalty = workday.login.seconds_since_midnight() > policy.penalty_threshold.seconds_since_midnight();
    let total_break_seconds = workday.total_break_seconds();
    let effective_work_seconds = workday.effective_work_seconds();
    let remaining_seconds = policy.required_work_seconds - effective_work_seconds;

    let balance = if remaining_seconds > 0 { Balance::Deficit } else { Balance::Surplus };
    let duration = format_seconds(remaining_seconds);
    let total_break = format_seconds(total_break_seconds);
    let required = requirement_label(policy.required_work_seconds);

    let mut clauses = vec![
        match balance {
            Balance::Deficit => Message::WorkRemaining {
                duration: duration.clone(),
                required,
            },
            Balance::Surplus => Message::WorkRequirementMet {
                duration: duration.clone(),
                required,
            },
        },
        Message::TotalBreakTime(total_break.clone()),
    ];
    if penalty {
        clauses.push(Message::LatePenalty);
    }

    tracing::debug!(
        effective_work_seconds,
        total_break_seconds,
        remaining_seconds,
        penalty,
        "work day calculated"
    );

    Ok(WorkSummary {
        workday,
        balance,
        remaining_seconds,
        duration,
        effective_work_seconds,
        total_break_seconds,
        total_break,
        penalty,
        message: compose_message(&clauses),
    })
}

/// Checks the raw entry and turns it into a [`Workday`].
pub fn validate(entry: &WorkdayEntry) -> CalcResult<Workday> {
    let (login, logout) = match (present(&entry.login), present(&entry.logout)) {
        (Some(login), Some(logout)) => (login, logout),
        _ => return Err(CalcError::MissingRequiredField),
    };

    let login: TimeOfDay = login.parse().map_err(|err| {
        tracing::debug!(%err, "unreadable login");
        CalcError::InvalidTimeFormat
    })?;
    let logout: TimeOfDay = logout.parse().map_err(|err| {
        tracing::debug!(%err, "unreadable logout");
        CalcError::InvalidTimeFormat
    })?;

    let login_seconds = login.seconds_since_midnight();
    let logout_seconds = logout.seconds_since_midnight();
    if login_seconds >= logout_seconds {
        return Err(CalcError::InvalidOrdering);
    }

    let mut breaks = Vec::with_capacity(entry.breaks.len());
    for (index, raw) in entry.breaks.iter().enumerate() {
        let interval = match (present(&raw.break_out), present(&raw.break_in)) {
            // An untouched form row.
            (None, None) => continue,
            (Some(break_out), Some(break_in)) => match (break_out.parse::<TimeOfDay>(), break_in.parse::<TimeOfDay>()) {
                (Ok(break_out), Ok(break_in)) => BreakInterval { break_out, break_in },
                _ => return Err(CalcError::InvalidBreakFormat { index }),
            },
            _ => return Err(CalcError::InvalidBreakFormat { index }),
        };

        let out_seconds = interval.break_out.seconds_since_midnight();
        let in_seconds = interval.break_in.seconds_since_midnight();
        if out_seconds >= in_seconds || out_seconds < login_seconds || in_seconds > logout_seconds {
            tracing::debug!(
                index,
                break_out = %interval.break_out,
                break_in = %interval.break_in,
                "break outside work period"
            );
            return Err(CalcError::InvalidBreakOrdering { index });
        }

        breaks.push(interval);
    }

    Ok(Workday { login, logout, breaks })
}

/// Joins clauses into period-terminated sentences.
pub fn compose_message(clauses: &[Message]) -> String {
    clauses.iter().map(|clause| format!("{}.", clause)).collect::<Vec<_>>().join(" ")
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|value| !value.is_empty())
}
