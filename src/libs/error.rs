//! Validation errors returned by the work-time calculator.
//!
//! Every variant is a user-input problem. The `Display` text is the exact
//! message shown to the user, so renderers print it verbatim.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Login or logout was left blank.
    #[error("Please enter login and logout times.")]
    MissingRequiredField,

    /// Login or logout is not a `HH:MM[:SS]` value.
    #[error("Invalid login or logout time format.")]
    InvalidTimeFormat,

    /// Logout is not strictly after login.
    #[error("Logout time must be after login time.")]
    InvalidOrdering,

    /// The break at `index` (zero-based, entry order) has an unreadable or
    /// missing side.
    #[error("Invalid break times.")]
    InvalidBreakFormat { index: usize },

    /// The break at `index` ends before it starts or leaves the work period.
    #[error("Invalid break times.")]
    InvalidBreakOrdering { index: usize },
}

impl CalcError {
    /// Zero-based position of the offending break, if the error is about one.
    pub fn break_index(&self) -> Option<usize> {
        match self {
            CalcError::InvalidBreakFormat { index } | CalcError::InvalidBreakOrdering { index } => Some(*index),
            _ => None,
        }
    }
}

pub type CalcResult<T> = Result<T, CalcError>;
