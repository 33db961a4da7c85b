//! Display implementation for worktime application messages.
//!
//! All user-facing text lives here so the calculator, the views and the
//! commands never hard-code sentences. Clauses that end up inside the
//! calculation message are written without a trailing period; the
//! calculator adds the terminators when composing them.
//!
//! ```rust
//! use worktime::libs::messages::Message;
//!
//! assert_eq!(Message::TotalBreakTime("00:30:00".into()).to_string(), "Total break time: 00:30:00");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CALCULATION MESSAGES ===
            Message::WorkRemaining { duration, required } => {
                format!("You need to work for {} more to complete the {} work requirement", duration, required)
            }
            Message::WorkRequirementMet { duration, required } => {
                format!("You have met or exceeded the {} work requirement by {}", required, duration)
            }
            Message::TotalBreakTime(duration) => format!("Total break time: {}", duration),
            Message::LatePenalty => "You have incurred a penalty for not being on time".to_string(),
            Message::RejectedBreak(number) => format!("Rejected break #{}", number),

            // === SUMMARY VIEW MESSAGES ===
            Message::SummaryHeader => "Work day summary".to_string(),
            Message::BreaksHeader => "Breaks".to_string(),
            Message::NoBreaks => "No breaks entered".to_string(),

            // === FORM MESSAGES ===
            Message::PromptLoginTime => "Login time (HH:MM:SS or 'now')".to_string(),
            Message::PromptLogoutTime => "Expected logout time (HH:MM:SS or 'now')".to_string(),
            Message::PromptAddBreak => "Add a break?".to_string(),
            Message::PromptBreakOutTime(number) => format!("Break #{} out time (HH:MM:SS)", number),
            Message::PromptBreakInTime(number) => format!("Break #{} in time (HH:MM:SS)", number),
            Message::InvalidBreakArgument(raw) => {
                format!("Invalid break '{}': expected OUT-IN, for example 12:00-12:30", raw)
            }

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigReadFailed(path) => format!("Failed to read configuration file {}", path),
            Message::ConfigParseFailed(path) => format!("Configuration file {} is not valid JSON", path),
            Message::ConfigModulePolicy => "Work policy".to_string(),
            Message::PromptRequiredWork => "Required work per day (HH:MM[:SS])".to_string(),
            Message::PromptPenaltyThreshold => "Latest login without penalty (HH:MM[:SS])".to_string(),
            Message::InvalidPolicyValue { field, value } => {
                format!("Invalid value '{}' for '{}' in configuration", value, field)
            }
        };

        write!(f, "{}", text)
    }
}
