//! Configuration management for the worktime application.
//!
//! The only configurable module is the work policy: how much work a day
//! requires and the latest login that is not considered late. Nothing about
//! the work days themselves is ever written to disk.
//!
//! ## Storage
//!
//! The configuration is a pretty-printed JSON file named `config.json` in the
//! platform-specific application data directory:
//! - **Windows**: `%LOCALAPPDATA%\worktime\config.json`
//! - **macOS**: `~/Library/Application Support/worktime/config.json`
//! - **Linux**: `~/.local/share/worktime/config.json`
//!
//! ```json
//! {
//!   "policy": {
//!     "required_work": "08:00:00",
//!     "penalty_threshold": "09:15:00"
//!   }
//! }
//! ```
//!
//! A missing file, or a file without a `policy` section, means the default
//! 8-hour / 09:15:00 policy.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use worktime::libs::config::Config;
//!
//! let policy = Config::read()?.work_policy()?;
//! println!("Required seconds: {}", policy.required_work_seconds);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::calculator::{WorkPolicy, PENALTY_THRESHOLD, REQUIRED_WORK_SECONDS};
use crate::libs::formatter::format_seconds;
use crate::libs::messages::Message;
use crate::libs::time::TimeOfDay;
use crate::{msg_error_anyhow, msg_print};
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Work policy settings as stored in the configuration file.
///
/// Both values are time strings in the same `HH:MM[:SS]` notation the user
/// types for login and logout, so they can be edited by hand.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PolicyConfig {
    /// Work required per day, read as a duration (`"08:00:00"` = 8 hours).
    pub required_work: String,

    /// Latest login time that does not trigger the lateness penalty.
    pub penalty_threshold: String,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        PolicyConfig {
            required_work: format_seconds(REQUIRED_WORK_SECONDS),
            penalty_threshold: PENALTY_THRESHOLD.to_string(),
        }
    }
}

impl TryFrom<&PolicyConfig> for WorkPolicy {
    type Error = anyhow::Error;

    fn try_from(config: &PolicyConfig) -> Result<Self> {
        let invalid = |field: &str, value: &str| {
            msg_error_anyhow!(Message::InvalidPolicyValue {
                field: field.to_string(),
                value: value.to_string(),
            })
        };

        let required_work = config
            .required_work
            .parse::<TimeOfDay>()
            .map_err(|_| invalid("required_work", &config.required_work))?;
        let penalty_threshold = config
            .penalty_threshold
            .parse::<TimeOfDay>()
            .map_err(|_| invalid("penalty_threshold", &config.penalty_threshold))?;

        Ok(WorkPolicy {
            required_work_seconds: required_work.seconds_since_midnight(),
            penalty_threshold,
        })
    }
}

/// Main configuration container.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Work policy overrides. `None` means the built-in defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<PolicyConfig>,
}

impl Config {
    /// Full path of the configuration file. Nothing is created on disk.
    pub fn path() -> PathBuf {
        DataStorage::new().path(CONFIG_FILE_NAME)
    }

    /// Reads the configuration, falling back to defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error naming the file if it exists but cannot be read or
    /// parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = Self::path();
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let display_path = config_file_path.display().to_string();
        let config_str = fs::read_to_string(&config_file_path)
            .with_context(|| Message::ConfigReadFailed(display_path.clone()))?;
        let config: Config =
            serde_json::from_str(&config_str).with_context(|| Message::ConfigParseFailed(display_path))?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON, creating the data
    /// directory if needed.
    pub fn save(&self) -> Result<()> {
        let config_file = File::create(DataStorage::new().get_path(CONFIG_FILE_NAME)?)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file.
    ///
    /// Returns `false` when there was nothing to remove.
    pub fn delete() -> Result<bool> {
        let config_file_path = Self::path();
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// The policy the calculator should apply.
    pub fn work_policy(&self) -> Result<WorkPolicy> {
        match &self.policy {
            Some(policy) => WorkPolicy::try_from(policy),
            None => Ok(WorkPolicy::default()),
        }
    }

    /// Runs the interactive setup wizard for the work policy.
    ///
    /// Existing values are offered as defaults. Each answer is validated
    /// before it is accepted, so the returned configuration always yields a
    /// usable [`WorkPolicy`].
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.policy.clone().unwrap_or_default();

        msg_print!(Message::ConfigModulePolicy);
        let policy = PolicyConfig {
            required_work: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptRequiredWork.to_string())
                .default(default.required_work)
                .validate_with(|input: &String| validate_time(input))
                .interact_text()?,
            penalty_threshold: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptPenaltyThreshold.to_string())
                .default(default.penalty_threshold)
                .validate_with(|input: &String| validate_time(input))
                .interact_text()?,
        };

        config.policy = Some(policy);
        Ok(config)
    }
}

fn validate_time(input: &str) -> std::result::Result<(), String> {
    input.parse::<TimeOfDay>().map(|_| ()).map_err(|err| err.to_string())
}
