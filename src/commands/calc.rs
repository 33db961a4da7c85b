//! One-shot work balance calculation.
//!
//! Takes the login and logout times plus any number of `OUT-IN` breaks from
//! the command line, runs the calculator against the configured policy and
//! renders the result as tables or JSON.

use crate::{
    libs::{
        calculator::{calculate_with, BreakEntry, WorkdayEntry},
        config::Config,
        messages::Message,
        time::TimeOfDay,
        view::View,
    },
    msg_bail_anyhow, msg_debug,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

/// Command-line arguments for the calc command.
#[derive(Debug, Args)]
pub struct CalcArgs {
    /// Login time (HH:MM[:SS] or 'now')
    pub login: Option<String>,

    /// Expected logout time (HH:MM[:SS] or 'now')
    pub logout: Option<String>,

    /// Break as OUT-IN, for example `12:00-12:30`
    ///
    /// May be repeated; breaks are checked in the order given.
    #[arg(long = "break", short = 'b', value_name = "OUT-IN")]
    pub breaks: Vec<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn cmd(args: CalcArgs) -> Result<()> {
    let mut entry = WorkdayEntry {
        login: args.login.as_deref().map(resolve_now),
        logout: args.logout.as_deref().map(resolve_now),
        breaks: Vec::with_capacity(args.breaks.len()),
    };
    for raw in &args.breaks {
        entry.breaks.push(parse_break(raw)?);
    }

    run(&entry, args.json)
}

/// Calculates `entry` with the configured policy and renders the outcome.
///
/// A rejected entry is rendered (in JSON mode) and returned as the error.
pub fn run(entry: &WorkdayEntry, json: bool) -> Result<()> {
    let policy = Config::read()?.work_policy()?;

    match calculate_with(entry, &policy) {
        Ok(summary) if json => View::json(&summary),
        Ok(summary) => View::summary(&summary),
        Err(error) => {
            if let Some(index) = error.break_index() {
                msg_debug!(Message::RejectedBreak(index + 1));
            }
            if json {
                View::json_error(&error)?;
            }
            Err(error.into())
        }
    }
}

/// Replaces the `now` keyword with the current local time.
pub fn resolve_now(raw: &str) -> String {
    if raw.trim().eq_ignore_ascii_case("now") {
        TimeOfDay::from(Local::now().time()).to_string()
    } else {
        raw.to_string()
    }
}

/// Splits an `OUT-IN` argument. Either side may be left empty.
pub fn parse_break(raw: &str) -> Result<BreakEntry> {
    match raw.split_once('-') {
        Some((break_out, break_in)) => Ok(BreakEntry {
            break_out: Some(resolve_now(break_out)),
            break_in: Some(resolve_now(break_in)),
        }),
        None => msg_bail_anyhow!(Message::InvalidBreakArgument(raw.to_string())),
    }
}
