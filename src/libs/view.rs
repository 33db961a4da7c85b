//! Console and JSON rendering of calculation results.
//!
//! Tables go through `prettytable`; the balance cell is red for a deficit and
//! green for a surplus. JSON output is pretty-printed on stdout.

use crate::libs::calculator::{Balance, BreakInterval, WorkSummary};
use crate::libs::error::CalcError;
use crate::libs::formatter::{format_duration, format_signed_seconds};
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use prettytable::{row, Cell, Row, Table};
use serde_json::{json, Value};

pub struct View {}

impl View {
    /// Prints the break table, the summary table and the verdict lines.
    pub fn summary(summary: &WorkSummary) -> Result<()> {
        Self::breaks(&summary.workday.breaks)?;

        msg_print!(Message::SummaryHeader, true);
        let mut table = Table::new();
        table.add_row(row!["LOGIN", "LOGOUT", "BREAKS", "EFFECTIVE WORK", "BALANCE", "LATE"]);

        let (balance, style) = match summary.balance {
            Balance::Deficit => (format!("-{}", summary.duration), "Fr"),
            Balance::Surplus => (format!("+{}", summary.duration), "Fg"),
        };
        table.add_row(Row::new(vec![
            Cell::new(&summary.workday.login.to_string()),
            Cell::new(&summary.workday.logout.to_string()),
            Cell::new(&summary.total_break),
            Cell::new(&format_signed_seconds(summary.effective_work_seconds)),
            Cell::new(&balance).style_spec(style),
            Cell::new(if summary.penalty { "yes" } else { "no" }),
        ]));
        table.printstd();

        println!();
        for line in summary.lines() {
            msg_print!(format!("{}.", line));
        }

        Ok(())
    }

    pub fn breaks(breaks: &[BreakInterval]) -> Result<()> {
        msg_print!(Message::BreaksHeader, true);
        if breaks.is_empty() {
            msg_print!(Message::NoBreaks);
            return Ok(());
        }

        let mut table = Table::new();
        table.add_row(row!["ID", "OUT", "IN", "DURATION"]);
        for (index, interval) in breaks.iter().enumerate() {
            table.add_row(row![
                index + 1,
                interval.break_out,
                interval.break_in,
                format_duration(&interval.duration())
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Prints the summary as pretty JSON on stdout.
    pub fn json(summary: &WorkSummary) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(summary)?);
        Ok(())
    }

    /// Prints a rejected calculation as pretty JSON on stdout.
    pub fn json_error(error: &CalcError) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(&Self::error_report(error))?);
        Ok(())
    }

    /// JSON report of a rejected calculation. `break` is the one-based number
    /// of the offending break, or `null`.
    pub fn error_report(error: &CalcError) -> Value {
        json!({
            "error": error.to_string(),
            "break": error.break_index().map(|index| index + 1),
        })
    }
}
