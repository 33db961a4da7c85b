//! Interactive work day entry.
//!
//! Prompts for login and logout, then keeps offering to add another break
//! until the user declines. Fields may be left empty; the calculator reports
//! what is missing just as it does for the `calc` command.

use super::calc::{resolve_now, run};
use crate::libs::calculator::{BreakEntry, WorkdayEntry};
use crate::libs::messages::Message;
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
pub struct FormArgs {
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: FormArgs) -> Result<()> {
    let theme = ColorfulTheme::default();
    let prompt = |message: Message| -> Result<String> {
        let value: String = Input::with_theme(&theme)
            .with_prompt(message.to_string())
            .allow_empty(true)
            .interact_text()?;
        Ok(resolve_now(&value))
    };

    let mut entry = WorkdayEntry {
        login: Some(prompt(Message::PromptLoginTime)?),
        logout: Some(prompt(Message::PromptLogoutTime)?),
        breaks: Vec::new(),
    };

    while Confirm::with_theme(&theme)
        .with_prompt(Message::PromptAddBreak.to_string())
        .default(false)
        .interact()?
    {
        let number = entry.breaks.len() + 1;
        entry.breaks.push(BreakEntry {
            break_out: Some(prompt(Message::PromptBreakOutTime(number))?),
            break_in: Some(prompt(Message::PromptBreakInTime(number))?),
        });
    }

    run(&entry, args.json)
}
