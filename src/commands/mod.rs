pub mod calc;
pub mod form;
pub mod init;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Calculate the work balance from login, logout and break times")]
    Calc(calc::CalcArgs),
    #[command(about = "Enter the work day interactively")]
    Form(form::FormArgs),
    #[command(about = "Configure the work policy")]
    Init(init::InitArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Calc(args) => calc::cmd(args),
            Commands::Form(args) => form::cmd(args),
            Commands::Init(args) => init::cmd(args),
        }
    }
}
