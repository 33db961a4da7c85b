//! # worktime - Work day balance calculator
//!
//! A command-line utility that compares a day's effective work time against
//! a daily requirement (8 hours by default) and flags late arrivals.
//!
//! ## Features
//!
//! - **Balance Calculation**: Remaining or surplus time from login, logout and breaks
//! - **Break Validation**: Every break must lie inside the work period
//! - **Lateness Notice**: Logins after 09:15:00 carry a penalty notice
//! - **Interactive Form**: Prompt-driven entry with any number of breaks
//! - **JSON Output**: Machine-readable reports for scripting
//!
//! ## Usage
//!
//! ```rust,no_run
//! use worktime::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
