//! Core library modules for the worktime application.
//!
//! ## Features
//!
//! - **Calculation Engine**: Work balance, break validation, lateness penalty
//! - **Time Handling**: `HH:MM[:SS]` parsing and duration formatting
//! - **Core Infrastructure**: Configuration, data storage, messaging, logging
//! - **User Interface**: Console tables and JSON reports
//!
//! ## Usage
//!
//! ```rust
//! use worktime::libs::calculator::{calculate, WorkdayEntry};
//!
//! let summary = calculate(&WorkdayEntry::new("09:30", "17:00")).unwrap();
//! assert!(summary.penalty);
//! assert_eq!(summary.duration, "00:30:00");
//! ```

pub mod calculator;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod messages;
pub mod time;
pub mod view;
