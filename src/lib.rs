//! pinkink - a journaling companion for the terminal
//!
//! One entry a day, tagged with a mood. The crate computes writing streaks
//! and word statistics, draws a monthly mood calendar, tracks goals and
//! writing prompts, and can ask a completion API for a mood reading or a
//! weekly reflection.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod ai;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod journal;
pub mod logging;
pub mod output;
pub mod storage;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::JournalError;
pub use features::stats::{compute_writing_stats, WritingStats};
pub use journal::JournalEntry;
