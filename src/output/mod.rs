//! Presentation of results for the command line

pub mod formatter;

pub use formatter::{formatter_for, ConsoleFormatter, JsonFormatter, LeaderboardReport, OutputFormatter};
