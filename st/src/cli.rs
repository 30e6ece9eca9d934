//! CLI argument parsing for studytrack

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::state::CompletionKind;

#[derive(Parser, Debug)]
#[command(name = "st")]
#[command(author, version, about = "Self-study curriculum progress tracker", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Progress file to use instead of the configured one
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Defaults to `status` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Show current position, completion counts and recent notes
    Status,

    /// Mark a task, theory file or project as complete
    Complete {
        /// What kind of item was finished
        #[arg(value_enum)]
        kind: CompletionKind,

        /// Identifier of the finished item
        name: String,
    },

    /// Set the current week and day
    Set {
        /// Week number
        #[arg(allow_hyphen_values = true)]
        week: String,

        /// Day number
        #[arg(allow_hyphen_values = true)]
        day: String,
    },

    /// Add a free-text note
    Note {
        /// Note text; multiple words are joined with spaces
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Print shell hints for resuming at the current week
    Resume,
}

impl Cli {
    /// The command to run, with a bare invocation meaning `status`
    pub fn command(&self) -> &Command {
        self.command.as_ref().unwrap_or(&Command::Status)
    }
}
