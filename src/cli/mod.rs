//! CLI flag definitions and command dispatch

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::domain::VirtualId;

/// sticky - tiny sticky notes for the terminal
///
/// With no flags, lists all notes. When several action flags are given,
/// only the first of --add, --get, --list, --del, --purge runs.
#[derive(Parser, Debug)]
#[command(name = "sticky", version, about, long_about = None)]
pub struct Cli {
    /// Add a note
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
    pub add: Option<String>,

    /// Print the note with the given id
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub get: Option<i64>,

    /// List all notes
    #[arg(long)]
    pub list: bool,

    /// Delete the note with the given id
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub del: Option<i64>,

    /// Delete the entire notes database (asks for confirmation)
    #[arg(long)]
    pub purge: bool,

    /// Limit output to the given number of columns (reserved, currently ignored)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub width: Option<i64>,

    /// Database file (overrides STICKY_ENV and the config file)
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// The single action one invocation performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add(String),
    Get(VirtualId),
    List,
    Delete(VirtualId),
    Purge,
}

impl Cli {
    /// Picks the action to run.
    ///
    /// Precedence is fixed: add, get, list, del, purge, then list as the
    /// default. Flags after the first match are ignored.
    pub fn action(&self) -> Action {
        if let Some(content) = &self.add {
            Action::Add(content.clone())
        } else if let Some(id) = self.get {
            Action::Get(VirtualId::new(id))
        } else if self.list {
            Action::List
        } else if let Some(id) = self.del {
            Action::Delete(VirtualId::new(id))
        } else if self.purge {
            Action::Purge
        } else {
            Action::List
        }
    }

    /// Maps the `-v` count to a tracing filter directive.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
