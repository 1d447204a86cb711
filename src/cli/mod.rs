pub mod add;
pub mod delete;
pub mod export;
pub mod help;
pub mod list;
pub mod summary;
pub mod update;

use clap::Parser;

use crate::args::FlagArgs;
use crate::error::{EtrackerError, Result};
use crate::settings::Settings;
use crate::store::ExpenseStore;

#[derive(Parser)]
#[command(name = "etracker", version, about = "Expense tracker CLI. Run `etracker help` for commands.")]
pub struct Cli {
    /// add, update, delete, list, summary, export or help
    #[arg(allow_hyphen_values = true)]
    pub command: Option<String>,
    /// Flags for the command, e.g. --description Tea --amount 20 --category Drinks
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub payload: Vec<String>,
}

impl Cli {
    /// Arguments clap could not make sense of; dispatches as an unknown command.
    pub fn unknown() -> Self {
        Self {
            command: None,
            payload: Vec::new(),
        }
    }

    /// Everything after the command word, space-joined.
    pub fn payload(&self) -> String {
        self.payload.join(" ").trim().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Add,
    Update,
    Delete,
    List,
    Summary,
    Export,
    Help,
}

const ALL_COMMANDS: &[Command] = &[
    Command::Add,
    Command::Update,
    Command::Delete,
    Command::List,
    Command::Summary,
    Command::Export,
    Command::Help,
];

impl Command {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::List => "list",
            Self::Summary => "summary",
            Self::Export => "export",
            Self::Help => "help",
        }
    }

    pub fn from_word(word: &str) -> Option<Self> {
        ALL_COMMANDS.iter().find(|c| c.key() == word).copied()
    }
}

/// Run one command against the loaded store. Mutating commands persist before returning.
pub fn dispatch(
    store: &mut ExpenseStore,
    settings: &Settings,
    command: Option<&str>,
    payload: &str,
) -> Result<()> {
    let command = command
        .and_then(Command::from_word)
        .ok_or(EtrackerError::UnknownCommand)?;
    let args = FlagArgs::parse(payload);
    tracing::debug!(command = command.key(), payload, file = %store.path().display(), "dispatching");

    match command {
        Command::Add => add::run(store, &args),
        Command::Update => update::run(store, &args),
        Command::Delete => delete::run(store, &args),
        Command::List => list::run(store, &settings.currency),
        Command::Summary => summary::run(store, &args, &settings.currency),
        Command::Export => export::run(store, &settings.export_path()),
        Command::Help => help::run(),
    }
}
