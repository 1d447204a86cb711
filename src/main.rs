mod args;
mod cli;
mod error;
mod fmt;
mod logging;
mod models;
mod reports;
mod settings;
mod store;

use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;

use cli::Cli;
use store::ExpenseStore;

fn main() {
    logging::init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayHelp || e.kind() == ErrorKind::DisplayVersion => {
            let _ = e.print();
            return;
        }
        Err(e) => {
            tracing::debug!(error = %e, "unparseable arguments");
            Cli::unknown()
        }
    };
    let settings = settings::load_settings();
    let mut store = ExpenseStore::open(settings.expenses_path());

    let result = cli::dispatch(
        &mut store,
        &settings,
        cli.command.as_deref(),
        &cli.payload(),
    );

    // Every outcome exits 0; failures are only ever reported.
    if let Err(e) = result {
        if e.is_user_error() {
            println!("{e}");
        } else {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("{}", e.to_string().red());
        }
    }
}
