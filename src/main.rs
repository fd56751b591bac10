mod assign;
mod cli;
mod error;
mod fmt;
mod ledger;
mod loader;
mod normalize;
mod settings;
mod tui;
mod views;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Reconcile {
            ledger,
            lists,
            output,
        }) => cli::reconcile::run(ledger.as_deref(), lists.as_deref(), output.as_deref()),
        Some(Commands::Dashboard { file }) => cli::dashboard::run(file.as_deref()),
        Some(Commands::Status { file }) => cli::status::run(file.as_deref()),
        Some(Commands::Demo { dir }) => cli::demo::run(dir.as_deref()),
        None => cli::dashboard::run(None),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
