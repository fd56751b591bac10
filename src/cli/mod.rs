pub mod dashboard;
pub mod demo;
pub mod reconcile;
pub mod status;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cobranca",
    about = "Reconciles a billing ledger against salesperson client lists and shows a delinquency dashboard."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assign salespeople to ledger rows and write the enriched snapshot.
    Reconcile {
        /// Path to the general ledger (semicolon CSV, or XLSX)
        ledger: Option<String>,
        /// Directory of per-salesperson client lists, processed in filename order
        #[arg(long)]
        lists: Option<String>,
        /// Output path for the enriched snapshot
        #[arg(long)]
        output: Option<String>,
    },
    /// Interactive delinquency dashboard over the enriched snapshot.
    Dashboard {
        /// Path to the enriched snapshot (default: the last reconcile output)
        file: Option<String>,
    },
    /// Print a snapshot summary without entering the dashboard.
    Status {
        /// Path to the enriched snapshot
        file: Option<String>,
    },
    /// Write a sample ledger and salesperson lists to explore cobranca.
    Demo {
        /// Directory to write the sample files into (default: current directory)
        #[arg(long)]
        dir: Option<String>,
    },
}
