use clap::{Parser, Subcommand};

/// Mess order planner — select items and meal times against a budget.
#[derive(Parser, Debug)]
#[command(name = "mess_order_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the catalog file (.json or .csv). Falls back to the
    /// built-in catalog when absent.
    #[arg(short, long, default_value = "catalog.json")]
    pub file: String,

    /// Path to the cached budget preferences.
    #[arg(long, default_value = "budget_prefs.json")]
    pub prefs: String,

    /// Where the submission payload is written.
    #[arg(short, long, default_value = "order_submission.json")]
    pub out: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run an interactive ordering session.
    Order,

    /// List the catalog, or fuzzy-search it with a query.
    Catalog {
        /// Search query; omit to list everything.
        query: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Order
    }
}
