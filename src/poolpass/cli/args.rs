use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "poolpass", version)]
#[command(about = "Collect a stamp for every pool you swim in", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show progress and the selected pool
    #[command(alias = "st")]
    Status,

    /// List every pool in the catalog
    #[command(alias = "ls")]
    List {
        /// Only list pools already visited
        #[arg(long)]
        visited: bool,
    },

    /// Select a pool and show its details
    #[command(alias = "s")]
    Show {
        /// Pool number (as in `list`) or id; defaults to the selected pool
        pool: Option<String>,
    },

    /// Select the next pool
    #[command(alias = "n")]
    Next,

    /// Select the previous pool
    #[command(alias = "p")]
    Prev,

    /// Mark a pool as visited, or remove its stamp
    #[command(alias = "t")]
    Toggle {
        /// Pool number (as in `list`) or id; defaults to the selected pool
        pool: Option<String>,
    },

    /// Browse stamps in the order they were collected
    #[command(alias = "pp")]
    Passport {
        /// Page to show (starting at 1)
        #[arg(conflicts_with_all = ["next", "prev"])]
        page: Option<usize>,

        /// Go to the next page
        #[arg(long, conflicts_with = "prev")]
        next: bool,

        /// Go to the previous page
        #[arg(long)]
        prev: bool,
    },

    /// Clear every stamp
    Reset {
        /// Confirm clearing all progress
        #[arg(long)]
        yes: bool,
    },

    /// Show or change configuration
    Config {
        /// Config key (catalog, log-level)
        key: Option<String>,

        /// New value for the key
        value: Option<String>,
    },
}
