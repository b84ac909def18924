use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::records::DEFAULT_RECENT_LIMIT;
use crate::variant::Variant;

#[derive(Parser)]
#[command(name = "baseball-records", version, about = "Number baseball leaderboards")]
pub struct Args {
    /// Directory holding saved records and logs
    #[arg(long, global = true, env = "BASEBALL_RECORDS_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Print output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Record a finished game
    Submit {
        /// Variant key: m3e, m3i, m4e or m4i
        variant: Variant,
        /// Number of guesses the game took
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        attempts: u32,
    },

    /// Show the top 10 for a variant
    Leaderboard { variant: Variant },

    /// Show statistics for one variant, or all of them
    Stats { variant: Option<Variant> },

    /// Show the most recent records across all variants
    Recent {
        #[arg(long, default_value_t = DEFAULT_RECENT_LIMIT)]
        limit: usize,
    },

    /// Show how many records were set each month
    Monthly,
}
