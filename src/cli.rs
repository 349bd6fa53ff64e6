//! Command-line interface for alligator_chess.

use clap::{Parser, Subcommand};

/// Alligator Chess - play Monkey against a scripted Alligator
#[derive(Parser, Debug)]
#[command(name = "alligator_chess")]
#[command(about = "Alligator Chess on a 3x3 board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game against the opponent on stdin/stdout
    Play {
        /// Path to the TOML config file (used only if it exists)
        #[arg(short, long, default_value = "alligator_chess.toml")]
        config: std::path::PathBuf,

        /// Override the opponent's pause before replying, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Print the rules
    Rules,
}
