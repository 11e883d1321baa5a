//! Command-line interface for hanoi_steps.

use clap::{Parser, Subcommand};

/// Step through the Tower of Hanoi solution in the terminal.
#[derive(Parser, Debug)]
#[command(name = "hanoi_steps")]
#[command(about = "Step-through Tower of Hanoi solver", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the terminal visualizer
    Tui {
        /// Number of disks on the starting peg
        #[arg(short, long, default_value = "4")]
        disks: u32,

        /// Auto-play interval in milliseconds
        #[arg(long, default_value = "800")]
        tick_ms: u64,
    },

    /// Print the full move list for a puzzle
    Solve {
        /// Number of disks on the starting peg
        #[arg(short, long, default_value = "4")]
        disks: u32,
    },
}
