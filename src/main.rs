//! hanoi_steps - step through the Tower of Hanoi solution.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use hanoi_steps::plan;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Tui { disks, tick_ms } => {
            hanoi_steps::tui::run(disks, Duration::from_millis(tick_ms))
        }
        Command::Solve { disks } => run_solve(disks),
    }
}

/// Print the numbered move list for `disks` disks.
fn run_solve(disks: u32) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let sequence = plan(disks)?;
    println!("{} disks: {} moves", sequence.disk_count(), sequence.len());
    for (index, mv) in sequence.iter().enumerate() {
        println!("{:>5}. {}", index + 1, mv);
    }
    Ok(())
}
