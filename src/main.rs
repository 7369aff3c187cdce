#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use shots_and_roofs::{
    max_coverage_with_policy, parse_events, parse_rescue_input, validate_positions, verdict,
    Policy,
};
use std::io::{self, Read};

#[derive(Parser, Debug)]
#[command(version, about)]
enum Args {
    /// Read a line of 'S' (shot) and 'R' (retaliation) codes
    /// and tell whether every shot was answered.
    Revenge {
        /// Also print why on stderr.
        #[arg(long)]
        explain: bool,
    },
    /// Read "n k" then n sorted positions
    /// and print how many positions a roof of length k covers at best.
    Rescue {
        #[arg(long, value_enum, default_value_t = PolicyKind::Sequential)]
        policy: PolicyKind,
        /// Sequential block size for parallel policies.
        #[arg(long, default_value_t = 4096)]
        block: usize,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyKind {
    Sequential,
    Join,
    Rayon,
}

impl PolicyKind {
    fn with_block(self, block: usize) -> Policy {
        match self {
            PolicyKind::Sequential => Policy::Sequential,
            PolicyKind::Join => Policy::Join(block),
            PolicyKind::Rayon => Policy::Rayon(block),
        }
    }
}

fn revenge(explain: bool) -> Result<()> {
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read events from stdin")?;
    let events = parse_events(&line)?;
    let verdict = verdict(&events);
    log::info!("{} events: {}", events.len(), verdict.reason());
    if explain {
        eprintln!("{}", verdict.reason());
    }
    println!("{}", verdict);
    Ok(())
}

fn rescue(policy: Policy) -> Result<()> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read positions from stdin")?;
    let input = parse_rescue_input(&text)?;
    let span = input.span()?;
    validate_positions(&input.positions)?;
    println!(
        "{}",
        max_coverage_with_policy(&input.positions, span, policy)
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    match Args::parse() {
        Args::Revenge { explain } => revenge(explain),
        Args::Rescue { policy, block } => rescue(policy.with_block(block)),
    }
}
