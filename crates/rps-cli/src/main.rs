//! rps: terminal harness for the Rock-Paper-Scissors match logic.
//!
//! Subcommands:
//! - play      interactive match on stdin/stdout
//! - simulate  headless matches with random player choices

mod config;
mod session;
mod simulate;

use std::io;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use rps_match_logic::{MatchController, SeededRng};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::ConfigArgs;

#[derive(Parser, Debug)]
#[command(name = "rps", version, about = "Rock-Paper-Scissors against a random computer")]
struct Cli {
    /// Log filter, e.g. `debug` or `rps_match_logic=debug` (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a match interactively
    Play(PlayArgs),
    /// Play many matches with random player choices and report the tallies
    Simulate(SimulateArgs),
}

#[derive(Args, Debug)]
struct PlayArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Fixed seed for the computer's choices
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Number of matches to play
    #[arg(long, default_value_t = 1000)]
    matches: u32,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn init_tracing(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());
    debug!(?cli, "starting");

    match cli.command {
        Command::Play(args) => {
            let config = args.config.resolve()?;
            let rng = match args.seed {
                Some(seed) => SeededRng::new(seed),
                None => SeededRng::from_entropy(),
            };
            let mut controller = MatchController::new(config, rng);
            let stdin = io::stdin();
            session::run(&mut controller, stdin.lock(), io::stdout().lock())
        }
        Command::Simulate(args) => {
            let config = args.config.resolve()?;
            let report = simulate::simulate(config, args.matches, args.seed);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                simulate::print_report(&report, &mut io::stdout().lock())?;
            }
            Ok(())
        }
    }
}
