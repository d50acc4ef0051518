//! # hashpin CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hashpin_cli::digest::{run_hash, HashArgs};
use hashpin_cli::merkle::{run_reduce, ReduceArgs};
use hashpin_cli::pinfile::{run_pin_file, PinFileArgs};
use hashpin_cli::pow::{run_mine, run_pow_hash, MineArgs, PowHashArgs};

/// Hashpin off-chain tooling: hash files, mine proof-of-work nonces, reduce
/// proofs and manage `.pin` artifacts.
#[derive(Parser, Debug)]
#[command(name = "hashpin", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Keccak-256 of a file's contents.
    Hash(HashArgs),

    /// Search for a nonce meeting a difficulty.
    Mine(MineArgs),

    /// Compute the proof-of-work hash of one (hash, nonce) pair.
    PowHash(PowHashArgs),

    /// Reduce a leaf through a proof.
    Reduce(ReduceArgs),

    /// Create or check `.pin` files.
    PinFile(PinFileArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Hash(args) => run_hash(&args),
        Commands::Mine(args) => run_mine(&args),
        Commands::PowHash(args) => run_pow_hash(&args),
        Commands::Reduce(args) => run_reduce(&args),
        Commands::PinFile(args) => run_pin_file(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
