//! # Digest Helpers and the `hash` Subcommand
//!
//! Keccak-256 as used by the ledger, plus the `0x`-prefixed hex form every
//! hash takes on the command line and in `.pin` files.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tiny_keccak::{Hasher, Keccak};

use crate::error::CliError;

/// A 32-byte hash or proof word.
pub type Hash = [u8; 32];

/// Keccak-256 over the concatenation of `parts`.
pub fn keccak256(parts: &[&[u8]]) -> Hash {
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];

    for part in parts {
        hasher.update(part);
    }
    hasher.finalize(&mut output);

    output
}

/// `0x`-prefixed lowercase hex.
pub fn format_hash(hash: &Hash) -> String {
    format!("0x{}", hex::encode(hash))
}

/// Parses a 32-byte hash, with or without the `0x` prefix.
pub fn parse_hash(input: &str) -> Result<Hash, CliError> {
    let digits = input.strip_prefix("0x").unwrap_or(input);
    decode_32(input, digits)
}

/// Parses a 32-byte hash that must carry the `0x` prefix.
pub fn parse_prefixed_hash(input: &str) -> Result<Hash, CliError> {
    let digits = input
        .strip_prefix("0x")
        .ok_or_else(|| CliError::InvalidHex(input.to_string()))?;
    decode_32(input, digits)
}

fn decode_32(input: &str, digits: &str) -> Result<Hash, CliError> {
    let bytes = hex::decode(digits).map_err(|_| CliError::InvalidHex(input.to_string()))?;

    bytes
        .as_slice()
        .try_into()
        .map_err(|_| CliError::InvalidLength {
            expected: 32,
            actual: bytes.len(),
        })
}

/// Arguments for `hashpin hash`.
#[derive(Args, Debug)]
pub struct HashArgs {
    /// File whose contents are hashed.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Prints the original hash of a file: keccak-256 of its bytes.
pub fn run_hash(args: &HashArgs) -> Result<u8> {
    let content = std::fs::read(&args.file)
        .with_context(|| format!("failed to read file: {}", args.file.display()))?;

    tracing::debug!(file = %args.file.display(), size = content.len(), "hashing file");

    println!("{}", format_hash(&keccak256(&[&content])));

    Ok(0)
}
