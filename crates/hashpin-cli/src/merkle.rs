//! # Proof Reduction
//!
//! Folds a proof into a leaf exactly as the ledger does: each step is
//! `keccak256(running ‖ sibling)` in the order given, never sorted. The
//! final element of a pin proof is the nonce word.

use anyhow::{Context, Result};
use clap::Args;

use crate::digest::{format_hash, keccak256, parse_hash, Hash};

pub fn combine(running: &Hash, sibling: &Hash) -> Hash {
    keccak256(&[running, sibling])
}

pub fn reduce(leaf: &Hash, proof: &[Hash]) -> Hash {
    proof
        .iter()
        .fold(*leaf, |running, sibling| combine(&running, sibling))
}

/// Arguments for `hashpin reduce`.
#[derive(Args, Debug)]
pub struct ReduceArgs {
    /// Leaf to start from.
    #[arg(long)]
    pub leaf: String,

    /// Proof elements in order; the nonce word goes last.
    #[arg(long = "proof", value_name = "HEX", num_args = 0..)]
    pub proof: Vec<String>,

    /// Expected result. When given, the command fails on mismatch.
    #[arg(long)]
    pub expect: Option<String>,
}

pub fn run_reduce(args: &ReduceArgs) -> Result<u8> {
    let leaf = parse_hash(&args.leaf).context("invalid --leaf")?;
    let proof = args
        .proof
        .iter()
        .map(|element| parse_hash(element))
        .collect::<Result<Vec<_>, _>>()
        .context("invalid --proof element")?;

    let reduced = reduce(&leaf, &proof);
    println!("{}", format_hash(&reduced));

    match &args.expect {
        Some(expected) => {
            let expected = parse_hash(expected).context("invalid --expect")?;
            Ok(if expected == reduced { 0 } else { 1 })
        }
        None => Ok(0),
    }
}
