//! # Proof-of-Work Mining
//!
//! Mirrors the ledger's difficulty rule off-chain: a nonce is valid when
//! `keccak256(original_hash ‖ nonce_be32)` has at least `difficulty`
//! leading zero bits. The ledger evaluates one nonce per call, so the
//! search loop lives here.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Args;

use crate::digest::{format_hash, keccak256, parse_hash, Hash};
use crate::error::CliError;

pub const MAX_DIFFICULTY: u32 = 256;

/// Progress is logged every this many attempts.
const PROGRESS_INTERVAL: u64 = 1_000_000;

/// An unsigned 256-bit nonce, the full width the ledger accepts.
///
/// Stored as its 32-byte big-endian proof word. Parses from decimal or from
/// `0x`-prefixed hex of up to 64 digits, and displays as decimal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Nonce(Hash);

impl Nonce {
    pub const MAX: Nonce = Nonce([0xff; 32]);

    /// The nonce as the 32-byte big-endian proof word.
    pub fn word(&self) -> Hash {
        self.0
    }

    /// The next nonce, or `None` past [`Nonce::MAX`].
    pub fn checked_increment(&self) -> Option<Nonce> {
        let mut word = self.0;

        for byte in word.iter_mut().rev() {
            let (next, carry) = byte.overflowing_add(1);
            *byte = next;

            if !carry {
                return Some(Nonce(word));
            }
        }

        None
    }
}

impl From<u64> for Nonce {
    fn from(value: u64) -> Self {
        let mut word = [0u8; 32];
        word[24..].copy_from_slice(&value.to_be_bytes());
        Nonce(word)
    }
}

impl FromStr for Nonce {
    type Err = CliError;

    fn from_str(input: &str) -> Result<Self, CliError> {
        let invalid = || CliError::InvalidNonce(input.to_string());

        if let Some(digits) = input.strip_prefix("0x") {
            if digits.is_empty() || digits.len() > 64 {
                return Err(invalid());
            }

            let bytes = hex::decode(format!("{digits:0>64}")).map_err(|_| invalid())?;
            let mut word = [0u8; 32];
            word.copy_from_slice(&bytes);

            return Ok(Nonce(word));
        }

        if input.is_empty() {
            return Err(invalid());
        }

        let mut word = [0u8; 32];

        for ch in input.chars() {
            let mut carry = ch.to_digit(10).ok_or_else(invalid)?;

            // word = word * 10 + digit
            for byte in word.iter_mut().rev() {
                let value = u32::from(*byte) * 10 + carry;
                *byte = (value & 0xff) as u8;
                carry = value >> 8;
            }

            if carry != 0 {
                return Err(invalid());
            }
        }

        Ok(Nonce(word))
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut word = self.0;
        let mut digits = Vec::new();

        loop {
            let mut remainder = 0u32;

            for byte in word.iter_mut() {
                let value = (remainder << 8) | u32::from(*byte);
                *byte = (value / 10) as u8;
                remainder = value % 10;
            }

            digits.push(char::from(b'0' + remainder as u8));

            if word.iter().all(|byte| *byte == 0) {
                break;
            }
        }

        f.write_str(&digits.iter().rev().collect::<String>())
    }
}

pub fn pow_hash(original: &Hash, nonce: &Nonce) -> Hash {
    keccak256(&[original, &nonce.word()])
}

/// True iff the `bits` most significant bits of `hash` are zero.
pub fn meets_difficulty(hash: &Hash, bits: u32) -> bool {
    if bits > MAX_DIFFICULTY {
        return false;
    }

    let full_bytes = (bits / 8) as usize;
    let remainder_bits = bits % 8;

    if hash[..full_bytes].iter().any(|byte| *byte != 0) {
        return false;
    }

    remainder_bits == 0 || hash[full_bytes] & (0xffu8 << (8 - remainder_bits)) == 0
}

/// A successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mined {
    pub nonce: Nonce,
    pub pow_hash: Hash,
    pub attempts: u64,
}

/// Tries up to `max_attempts` consecutive nonces starting at `start`,
/// stopping early at [`Nonce::MAX`].
pub fn mine(
    original: &Hash,
    difficulty: u32,
    start: Nonce,
    max_attempts: u64,
) -> Result<Mined, CliError> {
    if difficulty > MAX_DIFFICULTY {
        return Err(CliError::InvalidDifficulty(difficulty));
    }

    let mut nonce = start;
    let mut attempts = 0;

    while attempts < max_attempts {
        attempts += 1;

        let hash = pow_hash(original, &nonce);

        if meets_difficulty(&hash, difficulty) {
            tracing::info!(nonce = %nonce, attempts, "nonce found");

            return Ok(Mined {
                nonce,
                pow_hash: hash,
                attempts,
            });
        }

        if attempts % PROGRESS_INTERVAL == 0 {
            tracing::debug!(nonce = %nonce, attempts, "still mining");
        }

        nonce = match nonce.checked_increment() {
            Some(next) => next,
            None => break,
        };
    }

    Err(CliError::NonceNotFound {
        difficulty,
        attempts,
    })
}

/// Arguments for `hashpin mine`.
#[derive(Args, Debug)]
pub struct MineArgs {
    /// Original hash to mine a nonce for (hex, optional 0x prefix).
    #[arg(long)]
    pub hash: String,

    /// Required leading zero bits.
    #[arg(long, default_value_t = 4)]
    pub difficulty: u32,

    /// First nonce tried (decimal or 0x hex).
    #[arg(long, default_value = "0")]
    pub start: Nonce,

    /// Give up after this many nonces.
    #[arg(long, default_value_t = 10_000_000)]
    pub max_attempts: u64,
}

pub fn run_mine(args: &MineArgs) -> Result<u8> {
    let original = parse_hash(&args.hash).context("invalid --hash")?;

    tracing::info!(
        difficulty = args.difficulty,
        start = %args.start,
        max_attempts = args.max_attempts,
        "mining"
    );

    let mined = mine(&original, args.difficulty, args.start, args.max_attempts)?;

    println!("nonce:      {}", mined.nonce);
    println!("nonce word: {}", format_hash(&mined.nonce.word()));
    println!("pow hash:   {}", format_hash(&mined.pow_hash));

    Ok(0)
}

/// Arguments for `hashpin pow-hash`.
#[derive(Args, Debug)]
pub struct PowHashArgs {
    /// Original hash (hex, optional 0x prefix).
    #[arg(long)]
    pub hash: String,

    /// Nonce (decimal or 0x hex, up to 256 bits).
    #[arg(long)]
    pub nonce: Nonce,

    /// Also report whether the result meets this difficulty.
    #[arg(long)]
    pub difficulty: Option<u32>,
}

pub fn run_pow_hash(args: &PowHashArgs) -> Result<u8> {
    let original = parse_hash(&args.hash).context("invalid --hash")?;
    let hash = pow_hash(&original, &args.nonce);

    println!("{}", format_hash(&hash));

    match args.difficulty {
        Some(bits) if meets_difficulty(&hash, bits) => {
            println!("OK: meets difficulty {bits}");
            Ok(0)
        }
        Some(bits) => {
            println!("FAIL: does not meet difficulty {bits}");
            Ok(1)
        }
        None => Ok(0),
    }
}
