//! # CLI Error Types
//!
//! Structured errors for the off-chain hashpin tooling. Subcommand handlers
//! wrap these in `anyhow` context at the binary edge.

use thiserror::Error;

/// Errors from hashing, mining, proof reduction and `.pin` handling.
#[derive(Error, Debug)]
pub enum CliError {
    /// Input was not valid hex (or lacked a required `0x` prefix).
    #[error("invalid hex value {0:?}")]
    InvalidHex(String),

    /// Hex decoded to the wrong number of bytes.
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Nonce that is not decimal or `0x` hex, or does not fit in 256 bits.
    #[error("invalid nonce {0:?}: expected an unsigned 256-bit decimal or 0x hex value")]
    InvalidNonce(String),

    /// Difficulty outside `0..=256`.
    #[error("invalid difficulty {0}: must be between 0 and 256")]
    InvalidDifficulty(u32),

    /// The miner exhausted its attempt budget.
    #[error("no nonce meeting difficulty {difficulty} found in {attempts} attempts")]
    NonceNotFound { difficulty: u32, attempts: u64 },

    /// A proof does not reduce to the expected proof-of-work hash.
    #[error("proof reduces to {actual}, expected {expected}")]
    ProofMismatch { expected: String, actual: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
