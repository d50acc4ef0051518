//! # hashpin-cli — Off-Chain Companion for the Hashpin Ledger
//!
//! The ledger contract checks one nonce per call and never searches. This
//! crate does the off-chain half of the protocol:
//!
//! - `hashpin hash` — keccak-256 of a file, the original hash to pin.
//! - `hashpin mine` — search a proof-of-work nonce for a difficulty.
//! - `hashpin pow-hash` — compute `keccak256(hash ‖ nonce)` for one nonce.
//! - `hashpin reduce` — fold a Merkle proof into a leaf.
//! - `hashpin pin-file` — write and check portable `.pin` proof documents.
//!
//! ```bash
//! hashpin mine --hash 0x5c6f... --difficulty 12
//! hashpin pin-file check report.pdf.pin
//! ```

pub mod digest;
pub mod error;
pub mod merkle;
pub mod pinfile;
pub mod pow;

pub use error::CliError;
