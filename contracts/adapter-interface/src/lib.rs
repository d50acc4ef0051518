#![no_std]
//! Minting adapter capability.
//!
//! Every adapter contract a hashpin ledger can dispatch claims to implements
//! [`HashpinAdapter`]. The ledger only ever talks to adapters through the
//! generated [`HashpinAdapterClient`], keyed by the whitelisted address.

#[cfg(test)]
extern crate std;

use soroban_sdk::{contractclient, contracterror, Address, Bytes, BytesN, Env, U256};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AdapterError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    AlreadyMinted = 4,
    NotFound = 5,
    NotOwner = 6,
    InsufficientBalance = 7,
    InvalidEditions = 8,
    InvalidAmount = 9,
}

#[contractclient(name = "HashpinAdapterClient")]
pub trait HashpinAdapter {
    /// Mint the token for `hash` to `owner`.
    ///
    /// `minter` must be the hashpin ledger this adapter is bound to. When the
    /// ledger calls in directly its address is authorized by the host, so a
    /// direct external call can neither name another minter nor forge this one.
    fn mint(
        env: Env,
        minter: Address,
        owner: Address,
        hash: BytesN<32>,
        metadata: Bytes,
    ) -> Result<U256, AdapterError>;

    fn is_hash_minted(env: Env, hash: BytesN<32>) -> bool;

    fn hash_to_token_id(env: Env, hash: BytesN<32>) -> U256;

    fn token_id_to_hash(env: Env, token_id: U256) -> BytesN<32>;

    /// Fails with [`AdapterError::NotFound`] for a token id nothing was minted under.
    fn get_hash_by_token_id(env: Env, token_id: U256) -> Result<BytesN<32>, AdapterError>;
}

/// Reads the 32 hash bytes as a big-endian 256-bit integer.
pub fn hash_to_token_id(env: &Env, hash: &BytesN<32>) -> U256 {
    U256::from_be_bytes(env, &Bytes::from_array(env, &hash.to_array()))
}

/// Exact inverse of [`hash_to_token_id`].
pub fn token_id_to_hash(env: &Env, token_id: &U256) -> BytesN<32> {
    let mut hash = [0u8; 32];

    token_id.to_be_bytes().copy_into_slice(&mut hash);

    BytesN::from_array(env, &hash)
}
