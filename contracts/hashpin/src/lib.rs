#![no_std]

#[cfg(test)]
extern crate std;

use soroban_sdk::{contract, Address, Bytes, BytesN, Env, Vec, U256};

mod contract_admin;
mod contract_claim;
mod contract_difficulty;
mod contract_pin;
mod contract_registry;
mod errors;
mod events;
mod merkle;
mod pow;
mod storage;
mod storage_types;

#[cfg(test)]
mod test_utils;

pub use errors::Error;
pub use storage_types::PinRecord;

pub const INITIAL_DIFFICULTY: u32 = 4;
pub const MAX_DIFFICULTY: u32 = 256;

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contract]
pub struct HashpinContract;

pub trait AdminTrait {
    /// Bind the administrator. Only can be called once.
    fn initialize(env: Env, admin: Address) -> Result<(), Error>;

    fn admin(env: Env) -> Result<Address, Error>;

    fn transfer_admin(env: Env, new_admin: Address) -> Result<(), Error>;
}

pub trait DifficultyTrait {
    fn set_difficulty(env: Env, bits: u32) -> Result<(), Error>;

    fn get_difficulty(env: Env) -> u32;

    fn meets_difficulty(env: Env, hash: BytesN<32>) -> bool;
}

pub trait PinTrait {
    fn pin_hash(
        env: Env,
        pinner: Address,
        original_hash: BytesN<32>,
        nonce: U256,
        metadata: Bytes,
    ) -> Result<BytesN<32>, Error>;

    fn get_hash_details(env: Env, pow_hash: BytesN<32>) -> Result<PinRecord, Error>;

    fn verify_hash(env: Env, original_hash: BytesN<32>, proof: Vec<BytesN<32>>)
        -> Option<Address>;

    fn reduce_proof(env: Env, leaf: BytesN<32>, proof: Vec<BytesN<32>>) -> BytesN<32>;

    fn compute_pow_hash(env: Env, original_hash: BytesN<32>, nonce: U256) -> BytesN<32>;
}

pub trait RegistryTrait {
    fn set_adapter_whitelisted(env: Env, adapter: Address, whitelisted: bool)
        -> Result<(), Error>;

    fn is_whitelisted(env: Env, adapter: Address) -> bool;
}

pub trait ClaimTrait {
    fn claim_hash(
        env: Env,
        claimer: Address,
        leaf: BytesN<32>,
        proof: Vec<BytesN<32>>,
        adapter: Address,
        metadata: Bytes,
    ) -> Result<U256, Error>;
}
