use soroban_sdk::{contractimpl, Address, Bytes, BytesN, Env, Vec, U256};

use crate::{
    errors::Error,
    events, merkle, pow,
    storage::{extend_instance_ttl, get_difficulty, get_pin, has_admin, has_pin, set_pin},
    storage_types::PinRecord,
    HashpinContract, HashpinContractClient, PinTrait,
};

#[contractimpl]
impl PinTrait for HashpinContract {
    fn pin_hash(
        env: Env,
        pinner: Address,
        original_hash: BytesN<32>,
        nonce: U256,
        metadata: Bytes,
    ) -> Result<BytesN<32>, Error> {
        pinner.require_auth();

        if !has_admin(&env) {
            return Err(Error::NotInitialized);
        }

        let pow_hash = pow::pow_hash(&env, &original_hash, &nonce);

        if !pow::meets_difficulty(&pow_hash.to_array(), get_difficulty(&env)) {
            return Err(Error::DifficultyNotMet);
        }

        if has_pin(&env, &pow_hash) {
            return Err(Error::AlreadyPinned);
        }

        let pin = PinRecord {
            pinner,
            original_hash,
            metadata,
            timestamp: env.ledger().timestamp(),
        };

        set_pin(&env, &pow_hash, &pin);
        events::hash_pinned(&env, &pin.pinner, &pow_hash, &pin.metadata, pin.timestamp);

        extend_instance_ttl(&env);

        Ok(pow_hash)
    }

    fn get_hash_details(env: Env, pow_hash: BytesN<32>) -> Result<PinRecord, Error> {
        get_pin(&env, &pow_hash).ok_or(Error::NotFound)
    }

    // Unknown hashes resolve to `None` rather than an error so callers can
    // check existence softly; `claim_hash` is the hard-failing counterpart.
    fn verify_hash(
        env: Env,
        original_hash: BytesN<32>,
        proof: Vec<BytesN<32>>,
    ) -> Option<Address> {
        let (_, pin) = merkle::resolve(&env, &original_hash, &proof);

        pin.map(|pin| pin.pinner)
    }

    fn reduce_proof(env: Env, leaf: BytesN<32>, proof: Vec<BytesN<32>>) -> BytesN<32> {
        merkle::reduce(&env, &leaf, &proof)
    }

    fn compute_pow_hash(env: Env, original_hash: BytesN<32>, nonce: U256) -> BytesN<32> {
        pow::pow_hash(&env, &original_hash, &nonce)
    }
}
