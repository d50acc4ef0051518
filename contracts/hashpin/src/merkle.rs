use soroban_sdk::{Bytes, BytesN, Env, Vec};

use crate::{storage::get_pin, storage_types::PinRecord};

/// `keccak256(running ‖ sibling)`. Order is fixed: pairs are never sorted,
/// so proofs issued against this rule only verify against this rule.
pub fn combine(env: &Env, running: &BytesN<32>, sibling: &BytesN<32>) -> BytesN<32> {
    let mut preimage = Bytes::from_array(env, &running.to_array());
    preimage.extend_from_array(&sibling.to_array());

    env.crypto().keccak256(&preimage).to_bytes()
}

/// Folds `proof` into `leaf` front to back. The last element is the pin's
/// proof-of-work nonce, so a single pinned hash reduces with `[nonce]`.
pub fn reduce(env: &Env, leaf: &BytesN<32>, proof: &Vec<BytesN<32>>) -> BytesN<32> {
    proof
        .iter()
        .fold(leaf.clone(), |running, sibling| combine(env, &running, &sibling))
}

/// Reduces the proof and looks the result up in the pin ledger.
pub fn resolve(
    env: &Env,
    leaf: &BytesN<32>,
    proof: &Vec<BytesN<32>>,
) -> (BytesN<32>, Option<PinRecord>) {
    let pow_hash = reduce(env, leaf, proof);
    let pin = get_pin(env, &pow_hash);

    (pow_hash, pin)
}
