//! Contract events: the append-only history off-chain observers replay
//! to follow pins, claims and administration.

use soroban_sdk::{symbol_short, Address, Bytes, BytesN, Env, U256};

pub fn hash_pinned(
    env: &Env,
    pinner: &Address,
    pow_hash: &BytesN<32>,
    metadata: &Bytes,
    timestamp: u64,
) {
    env.events().publish(
        (symbol_short!("pinned"), pinner.clone(), pow_hash.clone()),
        (metadata.clone(), timestamp),
    );
}

pub fn hash_claimed(
    env: &Env,
    claimer: &Address,
    original_hash: &BytesN<32>,
    adapter: &Address,
    token_id: &U256,
) {
    env.events().publish(
        (
            symbol_short!("claimed"),
            claimer.clone(),
            original_hash.clone(),
            adapter.clone(),
        ),
        token_id.clone(),
    );
}

pub fn difficulty_updated(env: &Env, bits: u32) {
    env.events().publish((symbol_short!("set_diff"),), bits);
}

pub fn adapter_whitelisted(env: &Env, adapter: &Address, whitelisted: bool) {
    env.events()
        .publish((symbol_short!("whitelist"), adapter.clone()), whitelisted);
}

pub fn admin_changed(env: &Env, previous: &Address, admin: &Address) {
    env.events().publish(
        (symbol_short!("set_admin"), previous.clone()),
        admin.clone(),
    );
}
