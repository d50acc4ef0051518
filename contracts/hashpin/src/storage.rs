use soroban_sdk::{Address, BytesN, Env};

use crate::{
    storage_types::{DataKey, PinRecord},
    INITIAL_DIFFICULTY, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD,
    PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD,
};

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has::<DataKey>(&DataKey::Admin)
}
pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage()
        .instance()
        .get::<DataKey, Address>(&DataKey::Admin)
}
pub fn set_admin(env: &Env, admin: &Address) {
    env.storage()
        .instance()
        .set::<DataKey, Address>(&DataKey::Admin, admin);
}

pub fn get_difficulty(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get::<DataKey, u32>(&DataKey::Difficulty)
        .unwrap_or(INITIAL_DIFFICULTY)
}
pub fn set_difficulty(env: &Env, bits: u32) {
    env.storage()
        .instance()
        .set::<DataKey, u32>(&DataKey::Difficulty, &bits);
}

pub fn has_pin(env: &Env, pow_hash: &BytesN<32>) -> bool {
    let pin_key = DataKey::Pin(pow_hash.clone());

    env.storage().persistent().has::<DataKey>(&pin_key)
}
pub fn get_pin(env: &Env, pow_hash: &BytesN<32>) -> Option<PinRecord> {
    let pin_key = DataKey::Pin(pow_hash.clone());
    let pin = env
        .storage()
        .persistent()
        .get::<DataKey, PinRecord>(&pin_key);

    if pin.is_some() {
        extend_persistent_ttl(env, &pin_key);
    }

    pin
}
// Pins are append-only: there is no remove counterpart.
pub fn set_pin(env: &Env, pow_hash: &BytesN<32>, pin: &PinRecord) {
    let pin_key = DataKey::Pin(pow_hash.clone());

    env.storage()
        .persistent()
        .set::<DataKey, PinRecord>(&pin_key, pin);

    extend_persistent_ttl(env, &pin_key);
}

pub fn is_adapter_whitelisted(env: &Env, adapter: &Address) -> bool {
    let adapter_key = DataKey::WhitelistedAdapter(adapter.clone());
    let whitelisted = env
        .storage()
        .persistent()
        .get::<DataKey, bool>(&adapter_key)
        .unwrap_or(false);

    if whitelisted {
        extend_persistent_ttl(env, &adapter_key);
    }

    whitelisted
}
pub fn set_adapter_whitelisted(env: &Env, adapter: &Address, whitelisted: bool) {
    let adapter_key = DataKey::WhitelistedAdapter(adapter.clone());

    if whitelisted {
        env.storage()
            .persistent()
            .set::<DataKey, bool>(&adapter_key, &true);

        extend_persistent_ttl(env, &adapter_key);
    } else {
        env.storage().persistent().remove::<DataKey>(&adapter_key);
    }
}
