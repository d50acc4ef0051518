use soroban_sdk::{Address, Env, U256};

use crate::storage_types::{Collection, DataKey, Edition};

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

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

pub fn get_hashpin(env: &Env) -> Option<Address> {
    env.storage()
        .instance()
        .get::<DataKey, Address>(&DataKey::Hashpin)
}
pub fn set_hashpin(env: &Env, hashpin: &Address) {
    env.storage()
        .instance()
        .set::<DataKey, Address>(&DataKey::Hashpin, hashpin);
}

pub fn get_collection(env: &Env) -> Option<Collection> {
    env.storage()
        .instance()
        .get::<DataKey, Collection>(&DataKey::Collection)
}
pub fn set_collection(env: &Env, collection: &Collection) {
    env.storage()
        .instance()
        .set::<DataKey, Collection>(&DataKey::Collection, collection);
}

pub fn has_edition(env: &Env, token_id: &U256) -> bool {
    env.storage()
        .persistent()
        .has::<DataKey>(&DataKey::Edition(token_id.clone()))
}
pub fn get_edition(env: &Env, token_id: &U256) -> Option<Edition> {
    let edition_key = DataKey::Edition(token_id.clone());
    let edition = env
        .storage()
        .persistent()
        .get::<DataKey, Edition>(&edition_key);

    if edition.is_some() {
        extend_persistent_ttl(env, &edition_key);
    }

    edition
}
pub fn set_edition(env: &Env, token_id: &U256, edition: &Edition) {
    let edition_key = DataKey::Edition(token_id.clone());

    env.storage()
        .persistent()
        .set::<DataKey, Edition>(&edition_key, edition);

    extend_persistent_ttl(env, &edition_key);
}

pub fn get_balance(env: &Env, holder: &Address, token_id: &U256) -> u32 {
    let balance_key = DataKey::Balance(holder.clone(), token_id.clone());
    let balance = env
        .storage()
        .persistent()
        .get::<DataKey, u32>(&balance_key);

    if balance.is_some() {
        extend_persistent_ttl(env, &balance_key);
    }

    balance.unwrap_or(0)
}
pub fn set_balance(env: &Env, holder: &Address, token_id: &U256, balance: u32) {
    let balance_key = DataKey::Balance(holder.clone(), token_id.clone());

    if balance == 0 {
        env.storage().persistent().remove::<DataKey>(&balance_key);
    } else {
        env.storage()
            .persistent()
            .set::<DataKey, u32>(&balance_key, &balance);

        extend_persistent_ttl(env, &balance_key);
    }
}
