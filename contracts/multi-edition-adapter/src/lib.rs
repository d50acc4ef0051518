#![no_std]
//! Multi-edition hashpin adapter: every claimed hash becomes one token id
//! with a fixed number of fungible editions, all under a single collection.

use hashpin_adapter_interface::{self as interface, AdapterError, HashpinAdapter};
use soroban_sdk::{
    contract, contractimpl, symbol_short, Address, Bytes, BytesN, Env, String, U256,
};

mod storage;
mod storage_types;


use storage::{
    extend_instance_ttl, get_admin, get_balance, get_collection, get_edition, get_hashpin,
    has_admin, has_edition, set_admin, set_balance, set_collection, set_edition, set_hashpin,
};
use storage_types::{Collection, Edition};

#[contract]
pub struct MultiEditionAdapter;

#[contractimpl]
impl MultiEditionAdapter {
    /// Bind the admin, the minting ledger, the collection name/symbol and the
    /// number of editions issued per claim. Only can be called once.
    pub fn initialize(
        env: Env,
        admin: Address,
        hashpin: Address,
        name: String,
        symbol: String,
        editions: u32,
    ) -> Result<(), AdapterError> {
        if has_admin(&env) {
            return Err(AdapterError::AlreadyInitialized);
        }

        if editions == 0 {
            return Err(AdapterError::InvalidEditions);
        }

        set_admin(&env, &admin);
        set_hashpin(&env, &hashpin);
        set_collection(
            &env,
            &Collection {
                name,
                symbol,
                editions,
            },
        );

        extend_instance_ttl(&env);

        Ok(())
    }

    pub fn set_hashpin_contract(env: Env, hashpin: Address) -> Result<(), AdapterError> {
        let admin = get_admin(&env).ok_or(AdapterError::NotInitialized)?;

        admin.require_auth();

        set_hashpin(&env, &hashpin);

        extend_instance_ttl(&env);

        Ok(())
    }

    pub fn hashpin_contract(env: Env) -> Result<Address, AdapterError> {
        get_hashpin(&env).ok_or(AdapterError::NotInitialized)
    }

    pub fn name(env: Env) -> Result<String, AdapterError> {
        Ok(Self::collection(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, AdapterError> {
        Ok(Self::collection(&env)?.symbol)
    }

    pub fn editions(env: Env) -> Result<u32, AdapterError> {
        Ok(Self::collection(&env)?.editions)
    }

    pub fn balance_of(env: Env, owner: Address, token_id: U256) -> u32 {
        get_balance(&env, &owner, &token_id)
    }

    /// Units ever issued for `token_id`; zero when unminted.
    pub fn total_supply(env: Env, token_id: U256) -> u32 {
        get_edition(&env, &token_id)
            .map(|edition| edition.supply)
            .unwrap_or(0)
    }

    pub fn uri(env: Env, token_id: U256) -> Result<Bytes, AdapterError> {
        get_edition(&env, &token_id)
            .map(|edition| edition.uri)
            .ok_or(AdapterError::NotFound)
    }

    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        token_id: U256,
        amount: u32,
    ) -> Result<(), AdapterError> {
        from.require_auth();

        if amount == 0 {
            return Err(AdapterError::InvalidAmount);
        }

        if !has_edition(&env, &token_id) {
            return Err(AdapterError::NotFound);
        }

        let from_balance = get_balance(&env, &from, &token_id);
        if from_balance < amount {
            return Err(AdapterError::InsufficientBalance);
        }

        if from != to {
            set_balance(&env, &from, &token_id, from_balance - amount);
            set_balance(
                &env,
                &to,
                &token_id,
                get_balance(&env, &to, &token_id) + amount,
            );
        }

        env.events()
            .publish((symbol_short!("transfer"), from, to), (token_id, amount));

        extend_instance_ttl(&env);

        Ok(())
    }
}

impl MultiEditionAdapter {
    fn collection(env: &Env) -> Result<Collection, AdapterError> {
        get_collection(env).ok_or(AdapterError::NotInitialized)
    }
}

#[contractimpl]
impl HashpinAdapter for MultiEditionAdapter {
    fn mint(
        env: Env,
        minter: Address,
        owner: Address,
        hash: BytesN<32>,
        metadata: Bytes,
    ) -> Result<U256, AdapterError> {
        let hashpin = get_hashpin(&env).ok_or(AdapterError::NotInitialized)?;

        if minter != hashpin {
            return Err(AdapterError::Unauthorized);
        }

        minter.require_auth();

        let token_id = interface::hash_to_token_id(&env, &hash);

        if has_edition(&env, &token_id) {
            return Err(AdapterError::AlreadyMinted);
        }

        let supply = Self::collection(&env)?.editions;

        set_edition(
            &env,
            &token_id,
            &Edition {
                hash,
                uri: metadata,
                supply,
            },
        );
        set_balance(&env, &owner, &token_id, supply);

        env.events()
            .publish((symbol_short!("mint"), owner), (token_id.clone(), supply));

        extend_instance_ttl(&env);

        Ok(token_id)
    }

    fn is_hash_minted(env: Env, hash: BytesN<32>) -> bool {
        has_edition(&env, &interface::hash_to_token_id(&env, &hash))
    }

    fn hash_to_token_id(env: Env, hash: BytesN<32>) -> U256 {
        interface::hash_to_token_id(&env, &hash)
    }

    fn token_id_to_hash(env: Env, token_id: U256) -> BytesN<32> {
        interface::token_id_to_hash(&env, &token_id)
    }

    fn get_hash_by_token_id(env: Env, token_id: U256) -> Result<BytesN<32>, AdapterError> {
        get_edition(&env, &token_id)
            .map(|edition| edition.hash)
            .ok_or(AdapterError::NotFound)
    }
}
