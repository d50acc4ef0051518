#![no_std]
//! Single-edition hashpin adapter: one transferable token per claimed hash,
//! token id equal to the hash read as a big-endian integer.

use hashpin_adapter_interface::{self as interface, AdapterError, HashpinAdapter};
use soroban_sdk::{
    contract, contractimpl, symbol_short, Address, Bytes, BytesN, Env, String, U256,
};

mod storage;
mod storage_types;

#[cfg(test)]
mod test;

use storage::{
    extend_instance_ttl, get_admin, get_balance, get_collection, get_hashpin, get_token,
    has_admin, has_token, set_admin, set_balance, set_collection, set_hashpin, set_token,
};
use storage_types::{Collection, Token};

#[contract]
pub struct SingleEditionAdapter;

#[contractimpl]
impl SingleEditionAdapter {
    /// Bind the admin, the hashpin ledger allowed to mint, and the collection
    /// name/symbol. Only can be called once.
    pub fn initialize(
        env: Env,
        admin: Address,
        hashpin: Address,
        name: String,
        symbol: String,
    ) -> Result<(), AdapterError> {
        if has_admin(&env) {
            return Err(AdapterError::AlreadyInitialized);
        }

        set_admin(&env, &admin);
        set_hashpin(&env, &hashpin);
        set_collection(&env, &Collection { name, symbol });

        extend_instance_ttl(&env);

        Ok(())
    }

    /// Rebind the minting ledger. Admin only.
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
        get_collection(&env)
            .map(|collection| collection.name)
            .ok_or(AdapterError::NotInitialized)
    }

    pub fn symbol(env: Env) -> Result<String, AdapterError> {
        get_collection(&env)
            .map(|collection| collection.symbol)
            .ok_or(AdapterError::NotInitialized)
    }

    pub fn owner_of(env: Env, token_id: U256) -> Result<Address, AdapterError> {
        get_token(&env, &token_id)
            .map(|token| token.owner)
            .ok_or(AdapterError::NotFound)
    }

    pub fn token_uri(env: Env, token_id: U256) -> Result<Bytes, AdapterError> {
        get_token(&env, &token_id)
            .map(|token| token.uri)
            .ok_or(AdapterError::NotFound)
    }

    pub fn balance_of(env: Env, owner: Address) -> u32 {
        get_balance(&env, &owner)
    }

    pub fn transfer(env: Env, from: Address, to: Address, token_id: U256) -> Result<(), AdapterError> {
        from.require_auth();

        let mut token = get_token(&env, &token_id).ok_or(AdapterError::NotFound)?;

        if token.owner != from {
            return Err(AdapterError::NotOwner);
        }

        if from != to {
            set_balance(&env, &from, get_balance(&env, &from) - 1);
            set_balance(&env, &to, get_balance(&env, &to) + 1);

            token.owner = to.clone();
            set_token(&env, &token_id, &token);
        }

        env.events()
            .publish((symbol_short!("transfer"), from, to), token_id);

        extend_instance_ttl(&env);

        Ok(())
    }
}

#[contractimpl]
impl HashpinAdapter for SingleEditionAdapter {
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

        if has_token(&env, &token_id) {
            return Err(AdapterError::AlreadyMinted);
        }

        let token = Token {
            owner: owner.clone(),
            hash,
            uri: metadata,
        };

        set_token(&env, &token_id, &token);
        set_balance(&env, &owner, get_balance(&env, &owner) + 1);

        env.events()
            .publish((symbol_short!("mint"), owner), token_id.clone());

        extend_instance_ttl(&env);

        Ok(token_id)
    }

    fn is_hash_minted(env: Env, hash: BytesN<32>) -> bool {
        has_token(&env, &interface::hash_to_token_id(&env, &hash))
    }

    fn hash_to_token_id(env: Env, hash: BytesN<32>) -> U256 {
        interface::hash_to_token_id(&env, &hash)
    }

    fn token_id_to_hash(env: Env, token_id: U256) -> BytesN<32> {
        interface::token_id_to_hash(&env, &token_id)
    }

    fn get_hash_by_token_id(env: Env, token_id: U256) -> Result<BytesN<32>, AdapterError> {
        get_token(&env, &token_id)
            .map(|token| token.hash)
            .ok_or(AdapterError::NotFound)
    }
}
