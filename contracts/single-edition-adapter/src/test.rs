#![cfg(test)]

use super::*;
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Bytes, BytesN, Env, String, U256,
};

struct Setup<'a> {
    env: Env,
    hashpin: Address,
    client: SingleEditionAdapterClient<'a>,
}

fn setup<'a>() -> Setup<'a> {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register_contract(None, SingleEditionAdapter);
    let client = SingleEditionAdapterClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    // stands in for the hashpin ledger
    let hashpin = Address::generate(&env);

    client.initialize(
        &admin,
        &hashpin,
        &String::from_str(&env, "Hashpin NFT"),
        &String::from_str(&env, "HPIN"),
    );

    Setup {
        env,
        hashpin,
        client,
    }
}

fn sample_hash(env: &Env, fill: u8) -> BytesN<32> {
    BytesN::from_array(env, &[fill; 32])
}

#[test]
fn test_collection_metadata() {
    let Setup { env, hashpin, client } = setup();

    assert_eq!(client.name(), String::from_str(&env, "Hashpin NFT"));
    assert_eq!(client.symbol(), String::from_str(&env, "HPIN"));
    assert_eq!(client.hashpin_contract(), hashpin);
}

#[test]
fn test_initialize_twice_fails() {
    let Setup { env, hashpin, client } = setup();

    let result = client.try_initialize(
        &Address::generate(&env),
        &hashpin,
        &String::from_str(&env, "Other"),
        &String::from_str(&env, "OTH"),
    );
    assert_eq!(result, Err(Ok(AdapterError::AlreadyInitialized)));
}

#[test]
fn test_mint_flow() {
    let Setup { env, hashpin, client } = setup();

    let owner = Address::generate(&env);
    let hash = sample_hash(&env, 42);
    let uri = Bytes::from_slice(&env, b"ipfs://QmSampleCID");

    let token_id = client.mint(&hashpin, &owner, &hash, &uri);

    assert_eq!(token_id, client.hash_to_token_id(&hash));
    assert_eq!(client.owner_of(&token_id), owner);
    assert_eq!(client.token_uri(&token_id), uri);
    assert_eq!(client.balance_of(&owner), 1);
    assert_eq!(client.get_hash_by_token_id(&token_id), hash);
    assert!(client.is_hash_minted(&hash));
    assert!(!client.is_hash_minted(&sample_hash(&env, 43)));
}

#[test]
fn test_mint_twice_fails() {
    let Setup { env, hashpin, client } = setup();

    let owner = Address::generate(&env);
    let hash = sample_hash(&env, 42);

    client.mint(&hashpin, &owner, &hash, &Bytes::new(&env));

    let result = client.try_mint(
        &hashpin,
        &owner,
        &hash,
        &Bytes::from_slice(&env, b"different URI"),
    );
    assert_eq!(result, Err(Ok(AdapterError::AlreadyMinted)));
}

#[test]
fn test_direct_mint_is_unauthorized() {
    let Setup { env, client, .. } = setup();

    let attacker = Address::generate(&env);
    let hash = sample_hash(&env, 42);

    let result = client.try_mint(&attacker, &attacker, &hash, &Bytes::new(&env));
    assert_eq!(result, Err(Ok(AdapterError::Unauthorized)));
    assert!(!client.is_hash_minted(&hash));
}

#[test]
fn test_mint_before_initialize_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register_contract(None, SingleEditionAdapter);
    let client = SingleEditionAdapterClient::new(&env, &contract_id);

    let anyone = Address::generate(&env);
    let result = client.try_mint(&anyone, &anyone, &sample_hash(&env, 1), &Bytes::new(&env));
    assert_eq!(result, Err(Ok(AdapterError::NotInitialized)));
}

#[test]
fn test_unminted_queries_not_found() {
    let Setup { env, client, .. } = setup();

    let token_id = client.hash_to_token_id(&sample_hash(&env, 9));

    assert_eq!(
        client.try_get_hash_by_token_id(&token_id),
        Err(Ok(AdapterError::NotFound))
    );
    assert_eq!(client.try_owner_of(&token_id), Err(Ok(AdapterError::NotFound)));
    assert_eq!(client.try_token_uri(&token_id), Err(Ok(AdapterError::NotFound)));
}

#[test]
fn test_hash_token_id_conversion() {
    let Setup { env, client, .. } = setup();

    let mut raw = [0u8; 32];
    raw[31] = 0xff;
    let hash = BytesN::from_array(&env, &raw);

    let token_id = client.hash_to_token_id(&hash);
    assert_eq!(token_id, U256::from_u32(&env, 0xff));
    assert_eq!(client.token_id_to_hash(&token_id), hash);
}

#[test]
fn test_transfer() {
    let Setup { env, hashpin, client } = setup();

    let owner = Address::generate(&env);
    let receiver = Address::generate(&env);
    let token_id = client.mint(&hashpin, &owner, &sample_hash(&env, 42), &Bytes::new(&env));

    client.transfer(&owner, &receiver, &token_id);

    assert_eq!(client.owner_of(&token_id), receiver);
    assert_eq!(client.balance_of(&owner), 0);
    assert_eq!(client.balance_of(&receiver), 1);
}

#[test]
fn test_holdings_outlive_default_entry_ttl() {
    let Setup { env, hashpin, client } = setup();

    let owner = Address::generate(&env);
    let receiver = Address::generate(&env);
    let token_id = client.mint(&hashpin, &owner, &sample_hash(&env, 42), &Bytes::new(&env));

    env.ledger().with_mut(|li| li.sequence_number += 20_000);

    client.transfer(&owner, &receiver, &token_id);
    assert_eq!(client.balance_of(&receiver), 1);

    env.ledger().with_mut(|li| li.sequence_number += 20_000);

    client.transfer(&receiver, &owner, &token_id);
    assert_eq!(client.owner_of(&token_id), owner);
    assert_eq!(client.balance_of(&owner), 1);
    assert_eq!(client.balance_of(&receiver), 0);
}

#[test]
fn test_transfer_by_non_owner_fails() {
    let Setup { env, hashpin, client } = setup();

    let owner = Address::generate(&env);
    let thief = Address::generate(&env);
    let token_id = client.mint(&hashpin, &owner, &sample_hash(&env, 42), &Bytes::new(&env));

    let result = client.try_transfer(&thief, &thief, &token_id);
    assert_eq!(result, Err(Ok(AdapterError::NotOwner)));
    assert_eq!(client.owner_of(&token_id), owner);
}

#[test]
fn test_rebinding_hashpin_revokes_old_minter() {
    let Setup { env, hashpin, client } = setup();

    let new_hashpin = Address::generate(&env);
    client.set_hashpin_contract(&new_hashpin);

    let owner = Address::generate(&env);
    let result = client.try_mint(&hashpin, &owner, &sample_hash(&env, 1), &Bytes::new(&env));
    assert_eq!(result, Err(Ok(AdapterError::Unauthorized)));

    client.mint(&new_hashpin, &owner, &sample_hash(&env, 1), &Bytes::new(&env));
    assert!(client.is_hash_minted(&sample_hash(&env, 1)));
}
