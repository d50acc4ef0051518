use hashpin_multi_edition_adapter::{MultiEditionAdapter, MultiEditionAdapterClient};
use hashpin_single_edition_adapter::{SingleEditionAdapter, SingleEditionAdapterClient};
use soroban_sdk::{testutils::Address as _, vec, Address, Bytes, BytesN, Env, String, Vec, U256};
use tiny_keccak::{Hasher, Keccak};

use crate::{pow::meets_difficulty, HashpinContract, HashpinContractClient};

pub const TEST_DIFFICULTY: u32 = 8;
pub const EDITIONS: u32 = 5;

pub fn keccak(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];

    for part in parts {
        hasher.update(part);
    }
    hasher.finalize(&mut output);

    output
}

pub fn nonce_bytes(nonce: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&nonce.to_be_bytes());
    word
}

/// Off-chain miner: the first nonce whose `keccak(original ‖ nonce)` has at
/// least `bits` leading zero bits.
pub fn find_nonce(original: &[u8; 32], bits: u32) -> (u64, [u8; 32]) {
    (0u64..)
        .map(|nonce| (nonce, keccak(&[original, &nonce_bytes(nonce)])))
        .find(|(_, hash)| meets_difficulty(hash, bits))
        .unwrap()
}

/// The first nonce that does not satisfy `bits`.
pub fn find_failing_nonce(original: &[u8; 32], bits: u32) -> u64 {
    (0u64..)
        .find(|nonce| !meets_difficulty(&keccak(&[original, &nonce_bytes(*nonce)]), bits))
        .unwrap()
}

pub fn nonce_u256(env: &Env, nonce: u64) -> U256 {
    U256::from_u128(env, nonce as u128)
}

pub fn nonce_proof(env: &Env, nonce: u64) -> Vec<BytesN<32>> {
    vec![env, BytesN::from_array(env, &nonce_bytes(nonce))]
}

pub fn sample_hash(env: &Env, fill: u8) -> BytesN<32> {
    BytesN::from_array(env, &[fill; 32])
}

pub struct Setup<'a> {
    pub env: Env,
    pub admin: Address,
    pub hashpin: HashpinContractClient<'a>,
    pub single: SingleEditionAdapterClient<'a>,
    pub multi: MultiEditionAdapterClient<'a>,
}

/// A hashpin ledger at [`TEST_DIFFICULTY`] with both adapter variants bound
/// to it and whitelisted.
pub fn setup<'a>() -> Setup<'a> {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);

    let hashpin_id = env.register_contract(None, HashpinContract);
    let hashpin = HashpinContractClient::new(&env, &hashpin_id);
    hashpin.initialize(&admin);
    hashpin.set_difficulty(&TEST_DIFFICULTY);

    let single_id = env.register_contract(None, SingleEditionAdapter);
    let single = SingleEditionAdapterClient::new(&env, &single_id);
    single.initialize(
        &admin,
        &hashpin_id,
        &String::from_str(&env, "Hashpin NFT"),
        &String::from_str(&env, "HPIN"),
    );

    let multi_id = env.register_contract(None, MultiEditionAdapter);
    let multi = MultiEditionAdapterClient::new(&env, &multi_id);
    multi.initialize(
        &admin,
        &hashpin_id,
        &String::from_str(&env, "Hashpin Editions"),
        &String::from_str(&env, "HPED"),
        &EDITIONS,
    );

    hashpin.set_adapter_whitelisted(&single_id, &true);
    hashpin.set_adapter_whitelisted(&multi_id, &true);

    Setup {
        env,
        admin,
        hashpin,
        single,
        multi,
    }
}

impl Setup<'_> {
    /// Mines and pins `original` for `pinner`, returning the nonce used and
    /// the stored proof-of-work hash.
    pub fn pin(&self, pinner: &Address, original: &BytesN<32>, metadata: &[u8]) -> (u64, BytesN<32>) {
        let (nonce, expected) = find_nonce(&original.to_array(), self.hashpin.get_difficulty());

        let pow_hash = self.hashpin.pin_hash(
            pinner,
            original,
            &nonce_u256(&self.env, nonce),
            &Bytes::from_slice(&self.env, metadata),
        );
        assert_eq!(pow_hash.to_array(), expected);

        (nonce, pow_hash)
    }
}

#[test]
fn off_chain_keccak_matches_host() {
    let env = Env::default();
    let original = [0x11u8; 32];

    let host = env
        .crypto()
        .keccak256(&Bytes::from_array(&env, &original))
        .to_bytes();

    assert_eq!(host.to_array(), keccak(&[&original]));
}

#[test]
fn found_nonce_meets_difficulty() {
    let original = [0x42u8; 32];
    let (nonce, hash) = find_nonce(&original, TEST_DIFFICULTY);

    assert!(meets_difficulty(&hash, TEST_DIFFICULTY));
    assert_eq!(hash, keccak(&[&original, &nonce_bytes(nonce)]));
    assert!(!meets_difficulty(
        &keccak(&[&original, &nonce_bytes(find_failing_nonce(&original, TEST_DIFFICULTY))]),
        TEST_DIFFICULTY
    ));
}
