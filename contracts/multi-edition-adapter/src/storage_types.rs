use soroban_sdk::{contracttype, Address, Bytes, BytesN, String, U256};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Collection {
    pub name: String,
    pub symbol: String,
    pub editions: u32,
}

/// One claimed hash. Its editions are tracked as balances, not owners.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Edition {
    pub hash: BytesN<32>,
    pub uri: Bytes,
    pub supply: u32,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,                  // : address
    Hashpin,                // : address
    Collection,             // : Collection
    Edition(U256),          // (token id) : Edition
    Balance(Address, U256), // (holder, token id) : u32
}
