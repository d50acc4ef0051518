use soroban_sdk::{contracttype, Address, Bytes, BytesN, String, U256};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Collection {
    pub name: String,
    pub symbol: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    pub owner: Address,
    pub hash: BytesN<32>,
    pub uri: Bytes,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,            // : address
    Hashpin,          // : address
    Collection,       // : Collection
    Token(U256),      // (token id) : Token
    Balance(Address), // (owner) : u32
}
