use soroban_sdk::{contracttype, Address, Bytes, BytesN};

/// A pin, keyed in the ledger by its proof-of-work hash.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PinRecord {
    pub pinner: Address,
    pub original_hash: BytesN<32>,
    pub metadata: Bytes,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,                       // : address
    Difficulty,                  // : u32
    Pin(BytesN<32>),             // (pow hash) : PinRecord
    WhitelistedAdapter(Address), // (adapter) : bool
}
