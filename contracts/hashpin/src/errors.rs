use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidDifficulty = 3,
    DifficultyNotMet = 4,
    AlreadyPinned = 5,
    NotFound = 6,
    HashNotPinned = 7,
    NotPinner = 8,
    AdapterNotWhitelisted = 9,
    AlreadyClaimed = 10,
    MintFailed = 11,
}
