use soroban_sdk::{contractimpl, BytesN, Env};

use crate::{
    contract_admin::require_admin,
    errors::Error,
    events, pow,
    storage::{extend_instance_ttl, get_difficulty, set_difficulty},
    DifficultyTrait, HashpinContract, HashpinContractClient, MAX_DIFFICULTY,
};

#[contractimpl]
impl DifficultyTrait for HashpinContract {
    fn set_difficulty(env: Env, bits: u32) -> Result<(), Error> {
        require_admin(&env)?;

        if bits > MAX_DIFFICULTY {
            return Err(Error::InvalidDifficulty);
        }

        set_difficulty(&env, bits);
        events::difficulty_updated(&env, bits);

        extend_instance_ttl(&env);

        Ok(())
    }

    fn get_difficulty(env: Env) -> u32 {
        get_difficulty(&env)
    }

    // Soft check for miners and front ends; `pin_hash` enforces the same predicate.
    fn meets_difficulty(env: Env, hash: BytesN<32>) -> bool {
        pow::meets_difficulty(&hash.to_array(), get_difficulty(&env))
    }
}
