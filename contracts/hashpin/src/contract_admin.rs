use soroban_sdk::{contractimpl, Address, Env};

use crate::{
    errors::Error,
    events,
    storage::{extend_instance_ttl, get_admin, has_admin, set_admin, set_difficulty},
    AdminTrait, HashpinContract, HashpinContractClient, INITIAL_DIFFICULTY,
};

/// Loads the administrator and demands its authorization for this invocation.
pub(crate) fn require_admin(env: &Env) -> Result<Address, Error> {
    let admin = get_admin(env).ok_or(Error::NotInitialized)?;

    admin.require_auth();

    Ok(admin)
}

#[contractimpl]
impl AdminTrait for HashpinContract {
    fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }

        set_admin(&env, &admin);
        set_difficulty(&env, INITIAL_DIFFICULTY);

        extend_instance_ttl(&env);

        Ok(())
    }

    fn admin(env: Env) -> Result<Address, Error> {
        get_admin(&env).ok_or(Error::NotInitialized)
    }

    fn transfer_admin(env: Env, new_admin: Address) -> Result<(), Error> {
        let admin = require_admin(&env)?;

        set_admin(&env, &new_admin);
        events::admin_changed(&env, &admin, &new_admin);

        extend_instance_ttl(&env);

        Ok(())
    }
}
