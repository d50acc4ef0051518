use soroban_sdk::{contractimpl, Address, Env};

use crate::{
    contract_admin::require_admin,
    errors::Error,
    events,
    storage::{extend_instance_ttl, is_adapter_whitelisted, set_adapter_whitelisted},
    HashpinContract, HashpinContractClient, RegistryTrait,
};

#[contractimpl]
impl RegistryTrait for HashpinContract {
    fn set_adapter_whitelisted(env: Env, adapter: Address, whitelisted: bool) -> Result<(), Error> {
        require_admin(&env)?;

        set_adapter_whitelisted(&env, &adapter, whitelisted);
        events::adapter_whitelisted(&env, &adapter, whitelisted);

        extend_instance_ttl(&env);

        Ok(())
    }

    fn is_whitelisted(env: Env, adapter: Address) -> bool {
        is_adapter_whitelisted(&env, &adapter)
    }
}
