use hashpin_adapter_interface::{hash_to_token_id, HashpinAdapterClient};
use soroban_sdk::{contractimpl, Address, Bytes, BytesN, Env, Vec, U256};

use crate::{
    errors::Error,
    events, merkle,
    storage::{extend_instance_ttl, is_adapter_whitelisted},
    ClaimTrait, HashpinContract, HashpinContractClient,
};

#[contractimpl]
impl ClaimTrait for HashpinContract {
    fn claim_hash(
        env: Env,
        claimer: Address,
        leaf: BytesN<32>,
        proof: Vec<BytesN<32>>,
        adapter: Address,
        metadata: Bytes,
    ) -> Result<U256, Error> {
        claimer.require_auth();

        // Gates run in order and nothing is written until the adapter has minted.
        let (_, pin) = merkle::resolve(&env, &leaf, &proof);
        let pin = pin.ok_or(Error::HashNotPinned)?;

        if pin.pinner != claimer {
            return Err(Error::NotPinner);
        }

        if !is_adapter_whitelisted(&env, &adapter) {
            return Err(Error::AdapterNotWhitelisted);
        }

        let token_id = hash_to_token_id(&env, &leaf);
        let adapter_client = HashpinAdapterClient::new(&env, &adapter);

        match adapter_client.try_is_hash_minted(&leaf) {
            Ok(Ok(false)) => {}
            Ok(Ok(true)) => return Err(Error::AlreadyClaimed),
            _ => return Err(Error::MintFailed),
        }

        // Any adapter failure rolls back the adapter's own writes with ours.
        match adapter_client.try_mint(
            &env.current_contract_address(),
            &claimer,
            &leaf,
            &metadata,
        ) {
            Ok(Ok(minted)) if minted == token_id => {}
            _ => return Err(Error::MintFailed),
        }

        events::hash_claimed(&env, &claimer, &leaf, &adapter, &token_id);

        extend_instance_ttl(&env);

        Ok(token_id)
    }
}
