use axelar_soroban_std::ensure;
use axelar_soroban_std::ttl::extend_persistent_ttl;
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{Address, Bytes, BytesN, Env, String};

use crate::error::ContractError;
use crate::storage_types::DataKey;
use crate::token_id;

const PREFIX_DEPLOY_APPROVAL: &str = "deploy-approval";

fn deploy_approval_key(
    env: &Env,
    minter: &Address,
    token_id: &BytesN<32>,
    destination_chain: &String,
) -> DataKey {
    let hash = env.crypto().keccak256(
        &(
            token_id::prefix(env, PREFIX_DEPLOY_APPROVAL),
            minter.clone(),
            token_id.clone(),
            destination_chain.clone(),
        )
            .to_xdr(env),
    );

    DataKey::DeployApproval(hash.into())
}

fn destination_minter_hash(env: &Env, destination_minter: &Bytes) -> BytesN<32> {
    env.crypto().keccak256(destination_minter).into()
}

/// Lets the deployer of `token_id` set `destination_minter` as minter of the token on
/// `destination_chain`, on behalf of `minter`. Replaces an earlier approval.
pub fn approve_deployment(
    env: &Env,
    minter: &Address,
    token_id: &BytesN<32>,
    destination_chain: &String,
    destination_minter: &Bytes,
) {
    let key = deploy_approval_key(env, minter, token_id, destination_chain);

    env.storage()
        .persistent()
        .set(&key, &destination_minter_hash(env, destination_minter));
    extend_persistent_ttl(env, &key);
}

pub fn revoke_deployment(
    env: &Env,
    minter: &Address,
    token_id: &BytesN<32>,
    destination_chain: &String,
) {
    env.storage()
        .persistent()
        .remove(&deploy_approval_key(env, minter, token_id, destination_chain));
}

/// Consumes the approval for exactly this `destination_minter`.
pub fn use_deployment_approval(
    env: &Env,
    minter: &Address,
    token_id: &BytesN<32>,
    destination_chain: &String,
    destination_minter: &Bytes,
) -> Result<(), ContractError> {
    let key = deploy_approval_key(env, minter, token_id, destination_chain);

    let approved: Option<BytesN<32>> = env.storage().persistent().get(&key);

    ensure!(
        approved == Some(destination_minter_hash(env, destination_minter)),
        ContractError::RemoteDeploymentNotApproved
    );

    env.storage().persistent().remove(&key);

    Ok(())
}
