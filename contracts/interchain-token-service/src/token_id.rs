use axelar_soroban_std::address::AddressExt;
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{Address, Bytes, BytesN, Env, String};

const PREFIX_INTERCHAIN_TOKEN_ID: &str = "its-interchain-token-id";
const PREFIX_INTERCHAIN_TOKEN_SALT: &str = "its-interchain-token-salt";
const PREFIX_CANONICAL_TOKEN_ID: &str = "its-canonical-token-id";

pub fn prefix(env: &Env, tag: &str) -> BytesN<32> {
    env.crypto()
        .keccak256(&Bytes::from_slice(env, tag.as_bytes()))
        .into()
}

pub fn chain_name_hash(env: &Env, chain_name: &String) -> BytesN<32> {
    env.crypto().keccak256(&chain_name.clone().to_xdr(env)).into()
}

/// Token id of a token registered by `deployer` with `salt`. Independent of the chain,
/// so the same pair names the same token everywhere.
pub fn interchain_token_id(env: &Env, deployer: &Address, salt: &BytesN<32>) -> BytesN<32> {
    env.crypto()
        .keccak256(
            &(
                prefix(env, PREFIX_INTERCHAIN_TOKEN_ID),
                deployer.clone(),
                salt.clone(),
            )
                .to_xdr(env),
        )
        .into()
}

/// Salt for tokens created through the factory entry points, scoped to the local chain
/// and to the caller.
pub fn interchain_token_deploy_salt(
    env: &Env,
    chain_name: &String,
    deployer: &Address,
    salt: &BytesN<32>,
) -> BytesN<32> {
    env.crypto()
        .keccak256(
            &(
                prefix(env, PREFIX_INTERCHAIN_TOKEN_SALT),
                chain_name_hash(env, chain_name),
                deployer.clone(),
                salt.clone(),
            )
                .to_xdr(env),
        )
        .into()
}

/// Factory deployments are registered under the zero address, so their ids do not depend
/// on which contract served the request.
pub fn factory_token_id(env: &Env, deploy_salt: &BytesN<32>) -> BytesN<32> {
    interchain_token_id(env, &Address::zero(env), deploy_salt)
}

/// Token id of an existing token registered on its home chain. Hashed under its own
/// prefix, so it never equals an id derived from a deployer and salt.
pub fn canonical_interchain_token_id(
    env: &Env,
    chain_name: &String,
    token_address: &Address,
) -> BytesN<32> {
    env.crypto()
        .keccak256(
            &(
                prefix(env, PREFIX_CANONICAL_TOKEN_ID),
                chain_name_hash(env, chain_name),
                token_address.clone(),
            )
                .to_xdr(env),
        )
        .into()
}
