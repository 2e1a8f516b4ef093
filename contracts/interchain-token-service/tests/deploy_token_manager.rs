mod utils;

use axelar_gateway::testutils::SOURCE_ADDRESS;
use axelar_gateway::ContractCalledEvent;
use axelar_soroban_std::{assert_contract_err, assert_ok, events};
use interchain_token_service::error::ContractError;
use interchain_token_service::event::{
    InterchainTokenIdClaimedEvent, TokenManagerDeployedEvent, TokenManagerDeploymentStartedEvent,
};
use interchain_token_service::types::{
    DeployTokenManager, HubMessage, Message, TokenManagerParams, TokenManagerType,
};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{bytes, Address, BytesN, String};
use utils::{setup_env, stellar_asset, TestEnv, CHAIN_NAME, HUB_ADDRESS, HUB_CHAIN};

#[test]
fn deploy_local_token_manager() {
    let test = setup_env();
    let TestEnv { env, its, .. } = &test;
    let deployer = Address::generate(env);
    let operator = Address::generate(env);
    let salt = BytesN::from_array(env, &[1; 32]);
    let token_address = stellar_asset(env, &Address::generate(env));
    let params = TokenManagerParams {
        operator: Some(operator.clone()),
        token_address: token_address.clone(),
    }
    .abi_encode(env);
    let expected_token_id = its.interchain_token_id(&deployer, &salt);

    let token_id = its.deploy_token_manager(
        &deployer,
        &salt,
        &String::from_str(env, ""),
        &TokenManagerType::LockUnlock,
        &params,
        &None,
    );

    assert_eq!(token_id, expected_token_id);
    events::assert_event_emitted(
        env,
        &its.address,
        &InterchainTokenIdClaimedEvent {
            token_id: token_id.clone(),
            deployer,
            salt,
        },
    );
    events::assert_last_event(
        env,
        &its.address,
        &TokenManagerDeployedEvent {
            token_id: token_id.clone(),
            token_address: token_address.clone(),
            token_manager_type: TokenManagerType::LockUnlock,
            operator: Some(operator.clone()),
        },
    );

    assert_eq!(its.token_address(&token_id), token_address);
    assert_eq!(its.token_manager_type(&token_id), TokenManagerType::LockUnlock);
    assert_eq!(its.token_manager_address(&token_id), its.address);
    assert!(its.is_token_operator(&token_id, &operator));
    assert!(its.is_flow_limiter(&token_id, &operator));
    assert!(its.is_token_operator(&token_id, &its.address));
}

#[test]
fn deploy_token_manager_twice_fails_and_keeps_the_first() {
    let test = setup_env();
    let TestEnv { env, its, .. } = &test;
    let deployer = Address::generate(env);
    let salt = BytesN::from_array(env, &[1; 32]);
    let first_token = stellar_asset(env, &Address::generate(env));
    let params = |token_address: &Address| {
        TokenManagerParams {
            operator: None,
            token_address: token_address.clone(),
        }
        .abi_encode(env)
    };

    let token_id = its.deploy_token_manager(
        &deployer,
        &salt,
        &String::from_str(env, ""),
        &TokenManagerType::LockUnlock,
        &params(&first_token),
        &None,
    );

    assert_contract_err!(
        its.try_deploy_token_manager(
            &deployer,
            &salt,
            &String::from_str(env, ""),
            &TokenManagerType::MintBurn,
            &params(&stellar_asset(env, &Address::generate(env))),
            &None,
        ),
        ContractError::TokenManagerAlreadyDeployed
    );

    assert_eq!(its.token_address(&token_id), first_token);
    assert_eq!(its.token_manager_type(&token_id), TokenManagerType::LockUnlock);
}

#[test]
fn deploy_token_manager_rejects_native_type() {
    let test = setup_env();
    let TestEnv { env, its, .. } = &test;

    assert_contract_err!(
        its.try_deploy_token_manager(
            &Address::generate(env),
            &BytesN::from_array(env, &[1; 32]),
            &String::from_str(env, ""),
            &TokenManagerType::NativeInterchainToken,
            &bytes!(env, 0x00),
            &None,
        ),
        ContractError::CannotDeploy
    );
}

#[test]
fn deploy_token_manager_rejects_malformed_params() {
    let test = setup_env();
    let TestEnv { env, its, .. } = &test;

    assert_contract_err!(
        its.try_deploy_token_manager(
            &Address::generate(env),
            &BytesN::from_array(env, &[1; 32]),
            &String::from_str(env, ""),
            &TokenManagerType::LockUnlock,
            &bytes!(env, 0x1234),
            &None,
        ),
        ContractError::InvalidParams
    );
}

#[test]
fn unknown_token_id_has_no_manager() {
    let test = setup_env();
    let TestEnv { env, its, .. } = &test;
    let token_id = BytesN::from_array(env, &[9; 32]);

    assert_contract_err!(
        its.try_token_address(&token_id),
        ContractError::TokenManagerDoesNotExist
    );
    assert_contract_err!(
        its.try_token_manager_address(&token_id),
        ContractError::TokenManagerDoesNotExist
    );
}

#[test]
fn deploy_remote_token_manager() {
    let test = setup_env();
    let TestEnv { env, its, gateway, .. } = &test;
    let deployer = Address::generate(env);
    let salt = BytesN::from_array(env, &[1; 32]);
    let destination_chain = String::from_str(env, "ethereum");
    let params = bytes!(env, 0xdeadbeef);

    let token_id = its.deploy_token_manager(
        &deployer,
        &salt,
        &destination_chain,
        &TokenManagerType::MintBurn,
        &params,
        &None,
    );

    events::assert_event_emitted(
        env,
        &its.address,
        &TokenManagerDeploymentStartedEvent {
            token_id: token_id.clone(),
            destination_chain: destination_chain.clone(),
            token_manager_type: TokenManagerType::MintBurn,
            params: params.clone(),
        },
    );

    let payload = assert_ok!(Message::DeployTokenManager(DeployTokenManager {
        token_id: token_id.clone(),
        token_manager_type: TokenManagerType::MintBurn,
        params,
    })
    .abi_encode(env));

    events::assert_last_event(
        env,
        &gateway.address,
        &ContractCalledEvent {
            caller: its.address.clone(),
            destination_chain: destination_chain.clone(),
            destination_address: String::from_str(env, SOURCE_ADDRESS),
            payload_hash: env.crypto().keccak256(&payload).into(),
            payload,
        },
    );

    assert_contract_err!(
        its.try_token_address(&token_id),
        ContractError::TokenManagerDoesNotExist
    );
}

#[test]
fn deploy_remote_token_manager_through_hub() {
    let test = setup_env();
    let TestEnv { env, its, gateway, .. } = &test;
    let destination_chain = String::from_str(env, utils::HUB_ROUTED_CHAIN);
    let params = bytes!(env, 0xdeadbeef);

    let token_id = its.deploy_token_manager(
        &Address::generate(env),
        &BytesN::from_array(env, &[1; 32]),
        &destination_chain,
        &TokenManagerType::LockUnlock,
        &params,
        &None,
    );

    let payload = assert_ok!(HubMessage::SendToHub {
        destination_chain,
        message: Message::DeployTokenManager(DeployTokenManager {
            token_id,
            token_manager_type: TokenManagerType::LockUnlock,
            params,
        }),
    }
    .abi_encode(env));

    events::assert_last_event(
        env,
        &gateway.address,
        &ContractCalledEvent {
            caller: its.address.clone(),
            destination_chain: String::from_str(env, HUB_CHAIN),
            destination_address: String::from_str(env, HUB_ADDRESS),
            payload_hash: env.crypto().keccak256(&payload).into(),
            payload,
        },
    );
}

#[test]
fn deploy_remote_token_manager_rejects_bad_destinations() {
    let test = setup_env();
    let TestEnv { env, its, .. } = &test;
    let deployer = Address::generate(env);
    let salt = BytesN::from_array(env, &[1; 32]);

    assert_contract_err!(
        its.try_deploy_token_manager(
            &deployer,
            &salt,
            &String::from_str(env, CHAIN_NAME),
            &TokenManagerType::LockUnlock,
            &bytes!(env, 0x00),
            &None,
        ),
        ContractError::CannotDeployRemotelyToSelf
    );
    assert_contract_err!(
        its.try_deploy_token_manager(
            &deployer,
            &salt,
            &String::from_str(env, "unknown"),
            &TokenManagerType::LockUnlock,
            &bytes!(env, 0x00),
            &None,
        ),
        ContractError::UntrustedChain
    );
    assert_contract_err!(
        its.try_deploy_token_manager(
            &deployer,
            &salt,
            &String::from_str(env, HUB_CHAIN),
            &TokenManagerType::LockUnlock,
            &bytes!(env, 0x00),
            &None,
        ),
        ContractError::UntrustedChain
    );
}
