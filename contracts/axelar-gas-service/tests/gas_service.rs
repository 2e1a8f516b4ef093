use axelar_gas_service::error::ContractError;
use axelar_gas_service::event::{GasAddedEvent, GasCollectedEvent, GasPaidEvent, GasRefundedEvent};
use axelar_gas_service::{AxelarGasService, AxelarGasServiceClient};
use axelar_soroban_std::types::Token;
use axelar_soroban_std::{assert_contract_err, assert_invocation, events};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{bytes, Address, Bytes, Env, String};

struct TestEnv<'a> {
    env: Env,
    client: AxelarGasServiceClient<'a>,
    gas_collector: Address,
    token: Address,
}

fn setup<'a>() -> TestEnv<'a> {
    let env = Env::default();
    let owner = Address::generate(&env);
    let gas_collector = Address::generate(&env);
    let contract_id = env.register(AxelarGasService, (&owner, &gas_collector));
    let client = AxelarGasServiceClient::new(&env, &contract_id);

    let token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    TestEnv {
        env,
        client,
        gas_collector,
        token,
    }
}

fn fund(env: &Env, token: &Address, to: &Address, amount: i128) {
    StellarAssetClient::new(env, token)
        .mock_all_auths()
        .mint(to, &amount);
}

#[test]
fn pay_gas() {
    let TestEnv {
        env, client, token, ..
    } = setup();
    let sender = Address::generate(&env);
    let spender = Address::generate(&env);
    let destination_chain = String::from_str(&env, "ethereum");
    let destination_address = String::from_str(&env, "0x00");
    let payload = bytes!(&env, 0x1234);
    let gas_token = Token {
        address: token.clone(),
        amount: 100,
    };
    fund(&env, &token, &spender, 100);

    env.mock_all_auths();
    client.pay_gas(
        &sender,
        &destination_chain,
        &destination_address,
        &payload,
        &spender,
        &gas_token,
        &Bytes::new(&env),
    );

    events::assert_last_event(
        &env,
        &client.address,
        &GasPaidEvent {
            sender,
            destination_chain,
            destination_address,
            payload_hash: env.crypto().keccak256(&payload).into(),
            spender: spender.clone(),
            token: gas_token,
            metadata: Bytes::new(&env),
        },
    );

    let token_client = TokenClient::new(&env, &token);
    assert_eq!(token_client.balance(&spender), 0);
    assert_eq!(token_client.balance(&client.address), 100);
}

#[test]
fn pay_gas_fails_with_zero_amount() {
    let TestEnv {
        env, client, token, ..
    } = setup();
    env.mock_all_auths();

    assert_contract_err!(
        client.try_pay_gas(
            &Address::generate(&env),
            &String::from_str(&env, "ethereum"),
            &String::from_str(&env, "0x00"),
            &Bytes::new(&env),
            &Address::generate(&env),
            &Token {
                address: token,
                amount: 0
            },
            &Bytes::new(&env),
        ),
        ContractError::InvalidAmount
    );
}

#[test]
fn add_gas() {
    let TestEnv {
        env, client, token, ..
    } = setup();
    let sender = Address::generate(&env);
    let spender = Address::generate(&env);
    let message_id = String::from_str(&env, "message-1");
    let gas_token = Token {
        address: token.clone(),
        amount: 50,
    };
    fund(&env, &token, &spender, 50);

    env.mock_all_auths();
    client.add_gas(&sender, &message_id, &spender, &gas_token);

    events::assert_last_event(
        &env,
        &client.address,
        &GasAddedEvent {
            sender,
            message_id,
            spender,
            token: gas_token,
        },
    );
    assert_eq!(TokenClient::new(&env, &token).balance(&client.address), 50);
}

#[test]
fn collect_fees() {
    let TestEnv {
        env,
        client,
        gas_collector,
        token,
    } = setup();
    let receiver = Address::generate(&env);
    fund(&env, &token, &client.address, 100);
    let fees = Token {
        address: token.clone(),
        amount: 60,
    };

    env.mock_all_auths();
    client.collect_fees(&receiver, &fees);
    assert_invocation(
        &env,
        &gas_collector,
        &client.address,
        "collect_fees",
        (receiver.clone(), fees.clone()),
    );

    events::assert_last_event(
        &env,
        &client.address,
        &GasCollectedEvent {
            receiver: receiver.clone(),
            token: fees,
        },
    );
    assert_eq!(TokenClient::new(&env, &token).balance(&receiver), 60);

    assert_contract_err!(
        client.try_collect_fees(
            &receiver,
            &Token {
                address: token,
                amount: 41
            }
        ),
        ContractError::InsufficientBalance
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Auth, InvalidAction)")]
fn collect_fees_requires_gas_collector_auth() {
    let TestEnv {
        env, client, token, ..
    } = setup();
    fund(&env, &token, &client.address, 100);

    client.collect_fees(
        &Address::generate(&env),
        &Token {
            address: token,
            amount: 1,
        },
    );
}

#[test]
fn refund() {
    let TestEnv {
        env, client, token, ..
    } = setup();
    let receiver = Address::generate(&env);
    let message_id = String::from_str(&env, "message-1");
    fund(&env, &token, &client.address, 100);
    let refund = Token {
        address: token.clone(),
        amount: 100,
    };

    env.mock_all_auths();
    client.refund(&message_id, &receiver, &refund);

    events::assert_last_event(
        &env,
        &client.address,
        &GasRefundedEvent {
            message_id,
            receiver: receiver.clone(),
            token: refund,
        },
    );
    assert_eq!(TokenClient::new(&env, &token).balance(&receiver), 100);
}
