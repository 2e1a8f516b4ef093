#![cfg(any(test, feature = "testutils"))]

use crate::contract::{AxelarGateway, AxelarGatewayClient};
use crate::types::Message;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address, Bytes, Env, String};

pub const SOURCE_CHAIN: &str = "ethereum";
pub const SOURCE_ADDRESS: &str = "0x4EFE356BEDeCC817cb89B4E9b796dB8bC188DC59";

/// Registers a gateway with freshly generated owner and operator.
pub fn setup_gateway<'a>(env: &Env) -> AxelarGatewayClient<'a> {
    let owner = Address::generate(env);
    let operator = Address::generate(env);
    let gateway_id = env.register(AxelarGateway, (owner, operator));

    AxelarGatewayClient::new(env, &gateway_id)
}

/// Builds a message from the test source chain to `contract_address` carrying `payload`.
pub fn generate_test_message(
    env: &Env,
    message_id: &str,
    contract_address: &Address,
    payload: &Bytes,
) -> Message {
    Message {
        source_chain: String::from_str(env, SOURCE_CHAIN),
        message_id: String::from_str(env, message_id),
        source_address: String::from_str(env, SOURCE_ADDRESS),
        contract_address: contract_address.clone(),
        payload_hash: env.crypto().keccak256(payload).into(),
    }
}

/// Approves `messages` as the gateway operator without touching the env's auth mode.
pub fn approve_gateway_messages(env: &Env, gateway: &AxelarGatewayClient, messages: &[Message]) {
    let mut batch = vec![env];
    for message in messages {
        batch.push_back(message.clone());
    }

    gateway.mock_all_auths().approve_messages(&batch);
}
