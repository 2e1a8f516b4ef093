use crate::error::ContractError;
use crate::event::{ContractCalledEvent, MessageApprovedEvent, MessageExecutedEvent};
use crate::interface::AxelarGatewayInterface;
use crate::messaging_interface::AxelarGatewayMessagingInterface;
use crate::storage_types::{DataKey, MessageApprovalKey, MessageApprovalValue};
use crate::types::Message;
use axelar_soroban_std::events::Event;
use axelar_soroban_std::{ensure, interfaces, ttl::extend_instance_ttl};
use axelar_soroban_std::{operatable, ownable};
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{contract, contractimpl, Address, Bytes, BytesN, Env, String, Vec};

#[ownable]
#[operatable]
#[contract]
pub struct AxelarGateway;

#[contractimpl]
impl AxelarGateway {
    pub fn __constructor(env: Env, owner: Address, operator: Address) {
        interfaces::set_owner(&env, &owner);
        interfaces::set_operator(&env, &operator);
    }
}

#[contractimpl]
impl AxelarGatewayMessagingInterface for AxelarGateway {
    fn call_contract(
        env: Env,
        caller: Address,
        destination_chain: String,
        destination_address: String,
        payload: Bytes,
    ) {
        caller.require_auth();

        let payload_hash = env.crypto().keccak256(&payload).into();

        ContractCalledEvent {
            caller,
            destination_chain,
            destination_address,
            payload_hash,
            payload,
        }
        .emit(&env);
    }

    fn is_message_approved(
        env: Env,
        source_chain: String,
        message_id: String,
        source_address: String,
        contract_address: Address,
        payload_hash: BytesN<32>,
    ) -> bool {
        let message = Message {
            source_chain,
            message_id,
            source_address,
            contract_address,
            payload_hash,
        };

        Self::message_approval(&env, &message)
            == MessageApprovalValue::Approved(Self::message_hash(&env, message))
    }

    fn is_message_executed(env: Env, source_chain: String, message_id: String) -> bool {
        Self::message_approval_by_key(
            &env,
            MessageApprovalKey {
                source_chain,
                message_id,
            },
        ) == MessageApprovalValue::Executed
    }

    fn validate_message(
        env: Env,
        caller: Address,
        source_chain: String,
        message_id: String,
        source_address: String,
        payload_hash: BytesN<32>,
    ) -> bool {
        caller.require_auth();

        let message = Message {
            source_chain,
            message_id,
            source_address,
            contract_address: caller,
            payload_hash,
        };

        let approved = Self::message_approval(&env, &message)
            == MessageApprovalValue::Approved(Self::message_hash(&env, message.clone()));

        if approved {
            Self::set_message_approval(&env, &message, MessageApprovalValue::Executed);

            MessageExecutedEvent { message }.emit(&env);
        }

        approved
    }
}

#[contractimpl]
impl AxelarGatewayInterface for AxelarGateway {
    fn approve_messages(env: Env, messages: Vec<Message>) -> Result<(), ContractError> {
        Self::operator(&env).require_auth();

        ensure!(!messages.is_empty(), ContractError::EmptyMessages);

        for message in messages.into_iter() {
            if Self::message_approval(&env, &message) != MessageApprovalValue::NotApproved {
                continue;
            }

            Self::set_message_approval(
                &env,
                &message,
                MessageApprovalValue::Approved(Self::message_hash(&env, message.clone())),
            );

            MessageApprovedEvent { message }.emit(&env);
        }

        extend_instance_ttl(&env);

        Ok(())
    }
}

impl AxelarGateway {
    fn message_hash(env: &Env, message: Message) -> BytesN<32> {
        env.crypto().keccak256(&message.to_xdr(env)).into()
    }

    fn message_approval_key(message: &Message) -> MessageApprovalKey {
        MessageApprovalKey {
            source_chain: message.source_chain.clone(),
            message_id: message.message_id.clone(),
        }
    }

    fn message_approval(env: &Env, message: &Message) -> MessageApprovalValue {
        Self::message_approval_by_key(env, Self::message_approval_key(message))
    }

    fn message_approval_by_key(env: &Env, key: MessageApprovalKey) -> MessageApprovalValue {
        env.storage()
            .persistent()
            .get(&DataKey::MessageApproval(key))
            .unwrap_or(MessageApprovalValue::NotApproved)
    }

    fn set_message_approval(env: &Env, message: &Message, value: MessageApprovalValue) {
        let key = DataKey::MessageApproval(Self::message_approval_key(message));

        env.storage().persistent().set(&key, &value);
        axelar_soroban_std::ttl::extend_persistent_ttl(env, &key);
    }
}
