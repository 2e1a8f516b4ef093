use axelar_soroban_std::events::Event;
use core::fmt::Debug;
use soroban_sdk::{Address, Bytes, BytesN, Env, IntoVal, String, Symbol, Topics, Val};

use crate::types::Message;

#[derive(Debug, PartialEq, Eq)]
pub struct ContractCalledEvent {
    pub caller: Address,
    pub destination_chain: String,
    pub destination_address: String,
    pub payload_hash: BytesN<32>,
    pub payload: Bytes,
}

#[derive(Debug, PartialEq, Eq)]
pub struct MessageApprovedEvent {
    pub message: Message,
}

#[derive(Debug, PartialEq, Eq)]
pub struct MessageExecutedEvent {
    pub message: Message,
}

impl Event for ContractCalledEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "contract_called"),
            self.caller.clone(),
            self.destination_chain.clone(),
            self.destination_address.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.payload_hash.clone(), self.payload.clone())
    }
}

impl Event for MessageApprovedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "message_approved"),
            self.message.source_chain.clone(),
            self.message.message_id.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.message.clone(),)
    }
}

impl Event for MessageExecutedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "message_executed"),
            self.message.source_chain.clone(),
            self.message.message_id.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.message.clone(),)
    }
}
