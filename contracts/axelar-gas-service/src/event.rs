use axelar_soroban_std::events::Event;
use axelar_soroban_std::types::Token;
use core::fmt::Debug;
use soroban_sdk::{Address, Bytes, BytesN, Env, IntoVal, String, Symbol, Topics, Val};

#[derive(Debug, PartialEq, Eq)]
pub struct GasPaidEvent {
    pub sender: Address,
    pub destination_chain: String,
    pub destination_address: String,
    pub payload_hash: BytesN<32>,
    pub spender: Address,
    pub token: Token,
    pub metadata: Bytes,
}

#[derive(Debug, PartialEq, Eq)]
pub struct GasAddedEvent {
    pub sender: Address,
    pub message_id: String,
    pub spender: Address,
    pub token: Token,
}

#[derive(Debug, PartialEq, Eq)]
pub struct GasCollectedEvent {
    pub receiver: Address,
    pub token: Token,
}

#[derive(Debug, PartialEq, Eq)]
pub struct GasRefundedEvent {
    pub message_id: String,
    pub receiver: Address,
    pub token: Token,
}

impl Event for GasPaidEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "gas_paid"),
            self.sender.clone(),
            self.destination_chain.clone(),
            self.payload_hash.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (
            self.destination_address.clone(),
            self.spender.clone(),
            self.token.clone(),
            self.metadata.clone(),
        )
    }
}

impl Event for GasAddedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "gas_added"),
            self.sender.clone(),
            self.message_id.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.spender.clone(), self.token.clone())
    }
}

impl Event for GasCollectedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (Symbol::new(env, "gas_collected"), self.receiver.clone())
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.token.clone(),)
    }
}

impl Event for GasRefundedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "gas_refunded"),
            self.message_id.clone(),
            self.receiver.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.token.clone(),)
    }
}
