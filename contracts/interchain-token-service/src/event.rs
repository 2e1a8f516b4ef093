use axelar_soroban_std::events::Event;
use core::fmt::Debug;
use soroban_sdk::{Address, Bytes, BytesN, Env, IntoVal, String, Symbol, Topics, Val};

use crate::types::TokenManagerType;

#[derive(Debug, PartialEq, Eq)]
pub struct TrustedAddressSetEvent {
    pub chain: String,
    pub trusted_address: String,
}

#[derive(Debug, PartialEq, Eq)]
pub struct TrustedAddressRemovedEvent {
    pub chain: String,
    pub trusted_address: String,
}

#[derive(Debug, PartialEq, Eq)]
pub struct InterchainTokenIdClaimedEvent {
    pub token_id: BytesN<32>,
    pub deployer: Address,
    pub salt: BytesN<32>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct TokenManagerDeployedEvent {
    pub token_id: BytesN<32>,
    pub token_address: Address,
    pub token_manager_type: TokenManagerType,
    pub operator: Option<Address>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct InterchainTokenDeployedEvent {
    pub token_id: BytesN<32>,
    pub token_address: Address,
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    pub minter: Option<Address>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct TokenManagerDeploymentStartedEvent {
    pub token_id: BytesN<32>,
    pub destination_chain: String,
    pub token_manager_type: TokenManagerType,
    pub params: Bytes,
}

#[derive(Debug, PartialEq, Eq)]
pub struct InterchainTokenDeploymentStartedEvent {
    pub token_id: BytesN<32>,
    pub destination_chain: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    pub minter: Option<Bytes>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct InterchainTransferSentEvent {
    pub token_id: BytesN<32>,
    pub source_address: Address,
    pub destination_chain: String,
    pub destination_address: Bytes,
    pub amount: i128,
    pub data_hash: Option<BytesN<32>>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct InterchainTransferReceivedEvent {
    pub source_chain: String,
    pub message_id: String,
    pub token_id: BytesN<32>,
    pub source_address: Bytes,
    pub destination_address: Address,
    pub amount: i128,
    pub data_hash: Option<BytesN<32>>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ExpressExecutedEvent {
    pub source_chain: String,
    pub message_id: String,
    pub source_address: String,
    pub payload_hash: BytesN<32>,
    pub express_executor: Address,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ExpressExecutionFulfilledEvent {
    pub source_chain: String,
    pub message_id: String,
    pub source_address: String,
    pub payload_hash: BytesN<32>,
    pub express_executor: Address,
}

#[derive(Debug, PartialEq, Eq)]
pub struct FlowLimitSetEvent {
    pub token_id: BytesN<32>,
    pub flow_limiter: Address,
    pub flow_limit: i128,
}

#[derive(Debug, PartialEq, Eq)]
pub struct FlowLimiterAddedEvent {
    pub token_id: BytesN<32>,
    pub flow_limiter: Address,
}

#[derive(Debug, PartialEq, Eq)]
pub struct FlowLimiterRemovedEvent {
    pub token_id: BytesN<32>,
    pub flow_limiter: Address,
}

#[derive(Debug, PartialEq, Eq)]
pub struct TokenOperatorshipTransferredEvent {
    pub token_id: BytesN<32>,
    pub previous_operator: Address,
    pub new_operator: Address,
}

#[derive(Debug, PartialEq, Eq)]
pub struct RemoteDeploymentApprovedEvent {
    pub minter: Address,
    pub deployer: Address,
    pub token_id: BytesN<32>,
    pub destination_chain: String,
    pub destination_minter: Bytes,
}

#[derive(Debug, PartialEq, Eq)]
pub struct RemoteDeploymentRevokedEvent {
    pub minter: Address,
    pub deployer: Address,
    pub token_id: BytesN<32>,
    pub destination_chain: String,
}

impl Event for TrustedAddressSetEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "trusted_address_set"),
            self.chain.clone(),
            self.trusted_address.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {}
}

impl Event for TrustedAddressRemovedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "trusted_address_removed"),
            self.chain.clone(),
            self.trusted_address.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {}
}

impl Event for InterchainTokenIdClaimedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "interchain_token_id_claimed"),
            self.token_id.clone(),
            self.deployer.clone(),
            self.salt.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {}
}

impl Event for TokenManagerDeployedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "token_manager_deployed"),
            self.token_id.clone(),
            self.token_address.clone(),
            self.token_manager_type,
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.operator.clone(),)
    }
}

impl Event for InterchainTokenDeployedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "interchain_token_deployed"),
            self.token_id.clone(),
            self.token_address.clone(),
            self.minter.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.name.clone(), self.symbol.clone(), self.decimals)
    }
}

impl Event for TokenManagerDeploymentStartedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "token_manager_deploy_started"),
            self.token_id.clone(),
            self.destination_chain.clone(),
            self.token_manager_type,
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.params.clone(),)
    }
}

impl Event for InterchainTokenDeploymentStartedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "interchain_token_deploy_started"),
            self.token_id.clone(),
            self.destination_chain.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (
            self.name.clone(),
            self.symbol.clone(),
            self.decimals,
            self.minter.clone(),
        )
    }
}

impl Event for InterchainTransferSentEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "interchain_transfer_sent"),
            self.token_id.clone(),
            self.source_address.clone(),
            self.destination_chain.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (
            self.destination_address.clone(),
            self.amount,
            self.data_hash.clone(),
        )
    }
}

impl Event for InterchainTransferReceivedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "interchain_transfer_received"),
            self.source_chain.clone(),
            self.token_id.clone(),
            self.destination_address.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (
            self.message_id.clone(),
            self.source_address.clone(),
            self.amount,
            self.data_hash.clone(),
        )
    }
}

impl Event for ExpressExecutedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "express_executed"),
            self.source_chain.clone(),
            self.message_id.clone(),
            self.express_executor.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.source_address.clone(), self.payload_hash.clone())
    }
}

impl Event for ExpressExecutionFulfilledEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "express_execution_fulfilled"),
            self.source_chain.clone(),
            self.message_id.clone(),
            self.express_executor.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.source_address.clone(), self.payload_hash.clone())
    }
}

impl Event for FlowLimitSetEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "flow_limit_set"),
            self.token_id.clone(),
            self.flow_limiter.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.flow_limit,)
    }
}

impl Event for FlowLimiterAddedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "flow_limiter_added"),
            self.token_id.clone(),
            self.flow_limiter.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {}
}

impl Event for FlowLimiterRemovedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "flow_limiter_removed"),
            self.token_id.clone(),
            self.flow_limiter.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {}
}

impl Event for TokenOperatorshipTransferredEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "token_operatorship_transferred"),
            self.token_id.clone(),
            self.previous_operator.clone(),
            self.new_operator.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {}
}

impl Event for RemoteDeploymentApprovedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "remote_deploy_approved"),
            self.minter.clone(),
            self.token_id.clone(),
            self.destination_chain.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.deployer.clone(), self.destination_minter.clone())
    }
}

impl Event for RemoteDeploymentRevokedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "remote_deploy_revoked"),
            self.minter.clone(),
            self.token_id.clone(),
            self.destination_chain.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.deployer.clone(),)
    }
}
