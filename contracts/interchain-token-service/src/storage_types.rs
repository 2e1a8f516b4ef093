use soroban_sdk::{contracttype, Address, BytesN, String};

use crate::types::TokenManagerType;

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Gateway,
    GasService,
    TokenDeployer,
    ChainName,
    TrustedAddress(String),
    TokenIdConfig(BytesN<32>),
    TokenOperator(BytesN<32>, Address),
    FlowLimiter(BytesN<32>, Address),
    FlowLimit(BytesN<32>),
    FlowIn(BytesN<32>),
    FlowOut(BytesN<32>),
    ExpressExecutor(ExpressKey),
    DeployApproval(BytesN<32>),
}

/// The token manager of a token id: the bound token and how it is held.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenIdConfigValue {
    pub token_address: Address,
    pub token_manager_type: TokenManagerType,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpressKey {
    pub source_chain: String,
    pub message_id: String,
    pub source_address: String,
    pub payload_hash: BytesN<32>,
}
