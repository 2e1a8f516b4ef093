use soroban_sdk::{contracttype, Address, BytesN, String};

/// A cross-chain message addressed to a contract on this chain.
///
/// `(source_chain, message_id)` identifies the message; the remaining fields are bound
/// by the approval.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub source_chain: String,
    pub message_id: String,
    pub source_address: String,
    pub contract_address: Address,
    pub payload_hash: BytesN<32>,
}
