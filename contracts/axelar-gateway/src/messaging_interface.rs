use soroban_sdk::{contractclient, Address, Bytes, BytesN, Env, String};

/// The part of the gateway that applications talk to.
#[contractclient(name = "AxelarGatewayMessagingClient")]
pub trait AxelarGatewayMessagingInterface {
    /// Emits an outbound message for `destination_address` on `destination_chain`.
    /// `caller` must authorize the call.
    fn call_contract(
        env: Env,
        caller: Address,
        destination_chain: String,
        destination_address: String,
        payload: Bytes,
    );

    /// Returns true if the message is approved for `contract_address` and not yet executed.
    fn is_message_approved(
        env: Env,
        source_chain: String,
        message_id: String,
        source_address: String,
        contract_address: Address,
        payload_hash: BytesN<32>,
    ) -> bool;

    /// Returns true once the message has been consumed by [`Self::validate_message`].
    fn is_message_executed(env: Env, source_chain: String, message_id: String) -> bool;

    /// Consumes an approval. Returns true exactly once per approved message, and only
    /// when `caller` is the contract the message is addressed to.
    fn validate_message(
        env: Env,
        caller: Address,
        source_chain: String,
        message_id: String,
        source_address: String,
        payload_hash: BytesN<32>,
    ) -> bool;
}
