use axelar_soroban_std::types::Token;
use soroban_sdk::{contractclient, Address, Bytes, BytesN, Env, String};

/// The entry point a token contract uses to start an interchain transfer of its own
/// tokens. Served by the interchain token service; a failure there aborts the caller.
#[contractclient(name = "InterchainTransferTransmitterClient")]
pub trait InterchainTransferTransmitterInterface {
    /// Sends `amount` of the token registered under `token_id` to `destination_chain`.
    ///
    /// The registered token contract must be the caller and must have debited
    /// `source_address` already.
    fn transmit_interchain_transfer(
        env: Env,
        token_id: BytesN<32>,
        source_address: Address,
        destination_chain: String,
        destination_address: Bytes,
        amount: i128,
        metadata: Bytes,
        gas_token: Option<Token>,
    );
}
