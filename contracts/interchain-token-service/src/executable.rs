//! Receiving side of transfers that carry a payload.
//!
//! A contract that wants tokens together with a message implements
//! [`InterchainTokenExecutableInterface`]. The service credits the tokens first and
//! then calls [`InterchainTokenExecutableInterface::execute_with_interchain_token`],
//! both for regular and for express deliveries.

use soroban_sdk::{contractclient, Address, Bytes, BytesN, Env, String};

#[contractclient(name = "InterchainTokenExecutableClient")]
pub trait InterchainTokenExecutableInterface {
    /// The interchain token service this contract accepts calls from.
    fn interchain_token_service(env: &Env) -> Address;

    /// Called after `amount` of `token_address` was given to this contract.
    ///
    /// Implementations must call [`Self::validate`] first.
    fn execute_with_interchain_token(
        env: &Env,
        source_chain: String,
        message_id: String,
        source_address: Bytes,
        payload: Bytes,
        token_id: BytesN<32>,
        token_address: Address,
        amount: i128,
    );

    /// Traps unless the interchain token service is the caller.
    fn validate(env: &Env) {
        Self::interchain_token_service(env).require_auth();
    }
}
