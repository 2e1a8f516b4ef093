use axelar_soroban_std::types::Token;
use soroban_sdk::{contractclient, Address, Bytes, Env, String};

use crate::error::ContractError;

#[contractclient(name = "AxelarGasServiceClient")]
pub trait AxelarGasServiceInterface {
    /// Pays for the execution of a message on `destination_chain`.
    ///
    /// Called on the source chain right before the message is handed to the gateway.
    /// `sender` is the contract sending the message; `spender` authorizes and funds the
    /// payment and receives refunds.
    fn pay_gas(
        env: Env,
        sender: Address,
        destination_chain: String,
        destination_address: String,
        payload: Bytes,
        spender: Address,
        token: Token,
        metadata: Bytes,
    ) -> Result<(), ContractError>;

    /// Tops up the payment for a message that was already sent.
    fn add_gas(
        env: Env,
        sender: Address,
        message_id: String,
        spender: Address,
        token: Token,
    ) -> Result<(), ContractError>;

    /// Moves collected fees to `receiver`. Only callable by the gas collector.
    fn collect_fees(env: Env, receiver: Address, token: Token) -> Result<(), ContractError>;

    /// Refunds unused gas of a message. Only callable by the gas collector.
    fn refund(env: Env, message_id: String, receiver: Address, token: Token);

    fn gas_collector(env: &Env) -> Address;
}
