use crate::error::ContractError;
use crate::types::Message;
use crate::AxelarGatewayMessagingInterface;
use soroban_sdk::{contractclient, Env, Vec};

#[contractclient(name = "AxelarGatewayClient")]
pub trait AxelarGatewayInterface: AxelarGatewayMessagingInterface {
    /// Marks the messages as approved. Only the operator may approve messages.
    ///
    /// Messages that were already approved or executed are skipped.
    fn approve_messages(env: Env, messages: Vec<Message>) -> Result<(), ContractError>;
}
