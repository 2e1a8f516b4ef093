use soroban_sdk::{contracterror, Address, Bytes, Env, String};

use crate::AxelarGatewayMessagingClient;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ExecutableError {
    NotApproved = 1,
}

/// Interface for a contract that receives messages through the gateway.
pub trait AxelarExecutableInterface {
    type Error: Into<soroban_sdk::Error>;

    /// The gateway this contract trusts.
    fn gateway(env: &Env) -> Address;

    /// Handles an approved message. Implementations must call [`Self::validate_message`]
    /// before acting on the payload.
    fn execute(
        env: Env,
        source_chain: String,
        message_id: String,
        source_address: String,
        payload: Bytes,
    ) -> Result<(), <Self as AxelarExecutableInterface>::Error>;

    /// Consumes the gateway approval for this message. Not exported by `contractimpl`,
    /// since default trait methods are ignored by the macro.
    fn validate_message(
        env: &Env,
        source_chain: &String,
        message_id: &String,
        source_address: &String,
        payload: &Bytes,
    ) -> Result<(), ExecutableError> {
        let gateway = AxelarGatewayMessagingClient::new(env, &Self::gateway(env));

        if gateway.validate_message(
            &env.current_contract_address(),
            source_chain,
            message_id,
            source_address,
            &env.crypto().keccak256(payload).into(),
        ) {
            Ok(())
        } else {
            Err(ExecutableError::NotApproved)
        }
    }
}
