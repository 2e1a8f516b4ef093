use axelar_soroban_std::types::Token;
use soroban_sdk::{contractclient, token, Address, Bytes, BytesN, Env, String};

use crate::error::ContractError;

#[contractclient(name = "InterchainTokenClient")]
pub trait InterchainTokenInterface: token::Interface {
    /// The interchain token id this token was deployed for.
    fn token_id(env: &Env) -> BytesN<32>;

    fn interchain_token_service(env: &Env) -> Address;

    fn is_minter(env: &Env, minter: Address) -> bool;

    /// Mints `amount` to `to`. `minter` must authorize and hold the minter role.
    fn mint_from(env: Env, minter: Address, to: Address, amount: i128) -> Result<(), ContractError>;

    /// Grants the minter role. Only callable by the owner.
    fn add_minter(env: &Env, minter: Address);

    /// Revokes the minter role. Only callable by the owner.
    fn remove_minter(env: &Env, minter: Address);

    /// Burns `amount` from `from` and asks the interchain token service to send it to
    /// `destination_address` on `destination_chain`.
    fn interchain_transfer(
        env: Env,
        from: Address,
        destination_chain: String,
        destination_address: Bytes,
        amount: i128,
        metadata: Bytes,
        gas_token: Option<Token>,
    ) -> Result<(), ContractError>;
}
