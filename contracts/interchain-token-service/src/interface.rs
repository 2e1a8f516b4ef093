use axelar_gateway::executable::AxelarExecutableInterface;
use axelar_soroban_std::types::Token;
use soroban_sdk::{contractclient, Address, Bytes, BytesN, Env, String, Vec};
use soroban_token_sdk::metadata::TokenMetadata;

use crate::error::ContractError;
use crate::types::TokenManagerType;

#[contractclient(name = "InterchainTokenServiceClient")]
pub trait InterchainTokenServiceInterface: AxelarExecutableInterface {
    fn gas_service(env: &Env) -> Address;

    fn token_deployer(env: &Env) -> Address;

    /// Name of the chain this service runs on, as known to the gateway.
    fn chain_name(env: &Env) -> String;

    fn its_hub_chain_name(env: &Env) -> String;

    fn its_hub_routing_identifier(env: &Env) -> String;

    /// Returns the address of the service on `chain`, or `"hub"` if messages for
    /// `chain` are routed through the ITS hub.
    fn trusted_address(env: &Env, chain: String) -> Option<String>;

    /// Only callable by the owner.
    fn set_trusted_address(env: &Env, chain: String, address: String)
        -> Result<(), ContractError>;

    /// Only callable by the owner.
    fn remove_trusted_address(env: &Env, chain: String) -> Result<(), ContractError>;

    fn paused(env: &Env) -> bool;

    /// Pauses or unpauses every state changing entry point. Only callable by the owner.
    fn set_pause_status(env: &Env, paused: bool);

    fn interchain_token_id(env: &Env, deployer: Address, salt: BytesN<32>) -> BytesN<32>;

    fn canonical_interchain_token_id(env: &Env, token_address: Address) -> BytesN<32>;

    /// The salt the factory deploys tokens of `deployer` under.
    fn interchain_token_deploy_salt(env: &Env, deployer: Address, salt: BytesN<32>)
        -> BytesN<32>;

    /// The address holding custody for `token_id`. All token managers live in the
    /// service, so this is the service itself once a manager is deployed.
    fn token_manager_address(env: &Env, token_id: BytesN<32>) -> Result<Address, ContractError>;

    fn token_address(env: &Env, token_id: BytesN<32>) -> Result<Address, ContractError>;

    fn token_manager_type(
        env: &Env,
        token_id: BytesN<32>,
    ) -> Result<TokenManagerType, ContractError>;

    /// The maximum flow in either direction, `0` meaning unlimited.
    fn flow_limit(env: &Env, token_id: BytesN<32>) -> i128;

    fn flow_in_amount(env: &Env, token_id: BytesN<32>) -> i128;

    fn flow_out_amount(env: &Env, token_id: BytesN<32>) -> i128;

    fn is_token_operator(env: &Env, token_id: BytesN<32>, account: Address) -> bool;

    fn is_flow_limiter(env: &Env, token_id: BytesN<32>, account: Address) -> bool;

    /// Returns who expressed the message, until the message itself is executed.
    fn express_executor(
        env: &Env,
        source_chain: String,
        message_id: String,
        source_address: String,
        payload_hash: BytesN<32>,
    ) -> Option<Address>;

    /// Deploys a token manager for an existing token, locally if `destination_chain`
    /// is empty and on `destination_chain` otherwise.
    ///
    /// `params` are the ABI encoded operator and token address for the destination.
    fn deploy_token_manager(
        env: &Env,
        deployer: Address,
        salt: BytesN<32>,
        destination_chain: String,
        token_manager_type: TokenManagerType,
        params: Bytes,
        gas_token: Option<Token>,
    ) -> Result<BytesN<32>, ContractError>;

    /// Deploys a new interchain token, locally if `destination_chain` is empty and on
    /// `destination_chain` otherwise. An empty `minter` leaves the service as the only
    /// minter.
    fn deploy_interchain_token(
        env: &Env,
        deployer: Address,
        salt: BytesN<32>,
        destination_chain: String,
        token_metadata: TokenMetadata,
        minter: Bytes,
        gas_token: Option<Token>,
    ) -> Result<BytesN<32>, ContractError>;

    /// Takes `amount` from `caller` and sends it to `destination_address` on
    /// `destination_chain`. `metadata` is a 4 byte version followed by the data for the
    /// destination contract.
    fn interchain_transfer(
        env: &Env,
        caller: Address,
        token_id: BytesN<32>,
        destination_chain: String,
        destination_address: Bytes,
        amount: i128,
        metadata: Bytes,
        gas_token: Option<Token>,
    ) -> Result<(), ContractError>;

    /// Like [`Self::interchain_transfer`], with raw `data` that must not be empty.
    fn call_contract_with_token(
        env: &Env,
        caller: Address,
        token_id: BytesN<32>,
        destination_chain: String,
        destination_address: Bytes,
        amount: i128,
        data: Bytes,
        gas_token: Option<Token>,
    ) -> Result<(), ContractError>;

    /// Sends a transfer the registered token contract of `token_id` has already debited.
    /// Only callable by that token contract.
    fn transmit_interchain_transfer(
        env: &Env,
        token_id: BytesN<32>,
        source_address: Address,
        destination_chain: String,
        destination_address: Bytes,
        amount: i128,
        metadata: Bytes,
        gas_token: Option<Token>,
    ) -> Result<(), ContractError>;

    /// Delivers an incoming transfer with the caller's own tokens before the message
    /// is approved. The caller is paid back when the message is executed.
    fn express_execute(
        env: &Env,
        caller: Address,
        source_chain: String,
        message_id: String,
        source_address: String,
        payload: Bytes,
    ) -> Result<(), ContractError>;

    /// Only callable by a flow limiter of `token_id`.
    fn set_flow_limit(
        env: &Env,
        flow_limiter: Address,
        token_id: BytesN<32>,
        flow_limit: i128,
    ) -> Result<(), ContractError>;

    /// Only callable by the owner.
    fn set_flow_limits(
        env: &Env,
        token_ids: Vec<BytesN<32>>,
        flow_limits: Vec<i128>,
    ) -> Result<(), ContractError>;

    fn add_flow_limiter(
        env: &Env,
        operator: Address,
        token_id: BytesN<32>,
        flow_limiter: Address,
    ) -> Result<(), ContractError>;

    fn remove_flow_limiter(
        env: &Env,
        operator: Address,
        token_id: BytesN<32>,
        flow_limiter: Address,
    ) -> Result<(), ContractError>;

    fn transfer_token_operatorship(
        env: &Env,
        operator: Address,
        token_id: BytesN<32>,
        new_operator: Address,
    ) -> Result<(), ContractError>;

    /// Deploys an interchain token under the factory salt of `deployer` and mints
    /// `initial_supply` to `deployer`.
    fn create_interchain_token(
        env: &Env,
        deployer: Address,
        salt: BytesN<32>,
        token_metadata: TokenMetadata,
        initial_supply: i128,
        minter: Option<Address>,
    ) -> Result<BytesN<32>, ContractError>;

    /// Deploys the factory token of `deployer` on `destination_chain`, copying the local
    /// token's metadata.
    fn create_remote_interchain_token(
        env: &Env,
        deployer: Address,
        salt: BytesN<32>,
        minter: Option<Address>,
        destination_chain: String,
        destination_minter: Option<Bytes>,
        gas_token: Option<Token>,
    ) -> Result<BytesN<32>, ContractError>;

    /// Allows `deployer` to make `destination_minter` the minter of the token on
    /// `destination_chain`. `minter` must be a minter of the local token.
    fn approve_remote_deployment(
        env: &Env,
        minter: Address,
        deployer: Address,
        salt: BytesN<32>,
        destination_chain: String,
        destination_minter: Bytes,
    ) -> Result<(), ContractError>;

    fn revoke_remote_deployment(
        env: &Env,
        minter: Address,
        deployer: Address,
        salt: BytesN<32>,
        destination_chain: String,
    ) -> Result<(), ContractError>;

    /// Registers an existing token under its canonical id with a lock/unlock manager.
    fn register_canonical_token(
        env: &Env,
        token_address: Address,
    ) -> Result<BytesN<32>, ContractError>;

    fn deploy_remote_canonical_token(
        env: &Env,
        token_address: Address,
        destination_chain: String,
        spender: Address,
        gas_token: Option<Token>,
    ) -> Result<BytesN<32>, ContractError>;
}
