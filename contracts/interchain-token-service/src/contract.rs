use axelar_gas_service::AxelarGasServiceClient;
use axelar_gateway::executable::AxelarExecutableInterface;
use axelar_gateway::AxelarGatewayMessagingClient;
use axelar_soroban_std::address::AddressExt;
use axelar_soroban_std::events::Event;
use axelar_soroban_std::token::validate_token_metadata;
use axelar_soroban_std::ttl::extend_instance_ttl;
use axelar_soroban_std::types::Token;
use axelar_soroban_std::{ensure, interfaces, ownable};
use interchain_token::InterchainTokenClient;
use interchain_token_deployer::InterchainTokenDeployerClient;
use soroban_sdk::token::TokenClient;
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{contract, contractimpl, Address, Bytes, BytesN, Env, String, Vec};
use soroban_token_sdk::metadata::TokenMetadata;

use crate::abi;
use crate::error::ContractError;
use crate::event::{
    ExpressExecutedEvent, ExpressExecutionFulfilledEvent, FlowLimitSetEvent,
    FlowLimiterAddedEvent, FlowLimiterRemovedEvent, InterchainTokenDeployedEvent,
    InterchainTokenDeploymentStartedEvent, InterchainTokenIdClaimedEvent,
    InterchainTransferReceivedEvent, InterchainTransferSentEvent, RemoteDeploymentApprovedEvent,
    RemoteDeploymentRevokedEvent, TokenManagerDeploymentStartedEvent,
    TokenOperatorshipTransferredEvent, TrustedAddressRemovedEvent, TrustedAddressSetEvent,
};
use crate::executable::InterchainTokenExecutableClient;
use crate::express;
use crate::factory;
use crate::flow_limit;
use crate::interface::InterchainTokenServiceInterface;
use crate::message_routing::{self, OutboundMessage};
use crate::storage_types::{DataKey, ExpressKey};
use crate::token_handler;
use crate::token_id;
use crate::token_manager;
use crate::types::{
    DeployInterchainToken, DeployTokenManager, InterchainTransfer, Message, TokenManagerParams,
    TokenManagerType,
};

#[ownable]
#[contract]
pub struct InterchainTokenService;

#[contractimpl]
impl InterchainTokenService {
    pub fn __constructor(
        env: Env,
        owner: Address,
        gateway: Address,
        gas_service: Address,
        token_deployer: Address,
        chain_name: String,
    ) {
        interfaces::set_owner(&env, &owner);
        env.storage().instance().set(&DataKey::Gateway, &gateway);
        env.storage()
            .instance()
            .set(&DataKey::GasService, &gas_service);
        env.storage()
            .instance()
            .set(&DataKey::TokenDeployer, &token_deployer);
        env.storage().instance().set(&DataKey::ChainName, &chain_name);
    }
}

#[contractimpl]
impl AxelarExecutableInterface for InterchainTokenService {
    type Error = ContractError;

    fn gateway(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Gateway)
            .expect("gateway must be set during contract construction")
    }

    fn execute(
        env: Env,
        source_chain: String,
        message_id: String,
        source_address: String,
        payload: Bytes,
    ) -> Result<(), ContractError> {
        ensure_not_paused(&env)?;

        message_routing::ensure_trusted_source(&env, &source_chain, &source_address)?;

        Self::validate_message(&env, &source_chain, &message_id, &source_address, &payload)?;

        let (original_source_chain, message) =
            message_routing::route_inbound(&env, &source_chain, &payload)?;

        extend_instance_ttl(&env);

        match message {
            Message::InterchainTransfer(transfer) => {
                let express_key = ExpressKey {
                    source_chain,
                    message_id: message_id.clone(),
                    source_address,
                    payload_hash: env.crypto().keccak256(&payload).into(),
                };

                Self::execute_transfer(&env, express_key, original_source_chain, message_id, transfer)
            }
            Message::DeployInterchainToken(DeployInterchainToken {
                token_id,
                name,
                symbol,
                decimals,
                minter,
            }) => {
                let minter = minter
                    .map(|minter| Self::minter_address(&env, &minter))
                    .transpose()?;
                let token_metadata = TokenMetadata {
                    decimal: decimals.into(),
                    name,
                    symbol,
                };
                validate_token_metadata(&token_metadata)?;

                Self::deploy_local_interchain_token(&env, &token_id, token_metadata, minter)?;

                Ok(())
            }
            Message::DeployTokenManager(DeployTokenManager {
                token_id,
                token_manager_type,
                params,
            }) => Self::deploy_local_token_manager(&env, &token_id, token_manager_type, &params),
        }
    }
}

#[contractimpl]
impl InterchainTokenServiceInterface for InterchainTokenService {
    fn gas_service(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::GasService)
            .expect("gas service must be set during contract construction")
    }

    fn token_deployer(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::TokenDeployer)
            .expect("token deployer must be set during contract construction")
    }

    fn chain_name(env: &Env) -> String {
        env.storage()
            .instance()
            .get(&DataKey::ChainName)
            .expect("chain name must be set during contract construction")
    }

    fn its_hub_chain_name(env: &Env) -> String {
        String::from_str(env, message_routing::ITS_HUB_CHAIN_NAME)
    }

    fn its_hub_routing_identifier(env: &Env) -> String {
        String::from_str(env, message_routing::ITS_HUB_ROUTING_IDENTIFIER)
    }

    fn trusted_address(env: &Env, chain: String) -> Option<String> {
        message_routing::trusted_address(env, &chain)
    }

    fn set_trusted_address(
        env: &Env,
        chain: String,
        address: String,
    ) -> Result<(), ContractError> {
        Self::owner(env).require_auth();

        message_routing::set_trusted_address(env, &chain, &address)?;

        extend_instance_ttl(env);

        TrustedAddressSetEvent {
            chain,
            trusted_address: address,
        }
        .emit(env);

        Ok(())
    }

    fn remove_trusted_address(env: &Env, chain: String) -> Result<(), ContractError> {
        Self::owner(env).require_auth();

        let trusted_address = message_routing::remove_trusted_address(env, &chain)?;

        extend_instance_ttl(env);

        TrustedAddressRemovedEvent {
            chain,
            trusted_address,
        }
        .emit(env);

        Ok(())
    }

    fn paused(env: &Env) -> bool {
        interfaces::paused(env)
    }

    fn set_pause_status(env: &Env, paused: bool) {
        Self::owner(env).require_auth();

        interfaces::set_paused(env, paused);

        extend_instance_ttl(env);
    }

    fn interchain_token_id(env: &Env, deployer: Address, salt: BytesN<32>) -> BytesN<32> {
        token_id::interchain_token_id(env, &deployer, &salt)
    }

    fn canonical_interchain_token_id(env: &Env, token_address: Address) -> BytesN<32> {
        token_id::canonical_interchain_token_id(env, &Self::chain_name(env), &token_address)
    }

    fn interchain_token_deploy_salt(
        env: &Env,
        deployer: Address,
        salt: BytesN<32>,
    ) -> BytesN<32> {
        token_id::interchain_token_deploy_salt(env, &Self::chain_name(env), &deployer, &salt)
    }

    fn token_manager_address(env: &Env, token_id: BytesN<32>) -> Result<Address, ContractError> {
        token_manager::token_id_config(env, &token_id)?;

        Ok(env.current_contract_address())
    }

    fn token_address(env: &Env, token_id: BytesN<32>) -> Result<Address, ContractError> {
        Ok(token_manager::token_id_config(env, &token_id)?.token_address)
    }

    fn token_manager_type(
        env: &Env,
        token_id: BytesN<32>,
    ) -> Result<TokenManagerType, ContractError> {
        Ok(token_manager::token_id_config(env, &token_id)?.token_manager_type)
    }

    fn flow_limit(env: &Env, token_id: BytesN<32>) -> i128 {
        flow_limit::flow_limit(env, &token_id)
    }

    fn flow_in_amount(env: &Env, token_id: BytesN<32>) -> i128 {
        flow_limit::flow_in_amount(env, &token_id)
    }

    fn flow_out_amount(env: &Env, token_id: BytesN<32>) -> i128 {
        flow_limit::flow_out_amount(env, &token_id)
    }

    fn is_token_operator(env: &Env, token_id: BytesN<32>, account: Address) -> bool {
        token_manager::is_operator(env, &token_id, &account)
    }

    fn is_flow_limiter(env: &Env, token_id: BytesN<32>, account: Address) -> bool {
        token_manager::is_flow_limiter(env, &token_id, &account)
    }

    fn express_executor(
        env: &Env,
        source_chain: String,
        message_id: String,
        source_address: String,
        payload_hash: BytesN<32>,
    ) -> Option<Address> {
        express::express_executor(
            env,
            ExpressKey {
                source_chain,
                message_id,
                source_address,
                payload_hash,
            },
        )
    }

    fn deploy_token_manager(
        env: &Env,
        deployer: Address,
        salt: BytesN<32>,
        destination_chain: String,
        token_manager_type: TokenManagerType,
        params: Bytes,
        gas_token: Option<Token>,
    ) -> Result<BytesN<32>, ContractError> {
        deployer.require_auth();
        ensure_not_paused(env)?;

        ensure!(
            token_manager_type != TokenManagerType::NativeInterchainToken,
            ContractError::CannotDeploy
        );

        let token_id = token_id::interchain_token_id(env, &deployer, &salt);

        extend_instance_ttl(env);

        InterchainTokenIdClaimedEvent {
            token_id: token_id.clone(),
            deployer: deployer.clone(),
            salt,
        }
        .emit(env);

        if destination_chain.is_empty() {
            Self::deploy_local_token_manager(env, &token_id, token_manager_type, &params)?;

            return Ok(token_id);
        }

        ensure!(
            destination_chain != Self::chain_name(env),
            ContractError::CannotDeployRemotelyToSelf
        );

        TokenManagerDeploymentStartedEvent {
            token_id: token_id.clone(),
            destination_chain: destination_chain.clone(),
            token_manager_type,
            params: params.clone(),
        }
        .emit(env);

        Self::send_message(
            env,
            &deployer,
            destination_chain,
            Message::DeployTokenManager(DeployTokenManager {
                token_id: token_id.clone(),
                token_manager_type,
                params,
            }),
            gas_token,
        )?;

        Ok(token_id)
    }

    fn deploy_interchain_token(
        env: &Env,
        deployer: Address,
        salt: BytesN<32>,
        destination_chain: String,
        token_metadata: TokenMetadata,
        minter: Bytes,
        gas_token: Option<Token>,
    ) -> Result<BytesN<32>, ContractError> {
        deployer.require_auth();
        ensure_not_paused(env)?;

        validate_token_metadata(&token_metadata)?;

        let token_id = token_id::interchain_token_id(env, &deployer, &salt);

        extend_instance_ttl(env);

        InterchainTokenIdClaimedEvent {
            token_id: token_id.clone(),
            deployer: deployer.clone(),
            salt,
        }
        .emit(env);

        if destination_chain.is_empty() {
            let minter = if minter.is_empty() {
                None
            } else {
                Some(Self::minter_address(env, &minter)?)
            };

            Self::deploy_local_interchain_token(env, &token_id, token_metadata, minter)?;

            return Ok(token_id);
        }

        let minter = (!minter.is_empty()).then_some(minter);

        Self::deploy_remote_interchain_token(
            env,
            &deployer,
            token_id,
            destination_chain,
            token_metadata,
            minter,
            gas_token,
        )
    }

    fn interchain_transfer(
        env: &Env,
        caller: Address,
        token_id: BytesN<32>,
        destination_chain: String,
        destination_address: Bytes,
        amount: i128,
        metadata: Bytes,
        gas_token: Option<Token>,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        let data = abi::decode_metadata(&metadata)?;

        Self::send_transfer(
            env,
            &caller,
            token_id,
            destination_chain,
            destination_address,
            amount,
            data,
            gas_token,
            false,
        )
    }

    fn call_contract_with_token(
        env: &Env,
        caller: Address,
        token_id: BytesN<32>,
        destination_chain: String,
        destination_address: Bytes,
        amount: i128,
        data: Bytes,
        gas_token: Option<Token>,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        ensure!(!data.is_empty(), ContractError::EmptyData);

        Self::send_transfer(
            env,
            &caller,
            token_id,
            destination_chain,
            destination_address,
            amount,
            Some(data),
            gas_token,
            false,
        )
    }

    fn transmit_interchain_transfer(
        env: &Env,
        token_id: BytesN<32>,
        source_address: Address,
        destination_chain: String,
        destination_address: Bytes,
        amount: i128,
        metadata: Bytes,
        gas_token: Option<Token>,
    ) -> Result<(), ContractError> {
        let data = abi::decode_metadata(&metadata)?;

        Self::send_transfer(
            env,
            &source_address,
            token_id,
            destination_chain,
            destination_address,
            amount,
            data,
            gas_token,
            true,
        )
    }

    fn express_execute(
        env: &Env,
        caller: Address,
        source_chain: String,
        message_id: String,
        source_address: String,
        payload: Bytes,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        ensure_not_paused(env)?;

        message_routing::ensure_trusted_source(env, &source_chain, &source_address)?;

        let (original_source_chain, message) =
            message_routing::route_inbound(env, &source_chain, &payload)?;

        let Message::InterchainTransfer(InterchainTransfer {
            token_id,
            source_address: transfer_source_address,
            destination_address,
            amount,
            data,
        }) = message
        else {
            return Err(ContractError::InvalidExpressMessageType);
        };

        ensure!(
            !AxelarGatewayMessagingClient::new(env, &Self::gateway(env))
                .is_message_executed(&source_chain, &message_id),
            ContractError::AlreadyExecuted
        );

        let payload_hash: BytesN<32> = env.crypto().keccak256(&payload).into();

        express::set_express_executor(
            env,
            ExpressKey {
                source_chain: source_chain.clone(),
                message_id: message_id.clone(),
                source_address: source_address.clone(),
                payload_hash: payload_hash.clone(),
            },
            &caller,
        )?;

        let destination_address = abi::address_from_bytes(env, &destination_address)
            .ok_or(ContractError::InvalidDestinationAddress)?;
        let token_address = token_manager::token_id_config(env, &token_id)?.token_address;

        token_handler::transfer_express(
            env,
            &caller,
            &destination_address,
            &token_address,
            amount,
        )?;

        extend_instance_ttl(env);

        ExpressExecutedEvent {
            source_chain,
            message_id: message_id.clone(),
            source_address,
            payload_hash,
            express_executor: caller,
        }
        .emit(env);

        if let Some(payload) = data {
            InterchainTokenExecutableClient::new(env, &destination_address)
                .execute_with_interchain_token(
                    &original_source_chain,
                    &message_id,
                    &transfer_source_address,
                    &payload,
                    &token_id,
                    &token_address,
                    &amount,
                );
        }

        Ok(())
    }

    fn set_flow_limit(
        env: &Env,
        flow_limiter: Address,
        token_id: BytesN<32>,
        flow_limit: i128,
    ) -> Result<(), ContractError> {
        flow_limiter.require_auth();
        ensure_not_paused(env)?;

        ensure!(
            token_manager::is_flow_limiter(env, &token_id, &flow_limiter),
            ContractError::NotFlowLimiter
        );

        Self::update_flow_limit(env, flow_limiter, token_id, flow_limit)
    }

    fn set_flow_limits(
        env: &Env,
        token_ids: Vec<BytesN<32>>,
        flow_limits: Vec<i128>,
    ) -> Result<(), ContractError> {
        let owner = Self::owner(env);
        owner.require_auth();
        ensure_not_paused(env)?;

        ensure!(
            token_ids.len() == flow_limits.len(),
            ContractError::LengthMismatch
        );

        for (token_id, flow_limit) in token_ids.into_iter().zip(flow_limits) {
            token_manager::token_id_config(env, &token_id)?;

            Self::update_flow_limit(env, owner.clone(), token_id, flow_limit)?;
        }

        Ok(())
    }

    fn add_flow_limiter(
        env: &Env,
        operator: Address,
        token_id: BytesN<32>,
        flow_limiter: Address,
    ) -> Result<(), ContractError> {
        Self::ensure_token_operator(env, &operator, &token_id)?;

        token_manager::add_flow_limiter(env, &token_id, &flow_limiter);

        FlowLimiterAddedEvent {
            token_id,
            flow_limiter,
        }
        .emit(env);

        Ok(())
    }

    fn remove_flow_limiter(
        env: &Env,
        operator: Address,
        token_id: BytesN<32>,
        flow_limiter: Address,
    ) -> Result<(), ContractError> {
        Self::ensure_token_operator(env, &operator, &token_id)?;

        token_manager::remove_flow_limiter(env, &token_id, &flow_limiter);

        FlowLimiterRemovedEvent {
            token_id,
            flow_limiter,
        }
        .emit(env);

        Ok(())
    }

    fn transfer_token_operatorship(
        env: &Env,
        operator: Address,
        token_id: BytesN<32>,
        new_operator: Address,
    ) -> Result<(), ContractError> {
        Self::ensure_token_operator(env, &operator, &token_id)?;

        token_manager::transfer_operatorship(env, &token_id, &operator, &new_operator);

        TokenOperatorshipTransferredEvent {
            token_id,
            previous_operator: operator,
            new_operator,
        }
        .emit(env);

        Ok(())
    }

    fn create_interchain_token(
        env: &Env,
        deployer: Address,
        salt: BytesN<32>,
        token_metadata: TokenMetadata,
        initial_supply: i128,
        minter: Option<Address>,
    ) -> Result<BytesN<32>, ContractError> {
        deployer.require_auth();
        ensure_not_paused(env)?;

        ensure!(initial_supply >= 0, ContractError::InvalidInitialSupply);

        let service = env.current_contract_address();
        ensure!(minter.as_ref() != Some(&service), ContractError::InvalidMinter);

        validate_token_metadata(&token_metadata)?;

        let deploy_salt = Self::interchain_token_deploy_salt(env, deployer.clone(), salt);
        let token_id = token_id::factory_token_id(env, &deploy_salt);

        extend_instance_ttl(env);

        InterchainTokenIdClaimedEvent {
            token_id: token_id.clone(),
            deployer: Address::zero(env),
            salt: deploy_salt,
        }
        .emit(env);

        let token_address =
            Self::deploy_local_interchain_token(env, &token_id, token_metadata, minter)?;

        if initial_supply > 0 {
            InterchainTokenClient::new(env, &token_address).mint_from(
                &service,
                &deployer,
                &initial_supply,
            );
        }

        Ok(token_id)
    }

    fn create_remote_interchain_token(
        env: &Env,
        deployer: Address,
        salt: BytesN<32>,
        minter: Option<Address>,
        destination_chain: String,
        destination_minter: Option<Bytes>,
        gas_token: Option<Token>,
    ) -> Result<BytesN<32>, ContractError> {
        deployer.require_auth();
        ensure_not_paused(env)?;

        let token_id = Self::factory_token_id(env, &deployer, salt);
        let token_address = token_manager::token_id_config(env, &token_id)?.token_address;

        let destination_minter = match (minter, destination_minter) {
            (Some(minter), destination_minter) => {
                ensure!(
                    minter != env.current_contract_address(),
                    ContractError::InvalidMinter
                );
                ensure!(
                    InterchainTokenClient::new(env, &token_address).is_minter(&minter),
                    ContractError::NotMinter
                );

                match destination_minter {
                    Some(destination_minter) => {
                        factory::use_deployment_approval(
                            env,
                            &minter,
                            &token_id,
                            &destination_chain,
                            &destination_minter,
                        )?;
                        Some(destination_minter)
                    }
                    None => Some(minter.to_xdr(env)),
                }
            }
            (None, Some(_)) => return Err(ContractError::InvalidMinter),
            (None, None) => None,
        };

        let token_metadata = Self::token_metadata(env, &token_address);

        Self::deploy_remote_interchain_token(
            env,
            &deployer,
            token_id,
            destination_chain,
            token_metadata,
            destination_minter,
            gas_token,
        )
    }

    fn approve_remote_deployment(
        env: &Env,
        minter: Address,
        deployer: Address,
        salt: BytesN<32>,
        destination_chain: String,
        destination_minter: Bytes,
    ) -> Result<(), ContractError> {
        minter.require_auth();
        ensure_not_paused(env)?;

        let token_id = Self::factory_token_id(env, &deployer, salt);
        let token_address = token_manager::token_id_config(env, &token_id)?.token_address;

        ensure!(
            InterchainTokenClient::new(env, &token_address).is_minter(&minter),
            ContractError::NotMinter
        );

        factory::approve_deployment(
            env,
            &minter,
            &token_id,
            &destination_chain,
            &destination_minter,
        );

        RemoteDeploymentApprovedEvent {
            minter,
            deployer,
            token_id,
            destination_chain,
            destination_minter,
        }
        .emit(env);

        Ok(())
    }

    fn revoke_remote_deployment(
        env: &Env,
        minter: Address,
        deployer: Address,
        salt: BytesN<32>,
        destination_chain: String,
    ) -> Result<(), ContractError> {
        minter.require_auth();
        ensure_not_paused(env)?;

        let token_id = Self::factory_token_id(env, &deployer, salt);

        factory::revoke_deployment(env, &minter, &token_id, &destination_chain);

        RemoteDeploymentRevokedEvent {
            minter,
            deployer,
            token_id,
            destination_chain,
        }
        .emit(env);

        Ok(())
    }

    fn register_canonical_token(
        env: &Env,
        token_address: Address,
    ) -> Result<BytesN<32>, ContractError> {
        ensure_not_paused(env)?;

        let token_id = Self::canonical_interchain_token_id(env, token_address.clone());

        extend_instance_ttl(env);

        token_manager::deploy(
            env,
            &token_id,
            &token_address,
            TokenManagerType::LockUnlock,
            None,
        )?;

        Ok(token_id)
    }

    fn deploy_remote_canonical_token(
        env: &Env,
        token_address: Address,
        destination_chain: String,
        spender: Address,
        gas_token: Option<Token>,
    ) -> Result<BytesN<32>, ContractError> {
        spender.require_auth();
        ensure_not_paused(env)?;

        let token_id = Self::canonical_interchain_token_id(env, token_address.clone());
        token_manager::token_id_config(env, &token_id)?;

        let token_metadata = Self::token_metadata(env, &token_address);

        Self::deploy_remote_interchain_token(
            env,
            &spender,
            token_id,
            destination_chain,
            token_metadata,
            None,
            gas_token,
        )
    }
}

fn ensure_not_paused(env: &Env) -> Result<(), ContractError> {
    ensure!(!interfaces::paused(env), ContractError::ContractPaused);

    Ok(())
}

impl InterchainTokenService {
    fn factory_token_id(env: &Env, deployer: &Address, salt: BytesN<32>) -> BytesN<32> {
        let deploy_salt = Self::interchain_token_deploy_salt(env, deployer.clone(), salt);

        token_id::factory_token_id(env, &deploy_salt)
    }

    fn token_metadata(env: &Env, token_address: &Address) -> TokenMetadata {
        let token = TokenClient::new(env, token_address);

        TokenMetadata {
            decimal: token.decimals(),
            name: token.name(),
            symbol: token.symbol(),
        }
    }

    /// A minter must be a valid address on this chain other than the service.
    fn minter_address(env: &Env, minter: &Bytes) -> Result<Address, ContractError> {
        let minter = abi::address_from_bytes(env, minter).ok_or(ContractError::InvalidMinter)?;

        ensure!(
            minter != env.current_contract_address(),
            ContractError::InvalidMinter
        );

        Ok(minter)
    }

    fn ensure_token_operator(
        env: &Env,
        operator: &Address,
        token_id: &BytesN<32>,
    ) -> Result<(), ContractError> {
        operator.require_auth();
        ensure_not_paused(env)?;

        ensure!(
            token_manager::is_operator(env, token_id, operator),
            ContractError::NotTokenOperator
        );

        Ok(())
    }

    fn update_flow_limit(
        env: &Env,
        flow_limiter: Address,
        token_id: BytesN<32>,
        flow_limit: i128,
    ) -> Result<(), ContractError> {
        flow_limit::set_flow_limit(env, &token_id, flow_limit)?;

        FlowLimitSetEvent {
            token_id,
            flow_limiter,
            flow_limit,
        }
        .emit(env);

        Ok(())
    }

    fn deploy_local_token_manager(
        env: &Env,
        token_id: &BytesN<32>,
        token_manager_type: TokenManagerType,
        params: &Bytes,
    ) -> Result<(), ContractError> {
        ensure!(
            token_manager_type != TokenManagerType::NativeInterchainToken,
            ContractError::CannotDeploy
        );

        let TokenManagerParams {
            operator,
            token_address,
        } = TokenManagerParams::abi_decode(env, params)?;

        token_manager::deploy(env, token_id, &token_address, token_manager_type, operator)
    }

    /// Deploys the token through the token deployer and binds it to a native token
    /// manager. The deployed token must report `token_id` and the service as a minter.
    fn deploy_local_interchain_token(
        env: &Env,
        token_id: &BytesN<32>,
        token_metadata: TokenMetadata,
        minter: Option<Address>,
    ) -> Result<Address, ContractError> {
        ensure!(
            !token_manager::is_deployed(env, token_id),
            ContractError::TokenManagerAlreadyDeployed
        );

        let deployer = InterchainTokenDeployerClient::new(env, &Self::token_deployer(env));
        let Ok(Ok(token_address)) =
            deployer.try_deploy_interchain_token(token_id, &token_metadata, &minter)
        else {
            return Err(ContractError::TokenDeploymentFailed);
        };

        let token = InterchainTokenClient::new(env, &token_address);
        ensure!(
            matches!(token.try_token_id(), Ok(Ok(deployed_id)) if deployed_id == *token_id)
                && matches!(
                    token.try_is_minter(&env.current_contract_address()),
                    Ok(Ok(true))
                ),
            ContractError::PostDeployFailed
        );

        token_manager::deploy(
            env,
            token_id,
            &token_address,
            TokenManagerType::NativeInterchainToken,
            minter.clone(),
        )?;

        InterchainTokenDeployedEvent {
            token_id: token_id.clone(),
            token_address: token_address.clone(),
            name: token_metadata.name,
            symbol: token_metadata.symbol,
            decimals: token_metadata.decimal,
            minter,
        }
        .emit(env);

        Ok(token_address)
    }

    fn deploy_remote_interchain_token(
        env: &Env,
        spender: &Address,
        token_id: BytesN<32>,
        destination_chain: String,
        token_metadata: TokenMetadata,
        minter: Option<Bytes>,
        gas_token: Option<Token>,
    ) -> Result<BytesN<32>, ContractError> {
        ensure!(
            destination_chain != Self::chain_name(env),
            ContractError::CannotDeployRemotelyToSelf
        );

        validate_token_metadata(&token_metadata)?;
        let decimals =
            u8::try_from(token_metadata.decimal).map_err(|_| ContractError::InvalidDecimals)?;

        extend_instance_ttl(env);

        InterchainTokenDeploymentStartedEvent {
            token_id: token_id.clone(),
            destination_chain: destination_chain.clone(),
            name: token_metadata.name.clone(),
            symbol: token_metadata.symbol.clone(),
            decimals: token_metadata.decimal,
            minter: minter.clone(),
        }
        .emit(env);

        Self::send_message(
            env,
            spender,
            destination_chain,
            Message::DeployInterchainToken(DeployInterchainToken {
                token_id: token_id.clone(),
                name: token_metadata.name,
                symbol: token_metadata.symbol,
                decimals,
                minter,
            }),
            gas_token,
        )?;

        Ok(token_id)
    }

    fn send_transfer(
        env: &Env,
        sender: &Address,
        token_id: BytesN<32>,
        destination_chain: String,
        destination_address: Bytes,
        amount: i128,
        data: Option<Bytes>,
        gas_token: Option<Token>,
        token_only: bool,
    ) -> Result<(), ContractError> {
        ensure_not_paused(env)?;

        ensure!(amount > 0, ContractError::InvalidAmount);
        ensure!(
            !destination_address.is_empty(),
            ContractError::EmptyDestinationAddress
        );

        let config = token_manager::token_id_config(env, &token_id)?;
        let amount =
            token_handler::take_token(env, sender, &token_id, config, amount, token_only)?;

        extend_instance_ttl(env);

        InterchainTransferSentEvent {
            token_id: token_id.clone(),
            source_address: sender.clone(),
            destination_chain: destination_chain.clone(),
            destination_address: destination_address.clone(),
            amount,
            data_hash: data
                .as_ref()
                .map(|data| env.crypto().keccak256(data).into()),
        }
        .emit(env);

        Self::send_message(
            env,
            sender,
            destination_chain,
            Message::InterchainTransfer(InterchainTransfer {
                token_id,
                source_address: sender.clone().to_xdr(env),
                destination_address,
                amount,
                data,
            }),
            gas_token,
        )
    }

    /// Routes `message` and hands it to the gateway, paying gas first if `gas_token`
    /// is given.
    fn send_message(
        env: &Env,
        spender: &Address,
        destination_chain: String,
        message: Message,
        gas_token: Option<Token>,
    ) -> Result<(), ContractError> {
        let OutboundMessage {
            destination_chain,
            destination_address,
            payload,
        } = message_routing::route_outbound(env, destination_chain, message)?;

        let service = env.current_contract_address();

        if let Some(gas_token) = gas_token {
            AxelarGasServiceClient::new(env, &Self::gas_service(env)).pay_gas(
                &service,
                &destination_chain,
                &destination_address,
                &payload,
                spender,
                &gas_token,
                &Bytes::new(env),
            );
        }

        AxelarGatewayMessagingClient::new(env, &Self::gateway(env)).call_contract(
            &service,
            &destination_chain,
            &destination_address,
            &payload,
        );

        Ok(())
    }

    fn execute_transfer(
        env: &Env,
        express_key: ExpressKey,
        source_chain: String,
        message_id: String,
        InterchainTransfer {
            token_id,
            source_address,
            destination_address,
            amount,
            data,
        }: InterchainTransfer,
    ) -> Result<(), ContractError> {
        let config = token_manager::token_id_config(env, &token_id)?;

        if let Some(express_executor) = express::pop_express_executor(env, express_key.clone()) {
            token_handler::give_token(env, &express_executor, &token_id, config, amount)?;

            ExpressExecutionFulfilledEvent {
                source_chain: express_key.source_chain,
                message_id: express_key.message_id,
                source_address: express_key.source_address,
                payload_hash: express_key.payload_hash,
                express_executor,
            }
            .emit(env);

            return Ok(());
        }

        let destination_address = abi::address_from_bytes(env, &destination_address)
            .ok_or(ContractError::InvalidDestinationAddress)?;

        let (amount, token_address) =
            token_handler::give_token(env, &destination_address, &token_id, config, amount)?;

        InterchainTransferReceivedEvent {
            source_chain: source_chain.clone(),
            message_id: message_id.clone(),
            token_id: token_id.clone(),
            source_address: source_address.clone(),
            destination_address: destination_address.clone(),
            amount,
            data_hash: data
                .as_ref()
                .map(|data| env.crypto().keccak256(data).into()),
        }
        .emit(env);

        if let Some(payload) = data {
            InterchainTokenExecutableClient::new(env, &destination_address)
                .execute_with_interchain_token(
                    &source_chain,
                    &message_id,
                    &source_address,
                    &payload,
                    &token_id,
                    &token_address,
                    &amount,
                );
        }

        Ok(())
    }
}
