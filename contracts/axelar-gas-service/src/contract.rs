use soroban_sdk::{contract, contractimpl, token, Address, Bytes, Env, String};

use crate::error::ContractError;
use crate::event::{GasAddedEvent, GasCollectedEvent, GasPaidEvent, GasRefundedEvent};
use crate::interface::AxelarGasServiceInterface;
use crate::storage_types::DataKey;
use axelar_soroban_std::events::Event;
use axelar_soroban_std::{ensure, interfaces, ownable, types::Token};

#[ownable]
#[contract]
pub struct AxelarGasService;

#[contractimpl]
impl AxelarGasService {
    pub fn __constructor(env: Env, owner: Address, gas_collector: Address) {
        interfaces::set_owner(&env, &owner);
        env.storage()
            .instance()
            .set(&DataKey::GasCollector, &gas_collector);
    }
}

#[contractimpl]
impl AxelarGasServiceInterface for AxelarGasService {
    fn pay_gas(
        env: Env,
        sender: Address,
        destination_chain: String,
        destination_address: String,
        payload: Bytes,
        spender: Address,
        token: Token,
        metadata: Bytes,
    ) -> Result<(), ContractError> {
        Self::collect_payment(&env, &spender, &token)?;

        GasPaidEvent {
            sender,
            destination_chain,
            destination_address,
            payload_hash: env.crypto().keccak256(&payload).into(),
            spender,
            token,
            metadata,
        }
        .emit(&env);

        Ok(())
    }

    fn add_gas(
        env: Env,
        sender: Address,
        message_id: String,
        spender: Address,
        token: Token,
    ) -> Result<(), ContractError> {
        Self::collect_payment(&env, &spender, &token)?;

        GasAddedEvent {
            sender,
            message_id,
            spender,
            token,
        }
        .emit(&env);

        Ok(())
    }

    fn collect_fees(env: Env, receiver: Address, token: Token) -> Result<(), ContractError> {
        Self::gas_collector(&env).require_auth();

        ensure!(token.amount > 0, ContractError::InvalidAmount);

        let service = env.current_contract_address();
        let token_client = token::Client::new(&env, &token.address);

        ensure!(
            token_client.balance(&service) >= token.amount,
            ContractError::InsufficientBalance
        );

        token_client.transfer(&service, &receiver, &token.amount);

        GasCollectedEvent { receiver, token }.emit(&env);

        Ok(())
    }

    fn refund(env: Env, message_id: String, receiver: Address, token: Token) {
        Self::gas_collector(&env).require_auth();

        token::Client::new(&env, &token.address).transfer(
            &env.current_contract_address(),
            &receiver,
            &token.amount,
        );

        GasRefundedEvent {
            message_id,
            receiver,
            token,
        }
        .emit(&env);
    }

    fn gas_collector(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::GasCollector)
            .expect("gas collector must be set during contract construction")
    }
}

impl AxelarGasService {
    /// Moves a positive `token` amount from `spender` into the service.
    fn collect_payment(env: &Env, spender: &Address, token: &Token) -> Result<(), ContractError> {
        spender.require_auth();

        ensure!(token.amount > 0, ContractError::InvalidAmount);

        token::Client::new(env, &token.address).transfer(
            spender,
            &env.current_contract_address(),
            &token.amount,
        );

        Ok(())
    }
}
