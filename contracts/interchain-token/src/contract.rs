use axelar_soroban_std::events::Event;
use axelar_soroban_std::interfaces::OwnableInterface;
use axelar_soroban_std::token::validate_token_metadata;
use axelar_soroban_std::ttl::extend_instance_ttl;
use axelar_soroban_std::types::Token;
use axelar_soroban_std::{ensure, interfaces};
use soroban_sdk::token::TokenInterface;
use soroban_sdk::{
    assert_with_error, contract, contractimpl, Address, Bytes, BytesN, Env, String,
};
use soroban_token_sdk::event::Events as TokenEvents;
use soroban_token_sdk::metadata::TokenMetadata;
use soroban_token_sdk::TokenUtils;

use crate::error::ContractError;
use crate::event::{MinterAddedEvent, MinterRemovedEvent};
use crate::interface::InterchainTokenInterface;
use crate::storage_types::{AllowanceValue, DataKey};
use crate::{allowance, balance, InterchainTransferTransmitterClient};

#[contract]
pub struct InterchainToken;

#[contractimpl]
impl InterchainToken {
    /// The interchain token service is always a minter. `minter` is an optional extra one.
    pub fn __constructor(
        env: Env,
        owner: Address,
        minter: Option<Address>,
        interchain_token_service: Address,
        token_id: BytesN<32>,
        token_metadata: TokenMetadata,
    ) -> Result<(), ContractError> {
        interfaces::set_owner(&env, &owner);

        validate_token_metadata(&token_metadata)?;

        TokenUtils::new(&env).metadata().set_metadata(&token_metadata);

        env.storage().instance().set(&DataKey::TokenId, &token_id);
        env.storage()
            .instance()
            .set(&DataKey::InterchainTokenService, &interchain_token_service);

        Self::write_minter(&env, &interchain_token_service);
        if let Some(minter) = minter {
            Self::write_minter(&env, &minter);
        }

        Ok(())
    }
}

#[contractimpl]
impl InterchainTokenInterface for InterchainToken {
    fn token_id(env: &Env) -> BytesN<32> {
        env.storage()
            .instance()
            .get(&DataKey::TokenId)
            .expect("token id must be set during contract construction")
    }

    fn interchain_token_service(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::InterchainTokenService)
            .expect("interchain token service must be set during contract construction")
    }

    fn is_minter(env: &Env, minter: Address) -> bool {
        env.storage().instance().has(&DataKey::Minter(minter))
    }

    fn mint_from(
        env: Env,
        minter: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        minter.require_auth();

        ensure!(
            Self::is_minter(&env, minter.clone()),
            ContractError::NotMinter
        );
        ensure!(amount >= 0, ContractError::InvalidAmount);

        extend_instance_ttl(&env);

        balance::credit(&env, &to, amount);

        TokenUtils::new(&env).events().mint(minter, to, amount);

        Ok(())
    }

    fn add_minter(env: &Env, minter: Address) {
        Self::owner(env).require_auth();

        Self::write_minter(env, &minter);

        MinterAddedEvent { minter }.emit(env);
    }

    fn remove_minter(env: &Env, minter: Address) {
        Self::owner(env).require_auth();

        env.storage()
            .instance()
            .remove(&DataKey::Minter(minter.clone()));

        MinterRemovedEvent { minter }.emit(env);
    }

    fn interchain_transfer(
        env: Env,
        from: Address,
        destination_chain: String,
        destination_address: Bytes,
        amount: i128,
        metadata: Bytes,
        gas_token: Option<Token>,
    ) -> Result<(), ContractError> {
        from.require_auth();

        ensure!(amount > 0, ContractError::InvalidAmount);

        extend_instance_ttl(&env);

        balance::debit(&env, &from, amount);
        TokenUtils::new(&env).events().burn(from.clone(), amount);

        InterchainTransferTransmitterClient::new(&env, &Self::interchain_token_service(&env))
            .transmit_interchain_transfer(
                &Self::token_id(&env),
                &from,
                &destination_chain,
                &destination_address,
                &amount,
                &metadata,
                &gas_token,
            );

        Ok(())
    }
}

#[contractimpl]
impl TokenInterface for InterchainToken {
    fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        extend_instance_ttl(&env);

        allowance::read(&env, &from, &spender).amount
    }

    fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();
        Self::ensure_non_negative(&env, amount);
        extend_instance_ttl(&env);

        allowance::write(
            &env,
            &from,
            &spender,
            AllowanceValue {
                amount,
                expiration_ledger,
            },
        );

        TokenUtils::new(&env)
            .events()
            .approve(from, spender, amount, expiration_ledger);
    }

    fn balance(env: Env, id: Address) -> i128 {
        extend_instance_ttl(&env);

        balance::read(&env, &id)
    }

    fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        Self::move_balance(&env, &from, &to, amount);

        TokenUtils::new(&env).events().transfer(from, to, amount);
    }

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        Self::ensure_non_negative(&env, amount);
        allowance::spend(&env, &from, &spender, amount);
        Self::move_balance(&env, &from, &to, amount);

        TokenUtils::new(&env).events().transfer(from, to, amount);
    }

    fn burn(env: Env, from: Address, amount: i128) {
        from.require_auth();
        Self::burn_balance(&env, &from, amount);

        TokenUtils::new(&env).events().burn(from, amount);
    }

    fn burn_from(env: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();
        Self::ensure_non_negative(&env, amount);
        allowance::spend(&env, &from, &spender, amount);
        Self::burn_balance(&env, &from, amount);

        TokenUtils::new(&env).events().burn(from, amount);
    }

    fn decimals(env: Env) -> u32 {
        Self::metadata(&env).decimal
    }

    fn name(env: Env) -> String {
        Self::metadata(&env).name
    }

    fn symbol(env: Env) -> String {
        Self::metadata(&env).symbol
    }
}

#[contractimpl]
impl OwnableInterface for InterchainToken {
    fn owner(env: &Env) -> Address {
        interfaces::owner(env)
    }

    fn transfer_ownership(env: &Env, new_owner: Address) {
        let previous_owner = Self::owner(env);

        interfaces::transfer_ownership::<Self>(env, new_owner.clone());

        // the token's admin is its owner, so also emit the standard token event
        TokenEvents::new(env).set_admin(previous_owner, new_owner);
    }
}

impl InterchainToken {
    fn ensure_non_negative(env: &Env, amount: i128) {
        assert_with_error!(env, amount >= 0, ContractError::InvalidAmount);
    }

    fn write_minter(env: &Env, minter: &Address) {
        env.storage()
            .instance()
            .set(&DataKey::Minter(minter.clone()), &());
    }

    fn metadata(env: &Env) -> TokenMetadata {
        TokenUtils::new(env).metadata().get_metadata()
    }

    fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) {
        Self::ensure_non_negative(env, amount);
        extend_instance_ttl(env);

        balance::debit(env, from, amount);
        balance::credit(env, to, amount);
    }

    fn burn_balance(env: &Env, from: &Address, amount: i128) {
        Self::ensure_non_negative(env, amount);
        extend_instance_ttl(env);

        balance::debit(env, from, amount);
    }
}
