use axelar_soroban_std::ensure;
use interchain_token::InterchainTokenClient;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, BytesN, Env};

use crate::error::ContractError;
use crate::flow_limit;
use crate::storage_types::TokenIdConfigValue;
use crate::types::TokenManagerType;

/// Debits `amount` from `sender` and records it as outgoing flow. Returns the amount
/// that actually arrived, which is less than `amount` for fee-on-transfer tokens.
///
/// With `token_only` the registered token contract itself is the caller and has already
/// debited the sender, so only the flow is recorded.
pub fn take_token(
    env: &Env,
    sender: &Address,
    token_id: &BytesN<32>,
    TokenIdConfigValue {
        token_address,
        token_manager_type,
    }: TokenIdConfigValue,
    amount: i128,
    token_only: bool,
) -> Result<i128, ContractError> {
    let service = env.current_contract_address();
    let token = TokenClient::new(env, &token_address);

    let amount = if token_only {
        token_address.require_auth();
        amount
    } else {
        match token_manager_type {
            TokenManagerType::NativeInterchainToken | TokenManagerType::MintBurn => {
                custody(token.try_burn(sender, &amount), ContractError::TakeTokenFailed)?;
                amount
            }
            TokenManagerType::MintBurnFrom => {
                custody(
                    token.try_burn_from(&service, sender, &amount),
                    ContractError::TakeTokenFailed,
                )?;
                amount
            }
            TokenManagerType::LockUnlock => {
                custody(
                    token.try_transfer(sender, &service, &amount),
                    ContractError::TakeTokenFailed,
                )?;
                amount
            }
            TokenManagerType::LockUnlockFee => balance_delta(&token, &service, || {
                custody(
                    token.try_transfer(sender, &service, &amount),
                    ContractError::TakeTokenFailed,
                )
            })?,
        }
    };

    ensure!(amount > 0, ContractError::TakeTokenFailed);

    flow_limit::add_flow_out(env, token_id, amount)?;

    Ok(amount)
}

/// Records `amount` as incoming flow and credits it to `recipient`. Returns the amount
/// the recipient received and the token address.
pub fn give_token(
    env: &Env,
    recipient: &Address,
    token_id: &BytesN<32>,
    TokenIdConfigValue {
        token_address,
        token_manager_type,
    }: TokenIdConfigValue,
    amount: i128,
) -> Result<(i128, Address), ContractError> {
    flow_limit::add_flow_in(env, token_id, amount)?;

    let service = env.current_contract_address();
    let token = TokenClient::new(env, &token_address);

    let amount = match token_manager_type {
        TokenManagerType::NativeInterchainToken => {
            custody(
                InterchainTokenClient::new(env, &token_address).try_mint_from(
                    &service,
                    recipient,
                    &amount,
                ),
                ContractError::GiveTokenFailed,
            )?;
            amount
        }
        TokenManagerType::MintBurn | TokenManagerType::MintBurnFrom => {
            custody(
                StellarAssetClient::new(env, &token_address).try_mint(recipient, &amount),
                ContractError::GiveTokenFailed,
            )?;
            amount
        }
        TokenManagerType::LockUnlock => {
            custody(
                token.try_transfer(&service, recipient, &amount),
                ContractError::GiveTokenFailed,
            )?;
            amount
        }
        TokenManagerType::LockUnlockFee => {
            let received = balance_delta(&token, recipient, || {
                custody(
                    token.try_transfer(&service, recipient, &amount),
                    ContractError::GiveTokenFailed,
                )
            })?;
            ensure!(received > 0, ContractError::GiveTokenFailed);
            received
        }
    };

    Ok((amount, token_address))
}

/// Moves tokens from the express executor straight to the recipient, outside of flow
/// accounting. The executor is reimbursed once the message itself arrives.
pub fn transfer_express(
    env: &Env,
    express_executor: &Address,
    recipient: &Address,
    token_address: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    custody(
        TokenClient::new(env, token_address).try_transfer(express_executor, recipient, &amount),
        ContractError::TakeTokenFailed,
    )
}

/// Runs `custody_call` and returns by how much it changed the balance of `account`.
/// Nothing else touches the balance between the two snapshots.
fn balance_delta(
    token: &TokenClient,
    account: &Address,
    custody_call: impl FnOnce() -> Result<(), ContractError>,
) -> Result<i128, ContractError> {
    let before = token.balance(account);
    custody_call()?;
    let after = token.balance(account);

    Ok(after - before)
}

fn custody<T, E, F>(
    result: Result<Result<T, E>, F>,
    error: ContractError,
) -> Result<(), ContractError> {
    match result {
        Ok(Ok(_)) => Ok(()),
        _ => Err(error),
    }
}
