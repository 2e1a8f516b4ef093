use axelar_soroban_std::ensure;
use axelar_soroban_std::events::Event;
use axelar_soroban_std::ttl::extend_persistent_ttl;
use soroban_sdk::{Address, BytesN, Env};

use crate::error::ContractError;
use crate::event::TokenManagerDeployedEvent;
use crate::storage_types::{DataKey, TokenIdConfigValue};
use crate::types::TokenManagerType;

pub fn is_deployed(env: &Env, token_id: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::TokenIdConfig(token_id.clone()))
}

pub fn token_id_config(
    env: &Env,
    token_id: &BytesN<32>,
) -> Result<TokenIdConfigValue, ContractError> {
    let key = DataKey::TokenIdConfig(token_id.clone());

    let config = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(ContractError::TokenManagerDoesNotExist)?;
    extend_persistent_ttl(env, &key);

    Ok(config)
}

/// Creates the token manager of `token_id`. Each token id gets exactly one.
///
/// The service and the optional `operator` become operators and flow limiters.
pub fn deploy(
    env: &Env,
    token_id: &BytesN<32>,
    token_address: &Address,
    token_manager_type: TokenManagerType,
    operator: Option<Address>,
) -> Result<(), ContractError> {
    ensure!(
        !is_deployed(env, token_id),
        ContractError::TokenManagerAlreadyDeployed
    );

    let key = DataKey::TokenIdConfig(token_id.clone());
    env.storage().persistent().set(
        &key,
        &TokenIdConfigValue {
            token_address: token_address.clone(),
            token_manager_type,
        },
    );
    extend_persistent_ttl(env, &key);

    let service = env.current_contract_address();
    grant(env, DataKey::TokenOperator(token_id.clone(), service.clone()));
    grant(env, DataKey::FlowLimiter(token_id.clone(), service));

    if let Some(operator) = operator.clone() {
        grant(env, DataKey::TokenOperator(token_id.clone(), operator.clone()));
        grant(env, DataKey::FlowLimiter(token_id.clone(), operator));
    }

    TokenManagerDeployedEvent {
        token_id: token_id.clone(),
        token_address: token_address.clone(),
        token_manager_type,
        operator,
    }
    .emit(env);

    Ok(())
}

pub fn is_operator(env: &Env, token_id: &BytesN<32>, account: &Address) -> bool {
    has_role(env, DataKey::TokenOperator(token_id.clone(), account.clone()))
}

pub fn is_flow_limiter(env: &Env, token_id: &BytesN<32>, account: &Address) -> bool {
    has_role(env, DataKey::FlowLimiter(token_id.clone(), account.clone()))
}

pub fn add_flow_limiter(env: &Env, token_id: &BytesN<32>, flow_limiter: &Address) {
    grant(env, DataKey::FlowLimiter(token_id.clone(), flow_limiter.clone()));
}

pub fn remove_flow_limiter(env: &Env, token_id: &BytesN<32>, flow_limiter: &Address) {
    revoke(env, DataKey::FlowLimiter(token_id.clone(), flow_limiter.clone()));
}

/// Moves the operator role of `token_id` from `operator` to `new_operator`.
pub fn transfer_operatorship(
    env: &Env,
    token_id: &BytesN<32>,
    operator: &Address,
    new_operator: &Address,
) {
    revoke(env, DataKey::TokenOperator(token_id.clone(), operator.clone()));
    grant(env, DataKey::TokenOperator(token_id.clone(), new_operator.clone()));
}

fn has_role(env: &Env, key: DataKey) -> bool {
    env.storage().persistent().has(&key)
}

fn grant(env: &Env, key: DataKey) {
    env.storage().persistent().set(&key, &());
    extend_persistent_ttl(env, &key);
}

fn revoke(env: &Env, key: DataKey) {
    env.storage().persistent().remove(&key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::InterchainTokenService;
    use axelar_soroban_std::{assert_err, assert_ok};
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::String;

    fn setup() -> (Env, Address) {
        let env = Env::default();
        let contract_id = env.register(
            InterchainTokenService,
            (
                Address::generate(&env),
                Address::generate(&env),
                Address::generate(&env),
                Address::generate(&env),
                String::from_str(&env, "stellar"),
            ),
        );

        (env, contract_id)
    }

    #[test]
    fn deploy_registers_config_and_roles() {
        let (env, contract_id) = setup();
        let token_id = BytesN::from_array(&env, &[1; 32]);
        let token_address = Address::generate(&env);
        let operator = Address::generate(&env);

        env.as_contract(&contract_id, || {
            assert!(!is_deployed(&env, &token_id));
            assert_err!(
                token_id_config(&env, &token_id),
                ContractError::TokenManagerDoesNotExist
            );

            assert_ok!(deploy(
                &env,
                &token_id,
                &token_address,
                TokenManagerType::LockUnlock,
                Some(operator.clone()),
            ));

            assert_eq!(
                assert_ok!(token_id_config(&env, &token_id)),
                TokenIdConfigValue {
                    token_address: token_address.clone(),
                    token_manager_type: TokenManagerType::LockUnlock,
                }
            );
            assert!(is_operator(&env, &token_id, &contract_id));
            assert!(is_flow_limiter(&env, &token_id, &contract_id));
            assert!(is_operator(&env, &token_id, &operator));
            assert!(is_flow_limiter(&env, &token_id, &operator));
            assert!(!is_operator(&env, &token_id, &token_address));
        });
    }

    #[test]
    fn second_deploy_fails() {
        let (env, contract_id) = setup();
        let token_id = BytesN::from_array(&env, &[1; 32]);
        let token_address = Address::generate(&env);

        env.as_contract(&contract_id, || {
            assert_ok!(deploy(
                &env,
                &token_id,
                &token_address,
                TokenManagerType::MintBurn,
                None,
            ));
            assert_err!(
                deploy(
                    &env,
                    &token_id,
                    &Address::generate(&env),
                    TokenManagerType::LockUnlock,
                    None,
                ),
                ContractError::TokenManagerAlreadyDeployed
            );

            assert_eq!(
                assert_ok!(token_id_config(&env, &token_id)).token_manager_type,
                TokenManagerType::MintBurn
            );
        });
    }

    #[test]
    fn roles_can_be_moved() {
        let (env, contract_id) = setup();
        let token_id = BytesN::from_array(&env, &[1; 32]);
        let operator = Address::generate(&env);
        let new_operator = Address::generate(&env);
        let flow_limiter = Address::generate(&env);

        env.as_contract(&contract_id, || {
            assert_ok!(deploy(
                &env,
                &token_id,
                &Address::generate(&env),
                TokenManagerType::LockUnlock,
                Some(operator.clone()),
            ));

            transfer_operatorship(&env, &token_id, &operator, &new_operator);
            assert!(!is_operator(&env, &token_id, &operator));
            assert!(is_operator(&env, &token_id, &new_operator));

            add_flow_limiter(&env, &token_id, &flow_limiter);
            assert!(is_flow_limiter(&env, &token_id, &flow_limiter));

            remove_flow_limiter(&env, &token_id, &flow_limiter);
            assert!(!is_flow_limiter(&env, &token_id, &flow_limiter));
        });
    }
}
