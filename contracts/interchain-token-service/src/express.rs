use axelar_soroban_std::ensure;
use axelar_soroban_std::ttl::extend_persistent_ttl;
use soroban_sdk::{Address, Env};

use crate::error::ContractError;
use crate::storage_types::{DataKey, ExpressKey};

pub fn express_executor(env: &Env, key: ExpressKey) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::ExpressExecutor(key))
}

/// Records who fronted the tokens for a message. A message can be expressed once.
pub fn set_express_executor(
    env: &Env,
    key: ExpressKey,
    express_executor: &Address,
) -> Result<(), ContractError> {
    let key = DataKey::ExpressExecutor(key);

    ensure!(
        !env.storage().persistent().has(&key),
        ContractError::ExpressExecutorAlreadySet
    );

    env.storage().persistent().set(&key, express_executor);
    extend_persistent_ttl(env, &key);

    Ok(())
}

/// Removes and returns the express executor of a message, if there is one.
pub fn pop_express_executor(env: &Env, key: ExpressKey) -> Option<Address> {
    let key = DataKey::ExpressExecutor(key);
    let express_executor = env.storage().persistent().get(&key);

    if express_executor.is_some() {
        env.storage().persistent().remove(&key);
    }

    express_executor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::InterchainTokenService;
    use axelar_soroban_std::{assert_err, assert_ok};
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::{BytesN, String};

    fn key(env: &Env, message_id: &str) -> ExpressKey {
        ExpressKey {
            source_chain: String::from_str(env, "ethereum"),
            message_id: String::from_str(env, message_id),
            source_address: String::from_str(env, "its"),
            payload_hash: BytesN::from_array(env, &[7; 32]),
        }
    }

    #[test]
    fn set_once_then_pop_once() {
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
        let executor = Address::generate(&env);

        env.as_contract(&contract_id, || {
            assert_eq!(pop_express_executor(&env, key(&env, "1")), None);

            assert_ok!(set_express_executor(&env, key(&env, "1"), &executor));
            assert_err!(
                set_express_executor(&env, key(&env, "1"), &Address::generate(&env)),
                ContractError::ExpressExecutorAlreadySet
            );
            assert_eq!(
                express_executor(&env, key(&env, "1")),
                Some(executor.clone())
            );
            assert_eq!(express_executor(&env, key(&env, "2")), None);

            assert_eq!(pop_express_executor(&env, key(&env, "1")), Some(executor));
            assert_eq!(pop_express_executor(&env, key(&env, "1")), None);
        });
    }
}
