use axelar_soroban_std::ensure;
use axelar_soroban_std::ttl::extend_persistent_ttl;
use soroban_sdk::{BytesN, Env};

use crate::error::ContractError;
use crate::storage_types::DataKey;

enum FlowDirection {
    /// An interchain transfer coming into this chain.
    In,
    /// An interchain transfer leaving this chain.
    Out,
}

impl FlowDirection {
    fn key(&self, token_id: &BytesN<32>) -> DataKey {
        match self {
            Self::In => DataKey::FlowIn(token_id.clone()),
            Self::Out => DataKey::FlowOut(token_id.clone()),
        }
    }
}

/// The cap on each flow counter. Zero means no cap.
pub fn flow_limit(env: &Env, token_id: &BytesN<32>) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::FlowLimit(token_id.clone()))
        .unwrap_or_default()
}

pub fn set_flow_limit(env: &Env, token_id: &BytesN<32>, limit: i128) -> Result<(), ContractError> {
    ensure!(limit >= 0, ContractError::InvalidFlowLimit);

    let key = DataKey::FlowLimit(token_id.clone());
    env.storage().persistent().set(&key, &limit);
    extend_persistent_ttl(env, &key);

    Ok(())
}

pub fn flow_in_amount(env: &Env, token_id: &BytesN<32>) -> i128 {
    flow_amount(env, token_id, &FlowDirection::In)
}

pub fn flow_out_amount(env: &Env, token_id: &BytesN<32>) -> i128 {
    flow_amount(env, token_id, &FlowDirection::Out)
}

pub fn add_flow_in(env: &Env, token_id: &BytesN<32>, amount: i128) -> Result<(), ContractError> {
    add_flow(env, token_id, FlowDirection::In, amount)
}

pub fn add_flow_out(env: &Env, token_id: &BytesN<32>, amount: i128) -> Result<(), ContractError> {
    add_flow(env, token_id, FlowDirection::Out, amount)
}

fn flow_amount(env: &Env, token_id: &BytesN<32>, direction: &FlowDirection) -> i128 {
    env.storage()
        .persistent()
        .get(&direction.key(token_id))
        .unwrap_or_default()
}

/// Counters only grow. A limit lowered below the accrued flow blocks the direction
/// until it is raised again.
fn add_flow(
    env: &Env,
    token_id: &BytesN<32>,
    direction: FlowDirection,
    amount: i128,
) -> Result<(), ContractError> {
    let current = flow_amount(env, token_id, &direction);
    let updated = current
        .checked_add(amount)
        .ok_or(ContractError::FlowAdditionOverflow)?;

    let limit = flow_limit(env, token_id);
    if limit != 0 {
        ensure!(current <= limit, ContractError::FlowLimitOverflow);
        ensure!(updated <= limit, ContractError::FlowLimitExceeded);
    }

    let key = direction.key(token_id);
    env.storage().persistent().set(&key, &updated);
    extend_persistent_ttl(env, &key);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::InterchainTokenService;
    use axelar_soroban_std::{assert_err, assert_ok};
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::{Address, String};

    fn setup() -> (Env, Address, BytesN<32>) {
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
        let token_id = BytesN::from_array(&env, &[1; 32]);

        (env, contract_id, token_id)
    }

    #[test]
    fn counters_are_independent_and_capped() {
        let (env, contract_id, token_id) = setup();

        env.as_contract(&contract_id, || {
            assert_ok!(set_flow_limit(&env, &token_id, 1500));

            assert_ok!(add_flow_out(&env, &token_id, 1000));
            assert_err!(
                add_flow_out(&env, &token_id, 1000),
                ContractError::FlowLimitExceeded
            );
            assert_eq!(flow_out_amount(&env, &token_id), 1000);

            assert_ok!(add_flow_in(&env, &token_id, 1000));
            assert_eq!(flow_in_amount(&env, &token_id), 1000);

            assert_ok!(add_flow_out(&env, &token_id, 500));
            assert_eq!(flow_out_amount(&env, &token_id), 1500);
        });
    }

    #[test]
    fn zero_limit_is_unbounded() {
        let (env, contract_id, token_id) = setup();

        env.as_contract(&contract_id, || {
            assert_eq!(flow_limit(&env, &token_id), 0);

            assert_ok!(add_flow_in(&env, &token_id, i128::MAX));
            assert_eq!(flow_in_amount(&env, &token_id), i128::MAX);
        });
    }

    #[test]
    fn addition_overflow_fails_closed() {
        let (env, contract_id, token_id) = setup();

        env.as_contract(&contract_id, || {
            assert_ok!(add_flow_in(&env, &token_id, i128::MAX));
            assert_err!(
                add_flow_in(&env, &token_id, 1),
                ContractError::FlowAdditionOverflow
            );
            assert_eq!(flow_in_amount(&env, &token_id), i128::MAX);
        });
    }

    #[test]
    fn lowered_limit_blocks_further_flow() {
        let (env, contract_id, token_id) = setup();

        env.as_contract(&contract_id, || {
            assert_ok!(add_flow_out(&env, &token_id, 1000));
            assert_ok!(set_flow_limit(&env, &token_id, 500));

            assert_err!(
                add_flow_out(&env, &token_id, 1),
                ContractError::FlowLimitOverflow
            );

            assert_ok!(set_flow_limit(&env, &token_id, 2000));
            assert_ok!(add_flow_out(&env, &token_id, 1000));
        });
    }

    #[test]
    fn negative_limit_is_rejected() {
        let (env, contract_id, token_id) = setup();

        env.as_contract(&contract_id, || {
            assert_err!(
                set_flow_limit(&env, &token_id, -1),
                ContractError::InvalidFlowLimit
            );
        });
    }
}
