use soroban_sdk::{assert_with_error, Address, Env};

use crate::error::ContractError;
use crate::storage_types::{AllowanceDataKey, AllowanceValue, DataKey};

fn key(from: &Address, spender: &Address) -> DataKey {
    DataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    })
}

/// Allowances past their expiration ledger read as zero.
pub fn read(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let allowance = env
        .storage()
        .temporary()
        .get::<_, AllowanceValue>(&key(from, spender));

    match allowance {
        Some(allowance) if allowance.expiration_ledger >= env.ledger().sequence() => allowance,
        Some(AllowanceValue {
            expiration_ledger, ..
        }) => AllowanceValue {
            amount: 0,
            expiration_ledger,
        },
        None => AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        },
    }
}

/// A non-zero allowance must not already be expired. Its entry lives until the expiration
/// ledger.
pub fn write(env: &Env, from: &Address, spender: &Address, allowance: AllowanceValue) {
    let current_ledger = env.ledger().sequence();

    assert_with_error!(
        env,
        allowance.amount == 0 || allowance.expiration_ledger >= current_ledger,
        ContractError::InvalidExpirationLedger
    );

    let key = key(from, spender);
    env.storage().temporary().set(&key, &allowance);

    if allowance.amount > 0 {
        let live_for = allowance.expiration_ledger.saturating_sub(current_ledger);

        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
}

/// Panics with `InsufficientAllowance` if `spender` may not move `amount` of `from`'s tokens.
pub fn spend(env: &Env, from: &Address, spender: &Address, amount: i128) {
    let allowance = read(env, from, spender);

    assert_with_error!(
        env,
        allowance.amount >= amount,
        ContractError::InsufficientAllowance
    );

    if amount > 0 {
        write(
            env,
            from,
            spender,
            AllowanceValue {
                amount: allowance.amount - amount,
                expiration_ledger: allowance.expiration_ledger,
            },
        );
    }
}
