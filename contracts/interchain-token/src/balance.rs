use axelar_soroban_std::ttl::extend_persistent_ttl;
use soroban_sdk::{assert_with_error, Address, Env};

use crate::error::ContractError;
use crate::storage_types::DataKey;

pub fn read(env: &Env, owner: &Address) -> i128 {
    let key = DataKey::Balance(owner.clone());

    let balance = env.storage().persistent().get::<_, i128>(&key);
    if balance.is_some() {
        extend_persistent_ttl(env, &key);
    }

    balance.unwrap_or_default()
}

pub fn credit(env: &Env, owner: &Address, amount: i128) {
    let balance = read(env, owner);

    write(env, owner, balance + amount);
}

/// Panics with `InsufficientBalance` if `owner` holds less than `amount`.
pub fn debit(env: &Env, owner: &Address, amount: i128) {
    let balance = read(env, owner);

    assert_with_error!(env, balance >= amount, ContractError::InsufficientBalance);

    write(env, owner, balance - amount);
}

fn write(env: &Env, owner: &Address, balance: i128) {
    let key = DataKey::Balance(owner.clone());

    env.storage().persistent().set(&key, &balance);
    extend_persistent_ttl(env, &key);
}
