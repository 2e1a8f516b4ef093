use soroban_sdk::{contracttype, Address};

/// A token amount used to pay for cross-chain gas.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    pub address: Address,
    pub amount: i128,
}
