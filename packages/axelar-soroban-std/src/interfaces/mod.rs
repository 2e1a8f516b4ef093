mod operatable;
mod ownable;
mod pausable;

pub use operatable::*;
pub use ownable::*;
pub use pausable::*;

/// Storage keys of the shared interfaces. The names deliberately break the usual
/// naming conventions so they cannot collide with a contract's own `DataKey`.
mod storage {
    #![allow(non_camel_case_types)]

    use soroban_sdk::contracttype;

    // One key type per interface, so adding a variant never shifts another interface's keys.

    #[contracttype]
    pub enum OperatorDataKey {
        Interfaces_Operator,
    }

    #[contracttype]
    pub enum OwnerDataKey {
        Interfaces_Owner,
    }

    #[contracttype]
    pub enum PausedDataKey {
        Interfaces_Paused,
    }
}

#[cfg(test)]
mod testdata {
    use super::{OperatableInterface, OwnableInterface};
    use soroban_sdk::{contract, contractimpl, Address, Env};

    #[contract]
    pub struct Contract;

    #[contractimpl]
    impl Contract {
        pub fn __constructor(env: &Env, owner: Address, operator: Address) {
            super::set_owner(env, &owner);
            super::set_operator(env, &operator);
        }

        pub fn paused(env: &Env) -> bool {
            super::paused(env)
        }

        pub fn set_pause_status(env: &Env, paused: bool) {
            Self::owner(env).require_auth();
            super::set_paused(env, paused);
        }
    }

    #[contractimpl]
    impl OwnableInterface for Contract {
        fn owner(env: &Env) -> Address {
            super::owner(env)
        }

        fn transfer_ownership(env: &Env, new_owner: Address) {
            super::transfer_ownership::<Self>(env, new_owner);
        }
    }

    #[contractimpl]
    impl OperatableInterface for Contract {
        fn operator(env: &Env) -> Address {
            super::operator(env)
        }

        fn transfer_operatorship(env: &Env, new_operator: Address) {
            super::transfer_operatorship::<Self>(env, new_operator);
        }
    }
}
