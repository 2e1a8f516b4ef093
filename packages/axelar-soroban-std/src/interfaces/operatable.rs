use crate::events::Event;
use crate::interfaces::storage::OperatorDataKey;
use core::fmt::Debug;
use soroban_sdk::{contractclient, Address, Env, IntoVal, Symbol, Topics, Val};

#[contractclient(name = "OperatableClient")]
pub trait OperatableInterface {
    /// Returns the address of the contract's operator.
    fn operator(env: &Env) -> Address;

    /// Transfers operatorship of the contract to a new address.
    fn transfer_operatorship(env: &Env, new_operator: Address);
}

/// Default implementation of [OperatableInterface::operator].
pub fn operator(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&OperatorDataKey::Interfaces_Operator)
        .expect("operator must be set during contract construction")
}

/// Default implementation of [OperatableInterface::transfer_operatorship].
pub fn transfer_operatorship<T: OperatableInterface>(env: &Env, new_operator: Address) {
    let previous_operator = T::operator(env);
    previous_operator.require_auth();

    set_operator(env, &new_operator);

    OperatorshipTransferredEvent {
        previous_operator,
        new_operator,
    }
    .emit(env);
}

/// Sets the operator without any checks. Meant for constructors, not for contract interfaces.
pub fn set_operator(env: &Env, operator: &Address) {
    env.storage()
        .instance()
        .set(&OperatorDataKey::Interfaces_Operator, operator);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperatorshipTransferredEvent {
    pub previous_operator: Address,
    pub new_operator: Address,
}

impl Event for OperatorshipTransferredEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "operatorship_transferred"),
            self.previous_operator.clone(),
            self.new_operator.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {}
}
