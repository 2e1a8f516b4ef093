use crate::events::Event;
use crate::interfaces::storage::OwnerDataKey;
use core::fmt::Debug;
use soroban_sdk::{contractclient, Address, Env, IntoVal, Symbol, Topics, Val};

#[contractclient(name = "OwnableClient")]
pub trait OwnableInterface {
    /// Returns the address of the contract's owner.
    fn owner(env: &Env) -> Address;

    /// Transfers ownership of the contract to a new address.
    fn transfer_ownership(env: &Env, new_owner: Address);
}

/// Default implementation of [OwnableInterface::owner].
pub fn owner(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&OwnerDataKey::Interfaces_Owner)
        .expect("owner must be set during contract construction")
}

/// Default implementation of [OwnableInterface::transfer_ownership].
pub fn transfer_ownership<T: OwnableInterface>(env: &Env, new_owner: Address) {
    let previous_owner = T::owner(env);
    previous_owner.require_auth();

    set_owner(env, &new_owner);

    OwnershipTransferredEvent {
        previous_owner,
        new_owner,
    }
    .emit(env);
}

/// Sets the owner without any checks. Meant for constructors, not for contract interfaces.
pub fn set_owner(env: &Env, owner: &Address) {
    env.storage()
        .instance()
        .set(&OwnerDataKey::Interfaces_Owner, owner);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnershipTransferredEvent {
    pub previous_owner: Address,
    pub new_owner: Address,
}

impl Event for OwnershipTransferredEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "ownership_transferred"),
            self.previous_owner.clone(),
            self.new_owner.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {}
}
