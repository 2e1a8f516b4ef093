use crate::events::Event;
use crate::interfaces::storage::PausedDataKey;
use core::fmt::Debug;
use soroban_sdk::{Env, IntoVal, Symbol, Topics, Val};

/// Returns whether the contract is paused. A contract is unpaused until told otherwise.
pub fn paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&PausedDataKey::Interfaces_Paused)
        .unwrap_or(false)
}

/// Stores the pause flag and emits [PausedEvent] or [UnpausedEvent].
/// Authorization is left to the caller.
pub fn set_paused(env: &Env, paused: bool) {
    env.storage()
        .instance()
        .set(&PausedDataKey::Interfaces_Paused, &paused);

    if paused {
        PausedEvent {}.emit(env);
    } else {
        UnpausedEvent {}.emit(env);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PausedEvent {}

impl Event for PausedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (Symbol::new(env, "paused"),)
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnpausedEvent {}

impl Event for UnpausedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (Symbol::new(env, "unpaused"),)
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {}
}
