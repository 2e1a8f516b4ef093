use axelar_soroban_std::events::Event;
use core::fmt::Debug;
use soroban_sdk::{Address, Env, IntoVal, Symbol, Topics, Val};

#[derive(Debug, PartialEq, Eq)]
pub struct MinterAddedEvent {
    pub minter: Address,
}

#[derive(Debug, PartialEq, Eq)]
pub struct MinterRemovedEvent {
    pub minter: Address,
}

impl Event for MinterAddedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (Symbol::new(env, "minter_added"), self.minter.clone())
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {}
}

impl Event for MinterRemovedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (Symbol::new(env, "minter_removed"), self.minter.clone())
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {}
}
