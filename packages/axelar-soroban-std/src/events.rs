use core::fmt::Debug;
use soroban_sdk::{Env, IntoVal, Topics, Val};

/// A contract event with a fixed topic layout.
///
/// Topics start with the event name as a `Symbol`. Anything that does not fit the
/// host's topic rules (vectors, maps, long byte strings) belongs in `data`.
pub trait Event: Debug + PartialEq + Sized {
    fn topics(&self, env: &Env) -> impl Topics + Debug;

    fn data(&self, env: &Env) -> impl IntoVal<Env, Val> + Debug;

    fn emit(self, env: &Env) {
        env.events().publish(self.topics(env), self.data(env));
    }
}

#[cfg(any(test, feature = "testutils"))]
mod testutils {
    use super::Event;
    use soroban_sdk::testutils::Events;
    use soroban_sdk::{vec, Address, Env, IntoVal, Val, Vec};

    fn matches<E: Event>(
        env: &Env,
        (id, topics, data): &(Address, Vec<Val>, Val),
        contract_id: &Address,
        event: &E,
    ) -> bool {
        let expected_topics: Vec<Val> = event.topics(env).into_val(env);
        let expected_data: Val = event.data(env).into_val(env);

        id == contract_id
            && *topics == expected_topics
            && vec![env, *data] == vec![env, expected_data]
    }

    /// Asserts that the most recent event was emitted by `contract_id` and equals `event`.
    pub fn assert_last_event<E: Event>(env: &Env, contract_id: &Address, event: &E) {
        let last = env
            .events()
            .all()
            .last()
            .expect("no events were emitted");

        assert!(
            matches(env, &last, contract_id, event),
            "last emitted event does not match {:?}",
            event
        );
    }

    /// Asserts that `event` was emitted by `contract_id` at any point of the last invocation.
    pub fn assert_event_emitted<E: Event>(env: &Env, contract_id: &Address, event: &E) {
        let found = env
            .events()
            .all()
            .iter()
            .any(|emitted| matches(env, &emitted, contract_id, event));

        assert!(found, "event {:?} was not emitted", event);
    }
}

#[cfg(any(test, feature = "testutils"))]
pub use testutils::*;
