#![cfg(any(test, feature = "testutils"))]
extern crate std;

use soroban_sdk::{
    testutils::{AuthorizedFunction, AuthorizedInvocation},
    Address, Env, IntoVal, Symbol, Val, Vec,
};

/// Asserts that the last invocation required exactly one authorization: `caller` authorizing
/// `function_name` on `contract_id` with `args`, and nothing nested below it.
pub fn assert_invocation<T>(
    env: &Env,
    caller: &Address,
    contract_id: &Address,
    function_name: &str,
    args: T,
) where
    T: IntoVal<Env, Vec<Val>>,
{
    assert_eq!(
        env.auths(),
        std::vec![(
            caller.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    contract_id.clone(),
                    Symbol::new(env, function_name),
                    args.into_val(env),
                )),
                sub_invocations: std::vec![]
            }
        )]
    );
}

/// Builds the expected `env.auths()` entry for a client call, optionally with nested
/// authorizations.
///
/// ```rust,ignore
/// let transfer_auth = auth_invocation!(&env, user, token.transfer(&user, its_id, amount));
/// let its_auth = auth_invocation!(
///     &env,
///     user,
///     its.interchain_transfer(&user, token_id, chain, address, amount, metadata, None::<Token>),
///     transfer_auth
/// );
/// assert_eq!(env.auths(), its_auth);
/// ```
#[macro_export]
macro_rules! auth_invocation {
    ($env:expr, $caller:expr, $client:ident.$method:ident($($arg:expr),* $(,)?)) => {{
        std::vec![(
            $caller.clone(),
            soroban_sdk::testutils::AuthorizedInvocation {
                function: soroban_sdk::testutils::AuthorizedFunction::Contract((
                    $client.address.clone(),
                    soroban_sdk::Symbol::new($env, stringify!($method)),
                    soroban_sdk::IntoVal::<soroban_sdk::Env, soroban_sdk::Vec<soroban_sdk::Val>>::into_val(&($($arg,)*), $env),
                )),
                sub_invocations: std::vec![],
            }
        )]
    }};

    ($env:expr, $caller:expr, $client:ident.$method:ident($($arg:expr),* $(,)?), $subs:expr) => {{
        std::vec![(
            $caller.clone(),
            soroban_sdk::testutils::AuthorizedInvocation {
                function: soroban_sdk::testutils::AuthorizedFunction::Contract((
                    $client.address.clone(),
                    soroban_sdk::Symbol::new($env, stringify!($method)),
                    soroban_sdk::IntoVal::<soroban_sdk::Env, soroban_sdk::Vec<soroban_sdk::Val>>::into_val(&($($arg,)*), $env),
                )),
                sub_invocations: $subs.into_iter().map(|(_, inv)| inv).collect(),
            }
        )]
    }};
}
