use soroban_sdk::{Address, Env, String};

const ZERO_ADDRESS: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

pub trait AddressExt {
    fn zero(env: &Env) -> Address;
}

impl AddressExt for Address {
    /// Stellar's "dead" account. Nobody holds its key, so it works as a sentinel deployer.
    fn zero(env: &Env) -> Address {
        Self::from_string(&String::from_str(env, ZERO_ADDRESS))
    }
}
