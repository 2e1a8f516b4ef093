use soroban_sdk::{contractclient, Address, BytesN, Env};
use soroban_token_sdk::metadata::TokenMetadata;

#[contractclient(name = "InterchainTokenDeployerClient")]
pub trait InterchainTokenDeployerInterface {
    /// Deploys an interchain token for `token_id` and returns its address.
    ///
    /// The token id is the deployment salt, so each id maps to exactly one address.
    /// The interchain token service becomes owner and minter of the new token, next to
    /// the optional `minter`. Only callable by the interchain token service.
    fn deploy_interchain_token(
        env: Env,
        token_id: BytesN<32>,
        token_metadata: TokenMetadata,
        minter: Option<Address>,
    ) -> Address;

    fn interchain_token_service(env: &Env) -> Address;

    fn interchain_token_wasm_hash(env: &Env) -> BytesN<32>;
}
