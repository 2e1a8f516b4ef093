use axelar_soroban_std::ttl::extend_instance_ttl;
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env};
use soroban_token_sdk::metadata::TokenMetadata;

use crate::interface::InterchainTokenDeployerInterface;
use crate::storage_types::DataKey;

#[contract]
pub struct InterchainTokenDeployer;

#[contractimpl]
impl InterchainTokenDeployer {
    pub fn __constructor(
        env: Env,
        interchain_token_service: Address,
        interchain_token_wasm_hash: BytesN<32>,
    ) {
        env.storage()
            .instance()
            .set(&DataKey::InterchainTokenService, &interchain_token_service);
        env.storage()
            .instance()
            .set(&DataKey::InterchainTokenWasmHash, &interchain_token_wasm_hash);
    }
}

#[contractimpl]
impl InterchainTokenDeployerInterface for InterchainTokenDeployer {
    fn deploy_interchain_token(
        env: Env,
        token_id: BytesN<32>,
        token_metadata: TokenMetadata,
        minter: Option<Address>,
    ) -> Address {
        let interchain_token_service = Self::interchain_token_service(&env);
        interchain_token_service.require_auth();

        extend_instance_ttl(&env);

        env.deployer()
            .with_current_contract(token_id.clone())
            .deploy_v2(
                Self::interchain_token_wasm_hash(&env),
                (
                    interchain_token_service.clone(),
                    minter,
                    interchain_token_service,
                    token_id,
                    token_metadata,
                ),
            )
    }

    fn interchain_token_service(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::InterchainTokenService)
            .expect("interchain token service must be set during contract construction")
    }

    fn interchain_token_wasm_hash(env: &Env) -> BytesN<32> {
        env.storage()
            .instance()
            .get(&DataKey::InterchainTokenWasmHash)
            .expect("interchain token wasm hash must be set during contract construction")
    }
}
