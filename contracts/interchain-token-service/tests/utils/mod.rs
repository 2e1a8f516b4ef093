#![allow(dead_code)]

use axelar_gas_service::{AxelarGasService, AxelarGasServiceClient};
use axelar_gateway::testutils::{approve_gateway_messages, setup_gateway, SOURCE_ADDRESS, SOURCE_CHAIN};
use axelar_gateway::types::Message as GatewayMessage;
use axelar_gateway::AxelarGatewayClient;
use interchain_token::InterchainToken;
use interchain_token_service::executable::InterchainTokenExecutableInterface;
use interchain_token_service::types::{Message, TokenManagerParams, TokenManagerType};
use interchain_token_service::{InterchainTokenService, InterchainTokenServiceClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::StellarAssetClient;
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{
    contract, contractimpl, contracttype, Address, Bytes, BytesN, Env, String,
};
use soroban_token_sdk::metadata::TokenMetadata;

pub const CHAIN_NAME: &str = "stellar";
pub const HUB_CHAIN: &str = "axelar";
pub const HUB_ADDRESS: &str = "axelar10jzzmv5m7da7dn2xsfac0yqe7zamy34uedx3e28laq0p6f3f8dzqp649fp";
/// A chain reached through the ITS hub.
pub const HUB_ROUTED_CHAIN: &str = "avalanche";

/// Stands in for the token deployer. Tokens are registered up front and handed out by
/// token id, since contracts cannot be uploaded from test code.
#[contract]
pub struct TestTokenDeployer;

#[contracttype]
enum TestTokenDeployerKey {
    Token(BytesN<32>),
}

#[contractimpl]
impl TestTokenDeployer {
    pub fn register_token(env: Env, token_id: BytesN<32>, token_address: Address) {
        env.storage()
            .instance()
            .set(&TestTokenDeployerKey::Token(token_id), &token_address);
    }

    pub fn deploy_interchain_token(
        env: Env,
        token_id: BytesN<32>,
        _token_metadata: TokenMetadata,
        _minter: Option<Address>,
    ) -> Address {
        env.storage()
            .instance()
            .get(&TestTokenDeployerKey::Token(token_id))
            .expect("no token registered for token id")
    }
}

/// Records the last call it received from the service.
#[contract]
pub struct TestExecutable;

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutedWithToken {
    pub source_chain: String,
    pub message_id: String,
    pub source_address: Bytes,
    pub payload: Bytes,
    pub token_id: BytesN<32>,
    pub token_address: Address,
    pub amount: i128,
}

#[contracttype]
enum TestExecutableKey {
    InterchainTokenService,
    Executed,
}

#[contractimpl]
impl TestExecutable {
    pub fn __constructor(env: Env, interchain_token_service: Address) {
        env.storage().instance().set(
            &TestExecutableKey::InterchainTokenService,
            &interchain_token_service,
        );
    }

    pub fn executed(env: Env) -> Option<ExecutedWithToken> {
        env.storage().instance().get(&TestExecutableKey::Executed)
    }
}

#[contractimpl]
impl InterchainTokenExecutableInterface for TestExecutable {
    fn interchain_token_service(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&TestExecutableKey::InterchainTokenService)
            .expect("interchain token service not set")
    }

    fn execute_with_interchain_token(
        env: &Env,
        source_chain: String,
        message_id: String,
        source_address: Bytes,
        payload: Bytes,
        token_id: BytesN<32>,
        token_address: Address,
        amount: i128,
    ) {
        Self::validate(env);

        env.storage().instance().set(
            &TestExecutableKey::Executed,
            &ExecutedWithToken {
                source_chain,
                message_id,
                source_address,
                payload,
                token_id,
                token_address,
                amount,
            },
        );
    }
}

/// A token that burns `FEE` of every transfer.
#[contract]
pub struct FeeToken;

pub const FEE: i128 = 10;

#[contracttype]
enum FeeTokenKey {
    Balance(Address),
}

#[contractimpl]
impl FeeToken {
    pub fn mint(env: Env, to: Address, amount: i128) {
        let balance = Self::balance(env.clone(), to.clone());
        env.storage()
            .instance()
            .set(&FeeTokenKey::Balance(to), &(balance + amount));
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .instance()
            .get(&FeeTokenKey::Balance(id))
            .unwrap_or(0)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();

        let from_balance = Self::balance(env.clone(), from.clone());
        assert!(from_balance >= amount, "insufficient balance");

        let to_balance = Self::balance(env.clone(), to.clone());
        env.storage()
            .instance()
            .set(&FeeTokenKey::Balance(from), &(from_balance - amount));
        env.storage()
            .instance()
            .set(&FeeTokenKey::Balance(to), &(to_balance + amount - FEE));
    }
}

pub struct TestEnv<'a> {
    pub env: Env,
    pub owner: Address,
    pub gateway: AxelarGatewayClient<'a>,
    pub gas_service: AxelarGasServiceClient<'a>,
    pub token_deployer: TestTokenDeployerClient<'a>,
    pub its: InterchainTokenServiceClient<'a>,
}

/// Registers the service with its collaborators and trusts `ethereum` directly,
/// `avalanche` through the hub and the hub itself. Auths are mocked.
pub fn setup_env<'a>() -> TestEnv<'a> {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let gateway = setup_gateway(&env);

    let gas_service_id = env.register(
        AxelarGasService,
        (Address::generate(&env), Address::generate(&env)),
    );
    let gas_service = AxelarGasServiceClient::new(&env, &gas_service_id);

    let token_deployer_id = env.register(TestTokenDeployer, ());
    let token_deployer = TestTokenDeployerClient::new(&env, &token_deployer_id);

    let its_id = env.register(
        InterchainTokenService,
        (
            &owner,
            &gateway.address,
            &gas_service.address,
            &token_deployer.address,
            String::from_str(&env, CHAIN_NAME),
        ),
    );
    let its = InterchainTokenServiceClient::new(&env, &its_id);

    its.set_trusted_address(
        &String::from_str(&env, SOURCE_CHAIN),
        &String::from_str(&env, SOURCE_ADDRESS),
    );
    its.set_trusted_address(
        &String::from_str(&env, HUB_CHAIN),
        &String::from_str(&env, HUB_ADDRESS),
    );
    its.set_trusted_address(
        &String::from_str(&env, HUB_ROUTED_CHAIN),
        &its.its_hub_routing_identifier(),
    );

    TestEnv {
        env,
        owner,
        gateway,
        gas_service,
        token_deployer,
        its,
    }
}

pub fn token_metadata(env: &Env, name: &str, symbol: &str, decimal: u32) -> TokenMetadata {
    TokenMetadata {
        decimal,
        name: String::from_str(env, name),
        symbol: String::from_str(env, symbol),
    }
}

/// A Stellar asset whose admin is `admin`.
pub fn stellar_asset(env: &Env, admin: &Address) -> Address {
    env.register_stellar_asset_contract_v2(admin.clone())
        .address()
}

pub fn mint_stellar_asset(env: &Env, token: &Address, to: &Address, amount: i128) {
    StellarAssetClient::new(env, token)
        .mock_all_auths()
        .mint(to, &amount);
}

/// Registers a lock/unlock token manager for a fresh Stellar asset under its canonical id.
pub fn register_lock_unlock_token(test: &TestEnv) -> (BytesN<32>, Address) {
    let token_address = stellar_asset(&test.env, &Address::generate(&test.env));
    let token_id = test.its.register_canonical_token(&token_address);

    (token_id, token_address)
}

/// Deploys a local token manager of `token_manager_type` for `token_address`.
pub fn deploy_token_manager(
    test: &TestEnv,
    token_address: &Address,
    token_manager_type: TokenManagerType,
    operator: Option<Address>,
) -> BytesN<32> {
    let env = &test.env;
    let params = TokenManagerParams {
        operator,
        token_address: token_address.clone(),
    }
    .abi_encode(env);

    test.its.deploy_token_manager(
        &Address::generate(env),
        &BytesN::from_array(env, &[7; 32]),
        &String::from_str(env, ""),
        &token_manager_type,
        &params,
        &None,
    )
}

/// Registers the interchain token the deployer will hand out for `token_id`.
pub fn register_interchain_token(
    test: &TestEnv,
    token_id: &BytesN<32>,
    minter: Option<Address>,
    token_metadata: &TokenMetadata,
) -> Address {
    let token_address = test.env.register(
        InterchainToken,
        (
            &test.its.address,
            minter,
            &test.its.address,
            token_id,
            token_metadata.clone(),
        ),
    );
    test.token_deployer.register_token(token_id, &token_address);

    token_address
}

/// Deploys a native interchain token locally. Returns its token id and address.
pub fn deploy_native_token(
    test: &TestEnv,
    deployer: &Address,
    minter: Option<Address>,
) -> (BytesN<32>, Address) {
    let env = &test.env;
    let salt = BytesN::from_array(env, &[1; 32]);
    let token_metadata = token_metadata(env, "Test", "TEST", 7);
    let token_id = test.its.interchain_token_id(deployer, &salt);

    let token_address = register_interchain_token(test, &token_id, minter.clone(), &token_metadata);

    test.its.deploy_interchain_token(
        deployer,
        &salt,
        &String::from_str(env, ""),
        &token_metadata,
        &minter.map_or_else(|| Bytes::new(env), |minter| minter.to_xdr(env)),
        &None,
    );

    (token_id, token_address)
}

/// Approves `message` at the gateway as coming from the trusted service on `ethereum`.
/// Returns the gateway message to execute.
pub fn approve_from_source_chain(
    test: &TestEnv,
    message_id: &str,
    message: Message,
) -> (GatewayMessage, Bytes) {
    let env = &test.env;
    let payload = message.abi_encode(env).expect("encodable message");

    approve(test, SOURCE_CHAIN, SOURCE_ADDRESS, message_id, payload)
}

pub fn approve(
    test: &TestEnv,
    source_chain: &str,
    source_address: &str,
    message_id: &str,
    payload: Bytes,
) -> (GatewayMessage, Bytes) {
    let env = &test.env;
    let message = GatewayMessage {
        source_chain: String::from_str(env, source_chain),
        message_id: String::from_str(env, message_id),
        source_address: String::from_str(env, source_address),
        contract_address: test.its.address.clone(),
        payload_hash: env.crypto().keccak256(&payload).into(),
    };

    approve_gateway_messages(env, &test.gateway, &[message.clone()]);

    (message, payload)
}

pub fn execute(test: &TestEnv, message: &GatewayMessage, payload: &Bytes) {
    test.its.execute(
        &message.source_chain,
        &message.message_id,
        &message.source_address,
        payload,
    );
}
