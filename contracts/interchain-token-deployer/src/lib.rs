#![no_std]

mod interface;

#[cfg(all(target_family = "wasm", feature = "testutils"))]
compile_error!("'testutils' feature is not supported on 'wasm' target");

cfg_if::cfg_if! {
    if #[cfg(all(feature = "library", not(feature = "testutils")))] {
        pub use interface::{InterchainTokenDeployerClient, InterchainTokenDeployerInterface};
    } else {
        mod storage_types;
        mod contract;

        pub use contract::{InterchainTokenDeployer, InterchainTokenDeployerClient};
        pub use interface::InterchainTokenDeployerInterface;
    }
}
