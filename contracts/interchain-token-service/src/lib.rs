#![no_std]

// Allows using std (and its macros) in test modules
#[cfg(test)]
#[macro_use]
extern crate std;

extern crate alloc;

pub mod error;
pub mod executable;
mod interface;
pub mod types;

#[cfg(all(target_family = "wasm", feature = "testutils"))]
compile_error!("'testutils' feature is not supported on 'wasm' target");

cfg_if::cfg_if! {
    if #[cfg(all(feature = "library", not(feature = "testutils")))] {
        pub use interface::{InterchainTokenServiceClient, InterchainTokenServiceInterface};
    } else {
        mod abi;
        pub mod event;
        mod express;
        mod factory;
        mod flow_limit;
        mod message_routing;
        mod storage_types;
        mod token_handler;
        mod token_id;
        mod token_manager;
        mod contract;

        pub use contract::{InterchainTokenService, InterchainTokenServiceClient};
        pub use interface::InterchainTokenServiceInterface;
    }
}
