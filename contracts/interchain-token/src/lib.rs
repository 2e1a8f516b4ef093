#![no_std]

// Allows using std (and its macros) in test modules
#[cfg(test)]
#[macro_use]
extern crate std;

pub mod error;
mod interface;
mod transmitter;

#[cfg(all(target_family = "wasm", feature = "testutils"))]
compile_error!("'testutils' feature is not supported on 'wasm' target");

pub use transmitter::{InterchainTransferTransmitterClient, InterchainTransferTransmitterInterface};

cfg_if::cfg_if! {
    if #[cfg(all(feature = "library", not(feature = "testutils")))] {
        pub use interface::{InterchainTokenClient, InterchainTokenInterface};
    } else {
        pub mod event;
        mod allowance;
        mod balance;
        mod storage_types;
        mod contract;

        pub use contract::{InterchainToken, InterchainTokenClient};
        pub use interface::InterchainTokenInterface;
    }
}
