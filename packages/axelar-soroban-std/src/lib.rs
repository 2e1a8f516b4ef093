#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

#[cfg(any(test, feature = "testutils"))]
pub use testutils::*;

pub mod address;

pub mod error;

pub mod events;

pub mod interfaces;

pub mod token;

pub mod ttl;

pub mod types;

#[cfg(feature = "derive")]
pub use axelar_soroban_std_derive::*;
