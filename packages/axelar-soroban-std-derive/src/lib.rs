use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, DeriveInput, Ident};

/// Implements `OwnableInterface` for the annotated contract, backed by the shared
/// owner storage, and brings the trait into scope so `Self::owner` resolves.
/// The constructor is expected to call `interfaces::set_owner`.
/// `soroban_sdk::Env` must be in scope.
#[proc_macro_attribute]
pub fn ownable(_attr: TokenStream, input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let ownable = ownable_impl(&input.ident);

    quote! {
        #input
        #ownable
    }
    .into()
}

/// Implements `OperatableInterface` for the annotated contract, backed by the shared
/// operator storage, and brings the trait into scope.
/// The constructor is expected to call `interfaces::set_operator`.
#[proc_macro_attribute]
pub fn operatable(_attr: TokenStream, input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let operatable = operatable_impl(&input.ident);

    quote! {
        #input
        #operatable
    }
    .into()
}

fn ownable_impl(name: &Ident) -> TokenStream2 {
    quote! {
        use axelar_soroban_std::interfaces::OwnableInterface;

        #[soroban_sdk::contractimpl]
        impl axelar_soroban_std::interfaces::OwnableInterface for #name {
            fn owner(env: &Env) -> soroban_sdk::Address {
                axelar_soroban_std::interfaces::owner(env)
            }

            fn transfer_ownership(env: &Env, new_owner: soroban_sdk::Address) {
                axelar_soroban_std::interfaces::transfer_ownership::<Self>(env, new_owner);
            }
        }
    }
}

fn operatable_impl(name: &Ident) -> TokenStream2 {
    quote! {
        use axelar_soroban_std::interfaces::OperatableInterface;

        #[soroban_sdk::contractimpl]
        impl axelar_soroban_std::interfaces::OperatableInterface for #name {
            fn operator(env: &Env) -> soroban_sdk::Address {
                axelar_soroban_std::interfaces::operator(env)
            }

            fn transfer_operatorship(env: &Env, new_operator: soroban_sdk::Address) {
                axelar_soroban_std::interfaces::transfer_operatorship::<Self>(env, new_operator);
            }
        }
    }
}
