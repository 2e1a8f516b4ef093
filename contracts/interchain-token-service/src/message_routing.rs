use axelar_soroban_std::ensure;
use axelar_soroban_std::ttl::extend_persistent_ttl;
use soroban_sdk::{Bytes, Env, String};

use crate::abi;
use crate::error::ContractError;
use crate::storage_types::DataKey;
use crate::types::{HubMessage, Message, MessageType};

/// Chain name of the ITS hub.
pub const ITS_HUB_CHAIN_NAME: &str = "axelar";

/// Trusted address value of chains that are reached through the ITS hub.
pub const ITS_HUB_ROUTING_IDENTIFIER: &str = "hub";

pub struct OutboundMessage {
    pub destination_chain: String,
    pub destination_address: String,
    pub payload: Bytes,
}

pub fn trusted_address(env: &Env, chain: &String) -> Option<String> {
    env.storage()
        .persistent()
        .get(&DataKey::TrustedAddress(chain.clone()))
}

pub fn set_trusted_address(
    env: &Env,
    chain: &String,
    address: &String,
) -> Result<(), ContractError> {
    let key = DataKey::TrustedAddress(chain.clone());

    ensure!(
        !env.storage().persistent().has(&key),
        ContractError::TrustedAddressAlreadySet
    );

    env.storage().persistent().set(&key, address);
    extend_persistent_ttl(env, &key);

    Ok(())
}

/// Removes the trusted address of `chain` and returns it.
pub fn remove_trusted_address(env: &Env, chain: &String) -> Result<String, ContractError> {
    let trusted_address =
        trusted_address(env, chain).ok_or(ContractError::NoTrustedAddressSet)?;

    env.storage()
        .persistent()
        .remove(&DataKey::TrustedAddress(chain.clone()));

    Ok(trusted_address)
}

/// Resolves where a message for `destination_chain` is actually sent.
///
/// Chains routed through the hub get their message wrapped in `SendToHub` and sent to
/// the hub's address. The hub chain itself is never a valid destination.
pub fn route_outbound(
    env: &Env,
    destination_chain: String,
    message: Message,
) -> Result<OutboundMessage, ContractError> {
    let hub_chain = String::from_str(env, ITS_HUB_CHAIN_NAME);

    ensure!(destination_chain != hub_chain, ContractError::UntrustedChain);

    let destination_address =
        trusted_address(env, &destination_chain).ok_or(ContractError::UntrustedChain)?;

    if destination_address != String::from_str(env, ITS_HUB_ROUTING_IDENTIFIER) {
        return Ok(OutboundMessage {
            destination_chain,
            destination_address,
            payload: message.abi_encode(env)?,
        });
    }

    let hub_address = trusted_address(env, &hub_chain).ok_or(ContractError::UntrustedChain)?;

    Ok(OutboundMessage {
        payload: HubMessage::SendToHub {
            destination_chain,
            message,
        }
        .abi_encode(env)?,
        destination_chain: hub_chain,
        destination_address: hub_address,
    })
}

/// The sender of an inbound message must be the trusted address of its chain.
pub fn ensure_trusted_source(
    env: &Env,
    source_chain: &String,
    source_address: &String,
) -> Result<(), ContractError> {
    let trusted = trusted_address(env, source_chain);

    ensure!(
        trusted.as_ref() == Some(source_address)
            && *source_address != String::from_str(env, ITS_HUB_ROUTING_IDENTIFIER),
        ContractError::NotRemoteService
    );

    Ok(())
}

/// Decodes an inbound payload and returns the chain it originated on with the message.
///
/// Messages from the hub must be `ReceiveFromHub` envelopes whose original chain is
/// itself routed through the hub. Everyone else must send plain messages.
pub fn route_inbound(
    env: &Env,
    source_chain: &String,
    payload: &Bytes,
) -> Result<(String, Message), ContractError> {
    if *source_chain != String::from_str(env, ITS_HUB_CHAIN_NAME) {
        return Ok((source_chain.clone(), Message::abi_decode(env, payload)?));
    }

    ensure!(
        abi::message_type(payload)? == MessageType::ReceiveFromHub,
        ContractError::UntrustedChain
    );

    let HubMessage::ReceiveFromHub {
        source_chain: original_source_chain,
        message,
    } = HubMessage::abi_decode(env, payload)?
    else {
        return Err(ContractError::InvalidMessageType);
    };

    ensure!(
        trusted_address(env, &original_source_chain)
            == Some(String::from_str(env, ITS_HUB_ROUTING_IDENTIFIER)),
        ContractError::UntrustedChain
    );

    ensure!(
        !matches!(message, Message::DeployTokenManager(_)),
        ContractError::NotSupported
    );

    Ok((original_source_chain, message))
}
