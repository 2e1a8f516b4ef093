use alloc::string::String as StdString;
use alloy_primitives::{FixedBytes, U256};
use alloy_sol_types::SolValue;
use axelar_soroban_std::ensure;
use soroban_sdk::xdr::{FromXdr, ToXdr};
use soroban_sdk::{Address, Bytes, BytesN, Env, String};

use crate::error::ContractError;
use crate::types::{
    self, HubMessage, Message, MessageType, TokenManagerParams, TokenManagerType,
};

/// Version prefix of transfer metadata that carries a contract call.
const METADATA_VERSION_CONTRACT_CALL: u32 = 0;

const METADATA_VERSION_LENGTH: u32 = 4;

mod wire {
    use alloy_sol_types::sol;

    sol! {
        struct InterchainTransfer {
            uint256 messageType;
            bytes32 tokenId;
            bytes sourceAddress;
            bytes destinationAddress;
            uint256 amount;
            bytes data;
        }

        struct DeployInterchainToken {
            uint256 messageType;
            bytes32 tokenId;
            string name;
            string symbol;
            uint8 decimals;
            bytes minter;
        }

        struct DeployTokenManager {
            uint256 messageType;
            bytes32 tokenId;
            uint256 tokenManagerType;
            bytes params;
        }

        struct SendToHub {
            uint256 messageType;
            string destinationChain;
            bytes message;
        }

        struct ReceiveFromHub {
            uint256 messageType;
            string sourceChain;
            bytes message;
        }

        struct TokenManagerParams {
            bytes operator;
            bytes tokenAddress;
        }
    }
}

impl Message {
    pub fn abi_encode(self, env: &Env) -> Result<Bytes, ContractError> {
        let encoded = match self {
            Self::InterchainTransfer(types::InterchainTransfer {
                token_id,
                source_address,
                destination_address,
                amount,
                data,
            }) => wire::InterchainTransfer {
                messageType: tag(MessageType::InterchainTransfer),
                tokenId: FixedBytes(token_id.to_array()),
                sourceAddress: source_address.to_alloc_vec().into(),
                destinationAddress: destination_address.to_alloc_vec().into(),
                amount: amount_to_uint(amount)?,
                data: data.map(|d| d.to_alloc_vec()).unwrap_or_default().into(),
            }
            .abi_encode_params(),
            Self::DeployInterchainToken(types::DeployInterchainToken {
                token_id,
                name,
                symbol,
                decimals,
                minter,
            }) => wire::DeployInterchainToken {
                messageType: tag(MessageType::DeployInterchainToken),
                tokenId: FixedBytes(token_id.to_array()),
                name: to_std_string(&name)?,
                symbol: to_std_string(&symbol)?,
                decimals,
                minter: minter.map(|m| m.to_alloc_vec()).unwrap_or_default().into(),
            }
            .abi_encode_params(),
            Self::DeployTokenManager(types::DeployTokenManager {
                token_id,
                token_manager_type,
                params,
            }) => wire::DeployTokenManager {
                messageType: tag(MessageType::DeployTokenManager),
                tokenId: FixedBytes(token_id.to_array()),
                tokenManagerType: U256::from(token_manager_type as u32),
                params: params.to_alloc_vec().into(),
            }
            .abi_encode_params(),
        };

        Ok(Bytes::from_slice(env, &encoded))
    }

    /// Decodes a message addressed to this chain. Hub envelopes are rejected here,
    /// see [`HubMessage::abi_decode`].
    pub fn abi_decode(env: &Env, payload: &Bytes) -> Result<Self, ContractError> {
        let payload = payload.to_alloc_vec();

        let message = match decode_message_type(&payload)? {
            MessageType::InterchainTransfer => {
                let decoded = wire::InterchainTransfer::abi_decode_params(&payload, true)
                    .map_err(|_| ContractError::AbiDecodeFailed)?;

                Self::InterchainTransfer(types::InterchainTransfer {
                    token_id: BytesN::from_array(env, &decoded.tokenId.0),
                    source_address: Bytes::from_slice(env, &decoded.sourceAddress),
                    destination_address: Bytes::from_slice(env, &decoded.destinationAddress),
                    amount: i128::try_from(decoded.amount)
                        .map_err(|_| ContractError::InvalidAmount)?,
                    data: non_empty(env, &decoded.data),
                })
            }
            MessageType::DeployInterchainToken => {
                let decoded = wire::DeployInterchainToken::abi_decode_params(&payload, true)
                    .map_err(|_| ContractError::AbiDecodeFailed)?;

                Self::DeployInterchainToken(types::DeployInterchainToken {
                    token_id: BytesN::from_array(env, &decoded.tokenId.0),
                    name: String::from_str(env, &decoded.name),
                    symbol: String::from_str(env, &decoded.symbol),
                    decimals: decoded.decimals,
                    minter: non_empty(env, &decoded.minter),
                })
            }
            MessageType::DeployTokenManager => {
                let decoded = wire::DeployTokenManager::abi_decode_params(&payload, true)
                    .map_err(|_| ContractError::AbiDecodeFailed)?;

                Self::DeployTokenManager(types::DeployTokenManager {
                    token_id: BytesN::from_array(env, &decoded.tokenId.0),
                    token_manager_type: decode_token_manager_type(decoded.tokenManagerType)?,
                    params: Bytes::from_slice(env, &decoded.params),
                })
            }
            MessageType::SendToHub | MessageType::ReceiveFromHub => {
                return Err(ContractError::InvalidMessageType)
            }
        };

        Ok(message)
    }
}

impl HubMessage {
    pub fn abi_encode(self, env: &Env) -> Result<Bytes, ContractError> {
        let encoded = match self {
            Self::SendToHub {
                destination_chain,
                message,
            } => wire::SendToHub {
                messageType: tag(MessageType::SendToHub),
                destinationChain: to_std_string(&destination_chain)?,
                message: message.abi_encode(env)?.to_alloc_vec().into(),
            }
            .abi_encode_params(),
            Self::ReceiveFromHub {
                source_chain,
                message,
            } => wire::ReceiveFromHub {
                messageType: tag(MessageType::ReceiveFromHub),
                sourceChain: to_std_string(&source_chain)?,
                message: message.abi_encode(env)?.to_alloc_vec().into(),
            }
            .abi_encode_params(),
        };

        Ok(Bytes::from_slice(env, &encoded))
    }

    pub fn abi_decode(env: &Env, payload: &Bytes) -> Result<Self, ContractError> {
        let payload = payload.to_alloc_vec();

        let message = match decode_message_type(&payload)? {
            MessageType::SendToHub => {
                let decoded = wire::SendToHub::abi_decode_params(&payload, true)
                    .map_err(|_| ContractError::AbiDecodeFailed)?;

                Self::SendToHub {
                    destination_chain: String::from_str(env, &decoded.destinationChain),
                    message: Message::abi_decode(env, &Bytes::from_slice(env, &decoded.message))?,
                }
            }
            MessageType::ReceiveFromHub => {
                let decoded = wire::ReceiveFromHub::abi_decode_params(&payload, true)
                    .map_err(|_| ContractError::AbiDecodeFailed)?;

                Self::ReceiveFromHub {
                    source_chain: String::from_str(env, &decoded.sourceChain),
                    message: Message::abi_decode(env, &Bytes::from_slice(env, &decoded.message))?,
                }
            }
            _ => return Err(ContractError::InvalidMessageType),
        };

        Ok(message)
    }
}

impl TokenManagerParams {
    /// Encodes as `(bytes operator, bytes tokenAddress)`, each address as its XDR. A
    /// missing operator is encoded as empty bytes.
    pub fn abi_encode(&self, env: &Env) -> Bytes {
        let operator = self
            .operator
            .clone()
            .map(|operator| operator.to_xdr(env).to_alloc_vec())
            .unwrap_or_default();

        let encoded = wire::TokenManagerParams {
            operator: operator.into(),
            tokenAddress: self.token_address.clone().to_xdr(env).to_alloc_vec().into(),
        }
        .abi_encode_params();

        Bytes::from_slice(env, &encoded)
    }

    pub fn abi_decode(env: &Env, params: &Bytes) -> Result<Self, ContractError> {
        let decoded = wire::TokenManagerParams::abi_decode_params(&params.to_alloc_vec(), true)
            .map_err(|_| ContractError::InvalidParams)?;

        let operator = if decoded.operator.is_empty() {
            None
        } else {
            Some(
                address_from_bytes(env, &Bytes::from_slice(env, &decoded.operator))
                    .ok_or(ContractError::InvalidParams)?,
            )
        };

        let token_address = address_from_bytes(env, &Bytes::from_slice(env, &decoded.tokenAddress))
            .ok_or(ContractError::InvalidParams)?;

        Ok(Self {
            operator,
            token_address,
        })
    }
}

/// Reads the type tag of a payload without decoding the rest of it.
pub fn message_type(payload: &Bytes) -> Result<MessageType, ContractError> {
    ensure!(
        payload.len() >= 32,
        ContractError::InsufficientMessageLength
    );

    let mut word = [0u8; 32];
    payload.slice(..32).copy_into_slice(&mut word);

    decode_message_type(&word)
}

/// Splits transfer metadata into `uint32 version || data` and returns the data.
/// Metadata shorter than the version prefix, or without data after it, carries no call.
pub fn decode_metadata(metadata: &Bytes) -> Result<Option<Bytes>, ContractError> {
    if metadata.len() < METADATA_VERSION_LENGTH {
        return Ok(None);
    }

    let mut version = [0u8; METADATA_VERSION_LENGTH as usize];
    metadata
        .slice(..METADATA_VERSION_LENGTH)
        .copy_into_slice(&mut version);

    ensure!(
        u32::from_be_bytes(version) == METADATA_VERSION_CONTRACT_CALL,
        ContractError::InvalidMetadataVersion
    );

    let data = metadata.slice(METADATA_VERSION_LENGTH..);

    Ok((!data.is_empty()).then_some(data))
}

/// Parses the XDR of an address as produced by `Address::to_xdr`.
///
/// The layout is checked before handing the bytes to the host, which would trap on
/// malformed input instead of returning an error.
pub fn address_from_bytes(env: &Env, bytes: &Bytes) -> Option<Address> {
    const SC_VAL_ADDRESS: [u8; 4] = [0, 0, 0, 18];
    const ACCOUNT: [u8; 4] = [0, 0, 0, 0];
    const CONTRACT: [u8; 4] = [0, 0, 0, 1];
    const ED25519: [u8; 4] = [0, 0, 0, 0];

    let header = |start: u32| -> Option<[u8; 4]> {
        if bytes.len() < start + 4 {
            return None;
        }
        let mut word = [0u8; 4];
        bytes.slice(start..start + 4).copy_into_slice(&mut word);
        Some(word)
    };

    if header(0)? != SC_VAL_ADDRESS {
        return None;
    }

    let well_formed = match header(4)? {
        ACCOUNT => bytes.len() == 44 && header(8)? == ED25519,
        CONTRACT => bytes.len() == 40,
        _ => false,
    };

    if !well_formed {
        return None;
    }

    Address::from_xdr(env, bytes).ok()
}

fn decode_message_type(payload: &[u8]) -> Result<MessageType, ContractError> {
    ensure!(
        payload.len() >= 32,
        ContractError::InsufficientMessageLength
    );

    let message_type = match u32::try_from(U256::from_be_slice(&payload[..32])) {
        Ok(0) => MessageType::InterchainTransfer,
        Ok(1) => MessageType::DeployInterchainToken,
        Ok(2) => MessageType::DeployTokenManager,
        Ok(3) => MessageType::SendToHub,
        Ok(4) => MessageType::ReceiveFromHub,
        _ => return Err(ContractError::InvalidMessageType),
    };

    Ok(message_type)
}

fn decode_token_manager_type(value: U256) -> Result<TokenManagerType, ContractError> {
    let token_manager_type = match u32::try_from(value) {
        Ok(0) => TokenManagerType::NativeInterchainToken,
        Ok(1) => TokenManagerType::MintBurnFrom,
        Ok(2) => TokenManagerType::LockUnlock,
        Ok(3) => TokenManagerType::LockUnlockFee,
        Ok(4) => TokenManagerType::MintBurn,
        _ => return Err(ContractError::InvalidTokenManagerType),
    };

    Ok(token_manager_type)
}

fn tag(message_type: MessageType) -> U256 {
    U256::from(message_type as u32)
}

fn amount_to_uint(amount: i128) -> Result<U256, ContractError> {
    let amount = u128::try_from(amount).map_err(|_| ContractError::InvalidAmount)?;

    Ok(U256::from(amount))
}

fn to_std_string(value: &String) -> Result<StdString, ContractError> {
    let mut buffer = alloc::vec![0u8; value.len() as usize];
    value.copy_into_slice(&mut buffer);

    StdString::from_utf8(buffer).map_err(|_| ContractError::InvalidUtf8)
}

fn non_empty(env: &Env, bytes: &[u8]) -> Option<Bytes> {
    (!bytes.is_empty()).then(|| Bytes::from_slice(env, bytes))
}
