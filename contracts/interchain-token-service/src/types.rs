use soroban_sdk::{contracttype, Address, Bytes, BytesN, String};

/// Leading tag of every message on the wire.
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum MessageType {
    InterchainTransfer = 0,
    DeployInterchainToken = 1,
    DeployTokenManager = 2, // not supported through the ITS hub
    SendToHub = 3,
    ReceiveFromHub = 4,
}

/// How a token manager takes tokens from senders and gives them to recipients.
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum TokenManagerType {
    /// Interchain token deployed by the service, which burns and mints it.
    NativeInterchainToken = 0,
    /// Burns through an allowance given to the service, mints as the asset admin.
    MintBurnFrom = 1,
    /// Holds tokens in the service's own account.
    LockUnlock = 2,
    /// Like [`TokenManagerType::LockUnlock`], for tokens that charge a fee on transfer.
    LockUnlockFee = 3,
    /// Burns from the sender, mints as the asset admin.
    MintBurn = 4,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    InterchainTransfer(InterchainTransfer),
    DeployInterchainToken(DeployInterchainToken),
    DeployTokenManager(DeployTokenManager),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterchainTransfer {
    pub token_id: BytesN<32>,
    pub source_address: Bytes,
    pub destination_address: Bytes,
    pub amount: i128,
    pub data: Option<Bytes>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeployInterchainToken {
    pub token_id: BytesN<32>,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub minter: Option<Bytes>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeployTokenManager {
    pub token_id: BytesN<32>,
    pub token_manager_type: TokenManagerType,
    pub params: Bytes,
}

/// Envelope exchanged with the ITS hub. Wraps a [`Message`] together with the chain
/// it is ultimately going to, or coming from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HubMessage {
    SendToHub {
        destination_chain: String,
        message: Message,
    },
    ReceiveFromHub {
        source_chain: String,
        message: Message,
    },
}

/// Decoded form of the `params` of a token manager deployment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenManagerParams {
    pub operator: Option<Address>,
    pub token_address: Address,
}
