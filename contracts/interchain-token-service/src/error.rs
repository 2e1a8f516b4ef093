use axelar_gateway::executable::ExecutableError;
use axelar_soroban_std::token::TokenError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    TrustedAddressAlreadySet = 1,
    NoTrustedAddressSet = 2,
    InvalidMessageType = 3,
    InsufficientMessageLength = 4,
    AbiDecodeFailed = 5,
    InvalidAmount = 6,
    InvalidTokenManagerType = 7,
    InvalidUtf8 = 8,
    InvalidParams = 9,
    InvalidMetadataVersion = 10,
    UntrustedChain = 11,
    NotRemoteService = 12,
    NotApproved = 13,
    NotSupported = 14,
    ContractPaused = 15,
    TokenManagerAlreadyDeployed = 16,
    TokenManagerDoesNotExist = 17,
    CannotDeploy = 18,
    CannotDeployRemotelyToSelf = 19,
    TokenDeploymentFailed = 20,
    PostDeployFailed = 21,
    TakeTokenFailed = 22,
    GiveTokenFailed = 23,
    FlowLimitExceeded = 24,
    FlowLimitOverflow = 25,
    FlowAdditionOverflow = 26,
    InvalidFlowLimit = 27,
    LengthMismatch = 28,
    NotTokenOperator = 29,
    NotFlowLimiter = 30,
    ExpressExecutorAlreadySet = 31,
    AlreadyExecuted = 32,
    InvalidExpressMessageType = 33,
    EmptyData = 34,
    EmptyDestinationAddress = 35,
    InvalidDestinationAddress = 36,
    InvalidMinter = 37,
    InvalidTokenName = 38,
    InvalidTokenSymbol = 39,
    InvalidDecimals = 40,
    InvalidInitialSupply = 41,
    NotMinter = 42,
    RemoteDeploymentNotApproved = 43,
}

impl From<ExecutableError> for ContractError {
    fn from(err: ExecutableError) -> Self {
        match err {
            ExecutableError::NotApproved => Self::NotApproved,
        }
    }
}

impl From<TokenError> for ContractError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::InvalidDecimal => Self::InvalidDecimals,
            TokenError::InvalidTokenName => Self::InvalidTokenName,
            TokenError::InvalidTokenSymbol => Self::InvalidTokenSymbol,
        }
    }
}
