use axelar_soroban_std::token::TokenError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    InvalidDecimal = 1,
    InvalidTokenName = 2,
    InvalidTokenSymbol = 3,
    NotMinter = 4,
    InvalidAmount = 5,
    InsufficientBalance = 6,
    InsufficientAllowance = 7,
    InvalidExpirationLedger = 8,
}

impl From<TokenError> for ContractError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::InvalidDecimal => Self::InvalidDecimal,
            TokenError::InvalidTokenName => Self::InvalidTokenName,
            TokenError::InvalidTokenSymbol => Self::InvalidTokenSymbol,
        }
    }
}
