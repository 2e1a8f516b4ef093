use crate::ensure;
use soroban_sdk::contracterror;
use soroban_token_sdk::metadata::TokenMetadata;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    InvalidDecimal = 0,
    InvalidTokenName = 1,
    InvalidTokenSymbol = 2,
}

/// Decimals must fit a `u8`. Name and symbol must be non-empty.
pub fn validate_token_metadata(token_metadata: &TokenMetadata) -> Result<(), TokenError> {
    ensure!(
        token_metadata.decimal <= u8::MAX.into(),
        TokenError::InvalidDecimal
    );
    ensure!(
        !token_metadata.name.is_empty(),
        TokenError::InvalidTokenName
    );
    ensure!(
        !token_metadata.symbol.is_empty(),
        TokenError::InvalidTokenSymbol
    );
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_err;
    use soroban_sdk::{Env, String};

    fn metadata(env: &Env, decimal: u32, name: &str, symbol: &str) -> TokenMetadata {
        TokenMetadata {
            decimal,
            name: String::from_str(env, name),
            symbol: String::from_str(env, symbol),
        }
    }

    #[test]
    fn valid_metadata() {
        let env = Env::default();

        assert_eq!(validate_token_metadata(&metadata(&env, 7, "Token", "TKN")), Ok(()));
        assert_eq!(validate_token_metadata(&metadata(&env, 255, "T", "T")), Ok(()));
        assert_eq!(
            validate_token_metadata(&metadata(
                &env,
                7,
                "USDC:GA5ZSEJYB37JRC5AVCIA5MOP4RHTM335X2KGX3IHOJAPP5RE34K4KZVN",
                "USDC"
            )),
            Ok(())
        );
    }

    #[test]
    fn invalid_metadata() {
        let env = Env::default();

        assert_err!(
            validate_token_metadata(&metadata(&env, 256, "Token", "TKN")),
            TokenError::InvalidDecimal
        );
        assert_err!(
            validate_token_metadata(&metadata(&env, 7, "", "TKN")),
            TokenError::InvalidTokenName
        );
        assert_err!(
            validate_token_metadata(&metadata(&env, 7, "Token", "")),
            TokenError::InvalidTokenSymbol
        );
    }
}
