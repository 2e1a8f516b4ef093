/// Return early with the given error if the condition does not hold.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $e:expr $(,)?) => {
        if !$cond {
            return Err($e);
        }
    };
}

/// Unwraps an [`Ok`] value, panicking with the expression and the error otherwise.
#[macro_export]
macro_rules! assert_ok {
    ( $x:expr ) => {
        match $x {
            core::result::Result::Ok(v) => v,
            core::result::Result::Err(e) => {
                panic!("Error calling {}: {:?}", stringify!($x), e);
            }
        }
    };
}

/// Unwraps a [`Some`] value, panicking with the expression otherwise.
#[macro_export]
macro_rules! assert_some {
    ( $x:expr ) => {
        match $x {
            core::option::Option::Some(s) => s,
            core::option::Option::None => {
                panic!("Expected value when calling {}, got None", stringify!($x));
            }
        }
    };
}

/// Asserts that a plain [`Result`] holds the given error.
#[macro_export]
macro_rules! assert_err {
    ( $x:expr, $e:expr ) => {
        match $x {
            core::result::Result::Err(e) => {
                if $e != e {
                    panic!("Expected error {:?}, got {:?} instead", $e, e)
                }
            }
            core::result::Result::Ok(v) => {
                panic!(
                    "Expected error when calling {}, got {:?} instead",
                    stringify!($x),
                    v
                );
            }
        }
    };
}

/// Asserts that the result of a `try_` client call failed with the given contract error.
///
/// ```rust,ignore
/// assert_contract_err!(
///     client.try_set_trusted_address(&chain, &address),
///     ContractError::TrustedAddressAlreadySet
/// );
/// ```
#[macro_export]
macro_rules! assert_contract_err {
    ($given:expr, $expected:expr) => {
        match $given {
            core::result::Result::Ok(v) => {
                panic!("Expected error {:?}, got {:?} instead", $expected, v)
            }
            core::result::Result::Err(e) => match e {
                core::result::Result::Err(e) => {
                    panic!("Expected error {:?}, got invoke error {:?}", $expected, e)
                }
                core::result::Result::Ok(v) if v != $expected => {
                    panic!("Expected error {:?}, got {:?} instead", $expected, v)
                }
                _ => (),
            },
        }
    };
}
