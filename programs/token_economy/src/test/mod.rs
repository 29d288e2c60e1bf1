pub mod test_claim;
pub mod test_supply;

use anchor_lang::prelude::*;
use crate::error::TokenEconomyError;

/// Asserts that `result` failed with exactly `expected`.
pub(crate) fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: TokenEconomyError) {
    let err = result.expect_err("operation should have failed");
    assert_eq!(err, anchor_lang::error::Error::from(expected));
}
