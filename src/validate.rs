//! Argument-domain checks shared by the operations.
//!
//! Checks run in a fixed order: negativity first (at the signed boundary),
//! then the range ceiling, then any operation-specific zero or parity
//! constraint. All checks are side-effect-free.

use crate::error::{Error, Result};

/// Convert a signed host integer into the unsigned working type.
///
/// Hosts whose integer type is signed call this before any other check;
/// negative values are rejected with [Error::NegativeInput].
pub fn signed_input(n: i64) -> Result<u64> {
    if n < 0 {
        return Err(Error::NegativeInput);
    }
    Ok(n as u64)
}

/// Reject inputs above the operation's safe-range ceiling.
pub(crate) fn ensure_within(n: u64, ceiling: u64) -> Result<()> {
    if n > ceiling {
        return Err(Error::NumberTooLarge);
    }
    Ok(())
}

/// Reject zero where the operation is undefined on it.
pub(crate) fn ensure_nonzero(n: u64) -> Result<()> {
    if n == 0 {
        return Err(Error::InvalidInput);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_input_test() {
        assert_eq!(signed_input(0), Ok(0));
        assert_eq!(signed_input(i64::MAX), Ok(i64::MAX as u64));
        assert_eq!(signed_input(-1), Err(Error::NegativeInput));
        assert_eq!(signed_input(i64::MIN), Err(Error::NegativeInput));
    }

    #[test]
    fn range_and_zero_checks() {
        assert!(ensure_within(10, 10).is_ok());
        assert_eq!(ensure_within(11, 10), Err(Error::NumberTooLarge));
        assert!(ensure_nonzero(1).is_ok());
        assert_eq!(ensure_nonzero(0), Err(Error::InvalidInput));
    }
}
