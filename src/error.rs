//! The error taxonomy shared by every operation, and its stable numeric codes.

use thiserror::Error;

/// Reasons an operation can refuse or fail. The set is closed: hosts can
/// match on it exhaustively and rely on [Error::code] staying stable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A signed host integer was below zero.
    #[error("negative input is outside the supported domain")]
    NegativeInput,

    /// The input is outside the domain of the operation: zero where the
    /// result is undefined, or an odd/too-small Goldbach argument.
    #[error("input is invalid for this operation")]
    InvalidInput,

    /// The input exceeds the operation's safe range, or the result would
    /// overflow the integer width.
    #[error("input exceeds the safe computation range")]
    NumberTooLarge,

    /// No prime pair sums to the given number.
    #[error("no prime pair sums to the given number")]
    NoSolution,

    /// Storage for a result array could not be allocated.
    #[error("allocation of the result array failed")]
    AllocationFailure,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Numeric outcome codes for reporting across the library boundary.
/// `Ok` is the absence of an error; the discriminants are part of the
/// public contract and never change.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Ok = 0,
    NegativeInput = 1,
    InvalidInput = 2,
    NumberTooLarge = 3,
    NoSolution = 4,
    AllocationFailure = 5,
}

impl Error {
    /// The stable numeric code of this error kind.
    pub const fn code(self) -> ErrorCode {
        match self {
            Error::NegativeInput => ErrorCode::NegativeInput,
            Error::InvalidInput => ErrorCode::InvalidInput,
            Error::NumberTooLarge => ErrorCode::NumberTooLarge,
            Error::NoSolution => ErrorCode::NoSolution,
            Error::AllocationFailure => ErrorCode::AllocationFailure,
        }
    }
}

impl ErrorCode {
    /// Fold an operation outcome into its boundary code.
    pub fn of<T>(result: &Result<T>) -> Self {
        match result {
            Ok(_) => ErrorCode::Ok,
            Err(e) => e.code(),
        }
    }
}

impl From<Error> for ErrorCode {
    fn from(e: Error) -> Self {
        e.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_values_are_stable() {
        assert_eq!(ErrorCode::Ok as i32, 0);
        assert_eq!(Error::NegativeInput.code() as i32, 1);
        assert_eq!(Error::InvalidInput.code() as i32, 2);
        assert_eq!(Error::NumberTooLarge.code() as i32, 3);
        assert_eq!(Error::NoSolution.code() as i32, 4);
        assert_eq!(Error::AllocationFailure.code() as i32, 5);
    }

    #[test]
    fn code_of_result() {
        assert_eq!(ErrorCode::of(&Ok(7u64)), ErrorCode::Ok);
        assert_eq!(
            ErrorCode::of::<u64>(&Err(Error::NoSolution)),
            ErrorCode::NoSolution
        );
    }
}
