//! Number-theory primitives for embedding behind a foreign-function
//! boundary: deterministic and probabilistic primality tests, GCD/LCM,
//! prime sieving and counting, trial factorization, and Goldbach pair
//! search over `u64` inputs.
//!
//! Every fallible operation returns a [Result] carrying one of a closed
//! set of [Error] kinds, each with a stable numeric [ErrorCode] for hosts
//! that speak integers rather than enums. Sequence results are freshly
//! allocated and exclusively owned by the caller; when handed across a
//! raw boundary via [PrimeArray] they are released exactly once. Nothing
//! keeps global state, blocks, retries, or panics on inputs within the
//! documented domains.

mod arith;
mod array;
mod error;
mod factor;
mod goldbach;
mod primality;
mod sieve;
mod validate;

pub use arith::{gcd, lcm};
pub use array::PrimeArray;
pub use error::{Error, ErrorCode, Result};
pub use factor::prime_factors;
pub use goldbach::goldbach_pair;
pub use primality::{fermat_test, is_prime, is_prp, FERMAT_BASES};
pub use sieve::{prime_count, sieve, SieveBuffer, MAX_SIEVE_LIMIT};
pub use validate::signed_input;
