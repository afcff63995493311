//! Goldbach pair search for even numbers.

use num_integer::Integer;

use crate::error::{Error, Result};
use crate::primality::is_prime;
use crate::sieve::sieve;

/// Find the first pair of primes `(p, n - p)` summing to the even number
/// `n`, scanning candidates for `p` in ascending order.
///
/// The ascending order is part of the contract: many inputs have several
/// decompositions, and callers may rely on getting the one with minimal
/// `p` (which also makes `p ≤ n - p` for the returned pair). Odd inputs
/// and `n ≤ 2` are [InvalidInput](Error::InvalidInput); sieve failures
/// propagate unchanged. An exhausted scan, unobserved for any
/// representable even input per the Goldbach conjecture, reports
/// [NoSolution](Error::NoSolution) rather than leaving the case undefined.
pub fn goldbach_pair(n: u64) -> Result<(u64, u64)> {
    if n <= 2 || n.is_odd() {
        return Err(Error::InvalidInput);
    }

    let primes = sieve(n)?;
    for &p in &primes {
        if is_prime(n - p) {
            return Ok((p, n - p));
        }
    }
    Err(Error::NoSolution)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_pairs() {
        assert_eq!(goldbach_pair(4).unwrap(), (2, 2));
        assert_eq!(goldbach_pair(6).unwrap(), (3, 3));
        assert_eq!(goldbach_pair(28).unwrap(), (5, 23));
        assert_eq!(goldbach_pair(100).unwrap(), (3, 97));
    }

    #[test]
    fn invalid_inputs() {
        assert_eq!(goldbach_pair(0), Err(Error::InvalidInput));
        assert_eq!(goldbach_pair(2), Err(Error::InvalidInput));
        assert_eq!(goldbach_pair(3), Err(Error::InvalidInput));
        assert_eq!(goldbach_pair(27), Err(Error::InvalidInput));
    }

    #[test]
    fn oversized_input_propagates_sieve_error() {
        assert_eq!(
            goldbach_pair(crate::sieve::MAX_SIEVE_LIMIT + 3),
            Err(Error::NumberTooLarge)
        );
    }

    #[test]
    fn pair_properties() {
        for n in (4..=600).step_by(2) {
            let (p, q) = goldbach_pair(n).unwrap();
            assert_eq!(p + q, n);
            assert!(p <= q);
            assert!(is_prime(p) && is_prime(q), "{} = {} + {}", n, p, q);

            // p is minimal among valid decompositions
            for smaller in 2..p {
                assert!(
                    !(is_prime(smaller) && is_prime(n - smaller)),
                    "missed smaller pair ({}, {}) for {}",
                    smaller,
                    n - smaller,
                    n
                );
            }
        }
    }
}
