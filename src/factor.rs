//! Trial-division factorization.

use crate::array;
use crate::error::Result;
use crate::validate;

/// The prime factors of `n` in non-decreasing order, with multiplicity.
/// The product of the output equals the input; `prime_factors(1)` is empty.
///
/// Factors of 2 and 3 are stripped first, then candidates follow the 6k±1
/// wheel up to `⌊√residual⌋`, the bound tightening as the residual shrinks.
/// A residual above 1 after the scan is itself prime (the single large
/// factor beyond the trial bound) and is appended last. `n = 0` has no
/// factorization and is rejected as [InvalidInput](crate::Error::InvalidInput).
pub fn prime_factors(n: u64) -> Result<Vec<u64>> {
    validate::ensure_nonzero(n)?;

    let mut factors = array::try_vec(16)?;
    let mut n = n;
    for &d in &[2u64, 3] {
        while n.is_multiple_of(d) {
            factors.push(d);
            n /= d;
        }
    }

    let mut i = 5u64;
    let mut step = 2u64;
    let mut root = num_integer::sqrt(n);
    while i <= root {
        if n.is_multiple_of(i) {
            while n.is_multiple_of(i) {
                factors.push(i);
                n /= i;
            }
            root = num_integer::sqrt(n);
        }
        i += step;
        step = 6 - step;
    }
    if n > 1 {
        factors.push(n);
    }
    Ok(factors)
}
