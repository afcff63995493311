//! Primality tests: deterministic trial division and the Fermat heuristic.

use num_modular::{ModularCoreOps, ModularUnaryOps};

/// Witness bases used by [fermat_test]. Fixed by contract; no random bases.
pub const FERMAT_BASES: [u64; 4] = [2, 3, 5, 7];

/// Test whether `n` is prime by trial division.
///
/// After disposing of the small cases and the multiples of 2 and 3, the
/// remaining candidate divisors follow the 6k±1 wheel (5, 7, 11, 13, ...)
/// up to `⌊√n⌋` inclusive. Deterministic for every `u64`, runs in `O(√n)`
/// and allocates nothing. The bound is taken as an integer square root so
/// candidates near 2³² cannot overflow a squared comparison.
pub fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let root = num_integer::sqrt(n);
    let mut i = 5u64;
    let mut step = 2u64;
    while i <= root {
        if n % i == 0 {
            return false;
        }
        i += step;
        step = 6 - step;
    }
    true
}

/// Test if `n` is a Fermat probable prime to the given base, i.e. whether
/// `base^(n-1) ≡ 1 (mod n)`.
///
/// A failing base proves `n` composite; a passing base proves nothing.
pub fn is_prp(n: u64, base: u64) -> bool {
    if n <= 1 {
        return false;
    }
    powm(base % n, n - 1, n) == 1
}

/// Fermat probabilistic primality test with the fixed witness set
/// {2, 3, 5, 7}. Bases not below `n` are skipped, not failed.
///
/// `n ≤ 1` is not prime (a defined answer, not an error). A `false` answer
/// is always correct; a `true` answer means "probably prime". Carmichael
/// numbers coprime to all four witnesses (29341 is the smallest) pass
/// even though they are composite. This is an inherent limitation of the
/// Fermat congruence; callers needing a certain answer should use
/// [is_prime].
pub fn fermat_test(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    FERMAT_BASES
        .iter()
        .filter(|&&base| base < n)
        .all(|&base| is_prp(n, base))
}

// Binary square-and-multiply exponentiation mod m. The modular ops widen
// internally, so any u64 modulus is safe.
fn powm(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1 % m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result.mulm(&base, &m);
        }
        base = base.sqm(&m);
        exp >>= 1;
    }
    result
}
