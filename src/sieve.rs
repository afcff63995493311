//! Bounded sieve of Eratosthenes and the prime-counting helpers built on it.

use bitvec::bitvec;

use crate::array;
use crate::error::Result;
use crate::validate;

/// Ceiling for the allocating operations ([sieve], [prime_count],
/// [goldbach_pair](crate::goldbach_pair)). The marking array costs one bit
/// per candidate, 256 MiB at the cap; larger requests are rejected with
/// [NumberTooLarge](crate::Error::NumberTooLarge) before anything is
/// allocated.
pub const MAX_SIEVE_LIMIT: u64 = (1 << 31) - 1;

/// Collect every prime `≤ limit` in ascending order.
///
/// `limit < 2` yields an empty vector. Marking starts at `i²` for each
/// unmarked `i`, since smaller multiples were already struck by smaller
/// primes.
/// Runs in `O(limit·log log limit)` time and `limit` bits of scratch; this
/// is the one shared sieving routine, reused by [prime_count] and the
/// Goldbach search rather than reimplemented there.
pub fn sieve(limit: u64) -> Result<Vec<u64>> {
    validate::ensure_within(limit, MAX_SIEVE_LIMIT)?;
    if limit < 2 {
        return Ok(Vec::new());
    }

    let mut composite = bitvec![0; (limit + 1) as usize];
    composite.set(0, true);
    composite.set(1, true);

    let mut i = 2u64;
    while i * i <= limit {
        if !composite[i as usize] {
            let mut multiple = i * i;
            while multiple <= limit {
                composite.set(multiple as usize, true);
                multiple += i;
            }
        }
        i += 1;
    }

    let mut primes = array::try_vec(composite.count_zeros())?;
    primes.extend(composite.iter_zeros().map(|ix| ix as u64));
    Ok(primes)
}

/// The number of primes `≤ limit`.
pub fn prime_count(limit: u64) -> Result<u64> {
    Ok(sieve(limit)?.len() as u64)
}

/// A caller-owned cache over [sieve] for call chains that consult the same
/// prime list repeatedly.
///
/// The buffer re-sieves only when asked for a limit above what it already
/// holds; correctness never depends on the caching, it only avoids repeat
/// work. Not shared between callers: each chain owns its buffer, keeping
/// calls free of global state.
pub struct SieveBuffer {
    list: Vec<u64>,
    bound: u64,
}

impl SieveBuffer {
    pub fn new() -> Self {
        SieveBuffer {
            list: Vec::new(),
            bound: 1,
        }
    }

    /// Make sure every prime `≤ limit` is in the buffer.
    pub fn reserve(&mut self, limit: u64) -> Result<()> {
        if limit > self.bound {
            self.list = sieve(limit)?;
            self.bound = limit;
        }
        Ok(())
    }

    /// All primes `≤ limit`, ascending. Sieves on demand.
    pub fn primes(&mut self, limit: u64) -> Result<&[u64]> {
        self.reserve(limit)?;
        let position = match self.list.binary_search(&limit) {
            Ok(p) => p + 1,
            Err(p) => p,
        };
        Ok(&self.list[..position])
    }

    /// The number of primes `≤ limit`. Sieves on demand.
    pub fn count(&mut self, limit: u64) -> Result<u64> {
        Ok(self.primes(limit)?.len() as u64)
    }

    /// Membership test against the buffered list. Only meaningful for
    /// candidates at or below [bound](SieveBuffer::bound).
    pub fn contains(&self, n: u64) -> bool {
        self.list.binary_search(&n).is_ok()
    }

    /// The highest limit the buffer has been sieved to.
    pub fn bound(&self) -> u64 {
        self.bound
    }
}

impl Default for SieveBuffer {
    fn default() -> Self {
        Self::new()
    }
}
