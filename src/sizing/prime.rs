//! Prime table and the next-capacity lookup.

use parking_lot::RwLock;

/// Multiplier the capacity table steers clear of.
///
/// A prime `p` is only used as a capacity when `(p - 1) % HASH_PRIME != 0`.
pub const HASH_PRIME: usize = 101;

/// The smallest capacity [`PrimeSizer`] ever hands out.
pub const MINIMUM_CAPACITY: usize = SEED_PRIMES[0];

/// Seed table, roughly 1.2x apart.
const SEED_PRIMES: &[usize] = &[
    3, 7, 11, 17, 23, 29, 37, 47, 59, 71, 89, 107, 131, 163, 197, 239, 293, 353, 431, 521, 631,
    761, 919, 1103, 1327, 1597, 1931, 2333, 2801, 3371, 4049, 4861, 5839, 7013, 8419, 10103,
    12143, 14591, 17519, 21023, 25229, 30293, 36353, 43627, 52361, 62851, 75431, 90523, 108631,
    130363, 156437, 187751, 225307, 270371, 324449, 389357, 467237, 560689, 672827, 807403,
    968897, 1162687, 1395263, 1674319, 2009191, 2411033, 2893249, 3471899, 4166287, 4999559,
    5999471, 7199369,
];

/// Primes computed at runtime above the seed table. Append-only, ascending.
static EXTENSIONS: RwLock<Vec<usize>> = parking_lot::const_rwlock(Vec::new());

/// Returns `true` if `number` is prime.
///
/// Uses trial division by odd divisors up to the square root.
///
/// # Examples
///
/// ```rust
/// use primeset::sizing::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(7199369));
/// assert!(!is_prime(1));
/// assert!(!is_prime(91));
/// ```
#[must_use]
pub fn is_prime(number: usize) -> bool {
    if number & 1 == 0 {
        return number == 2;
    }
    if number < 3 {
        return false;
    }
    let limit = number.isqrt();
    (3..=limit).step_by(2).all(|divisor| number % divisor != 0)
}

/// Computes the smallest odd prime `p >= number` with `(p - 1) % HASH_PRIME != 0`.
///
/// Returns `None` when no such value fits in `usize`.
///
/// # Examples
///
/// ```rust
/// use primeset::sizing::compute_next_prime;
///
/// assert_eq!(compute_next_prime(8), Some(11));
/// assert_eq!(compute_next_prime(11), Some(11));
/// // 607 is prime, but 606 is a multiple of 101.
/// assert_eq!(compute_next_prime(607), Some(613));
/// ```
#[must_use]
pub fn compute_next_prime(number: usize) -> Option<usize> {
    ((number | 1)..usize::MAX)
        .step_by(2)
        .find(|&candidate| is_prime(candidate) && (candidate - 1) % HASH_PRIME != 0)
}

/// Growth policy for prime-sized backing storage.
///
/// `PrimeSizer` is stateless from the caller's point of view; the prime table
/// it consults is process-wide and only ever grows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrimeSizer;

impl PrimeSizer {
    /// Returns the smallest table prime that is at least `requested`.
    ///
    /// When `requested` exceeds every cached prime, the next qualifying prime
    /// is computed, appended to the table and returned. If no larger prime can
    /// be represented, `requested` itself is returned; callers detect that
    /// case by comparing the result against what they need.
    ///
    /// # Complexity
    ///
    /// O(table length) for cached capacities, O(sqrt(p)) per candidate
    /// otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primeset::sizing::PrimeSizer;
    ///
    /// assert_eq!(PrimeSizer::next_capacity(3), 3);
    /// assert_eq!(PrimeSizer::next_capacity(12), 17);
    /// assert_eq!(PrimeSizer::next_capacity(1000), 1103);
    /// ```
    #[must_use]
    pub fn next_capacity(requested: usize) -> usize {
        if let Some(prime) = first_at_least(SEED_PRIMES, requested) {
            return prime;
        }
        if let Some(prime) = first_at_least(&EXTENSIONS.read(), requested) {
            return prime;
        }

        let Some(next) = compute_next_prime(requested).filter(|&next| next > requested) else {
            return requested;
        };

        let mut extensions = EXTENSIONS.write();
        // Another thread may have extended the table while we were computing.
        if let Some(prime) = first_at_least(&extensions, requested) {
            return prime;
        }
        extensions.push(next);
        tracing::debug!(requested, prime = next, "extended prime capacity table");
        next
    }

    /// Returns a snapshot of the seed table followed by every runtime extension.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primeset::sizing::PrimeSizer;
    ///
    /// let primes = PrimeSizer::cached_primes();
    /// assert_eq!(&primes[..4], &[3, 7, 11, 17]);
    /// assert!(primes.windows(2).all(|pair| pair[0] < pair[1]));
    /// ```
    #[must_use]
    pub fn cached_primes() -> Vec<usize> {
        let extensions = EXTENSIONS.read();
        let mut primes = Vec::with_capacity(SEED_PRIMES.len() + extensions.len());
        primes.extend_from_slice(SEED_PRIMES);
        primes.extend_from_slice(&extensions);
        primes
    }
}

fn first_at_least(primes: &[usize], requested: usize) -> Option<usize> {
    primes.iter().copied().find(|&prime| prime >= requested)
}
