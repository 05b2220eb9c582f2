/// Product of `1..=n`, or 1 when `n <= 0`.
///
/// Overflow wraps around like a 64-bit machine integer would, so anything
/// past `factorial(20)` is garbage. Use [`checked_factorial`] to detect that.
pub fn factorial(n: i64) -> i64 {
    (1..=n).fold(1i64, |acc, i| acc.wrapping_mul(i))
}

/// Like [`factorial`] but returns `None` once the result no longer fits.
pub fn checked_factorial(n: i64) -> Option<i64> {
    (1..=n).try_fold(1i64, |acc, i| acc.checked_mul(i))
}
