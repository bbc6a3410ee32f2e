/// Deterministic primality test by trial division.
///
/// `n <= 1` is never prime, 2 and 3 are, multiples of 2 or 3 are not.
/// Remaining candidates are divided by `i` and `i + 2` for
/// `i = 5, 11, 17, ...` while `i * i <= n`.
pub fn is_prime(n: i32) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    // i64 keeps i * i from overflowing near i32::MAX.
    let n = i64::from(n);
    let mut i = 5i64;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Every prime in `0..=limit`, ascending.
pub fn primes_up_to(limit: i32) -> Vec<i32> {
    if limit < 2 {
        return Vec::new();
    }
    (2..=limit).filter(|&n| is_prime(n)).collect()
}
