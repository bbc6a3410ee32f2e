use crate::MathError;

/// Returned by [`factorial`] for negative input.
pub const FACTORIAL_SENTINEL: i64 = -1;

/// Largest `n` whose factorial fits in an `i64`.
pub const MAX_FACTORIAL_INPUT: i32 = 20;

/// Computes `n!`.
///
/// Returns 1 for `n` of 0 or 1 and [`FACTORIAL_SENTINEL`] for negative `n`.
/// Results past `20!` wrap around.
pub fn factorial(n: i32) -> i64 {
    if n < 0 {
        return FACTORIAL_SENTINEL;
    }
    (2..=i64::from(n)).fold(1i64, |acc, i| acc.wrapping_mul(i))
}

/// Computes `n!`, rejecting negative input and overflow.
pub fn checked_factorial(n: i32) -> Result<i64, MathError> {
    if n < 0 {
        return Err(MathError::NegativeInput(n));
    }
    (2..=i64::from(n)).try_fold(1i64, |acc, i| {
        acc.checked_mul(i).ok_or(MathError::Overflow(n))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(2), 2);
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(10), 3_628_800);
    }

    #[test]
    fn test_negative_is_sentinel() {
        assert_eq!(factorial(-3), -1);
        assert_eq!(factorial(-1), FACTORIAL_SENTINEL);
        assert_eq!(factorial(i32::MIN), FACTORIAL_SENTINEL);
    }

    #[test]
    fn test_largest_exact_value() {
        assert_eq!(factorial(MAX_FACTORIAL_INPUT), 2_432_902_008_176_640_000);
        assert_eq!(checked_factorial(MAX_FACTORIAL_INPUT), Ok(2_432_902_008_176_640_000));
    }

    #[test]
    fn test_overflow_wraps() {
        let expected = 2_432_902_008_176_640_000i64.wrapping_mul(21);
        assert_eq!(factorial(21), expected);
    }

    #[test]
    fn test_checked_rejects() {
        assert_eq!(checked_factorial(-4), Err(MathError::NegativeInput(-4)));
        assert_eq!(checked_factorial(21), Err(MathError::Overflow(21)));
        assert_eq!(checked_factorial(0), Ok(1));
    }
}
