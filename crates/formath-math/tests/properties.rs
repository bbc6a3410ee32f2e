use formath_math::{
    MAX_FACTORIAL_INPUT, checked_factorial, factorial, fibonacci, is_prime, primes_up_to,
};

#[test]
fn test_factorial_step_relation() {
    for n in 0..MAX_FACTORIAL_INPUT {
        assert_eq!(
            factorial(n + 1),
            factorial(n) * i64::from(n + 1),
            "factorial({}) step",
            n
        );
        assert_eq!(checked_factorial(n), Ok(factorial(n)));
    }
}

#[test]
fn test_fibonacci_recurrence() {
    for n in 2..=92 {
        let terms = fibonacci(n);
        assert_eq!(terms.len(), n as usize);
        assert_eq!(&terms[..2], &[0, 1]);
        for i in 2..terms.len() {
            assert_eq!(terms[i], terms[i - 1] + terms[i - 2], "fibonacci({})[{}]", n, i);
        }
    }
}

#[test]
fn test_fibonacci_prefix_stable() {
    let long = fibonacci(40);
    for n in 0..40 {
        assert_eq!(fibonacci(n), long[..n as usize].to_vec());
    }
}

/// Reference: a number is prime iff no d in 2..n divides it.
fn naive_is_prime(n: i32) -> bool {
    n >= 2 && (2..n).all(|d| n % d != 0)
}

#[test]
fn test_is_prime_matches_naive() {
    for n in -10..2000 {
        assert_eq!(is_prime(n), naive_is_prime(n), "is_prime({})", n);
    }
}

#[test]
fn test_primes_up_to_is_filter() {
    let primes = primes_up_to(500);
    assert!(primes.windows(2).all(|w| w[0] < w[1]));
    assert!(primes.iter().all(|&p| is_prime(p)));
    assert_eq!(primes.len(), (0..=500).filter(|&n| is_prime(n)).count());
}
