//! # Formath MathKit
//!
//! Textbook integer functions over native fixed-width integers.
//!
//! ## Overview
//!
//! - [`factorial`] / [`checked_factorial`]: `n!` as `i64`
//! - [`is_prime`] / [`primes_up_to`]: 6k ± 1 trial division
//! - [`fibonacci`]: the first `n` Fibonacci terms, starting `0, 1`
//!
//! Every function is pure and holds no state, so all of them may be called
//! from any number of threads.
//!
//! ## Invalid Input and Overflow
//!
//! [`factorial`] returns the sentinel `-1` for negative input and wraps on
//! overflow (past `20!`). [`fibonacci`] wraps past `F(92)`. Callers that need
//! to detect these cases use [`checked_factorial`], which reports a
//! [`MathError`].
//!
//! ## Examples
//!
//! ```
//! use formath_math::{factorial, fibonacci, is_prime};
//!
//! assert_eq!(factorial(10), 3_628_800);
//! assert_eq!(factorial(-3), -1);
//! assert!(is_prime(101));
//! assert_eq!(fibonacci(7), vec![0, 1, 1, 2, 3, 5, 8]);
//! ```

use thiserror::Error;

pub mod factorial;
pub mod fibonacci;
pub mod primes;


pub use factorial::{FACTORIAL_SENTINEL, MAX_FACTORIAL_INPUT, checked_factorial, factorial};
pub use fibonacci::fibonacci;
pub use primes::{is_prime, primes_up_to};

/// Errors reported by the checked variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("factorial is undefined for negative input {0}")]
    NegativeInput(i32),
    #[error("factorial({0}) does not fit in a 64-bit signed integer")]
    Overflow(i32),
}
