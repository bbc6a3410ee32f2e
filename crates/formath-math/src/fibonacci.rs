/// Returns the first `n` terms of `0, 1, 1, 2, 3, 5, ...`.
///
/// Empty for `n <= 0`. Terms past `F(92)` wrap around.
pub fn fibonacci(n: i32) -> Vec<i64> {
    let Ok(len) = usize::try_from(n) else {
        return Vec::new();
    };

    let mut terms = Vec::with_capacity(len);
    let (mut a, mut b) = (0i64, 1i64);
    for _ in 0..len {
        terms.push(a);
        (a, b) = (b, a.wrapping_add(b));
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_sequences() {
        assert_eq!(fibonacci(-1), Vec::<i64>::new());
        assert_eq!(fibonacci(0), Vec::<i64>::new());
        assert_eq!(fibonacci(1), vec![0]);
        assert_eq!(fibonacci(2), vec![0, 1]);
        assert_eq!(fibonacci(3), vec![0, 1, 1]);
    }

    #[test]
    fn test_largest_exact_term() {
        let terms = fibonacci(93);
        assert_eq!(terms[92], 7_540_113_804_746_346_429);
    }
}
