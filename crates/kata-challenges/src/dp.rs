// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Dynamic programming exercises.

use kata_core::num::ops::checked_arithmetic::CheckedAddVal;

/// Modulus used by the counting exercises.
pub const MODULUS: u64 = 1_234_567;

/// Returns the largest sum on a path from the apex of `triangle` to its
/// base, moving to one of the two adjacent entries of the next row.
///
/// Returns `None` for an empty triangle, a row `i` that does not hold
/// exactly `i + 1` entries, or a sum that overflows `u64`.
///
/// ```
/// use kata_challenges::dp::max_triangle_path;
///
/// let triangle = vec![vec![7], vec![3, 8], vec![8, 1, 0]];
/// assert_eq!(max_triangle_path(&triangle), Some(18));
/// ```
pub fn max_triangle_path(triangle: &[Vec<u64>]) -> Option<u64> {
    if triangle.is_empty() || triangle.iter().enumerate().any(|(i, row)| row.len() != i + 1) {
        return None;
    }

    let (base, upper) = triangle.split_last()?;
    let mut best = base.clone();
    for row in upper.iter().rev() {
        for (i, &value) in row.iter().enumerate() {
            best[i] = value.checked_add_val(best[i].max(best[i + 1]))?;
        }
        best.truncate(row.len());
    }
    best.first().copied()
}

/// Returns the number of ways to climb `n` steps taking one or two at a
/// time, modulo [`MODULUS`].
pub fn jump_ways(n: u64) -> u64 {
    let (mut previous, mut current) = (1, 1);
    for _ in 1..n {
        (previous, current) = (current, (previous + current) % MODULUS);
    }
    current
}

/// Returns the `n`-th Fibonacci number modulo [`MODULUS`], with `F(0) = 0`.
pub fn fibonacci_mod(n: u64) -> u64 {
    let (mut a, mut b) = (0, 1);
    for _ in 0..n {
        (a, b) = (b, (a + b) % MODULUS);
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_example() {
        let triangle = vec![
            vec![7],
            vec![3, 8],
            vec![8, 1, 0],
            vec![2, 7, 4, 4],
            vec![4, 5, 2, 6, 5],
        ];
        assert_eq!(max_triangle_path(&triangle), Some(30));
    }

    #[test]
    fn test_triangle_edge_cases() {
        assert_eq!(max_triangle_path(&[]), None);
        assert_eq!(max_triangle_path(&[vec![4]]), Some(4));
        assert_eq!(max_triangle_path(&[vec![1], vec![2]]), None);
        assert_eq!(max_triangle_path(&[vec![1], vec![u64::MAX, 0]]), None);
    }

    #[test]
    fn test_jump_ways() {
        assert_eq!(jump_ways(0), 1);
        assert_eq!(jump_ways(1), 1);
        assert_eq!(jump_ways(3), 3);
        assert_eq!(jump_ways(4), 5);
        assert!(jump_ways(2_000) < MODULUS);
    }

    #[test]
    fn test_fibonacci_mod() {
        assert_eq!(fibonacci_mod(0), 0);
        assert_eq!(fibonacci_mod(1), 1);
        assert_eq!(fibonacci_mod(3), 2);
        assert_eq!(fibonacci_mod(5), 5);
        assert_eq!(fibonacci_mod(30), 832_040 % MODULUS);
    }

    #[test]
    fn test_jump_ways_follows_fibonacci() {
        for n in 0..100 {
            assert_eq!(jump_ways(n), fibonacci_mod(n + 1));
        }
    }
}
