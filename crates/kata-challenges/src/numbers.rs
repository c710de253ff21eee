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

//! Number theory and bit manipulation exercises.

use kata_core::num::ops::{
    checked_arithmetic::{CheckedAddVal, CheckedDivVal, CheckedMulVal},
    saturating_arithmetic::SaturatingAddVal,
};
use rustc_hash::FxHashSet;

/// Returns the smallest number greater than `n` with the same number of
/// set bits, or `None` if it does not fit in a `u64` or `n` is zero.
///
/// ```
/// use kata_challenges::numbers::next_bigger_same_ones;
///
/// assert_eq!(next_bigger_same_ones(78), Some(83));
/// ```
pub fn next_bigger_same_ones(n: u64) -> Option<u64> {
    if n == 0 {
        return None;
    }
    let lowest = n & n.wrapping_neg();
    let ripple = n.checked_add_val(lowest)?;
    let ones = ((n ^ ripple) >> 2).checked_div_val(lowest)?;
    Some(ripple | ones)
}

/// Counts the ways to write `n` as a sum of one or more consecutive
/// positive integers.
///
/// Each such run corresponds to exactly one odd divisor of `n`, so this
/// counts odd divisors by trial division over the odd part of `n`. Every
/// `u64` is accepted; a large prime needs about 2^31 divisions.
///
/// ```
/// use kata_challenges::numbers::consecutive_sum_count;
///
/// // 1+2+3+4+5, 4+5+6, 7+8 and 15.
/// assert_eq!(consecutive_sum_count(15), 4);
/// ```
pub fn consecutive_sum_count(n: u64) -> usize {
    if n == 0 {
        return 0;
    }
    let mut rest = n >> n.trailing_zeros();
    let mut divisors = 1usize;
    let mut factor = 3u64;
    while factor <= rest / factor {
        let mut exponent = 0usize;
        while rest % factor == 0 {
            rest /= factor;
            exponent += 1;
        }
        divisors *= exponent + 1;
        factor += 2;
    }
    if rest > 1 {
        divisors *= 2;
    }
    divisors
}

/// Greatest common divisor. `gcd(0, 0)` is `0`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple of all `values`, `None` on overflow.
///
/// The empty product is `1`; any zero makes the result `0`.
pub fn lcm_all(values: &[u64]) -> Option<u64> {
    values.iter().try_fold(1u64, |acc, &value| {
        if acc == 0 || value == 0 {
            return Some(0);
        }
        (acc / gcd(acc, value)).checked_mul_val(value)
    })
}

/// Returns `(width, height)` of the carpet whose one-tile border holds
/// `brown` tiles around a core of `yellow` tiles, with `width >= height`.
///
/// ```
/// use kata_challenges::numbers::carpet_dimensions;
///
/// assert_eq!(carpet_dimensions(10, 2), Some((4, 3)));
/// ```
pub fn carpet_dimensions(brown: u64, yellow: u64) -> Option<(u64, u64)> {
    let total = brown.checked_add_val(yellow)?;
    let mut height = 3u64;
    while height <= total / height {
        if total % height == 0 {
            let width = total / height;
            if (width - 2).checked_mul_val(height - 2) == Some(yellow) {
                return Some((width, height));
            }
        }
        height += 1;
    }
    None
}

/// Repeatedly removes every `0` from `s` and replaces the rest by the
/// binary representation of its length, until `"1"` remains.
///
/// Returns `(rounds, zeros_removed)`. Characters other than `0` and `1`
/// are dropped without being counted. Input without any `1` stops after
/// the round that empties it.
///
/// ```
/// use kata_challenges::numbers::binary_transform;
///
/// assert_eq!(binary_transform("110010101001"), (3, 8));
/// ```
pub fn binary_transform(s: &str) -> (usize, usize) {
    let mut current = s.to_string();
    let mut rounds = 0;
    let mut zeros_removed = 0;

    while current != "1" {
        let zeros = current.chars().filter(|&c| c == '0').count();
        let ones = current.chars().filter(|&c| c == '1').count();
        rounds += 1;
        zeros_removed += zeros;
        if ones == 0 {
            break;
        }
        current = format!("{ones:b}");
    }
    (rounds, zeros_removed)
}

/// Counts the distinct sums of contiguous runs of a circular sequence.
///
/// ```
/// use kata_challenges::numbers::circular_sum_count;
///
/// assert_eq!(circular_sum_count(&[7, 9, 1, 1, 4]), 18);
/// ```
pub fn circular_sum_count(elements: &[u64]) -> usize {
    let n = elements.len();
    let mut sums: FxHashSet<u64> = FxHashSet::default();
    for start in 0..n {
        let mut sum = 0u64;
        for offset in 0..n {
            sum = sum.saturating_add_val(elements[(start + offset) % n]);
            sums.insert(sum);
        }
    }
    sums.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_next_bigger_same_ones() {
        assert_eq!(next_bigger_same_ones(78), Some(83));
        assert_eq!(next_bigger_same_ones(15), Some(23));
        assert_eq!(next_bigger_same_ones(0), None);
        assert_eq!(next_bigger_same_ones(u64::MAX), None);
        assert_eq!(next_bigger_same_ones(1 << 63), None);
    }

    #[test]
    fn test_next_bigger_matches_linear_scan() {
        let mut rng = ChaCha8Rng::seed_from_u64(0xb175);
        for _ in 0..500 {
            let n: u64 = rng.random_range(1..100_000);
            let expected = (n + 1..).find(|m| m.count_ones() == n.count_ones());
            assert_eq!(next_bigger_same_ones(n), expected);
        }
    }

    #[test]
    fn test_consecutive_sum_count() {
        assert_eq!(consecutive_sum_count(15), 4);
        assert_eq!(consecutive_sum_count(1), 1);
        assert_eq!(consecutive_sum_count(16), 1);
        assert_eq!(consecutive_sum_count(0), 0);
    }

    #[test]
    fn test_consecutive_sum_count_at_u64_limits() {
        // u64::MAX = 3 * 5 * 17 * 257 * 641 * 65537 * 6700417.
        assert_eq!(consecutive_sum_count(u64::MAX), 128);
        assert_eq!(consecutive_sum_count(1 << 63), 1);
        // The odd part of u64::MAX - 1 is 7^2 * 73 * 127 * 337 * 92737 * 649657.
        assert_eq!(consecutive_sum_count(u64::MAX - 1), 96);
    }

    #[test]
    fn test_consecutive_sum_count_matches_sliding_window() {
        let sliding = |n: u64| {
            let (mut low, mut high, mut sum, mut count) = (1u64, 1u64, 1u64, 0usize);
            while low <= n {
                if sum < n {
                    high += 1;
                    sum += high;
                } else {
                    if sum == n {
                        count += 1;
                    }
                    sum -= low;
                    low += 1;
                }
            }
            count
        };
        let mut rng = ChaCha8Rng::seed_from_u64(0xc0de);
        for _ in 0..300 {
            let n: u64 = rng.random_range(1..20_000);
            assert_eq!(consecutive_sum_count(n), sliding(n), "n = {n}");
        }
    }

    #[test]
    fn test_gcd_and_lcm() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(lcm_all(&[2, 6, 8, 14]), Some(168));
        assert_eq!(lcm_all(&[1, 2, 3]), Some(6));
        assert_eq!(lcm_all(&[]), Some(1));
        assert_eq!(lcm_all(&[4, 0]), Some(0));
        assert_eq!(lcm_all(&[u64::MAX, u64::MAX - 1]), None);
    }

    #[test]
    fn test_carpet_dimensions() {
        assert_eq!(carpet_dimensions(10, 2), Some((4, 3)));
        assert_eq!(carpet_dimensions(8, 1), Some((3, 3)));
        assert_eq!(carpet_dimensions(24, 24), Some((8, 6)));
        assert_eq!(carpet_dimensions(5, 5), None);
    }

    #[test]
    fn test_binary_transform() {
        assert_eq!(binary_transform("110010101001"), (3, 8));
        assert_eq!(binary_transform("01110"), (3, 3));
        assert_eq!(binary_transform("1111111"), (4, 1));
        assert_eq!(binary_transform("1"), (0, 0));
        assert_eq!(binary_transform("000"), (1, 3));
    }

    #[test]
    fn test_circular_sum_count() {
        assert_eq!(circular_sum_count(&[7, 9, 1, 1, 4]), 18);
        assert_eq!(circular_sum_count(&[]), 0);
        assert_eq!(circular_sum_count(&[1, 1, 1]), 3);
    }
}
