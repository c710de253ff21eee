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

//! Exhaustive search exercises.
//!
//! Both searches walk the state space depth first with an explicit
//! `Stack` of frames. Each frame owns the `FixedBitSet` of items it has
//! already consumed, so backtracking is just popping the next frame.

use crate::error::{ChallengeError, InvalidDigitError};
use fixedbitset::FixedBitSet;
use kata_collections::stack::Stack;
use kata_core::num::ops::checked_arithmetic::{CheckedAddVal, CheckedMulVal};
use rustc_hash::FxHashSet;

/// Returns `true` if `n` is prime.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut divisor = 3;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

#[derive(Debug, Clone)]
struct DigitFrame {
    value: u64,
    used: FixedBitSet,
}

/// Counts the distinct primes that can be written with a non-empty
/// selection of `digits` in any order. Leading zeros are allowed, so
/// `"011"` forms `11` both as `"11"` and `"011"`.
///
/// Numbers that do not fit in a `u64` are skipped.
///
/// # Errors
///
/// `InvalidDigit` for any character that is not `0`-`9`.
///
/// ```
/// use kata_challenges::search::count_primes_from_digits;
///
/// assert_eq!(count_primes_from_digits("17"), Ok(3));
/// assert_eq!(count_primes_from_digits("011"), Ok(2));
/// ```
pub fn count_primes_from_digits(digits: &str) -> Result<usize, ChallengeError> {
    let digits = digits
        .chars()
        .enumerate()
        .map(|(position, character)| {
            character
                .to_digit(10)
                .map(u64::from)
                .ok_or(InvalidDigitError {
                    character,
                    position,
                })
        })
        .collect::<Result<Vec<u64>, _>>()?;

    let mut primes: FxHashSet<u64> = FxHashSet::default();
    let mut stack = Stack::with_capacity(digits.len() + 1);
    stack.push(DigitFrame {
        value: 0,
        used: FixedBitSet::with_capacity(digits.len()),
    });

    while let Some(frame) = stack.pop() {
        // Equal digits at the same depth lead to identical subtrees.
        let mut tried = [false; 10];
        for (index, &digit) in digits.iter().enumerate() {
            if frame.used.contains(index) || tried[digit as usize] {
                continue;
            }
            tried[digit as usize] = true;

            let Some(value) = frame
                .value
                .checked_mul_val(10)
                .and_then(|v| v.checked_add_val(digit))
            else {
                continue;
            };
            if is_prime(value) {
                primes.insert(value);
            }

            let mut used = frame.used.clone();
            used.insert(index);
            stack.push(DigitFrame { value, used });
        }
    }

    Ok(primes.len())
}

#[derive(Debug, Clone)]
struct DungeonFrame {
    fatigue: u32,
    visited: FixedBitSet,
    explored: usize,
}

/// Returns the largest number of dungeons that can be explored in some
/// order starting with `fatigue`.
///
/// A dungeon is `(required, cost)`: it can be entered while the current
/// fatigue is at least `required`, and entering it consumes `cost`.
///
/// ```
/// use kata_challenges::search::max_dungeons;
///
/// assert_eq!(max_dungeons(80, &[(80, 20), (50, 40), (30, 10)]), 3);
/// ```
pub fn max_dungeons(fatigue: u32, dungeons: &[(u32, u32)]) -> usize {
    let mut best = 0;
    let mut stack = Stack::with_capacity(dungeons.len() + 1);
    stack.push(DungeonFrame {
        fatigue,
        visited: FixedBitSet::with_capacity(dungeons.len()),
        explored: 0,
    });

    while let Some(frame) = stack.pop() {
        best = best.max(frame.explored);
        if best == dungeons.len() {
            break;
        }

        for (index, &(required, cost)) in dungeons.iter().enumerate() {
            if frame.visited.contains(index) || frame.fatigue < required {
                continue;
            }
            let mut visited = frame.visited.clone();
            visited.insert(index);
            stack.push(DungeonFrame {
                fatigue: frame.fatigue.saturating_sub(cost),
                visited,
                explored: frame.explored + 1,
            });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime() {
        let primes: Vec<u64> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(is_prime(1_000_000_007));
        assert!(!is_prime(1_000_000_007 * 3));
    }

    #[test]
    fn test_count_primes_from_digits() {
        assert_eq!(count_primes_from_digits("17"), Ok(3));
        assert_eq!(count_primes_from_digits("011"), Ok(2));
        assert_eq!(count_primes_from_digits(""), Ok(0));
        assert_eq!(count_primes_from_digits("0"), Ok(0));
        assert_eq!(count_primes_from_digits("2"), Ok(1));
    }

    #[test]
    fn test_count_primes_matches_brute_force() {
        // Every number whose digits fit in the multiset {1, 2, 3, 7}.
        let available = [0usize, 1, 1, 1, 0, 0, 0, 1, 0, 0];
        let expected = (2..10_000u64)
            .filter(|&n| {
                let mut counts = [0usize; 10];
                let mut m = n;
                while m > 0 {
                    counts[(m % 10) as usize] += 1;
                    m /= 10;
                }
                counts.iter().zip(available).all(|(&c, a)| c <= a) && is_prime(n)
            })
            .count();
        assert_eq!(count_primes_from_digits("1237"), Ok(expected));
    }

    #[test]
    fn test_count_primes_rejects_non_digits() {
        assert_eq!(
            count_primes_from_digits("1a"),
            Err(ChallengeError::InvalidDigit(InvalidDigitError {
                character: 'a',
                position: 1
            }))
        );
    }

    #[test]
    fn test_max_dungeons() {
        assert_eq!(max_dungeons(80, &[(80, 20), (50, 40), (30, 10)]), 3);
        assert_eq!(max_dungeons(10, &[(20, 1)]), 0);
        assert_eq!(max_dungeons(10, &[]), 0);
        // Both need all 40 points, so only one fits in either order.
        assert_eq!(max_dungeons(40, &[(40, 30), (40, 5)]), 1);
    }

    #[test]
    fn test_max_dungeons_depends_on_order() {
        // Only entering the demanding dungeon first leaves room for both.
        assert_eq!(max_dungeons(40, &[(10, 5), (40, 30)]), 2);
        assert_eq!(max_dungeons(40, &[(40, 30), (10, 5)]), 2);
    }
}
