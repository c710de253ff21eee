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

//! Greedy exercises: coin change, lifeboats, tangerine boxes and the
//! largest concatenated number.

use kata_sort::{merge_sort, merge_sort_by};
use rustc_hash::FxHashMap;

/// Returns the number of coins used when paying `amount` largest coin first.
///
/// Zero denominations are skipped. Whatever remains below the smallest
/// denomination is left unpaid.
///
/// ```
/// use kata_challenges::greedy::min_coins;
///
/// assert_eq!(min_coins(&[10, 50, 100, 500], 1_260), 6);
/// ```
pub fn min_coins(denominations: &[u64], amount: u64) -> u64 {
    let mut coins = denominations.to_vec();
    merge_sort_by(&mut coins, |a, b| b.cmp(a));

    let mut remaining = amount;
    let mut count = 0;
    for coin in coins.into_iter().filter(|&c| c > 0) {
        count += remaining / coin;
        remaining %= coin;
    }
    count
}

/// Returns the fewest boats needed when a boat carries at most two people
/// and at most `limit` weight.
///
/// The heaviest remaining person always boards, together with the lightest
/// one if they fit.
pub fn min_lifeboats(people: &[u32], limit: u32) -> usize {
    let mut weights = people.to_vec();
    merge_sort(&mut weights);

    let (mut light, mut heavy) = (0, weights.len());
    let mut boats = 0;
    while light < heavy {
        heavy -= 1;
        if light < heavy && weights[light] as u64 + weights[heavy] as u64 <= limit as u64 {
            light += 1;
        }
        boats += 1;
    }
    boats
}

/// Returns the fewest distinct sizes that together cover at least `k`
/// tangerines. If there are fewer than `k` tangerines, every size is needed.
pub fn min_tangerine_kinds(k: usize, sizes: &[u32]) -> usize {
    let mut counts: FxHashMap<u32, usize> = FxHashMap::default();
    for &size in sizes {
        *counts.entry(size).or_insert(0) += 1;
    }

    let mut counts: Vec<usize> = counts.into_values().collect();
    merge_sort_by(&mut counts, |a, b| b.cmp(a));

    let mut covered = 0;
    let mut kinds = 0;
    for count in counts {
        if covered >= k {
            break;
        }
        covered += count;
        kinds += 1;
    }
    kinds
}

/// Returns the largest number obtainable by concatenating `numbers`.
///
/// `a` goes before `b` when `ab > ba` as strings. A result made only of
/// zeros collapses to `"0"`. Empty input yields an empty string.
///
/// ```
/// use kata_challenges::greedy::largest_number;
///
/// assert_eq!(largest_number(&[3, 30, 34, 5, 9]), "9534330");
/// ```
pub fn largest_number(numbers: &[u32]) -> String {
    let mut parts: Vec<String> = numbers.iter().map(u32::to_string).collect();
    merge_sort_by(&mut parts, |a, b| {
        let ab = format!("{a}{b}");
        let ba = format!("{b}{a}");
        ba.cmp(&ab)
    });

    let joined = parts.concat();
    if joined.starts_with('0') {
        return "0".to_string();
    }
    joined
}
