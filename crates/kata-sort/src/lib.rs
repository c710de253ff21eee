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

//! # Kata Sort
//!
//! Classic comparison sorts over mutable slices.
//!
//! Every algorithm sorts in place in ascending order and comes with a `*_by`
//! variant taking a comparator, mirroring `slice::sort` and
//! `slice::sort_by`.
//!
//! | Algorithm   | Time        | Extra space | Stable |
//! |-------------|-------------|-------------|--------|
//! | `bubble`    | O(n²)       | O(1)        | no     |
//! | `selection` | O(n²)       | O(1)        | no     |
//! | `insertion` | O(n²)       | O(1)        | yes    |
//! | `merge`     | O(n log n)  | O(n)        | yes    |
//! | `heap`      | O(n log n)  | O(n) / O(1) | no     |
//!
//! `heap_sort` drains a `kata_collections::heap::MinHeap`; `heap_sort_by`
//! works in place since the heap container has no comparator hook.

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod selection;

pub use bubble::{bubble_sort, bubble_sort_by};
pub use heap::{heap_sort, heap_sort_by};
pub use insertion::{insertion_sort, insertion_sort_by};
pub use merge::{merge_sort, merge_sort_by};
pub use selection::{selection_sort, selection_sort_by};

#[cfg(test)]
pub(crate) mod test_support {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    /// Seeded random inputs of assorted lengths, including empty and single.
    pub fn random_inputs(seed: u64) -> Vec<Vec<i32>> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut inputs = vec![vec![], vec![7], vec![2, 1], vec![3, 3, 3]];
        for len in [5usize, 16, 33, 100, 257] {
            inputs.push((0..len).map(|_| rng.random_range(-50..50)).collect());
        }
        inputs
    }

    /// Checks `sort` against the standard library on every input.
    pub fn assert_sorts_like_std(sort: fn(&mut [i32]), seed: u64) {
        for input in random_inputs(seed) {
            let mut expected = input.clone();
            expected.sort();
            let mut actual = input;
            sort(&mut actual);
            assert_eq!(actual, expected);
        }
    }

    /// Checks that a comparator variant honors a descending comparator.
    pub fn assert_sorts_descending(sort: fn(&mut [i32], fn(&i32, &i32) -> std::cmp::Ordering)) {
        for input in random_inputs(7) {
            let mut expected = input.clone();
            expected.sort_by(|a, b| b.cmp(a));
            let mut actual = input;
            sort(&mut actual, |a, b| b.cmp(a));
            assert_eq!(actual, expected);
        }
    }
}
