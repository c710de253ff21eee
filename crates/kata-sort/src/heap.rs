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

use kata_collections::heap::MinHeap;
use std::cmp::Ordering;

/// Sorts `v` in ascending order by heapifying a copy into a `MinHeap` and
/// extracting the minimum back into each slot.
///
/// ```
/// let mut v = [4, 1, 3, 1];
/// kata_sort::heap_sort(&mut v);
/// assert_eq!(v, [1, 1, 3, 4]);
/// ```
pub fn heap_sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    let mut heap = MinHeap::from(v.to_vec());
    for slot in v.iter_mut() {
        let Some(min) = heap.extract_min() else {
            break;
        };
        *slot = min;
    }
    debug_assert!(heap.is_empty());
}

/// In-place heap sort with a custom comparator.
///
/// Builds a max-heap under `compare` over the whole slice, then repeatedly
/// swaps the root behind the shrinking heap.
pub fn heap_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    for start in (0..len / 2).rev() {
        sift_down(v, start, len, &mut compare);
    }
    for end in (1..len).rev() {
        v.swap(0, end);
        sift_down(v, 0, end, &mut compare);
    }
}

#[inline]
fn sift_down<T, F>(v: &mut [T], mut index: usize, end: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let left = 2 * index + 1;
        if left >= end {
            break;
        }
        let right = left + 1;
        let larger = if right < end && compare(&v[right], &v[left]) == Ordering::Greater {
            right
        } else {
            left
        };
        if compare(&v[index], &v[larger]) != Ordering::Less {
            break;
        }
        v.swap(index, larger);
        index = larger;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_sorts_descending, assert_sorts_like_std};

    #[test]
    fn test_matches_std_sort() {
        assert_sorts_like_std(heap_sort, 5);
    }

    #[test]
    fn test_by_matches_std_sort() {
        assert_sorts_like_std(|v| heap_sort_by(v, i32::cmp), 6);
    }

    #[test]
    fn test_descending_comparator() {
        assert_sorts_descending(heap_sort_by);
    }
}
