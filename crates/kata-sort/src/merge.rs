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

use std::cmp::Ordering;

/// Sorts `v` in ascending order with a top-down merge sort.
///
/// Stable. Allocates one scratch buffer of `v.len()` elements that is
/// reused by every merge.
///
/// ```
/// let mut v = vec![3, 1, 2, 1];
/// kata_sort::merge_sort(&mut v);
/// assert_eq!(v, [1, 1, 2, 3]);
/// ```
#[inline]
pub fn merge_sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    merge_sort_by(v, T::cmp);
}

/// Merge sort with a custom comparator.
pub fn merge_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() <= 1 {
        return;
    }
    let mut scratch = Vec::with_capacity(v.len());
    sort_range(v, &mut scratch, &mut compare);
}

fn sort_range<T, F>(v: &mut [T], scratch: &mut Vec<T>, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len <= 1 {
        return;
    }

    let mid = len / 2;
    sort_range(&mut v[..mid], scratch, compare);
    sort_range(&mut v[mid..], scratch, compare);

    // Halves already in order.
    if compare(&v[mid - 1], &v[mid]) != Ordering::Greater {
        return;
    }

    scratch.clear();
    let (mut left, mut right) = (0, mid);
    while left < mid && right < len {
        // Ties take from the left half to keep the sort stable.
        if compare(&v[right], &v[left]) == Ordering::Less {
            scratch.push(v[right].clone());
            right += 1;
        } else {
            scratch.push(v[left].clone());
            left += 1;
        }
    }
    scratch.extend_from_slice(&v[left..mid]);
    scratch.extend_from_slice(&v[right..len]);

    debug_assert_eq!(scratch.len(), len);
    v.clone_from_slice(scratch);
}
