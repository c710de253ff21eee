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

/// Sorts `v` in ascending order by exchanging elements into place.
///
/// For every position `i` from the back, each earlier element larger than
/// `v[i]` is swapped into it, so after the pass `v[i]` holds the maximum
/// of `v[..=i]`.
///
/// ```
/// let mut v = [5, 1, 4, 2, 3];
/// kata_sort::bubble_sort(&mut v);
/// assert_eq!(v, [1, 2, 3, 4, 5]);
/// ```
#[inline]
pub fn bubble_sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort_by(v, T::cmp);
}

/// Sorts `v` with the exchange sort above using `compare`.
pub fn bubble_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in (1..v.len()).rev() {
        for j in 0..i {
            if compare(&v[j], &v[i]) == Ordering::Greater {
                v.swap(j, i);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_sorts_descending, assert_sorts_like_std};

    #[test]
    fn test_matches_std_sort() {
        assert_sorts_like_std(bubble_sort, 1);
    }

    #[test]
    fn test_descending_comparator() {
        assert_sorts_descending(bubble_sort_by);
    }

    #[test]
    fn test_already_sorted_is_untouched() {
        let mut v = [1, 2, 3, 4];
        bubble_sort(&mut v);
        assert_eq!(v, [1, 2, 3, 4]);
    }
}
