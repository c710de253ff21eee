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

/// Sorts `v` in ascending order by repeatedly selecting the minimum of the
/// unsorted suffix.
#[inline]
pub fn selection_sort<T>(v: &mut [T])
where
    T: Ord,
{
    selection_sort_by(v, T::cmp);
}

/// Selection sort with a custom comparator. The first of several equal
/// minimums is selected.
pub fn selection_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    for i in 0..len {
        let mut min_index = i;
        for j in (i + 1)..len {
            if compare(&v[j], &v[min_index]) == Ordering::Less {
                min_index = j;
            }
        }
        if min_index != i {
            v.swap(i, min_index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_sorts_descending, assert_sorts_like_std};

    #[test]
    fn test_matches_std_sort() {
        assert_sorts_like_std(selection_sort, 2);
    }

    #[test]
    fn test_descending_comparator() {
        assert_sorts_descending(selection_sort_by);
    }

    #[test]
    fn test_sorts_strings() {
        let mut v = ["pear", "apple", "fig"];
        selection_sort(&mut v);
        assert_eq!(v, ["apple", "fig", "pear"]);
    }
}
