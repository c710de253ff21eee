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

//! Binary min-heap over ordered values.
//!
//! `MinHeap<T>` stores its elements in a `Vec<T>` laid out as an implicit
//! complete binary tree. For a node at index `i`:
//!
//! - parent: `(i - 1) / 2`
//! - left child: `2 * i + 1`
//! - right child: `2 * i + 2`
//!
//! The min-heap property `data[parent(i)] <= data[i]` holds for every
//! non-root index after each public operation, so the minimum is always at
//! index 0.
//!
//! Insertion sifts the new element up while its parent is strictly greater.
//! Extraction moves the last element to the root and sifts it down, swapping
//! with the smaller child while that child is strictly smaller; when both
//! children compare equal the left child wins. Equal elements therefore never
//! move past each other without need, which keeps the layout deterministic
//! for a given insertion sequence.

/// A binary min-heap backed by a `Vec<T>`.
///
/// # Examples
///
/// ```rust
/// # use kata_collections::heap::MinHeap;
/// let mut heap = MinHeap::new();
/// heap.insert(5);
/// heap.insert(1);
/// heap.insert(3);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.extract_min(), Some(1));
/// assert_eq!(heap.extract_min(), Some(3));
/// assert_eq!(heap.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinHeap<T> {
    data: Vec<T>,
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

#[inline(always)]
const fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline(always)]
const fn left_child(index: usize) -> usize {
    2 * index + 1
}

#[inline(always)]
const fn right_child(index: usize) -> usize {
    2 * index + 2
}

impl<T> MinHeap<T> {
    /// Creates a new, empty `MinHeap`.
    #[inline]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates a new, empty `MinHeap` with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Creates a new, empty `MinHeap` preallocated for `num_items` elements.
    ///
    /// Alias of `with_capacity` that reads better at call sites sized by
    /// problem input.
    #[inline]
    pub fn preallocated(num_items: usize) -> Self {
        Self::with_capacity(num_items)
    }

    /// Returns the number of elements in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the heap can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Removes all elements, keeping the allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns a reference to the minimum element, or `None` if the heap is empty.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the backing slice in heap order.
    ///
    /// Index 0 holds the minimum; the remaining order is only constrained by
    /// the heap property.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns an iterator over the elements in heap (arbitrary) order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap and returns the backing vector in heap order.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> MinHeap<T>
where
    T: Ord,
{
    /// Inserts a value into the heap.
    ///
    /// The value is appended at the end of the backing vector and sifted up
    /// while its parent is strictly greater.
    #[inline]
    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the minimum element, or `None` if the heap is empty.
    pub fn extract_min(&mut self) -> Option<T> {
        match self.data.len() {
            0 => None,
            1 => self.data.pop(),
            _ => {
                // `swap_remove(0)` moves the last element into the root slot.
                let min = self.data.swap_remove(0);
                self.sift_down(0);
                Some(min)
            }
        }
    }

    /// Returns `true` if the backing slice satisfies the min-heap property.
    pub fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|i| self.data[parent(i)] <= self.data[i])
    }

    /// Consumes the heap and returns its elements in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(value) = self.extract_min() {
            sorted.push(value);
        }
        sorted
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let p = parent(index);
            if self.data[p] <= self.data[index] {
                break;
            }
            self.data.swap(p, index);
            index = p;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = left_child(index);
            if left >= len {
                break;
            }

            let right = right_child(index);
            let smaller = if right < len && self.data[right] < self.data[left] {
                right
            } else {
                left
            };

            if self.data[index] <= self.data[smaller] {
                break;
            }
            self.data.swap(index, smaller);
            index = smaller;
        }
    }
}

impl<T> From<Vec<T>> for MinHeap<T>
where
    T: Ord,
{
    /// Builds a heap in O(n) by sifting down every internal node, last first.
    fn from(data: Vec<T>) -> Self {
        let mut heap = Self { data };
        let len = heap.data.len();
        if len > 1 {
            for index in (0..=parent(len - 1)).rev() {
                heap.sift_down(index);
            }
        }
        debug_assert!(heap.is_heap());
        heap
    }
}

impl<T> FromIterator<T> for MinHeap<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        let mut heap = Self::with_capacity(iter.size_hint().0);
        heap.extend(iter);
        heap
    }
}

impl<T> Extend<T> for MinHeap<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a MinHeap<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> std::fmt::Display for MinHeap<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.data.first() {
            Some(min) => write!(f, "MinHeap(len: {}, min: {})", self.data.len(), min),
            None => write!(f, "MinHeap(len: 0, min: None)"),
        }
    }
}
