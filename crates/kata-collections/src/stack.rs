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

/// A LIFO stack backed by a `Vec<T>`.
///
/// `Stack` is a thin wrapper that names the operations the exercises rely
/// on (`push`, `pop`, `peek`) and keeps indexing details out of the
/// algorithms that use it. Elements are stored bottom to top, so
/// `as_slice()[0]` is the bottom of the stack.
///
/// # Examples
///
/// ```rust
/// # use kata_collections::stack::Stack;
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.peek(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stack<T> {
    entries: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates a new, empty `Stack`.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates a new, empty `Stack` able to hold `capacity` entries without
    /// reallocating.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the stack holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pushes an entry on top of the stack.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.entries.push(value);
    }

    /// Pops the top entry, or returns `None` if the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.entries.pop()
    }

    /// Returns a reference to the top entry without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.entries.last()
    }

    /// Pops the top entry only if `predicate` holds for it.
    ///
    /// This is the building block of monotonic stacks: callers loop on
    /// `pop_if` until the top no longer violates their ordering.
    #[inline]
    pub fn pop_if<F>(&mut self, predicate: F) -> Option<T>
    where
        F: FnOnce(&T) -> bool,
    {
        let top = self.entries.last()?;
        if predicate(top) {
            self.entries.pop()
        } else {
            None
        }
    }

    /// Clears all entries, keeping the allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the entries bottom to top.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    /// Returns an iterator over the entries bottom to top.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }
}

impl<T> Extend<T> for Stack<T> {
    #[inline]
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.entries.extend(iter);
    }
}

impl<T> FromIterator<T> for Stack<T> {
    #[inline]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<T> std::fmt::Display for Stack<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Stack[")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", entry)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stack_is_empty() {
        let mut s: Stack<u8> = Stack::new();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.peek(), None);
        assert_eq!(s.pop(), None);
        assert_eq!(format!("{}", s), "Stack[]");
    }

    #[test]
    fn test_push_pop_is_lifo() {
        let mut s = Stack::with_capacity(4);
        s.push('a');
        s.push('b');
        s.push('c');
        assert_eq!(s.as_slice(), &['a', 'b', 'c']);
        assert_eq!(format!("{}", s), "Stack[a, b, c]");

        assert_eq!(s.pop(), Some('c'));
        assert_eq!(s.peek(), Some(&'b'));
        assert_eq!(s.pop(), Some('b'));
        assert_eq!(s.pop(), Some('a'));
        assert_eq!(s.pop(), None);
    }

    #[test]
    fn test_pop_if_only_pops_matching_top() {
        let mut s: Stack<i32> = [1, 4, 9].into_iter().collect();
        assert_eq!(s.pop_if(|&top| top < 5), None);
        assert_eq!(s.len(), 3);
        assert_eq!(s.pop_if(|&top| top > 5), Some(9));
        assert_eq!(s.pop_if(|&top| top > 5), None);
        assert_eq!(s.peek(), Some(&4));

        let mut empty: Stack<i32> = Stack::default();
        assert_eq!(empty.pop_if(|_| true), None);
    }

    #[test]
    fn test_extend_and_clear() {
        let mut s = Stack::new();
        s.extend(0..5);
        assert_eq!(s.len(), 5);
        assert_eq!(s.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);

        s.clear();
        assert!(s.is_empty());
    }
}
