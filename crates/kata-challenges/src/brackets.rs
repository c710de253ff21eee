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

use kata_collections::stack::Stack;

/// Returns `true` if every `)` in `s` closes an earlier `(` and every `(`
/// is closed. Characters other than parentheses are ignored.
///
/// ```
/// use kata_challenges::brackets::is_balanced;
///
/// assert!(is_balanced("(())()"));
/// assert!(!is_balanced(")()("));
/// ```
pub fn is_balanced(s: &str) -> bool {
    let mut open = Stack::new();
    for c in s.chars() {
        match c {
            '(' => open.push(c),
            ')' => {
                if open.pop().is_none() {
                    return false;
                }
            }
            _ => {}
        }
    }
    open.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced() {
        assert!(is_balanced("()()"));
        assert!(is_balanced("(())()"));
        assert!(is_balanced(""));
        assert!(is_balanced("(a(b)c)"));
    }

    #[test]
    fn test_unbalanced() {
        assert!(!is_balanced(")()("));
        assert!(!is_balanced("(()("));
        assert!(!is_balanced("())"));
        assert!(!is_balanced(")"));
    }

    #[test]
    fn test_close_before_open_is_rejected_even_when_counts_match() {
        assert!(!is_balanced("())(()"));
    }
}
