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

//! Price spans with a monotonic stack.
//!
//! The span of price `i` is the number of steps until a strictly lower
//! price shows up, or until the end of the series if none does. Equal
//! prices never end a span.

use kata_collections::stack::Stack;

/// Streaming engine computing price spans in a single left‑to‑right pass.
///
/// The stack holds the indices whose span is still open. Their prices are
/// non‑decreasing from bottom to top, so a new price resolves a run of
/// indices from the top and stops at the first one that is not strictly
/// greater.
#[derive(Debug, Clone)]
pub struct PriceSpanStack<T> {
    prices: Vec<T>,
    spans: Vec<usize>,
    pending: Stack<usize>,
}

impl<T> Default for PriceSpanStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PriceSpanStack<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            prices: Vec::new(),
            spans: Vec::new(),
            pending: Stack::new(),
        }
    }

    /// Creates an engine sized for `num_prices` prices.
    #[inline]
    pub fn preallocated(num_prices: usize) -> Self {
        Self {
            prices: Vec::with_capacity(num_prices),
            spans: Vec::with_capacity(num_prices),
            pending: Stack::with_capacity(num_prices),
        }
    }

    /// Number of prices pushed so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Indices whose span is still open, bottom to top.
    #[inline]
    pub fn pending(&self) -> &[usize] {
        self.pending.as_slice()
    }

    /// Consumes the engine and returns one span per pushed price.
    ///
    /// Indices still open run to the last price: `n - 1 - t`.
    pub fn finish(self) -> Vec<usize> {
        let Self {
            prices,
            mut spans,
            pending,
        } = self;
        let last = prices.len().saturating_sub(1);
        for &t in pending.iter() {
            spans[t] = last - t;
        }
        spans
    }
}

impl<T> PriceSpanStack<T>
where
    T: PartialOrd + Copy,
{
    /// Appends the next price and returns how many open spans it closed.
    pub fn push(&mut self, price: T) -> usize {
        let index = self.prices.len();
        self.prices.push(price);
        self.spans.push(0);

        let prices = &self.prices;
        let mut resolved = 0;
        while let Some(t) = self.pending.pop_if(|&t| prices[t] > price) {
            self.spans[t] = index - t;
            resolved += 1;
        }
        self.pending.push(index);

        debug_assert!(
            self.pending
                .as_slice()
                .windows(2)
                .all(|w| !(self.prices[w[0]] > self.prices[w[1]]))
        );
        resolved
    }
}

/// Returns, for every price, the number of steps until a strictly lower
/// price appears, or until the last index if none does.
///
/// ```
/// use kata_challenges::stock::compute_price_spans;
///
/// assert_eq!(compute_price_spans(&[1, 2, 3, 2, 3]), vec![4, 3, 1, 1, 0]);
/// ```
pub fn compute_price_spans<T>(prices: &[T]) -> Vec<usize>
where
    T: PartialOrd + Copy,
{
    let mut engine = PriceSpanStack::preallocated(prices.len());
    for &price in prices {
        engine.push(price);
    }
    engine.finish()
}
