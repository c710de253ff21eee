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

use kata_core::num::ops::saturating_arithmetic::SaturatingAddVal;
use std::time::Duration;

/// Statistics collected during one run of the spiciness mixer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixStatistics<T> {
    /// Number of mixing operations performed.
    pub operations: u64,
    /// Number of items the run started with.
    pub initial_items: usize,
    /// Number of items left in the heap when the run ended.
    pub remaining_items: usize,
    /// The largest mixed value produced, if any mix happened.
    pub largest_mixed: Option<T>,
    /// Mixes whose exact value did not fit the numeric type and was clamped.
    pub saturated_mixes: u64,
    /// Total time spent in the mixer.
    pub time_total: Duration,
}

impl<T> Default for MixStatistics<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T> MixStatistics<T> {
    /// Creates empty statistics for a run over `initial_items` items.
    #[inline]
    pub fn new(initial_items: usize) -> Self {
        Self {
            operations: 0,
            initial_items,
            remaining_items: initial_items,
            largest_mixed: None,
            saturated_mixes: 0,
            time_total: Duration::ZERO,
        }
    }

    /// Records one mixing operation that produced `mixed`.
    #[inline]
    pub fn on_mix(&mut self, mixed: T, saturated: bool)
    where
        T: Copy + Ord,
    {
        self.operations = self.operations.saturating_add_val(1);
        self.remaining_items = self.remaining_items.saturating_sub(1);
        self.largest_mixed = Some(match self.largest_mixed {
            Some(largest) => largest.max(mixed),
            None => mixed,
        });
        if saturated {
            self.saturated_mixes = self.saturated_mixes.saturating_add_val(1);
        }
    }

    #[inline]
    pub fn set_remaining_items(&mut self, remaining_items: usize) {
        self.remaining_items = remaining_items;
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl<T> std::fmt::Display for MixStatistics<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Kata-Mixer Statistics:")?;
        writeln!(f, "  Operations:           {}", self.operations)?;
        writeln!(f, "  Initial items:        {}", self.initial_items)?;
        writeln!(f, "  Remaining items:      {}", self.remaining_items)?;
        match &self.largest_mixed {
            Some(largest) => writeln!(f, "  Largest mixed value:  {}", largest)?,
            None => writeln!(f, "  Largest mixed value:  None")?,
        }
        writeln!(f, "  Saturated mixes:      {}", self.saturated_mixes)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}
