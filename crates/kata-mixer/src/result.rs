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

use crate::stats::MixStatistics;

/// The answer of a mixing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixResult {
    /// Every remaining item is at or above the threshold.
    Reached { operations: u64 },
    /// Fewer than two items remained while the minimum was still below the
    /// threshold.
    Unreachable { operations: u64 },
    /// A monitor stopped the run before either outcome was proven.
    Aborted { operations: u64 },
}

impl MixResult {
    /// Returns the number of mixes performed, whatever the outcome.
    #[inline]
    pub fn operations(&self) -> u64 {
        match *self {
            MixResult::Reached { operations }
            | MixResult::Unreachable { operations }
            | MixResult::Aborted { operations } => operations,
        }
    }
}

impl std::fmt::Display for MixResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MixResult::Reached { operations } => write!(f, "Reached(operations={})", operations),
            MixResult::Unreachable { operations } => {
                write!(f, "Unreachable(operations={})", operations)
            }
            MixResult::Aborted { operations } => write!(f, "Aborted(operations={})", operations),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The heap minimum reached the threshold.
    ThresholdReached,
    /// The items ran out before the threshold was reached.
    ItemsExhausted,
    /// A monitor requested termination. The string carries its reason.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::ThresholdReached => write!(f, "Threshold Reached"),
            TerminationReason::ItemsExhausted => write!(f, "Items Exhausted"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// Result of the mixer after termination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixOutcome<T> {
    result: MixResult,
    termination_reason: TerminationReason,
    minimum: Option<T>,
    statistics: MixStatistics<T>,
}

impl<T> MixOutcome<T> {
    #[inline]
    pub fn reached(minimum: Option<T>, statistics: MixStatistics<T>) -> Self {
        Self {
            result: MixResult::Reached {
                operations: statistics.operations,
            },
            termination_reason: TerminationReason::ThresholdReached,
            minimum,
            statistics,
        }
    }

    #[inline]
    pub fn unreachable(minimum: Option<T>, statistics: MixStatistics<T>) -> Self {
        Self {
            result: MixResult::Unreachable {
                operations: statistics.operations,
            },
            termination_reason: TerminationReason::ItemsExhausted,
            minimum,
            statistics,
        }
    }

    #[inline]
    pub fn aborted<R>(reason: R, minimum: Option<T>, statistics: MixStatistics<T>) -> Self
    where
        R: Into<String>,
    {
        Self {
            result: MixResult::Aborted {
                operations: statistics.operations,
            },
            termination_reason: TerminationReason::Aborted(reason.into()),
            minimum,
            statistics,
        }
    }

    /// Returns the mixing result.
    #[inline]
    pub fn result(&self) -> MixResult {
        self.result
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    /// Returns the smallest item left in the heap, `None` if it is empty.
    #[inline]
    pub fn minimum(&self) -> Option<&T> {
        self.minimum.as_ref()
    }

    /// Returns the run statistics.
    #[inline]
    pub fn statistics(&self) -> &MixStatistics<T> {
        &self.statistics
    }

    #[inline]
    pub fn is_reached(&self) -> bool {
        matches!(self.result, MixResult::Reached { .. })
    }

    /// Returns the operation count when the threshold was reached, `-1`
    /// otherwise.
    ///
    /// Counts beyond `i64::MAX` clamp to `i64::MAX`.
    #[inline]
    pub fn operations_or_sentinel(&self) -> i64 {
        match self.result {
            MixResult::Reached { operations } => i64::try_from(operations).unwrap_or(i64::MAX),
            MixResult::Unreachable { .. } | MixResult::Aborted { .. } => -1,
        }
    }
}

impl<T> std::fmt::Display for MixOutcome<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MixOutcome({}, {})", self.result, self.termination_reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_with_operations(operations: u64) -> MixStatistics<i64> {
        let mut stats = MixStatistics::new(operations as usize + 1);
        for i in 0..operations {
            stats.on_mix(i as i64, false);
        }
        stats
    }

    #[test]
    fn test_reached_reports_operation_count() {
        let outcome = MixOutcome::reached(Some(9), stats_with_operations(2));
        assert!(outcome.is_reached());
        assert_eq!(outcome.result(), MixResult::Reached { operations: 2 });
        assert_eq!(outcome.termination_reason(), &TerminationReason::ThresholdReached);
        assert_eq!(outcome.minimum(), Some(&9));
        assert_eq!(outcome.operations_or_sentinel(), 2);
    }

    #[test]
    fn test_unreachable_maps_to_sentinel() {
        let outcome = MixOutcome::unreachable(Some(3), stats_with_operations(4));
        assert!(!outcome.is_reached());
        assert_eq!(outcome.result().operations(), 4);
        assert_eq!(outcome.termination_reason(), &TerminationReason::ItemsExhausted);
        assert_eq!(outcome.operations_or_sentinel(), -1);
    }

    #[test]
    fn test_aborted_keeps_reason() {
        let outcome = MixOutcome::aborted("operation limit reached", None, stats_with_operations(1));
        assert_eq!(outcome.result(), MixResult::Aborted { operations: 1 });
        match outcome.termination_reason() {
            TerminationReason::Aborted(msg) => assert_eq!(msg, "operation limit reached"),
            _ => panic!("expected Aborted termination reason"),
        }
        assert_eq!(outcome.operations_or_sentinel(), -1);
        assert_eq!(
            format!("{}", outcome),
            "MixOutcome(Aborted(operations=1), Aborted: operation limit reached)"
        );
    }
}
