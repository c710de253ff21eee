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

use crate::{
    monitor::{
        mix_monitor::{MixCommand, MixMonitor, MixStep},
        no_op::NoOperationMonitor,
    },
    result::{MixOutcome, TerminationReason},
    stats::MixStatistics,
};
use kata_collections::heap::MinHeap;
use kata_core::num::KataNumeric;

/// Repeatedly mixes the two mildest items until every item reaches a threshold.
///
/// The mixer owns its heap so that repeated runs reuse the allocation.
/// Input slices are copied into the heap and never mutated.
#[derive(Debug, Clone, Default)]
pub struct SpicinessMixer<T> {
    heap: MinHeap<T>,
}

impl<T> SpicinessMixer<T> {
    /// Creates a new mixer with an empty heap.
    #[inline]
    pub fn new() -> Self {
        Self {
            heap: MinHeap::new(),
        }
    }

    /// Creates a new mixer whose heap can hold `num_items` without reallocating.
    #[inline]
    pub fn preallocated(num_items: usize) -> Self {
        Self {
            heap: MinHeap::preallocated(num_items),
        }
    }

    /// Returns the heap as left by the last run.
    #[inline]
    pub fn heap(&self) -> &MinHeap<T> {
        &self.heap
    }
}

impl<T> SpicinessMixer<T>
where
    T: KataNumeric,
{
    /// Mixes `values` until the minimum reaches `threshold`.
    ///
    /// Each mix removes the two smallest items `a <= b` and inserts
    /// `a + 2 * b`, saturating at `T::max_value()`. An empty heap is treated
    /// as having minimum zero, so empty input reaches any threshold `<= 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kata_mixer::{SpicinessMixer, monitor::no_op::NoOperationMonitor, result::MixResult};
    ///
    /// let mut mixer = SpicinessMixer::new();
    /// let outcome = mixer.mix(&[1, 2, 3, 9, 10, 12], 7, NoOperationMonitor::new());
    /// assert_eq!(outcome.result(), MixResult::Reached { operations: 2 });
    /// assert_eq!(outcome.minimum(), Some(&9));
    /// ```
    pub fn mix<M>(&mut self, values: &[T], threshold: T, mut monitor: M) -> MixOutcome<T>
    where
        M: MixMonitor<T>,
    {
        let start_time = std::time::Instant::now();

        self.heap.clear();
        self.heap.extend(values.iter().copied());

        let mut stats = MixStatistics::new(self.heap.len());
        monitor.on_enter_mix(self.heap.len(), threshold);

        let termination_reason = loop {
            let minimum = self.heap.peek().copied().unwrap_or(T::ZERO);
            if minimum >= threshold {
                break TerminationReason::ThresholdReached;
            }
            if self.heap.len() < 2 {
                break TerminationReason::ItemsExhausted;
            }
            if let MixCommand::Terminate(reason) = monitor.mix_command(&stats) {
                break TerminationReason::Aborted(reason);
            }

            let (Some(smallest), Some(second)) = (self.heap.extract_min(), self.heap.extract_min())
            else {
                break TerminationReason::ItemsExhausted;
            };

            let step = Self::mix_pair(smallest, second);
            self.heap.insert(step.mixed);

            stats.on_mix(step.mixed, step.saturated);
            monitor.on_mix(&step, &stats);
        };

        stats.set_remaining_items(self.heap.len());
        stats.set_total_time(start_time.elapsed());
        monitor.on_exit_mix(&stats);

        let minimum = self.heap.peek().copied();
        match termination_reason {
            TerminationReason::ThresholdReached => MixOutcome::reached(minimum, stats),
            TerminationReason::ItemsExhausted => MixOutcome::unreachable(minimum, stats),
            TerminationReason::Aborted(reason) => MixOutcome::aborted(reason, minimum, stats),
        }
    }

    #[inline(always)]
    fn mix_pair(smallest: T, second: T) -> MixStep<T> {
        let exact = second
            .checked_mul_val(T::TWO)
            .and_then(|doubled| smallest.checked_add_val(doubled));
        match exact {
            Some(mixed) => MixStep {
                smallest,
                second,
                mixed,
                saturated: false,
            },
            None => MixStep {
                smallest,
                second,
                mixed: smallest.saturating_add_val(second.saturating_mul_val(T::TWO)),
                saturated: true,
            },
        }
    }
}

/// Returns the minimum number of mixes needed to bring every value up to
/// `threshold`, or `-1` when the values run out first.
///
/// ```
/// use kata_mixer::mix_spiciness;
///
/// assert_eq!(mix_spiciness(&[1, 2, 3, 9, 10, 12], 7), 2);
/// assert_eq!(mix_spiciness(&[1], 5), -1);
/// ```
pub fn mix_spiciness(values: &[i64], threshold: i64) -> i64 {
    SpicinessMixer::preallocated(values.len())
        .mix(values, threshold, NoOperationMonitor::new())
        .operations_or_sentinel()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        monitor::{operation_limit::OperationLimitMonitor, time_limit::TimeLimitMonitor},
        result::MixResult,
    };
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    /// Keeps every step and the observed lifecycle.
    #[derive(Default)]
    struct RecordingMonitor {
        entered: Option<(usize, i64)>,
        steps: Vec<MixStep<i64>>,
        exited: bool,
    }

    impl MixMonitor<i64> for RecordingMonitor {
        fn name(&self) -> &str {
            "RecordingMonitor"
        }

        fn on_enter_mix(&mut self, items: usize, threshold: i64) {
            self.entered = Some((items, threshold));
        }

        fn on_mix(&mut self, step: &MixStep<i64>, _statistics: &MixStatistics<i64>) {
            self.steps.push(*step);
        }

        fn on_exit_mix(&mut self, _statistics: &MixStatistics<i64>) {
            self.exited = true;
        }
    }

    #[test]
    fn test_reference_example() {
        assert_eq!(mix_spiciness(&[1, 2, 3, 9, 10, 12], 7), 2);
    }

    #[test]
    fn test_already_reached_needs_no_mix() {
        assert_eq!(mix_spiciness(&[7, 8, 9], 7), 0);
        assert_eq!(mix_spiciness(&[5], 5), 0);
    }

    #[test]
    fn test_single_item_below_threshold_is_unreachable() {
        assert_eq!(mix_spiciness(&[1], 2), -1);
    }

    #[test]
    fn test_running_out_of_items_is_unreachable() {
        // 1 + 2 * 1 = 3, 1 + 2 * 3 = 7 < 100 with a single item left.
        assert_eq!(mix_spiciness(&[1, 1, 1], 100), -1);
    }

    #[test]
    fn test_empty_input_uses_zero_minimum() {
        assert_eq!(mix_spiciness(&[], 0), 0);
        assert_eq!(mix_spiciness(&[], -3), 0);
        assert_eq!(mix_spiciness(&[], 1), -1);
    }

    #[test]
    fn test_zero_threshold_never_mixes() {
        assert_eq!(mix_spiciness(&[0, 0, 0], 0), 0);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let values = vec![12, 10, 9, 3, 2, 1];
        let copy = values.clone();
        assert_eq!(mix_spiciness(&values, 7), 2);
        assert_eq!(values, copy);
    }

    #[test]
    fn test_outcome_reports_statistics() {
        let mut mixer = SpicinessMixer::preallocated(6);
        let mut monitor = RecordingMonitor::default();
        let outcome = mixer.mix(&[1, 2, 3, 9, 10, 12], 7, &mut monitor);

        assert_eq!(outcome.result(), MixResult::Reached { operations: 2 });
        assert_eq!(outcome.minimum(), Some(&9));

        let stats = outcome.statistics();
        assert_eq!(stats.operations, 2);
        assert_eq!(stats.initial_items, 6);
        assert_eq!(stats.remaining_items, 4);
        assert_eq!(stats.largest_mixed, Some(13));
        assert_eq!(stats.saturated_mixes, 0);

        assert_eq!(monitor.entered, Some((6, 7)));
        assert!(monitor.exited);
        assert_eq!(
            monitor.steps,
            vec![
                MixStep {
                    smallest: 1,
                    second: 2,
                    mixed: 5,
                    saturated: false
                },
                MixStep {
                    smallest: 3,
                    second: 5,
                    mixed: 13,
                    saturated: false
                },
            ]
        );
        assert_eq!(mixer.heap().len(), 4);
    }

    #[test]
    fn test_overflow_saturates() {
        let mut mixer = SpicinessMixer::<u8>::new();
        let outcome = mixer.mix(&[100, 100], 255, NoOperationMonitor::new());
        assert_eq!(outcome.result(), MixResult::Reached { operations: 1 });
        assert_eq!(outcome.minimum(), Some(&u8::MAX));
        assert_eq!(outcome.statistics().saturated_mixes, 1);
    }

    #[test]
    fn test_operation_limit_aborts() {
        let mut mixer = SpicinessMixer::new();
        let outcome = mixer.mix(&[1i64, 1, 1, 1, 1, 1], 1_000, OperationLimitMonitor::new(2));
        assert_eq!(outcome.result(), MixResult::Aborted { operations: 2 });
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::Aborted("operation limit reached".to_string())
        );
        assert_eq!(outcome.operations_or_sentinel(), -1);
        assert_eq!(outcome.statistics().remaining_items, 4);
    }

    #[test]
    fn test_time_limit_aborts_before_first_mix() {
        let mut mixer = SpicinessMixer::new();
        let outcome = mixer.mix(
            &[1i64, 2, 3],
            1_000,
            TimeLimitMonitor::new(std::time::Duration::ZERO),
        );
        assert_eq!(outcome.result(), MixResult::Aborted { operations: 0 });
    }

    #[test]
    fn test_mixer_is_reusable() {
        let mut mixer = SpicinessMixer::new();
        let first = mixer.mix(&[1i64, 2, 3, 9, 10, 12], 7, NoOperationMonitor::new());
        let second = mixer.mix(&[1i64], 2, NoOperationMonitor::new());
        assert_eq!(first.operations_or_sentinel(), 2);
        assert_eq!(second.operations_or_sentinel(), -1);
        assert_eq!(mixer.heap().as_slice(), &[1]);
    }

    #[test]
    fn test_random_runs_keep_invariants() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
        let mut mixer = SpicinessMixer::preallocated(64);

        for _ in 0..200 {
            let len = rng.random_range(0..64);
            let values: Vec<i64> = (0..len).map(|_| rng.random_range(0..1_000)).collect();
            let threshold = rng.random_range(0..5_000);

            let mut monitor = RecordingMonitor::default();
            let outcome = mixer.mix(&values, threshold, &mut monitor);
            let operations = outcome.result().operations();

            // Each mix removes one item net, so at most n - 1 mixes happen.
            assert!(operations as usize <= values.len().saturating_sub(1));
            assert_eq!(monitor.steps.len() as u64, operations);
            assert_eq!(
                outcome.statistics().remaining_items,
                values.len() - operations as usize
            );

            for step in &monitor.steps {
                assert!(step.smallest <= step.second);
                assert_eq!(step.mixed, step.smallest + 2 * step.second);
                assert!(step.smallest < threshold);
            }

            match outcome.result() {
                MixResult::Reached { .. } => {
                    assert!(mixer.heap().iter().all(|&v| v >= threshold));
                }
                MixResult::Unreachable { .. } => {
                    assert!(mixer.heap().len() < 2);
                    assert!(mixer.heap().iter().any(|&v| v < threshold) || mixer.heap().is_empty());
                }
                MixResult::Aborted { .. } => panic!("no monitor aborts this run"),
            }
        }
    }

    #[test]
    fn test_minimum_never_decreases() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..50 {
            let values: Vec<i64> = (0..32).map(|_| rng.random_range(0..100)).collect();
            let mut heap: MinHeap<i64> = values.iter().copied().collect();
            let mut previous = heap.peek().copied().unwrap_or(0);
            while heap.len() >= 2 {
                let (Some(a), Some(b)) = (heap.extract_min(), heap.extract_min()) else {
                    unreachable!();
                };
                heap.insert(a + 2 * b);
                let current = heap.peek().copied().unwrap_or(0);
                assert!(current >= previous);
                previous = current;
            }
        }
    }
}
