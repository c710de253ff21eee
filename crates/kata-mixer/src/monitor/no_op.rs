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
    monitor::mix_monitor::{MixCommand, MixMonitor, MixStep},
    stats::MixStatistics,
};
use kata_core::num::KataNumeric;

/// A no-operation monitor that ignores every event and never stops the run.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NoOperationMonitor<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> NoOperationMonitor<T> {
    /// Creates a new `NoOperationMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> MixMonitor<T> for NoOperationMonitor<T>
where
    T: KataNumeric,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "NoOperationMonitor"
    }

    #[inline(always)]
    fn on_enter_mix(&mut self, _items: usize, _threshold: T) {}

    #[inline(always)]
    fn mix_command(&mut self, _statistics: &MixStatistics<T>) -> MixCommand {
        MixCommand::Continue
    }

    #[inline(always)]
    fn on_mix(&mut self, _step: &MixStep<T>, _statistics: &MixStatistics<T>) {}

    #[inline(always)]
    fn on_exit_mix(&mut self, _statistics: &MixStatistics<T>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_op_always_continues() {
        let mut monitor = NoOperationMonitor::<i64>::new();
        let stats = MixStatistics::new(3);
        monitor.on_enter_mix(3, 10);
        assert_eq!(monitor.mix_command(&stats), MixCommand::Continue);
        monitor.on_mix(
            &MixStep {
                smallest: 1,
                second: 2,
                mixed: 5,
                saturated: false,
            },
            &stats,
        );
        monitor.on_exit_mix(&stats);
        assert_eq!(monitor.name(), "NoOperationMonitor");
    }
}
