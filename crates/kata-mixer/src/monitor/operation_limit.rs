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

/// A monitor that stops the mixer once a fixed number of mixes has been performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationLimitMonitor<T> {
    operation_limit: u64,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> OperationLimitMonitor<T> {
    #[inline(always)]
    pub fn new(operation_limit: u64) -> Self {
        Self {
            operation_limit,
            _phantom: std::marker::PhantomData,
        }
    }

    #[inline(always)]
    pub fn operation_limit(&self) -> u64 {
        self.operation_limit
    }
}

impl<T> std::fmt::Display for OperationLimitMonitor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OperationLimitMonitor(limit: {})", self.operation_limit)
    }
}

impl<T> MixMonitor<T> for OperationLimitMonitor<T>
where
    T: KataNumeric,
{
    fn name(&self) -> &str {
        "OperationLimitMonitor"
    }

    fn on_enter_mix(&mut self, _items: usize, _threshold: T) {}

    #[inline(always)]
    fn mix_command(&mut self, statistics: &MixStatistics<T>) -> MixCommand {
        if statistics.operations >= self.operation_limit {
            MixCommand::Terminate("operation limit reached".to_string())
        } else {
            MixCommand::Continue
        }
    }

    fn on_mix(&mut self, _step: &MixStep<T>, _statistics: &MixStatistics<T>) {}

    fn on_exit_mix(&mut self, _statistics: &MixStatistics<T>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminates_at_limit() {
        let mut monitor = OperationLimitMonitor::<i64>::new(2);
        let mut stats = MixStatistics::new(5);

        assert_eq!(monitor.mix_command(&stats), MixCommand::Continue);
        stats.on_mix(3, false);
        assert_eq!(monitor.mix_command(&stats), MixCommand::Continue);
        stats.on_mix(9, false);
        assert_eq!(
            monitor.mix_command(&stats),
            MixCommand::Terminate("operation limit reached".to_string())
        );
    }

    #[test]
    fn test_zero_limit_stops_immediately() {
        let mut monitor = OperationLimitMonitor::<u32>::new(0);
        assert!(matches!(
            monitor.mix_command(&MixStatistics::new(4)),
            MixCommand::Terminate(_)
        ));
        assert_eq!(format!("{}", monitor), "OperationLimitMonitor(limit: 0)");
    }
}
