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

//! Wall‑clock budget for a mixing run.
//!
//! The clock is only read when `(steps & clock_check_mask) == 0`, where a
//! step is one call to `mix_command`. The default mask `0x3FFF` reads it
//! roughly every 16,384 mixes.

use crate::{
    monitor::mix_monitor::{MixCommand, MixMonitor, MixStep},
    stats::MixStatistics,
};
use kata_core::num::KataNumeric;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLimitMonitor<T> {
    clock_check_mask: u64,
    steps: u64,
    time_limit: Duration,
    start_time: Instant,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> TimeLimitMonitor<T> {
    /// 16384 - 1 = 0x3FFF
    const DEFAULT_CLOCK_CHECK_MASK: u64 = 0x3FFF;

    #[inline]
    pub fn new(time_limit: Duration) -> Self {
        Self::with_clock_check_mask(time_limit, Self::DEFAULT_CLOCK_CHECK_MASK)
    }

    #[inline]
    pub fn with_clock_check_mask(time_limit: Duration, clock_check_mask: u64) -> Self {
        Self {
            clock_check_mask,
            steps: 0,
            time_limit,
            start_time: Instant::now(),
            _phantom: std::marker::PhantomData,
        }
    }

    #[inline]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }
}

impl<T> std::fmt::Display for TimeLimitMonitor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TimeLimitMonitor(time_limit: {:?}, clock_check_mask: {:#x})",
            self.time_limit, self.clock_check_mask
        )
    }
}

impl<T> MixMonitor<T> for TimeLimitMonitor<T>
where
    T: KataNumeric,
{
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }

    fn on_enter_mix(&mut self, _items: usize, _threshold: T) {
        self.start_time = Instant::now();
        self.steps = 0;
    }

    #[inline]
    fn mix_command(&mut self, _statistics: &MixStatistics<T>) -> MixCommand {
        let check = (self.steps & self.clock_check_mask) == 0;
        self.steps = self.steps.wrapping_add(1);
        if check && self.start_time.elapsed() >= self.time_limit {
            return MixCommand::Terminate("time limit reached".to_string());
        }
        MixCommand::Continue
    }

    fn on_mix(&mut self, _step: &MixStep<T>, _statistics: &MixStatistics<T>) {}

    fn on_exit_mix(&mut self, _statistics: &MixStatistics<T>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_budget_terminates_on_first_check() {
        let mut monitor = TimeLimitMonitor::<i64>::new(Duration::ZERO);
        monitor.on_enter_mix(3, 10);
        assert_eq!(
            monitor.mix_command(&MixStatistics::new(3)),
            MixCommand::Terminate("time limit reached".to_string())
        );
    }

    #[test]
    fn test_clock_only_checked_on_mask_boundary() {
        let mut monitor = TimeLimitMonitor::<i64>::with_clock_check_mask(Duration::ZERO, 0b11);
        monitor.on_enter_mix(8, 10);
        let stats = MixStatistics::new(8);
        assert!(matches!(monitor.mix_command(&stats), MixCommand::Terminate(_)));
        assert_eq!(monitor.mix_command(&stats), MixCommand::Continue);
        assert_eq!(monitor.mix_command(&stats), MixCommand::Continue);
        assert_eq!(monitor.mix_command(&stats), MixCommand::Continue);
        assert!(matches!(monitor.mix_command(&stats), MixCommand::Terminate(_)));
    }

    #[test]
    fn test_generous_budget_continues() {
        let mut monitor = TimeLimitMonitor::<i64>::with_clock_check_mask(Duration::from_secs(3600), 0);
        monitor.on_enter_mix(2, 1);
        assert_eq!(
            monitor.mix_command(&MixStatistics::new(2)),
            MixCommand::Continue
        );
    }
}
