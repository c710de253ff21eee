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
    monitor::mix_monitor::{MixMonitor, MixStep},
    stats::MixStatistics,
};
use kata_core::num::KataNumeric;
use std::time::{Duration, Instant};

/// Prints a progress table to stdout while the mixer runs.
///
/// A line is emitted on a mix when the operation count matches
/// `clock_check_mask` and at least `log_interval` has passed since the
/// previous line, so the clock is read only once every `mask + 1` mixes.
#[derive(Debug, Clone)]
pub struct LogMonitor<T> {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    threshold: Option<T>,
}

impl<T> LogMonitor<T> {
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            threshold: None,
        }
    }

    #[inline(always)]
    fn print_header(&self) {
        println!(
            "{:<9} | {:<14} | {:<10} | {:<14} | {:<14} | {:<14}",
            "Elapsed", "Operations", "Items", "Smallest", "Second", "Mixed"
        );
        println!("{}", "-".repeat(88));
    }

    #[inline(always)]
    fn log_line(&mut self, step: &MixStep<T>, stats: &MixStatistics<T>)
    where
        T: std::fmt::Display,
    {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();
        let elapsed_field = format!("{:.1}s", elapsed);

        println!(
            "{:<9} | {:<14} | {:<10} | {:<14} | {:<14} | {:<14}",
            elapsed_field,
            stats.operations,
            stats.remaining_items,
            step.smallest,
            step.second,
            step.mixed
        );

        self.last_log_time = now;
    }
}

impl<T> Default for LogMonitor<T> {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl<T> std::fmt::Display for LogMonitor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(log_interval: {}s, clock_check_mask: {})",
            self.log_interval.as_secs(),
            self.clock_check_mask
        )
    }
}

impl<T> MixMonitor<T> for LogMonitor<T>
where
    T: KataNumeric,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_mix(&mut self, items: usize, threshold: T) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.threshold = Some(threshold);
        println!("Mixing {} items towards threshold {}", items, threshold);
        self.print_header();
    }

    fn on_mix(&mut self, step: &MixStep<T>, stats: &MixStatistics<T>) {
        if (stats.operations & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(step, stats);
        }
    }

    fn on_exit_mix(&mut self, stats: &MixStatistics<T>) {
        println!("{}", "-".repeat(88));
        match self.threshold {
            Some(threshold) => println!(
                "Mixing finished after {} operations (threshold {}).",
                stats.operations, threshold
            ),
            None => println!("Mixing finished after {} operations.", stats.operations),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_default() {
        let monitor = LogMonitor::<i64>::default();
        assert_eq!(
            format!("{}", monitor),
            "LogMonitor(log_interval: 1s, clock_check_mask: 4095)"
        );
        assert_eq!(MixMonitor::<i64>::name(&monitor), "LogMonitor");
    }

    #[test]
    fn test_lifecycle_does_not_panic() {
        let mut monitor = LogMonitor::<u32>::new(Duration::ZERO, 0);
        let mut stats = MixStatistics::new(2);
        monitor.on_enter_mix(2, 7);
        stats.on_mix(5, false);
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
        assert_eq!(monitor.threshold, Some(7));
    }
}
