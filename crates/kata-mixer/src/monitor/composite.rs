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

//! Monitoring combinators for the mixer
//!
//! Provides `CompositeMixMonitor`, a fan‑out monitor that forwards every
//! event to its children, so logging and limits can be combined freely.
//!
//! Behavior
//! - Events are dispatched to child monitors in insertion order.
//! - `mix_command` short‑circuits on the first non‑`Continue` response;
//!   put stricter stop conditions first.
//! - Other callbacks always fan out to all children.

use crate::{
    monitor::mix_monitor::{MixCommand, MixMonitor, MixStep},
    stats::MixStatistics,
};
use kata_core::num::KataNumeric;

/// A mix monitor that aggregates multiple monitors and forwards events to all of them.
pub struct CompositeMixMonitor<'a, T>
where
    T: KataNumeric,
{
    monitors: Vec<Box<dyn MixMonitor<T> + 'a>>,
}

impl<'a, T> Default for CompositeMixMonitor<'a, T>
where
    T: KataNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeMixMonitor<'a, T>
where
    T: KataNumeric,
{
    /// Creates a new empty `CompositeMixMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeMixMonitor` with room for `capacity` monitors.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a new monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: MixMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a boxed monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn MixMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns a slice of the monitors contained in the composite monitor.
    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn MixMonitor<T> + 'a>] {
        &self.monitors
    }

    /// Returns the number of child monitors.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if the composite monitor contains no monitors.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a, T> FromIterator<Box<dyn MixMonitor<T> + 'a>> for CompositeMixMonitor<'a, T>
where
    T: KataNumeric,
{
    #[inline(always)]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn MixMonitor<T> + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> MixMonitor<T> for CompositeMixMonitor<'a, T>
where
    T: KataNumeric,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "CompositeMixMonitor"
    }

    #[inline(always)]
    fn on_enter_mix(&mut self, items: usize, threshold: T) {
        for monitor in &mut self.monitors {
            monitor.on_enter_mix(items, threshold);
        }
    }

    #[inline(always)]
    fn mix_command(&mut self, statistics: &MixStatistics<T>) -> MixCommand {
        for monitor in &mut self.monitors {
            let cmd = monitor.mix_command(statistics);
            if !matches!(cmd, MixCommand::Continue) {
                return cmd;
            }
        }
        MixCommand::Continue
    }

    #[inline(always)]
    fn on_mix(&mut self, step: &MixStep<T>, statistics: &MixStatistics<T>) {
        for monitor in &mut self.monitors {
            monitor.on_mix(step, statistics);
        }
    }

    #[inline(always)]
    fn on_exit_mix(&mut self, statistics: &MixStatistics<T>) {
        for monitor in &mut self.monitors {
            monitor.on_exit_mix(statistics);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every callback into a shared log and optionally stops.
    struct Recorder {
        label: &'static str,
        log: Rc<RefCell<Vec<String>>>,
        stop: bool,
    }

    impl MixMonitor<i64> for Recorder {
        fn name(&self) -> &str {
            self.label
        }

        fn on_enter_mix(&mut self, items: usize, threshold: i64) {
            self.log
                .borrow_mut()
                .push(format!("{}:enter:{}:{}", self.label, items, threshold));
        }

        fn mix_command(&mut self, _statistics: &MixStatistics<i64>) -> MixCommand {
            self.log.borrow_mut().push(format!("{}:command", self.label));
            if self.stop {
                MixCommand::Terminate(format!("{} says stop", self.label))
            } else {
                MixCommand::Continue
            }
        }

        fn on_mix(&mut self, step: &MixStep<i64>, _statistics: &MixStatistics<i64>) {
            self.log
                .borrow_mut()
                .push(format!("{}:mix:{}", self.label, step.mixed));
        }

        fn on_exit_mix(&mut self, _statistics: &MixStatistics<i64>) {
            self.log.borrow_mut().push(format!("{}:exit", self.label));
        }
    }

    fn recorder(label: &'static str, log: &Rc<RefCell<Vec<String>>>, stop: bool) -> Recorder {
        Recorder {
            label,
            log: Rc::clone(log),
            stop,
        }
    }

    #[test]
    fn test_events_fan_out_in_insertion_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut composite = CompositeMixMonitor::<i64>::with_capacity(2);
        composite.add_monitor(recorder("a", &log, false));
        composite.add_monitor_boxed(Box::new(recorder("b", &log, false)));
        assert_eq!(composite.len(), 2);
        assert!(!composite.is_empty());

        let stats = MixStatistics::new(2);
        composite.on_enter_mix(2, 7);
        composite.on_mix(
            &MixStep {
                smallest: 1,
                second: 2,
                mixed: 5,
                saturated: false,
            },
            &stats,
        );
        composite.on_exit_mix(&stats);

        assert_eq!(
            *log.borrow(),
            vec![
                "a:enter:2:7",
                "b:enter:2:7",
                "a:mix:5",
                "b:mix:5",
                "a:exit",
                "b:exit"
            ]
        );
    }

    #[test]
    fn test_command_short_circuits_on_first_stop() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let monitors: Vec<Box<dyn MixMonitor<i64>>> = vec![
            Box::new(recorder("a", &log, false)),
            Box::new(recorder("b", &log, true)),
            Box::new(recorder("c", &log, true)),
        ];
        let mut composite: CompositeMixMonitor<'_, i64> = monitors.into_iter().collect();

        let cmd = composite.mix_command(&MixStatistics::new(0));
        assert_eq!(cmd, MixCommand::Terminate("b says stop".to_string()));
        assert_eq!(*log.borrow(), vec!["a:command", "b:command"]);
    }

    #[test]
    fn test_empty_composite_continues() {
        let mut composite = CompositeMixMonitor::<i64>::default();
        assert!(composite.is_empty());
        assert_eq!(
            composite.mix_command(&MixStatistics::new(0)),
            MixCommand::Continue
        );
        assert_eq!(composite.name(), "CompositeMixMonitor");
    }
}
