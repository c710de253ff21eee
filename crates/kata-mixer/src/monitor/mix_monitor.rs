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
use kata_core::num::KataNumeric;

/// Command returned by a monitor to control the mixing loop.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum MixCommand {
    #[default]
    Continue,
    Terminate(String),
}

impl std::fmt::Display for MixCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MixCommand::Continue => write!(f, "Continue"),
            MixCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

/// One mixing operation: the two extracted items and the value put back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixStep<T> {
    /// The smallest item in the heap before the mix.
    pub smallest: T,
    /// The second smallest item in the heap before the mix.
    pub second: T,
    /// The reinserted value, `smallest + 2 * second` clamped to the type.
    pub mixed: T,
    /// `true` if the exact value overflowed the type and `mixed` was clamped.
    pub saturated: bool,
}

impl<T> std::fmt::Display for MixStep<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MixStep({} + 2 * {} = {}{})",
            self.smallest,
            self.second,
            self.mixed,
            if self.saturated { ", saturated" } else { "" }
        )
    }
}

/// Trait for observing and controlling a mixing run.
pub trait MixMonitor<T>
where
    T: KataNumeric,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;

    /// Called once after the heap has been built, before the first mix.
    fn on_enter_mix(&mut self, items: usize, threshold: T);

    /// Called before every mix. Returning `Terminate` aborts the run.
    fn mix_command(&mut self, _statistics: &MixStatistics<T>) -> MixCommand {
        MixCommand::Continue
    }

    /// Called after every mix, with statistics already updated.
    fn on_mix(&mut self, step: &MixStep<T>, statistics: &MixStatistics<T>);

    /// Called once when the run is finished, whatever the outcome.
    fn on_exit_mix(&mut self, statistics: &MixStatistics<T>);
}

impl<T> std::fmt::Debug for dyn MixMonitor<T> + '_
where
    T: KataNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MixMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn MixMonitor<T> + '_
where
    T: KataNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MixMonitor({})", self.name())
    }
}

impl<T, M> MixMonitor<T> for &mut M
where
    T: KataNumeric,
    M: MixMonitor<T> + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn on_enter_mix(&mut self, items: usize, threshold: T) {
        (**self).on_enter_mix(items, threshold);
    }

    fn mix_command(&mut self, statistics: &MixStatistics<T>) -> MixCommand {
        (**self).mix_command(statistics)
    }

    fn on_mix(&mut self, step: &MixStep<T>, statistics: &MixStatistics<T>) {
        (**self).on_mix(step, statistics);
    }

    fn on_exit_mix(&mut self, statistics: &MixStatistics<T>) {
        (**self).on_exit_mix(statistics);
    }
}
