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

//! Kata‑Mixer: heap‑driven spiciness mixing
//!
//! Given the spiciness of a set of dishes and a target threshold `K`, the
//! mixer repeatedly combines the two mildest dishes into one with spiciness
//! `smallest + 2 * second_smallest` until every dish reaches `K`. The answer
//! is the number of mixes needed, or a failure signal when the dishes run
//! out first.
//!
//! Core flow
//! - Create a `mixer::SpicinessMixer<T>` (reusable, preallocated on demand).
//! - Pick a `monitor::mix_monitor::MixMonitor` (no‑op, log, limits, composite).
//! - Call `mix` and inspect the `result::MixOutcome<T>`.
//! - Or call `mixer::mix_spiciness` for the plain `-1`‑on‑failure answer.
//!
//! Guarantees
//! - Terminates after at most `n - 1` mixes: each mix removes one item net.
//! - Overflowing mixes saturate at the type's maximum and are counted in
//!   the statistics.
//! - Input slices are never mutated.
//!
//! Module map
//! - `mixer`: the engine and the sentinel API.
//! - `monitor`: mix monitors (log, composite, limits, no‑op).
//! - `result`: outcomes with termination reasons.
//! - `stats`: lightweight counters and timing.

pub mod mixer;
pub mod monitor;
pub mod result;
pub mod stats;

pub use mixer::{SpicinessMixer, mix_spiciness};
