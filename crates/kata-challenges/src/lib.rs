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

//! Kata‑Challenges: small algorithmic exercises
//!
//! Free functions grouped by the technique they practice. Inputs are
//! borrowed and never mutated; anything that needs scratch space copies
//! into owned storage first.
//!
//! Module map
//! - `stock`: price spans with a monotonic stack (`PriceSpanStack`).
//! - `brackets`: parenthesis matching on a `Stack`.
//! - `queue`: bridge, deployment and printer simulations.
//! - `greedy`: coins, lifeboats, tangerines, largest number.
//! - `dp`: triangle path, stair climbing, Fibonacci.
//! - `search`: depth‑first search with explicit frames and `FixedBitSet`.
//! - `hashing`: prefix checks, outfits, best album (`FxHashMap`).
//! - `numbers`: bit tricks, gcd/lcm, carpets, binary transform.
//! - `strings`: Jaden case, word chain.
//! - `error`: `ChallengeError` for structurally invalid inputs.
//!
//! Answers that may legitimately not exist come back as `Option`;
//! malformed inputs come back as `Err(ChallengeError)`.

pub mod brackets;
pub mod dp;
pub mod error;
pub mod greedy;
pub mod hashing;
pub mod numbers;
pub mod queue;
pub mod search;
pub mod stock;
pub mod strings;

pub use error::ChallengeError;
pub use stock::{PriceSpanStack, compute_price_spans};
