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

//! # Kata Core
//!
//! Numeric foundations shared by the exercise crates of the workspace.
//!
//! ## Modules
//!
//! - `num`: associated-constant traits (`Zero`, `One`, `Two`), by-value
//!   checked and saturating arithmetic traits, and the `KataNumeric` bound
//!   that collects them for generic engines such as the spiciness mixer.
//!
//! Exercises operate on small integer inputs, but a mixing chain doubles
//! values on every step and an lcm grows multiplicatively. These traits
//! let generic code choose between clamping (`Saturating*Val`) and
//! reporting (`Checked*Val`) without per-type calls.

pub mod num;
