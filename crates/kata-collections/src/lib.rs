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

//! # Kata Collections
//!
//! Array-backed containers used by the exercise engines.
//!
//! ## Modules
//!
//! - `heap`: `MinHeap<T>`, a binary min-heap stored as an implicit complete
//!   binary tree in a `Vec<T>`. O(1) `peek`, O(log n) `insert` and
//!   `extract_min`, O(n) construction from a `Vec` via bottom-up heapify.
//! - `stack`: `Stack<T>`, a LIFO wrapper over `Vec<T>` with `peek`, used
//!   by bracket matching and the monotonic price-span stack.
//!
//! Empty containers report `None` from `peek`, `pop` and `extract_min`
//! rather than a magic value, since zero is a valid payload.

pub mod heap;
pub mod stack;
