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

//! # Numeric Foundations
//!
//! Integer-centric traits for the exercise engines.
//!
//! ## Submodules
//!
//! - `constants`: `Zero`, `One` and `Two` as associated constants for every
//!   primitive integer.
//! - `ops`: by-value checked (`Option<T>`) and saturating (clamped)
//!   arithmetic.
//!
//! `KataNumeric` bundles everything a generic engine needs into one bound.

pub mod constants;
pub mod ops;

use constants::{One, Two, Zero};
use num_traits::PrimInt;
use ops::{
    checked_arithmetic::{CheckedAddVal, CheckedMulVal},
    saturating_arithmetic::{SaturatingAddVal, SaturatingMulVal},
};

/// A trait alias for the integer types accepted by generic engines.
///
/// Every primitive integer, signed or unsigned, satisfies this bound.
pub trait KataNumeric:
    PrimInt
    + std::fmt::Debug
    + std::fmt::Display
    + std::hash::Hash
    + Zero
    + One
    + Two
    + SaturatingAddVal
    + SaturatingMulVal
    + CheckedAddVal
    + CheckedMulVal
    + Send
    + Sync
{
}

impl<T> KataNumeric for T where
    T: PrimInt
        + std::fmt::Debug
        + std::fmt::Display
        + std::hash::Hash
        + Zero
        + One
        + Two
        + SaturatingAddVal
        + SaturatingMulVal
        + CheckedAddVal
        + CheckedMulVal
        + Send
        + Sync
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double_then_add<T: KataNumeric>(a: T, b: T) -> T {
        a.saturating_add_val(b.saturating_mul_val(T::TWO))
    }

    #[test]
    fn test_bound_is_usable_for_signed_and_unsigned() {
        assert_eq!(double_then_add(1i64, 2i64), 5);
        assert_eq!(double_then_add(1u32, 2u32), 5);
        assert_eq!(double_then_add(100u8, 100u8), u8::MAX);
        assert_eq!(double_then_add(i16::MAX - 1, 1), i16::MAX);
    }
}
