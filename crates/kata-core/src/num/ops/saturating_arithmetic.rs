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

use core::ops::{Add, Mul};

macro_rules! saturating_impl_binary_val {
    ($trait_name:ident, $method:ident, $src_method:ident, [$($t:ty),*]) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: Self) -> Self {
                    <$t>::$src_method(self, v)
                }
            }
        )*
    };
}

/// Saturating addition by value.
///
/// Clamps the result to the bounds of the type instead of overflowing.
///
/// # Examples
///
/// ```rust
/// # use kata_core::num::ops::saturating_arithmetic::SaturatingAddVal;
/// assert_eq!(250u8.saturating_add_val(10), 255);
/// assert_eq!((-120i8).saturating_add_val(-20), -128);
/// ```
pub trait SaturatingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs saturating addition by value.
    fn saturating_add_val(self, v: Self) -> Self;
}

/// Saturating multiplication by value.
///
/// # Examples
///
/// ```rust
/// # use kata_core::num::ops::saturating_arithmetic::SaturatingMulVal;
/// assert_eq!(200u8.saturating_mul_val(2), 255);
/// assert_eq!((-100i8).saturating_mul_val(2), -128);
/// ```
pub trait SaturatingMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs saturating multiplication by value.
    fn saturating_mul_val(self, v: Self) -> Self;
}

saturating_impl_binary_val!(
    SaturatingAddVal,
    saturating_add_val,
    saturating_add,
    [u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize]
);
saturating_impl_binary_val!(
    SaturatingMulVal,
    saturating_mul_val,
    saturating_mul,
    [u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize]
);

#[cfg(test)]
mod tests {
    use super::*;

    fn saturating_add_val<T: SaturatingAddVal>(a: T, b: T) -> T {
        a.saturating_add_val(b)
    }

    fn saturating_mul_val<T: SaturatingMulVal>(a: T, b: T) -> T {
        a.saturating_mul_val(b)
    }

    #[test]
    fn test_saturating_add_val() {
        assert_eq!(saturating_add_val(255u8, 1u8), 255u8);
        assert_eq!(saturating_add_val(i64::MAX, 1), i64::MAX);
        assert_eq!(saturating_add_val(-128i8, -1i8), -128i8);
        assert_eq!(saturating_add_val(3u16, 4u16), 7u16);
    }

    #[test]
    fn test_saturating_mul_val() {
        assert_eq!(saturating_mul_val(255u8, 2u8), 255u8);
        assert_eq!(saturating_mul_val(i64::MAX / 2 + 1, 2), i64::MAX);
        assert_eq!(saturating_mul_val(-128i8, 2i8), -128i8);
        assert_eq!(saturating_mul_val(6usize, 7usize), 42usize);
    }
}
