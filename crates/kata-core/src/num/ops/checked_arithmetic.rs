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

use core::ops::{Add, Div, Mul};

/// Checked addition by value.
///
/// # Examples
///
/// ```rust
/// # use kata_core::num::ops::checked_arithmetic::CheckedAddVal;
/// assert_eq!(200u8.checked_add_val(100), None);
/// assert_eq!(200u8.checked_add_val(50), Some(250));
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Performs checked addition by value, returning `None` if overflow occurs.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

/// Checked multiplication by value.
///
/// # Examples
///
/// ```rust
/// # use kata_core::num::ops::checked_arithmetic::CheckedMulVal;
/// assert_eq!(20u8.checked_mul_val(10), Some(200));
/// assert_eq!(20u8.checked_mul_val(20), None);
/// ```
pub trait CheckedMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs checked multiplication by value, returning `None` if overflow occurs.
    fn checked_mul_val(self, v: Self) -> Option<Self>;
}

/// Checked division by value.
///
/// # Examples
///
/// ```rust
/// # use kata_core::num::ops::checked_arithmetic::CheckedDivVal;
/// assert_eq!(100u64.checked_div_val(0), None);
/// assert_eq!(100u64.checked_div_val(4), Some(25));
/// ```
pub trait CheckedDivVal: Sized + Div<Self, Output = Self> {
    /// Performs checked division by value, returning `None` on division by zero
    /// (or `MIN / -1` for signed types).
    fn checked_div_val(self, v: Self) -> Option<Self>;
}

macro_rules! checked_impl_val {
    ($trait_name:ident, $method:ident, $src_method:ident, [$($t:ty),*]) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: $t) -> Option<$t> {
                    <$t>::$src_method(self, v)
                }
            }
        )*
    };
}

checked_impl_val!(
    CheckedAddVal,
    checked_add_val,
    checked_add,
    [u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize]
);
checked_impl_val!(
    CheckedMulVal,
    checked_mul_val,
    checked_mul,
    [u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize]
);
checked_impl_val!(
    CheckedDivVal,
    checked_div_val,
    checked_div,
    [u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize]
);
