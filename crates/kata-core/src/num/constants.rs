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

/// A trait for integer types that have a constant representing 0.
pub trait Zero {
    /// The constant representing 0 for the implementing type.
    const ZERO: Self;
}

/// A trait for integer types that have a constant representing 1.
pub trait One {
    /// The constant representing 1 for the implementing type.
    const ONE: Self;
}

/// A trait for integer types that have a constant representing 2.
///
/// Mixing doubles the second-smallest value; this keeps the factor
/// a compile-time constant in generic code.
pub trait Two {
    /// The constant representing 2 for the implementing type.
    const TWO: Self;
}

macro_rules! impl_small_constants {
    ($($t:ty),* $(,)?) => {
        $(
            impl Zero for $t {
                const ZERO: Self = 0;
            }

            impl One for $t {
                const ONE: Self = 1;
            }

            impl Two for $t {
                const TWO: Self = 2;
            }
        )*
    };
}

impl_small_constants!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_of_constants<T>() -> T
    where
        T: Zero + One + Two + std::ops::Add<Output = T>,
    {
        T::ZERO + T::ONE + T::TWO
    }

    #[test]
    fn test_constants_have_expected_values() {
        assert_eq!(<u8 as Zero>::ZERO, 0);
        assert_eq!(<i64 as One>::ONE, 1);
        assert_eq!(<usize as Two>::TWO, 2);
        assert_eq!(sum_of_constants::<i32>(), 3);
        assert_eq!(sum_of_constants::<u128>(), 3);
    }
}
