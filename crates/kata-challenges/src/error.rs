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

use std::fmt::Display;

/// The error type for exercises whose inputs can be structurally invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChallengeError {
    /// Two parallel input slices have different lengths.
    LengthMismatch { expected: usize, found: usize },
    /// A work item has a speed of zero and would never finish.
    ZeroSpeed { index: usize },
    /// A truck can never fit on the bridge on its own.
    TruckTooHeavy(TruckTooHeavyError),
    /// A character that is not an ASCII decimal digit.
    InvalidDigit(InvalidDigitError),
    /// A game was requested with zero players.
    NoPlayers,
    /// An index does not point into the input.
    IndexOutOfBounds { index: usize, len: usize },
}

/// Details about a truck that exceeds the bridge weight limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruckTooHeavyError {
    /// Position of the truck in the waiting line.
    pub index: usize,
    pub weight: u64,
    pub max_weight: u64,
}

impl std::fmt::Display for TruckTooHeavyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Truck {} weighs {} but the bridge holds at most {}",
            self.index, self.weight, self.max_weight
        )
    }
}

impl std::error::Error for TruckTooHeavyError {}

/// Details about a rejected digit character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDigitError {
    /// The offending character.
    pub character: char,
    /// Its char position in the input.
    pub position: usize,
}

impl std::fmt::Display for InvalidDigitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Character '{}' at position {} is not a decimal digit",
            self.character, self.position
        )
    }
}

impl std::error::Error for InvalidDigitError {}

impl Display for ChallengeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch { expected, found } => write!(
                f,
                "Length mismatch: expected {} elements, found {}",
                expected, found
            ),
            Self::ZeroSpeed { index } => write!(f, "Speed at index {} is zero", index),
            Self::TruckTooHeavy(e) => write!(f, "Truck too heavy: {}", e),
            Self::InvalidDigit(e) => write!(f, "Invalid digit: {}", e),
            Self::NoPlayers => write!(f, "At least one player is required"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "Index {} is out of bounds for length {}", index, len)
            }
        }
    }
}

impl std::error::Error for ChallengeError {}

impl From<TruckTooHeavyError> for ChallengeError {
    fn from(e: TruckTooHeavyError) -> Self {
        Self::TruckTooHeavy(e)
    }
}

impl From<InvalidDigitError> for ChallengeError {
    fn from(e: InvalidDigitError) -> Self {
        Self::InvalidDigit(e)
    }
}

/// Returns `LengthMismatch` unless both lengths agree.
#[inline]
pub(crate) fn ensure_same_length(expected: usize, found: usize) -> Result<(), ChallengeError> {
    if expected == found {
        Ok(())
    } else {
        Err(ChallengeError::LengthMismatch { expected, found })
    }
}
