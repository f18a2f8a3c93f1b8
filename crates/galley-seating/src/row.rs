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

//! The immutable row description.
//!
//! A [`Row`] pairs the number of seats with the distancing buffer and is
//! fixed for the duration of one computation. Seat positions are 1-indexed.

use galley_core::math::span::SeatSpan;
use num_traits::PrimInt;

/// The error type for row construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowError {
    /// The row must contain at least one seat.
    InvalidSeatCount,
    /// The distancing buffer must be non-negative.
    NegativeBuffer,
}

impl std::fmt::Display for RowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSeatCount => {
                write!(f, "Row must contain at least one seat")
            }
            Self::NegativeBuffer => {
                write!(f, "Distancing buffer must be non-negative")
            }
        }
    }
}

impl std::error::Error for RowError {}

/// A row of `seats` linear seats with a required `buffer` of empty seats on
/// both sides of every occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Row<T>
where
    T: PrimInt,
{
    seats: T,
    buffer: T,
}

impl<T> Row<T>
where
    T: PrimInt,
{
    /// Creates a new `Row`, rejecting invalid dimensions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use galley_seating::row::{Row, RowError};
    ///
    /// assert!(Row::new(10, 1).is_ok());
    /// assert_eq!(Row::new(0, 1), Err(RowError::InvalidSeatCount));
    /// assert_eq!(Row::new(10, -1), Err(RowError::NegativeBuffer));
    /// ```
    #[inline]
    pub fn new(seats: T, buffer: T) -> Result<Self, RowError> {
        if seats < T::one() {
            return Err(RowError::InvalidSeatCount);
        }
        if buffer < T::zero() {
            return Err(RowError::NegativeBuffer);
        }
        Ok(Self { seats, buffer })
    }

    /// Creates a new `Row` without checking invariants in release builds.
    ///
    /// # Safety
    ///
    /// The caller must ensure `seats >= 1` and `buffer >= 0`. This function
    /// contains a `debug_assert!` to catch errors during development.
    #[inline]
    pub fn new_unchecked(seats: T, buffer: T) -> Self {
        debug_assert!(
            seats >= T::one() && buffer >= T::zero(),
            "Invalid row: seats must be >= 1 and buffer >= 0"
        );
        Self { seats, buffer }
    }

    /// Returns the total number of seats in the row.
    #[inline]
    pub const fn seats(&self) -> T {
        self.seats
    }

    /// Returns the required number of empty seats on each side of an
    /// occupant.
    #[inline]
    pub const fn buffer(&self) -> T {
        self.buffer
    }

    /// Returns the span covering the whole row, `[1, seats]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use galley_seating::row::Row;
    ///
    /// let row = Row::new(10, 1).unwrap();
    /// assert_eq!(row.full_span().len(), 10);
    /// ```
    #[inline]
    pub fn full_span(&self) -> SeatSpan<T> {
        SeatSpan::new_unchecked(T::one(), self.seats)
    }

    /// Returns the capacity of the empty row: `floor((N + K) / (K + 1))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use galley_seating::row::Row;
    ///
    /// // No buffer: the whole row fills.
    /// assert_eq!(Row::new(5, 0).unwrap().capacity(), 5);
    ///
    /// // A single seat holds one occupant regardless of the buffer.
    /// assert_eq!(Row::new(1, 5).unwrap().capacity(), 1);
    /// ```
    #[inline]
    pub fn capacity(&self) -> T {
        self.full_span().capacity(self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let row = Row::new(10i64, 2).unwrap();
        assert_eq!(row.seats(), 10);
        assert_eq!(row.buffer(), 2);
    }

    #[test]
    fn test_new_rejects_empty_row() {
        assert_eq!(Row::new(0i64, 0), Err(RowError::InvalidSeatCount));
        assert_eq!(Row::new(-3i64, 0), Err(RowError::InvalidSeatCount));
    }

    #[test]
    fn test_new_rejects_negative_buffer() {
        assert_eq!(Row::new(10i64, -1), Err(RowError::NegativeBuffer));
    }

    #[test]
    fn test_new_unsigned() {
        // Unsigned types cannot express a negative buffer.
        assert!(Row::new(10u32, 0).is_ok());
        assert_eq!(Row::new(0u32, 3), Err(RowError::InvalidSeatCount));
    }

    #[test]
    fn test_full_span() {
        let row = Row::new(7i64, 1).unwrap();
        assert_eq!(row.full_span().start(), 1);
        assert_eq!(row.full_span().end(), 7);
    }

    #[test]
    fn test_capacity() {
        assert_eq!(Row::new(10i64, 1).unwrap().capacity(), 5);
        assert_eq!(Row::new(5i64, 0).unwrap().capacity(), 5);
        assert_eq!(Row::new(1i64, 5).unwrap().capacity(), 1);
        // N = 7, K = 2: (7 + 2) / 3 = 3.
        assert_eq!(Row::new(7i64, 2).unwrap().capacity(), 3);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", RowError::InvalidSeatCount),
            "Row must contain at least one seat"
        );
        assert_eq!(
            format!("{}", RowError::NegativeBuffer),
            "Distancing buffer must be non-negative"
        );
    }
}
