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

//! The set of currently occupied seat positions.
//!
//! An [`Occupancy`] owns an ascending-sorted list of 1-indexed positions.
//! Construction accepts any permutation and sorts it, which makes the packer
//! insensitive to input order. Well-formedness against a concrete row
//! (positions in range, distinct, properly distanced) is a caller
//! precondition for the packer; [`Occupancy::validate`] makes that
//! precondition checkable at the boundary for callers that do not control
//! their inputs.

use crate::row::Row;
use num_traits::PrimInt;

/// The error type for occupancy validation against a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccupancyError<T> {
    /// A position lies outside the row bounds `[1, seats]`.
    OutOfBounds {
        /// The offending position.
        position: T,
    },
    /// The same seat appears more than once.
    Duplicate {
        /// The duplicated position.
        position: T,
    },
    /// Two occupied seats are closer than the distancing buffer allows.
    TooClose {
        /// The lower of the two positions.
        first: T,
        /// The higher of the two positions.
        second: T,
    },
}

impl<T> std::fmt::Display for OccupancyError<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds { position } => {
                write!(f, "Seat {} lies outside the row", position)
            }
            Self::Duplicate { position } => {
                write!(f, "Seat {} is occupied more than once", position)
            }
            Self::TooClose { first, second } => {
                write!(
                    f,
                    "Seats {} and {} violate the distancing buffer",
                    first, second
                )
            }
        }
    }
}

impl<T> std::error::Error for OccupancyError<T> where T: std::fmt::Debug + std::fmt::Display {}

/// An ascending-sorted collection of occupied seat positions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Occupancy<T>
where
    T: PrimInt,
{
    positions: Vec<T>,
}

impl<T> Occupancy<T>
where
    T: PrimInt,
{
    /// Creates an occupancy from positions in any order.
    ///
    /// The input is sorted ascending; the packer's result is therefore
    /// independent of the order in which positions were supplied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use galley_seating::occupancy::Occupancy;
    ///
    /// let occupancy = Occupancy::from_positions(vec![11, 6, 14]);
    /// assert_eq!(occupancy.positions(), &[6, 11, 14]);
    /// ```
    #[inline]
    pub fn from_positions(mut positions: Vec<T>) -> Self {
        positions.sort_unstable();
        Self { positions }
    }

    /// Creates an occupancy with no occupied seats.
    #[inline]
    pub fn empty() -> Self {
        Self {
            positions: Vec::new(),
        }
    }

    /// Returns the positions in ascending order.
    #[inline]
    pub fn positions(&self) -> &[T] {
        &self.positions
    }

    /// Returns the number of occupied seats.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if no seat is occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Checks this occupancy for well-formedness against `row`.
    ///
    /// Verifies that every position lies in `[1, seats]`, that no seat is
    /// occupied twice, and that consecutive occupants keep more than
    /// `buffer` seats between them. The packer itself trusts these
    /// preconditions; call this at the boundary when the input is not under
    /// your control.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use galley_seating::occupancy::{Occupancy, OccupancyError};
    /// # use galley_seating::row::Row;
    ///
    /// let row = Row::new(10, 1).unwrap();
    /// assert!(Occupancy::from_positions(vec![2, 6]).validate(&row).is_ok());
    ///
    /// let crowded = Occupancy::from_positions(vec![2, 3]);
    /// assert_eq!(
    ///     crowded.validate(&row),
    ///     Err(OccupancyError::TooClose { first: 2, second: 3 })
    /// );
    /// ```
    pub fn validate(&self, row: &Row<T>) -> Result<(), OccupancyError<T>> {
        let bounds = row.full_span();
        for &position in &self.positions {
            if !bounds.contains_point(position) {
                return Err(OccupancyError::OutOfBounds { position });
            }
        }
        for pair in self.positions.windows(2) {
            let (first, second) = (pair[0], pair[1]);
            if second == first {
                return Err(OccupancyError::Duplicate { position: first });
            }
            if second - first <= row.buffer() {
                return Err(OccupancyError::TooClose { first, second });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_positions_sorts() {
        let occupancy = Occupancy::from_positions(vec![14i64, 6, 11]);
        assert_eq!(occupancy.positions(), &[6, 11, 14]);
        assert_eq!(occupancy.len(), 3);
        assert!(!occupancy.is_empty());
    }

    #[test]
    fn test_empty() {
        let occupancy: Occupancy<i64> = Occupancy::empty();
        assert!(occupancy.is_empty());
        assert_eq!(occupancy.len(), 0);
    }

    #[test]
    fn test_validate_ok() {
        let row = Row::new(10i64, 1).unwrap();
        let occupancy = Occupancy::from_positions(vec![2, 6]);
        assert!(occupancy.validate(&row).is_ok());
    }

    #[test]
    fn test_validate_empty_always_ok() {
        let row = Row::new(1i64, 100).unwrap();
        assert!(Occupancy::empty().validate(&row).is_ok());
    }

    #[test]
    fn test_validate_out_of_bounds() {
        let row = Row::new(10i64, 1).unwrap();

        let high = Occupancy::from_positions(vec![2, 11]);
        assert_eq!(
            high.validate(&row),
            Err(OccupancyError::OutOfBounds { position: 11 })
        );

        let low = Occupancy::from_positions(vec![0, 5]);
        assert_eq!(
            low.validate(&row),
            Err(OccupancyError::OutOfBounds { position: 0 })
        );
    }

    #[test]
    fn test_validate_duplicate() {
        // Duplicates are rejected even with no buffer at all.
        let row = Row::new(10i64, 0).unwrap();
        let occupancy = Occupancy::from_positions(vec![4, 4]);
        assert_eq!(
            occupancy.validate(&row),
            Err(OccupancyError::Duplicate { position: 4 })
        );
    }

    #[test]
    fn test_validate_too_close() {
        let row = Row::new(10i64, 2).unwrap();
        // Distance of exactly buffer seats is still a violation: the rule
        // requires more than `buffer` seats between occupants.
        let occupancy = Occupancy::from_positions(vec![3, 5]);
        assert_eq!(
            occupancy.validate(&row),
            Err(OccupancyError::TooClose { first: 3, second: 5 })
        );
    }

    #[test]
    fn test_validate_adjacent_ok_without_buffer() {
        let row = Row::new(10i64, 0).unwrap();
        let occupancy = Occupancy::from_positions(vec![4, 5]);
        assert!(occupancy.validate(&row).is_ok());
    }

    #[test]
    fn test_error_display() {
        let err: OccupancyError<i64> = OccupancyError::TooClose { first: 3, second: 5 };
        assert_eq!(
            format!("{}", err),
            "Seats 3 and 5 violate the distancing buffer"
        );
    }
}
