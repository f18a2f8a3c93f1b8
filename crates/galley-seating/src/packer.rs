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

//! Free-segment derivation and the maximum-occupancy packer.
//!
//! Each existing occupant at position `p` blocks the zone `[p - K, p + K]`.
//! Walking the sorted occupancy with a cursor that tracks the first seat not
//! yet blocked partitions the row into the free segments before the first
//! occupant, between consecutive occupants, and after the last one. A free
//! segment of length `L` then admits exactly `floor((L + K) / (K + 1))`
//! additional occupants; summing over the segments gives the answer.
//!
//! Two entry points are provided. [`max_additional_diners`] trusts its
//! input: positions outside the row or violating the distancing rule yield
//! an unspecified (but never undefined) count. For callers that do not
//! control their inputs, [`checked_max_additional_diners`] validates the row
//! and the occupancy first and reports a descriptive [`SeatingError`].

use crate::{
    occupancy::{Occupancy, OccupancyError},
    row::{Row, RowError},
};
use galley_core::math::span::SeatSpan;
use num_traits::PrimInt;
use smallvec::SmallVec;

/// The error type for the validating packer entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatingError<T> {
    /// The row dimensions are invalid.
    Row(RowError),
    /// The occupancy is malformed with respect to the row.
    Occupancy(OccupancyError<T>),
}

impl<T> std::fmt::Display for SeatingError<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Row(e) => write!(f, "Invalid row: {}", e),
            Self::Occupancy(e) => write!(f, "Invalid occupancy: {}", e),
        }
    }
}

impl<T> std::error::Error for SeatingError<T>
where
    T: std::fmt::Debug + std::fmt::Display + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Row(e) => Some(e),
            Self::Occupancy(e) => Some(e),
        }
    }
}

impl<T> From<RowError> for SeatingError<T> {
    #[inline]
    fn from(e: RowError) -> Self {
        Self::Row(e)
    }
}

impl<T> From<OccupancyError<T>> for SeatingError<T> {
    #[inline]
    fn from(e: OccupancyError<T>) -> Self {
        Self::Occupancy(e)
    }
}

/// Derives the free segments of `row` left by `occupancy`.
///
/// The returned spans are ascending and pairwise disjoint: the segment
/// before the first occupant, the segments between consecutive occupants,
/// and the segment after the last occupant, with degenerate segments
/// dropped. An empty occupancy yields the whole row as a single span.
///
/// Assumes the occupancy is well formed with respect to `row` (see
/// [`Occupancy::validate`]). Arithmetic at the row edges is checked, so a
/// blocked zone running past the representable range simply truncates the
/// corresponding segment instead of wrapping.
///
/// # Examples
///
/// ```rust
/// # use galley_seating::occupancy::Occupancy;
/// # use galley_seating::packer::free_spans;
/// # use galley_seating::row::Row;
/// # use galley_core::math::span::SeatSpan;
///
/// let row = Row::new(10, 1).unwrap();
/// let occupancy = Occupancy::from_positions(vec![2, 6]);
///
/// let spans = free_spans(&row, &occupancy);
/// assert_eq!(spans.as_slice(), &[SeatSpan::new(4, 4), SeatSpan::new(8, 10)]);
/// ```
pub fn free_spans<T>(row: &Row<T>, occupancy: &Occupancy<T>) -> SmallVec<[SeatSpan<T>; 8]>
where
    T: PrimInt,
{
    let one = T::one();
    // Seats consumed to the left of an occupant, including the seat itself.
    let exclusion = row.buffer().saturating_add(one);

    let mut spans = SmallVec::new();
    // First seat not blocked by any zone processed so far. `None` means the
    // last blocked zone reached past the representable range.
    let mut cursor = Some(one);

    for &position in occupancy.positions() {
        if let (Some(start), Some(end)) = (cursor, position.checked_sub(&exclusion)) {
            if let Some(span) = SeatSpan::try_new(start, end) {
                spans.push(span);
            }
        }
        cursor = position
            .checked_add(&row.buffer())
            .and_then(|edge| edge.checked_add(&one));
    }

    if let Some(start) = cursor {
        if let Some(span) = SeatSpan::try_new(start, row.seats()) {
            spans.push(span);
        }
    }

    spans
}

/// Returns the maximum number of additional occupants placeable in `row` so
/// that every occupied seat, old or new, keeps at least `row.buffer()` empty
/// seats on both sides.
///
/// This is the trusting path: the occupancy is assumed well formed (every
/// position in `[1, seats]`, no duplicates, consecutive occupants more than
/// `buffer` apart). Malformed input yields an unspecified count rather than
/// an error; use [`checked_max_additional_diners`] to reject it instead.
///
/// Runs in `O(M)` over the sorted occupancy; sorting happened at
/// [`Occupancy::from_positions`] time.
///
/// # Examples
///
/// ```rust
/// # use galley_seating::occupancy::Occupancy;
/// # use galley_seating::packer::max_additional_diners;
/// # use galley_seating::row::Row;
///
/// let row = Row::new(10, 1).unwrap();
/// let occupancy = Occupancy::from_positions(vec![2, 6]);
/// assert_eq!(max_additional_diners(&row, &occupancy), 3);
/// ```
pub fn max_additional_diners<T>(row: &Row<T>, occupancy: &Occupancy<T>) -> T
where
    T: PrimInt,
{
    free_spans(row, occupancy)
        .iter()
        .fold(T::zero(), |count, span| {
            count + span.capacity(row.buffer())
        })
}

/// Validating entry point: builds the row, checks the occupancy, and only
/// then runs the packer.
///
/// The positions may be supplied in any order. Returns a descriptive
/// [`SeatingError`] when the row dimensions are invalid or the occupancy
/// violates range, distinctness, or distancing.
///
/// # Examples
///
/// ```rust
/// # use galley_seating::packer::checked_max_additional_diners;
///
/// assert_eq!(checked_max_additional_diners(15, 2, &[11, 6, 14]), Ok(1));
/// assert!(checked_max_additional_diners(10, 1, &[2, 3]).is_err());
/// ```
pub fn checked_max_additional_diners<T>(
    seats: T,
    buffer: T,
    occupied: &[T],
) -> Result<T, SeatingError<T>>
where
    T: PrimInt,
{
    let row = Row::new(seats, buffer)?;
    let occupancy = Occupancy::from_positions(occupied.to_vec());
    occupancy.validate(&row)?;
    Ok(max_additional_diners(&row, &occupancy))
}
