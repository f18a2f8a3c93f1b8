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

use num_traits::PrimInt;
use std::ops::RangeInclusive;

/// An inclusive span `[start, end]` of integer seat positions.
///
/// This struct represents a non-empty contiguous run of integers. It supports
/// measurement and containment queries as well as the gap-packing capacity
/// formula used to count how many occupants fit into a free run of seats.
///
/// # Invariants
/// `start` must always be less than or equal to `end`; an inclusive span is
/// therefore never empty.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SeatSpan<T>
where
    T: PrimInt,
{
    start: T,
    end: T,
}

impl<T> SeatSpan<T>
where
    T: PrimInt,
{
    /// Creates a new `SeatSpan`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use galley_core::math::span::SeatSpan;
    ///
    /// let span = SeatSpan::new(1, 10);
    /// assert_eq!(span.len(), 10);
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        assert!(
            start <= end,
            "Invalid span: start must be less than or equal to end"
        );
        Self { start, end }
    }

    /// Creates a new `SeatSpan` if the inputs describe a non-empty span.
    ///
    /// Returns `None` if `start > end`. This is the natural filter for
    /// derived segments that collapse to nothing under tight spacing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use galley_core::math::span::SeatSpan;
    ///
    /// assert!(SeatSpan::try_new(4, 4).is_some());
    /// assert!(SeatSpan::try_new(4, 3).is_none());
    /// ```
    #[inline]
    pub fn try_new(start: T, end: T) -> Option<Self> {
        if start <= end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Creates a new `SeatSpan` without checking invariants in release builds.
    ///
    /// # Safety
    ///
    /// The caller must ensure `start <= end`. This function contains a
    /// `debug_assert!` to catch errors during development.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use galley_core::math::span::SeatSpan;
    ///
    /// let span = SeatSpan::new_unchecked(1, 10);
    /// assert_eq!(span.start(), 1);
    /// ```
    #[inline]
    pub fn new_unchecked(start: T, end: T) -> Self {
        debug_assert!(
            start <= end,
            "Invalid span: start must be less than or equal to end"
        );
        Self { start, end }
    }

    /// Returns the inclusive start bound of the span.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use galley_core::math::span::SeatSpan;
    ///
    /// let span = SeatSpan::new(5, 10);
    /// assert_eq!(span.start(), 5);
    /// ```
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the inclusive end bound of the span.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use galley_core::math::span::SeatSpan;
    ///
    /// let span = SeatSpan::new(5, 10);
    /// assert_eq!(span.end(), 10);
    /// ```
    #[inline]
    pub const fn end(&self) -> T {
        self.end
    }

    /// Returns the number of seats in the span (`end - start + 1`).
    ///
    /// Never zero: the construction invariant guarantees at least one seat.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use galley_core::math::span::SeatSpan;
    ///
    /// assert_eq!(SeatSpan::new(4, 4).len(), 1);
    /// assert_eq!(SeatSpan::new(10, 20).len(), 11);
    /// ```
    #[inline]
    pub fn len(&self) -> T {
        self.end - self.start + T::one()
    }

    /// Returns `true` if `value` lies within `[start, end]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use galley_core::math::span::SeatSpan;
    ///
    /// let span = SeatSpan::new(1, 10);
    /// assert!(span.contains_point(1));
    /// assert!(span.contains_point(10));
    /// assert!(!span.contains_point(11));
    /// ```
    #[inline]
    pub fn contains_point(&self, value: T) -> bool {
        self.start <= value && value <= self.end
    }

    /// Returns the maximum number of occupants that fit into this span such
    /// that any two occupants are separated by more than `gap` empty seats.
    ///
    /// The count is `floor((len + gap) / (gap + 1))`. Each occupant consumes
    /// one seat plus `gap` trailing seats, except the last occupant placed at
    /// the far end of the span, who needs no trailing gap because the span
    /// boundary already separates them from whatever lies beyond. Adding
    /// `gap` to the length before dividing grants that implicit trailing
    /// allowance to exactly one occupant per span.
    ///
    /// With `gap = 0` the divisor is one and every seat can be filled.
    ///
    /// The count is evaluated as `(len - 1) / (gap + 1) + 1`, which is
    /// equivalent for any non-empty span and cannot overflow: once
    /// `gap >= len` the answer is pinned at one, so both intermediate terms
    /// stay within the span's own range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use galley_core::math::span::SeatSpan;
    ///
    /// // Ten seats, one empty seat required between occupants: X.X.X.X.X.
    /// assert_eq!(SeatSpan::new(1, 10).capacity(1), 5);
    ///
    /// // No gap required: every seat fills.
    /// assert_eq!(SeatSpan::new(1, 5).capacity(0), 5);
    ///
    /// // A single seat always holds one occupant, whatever the gap.
    /// assert_eq!(SeatSpan::new(3, 3).capacity(100), 1);
    /// ```
    #[inline]
    pub fn capacity(&self, gap: T) -> T {
        debug_assert!(gap >= T::zero(), "Invalid gap: must be non-negative");
        let len = self.len();
        if gap >= len {
            return T::one();
        }
        (len - T::one()) / (gap + T::one()) + T::one()
    }
}

impl<T> std::fmt::Display for SeatSpan<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl<T> From<SeatSpan<T>> for RangeInclusive<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(span: SeatSpan<T>) -> Self {
        span.start..=span.end
    }
}

impl<T> TryFrom<RangeInclusive<T>> for SeatSpan<T>
where
    T: PrimInt,
{
    type Error = ();

    #[inline]
    fn try_from(range: RangeInclusive<T>) -> Result<Self, Self::Error> {
        let (start, end) = range.into_inner();
        Self::try_new(start, end).ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_valid() {
        let span = SeatSpan::new(10, 20);
        assert_eq!(span.start(), 10);
        assert_eq!(span.end(), 20);
        assert_eq!(span.len(), 11);
    }

    #[test]
    fn test_construction_single_seat() {
        let span = SeatSpan::new(7, 7);
        assert_eq!(span.len(), 1);
        assert!(span.contains_point(7));
    }

    #[test]
    fn test_try_new() {
        assert!(SeatSpan::try_new(5, 10).is_some());
        assert!(SeatSpan::try_new(5, 5).is_some());
        // Invalid: start > end
        assert!(SeatSpan::try_new(6, 5).is_none());
    }

    #[test]
    #[should_panic(expected = "Invalid span")]
    fn test_new_panic() {
        SeatSpan::new(10, 5);
    }

    #[test]
    fn test_try_new_unsigned_degenerate() {
        // A blocked zone that swallows the whole leading segment produces
        // end = 0 with start = 1 under unsigned arithmetic.
        assert!(SeatSpan::<u64>::try_new(1, 0).is_none());
    }

    #[test]
    fn test_contains_point() {
        let span = SeatSpan::new(3, 8);
        assert!(span.contains_point(3)); // Inclusive start
        assert!(span.contains_point(5));
        assert!(span.contains_point(8)); // Inclusive end
        assert!(!span.contains_point(2));
        assert!(!span.contains_point(9));
    }

    #[test]
    fn test_capacity_no_gap() {
        // Divisor one: every seat fills.
        assert_eq!(SeatSpan::new(1, 5).capacity(0), 5);
        assert_eq!(SeatSpan::new(1, 1).capacity(0), 1);
    }

    #[test]
    fn test_capacity_with_gap() {
        // L = 10, gap = 1: (10 + 1) / 2 = 5.
        assert_eq!(SeatSpan::new(1, 10).capacity(1), 5);
        // L = 3, gap = 2: (3 + 2) / 3 = 1.
        assert_eq!(SeatSpan::new(1, 3).capacity(2), 1);
        // L = 2, gap = 1: (2 + 1) / 2 = 1.
        assert_eq!(SeatSpan::new(5, 6).capacity(1), 1);
    }

    #[test]
    fn test_capacity_gap_exceeds_length() {
        // One occupant always fits in a non-empty span.
        assert_eq!(SeatSpan::new(1, 1).capacity(5), 1);
        assert_eq!(SeatSpan::new(1, 4).capacity(100), 1);
    }

    #[test]
    fn test_capacity_narrow_type_no_overflow() {
        // L + gap would exceed the type's range; the rearranged form must
        // not wrap or panic.
        assert_eq!(SeatSpan::<u8>::new(1, 10).capacity(250), 1);
        assert_eq!(SeatSpan::<u8>::new(1, 255).capacity(254), 1);
        assert_eq!(SeatSpan::<u8>::new(1, 255).capacity(127), 2);
        // gap + 1 would overflow on its own.
        assert_eq!(SeatSpan::<u8>::new(1, 10).capacity(u8::MAX), 1);
    }

    #[test]
    fn test_capacity_exact_multiples() {
        // L = 6, gap = 2: (6 + 2) / 3 = 2, e.g. X..X.. -> X..X.|
        assert_eq!(SeatSpan::new(1, 6).capacity(2), 2);
        // L = 7, gap = 2: (7 + 2) / 3 = 3, e.g. X..X..X
        assert_eq!(SeatSpan::new(1, 7).capacity(2), 3);
    }

    #[test]
    fn test_display() {
        let span = SeatSpan::new(10, 20);
        assert_eq!(format!("{}", span), "[10, 20]");
    }

    #[test]
    fn test_range_conversions() {
        let span = SeatSpan::new(2, 6);
        let range: std::ops::RangeInclusive<i32> = span.into();
        assert_eq!(range, 2..=6);

        let back = SeatSpan::try_from(2..=6).unwrap();
        assert_eq!(back, span);

        // An inverted range has no span representation.
        assert!(SeatSpan::<i32>::try_from(6..=2).is_err());
    }
}
