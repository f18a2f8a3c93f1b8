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

//! # Math Primitives
//!
//! Foundational mathematical structures for seat-row logic. This module
//! currently focuses on inclusive integer spans, designed to integrate
//! cleanly with Rust's range ecosystem.
//!
//! ## Submodules
//!
//! - `span`: A generic `[start, end]` span type with validation, predicates,
//!   measurements, and the gap-packing capacity formula. Includes
//!   conversions to/from `std::ops::RangeInclusive`.
//!
//! ## Motivation
//!
//! Seating computations routinely manipulate contiguous runs of 1-indexed
//! seats. Inclusive spans match that indexing directly and make the
//! "segment is valid only if start ≤ end" filter a construction invariant
//! instead of a scattered runtime check.
//!
//! Refer to the `span` module for detailed APIs and examples.

pub mod span;
