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

//! # Galley Seating
//!
//! Row model and maximum-occupancy packer for distanced seating. Given a row
//! of `N` seats, a required buffer of `K` empty seats around every occupant,
//! and the positions of the seats already taken, this crate computes how many
//! additional occupants can still be placed.
//!
//! ## Modules
//!
//! - `row`: The immutable row description (`seats`, `buffer`) with validated
//!   construction and the empty-row capacity identity.
//! - `occupancy`: The sorted set of currently occupied positions, with an
//!   explicit validation pass for range, duplicate, and distancing checks.
//! - `packer`: Free-segment derivation and the packing computation itself,
//!   in both a trusting and a validating flavor.
//!
//! ## Motivation
//!
//! The computation is a closed-form interval-packing identity: strip the
//! blocked zones around existing occupants, and each remaining free segment
//! of length `L` admits exactly `floor((L + K) / (K + 1))` newcomers. All
//! the surrounding structure exists to make that identity hard to misuse.

pub mod occupancy;
pub mod packer;
pub mod row;
