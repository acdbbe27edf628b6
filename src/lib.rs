// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Pairwise intersection detection for sets of triangles in 3-D.
//!
//! The crate is split into a tolerance-aware primitive layer ([`geometry`]),
//! a sorted-cubes broad phase ([`spatial`]) and the detection pass
//! ([`detect`]). The [`io`] and [`generate`] modules are the outer text and
//! sampling layers used by the binaries.

pub mod detect;
pub mod generate;
pub mod geometry;
pub mod io;
pub mod numeric;
pub mod spatial;

pub use detect::{IntersectionDriver, Intersections, Strategy, find_intersections};
pub use geometry::{BoundingCube, Line, Plane, Point3, Polygon, SideArea};
pub use numeric::{Scalar, Tolerance};
pub use spatial::SortedCubes;
