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

use crate::{
    geometry::{point::Point3, polygon::Polygon},
    numeric::{Scalar, Tolerance},
};

/// Axis-aligned box around a polygon, each axis widened to at least
/// `cube_size`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingCube<T: Scalar> {
    pub min: Point3<T>,
    pub max: Point3<T>,
}

impl<T: Scalar> BoundingCube<T> {
    pub fn new(min: Point3<T>, max: Point3<T>) -> Self {
        BoundingCube { min, max }
    }

    /// Tight extents of `polygon`; an axis narrower than `cube_size` is
    /// extended upwards from its minimum. An empty polygon sits at the origin.
    pub fn from_polygon(polygon: &Polygon<T>, cube_size: T) -> Self {
        let (min, max) = extents(polygon).unwrap_or((Point3::origin(), Point3::origin()));

        let widen = |lo: T, hi: T| if hi - lo < cube_size { lo + cube_size } else { hi };

        BoundingCube {
            min,
            max: Point3::new(
                widen(min.x, max.x),
                widen(min.y, max.y),
                widen(min.z, max.z),
            ),
        }
    }

    pub fn x_interfere(&self, other: &BoundingCube<T>, tol: &Tolerance<T>) -> bool {
        overlap(self.min.x, self.max.x, other.min.x, other.max.x, tol.eps)
    }

    pub fn y_interfere(&self, other: &BoundingCube<T>, tol: &Tolerance<T>) -> bool {
        overlap(self.min.y, self.max.y, other.min.y, other.max.y, tol.eps)
    }

    pub fn z_interfere(&self, other: &BoundingCube<T>, tol: &Tolerance<T>) -> bool {
        overlap(self.min.z, self.max.z, other.min.z, other.max.z, tol.eps)
    }

    pub fn interfere(&self, other: &BoundingCube<T>, tol: &Tolerance<T>) -> bool {
        self.x_interfere(other, tol) && self.y_interfere(other, tol) && self.z_interfere(other, tol)
    }
}

/// Per-axis (min, max) over the vertices, `None` for an empty polygon.
pub fn extents<T: Scalar>(polygon: &Polygon<T>) -> Option<(Point3<T>, Point3<T>)> {
    let (first, rest) = polygon.vertices().split_first()?;
    let mut min = *first;
    let mut max = *first;
    for p in rest {
        min = Point3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z));
        max = Point3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z));
    }
    Some((min, max))
}

#[inline(always)]
fn overlap<T: Scalar>(lo: T, hi: T, other_lo: T, other_hi: T, eps: T) -> bool {
    !(other_lo > hi + eps || other_hi < lo - eps)
}
