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

use std::fmt;

use crate::{
    geometry::{plane::Plane, point::Point3},
    numeric::{Scalar, Tolerance},
};

/// `{ r : r = root + dir * t }`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line<T: Scalar> {
    root: Point3<T>,
    dir: Point3<T>,
}

impl<T: Scalar> Line<T> {
    /// The line passing through `a` and `b`, rooted at `a`.
    pub fn through(a: Point3<T>, b: Point3<T>) -> Self {
        Line { root: a, dir: b - a }
    }

    pub fn root(&self) -> Point3<T> {
        self.root
    }

    pub fn dir(&self) -> Point3<T> {
        self.dir
    }

    pub fn valid(&self) -> bool {
        self.valid_within(&Tolerance::default())
    }

    pub fn valid_within(&self, tol: &Tolerance<T>) -> bool {
        self.root.valid() && self.dir.valid() && !self.dir.is_zero_within(tol)
    }

    pub fn perpendicular_within(&self, other: &Line<T>, tol: &Tolerance<T>) -> bool {
        tol.is_negligible(self.dir.dot(&other.dir))
    }

    /// Dihedral angle around this line, in `[0, 2π]`, from the half-plane
    /// holding `p1` to the half-plane holding `p2`. Coincident half-planes
    /// give `2π`, or `0` when the deciding direction component is negative.
    ///
    /// Returns NaN when either point lies on the line, because the half-plane
    /// through it is undefined. Callers must check for it.
    pub fn angle(&self, p1: &Point3<T>, p2: &Point3<T>, tol: &Tolerance<T>) -> T {
        let pln1 = Plane::from_line_and_point(self, p1);
        let pln2 = Plane::from_line_and_point(self, p2);
        if !pln1.valid() || !pln2.valid() {
            return T::nan();
        }

        let norm1 = pln1.normal();
        let norm2 = pln2.normal();
        let denom = norm1.norm() * norm2.norm();
        if !(denom > T::zero()) {
            return T::nan();
        }

        let cos = norm1.dot(&norm2) / denom;
        if cos.is_nan() {
            return T::nan();
        }
        let angle = cos.max(-T::one()).min(T::one()).acos();

        if self.turns_forward(&norm1.cross(&norm2), tol) {
            angle
        } else {
            T::two_pi() - angle
        }
    }

    // The first non-negligible component of the direction decides whether the
    // rotation from the first normal to the second follows the line. A zero
    // rotation only follows a negative component.
    fn turns_forward(&self, axis: &Point3<T>, tol: &Tolerance<T>) -> bool {
        for i in 0..3 {
            let d = self.dir.coord(i);
            if !tol.is_negligible(d) {
                return (axis.coord(i) > T::zero()) == (d > T::zero());
            }
        }
        false
    }
}

impl<T: Scalar> Default for Line<T> {
    fn default() -> Self {
        Line {
            root: Point3::origin(),
            dir: Point3::new(T::one(), T::one(), T::one()),
        }
    }
}

impl<T: Scalar> fmt::Display for Line<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "root {} dir {}", self.root, self.dir)
    }
}
