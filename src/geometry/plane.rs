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
    geometry::{line::Line, point::Point3},
    numeric::{Scalar, Tolerance},
};

/// Zones a plane cuts space into. `Inter` is the slab of half-width
/// `eps * inter_width` around the plane itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SideArea {
    Left,
    Inter,
    Right,
}

/// `a*x + b*y + c*z + d = 0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane<T: Scalar> {
    pub a: T,
    pub b: T,
    pub c: T,
    pub d: T,
}

impl<T: Scalar> Plane<T> {
    pub fn new(a: T, b: T, c: T, d: T) -> Self {
        Plane { a, b, c, d }
    }

    pub fn from_points(p1: &Point3<T>, p2: &Point3<T>, p3: &Point3<T>) -> Self {
        let v1 = *p2 - *p1;
        let v2 = *p3 - *p1;
        let normal = v1.cross(&v2);
        let d = -normal.dot(p1);
        Plane::new(normal.x, normal.y, normal.z, d)
    }

    /// Plane holding `line` and `pnt`. A point on the line gives a zero normal.
    pub fn from_line_and_point(line: &Line<T>, pnt: &Point3<T>) -> Self {
        let root = line.root();
        Plane::from_points(pnt, &root, &(line.dir() + root))
    }

    pub fn normal(&self) -> Point3<T> {
        Point3::new(self.a, self.b, self.c)
    }

    pub fn valid(&self) -> bool {
        self.normal().valid() && !self.d.is_nan()
    }

    /// Signed, unnormalised offset of `point`.
    pub fn offset(&self, point: &Point3<T>) -> T {
        self.normal().dot(point) + self.d
    }

    /// Meeting point with `line`, or the invalid point when the line runs
    /// parallel to the plane.
    pub fn intersection(&self, line: &Line<T>, tol: &Tolerance<T>) -> Point3<T> {
        let normal = Line::through(Point3::origin(), self.normal());
        if line.perpendicular_within(&normal, tol) {
            return Point3::invalid();
        }

        let root = line.root();
        let dir = line.dir();
        let param = -self.offset(&root) / self.normal().dot(&dir);

        root + dir * param
    }

    pub fn side_area(&self, point: &Point3<T>, tol: &Tolerance<T>) -> SideArea {
        let side_offset = self.offset(point);
        let band = tol.band();

        if side_offset > band {
            SideArea::Left
        } else if side_offset > -band {
            SideArea::Inter
        } else {
            SideArea::Right
        }
    }

    /// True only when both points are strictly on opposite sides; a point in
    /// the INTER band never counts as separated.
    pub fn separates(&self, pnt1: &Point3<T>, pnt2: &Point3<T>, tol: &Tolerance<T>) -> bool {
        match (self.side_area(pnt1, tol), self.side_area(pnt2, tol)) {
            (SideArea::Inter, _) | (_, SideArea::Inter) => false,
            (side1, side2) => side1 != side2,
        }
    }
}

impl<T: Scalar> Default for Plane<T> {
    fn default() -> Self {
        Plane::new(T::zero(), T::zero(), T::one(), T::zero())
    }
}

impl<T: Scalar> fmt::Display for Plane<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = |v: T| if v > T::zero() { "+" } else { "-" };
        write!(
            f,
            "{}x {} {}y {} {}z {} {} = 0",
            self.a,
            sign(self.b),
            self.b.abs(),
            sign(self.c),
            self.c.abs(),
            sign(self.d),
            self.d.abs()
        )
    }
}
