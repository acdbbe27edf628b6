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

/// Ordered vertex list; edge `i` joins vertex `i` and vertex `(i + 1) % n`.
///
/// Planarity is not checked. The production path only ever builds triangles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon<T: Scalar> {
    vertices: Vec<Point3<T>>,
}

impl<T: Scalar> Polygon<T> {
    pub fn new() -> Self {
        Polygon {
            vertices: Vec::new(),
        }
    }

    /// Takes `vertices` as given, coincident ones included.
    pub fn from_vertices(vertices: Vec<Point3<T>>) -> Self {
        Polygon { vertices }
    }

    pub fn triangle(a: Point3<T>, b: Point3<T>, c: Point3<T>, tol: &Tolerance<T>) -> Self {
        let mut tri = Polygon::new();
        tri.add(a, tol);
        tri.add(b, tol);
        tri.add(c, tol);
        tri
    }

    pub fn vertices(&self) -> &[Point3<T>] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Appends `vert` unless a coincident vertex is already present.
    pub fn add(&mut self, vert: Point3<T>, tol: &Tolerance<T>) {
        if !self.holding(&vert, tol) {
            self.vertices.push(vert);
        }
    }

    pub fn holding(&self, vert: &Point3<T>, tol: &Tolerance<T>) -> bool {
        self.vertices.iter().any(|v| v.eq_within(vert, tol))
    }

    /// Line holding side `index`. Negative indices count from the end.
    ///
    /// Panics on an empty polygon.
    pub fn side(&self, index: isize) -> Line<T> {
        let n = self.vertices.len();
        let i = index.rem_euclid(n as isize) as usize;
        Line::through(self.vertices[i], self.vertices[(i + 1) % n])
    }

    pub fn valid(&self) -> bool {
        self.vertices.len() >= 3 && self.vertices.iter().all(Point3::valid)
    }

    /// Area of a planar polygon (fan around the first vertex).
    pub fn square(&self) -> T {
        if self.vertices.len() < 3 {
            return T::zero();
        }
        let base = self.vertices[0];
        let doubled = self.vertices[1..]
            .windows(2)
            .map(|w| (w[0] - base).cross(&(w[1] - base)))
            .fold(Point3::origin(), |acc, c| acc + c);
        doubled.norm() / (T::one() + T::one())
    }

    /// Looks for a side of `self` whose dihedral wedge keeps every vertex of
    /// `other` away from the interior of `self`.
    ///
    /// For side `i` the reference half-plane passes through vertex `i + 2`
    /// (the opposite vertex of a triangle). The side separates when the
    /// angles of `other`'s vertices span less than π and neither touches the
    /// reference half-plane.
    ///
    /// A vertex of `other` lying on any side line makes the angle undefined
    /// and stops the whole search with `false`, even if a later side would
    /// have separated.
    pub fn is_divided_by_side_plane(&self, other: &Polygon<T>, tol: &Tolerance<T>) -> bool {
        let n = self.vertices.len();
        let two_pi = T::two_pi();

        for i in 0..n {
            let line = self.side(i as isize);
            let reference = self.vertices[(i + 2) % n];
            let mut max_angle = T::zero();
            let mut min_angle = two_pi;

            for vert in &other.vertices {
                let angle = line.angle(&reference, vert, tol);
                if angle.is_nan() {
                    return false;
                }
                min_angle = min_angle.min(angle);
                max_angle = max_angle.max(angle);
            }

            if max_angle - min_angle < T::PI() && min_angle != T::zero() && max_angle != two_pi {
                return true;
            }
        }
        false
    }

    /// Invalid polygons never intersect anything.
    pub fn intersect(&self, other: &Polygon<T>, tol: &Tolerance<T>) -> bool {
        if !self.valid() || !other.valid() {
            return false;
        }

        !(self.is_divided_by_side_plane(other, tol) || other.is_divided_by_side_plane(self, tol))
    }
}

impl<T: Scalar> FromIterator<Point3<T>> for Polygon<T> {
    fn from_iter<I: IntoIterator<Item = Point3<T>>>(iter: I) -> Self {
        let tol = Tolerance::default();
        let mut polygon = Polygon::new();
        for vert in iter {
            polygon.add(vert, &tol);
        }
        polygon
    }
}

impl<T: Scalar> fmt::Display for Polygon<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vert in &self.vertices {
            writeln!(f, "{vert}")?;
        }
        Ok(())
    }
}
