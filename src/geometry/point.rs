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

use std::{
    fmt,
    ops::{Add, Mul, Neg, Sub},
};

use crate::numeric::{Scalar, Tolerance};

/// A point (or free vector) in 3-D.
///
/// Any NaN component makes the point invalid; `Default` yields the all-NaN
/// sentinel that degenerate constructions return.
#[derive(Clone, Copy, Debug)]
pub struct Point3<T: Scalar> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Point3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Point3 { x, y, z }
    }

    pub fn invalid() -> Self {
        Point3 {
            x: T::nan(),
            y: T::nan(),
            z: T::nan(),
        }
    }

    pub fn origin() -> Self {
        Point3 {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
        }
    }

    pub fn valid(&self) -> bool {
        !(self.x.is_nan() || self.y.is_nan() || self.z.is_nan())
    }

    /// Component-wise coincidence within `tol.eps`.
    pub fn eq_within(&self, other: &Self, tol: &Tolerance<T>) -> bool {
        (self.x - other.x).abs() < tol.eps
            && (self.y - other.y).abs() < tol.eps
            && (self.z - other.z).abs() < tol.eps
    }

    pub fn is_zero_within(&self, tol: &Tolerance<T>) -> bool {
        self.eq_within(&Self::origin(), tol)
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Self) -> Self {
        Point3 {
            x: self.y * other.z - other.y * self.z,
            y: other.x * self.z - self.x * other.z,
            z: self.x * other.y - other.x * self.y,
        }
    }

    pub fn distance(&self, other: &Self) -> T {
        (*self - *other).norm()
    }

    pub fn norm(&self) -> T {
        self.dot(self).sqrt()
    }

    pub fn coord(&self, axis: usize) -> T {
        match axis {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => panic!("Invalid axis"),
        }
    }
}

impl<T: Scalar> Default for Point3<T> {
    fn default() -> Self {
        Self::invalid()
    }
}

impl<T: Scalar> Add for Point3<T> {
    type Output = Point3<T>;
    fn add(self, rhs: Point3<T>) -> Point3<T> {
        Point3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl<T: Scalar> Sub for Point3<T> {
    type Output = Point3<T>;
    fn sub(self, rhs: Point3<T>) -> Point3<T> {
        Point3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl<T: Scalar> Mul<T> for Point3<T> {
    type Output = Point3<T>;
    fn mul(self, rhs: T) -> Point3<T> {
        Point3 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl<T: Scalar> Neg for Point3<T> {
    type Output = Point3<T>;
    fn neg(self) -> Point3<T> {
        Point3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

// Uses the default tolerance. Not transitive: no `Eq` or `Hash`.
impl<T: Scalar> PartialEq for Point3<T> {
    fn eq(&self, other: &Self) -> bool {
        self.eq_within(other, &Tolerance::default())
    }
}

impl<T: Scalar> From<[T; 3]> for Point3<T> {
    fn from(coords: [T; 3]) -> Self {
        Point3::new(coords[0], coords[1], coords[2])
    }
}

impl<T: Scalar> fmt::Display for Point3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
