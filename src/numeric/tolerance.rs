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

use crate::numeric::scalar::Scalar;

pub const DEFAULT_EPS: f64 = 1e-5;
pub const DEFAULT_INTER_WIDTH: f64 = 100.0;

/// Numeric tuning shared by every predicate of a run.
///
/// `eps` is the coordinate tolerance used for point coincidence and for the
/// "negligible" checks. `inter_width` is the number of `eps` on each side of a
/// plane that form the INTER band of [`crate::geometry::SideArea`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance<T: Scalar> {
    pub eps: T,
    pub inter_width: T,
}

impl<T: Scalar> Tolerance<T> {
    pub fn new(eps: T, inter_width: T) -> Self {
        Tolerance { eps, inter_width }
    }

    /// Half-width of the INTER band around a plane.
    pub fn band(&self) -> T {
        self.eps * self.inter_width
    }

    pub fn is_negligible(&self, value: T) -> bool {
        value.abs() < self.eps
    }
}

impl<T: Scalar> Default for Tolerance<T> {
    fn default() -> Self {
        Tolerance {
            eps: T::from_f64(DEFAULT_EPS),
            inter_width: T::from_f64(DEFAULT_INTER_WIDTH),
        }
    }
}
