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

use std::{cmp::Ordering, ops::Index};

use crate::{
    geometry::{
        bounding_cube::{BoundingCube, extents},
        polygon::Polygon,
    },
    numeric::Scalar,
};

/// Broad phase over a fixed polygon set: one cube per polygon plus the polygon
/// indices sorted by cube minimum x.
///
/// Every cube is at least `cube_size` wide on each axis, where `cube_size` is
/// the widest single-axis span found inside any one polygon. With `N`
/// polygons spread over a region of edge `B` and feature size `s`, a query
/// costs `O(log N + M)` with `M ~ N * s / B` candidates, so a full pass is
/// `O(N * (log N + M))`. Clustered inputs, or `s` comparable to `B`, push it
/// towards `O(N^2)`.
#[derive(Clone, Debug)]
pub struct SortedCubes<T: Scalar> {
    cubes: Vec<BoundingCube<T>>,
    x_sorted: Vec<usize>,
    cube_size: T,
}

impl<T: Scalar> SortedCubes<T> {
    pub fn build(polygons: &[Polygon<T>]) -> Self {
        let cube_size = uniform_cube_size(polygons);
        Self::with_cube_size(polygons, cube_size)
    }

    pub fn with_cube_size(polygons: &[Polygon<T>], cube_size: T) -> Self {
        let cubes: Vec<_> = polygons
            .iter()
            .map(|poly| BoundingCube::from_polygon(poly, cube_size))
            .collect();

        let mut x_sorted: Vec<usize> = (0..cubes.len()).collect();
        // NaN minima go last so the finite prefix stays ascending.
        x_sorted.sort_by(|&a, &b| {
            let (ka, kb) = (cubes[a].min.x, cubes[b].min.x);
            match (ka.is_nan(), kb.is_nan()) {
                (false, false) => ka.partial_cmp(&kb).unwrap_or(Ordering::Equal),
                (nan_a, nan_b) => nan_a.cmp(&nan_b),
            }
        });

        log::debug!(
            "sorted cubes: {} polygons, cube size {}",
            cubes.len(),
            cube_size
        );

        SortedCubes {
            cubes,
            x_sorted,
            cube_size,
        }
    }

    pub fn cube_size(&self) -> T {
        self.cube_size
    }

    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    pub fn cube(&self, index: usize) -> &BoundingCube<T> {
        &self.cubes[index]
    }

    pub fn cubes(&self) -> &[BoundingCube<T>] {
        &self.cubes
    }

    pub fn x_sorted(&self) -> &[usize] {
        &self.x_sorted
    }

    /// Indices whose cube starts at or before the right edge of cube `index`,
    /// `index` itself included. Cubes with a NaN bound never match and a NaN
    /// query matches nothing.
    ///
    /// Only the right side is bounded: cubes ending left of the query stay in
    /// the result and are left to the y/z checks and the exact test.
    pub fn interfere_x(&self, index: usize) -> &[usize] {
        let reach = self.cubes[index].max.x;
        let end = self
            .x_sorted
            .partition_point(|&j| self.cubes[j].min.x <= reach);
        &self.x_sorted[..end]
    }
}

impl<T: Scalar> Index<usize> for SortedCubes<T> {
    type Output = BoundingCube<T>;
    fn index(&self, i: usize) -> &Self::Output {
        &self.cubes[i]
    }
}

/// Largest coordinate span between two vertices of the same polygon, over all
/// axes and polygons.
pub fn uniform_cube_size<T: Scalar>(polygons: &[Polygon<T>]) -> T {
    let mut size_max = [T::zero(); 3];
    for (min, max) in polygons.iter().filter_map(extents) {
        for (axis, best) in size_max.iter_mut().enumerate() {
            let size = max.coord(axis) - min.coord(axis);
            if size > *best {
                *best = size;
            }
        }
    }
    size_max[0].max(size_max[1]).max(size_max[2])
}
