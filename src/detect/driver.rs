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

use std::{fmt, time::Instant};

use crate::{
    detect::intersections::{DetectStats, Intersections},
    geometry::{bounding_cube::BoundingCube, polygon::Polygon},
    numeric::{Scalar, Tolerance},
    spatial::SortedCubes,
};

/// How candidate partners are produced before the exact test.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// x-sorted cubes with a binary-searched prefix, then y/z overlap.
    /// `O(N * (log N + M))`, `O(N)` memory.
    #[default]
    SortedCubes,
    /// Every other polygon whose tight box overlaps on all three axes.
    /// `O(N^2)`.
    BruteForce,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::SortedCubes => write!(f, "sorted cubes"),
            Strategy::BruteForce => write!(f, "brute force"),
        }
    }
}

/// Marks every polygon that intersects at least one other polygon.
///
/// A polygon already marked is not used to drive a search again, and the
/// search for a polygon stops at its first confirmed partner; both partners
/// are marked on that hit.
#[derive(Clone, Debug)]
pub struct IntersectionDriver<'a, T: Scalar> {
    polygons: &'a [Polygon<T>],
    tolerance: Tolerance<T>,
    strategy: Strategy,
    progress_step: Option<f32>,
}

impl<'a, T: Scalar> IntersectionDriver<'a, T> {
    pub fn new(polygons: &'a [Polygon<T>]) -> Self {
        IntersectionDriver {
            polygons,
            tolerance: Tolerance::default(),
            strategy: Strategy::default(),
            progress_step: None,
        }
    }

    pub fn tolerance(mut self, tolerance: Tolerance<T>) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Log progress at `info` level every `step` fraction of the input,
    /// e.g. `0.02` for every 2%.
    pub fn progress_step(mut self, step: f32) -> Self {
        self.progress_step = Some(step);
        self
    }

    pub fn run(&self) -> Intersections {
        let n = self.polygons.len();
        let started = Instant::now();
        let mut scan = Scan {
            polygons: self.polygons,
            tolerance: &self.tolerance,
            flags: vec![false; n],
            stats: DetectStats::default(),
        };
        let mut progress = self.progress_step.map(|step| Progress::new(n, step));

        if progress.is_some() {
            log::info!("Start checking using {}...", self.strategy);
        }

        match self.strategy {
            Strategy::SortedCubes => scan.sorted_cubes(&mut progress),
            Strategy::BruteForce => scan.brute_force(&mut progress),
        }

        let elapsed = started.elapsed();
        if progress.is_some() {
            log::info!("Time elapsed: {:.3}s", elapsed.as_secs_f64());
        }
        log::debug!(
            "{} triangles: {} candidates, {} exact tests, {} hits in {:?}",
            n,
            scan.stats.candidates,
            scan.stats.exact_tests,
            scan.stats.hits,
            elapsed
        );

        Intersections::new(scan.flags, scan.stats)
    }
}

/// Runs the default driver over `polygons`.
pub fn find_intersections<T: Scalar>(polygons: &[Polygon<T>]) -> Intersections {
    IntersectionDriver::new(polygons).run()
}

struct Scan<'a, T: Scalar> {
    polygons: &'a [Polygon<T>],
    tolerance: &'a Tolerance<T>,
    flags: Vec<bool>,
    stats: DetectStats,
}

impl<T: Scalar> Scan<'_, T> {
    fn sorted_cubes(&mut self, progress: &mut Option<Progress>) {
        let index = SortedCubes::build(self.polygons);
        let tol = self.tolerance;

        for i in 0..self.polygons.len() {
            if let Some(p) = progress.as_mut() {
                p.tick(i);
            }
            if self.flags[i] {
                continue;
            }

            for &j in index.interfere_x(i) {
                self.stats.candidates += 1;
                if i == j || !(index[i].z_interfere(&index[j], tol) && index[i].y_interfere(&index[j], tol)) {
                    continue;
                }
                if self.confirm(i, j) {
                    break;
                }
            }
        }
    }

    fn brute_force(&mut self, progress: &mut Option<Progress>) {
        let zero = T::zero();
        let cubes: Vec<_> = self
            .polygons
            .iter()
            .map(|poly| BoundingCube::from_polygon(poly, zero))
            .collect();
        let tol = self.tolerance;

        for i in 0..cubes.len() {
            if let Some(p) = progress.as_mut() {
                p.tick(i);
            }
            if self.flags[i] {
                continue;
            }

            for j in 0..cubes.len() {
                self.stats.candidates += 1;
                if i == j || !cubes[i].interfere(&cubes[j], tol) {
                    continue;
                }
                if self.confirm(i, j) {
                    break;
                }
            }
        }
    }

    fn confirm(&mut self, i: usize, j: usize) -> bool {
        self.stats.exact_tests += 1;
        if self.polygons[i].intersect(&self.polygons[j], self.tolerance) {
            self.flags[i] = true;
            self.flags[j] = true;
            self.stats.hits += 1;
            true
        } else {
            false
        }
    }
}

struct Progress {
    total: usize,
    step: usize,
    next: usize,
}

impl Progress {
    fn new(total: usize, step: f32) -> Self {
        let step = ((total as f32 * step) as usize).max(1);
        Progress {
            total,
            step,
            next: 0,
        }
    }

    fn tick(&mut self, i: usize) {
        if i >= self.next {
            log::info!("{}% done...", self.next * 100 / self.total.max(1));
            self.next += self.step;
        }
    }
}
