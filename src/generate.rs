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

//! Random triangle sets for benchmarking the detector.
//!
//! Triangles land inside the cube `[0, bounds]^3`, each one inside its own
//! axis-aligned cube of edge `size`.

use rand::{Rng, SeedableRng, rngs::StdRng};
use thiserror::Error;

use crate::{
    geometry::{point::Point3, polygon::Polygon},
    numeric::Scalar,
};

#[derive(Debug, Error, PartialEq)]
pub enum GeneratorError {
    #[error("bounds must be positive, got {0}")]
    NonPositiveBounds(f64),
    #[error("size must not be negative, got {0}")]
    NegativeSize(f64),
    #[error("size {size} exceeds bounds {bounds}")]
    SizeExceedsBounds { size: f64, bounds: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeneratorConfig {
    pub count: usize,
    pub bounds: f64,
    pub size: f64,
}

impl GeneratorConfig {
    pub fn new(count: usize, bounds: f64, size: f64) -> Result<Self, GeneratorError> {
        if !(bounds > 0.0) {
            return Err(GeneratorError::NonPositiveBounds(bounds));
        }
        if !(size >= 0.0) {
            return Err(GeneratorError::NegativeSize(size));
        }
        if size > bounds {
            return Err(GeneratorError::SizeExceedsBounds { size, bounds });
        }
        Ok(GeneratorConfig {
            count,
            bounds,
            size,
        })
    }
}

pub struct TriangleGenerator<R: Rng> {
    config: GeneratorConfig,
    rng: R,
}

impl TriangleGenerator<StdRng> {
    /// Reproducible generator.
    pub fn with_seed(config: GeneratorConfig, seed: u64) -> Self {
        TriangleGenerator::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TriangleGenerator<R> {
    pub fn new(config: GeneratorConfig, rng: R) -> Self {
        TriangleGenerator { config, rng }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// All three vertices are kept even if they happen to coincide, so the
    /// printed set always holds `3 * count` points.
    pub fn triangle<T: Scalar>(&mut self) -> Polygon<T> {
        let GeneratorConfig { bounds, size, .. } = self.config;
        let upper = [
            self.rng.random_range(size..=bounds),
            self.rng.random_range(size..=bounds),
            self.rng.random_range(size..=bounds),
        ];

        let vertices = (0..3)
            .map(|_| {
                let [x, y, z] = upper.map(|hi| self.rng.random_range(hi - size..=hi));
                Point3::new(T::from_f64(x), T::from_f64(y), T::from_f64(z))
            })
            .collect();
        Polygon::from_vertices(vertices)
    }

    pub fn generate<T: Scalar>(&mut self) -> Vec<Polygon<T>> {
        (0..self.config.count).map(|_| self.triangle()).collect()
    }
}
