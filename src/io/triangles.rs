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

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::{
    detect::Intersections,
    geometry::{point::Point3, polygon::Polygon},
    numeric::{Scalar, Tolerance},
};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("missing triangle count")]
    MissingCount,
    #[error("invalid triangle count {0:?}")]
    InvalidCount(String),
    #[error("triangle {triangle}: invalid coordinate {token:?}")]
    InvalidCoordinate { triangle: usize, token: String },
    #[error("expected {expected} triangles, input ends inside triangle {found}")]
    Truncated { expected: usize, found: usize },
}

/// Reads a triangle count followed by nine coordinates per triangle, all
/// whitespace separated.
pub fn read_triangles<T: Scalar, R: BufRead>(
    mut reader: R,
    tol: &Tolerance<T>,
) -> Result<Vec<Polygon<T>>, InputError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_triangles(&text, tol)
}

/// Coincident vertices collapse through [`Polygon::add`]; such triangles are
/// kept (so indices line up with the input) but can never intersect.
/// `nan` and `inf` parse as floats but are rejected as coordinates.
pub fn parse_triangles<T: Scalar>(
    text: &str,
    tol: &Tolerance<T>,
) -> Result<Vec<Polygon<T>>, InputError> {
    let mut tokens = text.split_whitespace();

    let count_token = tokens.next().ok_or(InputError::MissingCount)?;
    let count: usize = count_token
        .parse()
        .map_err(|_| InputError::InvalidCount(count_token.to_owned()))?;

    let mut triangles = Vec::new();
    for triangle in 0..count {
        let mut next_coord = || -> Result<T, InputError> {
            let token = tokens.next().ok_or(InputError::Truncated {
                expected: count,
                found: triangle,
            })?;
            match token.parse::<T>() {
                Ok(value) if value.is_finite() => Ok(value),
                _ => Err(InputError::InvalidCoordinate {
                    triangle,
                    token: token.to_owned(),
                }),
            }
        };

        let mut tri = Polygon::new();
        for _ in 0..3 {
            let x = next_coord()?;
            let y = next_coord()?;
            let z = next_coord()?;
            tri.add(Point3::new(x, y, z), tol);
        }

        if !tri.valid() {
            log::warn!("triangle {triangle} is degenerate and will not be tested");
        }
        triangles.push(tri);
    }

    log::debug!("read {} triangles", triangles.len());
    Ok(triangles)
}

/// One intersected index per line, ascending.
pub fn write_indices<W: Write>(result: &Intersections, mut out: W) -> io::Result<()> {
    for index in result.indices() {
        writeln!(out, "{index}")?;
    }
    out.flush()
}

/// Writes `triangles` in the format [`read_triangles`] accepts, one vertex per
/// line and a blank line after each triangle.
pub fn write_triangles<T: Scalar, W: Write>(
    triangles: &[Polygon<T>],
    mut out: W,
) -> io::Result<()> {
    writeln!(out, "{}", triangles.len())?;
    for tri in triangles {
        for v in tri.vertices() {
            writeln!(out, "{} {} {}", v.x, v.y, v.z)?;
        }
        writeln!(out)?;
    }
    out.flush()
}
