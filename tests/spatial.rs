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

use trisect::generate::{GeneratorConfig, TriangleGenerator};
use trisect::geometry::{BoundingCube, Point3, Polygon};
use trisect::numeric::Tolerance;
use trisect::spatial::{SortedCubes, uniform_cube_size};

fn p(x: f64, y: f64, z: f64) -> Point3<f64> {
    Point3::new(x, y, z)
}

fn tri(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> Polygon<f64> {
    Polygon::from_vertices(vec![a.into(), b.into(), c.into()])
}

/// Unit right triangle in the z = 0 plane with its right angle at `(x0, 0, 0)`.
fn unit_tri_at(x0: f64) -> Polygon<f64> {
    tri([x0, 0.0, 0.0], [x0 + 1.0, 0.0, 0.0], [x0, 1.0, 0.0])
}

#[test]
fn test_cube_tight_extents_with_negative_coordinates() {
    let poly = tri([-3.0, -2.0, -1.0], [-1.0, -2.0, -1.0], [-3.0, 0.0, -1.0]);
    let cube = BoundingCube::from_polygon(&poly, 0.0);
    assert_eq!(cube.min, p(-3.0, -2.0, -1.0));
    assert_eq!(cube.max, p(-1.0, 0.0, -1.0));
}

#[test]
fn test_cube_widened_to_cube_size() {
    let poly = tri([-3.0, -2.0, -1.0], [-1.0, -2.0, -1.0], [-3.0, 0.0, -1.0]);
    let cube = BoundingCube::from_polygon(&poly, 5.0);
    assert_eq!(cube.min, p(-3.0, -2.0, -1.0));
    assert_eq!(cube.max, p(2.0, 3.0, 4.0));

    // axes already wider than the cube size are left alone
    let wide = tri([0.0, 0.0, 0.0], [8.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
    let cube = BoundingCube::from_polygon(&wide, 2.0);
    assert_eq!(cube.max, p(8.0, 2.0, 2.0));
}

#[test]
fn test_cube_of_empty_polygon() {
    let cube = BoundingCube::from_polygon(&Polygon::<f64>::new(), 1.5);
    assert_eq!(cube.min, p(0.0, 0.0, 0.0));
    assert_eq!(cube.max, p(1.5, 1.5, 1.5));
}

#[test]
fn test_cube_interference_margin() {
    let tol = Tolerance::default();
    let base = BoundingCube::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0));
    let touching = BoundingCube::new(p(1.0 + 5e-6, 0.0, 0.0), p(2.0, 1.0, 1.0));
    let apart = BoundingCube::new(p(1.1, 0.0, 0.0), p(2.0, 1.0, 1.0));
    let below = BoundingCube::new(p(0.0, 0.0, -3.0), p(1.0, 1.0, -1.0));

    assert!(base.x_interfere(&touching, &tol));
    assert!(touching.x_interfere(&base, &tol));
    assert!(base.interfere(&touching, &tol));
    assert!(!base.x_interfere(&apart, &tol));
    assert!(!apart.x_interfere(&base, &tol));

    assert!(base.x_interfere(&below, &tol));
    assert!(base.y_interfere(&below, &tol));
    assert!(!base.z_interfere(&below, &tol));
    assert!(!base.interfere(&below, &tol));
}

#[test]
fn test_uniform_cube_size_is_widest_intra_polygon_span() {
    let polys = vec![
        tri([0.0, 0.0, 0.0], [1.0, 2.0, 0.5], [0.5, 0.0, 0.0]),
        tri([10.0, 0.0, 0.0], [13.0, 0.1, 0.2], [11.0, 0.05, 0.0]),
    ];
    assert_eq!(uniform_cube_size(&polys), 3.0);
    assert_eq!(uniform_cube_size::<f64>(&[]), 0.0);

    let index = SortedCubes::build(&polys);
    assert_eq!(index.cube_size(), 3.0);
    assert_eq!(index.len(), 2);
    assert_eq!(index[1].max, p(13.0, 3.0, 3.0));
}

#[test]
fn test_index_sorted_by_min_x() {
    let polys = vec![unit_tri_at(10.0), unit_tri_at(0.0), unit_tri_at(5.0)];
    let index = SortedCubes::build(&polys);

    assert_eq!(index.x_sorted(), &[1, 2, 0]);
    assert_eq!(index.cube(0).min, p(10.0, 0.0, 0.0));
    assert_eq!(index.cubes().len(), 3);
}

#[test]
fn test_interfere_x_is_one_sided() {
    let polys = vec![unit_tri_at(10.0), unit_tri_at(0.0), unit_tri_at(5.0)];
    let index = SortedCubes::build(&polys);

    assert_eq!(index.interfere_x(1), &[1]);
    assert_eq!(index.interfere_x(2), &[1, 2]);
    // cubes that end well left of the query are kept
    assert_eq!(index.interfere_x(0), &[1, 2, 0]);
}

#[test]
fn test_interfere_x_includes_touching_cubes() {
    let polys = vec![unit_tri_at(0.0), unit_tri_at(1.0)];
    let index = SortedCubes::build(&polys);
    assert_eq!(index.interfere_x(0), &[0, 1]);
}

#[test]
fn test_nan_cubes_sort_last() {
    let nan_tri = || tri([f64::NAN, 0.0, 0.0], [f64::NAN, 1.0, 0.0], [f64::NAN, 0.0, 1.0]);
    let polys = vec![unit_tri_at(10.0), nan_tri(), unit_tri_at(0.0), nan_tri(), unit_tri_at(5.0)];
    let index = SortedCubes::build(&polys);

    assert_eq!(index.cube_size(), 1.0);
    assert_eq!(index.x_sorted(), &[2, 4, 0, 1, 3]);
    assert_eq!(index.interfere_x(0), &[2, 4, 0]);
    assert_eq!(index.interfere_x(4), &[2, 4]);
    assert!(index.interfere_x(1).is_empty());
}

#[test]
fn test_empty_index() {
    let index = SortedCubes::<f64>::build(&[]);
    assert!(index.is_empty());
    assert_eq!(index.cube_size(), 0.0);
}

#[test]
fn test_broad_phase_never_drops_an_intersecting_pair() {
    let tol = Tolerance::default();
    let config = GeneratorConfig::new(250, 10.0, 1.5).unwrap();
    let polys: Vec<Polygon<f64>> = TriangleGenerator::with_seed(config, 7).generate();
    let index = SortedCubes::build(&polys);

    for i in 0..polys.len() {
        for j in (i + 1)..polys.len() {
            if polys[i].intersect(&polys[j], &tol) {
                assert!(index.interfere_x(i).contains(&j), "pair ({i}, {j})");
                assert!(index.interfere_x(j).contains(&i), "pair ({j}, {i})");
            }
        }
    }
}
