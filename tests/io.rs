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

use trisect::generate::{GeneratorConfig, GeneratorError, TriangleGenerator};
use trisect::geometry::{Point3, Polygon};
use trisect::io::{InputError, parse_triangles, read_triangles, write_indices, write_triangles};
use trisect::numeric::Tolerance;
use trisect::{IntersectionDriver, find_intersections};

#[test]
fn test_parse_triangles() {
    let text = "2\n0 0 0  1 0 0  0 1 0\n\n-1.5 2 3e-1\n4 5 6\n7 8 9\n";
    let tris = parse_triangles::<f32>(text, &Tolerance::default()).unwrap();

    assert_eq!(tris.len(), 2);
    assert_eq!(tris[0].vertices()[1], Point3::new(1.0, 0.0, 0.0));
    assert_eq!(tris[1].vertices()[0], Point3::new(-1.5, 2.0, 0.3));
    assert!(tris.iter().all(Polygon::valid));
}

#[test]
fn test_read_from_reader() {
    let input = b"1\n0 0 0 1 0 0 0 1 0\n";
    let tris = read_triangles::<f64, _>(&input[..], &Tolerance::default()).unwrap();
    assert_eq!(tris.len(), 1);
    assert_eq!(tris[0].len(), 3);
}

#[test]
fn test_zero_count() {
    let tris = parse_triangles::<f32>("0", &Tolerance::default()).unwrap();
    assert!(tris.is_empty());
    assert!(find_intersections(&tris).is_empty());
}

#[test]
fn test_malformed_input() {
    let tol = Tolerance::<f32>::default();

    assert!(matches!(parse_triangles("", &tol), Err(InputError::MissingCount)));
    assert!(matches!(parse_triangles("  \n", &tol), Err(InputError::MissingCount)));
    assert!(matches!(
        parse_triangles("abc", &tol),
        Err(InputError::InvalidCount(token)) if token == "abc"
    ));
    assert!(matches!(parse_triangles("-1", &tol), Err(InputError::InvalidCount(_))));
    assert!(matches!(
        parse_triangles("1\n0 0 x 1 0 0 0 1 0", &tol),
        Err(InputError::InvalidCoordinate { triangle: 0, token }) if token == "x"
    ));
    assert!(matches!(
        parse_triangles("2\n0 0 0 1 0 0 0 1 0\n5", &tol),
        Err(InputError::Truncated { expected: 2, found: 1 })
    ));
}

#[test]
fn test_non_finite_coordinates_are_rejected() {
    let tol = Tolerance::<f32>::default();
    for bad in ["nan", "NaN", "inf", "-inf", "infinity"] {
        let text = format!("2\n0 0 0 1 0 0 0 1 0\n{bad} 0 0 1 1 0 0 1 1");
        assert!(
            matches!(
                parse_triangles(&text, &tol),
                Err(InputError::InvalidCoordinate { triangle: 1, ref token }) if token == bad
            ),
            "{bad}"
        );
    }
}

#[test]
fn test_huge_count_reports_truncation() {
    let tol = Tolerance::<f32>::default();
    assert!(matches!(
        parse_triangles("18446744073709551615 0 0 0", &tol),
        Err(InputError::Truncated { expected: usize::MAX, found: 0 })
    ));
    assert!(matches!(
        parse_triangles("999999999999 0 0 0", &tol),
        Err(InputError::Truncated { expected: 999_999_999_999, found: 0 })
    ));
}

#[test]
fn test_error_messages() {
    let err = parse_triangles::<f32>("2\n0 0 0", &Tolerance::default()).unwrap_err();
    assert_eq!(err.to_string(), "expected 2 triangles, input ends inside triangle 0");
    assert_eq!(InputError::MissingCount.to_string(), "missing triangle count");
}

#[test]
fn test_coincident_vertices_collapse_but_keep_index() {
    let text = "3\n\
        0 0 0 4 0 0 0 4 0\n\
        1 1 0 1 1 0 2 1 0\n\
        1 1 -1 2 1 1 0.5 1 1\n";
    let tris = parse_triangles::<f32>(text, &Tolerance::default()).unwrap();

    assert_eq!(tris.len(), 3);
    assert_eq!(tris[1].len(), 2);
    assert!(!tris[1].valid());

    let result = find_intersections(&tris);
    assert_eq!(result.indices().collect::<Vec<_>>(), vec![0, 2]);
}

#[test]
fn test_write_indices() {
    let text = "3\n\
        0 0 0 2 0 0 0 2 0\n\
        50 50 50 51 50 50 50 51 50\n\
        1 0 0 3 0 0 1 2 0\n";
    let tris = parse_triangles::<f32>(text, &Tolerance::default()).unwrap();
    let result = find_intersections(&tris);

    let mut out = Vec::new();
    write_indices(&result, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "0\n2\n");
}

#[test]
fn test_write_triangles_layout() {
    let tris = vec![Polygon::<f32>::from_vertices(vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.5, 0.0, 0.0),
        Point3::new(0.0, -2.0, 0.25),
    ])];
    let mut out = Vec::new();
    write_triangles(&tris, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1\n0 0 0\n1.5 0 0\n0 -2 0.25\n\n");
}

#[test]
fn test_generated_set_reads_back() {
    let config = GeneratorConfig::new(200, 10.0, 1.0).unwrap();
    let generated: Vec<Polygon<f64>> = TriangleGenerator::with_seed(config, 5).generate();

    let mut out = Vec::new();
    write_triangles(&generated, &mut out).unwrap();
    let read = read_triangles::<f64, _>(&out[..], &Tolerance::default()).unwrap();

    assert_eq!(read.len(), generated.len());
    for (a, b) in generated.iter().zip(&read) {
        assert_eq!(a.vertices(), b.vertices());
    }
    assert_eq!(
        IntersectionDriver::new(&generated).run().flags(),
        IntersectionDriver::new(&read).run().flags()
    );
}

#[test]
fn test_generator_respects_bounds_and_size() {
    let config = GeneratorConfig::new(500, 10.0, 1.0).unwrap();
    let mut generator = TriangleGenerator::with_seed(config, 42);
    assert_eq!(generator.config().count, 500);

    let tris: Vec<Polygon<f64>> = generator.generate();
    assert_eq!(tris.len(), 500);
    for tri in &tris {
        assert_eq!(tri.len(), 3);
        for axis in 0..3 {
            let coords: Vec<f64> = tri.vertices().iter().map(|v| v.coord(axis)).collect();
            let lo = coords.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = coords.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            assert!(lo >= 0.0 && hi <= 10.0);
            assert!(hi - lo <= 1.0 + 1e-9);
        }
    }
}

#[test]
fn test_generator_is_reproducible() {
    let config = GeneratorConfig::new(20, 5.0, 0.5).unwrap();
    let a: Vec<Polygon<f32>> = TriangleGenerator::with_seed(config, 9).generate();
    let b: Vec<Polygon<f32>> = TriangleGenerator::with_seed(config, 9).generate();
    let c: Vec<Polygon<f32>> = TriangleGenerator::with_seed(config, 10).generate();

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_generator_config_validation() {
    assert_eq!(
        GeneratorConfig::new(1, 0.0, 0.0),
        Err(GeneratorError::NonPositiveBounds(0.0))
    );
    assert_eq!(
        GeneratorConfig::new(1, 10.0, -1.0),
        Err(GeneratorError::NegativeSize(-1.0))
    );
    assert_eq!(
        GeneratorConfig::new(1, 1.0, 2.0),
        Err(GeneratorError::SizeExceedsBounds { size: 2.0, bounds: 1.0 })
    );
    assert!(GeneratorConfig::new(0, 1.0, 1.0).is_ok());
    assert!(GeneratorConfig::new(1, f64::NAN, 0.5).is_err());
}
