//! Sampled coverage for diagonal patterns.
//!
//! Diagonal revectorization lines do not admit the tidy trapezoid split of
//! the orthogonal case, so coverage is estimated by point sampling a
//! `SAMPLES_DIAG × SAMPLES_DIAG` grid inside the two pixels that straddle
//! the diagonal. Unlike orthogonal patterns, the pattern without crossing
//! edges must still be filtered, and the exact endpoints of the open-ended
//! patterns are unknowable from the local window, so each ambiguous pattern
//! averages the coverage of two endpoint hypotheses.

use nalgebra::Vector2;

use super::pattern::{end_codes, DiagEnd, SAMPLES_DIAG};

type Point = Vector2<f64>;

#[inline]
fn p(x: f64, y: f64) -> Point {
    Vector2::new(x, y)
}

/// Which side of the oriented line `p1 -> p2` the point falls on.
fn inside(p1: Point, p2: Point, point: Point) -> bool {
    if p1 == p2 {
        return true;
    }
    let mid = (p1 + p2) / 2.0;
    let a = p2.y - p1.y;
    let b = p1.x - p2.x;
    a * (point.x - mid.x) + b * (point.y - mid.y) > 0.0
}

/// Fraction of the unit pixel at `(px, py)` on the positive side of the
/// line, estimated on a regular sample grid.
fn pixel_coverage(p1: Point, p2: Point, px: i32, py: i32) -> f64 {
    let mut count = 0usize;
    let last = (SAMPLES_DIAG - 1) as f64;
    for sx in 0..SAMPLES_DIAG {
        for sy in 0..SAMPLES_DIAG {
            let sample = p(px as f64 + sx as f64 / last, py as f64 + sy as f64 / last);
            if inside(p1, p2, sample) {
                count += 1;
            }
        }
    }
    count as f64 / (SAMPLES_DIAG * SAMPLES_DIAG) as f64
}

/// Coverage of the pixel pair adjacent to the diagonal for one endpoint
/// hypothesis. The subsample offset shifts an endpoint only when its end
/// carries a crossing edge.
fn hypothesis_area(
    pattern: usize,
    mut p1: Point,
    mut p2: Point,
    left: i32,
    offset: Point,
) -> Vector2<f64> {
    let (lc, rc) = end_codes(pattern);
    if DiagEnd::from_code(lc) != DiagEnd::None {
        p1 += offset;
    }
    if DiagEnd::from_code(rc) != DiagEnd::None {
        p2 += offset;
    }
    let a1 = pixel_coverage(p1, p2, 1 + left, left);
    let a2 = pixel_coverage(p1, p2, 1 + left, 1 + left);
    Vector2::new(1.0 - a1, a2)
}

/// Coverage pair for one diagonal pattern at distances `(left, right)`.
pub fn area_diag(pattern: usize, left: i32, right: i32, offset: Point) -> Vector2<f64> {
    let d = (left + right + 1) as f64;
    let dd = p(d, d);

    // Endpoint hypotheses per pattern; two entries are averaged.
    let one = |p1: Point, p2: Point| hypothesis_area(pattern, p1, p2, left, offset);
    let two = |p1a: Point, p2a: Point, p1b: Point, p2b: Point| {
        (hypothesis_area(pattern, p1a, p2a, left, offset)
            + hypothesis_area(pattern, p1b, p2b, left, offset))
            / 2.0
    };

    let (lc, rc) = end_codes(pattern);
    match (DiagEnd::from_code(lc), DiagEnd::from_code(rc)) {
        (DiagEnd::None, DiagEnd::None) => {
            two(p(1.0, 1.0), p(1.0, 1.0) + dd, p(1.0, 0.0), p(1.0, 0.0) + dd)
        }
        (DiagEnd::Vertical, DiagEnd::None) => {
            two(p(1.0, 0.0), p(0.0, 0.0) + dd, p(1.0, 0.0), p(1.0, 0.0) + dd)
        }
        (DiagEnd::None, DiagEnd::Horizontal) => {
            two(p(0.0, 0.0), p(1.0, 0.0) + dd, p(1.0, 0.0), p(1.0, 0.0) + dd)
        }
        (DiagEnd::Vertical, DiagEnd::Horizontal) => one(p(1.0, 0.0), p(1.0, 0.0) + dd),
        (DiagEnd::Horizontal, DiagEnd::None) => {
            two(p(1.0, 1.0), p(0.0, 0.0) + dd, p(1.0, 1.0), p(1.0, 0.0) + dd)
        }
        (DiagEnd::Both, DiagEnd::None) => {
            two(p(1.0, 1.0), p(0.0, 0.0) + dd, p(1.0, 0.0), p(1.0, 0.0) + dd)
        }
        (DiagEnd::Horizontal, DiagEnd::Horizontal) => one(p(1.0, 1.0), p(1.0, 0.0) + dd),
        (DiagEnd::Both, DiagEnd::Horizontal) => {
            two(p(1.0, 1.0), p(1.0, 0.0) + dd, p(1.0, 0.0), p(1.0, 0.0) + dd)
        }
        (DiagEnd::None, DiagEnd::Vertical) => {
            two(p(0.0, 0.0), p(1.0, 1.0) + dd, p(1.0, 0.0), p(1.0, 1.0) + dd)
        }
        (DiagEnd::Vertical, DiagEnd::Vertical) => one(p(1.0, 0.0), p(1.0, 1.0) + dd),
        (DiagEnd::None, DiagEnd::Both) => {
            two(p(0.0, 0.0), p(1.0, 1.0) + dd, p(1.0, 0.0), p(1.0, 0.0) + dd)
        }
        (DiagEnd::Vertical, DiagEnd::Both) => {
            two(p(1.0, 0.0), p(1.0, 1.0) + dd, p(1.0, 0.0), p(1.0, 0.0) + dd)
        }
        (DiagEnd::Horizontal, DiagEnd::Vertical) => one(p(1.0, 1.0), p(1.0, 1.0) + dd),
        (DiagEnd::Both, DiagEnd::Vertical) => {
            two(p(1.0, 1.0), p(1.0, 1.0) + dd, p(1.0, 0.0), p(1.0, 1.0) + dd)
        }
        (DiagEnd::Horizontal, DiagEnd::Both) => {
            two(p(1.0, 1.0), p(1.0, 1.0) + dd, p(1.0, 1.0), p(1.0, 0.0) + dd)
        }
        (DiagEnd::Both, DiagEnd::Both) => {
            two(p(1.0, 1.0), p(1.0, 1.0) + dd, p(1.0, 0.0), p(1.0, 0.0) + dd)
        }
    }
}
