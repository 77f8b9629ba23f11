//! Analytic coverage for orthogonal patterns.
//!
//! Every orthogonal pattern is a polyline: a horizontal run of length
//! `d = left + right + 1`, optionally kinked by ±½ at either end to meet a
//! perpendicular edge. The coverage of the unit pixel `x..x+1` under a
//! segment is an exact trapezoid, or two triangles when the segment crosses
//! y = 0 inside the pixel. Signed coverage is returned as an unsigned pair:
//! the first component is the area below the run, the second the area above
//! it.

use nalgebra::Vector2;

use super::pattern::{end_codes, OrthoEnd, SMOOTH_MAX_DISTANCE};

type Point = Vector2<f64>;

#[inline]
fn p(x: f64, y: f64) -> Point {
    Vector2::new(x, y)
}

/// Coverage of pixel `x..x+1` under the segment `p1 -> p2`.
fn area_under_line(p1: Point, p2: Point, x: i32) -> Vector2<f64> {
    let d = p2 - p1;
    let x1 = x as f64;
    let x2 = x1 + 1.0;
    let y1 = p1.y + d.y * (x1 - p1.x) / d.x;
    let y2 = p1.y + d.y * (x2 - p1.x) / d.x;

    let inside = (x1 >= p1.x && x1 < p2.x) || (x2 > p1.x && x2 <= p2.x);
    if !inside {
        return Vector2::zeros();
    }

    let same_sign = 1.0f64.copysign(y1) == 1.0f64.copysign(y2);
    if same_sign || y1.abs() < 1e-4 || y2.abs() < 1e-4 {
        let a = (y1 + y2) / 2.0;
        if a < 0.0 {
            Vector2::new(a.abs(), 0.0)
        } else {
            Vector2::new(0.0, a.abs())
        }
    } else {
        // The segment crosses y = 0 inside the pixel: two triangles.
        let x_cross = -p1.y * d.x / d.y + p1.x;
        let a1 = if x_cross > p1.x {
            y1 * x_cross.fract() / 2.0
        } else {
            0.0
        };
        let a2 = if x_cross < p2.x {
            y2 * (1.0 - x_cross.fract()) / 2.0
        } else {
            0.0
        };
        let a = if a1.abs() > a2.abs() { a1 } else { -a2 };
        if a < 0.0 {
            Vector2::new(a1.abs(), a2.abs())
        } else {
            Vector2::new(a2.abs(), a1.abs())
        }
    }
}

/// Soften short U-shapes toward a square-root response.
///
/// At `d = 0` the revectorized U collapses to a dot; blending toward
/// `sqrt(2a)/2` keeps the transition from the straight pattern continuous.
pub(crate) fn smooth_area(d: f64, a1: Vector2<f64>, a2: Vector2<f64>) -> Vector2<f64> {
    let b1 = (a1 * 2.0).map(f64::sqrt) * 0.5;
    let b2 = (a2 * 2.0).map(f64::sqrt) * 0.5;
    let t = (d / SMOOTH_MAX_DISTANCE).clamp(0.0, 1.0);
    b1.lerp(&a1, t) + b2.lerp(&a2, t)
}

/// Coverage pair for one orthogonal pattern.
///
/// `left` and `right` are the (already quadratically spaced) distances to
/// the two line ends; `offset` is the subsample bias applied to the kink
/// intercepts. The evaluated pixel is `left..left+1`.
pub fn area_ortho(pattern: usize, left: i32, right: i32, offset: f64) -> Vector2<f64> {
    let d = (left + right + 1) as f64;
    let o1 = 0.5 + offset;
    let o2 = 0.5 + offset - 1.0;
    let (lc, rc) = end_codes(pattern);

    match (OrthoEnd::from_code(lc), OrthoEnd::from_code(rc)) {
        // Straight runs and fully closed ends produce no revectorization.
        (OrthoEnd::None, OrthoEnd::None)
        | (OrthoEnd::Both, OrthoEnd::None)
        | (OrthoEnd::None, OrthoEnd::Both)
        | (OrthoEnd::Both, OrthoEnd::Both) => Vector2::zeros(),

        // L shapes only produce area on their majority half so they stay
        // continuous with the unfiltered straight pattern.
        (OrthoEnd::Positive, OrthoEnd::None) => {
            if left <= right {
                area_under_line(p(0.0, o2), p(d / 2.0, 0.0), left)
            } else {
                Vector2::zeros()
            }
        }
        (OrthoEnd::None, OrthoEnd::Positive) => {
            if left >= right {
                area_under_line(p(d / 2.0, 0.0), p(d, o2), left)
            } else {
                Vector2::zeros()
            }
        }
        (OrthoEnd::Negative, OrthoEnd::None) => {
            if left <= right {
                area_under_line(p(0.0, o1), p(d / 2.0, 0.0), left)
            } else {
                Vector2::zeros()
            }
        }
        (OrthoEnd::None, OrthoEnd::Negative) => {
            if left >= right {
                area_under_line(p(d / 2.0, 0.0), p(d, o1), left)
            } else {
                Vector2::zeros()
            }
        }

        // U shapes: two half-trapezoids, smoothed while the U is short.
        (OrthoEnd::Positive, OrthoEnd::Positive) => {
            let a1 = area_under_line(p(0.0, o2), p(d / 2.0, 0.0), left);
            let a2 = area_under_line(p(d / 2.0, 0.0), p(d, o2), left);
            smooth_area(d, a1, a2)
        }
        (OrthoEnd::Negative, OrthoEnd::Negative) => {
            let a1 = area_under_line(p(0.0, o1), p(d / 2.0, 0.0), left);
            let a2 = area_under_line(p(d / 2.0, 0.0), p(d, o1), left);
            smooth_area(d, a1, a2)
        }

        // Z shapes: with a subsample offset, blend the fully offset line
        // with the split L interpretation; pixels at the center of a Z see
        // the whole pattern while pixels near the ends see an L, and the
        // blend keeps the two detections from diverging.
        (OrthoEnd::Negative, OrthoEnd::Positive) => {
            if offset.abs() > 0.0 {
                let a1 = area_under_line(p(0.0, o1), p(d, o2), left);
                let a2 = area_under_line(p(0.0, o1), p(d / 2.0, 0.0), left)
                    + area_under_line(p(d / 2.0, 0.0), p(d, o2), left);
                (a1 + a2) / 2.0
            } else {
                area_under_line(p(0.0, o1), p(d, o2), left)
            }
        }
        (OrthoEnd::Positive, OrthoEnd::Negative) => {
            if offset.abs() > 0.0 {
                let a1 = area_under_line(p(0.0, o2), p(d, o1), left);
                let a2 = area_under_line(p(0.0, o2), p(d / 2.0, 0.0), left)
                    + area_under_line(p(d / 2.0, 0.0), p(d, o1), left);
                (a1 + a2) / 2.0
            } else {
                area_under_line(p(0.0, o2), p(d, o1), left)
            }
        }

        // One end open, the other closed: a single full-length segment.
        (OrthoEnd::Both, OrthoEnd::Positive) => area_under_line(p(0.0, o1), p(d, o2), left),
        (OrthoEnd::Positive, OrthoEnd::Both) => area_under_line(p(0.0, o2), p(d, o1), left),
        (OrthoEnd::Both, OrthoEnd::Negative) => area_under_line(p(0.0, o2), p(d, o1), left),
        (OrthoEnd::Negative, OrthoEnd::Both) => area_under_line(p(0.0, o1), p(d, o2), left),
    }
}
