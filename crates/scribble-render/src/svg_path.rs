//! Smooth SVG path data through a sequence of points.

use kurbo::Point;
use scribble_core::StrokePoint;

/// Coordinates are rounded to this many parts per unit.
const PRECISION: f64 = 1e4;

fn round(v: f64) -> f64 {
    // Adding zero turns -0 into 0
    (v * PRECISION).round() / PRECISION + 0.0
}

/// A point formatted as `x,y `.
pub(crate) fn precise(p: Point) -> String {
    format!("{},{} ", round(p.x), round(p.y))
}

/// The midpoint of `a` and `b` formatted as `x,y `.
fn average(a: Point, b: Point) -> String {
    precise(a.midpoint(b))
}

/// Path data for a smooth curve through `points`.
///
/// Interior vertices become quadratic control points joined at segment
/// midpoints, so the curve has no corners. A closed path wraps back through
/// the first two points and ends with `Z`; an open path ends with a line to
/// the last point. Fewer than two points give an empty string.
pub fn emit_smooth_path(points: &[Point], closed: bool) -> String {
    let len = points.len();
    if len < 2 {
        return String::new();
    }

    let (a, b) = (points[0], points[1]);
    if len == 2 {
        return format!("M{}L{}", precise(a), precise(b));
    }

    let result: String = points[2..]
        .windows(2)
        .map(|pair| average(pair[0], pair[1]))
        .collect();

    if closed {
        format!(
            "M{}Q{}{}T{}{}{}Z",
            average(a, b),
            precise(b),
            average(b, points[2]),
            result,
            average(points[len - 1], a),
            average(a, b),
        )
    } else {
        format!(
            "M{}Q{}{}{}{}L{}",
            precise(a),
            precise(b),
            average(b, points[2]),
            if len > 3 { "T" } else { "" },
            result,
            precise(points[len - 1]),
        )
    }
}

/// Path data for the centerline of resampled stroke points.
pub fn emit_stroke_points_path(points: &[StrokePoint], closed: bool) -> String {
    let centerline: Vec<Point> = points.iter().map(|p| p.point).collect();
    emit_smooth_path(&centerline, closed)
}
