//! Vector helpers shared by the stroke pipeline.

use kurbo::{Affine, Point, Rect, Vec2};

/// Slightly more than π. Half-turn fans rotated by exactly π leave
/// hairline seams in browser rasterizers.
pub const FIXED_PI: f64 = std::f64::consts::PI + 0.0001;

/// Perpendicular of a vector: `(x, y) -> (y, -x)`.
pub fn per(v: Vec2) -> Vec2 {
    Vec2::new(v.y, -v.x)
}

/// Normalize `v`, or return `fallback` when `v` has no usable length.
pub fn unit_or(v: Vec2, fallback: Vec2) -> Vec2 {
    let len = v.hypot();
    if len > 0.0 && len.is_finite() {
        v / len
    } else {
        fallback
    }
}

/// Interpolate from `a` towards `b`.
pub fn lerp_vec(a: Vec2, b: Vec2, t: f64) -> Vec2 {
    a + (b - a) * t
}

/// Rotate `point` around `center` by `angle` radians.
pub fn rotate_around(point: Point, center: Point, angle: f64) -> Point {
    Affine::rotate_about(angle, center) * point
}

/// Bounding box of a point set. Empty input gives `Rect::ZERO`.
pub fn bounds(points: &[Point]) -> Rect {
    let Some(first) = points.first() else {
        return Rect::ZERO;
    };

    points
        .iter()
        .skip(1)
        .fold(Rect::from_points(*first, *first), |rect, p| rect.union_pt(*p))
}
