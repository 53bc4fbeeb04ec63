//! Outline tracks: the left and right offset polylines of a stroke.

use crate::geometry::{lerp_vec, per, rotate_around, FIXED_PI};
use crate::options::StrokeOptions;
use crate::points::{total_length, StrokePoint};
use kurbo::{Point, Vec2};

/// A point turning back against the previous direction (dot product below
/// this) is a sharp corner.
const SHARP_CORNER_DPR: f64 = 0.0;
/// The next point is about to turn sharply when its dot product with this
/// point's direction falls below this.
const UPCOMING_CORNER_DPR: f64 = 0.2;
/// Corners turning less than this get a single soft offset instead of a fan.
const SOFT_CORNER_DPR: f64 = -0.62;
/// Points in a sharp-corner fan, per track.
const CORNER_FAN_STEPS: usize = 13;

/// Left and right offset polylines, both in forward arc-length order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutlineTracks {
    pub left: Vec<Point>,
    pub right: Vec<Point>,
}

/// State threaded through the single pass over stroke points.
struct TrackState {
    prev_vector: Vec2,
    last_left: Point,
    last_right: Point,
    /// The previous point already produced corner geometry.
    prev_sharp: bool,
    tracks: OutlineTracks,
}

/// Per-stroke values the pass needs at every point.
struct TrackParams {
    total_length: f64,
    min_distance2: f64,
    last_index: usize,
}

impl TrackState {
    fn new(first: &StrokePoint, capacity: usize) -> Self {
        Self {
            prev_vector: first.vector,
            last_left: first.point,
            last_right: first.point,
            prev_sharp: false,
            tracks: OutlineTracks {
                left: Vec::with_capacity(capacity),
                right: Vec::with_capacity(capacity),
            },
        }
    }

    fn push(&mut self, left: Point, right: Point) {
        self.tracks.left.push(left);
        self.tracks.right.push(right);
    }

    fn advance(
        mut self,
        index: usize,
        sp: &StrokePoint,
        next: Option<&StrokePoint>,
        params: &TrackParams,
    ) -> Self {
        let prev_dpr = sp.vector.dot(self.prev_vector);
        let (next_vector, next_dpr) = match next {
            Some(next) => (next.vector, next.vector.dot(sp.vector)),
            None => (sp.vector, 1.0),
        };

        let is_sharp = prev_dpr < SHARP_CORNER_DPR && !self.prev_sharp;
        let is_next_sharp = next_dpr < UPCOMING_CORNER_DPR;

        if is_sharp || is_next_sharp {
            let (left, right) = if next_dpr > SOFT_CORNER_DPR
                && params.total_length - sp.running_length > sp.radius
            {
                self.soft_corner(sp, next_vector)
            } else {
                self.sharp_corner(sp)
            };
            self.last_left = left;
            self.last_right = right;
            if is_next_sharp {
                self.prev_sharp = true;
            }
            return self;
        }

        self.prev_sharp = false;

        if index == 0 || index == params.last_index {
            let offset = per(sp.vector) * sp.radius;
            self.push(sp.point - offset, sp.point + offset);
            return self;
        }

        let offset = per(lerp_vec(next_vector, sp.vector, next_dpr)) * sp.radius;

        let left = sp.point - offset;
        if index <= 1 || self.last_left.distance_squared(left) > params.min_distance2 {
            self.tracks.left.push(left);
            self.last_left = left;
        }

        let right = sp.point + offset;
        if index <= 1 || self.last_right.distance_squared(right) > params.min_distance2 {
            self.tracks.right.push(right);
            self.last_right = right;
        }

        self.prev_vector = sp.vector;
        self
    }

    /// Offset along the incoming direction, on the side the turn bends away from.
    fn soft_corner(&mut self, sp: &StrokePoint, next_vector: Vec2) -> (Point, Point) {
        let offset = self.prev_vector * sp.radius;
        let (left, right) = if self.prev_vector.cross(next_vector) < 0.0 {
            (sp.point + offset, sp.point - offset)
        } else {
            (sp.point - offset, sp.point + offset)
        };
        self.push(left, right);
        (left, right)
    }

    /// Fan around the raw input position, the two tracks turning in
    /// opposite directions.
    fn sharp_corner(&mut self, sp: &StrokePoint) -> (Point, Point) {
        let offset = per(self.prev_vector * sp.radius);
        let start = sp.input - offset;
        let mut last = (start, start);

        for step in 0..CORNER_FAN_STEPS {
            let t = step as f64 / CORNER_FAN_STEPS as f64;
            let left = rotate_around(start, sp.input, FIXED_PI * t);
            let right = rotate_around(start, sp.input, FIXED_PI - FIXED_PI * t);
            self.push(left, right);
            last = (left, right);
        }

        last
    }
}

/// Walk the stroke once, producing left and right offset tracks.
///
/// Returns empty tracks for empty input or a non-positive size.
pub fn build_tracks(points: &[StrokePoint], options: &StrokeOptions) -> OutlineTracks {
    let size = options.size;
    let Some(first) = points.first() else {
        return OutlineTracks::default();
    };
    if size <= 0.0 {
        return OutlineTracks::default();
    }

    let params = TrackParams {
        total_length: total_length(points),
        min_distance2: (size * options.smoothing).powi(2),
        last_index: points.len() - 1,
    };

    points
        .iter()
        .enumerate()
        .fold(TrackState::new(first, points.len()), |state, (i, sp)| {
            state.advance(i, sp, points.get(i + 1), &params)
        })
        .tracks
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stroke points at the given positions with a uniform radius.
    fn stroke_points(positions: &[(f64, f64)], radius: f64) -> Vec<StrokePoint> {
        let mut points: Vec<StrokePoint> = Vec::new();
        let mut running = 0.0;
        for &(x, y) in positions {
            let point = Point::new(x, y);
            let (vector, distance) = match points.last() {
                Some(prev) => {
                    let d = prev.point - point;
                    (d / d.hypot(), d.hypot())
                }
                None => (Vec2::new(1.0, 1.0), 0.0),
            };
            running += distance;
            points.push(StrokePoint {
                point,
                input: point,
                vector,
                pressure: 0.5,
                distance,
                running_length: running,
                radius,
            });
        }
        points[0].vector = points[1].vector;
        points
    }

    #[test]
    fn test_empty_and_zero_size() {
        assert_eq!(build_tracks(&[], &StrokeOptions::default()), OutlineTracks::default());

        let points = stroke_points(&[(0.0, 0.0), (20.0, 0.0)], 8.0);
        let options = StrokeOptions {
            size: 0.0,
            ..StrokeOptions::default()
        };
        assert_eq!(build_tracks(&points, &options), OutlineTracks::default());
    }

    #[test]
    fn test_straight_stroke_one_offset_per_point() {
        let points = stroke_points(
            &[(0.0, 0.0), (20.0, 0.0), (40.0, 0.0), (60.0, 0.0), (80.0, 0.0)],
            8.0,
        );
        let tracks = build_tracks(&points, &StrokeOptions::default());

        assert_eq!(tracks.left.len(), 5);
        assert_eq!(tracks.right.len(), 5);
        for (left, right) in tracks.left.iter().zip(&tracks.right) {
            assert!((left.y.abs() - 8.0).abs() < 1e-9);
            assert!((right.y.abs() - 8.0).abs() < 1e-9);
            assert!(left.y * right.y < 0.0);
        }
    }

    #[test]
    fn test_reversal_fans_sharp_corner() {
        let points = stroke_points(
            &[
                (0.0, 0.0),
                (20.0, 0.0),
                (40.0, 0.0),
                (60.0, 0.0),
                (40.0, 0.0),
                (20.0, 0.0),
                (0.0, 0.0),
            ],
            8.0,
        );
        let tracks = build_tracks(&points, &StrokeOptions::default());

        // Six plain offsets plus a full fan at the turning point
        assert_eq!(tracks.left.len(), 6 + CORNER_FAN_STEPS);
        assert_eq!(tracks.right.len(), 6 + CORNER_FAN_STEPS);

        // The fan hugs the turning point at the stroke's radius
        let corner = Point::new(60.0, 0.0);
        for p in &tracks.left[3..3 + CORNER_FAN_STEPS] {
            assert!((p.distance(corner) - 8.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_gentle_turn_uses_soft_corner() {
        // A right angle: next_dpr is 0, above the soft threshold
        let points = stroke_points(
            &[(0.0, 0.0), (20.0, 0.0), (40.0, 0.0), (40.0, 20.0), (40.0, 40.0), (40.0, 60.0)],
            8.0,
        );
        let tracks = build_tracks(&points, &StrokeOptions::default());
        assert!(tracks.left.len() < 6 + CORNER_FAN_STEPS);

        // Offset along the incoming direction, not a fan
        assert_eq!(tracks.left[2], Point::new(48.0, 0.0));
        assert_eq!(tracks.right[2], Point::new(32.0, 0.0));
    }

    #[test]
    fn test_mirrored_turn_swaps_soft_corner_sides() {
        let points = stroke_points(
            &[(0.0, 0.0), (20.0, 0.0), (40.0, 0.0), (40.0, -20.0), (40.0, -40.0), (40.0, -60.0)],
            8.0,
        );
        let tracks = build_tracks(&points, &StrokeOptions::default());

        assert_eq!(tracks.left[2], Point::new(32.0, 0.0));
        assert_eq!(tracks.right[2], Point::new(48.0, 0.0));
    }

    #[test]
    fn test_smoothing_drops_crowded_offsets() {
        let positions: Vec<(f64, f64)> = (0..20).map(|i| (i as f64 * 2.0, 0.0)).collect();
        let points = stroke_points(&positions, 8.0);
        let tracks = build_tracks(&points, &StrokeOptions::default());
        assert!(tracks.left.len() < points.len());
        assert!(tracks.right.len() < points.len());
    }
}
