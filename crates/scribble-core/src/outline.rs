//! Outline composition: tracks plus caps, or a dot, as one closed ring.

use crate::geometry::{per, rotate_around, unit_or, FIXED_PI};
use crate::options::StrokeOptions;
use crate::points::{total_length, RawSample, StrokePoint};
use crate::radius::compute_radii;
use crate::resample::resample;
use crate::tracks::{build_tracks, OutlineTracks};
use kurbo::{Point, Vec2};
use std::f64::consts::TAU;

/// Vertices of the polygon drawn for a single-point stroke.
const DOT_SEGMENTS: usize = 12;
/// Points in a round start cap.
const START_CAP_STEPS: usize = 8;
/// Points in a round end cap.
const END_CAP_STEPS: usize = 29;
/// Sweep of the round end cap, in half turns. Sweeping past a half circle
/// keeps sharp final turns from cutting into the cap.
const END_CAP_HALF_TURNS: f64 = 3.0;
/// Flat caps are drawn as a sliver this much narrower than the stroke.
const FLAT_CAP_INSET: f64 = 0.01;

/// A closed ring of outline points: left track, end cap, reversed right
/// track, start cap.
pub type Outline = Vec<Point>;

fn dot(center: Point, toward: Point, radius: f64) -> Outline {
    let start = center + per(unit_or(center - toward, Vec2::new(0.0, 1.0))) * -radius;
    (1..=DOT_SEGMENTS)
        .map(|k| rotate_around(start, center, TAU * k as f64 / DOT_SEGMENTS as f64))
        .collect()
}

fn round_start_cap(first_right: Point, center: Point) -> Vec<Point> {
    (1..=START_CAP_STEPS)
        .map(|k| rotate_around(first_right, center, FIXED_PI * k as f64 / START_CAP_STEPS as f64))
        .collect()
}

fn flat_start_cap(first_left: Point, first_right: Point, center: Point) -> Vec<Point> {
    let corners = first_left - first_right;
    let outer = corners * 0.5;
    let inner = corners * (0.5 + FLAT_CAP_INSET);
    vec![center - outer, center - inner, center + inner, center + outer]
}

fn round_end_cap(center: Point, direction: Vec2, radius: f64) -> Vec<Point> {
    let start = center + direction * radius;
    (1..=END_CAP_STEPS)
        .map(|k| {
            let t = k as f64 / END_CAP_STEPS as f64;
            rotate_around(start, center, FIXED_PI * END_CAP_HALF_TURNS * t)
        })
        .collect()
}

fn flat_end_cap(center: Point, direction: Vec2, radius: f64) -> Vec<Point> {
    let outer = direction * radius;
    let inner = direction * radius * (1.0 - FLAT_CAP_INSET);
    vec![center + outer, center + inner, center - inner, center - outer]
}

/// Build the closed outline polygon of a stroke whose radii are set.
///
/// Returns an empty outline for empty input or a non-positive size.
pub fn build_outline(points: &[StrokePoint], options: &StrokeOptions) -> Outline {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Vec::new();
    };
    if options.size <= 0.0 {
        return Vec::new();
    }

    let single = points.len() == 1;
    let (taper_start, taper_end) = options.taper_distances(total_length(points));
    let tapered_start = taper_start > 0.0;
    let tapered_end = taper_end > 0.0;

    let first_point = first.point;
    let last_point = if single {
        first.point + Vec2::new(1.0, 1.0)
    } else {
        last.point
    };

    if single && (!(tapered_start || tapered_end) || options.last) {
        log::trace!("Single-point stroke, drawing dot of radius {:.2}", first.radius);
        return dot(first_point, last_point, first.radius);
    }

    let OutlineTracks { left, right } = build_tracks(points, options);

    let start_cap = match (left.first(), right.first()) {
        _ if tapered_start || (tapered_end && single) => Vec::new(),
        (Some(_), Some(&r)) if options.start.cap => round_start_cap(r, first_point),
        (Some(&l), Some(&r)) => flat_start_cap(l, r, first_point),
        _ => Vec::new(),
    };

    let direction = -per(last.vector);
    let end_cap = if tapered_end || (tapered_start && single) {
        vec![last_point]
    } else if options.end.cap {
        round_end_cap(last_point, direction, last.radius)
    } else {
        flat_end_cap(last_point, direction, last.radius)
    };

    let mut outline = Vec::with_capacity(left.len() + end_cap.len() + right.len() + start_cap.len());
    outline.extend(left);
    outline.extend(end_cap);
    outline.extend(right.into_iter().rev());
    outline.extend(start_cap);
    outline
}

/// Run the whole pipeline: resample, profile radii, build the outline.
pub fn get_stroke(samples: &[RawSample], options: &StrokeOptions) -> Outline {
    let points = compute_radii(&resample(samples, options), options);
    build_outline(&points, options)
}

/// Outline for a hand-drawn line through `vertices`.
pub fn line_draw_outline(vertices: &[Point], stroke_width: f64) -> Outline {
    let samples: Vec<RawSample> = vertices.iter().copied().map(RawSample::from).collect();
    get_stroke(&samples, &StrokeOptions::line_draw(stroke_width))
}
