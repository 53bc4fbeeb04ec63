//! Radius profiling: pressure and taper to per-point stroke width.

use crate::options::StrokeOptions;
use crate::points::{total_length, StrokePoint, MIN_RADIUS};

/// Rate at which the smoothed pressure follows its target.
const RATE_OF_PRESSURE_CHANGE: f64 = 0.275;

/// Points within `size * INITIAL_PRESSURE_SPAN` of the start seed the
/// initial pressure.
const INITIAL_PRESSURE_SPAN: f64 = 5.0;

/// Blend used when seeding the initial pressure.
const INITIAL_PRESSURE_BLEND: f64 = 0.5;

/// Pressure change suggested by a step of `spacing` (a velocity proxy).
fn simulated_pressure(prev: f64, spacing: f64) -> f64 {
    let target = (1.0 - spacing).min(1.0);
    (prev + (target - prev) * (spacing * RATE_OF_PRESSURE_CHANGE)).min(1.0)
}

/// Pressure to seed the profile with, so that slow starts do not leave a
/// blob at the stroke's origin.
fn initial_pressure(points: &[StrokePoint], options: &StrokeOptions) -> f64 {
    let size = options.size;
    let mut prev = points[0].pressure;

    for sp in points
        .iter()
        .take_while(|p| p.running_length <= size * INITIAL_PRESSURE_SPAN)
    {
        let spacing = (sp.distance / size).min(1.0);
        let pressure = if options.simulate_pressure {
            simulated_pressure(prev, spacing)
        } else {
            (prev + (sp.pressure - prev) * INITIAL_PRESSURE_BLEND).min(1.0)
        };
        prev += (pressure - prev) * INITIAL_PRESSURE_BLEND;
    }

    prev
}

/// Assign a radius to every stroke point.
///
/// The radius follows `size * easing(0.5 - thinning * (0.5 - pressure))`,
/// narrowed inside the start and end taper zones and never below
/// [`MIN_RADIUS`].
pub fn compute_radii(points: &[StrokePoint], options: &StrokeOptions) -> Vec<StrokePoint> {
    let mut points = points.to_vec();
    if points.is_empty() {
        return points;
    }

    let size = options.size;
    let thinning = options.thinning;
    let total = total_length(&points);
    let radius_for =
        |pressure: f64| size * options.easing.apply(0.5 - thinning * (0.5 - pressure));

    if !options.simulate_pressure && total < size {
        let max_pressure = points.iter().map(|p| p.pressure).fold(0.5, f64::max);
        let radius = radius_for(max_pressure).max(MIN_RADIUS);
        for sp in &mut points {
            sp.pressure = max_pressure;
            sp.radius = radius;
        }
        return points;
    }

    let mut prev_pressure = initial_pressure(&points, options);

    for sp in &mut points {
        if thinning == 0.0 {
            sp.radius = size / 2.0;
            continue;
        }

        let spacing = (sp.distance / size).min(1.0);
        let pressure = if options.simulate_pressure {
            simulated_pressure(prev_pressure, spacing)
        } else {
            (prev_pressure + (sp.pressure - prev_pressure) * (spacing * RATE_OF_PRESSURE_CHANGE))
                .min(1.0)
        };

        sp.radius = radius_for(pressure);
        prev_pressure = pressure;
    }

    let (taper_start, taper_end) = options.taper_distances(total);
    let start_easing = options.start_easing();
    let end_easing = options.end_easing();

    for sp in &mut points {
        let running = sp.running_length;

        let ts = if running < taper_start {
            start_easing.apply(running / taper_start)
        } else {
            1.0
        };

        let te = if total - running < taper_end {
            end_easing.apply((total - running) / taper_end)
        } else {
            1.0
        };

        sp.radius = (sp.radius * ts.min(te)).max(MIN_RADIUS);
    }

    points
}
