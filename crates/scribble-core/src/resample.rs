//! Point resampling: raw samples to streamlined stroke points.

use crate::geometry::unit_or;
use crate::options::StrokeOptions;
use crate::points::{RawSample, StrokePoint};
use kurbo::Point;

/// Leading samples lighter than this are pen-down noise.
const MIN_START_PRESSURE: f64 = 0.025;
/// Trailing samples lighter than this are pen-up noise.
const MIN_END_PRESSURE: f64 = 0.01;
/// Samples within `size / MERGE_DISTANCE_DIVISOR` of an end are folded into it.
const MERGE_DISTANCE_DIVISOR: f64 = 3.0;
/// Pressure given to every point when pressure is simulated.
const SIMULATED_PRESSURE: f64 = 0.5;
/// Pressure of the placeholder point when every sample was stripped.
const STRIPPED_PRESSURE: f64 = 0.15;
/// Leading candidates are held back until the stroke is `size` long.
const WARMUP_SAMPLES: usize = 4;
/// Subdivisions used to densify a two-sample stroke.
const DENSIFY_STEPS: usize = 4;

#[derive(Debug, Clone, Copy)]
struct Sample {
    point: Point,
    pressure: f64,
}

impl From<&RawSample> for Sample {
    fn from(raw: &RawSample) -> Self {
        Self {
            point: raw.point(),
            pressure: raw.pressure(),
        }
    }
}

/// Samples after noise stripping and end merging, plus whether the tail
/// has settled.
struct Prepared {
    samples: Vec<Sample>,
    complete: bool,
}

/// Strip low-pressure noise from both ends of the input.
fn strip_lifts(samples: &[Sample]) -> &[Sample] {
    let start = samples
        .iter()
        .position(|s| s.pressure >= MIN_START_PRESSURE)
        .unwrap_or(samples.len());
    let samples = &samples[start..];
    let end = samples
        .iter()
        .rposition(|s| s.pressure >= MIN_END_PRESSURE)
        .map_or(0, |i| i + 1);
    &samples[..end]
}

/// Fold samples crowding the first and last sample into them.
fn merge_ends(samples: &[Sample], options: &StrokeOptions) -> Prepared {
    let merge_dist2 = (options.size / MERGE_DISTANCE_DIVISOR).powi(2);

    let mut head = samples[0];
    let folded = samples[1..]
        .iter()
        .take_while(|s| s.point.distance_squared(head.point) <= merge_dist2)
        .count();
    for s in &samples[1..=folded] {
        head.pressure = head.pressure.max(s.pressure);
    }

    let mut body = Vec::with_capacity(samples.len() - folded);
    body.push(head);
    body.extend_from_slice(&samples[1 + folded..]);

    let last_index = body.len() - 1;
    let mut tail = body[last_index];
    let folded_tail = body[..last_index]
        .iter()
        .rev()
        .take_while(|s| s.point.distance_squared(tail.point) <= merge_dist2)
        .count();
    let keep = last_index - folded_tail;
    for s in &body[keep..last_index] {
        tail.pressure = tail.pressure.max(s.pressure);
    }

    let mut merged = body[..keep].to_vec();
    merged.push(tail);

    let settled = merged.len() > 1
        && merged[merged.len() - 1]
            .point
            .distance_squared(merged[merged.len() - 2].point)
            < options.size.powi(2);
    let complete =
        options.last || !options.simulate_pressure || settled || folded_tail > 0;

    Prepared {
        samples: merged,
        complete,
    }
}

/// Insert evenly spaced samples between the two ends of a two-sample
/// stroke so that tapers have something to work with.
fn densify(first: Sample, last: Sample) -> Vec<Sample> {
    let mut samples = Vec::with_capacity(DENSIFY_STEPS + 1);
    samples.push(first);
    for i in 1..=DENSIFY_STEPS {
        let t = i as f64 / DENSIFY_STEPS as f64;
        samples.push(Sample {
            point: first.point.lerp(last.point, t),
            pressure: first.pressure + (last.pressure - first.pressure) * t,
        });
    }
    samples
}

/// Turn raw samples into stroke points with pressure, direction and
/// running length. Radii are left at 1; see [`crate::compute_radii`].
pub fn resample(samples: &[RawSample], options: &StrokeOptions) -> Vec<StrokePoint> {
    let Some(first_raw) = samples.first() else {
        return Vec::new();
    };

    let simulate = options.simulate_pressure;
    let size = options.size;
    let all: Vec<Sample> = samples.iter().map(Sample::from).collect();
    let kept = if simulate { &all[..] } else { strip_lifts(&all) };

    if kept.is_empty() {
        log::debug!(
            "All {} samples below pressure thresholds, emitting placeholder point",
            samples.len()
        );
        let pressure = if simulate {
            SIMULATED_PRESSURE
        } else {
            STRIPPED_PRESSURE
        };
        return vec![StrokePoint::origin(first_raw.point(), pressure)];
    }

    let Prepared {
        samples: mut pts,
        complete,
    } = merge_ends(kept, options);

    if pts.len() == 2 && simulate {
        pts = densify(pts[0], pts[1]);
    }

    if complete && options.streamline > 0.0 {
        pts.push(pts[pts.len() - 1]);
    }

    // Weight given to each new sample against the previous point
    let t = 0.15 + (1.0 - options.streamline) * 0.85;
    let pressure_of = |s: &Sample| if simulate { SIMULATED_PRESSURE } else { s.pressure };

    let mut points = vec![StrokePoint::origin(pts[0].point, pressure_of(&pts[0]))];
    let mut total_length = 0.0;
    // Distance walked by every candidate, suppressed ones included
    let mut warmup_length = 0.0;
    let n = pts.len();

    for (i, sample) in pts.iter().enumerate().skip(1) {
        let prev = points[points.len() - 1];
        let point = if t <= 0.0 || (options.last && i == n - 1) {
            sample.point
        } else {
            sample.point.lerp(prev.point, 1.0 - t)
        };

        if point == prev.point {
            continue;
        }

        let distance = point.distance(prev.point);

        warmup_length += distance;
        if i < WARMUP_SAMPLES && warmup_length < size {
            continue;
        }

        total_length += distance;
        points.push(StrokePoint {
            point,
            input: sample.point,
            vector: unit_or(prev.point - point, prev.vector),
            pressure: pressure_of(sample),
            distance,
            running_length: total_length,
            radius: 1.0,
        });
    }

    if points.len() > 1 {
        points[0].vector = points[1].vector;
    }

    if total_length < 1.0 {
        let max_pressure = points.iter().map(|p| p.pressure).fold(0.5, f64::max);
        for p in &mut points {
            p.pressure = max_pressure;
        }
    }

    log::trace!(
        "Resampled {} samples into {} stroke points ({:.2} long)",
        samples.len(),
        points.len(),
        total_length
    );

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize, spacing: f64) -> Vec<RawSample> {
        (0..n)
            .map(|i| RawSample::new(i as f64 * spacing, 0.0))
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(resample(&[], &StrokeOptions::default()).is_empty());
    }

    #[test]
    fn test_single_sample() {
        let points = resample(&[RawSample::new(5.0, 5.0)], &StrokeOptions::default());
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].point, Point::new(5.0, 5.0));
        assert!(points[0].running_length.abs() < f64::EPSILON);
        assert!((points[0].pressure - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_all_samples_stripped() {
        let samples = [
            RawSample::with_pressure(1.0, 1.0, 0.0),
            RawSample::with_pressure(2.0, 2.0, 0.005),
        ];
        let points = resample(&samples, &StrokeOptions::default());
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].point, Point::new(1.0, 1.0));
        assert!((points[0].pressure - STRIPPED_PRESSURE).abs() < f64::EPSILON);
        assert!((points[0].radius - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_low_pressure_ends_stripped() {
        let samples = [
            RawSample::with_pressure(0.0, 0.0, 0.01),
            RawSample::with_pressure(20.0, 0.0, 0.6),
            RawSample::with_pressure(40.0, 0.0, 0.6),
            RawSample::with_pressure(60.0, 0.0, 0.6),
            RawSample::with_pressure(80.0, 0.0, 0.001),
        ];
        let options = StrokeOptions {
            last: true,
            ..StrokeOptions::default()
        };
        let points = resample(&samples, &options);
        assert_eq!(points[0].point, Point::new(20.0, 0.0));
        assert_eq!(points[points.len() - 1].point, Point::new(60.0, 0.0));
    }

    #[test]
    fn test_near_start_samples_merge_with_max_pressure() {
        let samples = [
            RawSample::with_pressure(0.0, 0.0, 0.3),
            RawSample::with_pressure(1.0, 0.0, 0.9),
            RawSample::with_pressure(30.0, 0.0, 0.3),
            RawSample::with_pressure(60.0, 0.0, 0.3),
        ];
        let points = resample(&samples, &StrokeOptions::default());
        assert_eq!(points[0].point, Point::new(0.0, 0.0));
        assert!((points[0].pressure - 0.9).abs() < f64::EPSILON);
        assert!(points.iter().all(|p| p.input != Point::new(1.0, 0.0)));
    }

    #[test]
    fn test_two_samples_simulated() {
        let samples = [
            RawSample::with_pressure(0.0, 0.0, 0.5),
            RawSample::with_pressure(20.0, 0.0, 0.5),
        ];
        let options = StrokeOptions {
            simulate_pressure: true,
            ..StrokeOptions::default()
        };
        let points = resample(&samples, &options);

        // Still in progress: no tail duplicate, so the streamlined end lags
        // behind the last sample. The quarter sample at x=15 is kept once
        // the walked distance (2.875 + 5.75 + 8.625) reaches the size.
        let xs: Vec<f64> = points.iter().map(|p| p.point.x).collect();
        assert_eq!(xs.len(), 3);
        assert!(xs[0].abs() < 1e-9);
        assert!((xs[1] - 8.625).abs() < 1e-9);
        assert!((xs[2] - 15.165625).abs() < 1e-9);
        assert!((points[1].running_length - 8.625).abs() < 1e-9);
        assert!((points[2].running_length - 15.165625).abs() < 1e-9);
    }

    #[test]
    fn test_two_samples_simulated_complete() {
        let samples = [
            RawSample::with_pressure(0.0, 0.0, 0.5),
            RawSample::with_pressure(20.0, 0.0, 0.5),
        ];
        // A finished stroke takes its final sample verbatim
        let options = StrokeOptions {
            simulate_pressure: true,
            last: true,
            ..StrokeOptions::default()
        };
        let points = resample(&samples, &options);

        assert_eq!(points[0].point, Point::new(0.0, 0.0));
        assert_eq!(points[points.len() - 1].point, Point::new(20.0, 0.0));
        assert!((points[points.len() - 1].running_length - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_warmup_counts_suppressed_distance() {
        let options = StrokeOptions {
            streamline: 0.0,
            ..StrokeOptions::default()
        };
        // x=6 is held back (walked 6). x=12 lies 12 from the origin, so the
        // walk reaches 18 and it is kept, even though 12 alone is short of
        // the size of 16
        let points = resample(&line(6, 6.0), &options);
        let xs: Vec<f64> = points.iter().map(|p| p.point.x).collect();
        assert_eq!(xs, vec![0.0, 12.0, 18.0, 24.0, 30.0]);
        assert!((points[1].running_length - 12.0).abs() < 1e-9);
        assert!((points[4].running_length - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_running_length_monotonic() {
        let samples: Vec<RawSample> = (0..40)
            .map(|i| {
                let a = i as f64 * 0.3;
                RawSample::new(a.cos() * 50.0 + i as f64 * 4.0, a.sin() * 50.0)
            })
            .collect();
        let points = resample(&samples, &StrokeOptions::default());

        assert!(points[0].running_length.abs() < f64::EPSILON);
        for pair in points.windows(2) {
            assert!(pair[1].running_length >= pair[0].running_length);
            let step = pair[1].running_length - pair[0].running_length;
            assert!((step - pair[1].distance).abs() < 1e-9);
        }
    }

    #[test]
    fn test_vectors_are_unit_and_point_back() {
        let points = resample(&line(10, 10.0), &StrokeOptions::default());
        assert!(points.len() > 2);
        for p in &points {
            assert!((p.vector.hypot() - 1.0).abs() < 1e-9);
            assert!(p.vector.x < 0.0);
        }
        assert_eq!(points[0].vector, points[1].vector);
    }

    #[test]
    fn test_last_point_verbatim_when_complete() {
        let options = StrokeOptions {
            last: true,
            ..StrokeOptions::default()
        };
        let points = resample(&line(10, 10.0), &options);
        assert_eq!(points[points.len() - 1].point, Point::new(90.0, 0.0));
    }

    #[test]
    fn test_stationary_stroke_uses_max_pressure() {
        let samples = [
            RawSample::with_pressure(0.0, 0.0, 0.2),
            RawSample::with_pressure(0.1, 0.0, 0.8),
            RawSample::with_pressure(0.2, 0.0, 0.4),
        ];
        let points = resample(&samples, &StrokeOptions::default());
        assert!(points.iter().all(|p| (p.pressure - 0.8).abs() < f64::EPSILON));
    }

    #[test]
    fn test_deterministic() {
        let samples = line(25, 7.0);
        let options = StrokeOptions::default();
        assert_eq!(resample(&samples, &options), resample(&samples, &options));
    }
}
