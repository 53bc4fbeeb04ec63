//! Stroke-level helpers: run the geometry pipeline and emit path data.

use crate::rough::emit_rough_path;
use crate::svg_path::{emit_smooth_path, emit_stroke_points_path};
use kurbo::{BezPath, Point};
use scribble_core::{get_stroke, line_draw_outline, resample, RawSample, StrokeOptions};

/// Filled path data for a freehand stroke.
pub fn freehand_path(samples: &[RawSample], options: &StrokeOptions) -> String {
    emit_smooth_path(&get_stroke(samples, options), true)
}

/// Clean and hand-drawn path data for a freehand stroke.
pub fn rough_freehand_path(
    seed: &str,
    samples: &[RawSample],
    options: &StrokeOptions,
) -> (String, String) {
    emit_rough_path(seed, &get_stroke(samples, options), options.size)
}

/// Filled path data for a hand-drawn line through `vertices`.
pub fn line_draw_path(vertices: &[Point], stroke_width: f64) -> String {
    emit_smooth_path(&line_draw_outline(vertices, stroke_width), true)
}

/// Thin centerline path used to indicate a hand-drawn line's selection.
pub fn line_indicator_path(vertices: &[Point], stroke_width: f64) -> String {
    let samples: Vec<RawSample> = vertices.iter().copied().map(RawSample::from).collect();
    let points = resample(&samples, &StrokeOptions::line_draw(stroke_width));
    emit_stroke_points_path(&points, false)
}

/// The outline as a closed polygon for renderers that take kurbo paths.
pub fn outline_to_bez_path(outline: &[Point]) -> BezPath {
    let mut path = BezPath::new();

    let Some((first, rest)) = outline.split_first() else {
        return path;
    };

    path.move_to(*first);
    for point in rest {
        path.line_to(*point);
    }
    path.close_path();

    path
}
