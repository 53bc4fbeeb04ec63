//! Scribble Render Library
//!
//! Turns stroke outlines into SVG path data: a smooth quadratic path, or a
//! clean and hand-drawn pair with seeded jitter.

mod rough;
mod stroke;
mod svg_path;

pub use rough::{emit_rough_path, SeededRng};
pub use stroke::{
    freehand_path, line_draw_path, line_indicator_path, outline_to_bez_path, rough_freehand_path,
};
pub use svg_path::{emit_smooth_path, emit_stroke_points_path};
