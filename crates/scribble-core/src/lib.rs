//! Scribble Core Library
//!
//! Geometry pipeline for pressure-sensitive freehand strokes: raw pointer
//! samples are resampled, given per-point radii, offset into left and right
//! tracks and closed with caps into a single outline polygon.

pub mod easing;
pub mod geometry;
pub mod options;
pub mod outline;
pub mod points;
pub mod radius;
pub mod resample;
pub mod tracks;

pub use easing::Easing;
pub use options::{CapOptions, ConfigError, ConfigResult, StrokeOptions, Taper};
pub use outline::{build_outline, get_stroke, line_draw_outline, Outline};
pub use points::{RawSample, StrokePoint, DEFAULT_PRESSURE, MIN_RADIUS};
pub use radius::compute_radii;
pub use resample::resample;
pub use tracks::{build_tracks, OutlineTracks};
