//! Input samples and resampled stroke points.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Pressure assumed for samples captured without one.
pub const DEFAULT_PRESSURE: f64 = 0.5;

/// Smallest radius a stroke point may have.
pub const MIN_RADIUS: f64 = 0.01;

/// A raw pointer sample, in capture order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    pub x: f64,
    pub y: f64,
    /// Pen pressure in `[0, 1]`, if the device reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
}

impl RawSample {
    /// Create a sample without pressure.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, pressure: None }
    }

    /// Create a sample with pressure.
    pub fn with_pressure(x: f64, y: f64, pressure: f64) -> Self {
        Self {
            x,
            y,
            pressure: Some(pressure),
        }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Reported pressure, or [`DEFAULT_PRESSURE`].
    pub fn pressure(&self) -> f64 {
        self.pressure.unwrap_or(DEFAULT_PRESSURE)
    }
}

impl From<Point> for RawSample {
    fn from(point: Point) -> Self {
        Self::new(point.x, point.y)
    }
}

impl From<(f64, f64)> for RawSample {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64, f64)> for RawSample {
    fn from((x, y, pressure): (f64, f64, f64)) -> Self {
        Self::with_pressure(x, y, pressure)
    }
}

/// A resampled point along a stroke's centerline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokePoint {
    /// Streamlined position.
    pub point: Point,
    /// Position of the sample this point was derived from.
    pub input: Point,
    /// Unit direction from this point back to the previous one.
    pub vector: Vec2,
    pub pressure: f64,
    /// Distance to the previous stroke point.
    pub distance: f64,
    /// Arc length from the first stroke point.
    pub running_length: f64,
    /// Half-width of the stroke here.
    pub radius: f64,
}

impl StrokePoint {
    /// A point at the very start of a stroke.
    pub(crate) fn origin(point: Point, pressure: f64) -> Self {
        Self {
            point,
            input: point,
            vector: Vec2::new(1.0, 1.0),
            pressure,
            distance: 0.0,
            running_length: 0.0,
            radius: 1.0,
        }
    }
}

/// Total arc length of a resampled stroke.
pub fn total_length(points: &[StrokePoint]) -> f64 {
    points.last().map_or(0.0, |p| p.running_length)
}
