//! Stroke configuration.

use crate::easing::Easing;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse stroke options: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Invalid value for `{field}`: {value}")]
    InvalidValue { field: &'static str, value: f64 },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// How far a stroke narrows at one of its ends.
///
/// Serialized as `false` (off), `true` (the whole stroke) or a distance.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "TaperRepr", into = "TaperRepr")]
pub enum Taper {
    #[default]
    Off,
    /// Taper across the full length of the stroke.
    Full,
    /// Taper over a fixed distance.
    Distance(f64),
}

impl Taper {
    /// Taper distance for a stroke of the given size and length.
    pub fn resolve(self, size: f64, total_length: f64) -> f64 {
        match self {
            Taper::Off => 0.0,
            Taper::Full => size.max(total_length),
            Taper::Distance(d) => d,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum TaperRepr {
    Flag(bool),
    Distance(f64),
}

impl From<TaperRepr> for Taper {
    fn from(repr: TaperRepr) -> Self {
        match repr {
            TaperRepr::Flag(false) => Taper::Off,
            TaperRepr::Flag(true) => Taper::Full,
            TaperRepr::Distance(d) => Taper::Distance(d),
        }
    }
}

impl From<Taper> for TaperRepr {
    fn from(taper: Taper) -> Self {
        match taper {
            Taper::Off => TaperRepr::Flag(false),
            Taper::Full => TaperRepr::Flag(true),
            Taper::Distance(d) => TaperRepr::Distance(d),
        }
    }
}

/// Cap and taper settings for one end of a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapOptions {
    /// Round cap (`true`) or flat cap (`false`). Ignored when tapered.
    pub cap: bool,
    pub taper: Taper,
    /// Taper falloff curve. `None` picks the end's default curve.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,
}

impl Default for CapOptions {
    fn default() -> Self {
        Self {
            cap: true,
            taper: Taper::Off,
            easing: None,
        }
    }
}

/// Options controlling how raw samples become a stroke outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeOptions {
    /// Base diameter of the stroke.
    pub size: f64,
    /// Effect of pressure on the stroke's width.
    pub thinning: f64,
    /// How aggressively nearby outline points are merged.
    pub smoothing: f64,
    /// How strongly input positions are pulled towards previous points.
    pub streamline: f64,
    /// Derive pressure from drawing speed instead of the input.
    pub simulate_pressure: bool,
    /// Pressure to radius curve.
    pub easing: Easing,
    pub start: CapOptions,
    pub end: CapOptions,
    /// Treat the samples as a finished stroke.
    pub last: bool,
}

impl Default for StrokeOptions {
    fn default() -> Self {
        Self {
            size: 16.0,
            thinning: 0.5,
            smoothing: 0.5,
            streamline: 0.5,
            simulate_pressure: false,
            easing: Easing::Linear,
            start: CapOptions::default(),
            end: CapOptions::default(),
            last: false,
        }
    }
}

impl StrokeOptions {
    /// Options for drawing a line through a handful of vertices in the
    /// hand-drawn style: simulated pressure, no streamlining, finished.
    pub fn line_draw(stroke_width: f64) -> Self {
        Self {
            size: stroke_width,
            thinning: 0.4,
            streamline: 0.0,
            smoothing: 0.5,
            simulate_pressure: true,
            last: true,
            ..Self::default()
        }
    }

    /// Taper falloff curve for the start of the stroke.
    pub fn start_easing(&self) -> Easing {
        self.start.easing.unwrap_or(Easing::EaseOutQuad)
    }

    /// Taper falloff curve for the end of the stroke.
    pub fn end_easing(&self) -> Easing {
        self.end.easing.unwrap_or(Easing::EaseOutCubic)
    }

    /// Resolved `(start, end)` taper distances for a stroke of `total_length`.
    pub fn taper_distances(&self, total_length: f64) -> (f64, f64) {
        (
            self.start.taper.resolve(self.size, total_length),
            self.end.taper.resolve(self.size, total_length),
        )
    }

    /// Check that every numeric option is usable.
    ///
    /// A non-positive `size` is accepted; it produces empty outlines.
    pub fn validate(&self) -> ConfigResult<()> {
        let finite = [
            ("size", self.size),
            ("thinning", self.thinning),
            ("smoothing", self.smoothing),
            ("streamline", self.streamline),
        ];
        if let Some((field, value)) = finite.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::InvalidValue { field, value });
        }

        let unit = [("smoothing", self.smoothing), ("streamline", self.streamline)];
        if let Some((field, value)) = unit.into_iter().find(|(_, v)| !(0.0..=1.0).contains(v)) {
            return Err(ConfigError::InvalidValue { field, value });
        }

        if !(-1.0..=1.0).contains(&self.thinning) {
            return Err(ConfigError::InvalidValue {
                field: "thinning",
                value: self.thinning,
            });
        }

        for (field, taper) in [("start.taper", self.start.taper), ("end.taper", self.end.taper)] {
            if let Taper::Distance(d) = taper {
                if !d.is_finite() || d < 0.0 {
                    return Err(ConfigError::InvalidValue { field, value: d });
                }
            }
        }

        Ok(())
    }

    /// Parse and validate options from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a JSON file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        log::debug!("Loaded stroke options from {}", path.display());
        Self::from_json(&json)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
