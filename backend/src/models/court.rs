//! Court-to-diagram coordinate transform.
//!
//! Shot locations arrive in feet relative to the centre of the basket. The
//! renderer draws them on a court image whose scale is a fixed number of pixels
//! per foot. The conversion here is purely linear: no origin offset and no
//! rounding, both of which belong to the renderer.

use qtty::Feet;
use serde::{Deserialize, Serialize};

use super::summary::Shot;

/// Scale of the bundled half-court diagram.
pub const DEFAULT_PIXELS_PER_FOOT: f64 = 10.0;

/// Convert a linear court measurement in feet into diagram pixels.
///
/// Non-finite input propagates unchanged (`NaN` in, `NaN` out).
#[inline]
pub fn to_pixels(feet: f64, pixels_per_foot: f64) -> f64 {
    feet * pixels_per_foot
}

/// Error returned when a pixels-per-foot calibration is unusable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScaleError {
    #[error("pixels per foot must be finite, got {0}")]
    NotFinite(f64),
    #[error("pixels per foot must be positive, got {0}")]
    NotPositive(f64),
}

/// A validated pixels-per-foot calibration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct CourtScale {
    pixels_per_foot: f64,
}

impl CourtScale {
    pub fn new(pixels_per_foot: f64) -> Result<Self, ScaleError> {
        if !pixels_per_foot.is_finite() {
            return Err(ScaleError::NotFinite(pixels_per_foot));
        }
        if pixels_per_foot <= 0.0 {
            return Err(ScaleError::NotPositive(pixels_per_foot));
        }
        Ok(Self { pixels_per_foot })
    }

    pub fn pixels_per_foot(&self) -> f64 {
        self.pixels_per_foot
    }

    pub fn feet_to_pixels(&self, feet: Feet) -> f64 {
        to_pixels(feet.value(), self.pixels_per_foot)
    }

    /// Project a shot location onto the diagram, one axis at a time.
    pub fn project(&self, shot: &Shot) -> PixelPoint {
        PixelPoint {
            x: self.feet_to_pixels(shot.location_x),
            y: self.feet_to_pixels(shot.location_y),
        }
    }
}

impl Default for CourtScale {
    fn default() -> Self {
        Self {
            pixels_per_foot: DEFAULT_PIXELS_PER_FOOT,
        }
    }
}

impl TryFrom<f64> for CourtScale {
    type Error = ScaleError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        CourtScale::new(value)
    }
}

impl From<CourtScale> for f64 {
    fn from(scale: CourtScale) -> Self {
        scale.pixels_per_foot
    }
}

/// A position on the diagram, in pixels relative to the basket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

#[cfg(test)]
#[path = "court_tests.rs"]
mod court_tests;
