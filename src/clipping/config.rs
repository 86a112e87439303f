//! Initial settings for a clip plane.

use crate::error::{ClipPlaneError, Result};
use crate::geometry::{Axis, ClipSide};

/// Settings applied when a [`ClipPlane`](super::ClipPlane) is created
#[derive(Debug, Clone, PartialEq)]
pub struct ClipPlaneConfig {
    /// Axis the plane starts perpendicular to
    pub axis: Axis,
    /// Half-space removed initially
    pub side: ClipSide,
    /// Whether clipping starts active
    pub enabled: bool,
    /// Thickness of the capping edge drawn where the plane cuts geometry
    pub capping_strength: f64,
    /// Capping and proxy outline color (RGB in [0, 1])
    pub color: [f64; 3],
}

impl Default for ClipPlaneConfig {
    fn default() -> Self {
        Self {
            axis: Axis::X,
            side: ClipSide::Negative,
            enabled: true,
            capping_strength: 0.003,
            color: [0.0, 0.0, 0.0],
        }
    }
}

impl ClipPlaneConfig {
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_clip_side(mut self, side: ClipSide) -> Self {
        self.side = side;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_capping_strength(mut self, strength: f64) -> Self {
        self.capping_strength = strength;
        self
    }

    pub fn with_color(mut self, color: [f64; 3]) -> Self {
        self.color = color;
        self
    }

    /// Checks that the capping strength and color are usable
    pub fn validate(&self) -> Result<()> {
        if !self.capping_strength.is_finite() || self.capping_strength < 0.0 {
            return Err(ClipPlaneError::InvalidConfig(format!(
                "capping strength must be a non-negative number, got {}",
                self.capping_strength
            )));
        }
        if let Some(bad) = self.color.iter().find(|c| !(0.0..=1.0).contains(*c)) {
            return Err(ClipPlaneError::InvalidConfig(format!(
                "color components must lie in [0, 1], got {}",
                bad
            )));
        }
        Ok(())
    }
}
