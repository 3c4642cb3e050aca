use crate::foundation::{
    core::{Rgba8, Vec2},
    error::{SigError, SigResult},
};

/// Sampling and live-ink constants for the drawing pad.
///
/// Every field has a default, so a JSON config may name only what it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PadConfig {
    /// Samples closer than this to the last accepted one are dropped.
    pub min_distance: f64,
    /// Speed (units/ms) at which the ink reaches its thinnest width.
    pub velocity_max: f64,
    /// Width at or above `velocity_max`.
    pub min_width: f64,
    /// Width at rest.
    pub max_width: f64,
    /// Primary ink color.
    pub line_color: Rgba8,
    /// Secondary offset stroke drawn beneath the primary one.
    pub ghost: GhostStyle,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            min_distance: 0.35,
            velocity_max: 2.5,
            min_width: 1.2,
            max_width: 3.6,
            line_color: Rgba8::rgb(0x2C, 0x28, 0x26),
            ghost: GhostStyle::default(),
        }
    }
}

impl PadConfig {
    /// Reject values that would make widths or the velocity normalization meaningless.
    pub fn validate(&self) -> SigResult<()> {
        if !self.min_distance.is_finite() || self.min_distance < 0.0 {
            return Err(SigError::validation("min_distance must be finite and >= 0"));
        }
        if !self.velocity_max.is_finite() || self.velocity_max <= 0.0 {
            return Err(SigError::validation("velocity_max must be finite and > 0"));
        }
        if !(self.min_width.is_finite() && self.max_width.is_finite())
            || self.min_width <= 0.0
            || self.min_width > self.max_width
        {
            return Err(SigError::validation(
                "stroke widths must be finite with 0 < min_width <= max_width",
            ));
        }
        self.ghost.validate()
    }

    /// Line width for a sample moving at `velocity`.
    ///
    /// Width falls linearly from `max_width` at rest to `min_width` at `velocity_max`; faster
    /// samples clamp to `min_width`.
    pub fn width_for_velocity(&self, velocity: f64) -> f64 {
        let factor = (velocity / self.velocity_max).clamp(0.0, 1.0);
        self.max_width - (self.max_width - self.min_width) * factor
    }
}

/// Paper-indentation effect: a wider, faint, offset copy of each segment.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GhostStyle {
    /// Whether the ghost stroke is drawn.
    pub enabled: bool,
    /// Ghost ink color.
    pub color: Rgba8,
    /// Ghost opacity in `[0, 1]`.
    pub alpha: f64,
    /// Added to the primary width.
    pub extra_width: f64,
    /// Offset applied to every ghost coordinate.
    pub offset: Vec2,
}

impl Default for GhostStyle {
    fn default() -> Self {
        Self {
            enabled: false,
            color: Rgba8::rgb(0x1C, 0x1A, 0x19),
            alpha: 0.2,
            extra_width: 1.6,
            offset: Vec2::new(0.6, 0.8),
        }
    }
}

impl GhostStyle {
    fn validate(&self) -> SigResult<()> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(SigError::validation("ghost alpha must be in [0, 1]"));
        }
        if !self.extra_width.is_finite() || self.extra_width < 0.0 {
            return Err(SigError::validation("ghost extra_width must be finite and >= 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/draw/config.rs"]
mod tests;
