use crate::{
    animation::ease::Ease,
    foundation::{
        core::Rgba8,
        error::{SigError, SigResult},
    },
    signature::{AnimationMode, InputMode},
};

/// Styling and timing shared by the live preview scene and the exported component.
///
/// Both consumers read the same value, so one set of options always yields matching output.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Name of the emitted component function.
    pub component_name: String,
    /// Color of the animated stroke.
    pub stroke_color: Rgba8,
    /// Color of the fill-mode base copy.
    pub base_stroke_color: Rgba8,
    /// Opacity of the fill-mode base copy.
    pub base_opacity: f64,
    /// Stroke width of every path.
    pub stroke_width: f64,
    /// Total animation time for hand-drawn input, in seconds.
    pub duration: f64,
    /// Easing of every reveal.
    pub easing: Ease,
    /// Reveal style.
    pub animation_mode: AnimationMode,
    /// Fill color of typed glyphs revealed by the wipe.
    pub fill_color: Rgba8,
    /// Total animation time for typed input, in seconds.
    pub type_duration: f64,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            component_name: "SignatureMotion".to_string(),
            stroke_color: Rgba8::rgb(0x2C, 0x28, 0x26),
            base_stroke_color: Rgba8::rgb(0x6E, 0x66, 0x5F),
            base_opacity: 0.45,
            stroke_width: 2.2,
            duration: 2.6,
            easing: Ease::EaseOut,
            animation_mode: AnimationMode::Draw,
            fill_color: Rgba8::rgb(0xF7, 0xF5, 0xF3),
            type_duration: 4.0,
        }
    }
}

impl ExportOptions {
    /// Total animation time for a signature of the given input mode.
    pub fn total_duration(&self, input: InputMode) -> f64 {
        match input {
            InputMode::Canvas => self.duration,
            InputMode::Type => self.type_duration,
        }
    }

    /// Reject values that would produce an invalid component.
    pub fn validate(&self) -> SigResult<()> {
        let mut chars = self.component_name.chars();
        let valid_start = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$');
        if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
            return Err(SigError::validation(format!(
                "component name '{}' is not a valid identifier",
                self.component_name
            )));
        }
        for (name, v) in [
            ("duration", self.duration),
            ("type_duration", self.type_duration),
            ("stroke_width", self.stroke_width),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(SigError::validation(format!("{name} must be finite and > 0")));
            }
        }
        if !(0.0..=1.0).contains(&self.base_opacity) {
            return Err(SigError::validation("base_opacity must be in [0, 1]"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/options.rs"]
mod tests;
