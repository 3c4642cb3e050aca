use std::fmt;

use crate::{
    capture::stroke::Stroke,
    foundation::error::SigError,
    glyph::outline::GlyphSet,
    path::{
        bounds::{Bounds, ViewBox},
        convert::stroke_to_path,
    },
    timing::schedule::{TimingEntry, WeightStrategy, build_timing},
};

/// Which producer filled a signature.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Hand-drawn strokes.
    #[default]
    Canvas,
    /// Typed text converted to glyph outlines.
    Type,
}

/// How paths are revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationMode {
    /// Each path is drawn on by its stroke length.
    #[default]
    Draw,
    /// A faint base copy sits underneath while the animated copy is revealed.
    Fill,
}

impl AnimationMode {
    /// Lowercase name, as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Draw => "draw",
            Self::Fill => "fill",
        }
    }
}

impl fmt::Display for AnimationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for AnimationMode {
    type Err = SigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draw" => Ok(Self::Draw),
            "fill" => Ok(Self::Fill),
            other => Err(SigError::validation(format!(
                "unknown animation mode '{other}' (expected draw or fill)"
            ))),
        }
    }
}

/// One animated path and its share of the total duration.
#[derive(Clone, Debug, PartialEq)]
pub struct SignaturePath {
    /// SVG path data.
    pub d: String,
    /// Relative weight for timing.
    pub weight: f64,
}

/// Paths, weights and view window handed from the converters to every consumer.
///
/// Preview and export both read from this one value, so they cannot disagree on geometry or
/// timing.
#[derive(Clone, Debug, PartialEq)]
pub struct Signature {
    /// Producer.
    pub input: InputMode,
    /// Paths in reveal order.
    pub paths: Vec<SignaturePath>,
    /// Display window.
    pub view_box: ViewBox,
}

impl Signature {
    /// Signature with no paths and the fallback window.
    pub fn empty(input: InputMode) -> Self {
        Self {
            input,
            paths: Vec::new(),
            view_box: ViewBox::FALLBACK,
        }
    }

    /// Build from captured strokes. Strokes without samples are dropped.
    #[tracing::instrument(skip(strokes), fields(strokes = strokes.len()))]
    pub fn from_strokes(strokes: &[Stroke]) -> Self {
        let paths = strokes
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| SignaturePath {
                d: stroke_to_path(s),
                weight: WeightStrategy::PointCount.weight(s.len()),
            })
            .collect();
        let bounds = Bounds::of_points(strokes.iter().flat_map(|s| &s.points));
        Self {
            input: InputMode::Canvas,
            paths,
            view_box: ViewBox::from_bounds(bounds),
        }
    }

    /// Build from outlined text. Every path weighs the same.
    #[tracing::instrument(skip(glyphs), fields(paths = glyphs.paths.len()))]
    pub fn from_glyphs(glyphs: &GlyphSet) -> Self {
        Self {
            input: InputMode::Type,
            paths: glyphs
                .paths
                .iter()
                .map(|d| SignaturePath {
                    d: d.clone(),
                    weight: WeightStrategy::Uniform.weight(0),
                })
                .collect(),
            view_box: glyphs.view_box(),
        }
    }

    /// True when there is nothing to animate.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Number of paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Path data strings in order.
    pub fn path_data(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(|p| p.d.as_str())
    }

    /// Per-path timing over `total` seconds, rounded to the precision every consumer uses.
    pub fn timing(&self, total: f64) -> Vec<TimingEntry> {
        let weights: Vec<f64> = self.paths.iter().map(|p| p.weight).collect();
        build_timing(&weights, total)
            .iter()
            .map(TimingEntry::rounded)
            .collect()
    }
}

#[cfg(test)]
#[path = "../tests/unit/signature/signature.rs"]
mod tests;
