use kurbo::ParamCurveArclen;

use crate::{
    animation::ease::Ease,
    export::options::ExportOptions,
    foundation::{
        core::{BezPath, Rect, Rgba8},
        error::{SigError, SigResult},
    },
    path::bounds::ViewBox,
    signature::{AnimationMode, InputMode, Signature},
    timing::schedule::TimingEntry,
};

const ARCLEN_ACCURACY: f64 = 1e-3;

/// One element of the preview scene.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    /// Static faint stroke shown from time zero.
    BaseStroke {
        /// Path data.
        d: String,
        /// Stroke color.
        color: Rgba8,
        /// Stroke width.
        width: f64,
        /// Stroke opacity.
        opacity: f64,
    },
    /// Stroke drawn on along its length during its timing window.
    RevealStroke {
        /// Path data.
        d: String,
        /// Arc length of the path.
        length: f64,
        /// Stroke color.
        color: Rgba8,
        /// Stroke width.
        width: f64,
        /// Reveal window in seconds.
        timing: TimingEntry,
    },
    /// Static faint fill shown from time zero.
    BaseFill {
        /// Path data.
        d: String,
        /// Fill color.
        color: Rgba8,
        /// Fill opacity.
        opacity: f64,
    },
    /// Fill uncovered by the wipe mask.
    WipeFill {
        /// Path data.
        d: String,
        /// Fill color.
        color: Rgba8,
    },
}

/// Left-to-right mask wipe over the whole view window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wipe {
    /// Region the mask covers.
    pub rect: Rect,
    /// Time for the mask to reach full width, in seconds.
    pub duration: f64,
}

/// In-memory animated scene for the live preview.
///
/// Built from the same [`Signature`] and [`ExportOptions`] as the exported component and
/// carrying the same rounded timing, so sampling it reproduces what the exported text
/// animates.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewScene {
    /// Display window.
    pub view_box: ViewBox,
    /// Elements in paint order.
    pub nodes: Vec<SceneNode>,
    /// Mask wipe over every [`SceneNode::WipeFill`], typed fill mode only.
    pub wipe: Option<Wipe>,
    /// Easing of every reveal.
    pub ease: Ease,
    /// Time at which every animation has settled, in seconds.
    pub duration: f64,
    /// Bumped on every restart so stale frames can be told apart.
    pub replay_key: u64,
}

impl PreviewScene {
    /// Build the scene for `signature` styled by `options`.
    ///
    /// An empty signature gives an empty scene with the fallback window.
    #[tracing::instrument(skip(signature, options), fields(paths = signature.len(), mode = %options.animation_mode))]
    pub fn build(signature: &Signature, options: &ExportOptions) -> SigResult<Self> {
        options.validate()?;

        let total = options.total_duration(signature.input);
        let mode = options.animation_mode;
        let mut nodes = Vec::new();
        let mut wipe = None;

        match (signature.input, mode) {
            (InputMode::Type, AnimationMode::Fill) => {
                for d in signature.path_data() {
                    nodes.push(SceneNode::BaseFill {
                        d: d.to_string(),
                        color: options.base_stroke_color,
                        opacity: options.base_opacity,
                    });
                }
                for d in signature.path_data() {
                    nodes.push(SceneNode::WipeFill {
                        d: d.to_string(),
                        color: options.fill_color,
                    });
                }
                if !signature.is_empty() {
                    wipe = Some(Wipe {
                        rect: signature.view_box.rect(),
                        duration: total,
                    });
                }
            }
            _ => {
                let timing = signature.timing(total);
                for (path, timing) in signature.paths.iter().zip(timing) {
                    if mode == AnimationMode::Fill {
                        nodes.push(SceneNode::BaseStroke {
                            d: path.d.clone(),
                            color: options.base_stroke_color,
                            width: options.stroke_width,
                            opacity: options.base_opacity,
                        });
                    }
                    nodes.push(SceneNode::RevealStroke {
                        d: path.d.clone(),
                        length: path_length(&path.d)?,
                        color: options.stroke_color,
                        width: options.stroke_width,
                        timing,
                    });
                }
            }
        }

        let duration = nodes
            .iter()
            .filter_map(|n| match n {
                SceneNode::RevealStroke { timing, .. } => Some(timing.end()),
                _ => None,
            })
            .chain(wipe.map(|w| w.duration))
            .fold(0.0, f64::max);

        tracing::debug!(nodes = nodes.len(), duration, "preview scene built");
        Ok(Self {
            view_box: signature.view_box,
            nodes,
            wipe,
            ease: options.easing,
            duration,
            replay_key: 0,
        })
    }

    /// True when the scene draws nothing.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Timing of every revealed stroke, in paint order.
    pub fn reveal_timing(&self) -> Vec<TimingEntry> {
        self.nodes
            .iter()
            .filter_map(|n| match n {
                SceneNode::RevealStroke { timing, .. } => Some(*timing),
                _ => None,
            })
            .collect()
    }
}

/// Arc length of SVG path data.
pub fn path_length(d: &str) -> SigResult<f64> {
    let path = BezPath::from_svg(d)
        .map_err(|e| SigError::validation(format!("invalid path data '{d}': {e}")))?;
    Ok(path
        .segments()
        .map(|seg| seg.arclen(ARCLEN_ACCURACY))
        .sum())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
