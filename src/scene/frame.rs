use std::fmt::Write as _;

use crate::{
    animation::ease::Ease,
    foundation::core::Rgba8,
    scene::model::{PreviewScene, SceneNode},
    timing::schedule::TimingEntry,
};

/// Length of the opacity fade at the start of every reveal, in seconds.
pub const REVEAL_FADE: f64 = 0.01;

/// State of one revealed stroke at an instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealState {
    /// Eased fraction of the path length that is visible, in `[0, 1]`.
    pub progress: f64,
    /// Opacity, in `[0, 1]`.
    pub opacity: f64,
}

impl RevealState {
    /// Sample a reveal window at `t` seconds.
    pub fn at(timing: TimingEntry, ease: Ease, t: f64) -> Self {
        if t < timing.delay {
            return Self {
                progress: 0.0,
                opacity: 0.0,
            };
        }
        let local = t - timing.delay;
        let linear = if timing.duration > 0.0 {
            (local / timing.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        Self {
            progress: ease.apply(linear),
            opacity: (local / REVEAL_FADE).clamp(0.0, 1.0),
        }
    }
}

/// A preview scene sampled at one instant.
#[derive(Clone, Copy, Debug)]
pub struct SceneFrame<'a> {
    scene: &'a PreviewScene,
    time: f64,
}

impl<'a> SceneFrame<'a> {
    /// Sample `scene` at `time` seconds after the animation started.
    pub fn new(scene: &'a PreviewScene, time: f64) -> Self {
        Self {
            scene,
            time: time.max(0.0),
        }
    }

    /// Seconds since the animation started.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Sampled scene.
    pub fn scene(&self) -> &'a PreviewScene {
        self.scene
    }

    /// Whether every animation has settled.
    pub fn is_settled(&self) -> bool {
        self.time >= self.scene.duration + REVEAL_FADE
    }

    /// Reveal state of every revealed stroke, in paint order.
    pub fn reveals(&self) -> Vec<RevealState> {
        self.scene
            .reveal_timing()
            .into_iter()
            .map(|timing| RevealState::at(timing, self.scene.ease, self.time))
            .collect()
    }

    /// Current width of the wipe mask, if the scene has one.
    pub fn wipe_width(&self) -> Option<f64> {
        self.scene.wipe.map(|wipe| {
            let linear = if wipe.duration > 0.0 {
                (self.time / wipe.duration).clamp(0.0, 1.0)
            } else {
                1.0
            };
            wipe.rect.width() * self.scene.ease.apply(linear)
        })
    }

    /// Static SVG document of this instant, sized by the view window.
    pub fn to_svg(&self) -> String {
        self.write_svg(None)
    }

    /// Static SVG document of this instant with an explicit pixel size.
    pub fn to_svg_sized(&self, width: u32, height: u32) -> String {
        self.write_svg(Some((width, height)))
    }

    fn write_svg(&self, size: Option<(u32, u32)>) -> String {
        let scene = self.scene;
        let mut out = String::new();
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}" fill="none""#,
            scene.view_box
        );
        if let Some((w, h)) = size {
            let _ = write!(out, r#" width="{w}" height="{h}""#);
        }
        out.push_str(">\n");

        let mask_id = format!("wipe-{}", scene.replay_key);
        if let (Some(wipe), Some(visible)) = (scene.wipe, self.wipe_width()) {
            let r = wipe.rect;
            let _ = writeln!(
                out,
                r#"  <mask id="{mask_id}" maskUnits="userSpaceOnUse" x="{x}" y="{y}" width="{w}" height="{h}">"#,
                x = r.x0,
                y = r.y0,
                w = r.width(),
                h = r.height(),
            );
            let _ = writeln!(
                out,
                r#"    <rect x="{}" y="{}" width="{}" height="{}" fill="black"/>"#,
                r.x0,
                r.y0,
                r.width(),
                r.height()
            );
            let _ = writeln!(
                out,
                r#"    <rect x="{}" y="{}" width="{visible}" height="{}" fill="white"/>"#,
                r.x0,
                r.y0,
                r.height()
            );
            out.push_str("  </mask>\n");
        }

        let mut reveal = self.reveals().into_iter();
        let mut wiped = Vec::new();
        for node in &scene.nodes {
            match node {
                SceneNode::BaseStroke {
                    d,
                    color,
                    width,
                    opacity,
                } => stroke_element(&mut out, d, *color, *width, *opacity, None),
                SceneNode::RevealStroke {
                    d,
                    length,
                    color,
                    width,
                    ..
                } => {
                    let Some(state) = reveal.next() else {
                        continue;
                    };
                    if state.opacity <= 0.0 {
                        continue;
                    }
                    let dash = (state.progress < 1.0).then(|| (state.progress * length, *length));
                    stroke_element(&mut out, d, *color, *width, state.opacity, dash);
                }
                SceneNode::BaseFill { d, color, opacity } => {
                    fill_element(&mut out, "  ", d, *color, *opacity);
                }
                SceneNode::WipeFill { d, color } => wiped.push((d, *color)),
            }
        }

        if !wiped.is_empty() {
            let _ = writeln!(out, r#"  <g mask="url(#{mask_id})">"#);
            for (d, color) in wiped {
                fill_element(&mut out, "    ", d, color, 1.0);
            }
            out.push_str("  </g>\n");
        }

        out.push_str("</svg>\n");
        out
    }
}

fn rgb_hex(c: Rgba8) -> String {
    format!("#{:02X}{:02X}{:02X}", c.r, c.g, c.b)
}

fn stroke_element(
    out: &mut String,
    d: &str,
    color: Rgba8,
    width: f64,
    opacity: f64,
    dash: Option<(f64, f64)>,
) {
    let opacity = opacity * (f64::from(color.a) / 255.0);
    let _ = write!(
        out,
        r#"  <path d="{d}" stroke="{}" stroke-width="{width}" stroke-linecap="round" stroke-linejoin="round" stroke-opacity="{opacity}""#,
        rgb_hex(color)
    );
    if let Some((visible, length)) = dash {
        let _ = write!(out, r#" stroke-dasharray="{visible} {length}""#);
    }
    out.push_str("/>\n");
}

fn fill_element(out: &mut String, indent: &str, d: &str, color: Rgba8, opacity: f64) {
    let opacity = opacity * (f64::from(color.a) / 255.0);
    let _ = writeln!(
        out,
        r#"{indent}<path d="{d}" fill="{}" fill-opacity="{opacity}"/>"#,
        rgb_hex(color)
    );
}

#[cfg(test)]
#[path = "../../tests/unit/scene/frame.rs"]
mod tests;
