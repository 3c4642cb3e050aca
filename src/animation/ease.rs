use std::{fmt, str::FromStr};

use crate::foundation::error::SigError;

/// Named easing curves understood by the animation runtime that consumes exported components.
///
/// The serialized names are the runtime's own (`"easeOut"`, `"circIn"`, ...), so the same
/// value drives in-memory preview sampling and the emitted `ease:` literal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ease {
    /// Identity.
    Linear,
    /// `cubic-bezier(0.42, 0, 1, 1)`.
    EaseIn,
    /// `cubic-bezier(0, 0, 0.58, 1)`.
    #[default]
    EaseOut,
    /// `cubic-bezier(0.42, 0, 0.58, 1)`.
    EaseInOut,
    /// Circular ease-in.
    CircIn,
    /// Circular ease-out.
    CircOut,
    /// Circular ease-in-out.
    CircInOut,
}

impl Ease {
    /// Every supported easing.
    pub const ALL: [Ease; 7] = [
        Ease::Linear,
        Ease::EaseIn,
        Ease::EaseOut,
        Ease::EaseInOut,
        Ease::CircIn,
        Ease::CircOut,
        Ease::CircInOut,
    ];

    /// Runtime name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseIn => "easeIn",
            Self::EaseOut => "easeOut",
            Self::EaseInOut => "easeInOut",
            Self::CircIn => "circIn",
            Self::CircOut => "circOut",
            Self::CircInOut => "circInOut",
        }
    }

    /// Map linear progress `t` to eased progress. `t` is clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Self::CircIn => circ_in(t),
            Self::CircOut => 1.0 - circ_in(1.0 - t),
            Self::CircInOut => {
                if t < 0.5 {
                    circ_in(2.0 * t) / 2.0
                } else {
                    (2.0 - circ_in(2.0 * (1.0 - t))) / 2.0
                }
            }
        }
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ease {
    type Err = SigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.name() == s)
            .ok_or_else(|| SigError::validation(format!("unknown easing '{s}'")))
    }
}

fn circ_in(t: f64) -> f64 {
    1.0 - (1.0 - t * t).max(0.0).sqrt()
}

// CSS-style timing curve through (0,0), (x1,y1), (x2,y2), (1,1). x is monotonic in the curve
// parameter for control x values in [0, 1], so bisection converges.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    fn axis(p1: f64, p2: f64, u: f64) -> f64 {
        let inv = 1.0 - u;
        3.0 * inv * inv * u * p1 + 3.0 * inv * u * u * p2 + u * u * u
    }

    let (mut lo, mut hi) = (0.0f64, 1.0f64);
    let mut u = x;
    for _ in 0..64 {
        let cx = axis(x1, x2, u);
        if (cx - x).abs() < 1e-12 {
            break;
        }
        if cx < x {
            lo = u;
        } else {
            hi = u;
        }
        u = 0.5 * (lo + hi);
    }
    axis(y1, y2, u)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
