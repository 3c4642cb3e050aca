use crate::foundation::core::{BezPath, Point, Rgba8, Vec2};

/// One piece of live ink: a straight lead-in or a quadratic through a raw sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    /// Straight line, used for the first segment of a stroke.
    Line {
        /// Start.
        from: Point,
        /// End.
        to: Point,
    },
    /// Quadratic curve.
    Quad {
        /// Start.
        from: Point,
        /// Control point.
        ctrl: Point,
        /// End.
        to: Point,
    },
}

impl Segment {
    /// Where the segment ends; the next segment of the stroke starts here.
    pub fn end(&self) -> Point {
        match *self {
            Self::Line { to, .. } | Self::Quad { to, .. } => to,
        }
    }

    /// Copy translated by `by`.
    pub fn offset(&self, by: Vec2) -> Self {
        match *self {
            Self::Line { from, to } => Self::Line {
                from: from + by,
                to: to + by,
            },
            Self::Quad { from, ctrl, to } => Self::Quad {
                from: from + by,
                ctrl: ctrl + by,
                to: to + by,
            },
        }
    }

    /// Segment as a standalone path.
    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        match *self {
            Self::Line { from, to } => {
                path.move_to(from);
                path.line_to(to);
            }
            Self::Quad { from, ctrl, to } => {
                path.move_to(from);
                path.quad_to(ctrl, to);
            }
        }
        path
    }
}

/// Stroke paint for one segment. Caps and joins are always round.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ink {
    /// Color.
    pub color: Rgba8,
    /// Opacity in `[0, 1]`, applied on top of the color's alpha.
    pub alpha: f64,
    /// Line width.
    pub width: f64,
}

/// Paint target for live drawing and replay.
///
/// Exactly one writer (live drawing, replay, or clear) is active at a time, so implementors
/// need no interior synchronization.
pub trait Surface {
    /// Erase everything.
    fn clear(&mut self);

    /// Stroke one segment.
    fn stroke(&mut self, segment: &Segment, ink: &Ink);
}

/// Operation captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// Surface was cleared.
    Clear,
    /// A segment was stroked.
    Stroke(Segment, Ink),
}

/// Surface that records every call, for hosts that forward draw calls and for tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Take the recorded operations, leaving the recorder empty.
    pub fn drain(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }

    /// Segments stroked since the last clear.
    pub fn visible_strokes(&self) -> impl Iterator<Item = (&Segment, &Ink)> {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, SurfaceOp::Clear))
            .map_or(0, |i| i + 1);
        self.ops[start..].iter().filter_map(|op| match op {
            SurfaceOp::Stroke(seg, ink) => Some((seg, ink)),
            SurfaceOp::Clear => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(SurfaceOp::Clear);
    }

    fn stroke(&mut self, segment: &Segment, ink: &Ink) {
        self.ops.push(SurfaceOp::Stroke(*segment, *ink));
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn stroke(&mut self, segment: &Segment, ink: &Ink) {
        (**self).stroke(segment, ink);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/draw/surface.rs"]
mod tests;
