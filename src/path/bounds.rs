use std::fmt;

use crate::{
    capture::sampler::StrokePoint,
    foundation::{
        core::{Point, Rect},
        fixed::{fixed_value, to_fixed},
    },
};

/// Axis-aligned bounding box of a point set or path set.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Bounds {
    /// Smallest x.
    pub min_x: f64,
    /// Smallest y.
    pub min_y: f64,
    /// Largest x.
    pub max_x: f64,
    /// Largest y.
    pub max_y: f64,
}

impl Bounds {
    /// Degenerate box around a single point.
    pub fn at(p: Point) -> Self {
        Self {
            min_x: p.x,
            min_y: p.y,
            max_x: p.x,
            max_y: p.y,
        }
    }

    /// Bounds from a `kurbo` rectangle.
    pub fn from_rect(r: Rect) -> Self {
        Self {
            min_x: r.x0.min(r.x1),
            min_y: r.y0.min(r.y1),
            max_x: r.x0.max(r.x1),
            max_y: r.y0.max(r.y1),
        }
    }

    /// Running min/max over `points`; `None` for an empty set.
    pub fn of_points<'a>(points: impl IntoIterator<Item = &'a StrokePoint>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::at(first.pos()), |b, p| b.include(p.pos())))
    }

    /// Grow to include `p`.
    pub fn include(self, p: Point) -> Self {
        Self {
            min_x: self.min_x.min(p.x),
            min_y: self.min_y.min(p.y),
            max_x: self.max_x.max(p.x),
            max_y: self.max_y.max(p.y),
        }
    }

    /// Smallest box containing both.
    pub fn union(self, other: Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Merge two optional boxes.
    pub fn merge(a: Option<Self>, b: Option<Self>) -> Option<Self> {
        match (a, b) {
            (Some(a), Some(b)) => Some(a.union(b)),
            (a, b) => a.or(b),
        }
    }

    /// `max_x - min_x`.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// `max_y - min_y`.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Inclusive containment test.
    pub fn contains(&self, p: Point) -> bool {
        (self.min_x..=self.max_x).contains(&p.x) && (self.min_y..=self.max_y).contains(&p.y)
    }
}

/// Bounding box of a stroke sample set, `None` iff `points` is empty.
pub fn get_bounds(points: &[StrokePoint]) -> Option<Bounds> {
    Bounds::of_points(points)
}

/// The rectangular coordinate window used to display a set of paths.
///
/// Components are stored rounded to two decimals, so the numbers an in-memory consumer reads
/// are the numbers the `viewBox` text carries.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ViewBox {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
    measured: bool,
}

impl ViewBox {
    /// Window used when there is nothing to measure.
    pub const FALLBACK: ViewBox = ViewBox {
        x: 0.0,
        y: 0.0,
        width: 300.0,
        height: 120.0,
        measured: false,
    };

    /// Window for stroke geometry: exact extents, falling back to [`Self::FALLBACK`].
    pub fn from_bounds(bounds: Option<Bounds>) -> Self {
        Self::with_min_extent(bounds, 0.0)
    }

    /// Window for glyph geometry: like [`Self::from_bounds`] with each extent at least 1.
    pub fn from_glyph_bounds(bounds: Option<Bounds>) -> Self {
        Self::with_min_extent(bounds, 1.0)
    }

    fn with_min_extent(bounds: Option<Bounds>, min_extent: f64) -> Self {
        match bounds {
            None => Self::FALLBACK,
            Some(b) => Self {
                x: fixed_value(b.min_x, 2),
                y: fixed_value(b.min_y, 2),
                width: fixed_value(b.width().max(min_extent), 2),
                height: fixed_value(b.height().max(min_extent), 2),
                measured: true,
            },
        }
    }

    /// Parse `"x y w h"`, substituting fallback components for anything unparsable.
    pub fn parse(s: &str) -> Self {
        let mut parts = s.split_whitespace().map(|p| p.parse::<f64>().ok());
        let mut next = |fallback: f64| {
            parts
                .next()
                .flatten()
                .filter(|v| v.is_finite())
                .unwrap_or(fallback)
        };
        Self {
            x: next(Self::FALLBACK.x),
            y: next(Self::FALLBACK.y),
            width: next(Self::FALLBACK.width),
            height: next(Self::FALLBACK.height),
            measured: true,
        }
    }

    /// True when the window came from real geometry.
    pub fn is_measured(&self) -> bool {
        self.measured
    }

    /// Window as a rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.measured {
            return write!(f, "{} {} {} {}", self.x, self.y, self.width, self.height);
        }
        write!(
            f,
            "{} {} {} {}",
            to_fixed(self.x, 2),
            to_fixed(self.y, 2),
            to_fixed(self.width, 2),
            to_fixed(self.height, 2)
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/bounds.rs"]
mod tests;
