use crate::foundation::core::Point;

/// Pointer position with a monotonic timestamp in milliseconds, before velocity annotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawPoint {
    /// Surface-local x.
    pub x: f64,
    /// Surface-local y.
    pub y: f64,
    /// Monotonic timestamp in milliseconds.
    pub t: f64,
}

impl RawPoint {
    /// Construct a raw sample.
    pub fn new(x: f64, y: f64, t: f64) -> Self {
        Self { x, y, t }
    }
}

/// A recorded stroke sample: position, timestamp (ms) and instantaneous speed (units per ms).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokePoint {
    /// Surface-local x.
    pub x: f64,
    /// Surface-local y.
    pub y: f64,
    /// Monotonic timestamp in milliseconds.
    pub t: f64,
    /// Speed relative to the previous sample; `0` for the first sample of a stroke.
    #[serde(default)]
    pub v: f64,
}

impl StrokePoint {
    /// Position without timing data.
    pub fn pos(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &StrokePoint) -> f64 {
        self.pos().distance(other.pos())
    }
}

/// Smallest elapsed time used when computing velocity.
pub const MIN_ELAPSED_MS: f64 = 1.0;

/// Annotate `raw` with its speed relative to `previous`.
///
/// Without a previous sample the speed is zero. Elapsed time is floored at
/// [`MIN_ELAPSED_MS`] so coincident timestamps never divide by zero.
pub fn with_velocity(raw: RawPoint, previous: Option<&StrokePoint>) -> StrokePoint {
    let v = match previous {
        None => 0.0,
        Some(prev) => {
            let dt = (raw.t - prev.t).max(MIN_ELAPSED_MS);
            Point::new(raw.x, raw.y).distance(prev.pos()) / dt
        }
    };
    StrokePoint {
        x: raw.x,
        y: raw.y,
        t: raw.t,
        v,
    }
}

/// Turns raw pointer samples into velocity-annotated points, dropping samples that are too
/// close to the last accepted one.
#[derive(Clone, Copy, Debug)]
pub struct PointSampler {
    min_distance: f64,
}

impl PointSampler {
    /// Sampler with the given minimum-distance gate.
    pub fn new(min_distance: f64) -> Self {
        Self {
            min_distance: min_distance.max(0.0),
        }
    }

    /// Minimum distance a sample must travel from the last accepted one.
    pub fn min_distance(&self) -> f64 {
        self.min_distance
    }

    /// Sample `raw`. Returns `None` when the candidate is closer than the gate to `previous`.
    ///
    /// The first sample of a stroke (no `previous`) is always accepted.
    pub fn sample(&self, raw: RawPoint, previous: Option<&StrokePoint>) -> Option<StrokePoint> {
        let point = with_velocity(raw, previous);
        match previous {
            Some(prev) if point.distance(prev) < self.min_distance => None,
            _ => Some(point),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/capture/sampler.rs"]
mod tests;
