use crate::{
    capture::stroke::Stroke,
    foundation::fixed::fixed_value,
};

/// Start offset and length of one path's reveal, in seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimingEntry {
    /// Reveal length.
    pub duration: f64,
    /// Offset from animation start.
    pub delay: f64,
}

impl TimingEntry {
    /// End of the reveal window.
    pub fn end(&self) -> f64 {
        self.delay + self.duration
    }

    /// Entry rounded to the precision used by every textual and in-memory consumer.
    pub fn rounded(&self) -> Self {
        Self {
            duration: fixed_value(self.duration, TIME_DIGITS),
            delay: fixed_value(self.delay, TIME_DIGITS),
        }
    }
}

/// Fractional digits carried by timing values.
pub const TIME_DIGITS: usize = 3;

/// How a path's share of the total animation time is weighed.
///
/// Hand-drawn strokes and typed glyphs use different policies and are kept separate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightStrategy {
    /// `max(point_count - 1, 1)`: longer strokes take proportionally longer.
    PointCount,
    /// Every path weighs 1.
    Uniform,
}

impl WeightStrategy {
    /// Weight for a path built from `point_count` samples.
    pub fn weight(self, point_count: usize) -> f64 {
        match self {
            Self::PointCount => point_count.saturating_sub(1).max(1) as f64,
            Self::Uniform => 1.0,
        }
    }
}

/// Weights for the strokes that produce a path, in stroke order.
///
/// Strokes without samples produce no path and so get no weight, keeping weights aligned
/// with the output of [`crate::strokes_to_paths`].
pub fn stroke_weights(strokes: &[Stroke]) -> Vec<f64> {
    strokes
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| WeightStrategy::PointCount.weight(s.len()))
        .collect()
}

/// Split `total` seconds across paths in proportion to `weights`, back to back.
///
/// `duration_i = weight_i / sum(weights) * total` and `delay_i` is the sum of all earlier
/// durations, so every path starts exactly when the previous one ends. Non-positive or
/// non-finite weights count as zero; if nothing has positive weight the time is split evenly.
pub fn build_timing(weights: &[f64], total: f64) -> Vec<TimingEntry> {
    if weights.is_empty() {
        return Vec::new();
    }

    let clean: Vec<f64> = weights
        .iter()
        .map(|&w| if w.is_finite() && w > 0.0 { w } else { 0.0 })
        .collect();
    let sum: f64 = clean.iter().sum();

    let mut delay = 0.0;
    clean
        .iter()
        .map(|&w| {
            let duration = if sum > 0.0 {
                w / sum * total
            } else {
                total / clean.len() as f64
            };
            let entry = TimingEntry { duration, delay };
            delay += duration;
            entry
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/timing/schedule.rs"]
mod tests;
