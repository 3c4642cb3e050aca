use crate::capture::sampler::StrokePoint;

/// One pointer-down to pointer-up gesture, in drawing order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stroke {
    /// Accepted samples.
    pub points: Vec<StrokePoint>,
}

impl Stroke {
    /// Stroke from existing samples.
    pub fn new(points: Vec<StrokePoint>) -> Self {
        Self { points }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when no sample was recorded.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Timestamp of the first sample.
    pub fn start_time(&self) -> Option<f64> {
        self.points.first().map(|p| p.t)
    }

    /// Most recent sample.
    pub fn last(&self) -> Option<&StrokePoint> {
        self.points.last()
    }
}

/// Ordered strokes captured during one editing session.
///
/// Only the most recently started stroke accepts new samples, and only until it is sealed.
/// Sealed strokes are never mutated again.
#[derive(Clone, Debug, Default)]
pub struct StrokeStore {
    strokes: Vec<Stroke>,
    open: bool,
}

impl StrokeStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new stroke with its first sample. Any open stroke is sealed first.
    pub fn begin(&mut self, first: StrokePoint) {
        self.strokes.push(Stroke::new(vec![first]));
        self.open = true;
    }

    /// Append to the open stroke. Returns `false` when no stroke is open.
    pub fn push(&mut self, point: StrokePoint) -> bool {
        match self.open_stroke_mut() {
            Some(stroke) => {
                stroke.points.push(point);
                true
            }
            None => false,
        }
    }

    /// Seal the open stroke, if any.
    pub fn seal(&mut self) {
        self.open = false;
    }

    /// Drop every stroke.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.open = false;
    }

    /// Replace the whole session with `strokes`, all sealed.
    pub fn replace(&mut self, strokes: Vec<Stroke>) {
        self.strokes = strokes;
        self.open = false;
    }

    /// The stroke currently accepting samples.
    pub fn open_stroke(&self) -> Option<&Stroke> {
        if self.open { self.strokes.last() } else { None }
    }

    fn open_stroke_mut(&mut self) -> Option<&mut Stroke> {
        if self.open {
            self.strokes.last_mut()
        } else {
            None
        }
    }

    /// Whether a stroke is currently open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// All strokes, including the open one.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Number of strokes.
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// True when the store holds no strokes.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Deep copy of every stroke, safe to hand to collaborators.
    pub fn snapshot(&self) -> Vec<Stroke> {
        self.strokes.clone()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/capture/stroke.rs"]
mod tests;
