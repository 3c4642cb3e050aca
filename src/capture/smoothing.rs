use crate::{capture::sampler::StrokePoint, foundation::core::Point};

/// Midpoint of two consecutive samples.
///
/// Live drawing and path conversion both end every segment on these midpoints, using the raw
/// sample as the quadratic control point, so consecutive segments join without corners.
pub fn midpoint(a: &StrokePoint, b: &StrokePoint) -> Point {
    a.pos().midpoint(b.pos())
}
