use crate::{
    capture::{smoothing::midpoint, stroke::Stroke},
    foundation::{core::Point, fixed::to_fixed},
};

fn point_str(p: Point) -> String {
    format!("{} {}", to_fixed(p.x, 2), to_fixed(p.y, 2))
}

/// SVG path data for a stroke.
///
/// - no samples: empty string
/// - one sample: a lone `M`
/// - otherwise `M first`, `L midpoint(first, second)`, then for every interior sample
///   `Q sample midpoint(sample, next)`
///
/// Coordinates are printed with two decimals. The output is a pure function of the samples.
pub fn stroke_to_path(stroke: &Stroke) -> String {
    let points = &stroke.points;
    let Some(first) = points.first() else {
        return String::new();
    };
    let Some(second) = points.get(1) else {
        return format!("M {}", point_str(first.pos()));
    };

    let mut d = format!(
        "M {} L {}",
        point_str(first.pos()),
        point_str(midpoint(first, second))
    );
    for pair in points[1..].windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        d.push_str(" Q ");
        d.push_str(&point_str(current.pos()));
        d.push(' ');
        d.push_str(&point_str(midpoint(current, next)));
    }
    d
}

/// Path data for every stroke that has at least one sample, in stroke order.
pub fn strokes_to_paths(strokes: &[Stroke]) -> Vec<String> {
    strokes
        .iter()
        .map(stroke_to_path)
        .filter(|d| !d.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/path/convert.rs"]
mod tests;
