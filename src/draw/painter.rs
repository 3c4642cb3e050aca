use crate::{
    capture::{sampler::StrokePoint, smoothing::midpoint},
    draw::{
        config::PadConfig,
        surface::{Ink, Segment, Surface},
    },
    foundation::core::Point,
};

/// Segment that joins `last` to `point`.
///
/// Starts at the previous midpoint (or at `last` for the first segment of a stroke), bends
/// through `last`, and ends at `midpoint(last, point)`. This is exactly the geometry path
/// conversion emits, so exported paths retrace the live ink.
pub fn segment_for(last: &StrokePoint, point: &StrokePoint, last_midpoint: Option<Point>) -> Segment {
    let to = midpoint(last, point);
    match last_midpoint {
        Some(from) => Segment::Quad {
            from,
            ctrl: last.pos(),
            to,
        },
        None => Segment::Line {
            from: last.pos(),
            to,
        },
    }
}

/// Paint the segment ending at `point` and return its end midpoint for the next call.
///
/// Width follows `point`'s velocity. With the ghost enabled, a wider faint offset copy is
/// painted first so it sits beneath the primary ink.
pub fn draw_segment<S: Surface + ?Sized>(
    surface: &mut S,
    config: &PadConfig,
    last: &StrokePoint,
    point: &StrokePoint,
    last_midpoint: Option<Point>,
) -> Point {
    let segment = segment_for(last, point, last_midpoint);
    let width = config.width_for_velocity(point.v);

    if config.ghost.enabled {
        let ghost = Ink {
            color: config.ghost.color,
            alpha: config.ghost.alpha,
            width: width + config.ghost.extra_width,
        };
        surface.stroke(&segment.offset(config.ghost.offset), &ghost);
    }

    let ink = Ink {
        color: config.line_color,
        alpha: 1.0,
        width,
    };
    surface.stroke(&segment, &ink);

    segment.end()
}

#[cfg(test)]
#[path = "../../tests/unit/draw/painter.rs"]
mod tests;
