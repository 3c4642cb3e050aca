use super::*;
use crate::draw::surface::{RecordingSurface, SurfaceOp};
use crate::foundation::core::Vec2;

fn pt(x: f64, y: f64, v: f64) -> StrokePoint {
    StrokePoint { x, y, t: 0.0, v }
}

#[test]
fn first_segment_is_a_line_to_the_midpoint() {
    let seg = segment_for(&pt(0.0, 0.0, 0.0), &pt(10.0, 0.0, 1.0), None);
    assert_eq!(
        seg,
        Segment::Line {
            from: Point::new(0.0, 0.0),
            to: Point::new(5.0, 0.0)
        }
    );
}

#[test]
fn later_segments_bend_through_the_previous_sample() {
    let seg = segment_for(
        &pt(10.0, 0.0, 1.0),
        &pt(20.0, 0.0, 1.0),
        Some(Point::new(5.0, 0.0)),
    );
    assert_eq!(
        seg,
        Segment::Quad {
            from: Point::new(5.0, 0.0),
            ctrl: Point::new(10.0, 0.0),
            to: Point::new(15.0, 0.0)
        }
    );
}

#[test]
fn draw_without_ghost_paints_once_with_velocity_width() {
    let mut surface = RecordingSurface::new();
    let cfg = PadConfig::default();
    let mid = draw_segment(
        &mut surface,
        &cfg,
        &pt(0.0, 0.0, 0.0),
        &pt(4.0, 0.0, 5.0),
        None,
    );
    assert_eq!(mid, Point::new(2.0, 0.0));
    assert_eq!(surface.ops().len(), 1);
    let SurfaceOp::Stroke(_, ink) = &surface.ops()[0] else {
        panic!("expected a stroke");
    };
    assert!((ink.width - cfg.min_width).abs() < 1e-12);
    assert_eq!(ink.alpha, 1.0);
}

#[test]
fn ghost_is_painted_first_wider_and_offset() {
    let mut surface = RecordingSurface::new();
    let mut cfg = PadConfig::default();
    cfg.ghost.enabled = true;
    draw_segment(
        &mut surface,
        &cfg,
        &pt(0.0, 0.0, 0.0),
        &pt(4.0, 0.0, 0.0),
        None,
    );

    let ops = surface.ops();
    assert_eq!(ops.len(), 2);
    let (SurfaceOp::Stroke(ghost_seg, ghost), SurfaceOp::Stroke(seg, ink)) = (&ops[0], &ops[1])
    else {
        panic!("expected two strokes");
    };
    assert_eq!(*ghost_seg, seg.offset(Vec2::new(0.6, 0.8)));
    assert!((ghost.width - (ink.width + 1.6)).abs() < 1e-12);
    assert_eq!(ghost.alpha, 0.2);
    assert_eq!(ghost.color, cfg.ghost.color);
}
