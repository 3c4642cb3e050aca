use super::*;
use crate::draw::surface::{RecordingSurface, SurfaceOp};

fn pad() -> SignaturePad<RecordingSurface> {
    SignaturePad::new(RecordingSurface::new(), PadConfig::default()).unwrap()
}

fn ev(x: f64, y: f64, t: f64) -> PointerEvent {
    PointerEvent::new(1, x, y, t)
}

fn draw_line(pad: &mut SignaturePad<RecordingSurface>, y: f64, t0: f64) -> Vec<Stroke> {
    pad.pointer_down(ev(0.0, y, t0));
    for i in 1..=4 {
        let i = f64::from(i);
        assert!(pad.pointer_move(ev(i * 5.0, y, t0 + i * 10.0)));
    }
    pad.pointer_up(ev(20.0, y, t0 + 50.0)).unwrap()
}

#[test]
fn rejects_invalid_config() {
    let cfg = PadConfig {
        max_width: -1.0,
        ..PadConfig::default()
    };
    assert!(SignaturePad::new(RecordingSurface::new(), cfg).is_err());
}

#[test]
fn live_stroke_draws_one_segment_per_accepted_sample() {
    let mut pad = pad();
    let snapshot = draw_line(&mut pad, 0.0, 0.0);

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].len(), 5);
    assert_eq!(snapshot[0].points[0].v, 0.0);
    assert!((snapshot[0].points[1].v - 0.5).abs() < 1e-12);
    assert_eq!(pad.surface().visible_strokes().count(), 4);
    assert!(!pad.is_drawing());
}

#[test]
fn close_samples_are_gated_and_not_drawn() {
    let mut pad = pad();
    pad.pointer_down(ev(0.0, 0.0, 0.0));
    assert!(!pad.pointer_move(ev(0.2, 0.1, 5.0)));
    assert!(pad.pointer_move(ev(0.35, 0.0, 6.0)));
    assert_eq!(pad.strokes()[0].len(), 2);
    assert_eq!(pad.surface().ops().len(), 1);
}

#[test]
fn moves_from_other_pointers_or_without_capture_are_ignored() {
    let mut pad = pad();
    assert!(!pad.pointer_move(ev(5.0, 5.0, 0.0)));

    pad.pointer_down(ev(0.0, 0.0, 0.0));
    assert!(!pad.pointer_move(PointerEvent::new(2, 10.0, 0.0, 10.0)));
    assert_eq!(pad.pointer_up(PointerEvent::new(2, 10.0, 0.0, 10.0)), None);
    assert!(pad.is_drawing());

    assert!(pad.pointer_cancel(ev(0.0, 0.0, 20.0)).is_some());
    assert!(!pad.pointer_move(ev(10.0, 0.0, 30.0)));
}

#[test]
fn snapshot_is_detached_from_the_session() {
    let mut pad = pad();
    let mut snapshot = draw_line(&mut pad, 0.0, 0.0);
    snapshot[0].points.clear();
    assert_eq!(pad.strokes()[0].len(), 5);
}

#[test]
fn clear_resets_everything() {
    let mut pad = pad();
    draw_line(&mut pad, 0.0, 0.0);
    let token = pad.replay(100.0).unwrap();

    pad.clear();
    assert!(pad.strokes().is_empty());
    assert!(!pad.is_replaying());
    assert_eq!(pad.surface().ops().last(), Some(&SurfaceOp::Clear));
    assert_eq!(pad.tick(token, 1000.0), ReplayStep::Stale);
    assert_eq!(pad.replay(2000.0), None);
}

#[test]
fn replay_redraws_the_same_segments() {
    let mut pad = pad();
    draw_line(&mut pad, 0.0, 0.0);
    draw_line(&mut pad, 10.0, 100.0);
    let live: Vec<_> = pad
        .surface()
        .visible_strokes()
        .map(|(s, i)| (*s, *i))
        .collect();

    let token = pad.replay(0.0).unwrap();
    assert!(pad.is_replaying());
    assert_eq!(pad.tick(token, 10_000.0), ReplayStep::Finished);
    let replayed: Vec<_> = pad
        .surface()
        .visible_strokes()
        .map(|(s, i)| (*s, *i))
        .collect();
    assert_eq!(live, replayed);
}

#[test]
fn pointer_down_mid_replay_stales_the_replay() {
    let mut pad = pad();
    draw_line(&mut pad, 0.0, 0.0);
    draw_line(&mut pad, 10.0, 100.0);

    let token = pad.replay(0.0).unwrap();
    assert_eq!(pad.tick(token, 25.0), ReplayStep::Running);
    let drawn_by_replay = pad.surface().visible_strokes().count();
    assert_eq!(drawn_by_replay, 2);

    pad.pointer_down(ev(50.0, 50.0, 200.0));
    assert!(!pad.is_replaying());
    let before = pad.surface().ops().len();
    assert_eq!(pad.tick(token, 10_000.0), ReplayStep::Stale);
    assert_eq!(pad.surface().ops().len(), before);

    assert!(pad.pointer_move(ev(60.0, 50.0, 210.0)));
    assert_eq!(pad.surface().ops().len(), before + 1);
    assert_eq!(pad.strokes().len(), 3);
}

#[test]
fn ghost_toggle_applies_to_new_segments() {
    let mut pad = pad();
    pad.set_ghost(true);
    pad.pointer_down(ev(0.0, 0.0, 0.0));
    pad.pointer_move(ev(5.0, 0.0, 10.0));
    assert_eq!(pad.surface().ops().len(), 2);
}
