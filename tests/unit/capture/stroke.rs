use super::*;

fn pt(x: f64, t: f64) -> StrokePoint {
    StrokePoint {
        x,
        y: 0.0,
        t,
        v: 0.0,
    }
}

#[test]
fn push_targets_only_the_open_stroke() {
    let mut store = StrokeStore::new();
    assert!(!store.push(pt(0.0, 0.0)));

    store.begin(pt(0.0, 0.0));
    assert!(store.push(pt(1.0, 1.0)));
    store.seal();
    assert!(!store.push(pt(2.0, 2.0)));

    store.begin(pt(5.0, 10.0));
    assert!(store.push(pt(6.0, 11.0)));

    assert_eq!(store.len(), 2);
    assert_eq!(store.strokes()[0].len(), 2);
    assert_eq!(store.strokes()[1].len(), 2);
}

#[test]
fn snapshot_is_detached_from_later_edits() {
    let mut store = StrokeStore::new();
    store.begin(pt(0.0, 0.0));
    let snap = store.snapshot();
    store.push(pt(1.0, 1.0));
    assert_eq!(snap[0].len(), 1);
    assert_eq!(store.strokes()[0].len(), 2);
}

#[test]
fn clear_and_replace_seal_everything() {
    let mut store = StrokeStore::new();
    store.begin(pt(0.0, 0.0));
    store.clear();
    assert!(store.is_empty());
    assert!(store.open_stroke().is_none());

    store.begin(pt(0.0, 0.0));
    store.replace(vec![Stroke::new(vec![pt(9.0, 0.0)])]);
    assert!(!store.is_open());
    assert!(!store.push(pt(1.0, 1.0)));
    assert_eq!(store.strokes()[0].points[0].x, 9.0);
}

#[test]
fn stroke_start_time_reads_first_point() {
    assert_eq!(Stroke::default().start_time(), None);
    assert_eq!(Stroke::new(vec![pt(0.0, 7.0)]).start_time(), Some(7.0));
}
