use super::*;
use crate::{
    capture::{sampler::StrokePoint, stroke::Stroke},
    glyph::outline::GlyphSet,
    path::bounds::Bounds,
};

fn stroke(points: &[(f64, f64)]) -> Stroke {
    Stroke::new(
        points
            .iter()
            .map(|&(x, y)| StrokePoint { x, y, t: 0.0, v: 0.0 })
            .collect(),
    )
}

fn two_strokes() -> Signature {
    Signature::from_strokes(&[
        stroke(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]),
        stroke(&[(0.0, 10.0), (10.0, 10.0)]),
    ])
}

#[test]
fn path_length_follows_geometry() {
    assert!((path_length("M 0 0 L 30 40").unwrap() - 50.0).abs() < 1e-9);
    assert_eq!(path_length("M 5.00 60.00").unwrap(), 0.0);
    assert!((path_length("M0 0L10 0L10-20Z").unwrap() - (10.0 + 20.0 + 500f64.sqrt())).abs() < 1e-9);
    assert!(path_length("M 0 0 L oops").is_err());
}

#[test]
fn draw_scene_reveals_each_path_with_signature_timing() {
    let sig = two_strokes();
    let scene = PreviewScene::build(&sig, &ExportOptions::default()).unwrap();

    assert_eq!(scene.nodes.len(), 2);
    assert_eq!(scene.reveal_timing(), sig.timing(2.6));
    assert!((scene.duration - 2.6).abs() < 1e-9);
    assert!(scene.wipe.is_none());
    let SceneNode::RevealStroke { length, .. } = &scene.nodes[0] else {
        panic!("expected a reveal");
    };
    assert!((length - 15.0).abs() < 1e-6);
}

#[test]
fn fill_scene_interleaves_base_and_reveal() {
    let opts = ExportOptions {
        animation_mode: AnimationMode::Fill,
        ..ExportOptions::default()
    };
    let scene = PreviewScene::build(&two_strokes(), &opts).unwrap();
    assert_eq!(scene.nodes.len(), 4);
    assert!(matches!(scene.nodes[0], SceneNode::BaseStroke { .. }));
    assert!(matches!(scene.nodes[1], SceneNode::RevealStroke { .. }));
    assert!(matches!(scene.nodes[2], SceneNode::BaseStroke { .. }));
}

#[test]
fn typed_fill_scene_wipes_over_the_view_window() {
    let sig = Signature::from_glyphs(&GlyphSet {
        paths: vec!["M0 0L10 0L10-20Z".into()],
        bounds: Some(Bounds {
            min_x: 0.0,
            min_y: -20.0,
            max_x: 10.0,
            max_y: 0.0,
        }),
    });
    let opts = ExportOptions {
        animation_mode: AnimationMode::Fill,
        ..ExportOptions::default()
    };
    let scene = PreviewScene::build(&sig, &opts).unwrap();

    assert!(matches!(scene.nodes[0], SceneNode::BaseFill { .. }));
    assert!(matches!(scene.nodes[1], SceneNode::WipeFill { .. }));
    let wipe = scene.wipe.unwrap();
    assert_eq!(wipe.rect, Rect::new(0.0, -20.0, 10.0, 0.0));
    assert_eq!(wipe.duration, 4.0);
    assert_eq!(scene.duration, 4.0);
}

#[test]
fn empty_signature_builds_an_empty_scene() {
    let scene = PreviewScene::build(&Signature::empty(InputMode::Type), &ExportOptions::default())
        .unwrap();
    assert!(scene.is_empty());
    assert_eq!(scene.duration, 0.0);
    assert_eq!(scene.view_box.to_string(), "0 0 300 120");
}
