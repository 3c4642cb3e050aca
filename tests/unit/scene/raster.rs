use super::*;
use crate::{
    capture::{sampler::StrokePoint, stroke::Stroke},
    export::options::ExportOptions,
    scene::model::PreviewScene,
    signature::Signature,
};

fn scene() -> PreviewScene {
    let stroke = Stroke::new(vec![
        StrokePoint { x: 0.0, y: 0.0, t: 0.0, v: 0.0 },
        StrokePoint { x: 50.0, y: 25.0, t: 10.0, v: 0.0 },
        StrokePoint { x: 100.0, y: 50.0, t: 20.0, v: 0.0 },
    ]);
    let opts = ExportOptions {
        stroke_width: 6.0,
        ..ExportOptions::default()
    };
    PreviewScene::build(&Signature::from_strokes(&[stroke]), &opts).unwrap()
}

fn has_ink(data: &[u8]) -> bool {
    data.chunks_exact(4).any(|px| px[3] > 0)
}

#[test]
fn nothing_is_painted_before_the_reveal() {
    let scene = scene();
    let data = rasterize_frame(&SceneFrame::new(&scene, 0.0), 40, 20, None).unwrap();
    assert_eq!(data.len(), 40 * 20 * 4);
    assert!(!has_ink(&data));
}

#[test]
fn settled_frame_has_ink() {
    let scene = scene();
    let data = rasterize_frame(&SceneFrame::new(&scene, 10.0), 40, 20, None).unwrap();
    assert!(has_ink(&data));
}

#[test]
fn background_covers_the_frame() {
    let scene = scene();
    let data = rasterize_frame(
        &SceneFrame::new(&scene, 0.0),
        8,
        8,
        Some(Rgba8::rgb(0xF7, 0xF5, 0xF3)),
    )
    .unwrap();
    assert!(data.chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn rejects_out_of_range_sizes() {
    let scene = scene();
    let frame = SceneFrame::new(&scene, 0.0);
    assert!(rasterize_frame(&frame, 0, 10, None).is_err());
    assert!(rasterize_frame(&frame, 20_000, 10, None).is_err());
}
