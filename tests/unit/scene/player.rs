use super::*;
use crate::{
    capture::{sampler::StrokePoint, stroke::Stroke},
    export::options::ExportOptions,
    signature::Signature,
};

fn scene() -> PreviewScene {
    let stroke = Stroke::new(vec![
        StrokePoint { x: 0.0, y: 0.0, t: 0.0, v: 0.0 },
        StrokePoint { x: 10.0, y: 5.0, t: 10.0, v: 0.0 },
    ]);
    PreviewScene::build(&Signature::from_strokes(&[stroke]), &ExportOptions::default()).unwrap()
}

#[test]
fn frames_are_measured_from_the_origin() {
    let player = PreviewPlayer::new(scene(), 1_000.0);
    assert_eq!(player.frame_at(1_000.0).time(), 0.0);
    assert_eq!(player.frame_at(2_300.0).time(), 1.3);
    assert_eq!(player.frame_at(500.0).time(), 0.0);
}

#[test]
fn restart_rekeys_and_resets_the_clock() {
    let mut player = PreviewPlayer::new(scene(), 0.0);
    assert!(player.frame_at(10_000.0).is_settled());

    assert_eq!(player.restart(10_000.0), 1);
    let frame = player.frame_at(10_000.0);
    assert_eq!(frame.time(), 0.0);
    assert_eq!(frame.reveals()[0].opacity, 0.0);
    assert_eq!(player.replay_key(), 1);
}

#[test]
fn replace_keeps_keys_increasing() {
    let mut player = PreviewPlayer::new(scene(), 0.0);
    player.restart(5.0);
    player.replace(scene(), 50.0);
    assert_eq!(player.replay_key(), 2);
    assert_eq!(player.scene().replay_key, 2);
    assert_eq!(player.frame_at(50.0).time(), 0.0);
}
