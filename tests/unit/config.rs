use super::*;

#[test]
fn empty_object_is_all_defaults() {
    let cfg = SessionConfig::from_reader(&b"{}"[..]).unwrap();
    assert_eq!(cfg, SessionConfig::default());
}

#[test]
fn invalid_sections_are_rejected() {
    let err = SessionConfig::from_reader(&br#"{ "pad": { "velocity_max": -1 } }"#[..]).unwrap_err();
    assert!(matches!(err, SigError::Validation(_)));

    let err = SessionConfig::from_reader(&br#"{ "export": { "component_name": "" } }"#[..])
        .unwrap_err();
    assert!(matches!(err, SigError::Validation(_)));

    assert!(SessionConfig::from_reader(&b"not json"[..]).is_err());
}

#[test]
fn relative_font_paths_resolve_next_to_the_file() {
    let dir = std::env::temp_dir().join(format!("sigmotion_cfg_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("session.json");
    std::fs::write(
        &path,
        r#"{ "fonts": { "Brittany": "fonts/Brittany.ttf", "Abs": "/opt/fonts/Abs.ttf" } }"#,
    )
    .unwrap();

    let cfg = SessionConfig::from_path(&path).unwrap();
    assert_eq!(cfg.fonts["Brittany"], dir.join("fonts/Brittany.ttf"));
    assert_eq!(cfg.fonts["Abs"], PathBuf::from("/opt/fonts/Abs.ttf"));
    assert_eq!(
        cfg.font_library().names().collect::<Vec<_>>(),
        vec!["Abs", "Brittany"]
    );
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn strokes_parse_with_optional_velocity() {
    let strokes = strokes_from_reader(
        &br#"[{ "points": [{ "x": 1, "y": 2, "t": 0 }, { "x": 3, "y": 4, "t": 16, "v": 0.2 }] }, { "points": [] }]"#[..],
    )
    .unwrap();
    assert_eq!(strokes.len(), 2);
    assert_eq!(strokes[0].points[0].v, 0.0);
    assert_eq!(strokes[0].points[1].v, 0.2);
    assert!(strokes[1].is_empty());

    assert!(matches!(
        strokes_from_reader(&b"{}"[..]),
        Err(SigError::Serde(_))
    ));
    assert!(strokes_from_path("/definitely/not/here.json").is_err());
}
