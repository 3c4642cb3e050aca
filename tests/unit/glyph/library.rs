use super::*;

fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("sigmotion_{}_{name}", std::process::id()))
}

#[test]
fn unknown_name_is_a_font_error() {
    let mut lib = FontLibrary::new();
    let err = lib.load("Nope").unwrap_err();
    assert!(matches!(err, SigError::Font(ref m) if m.contains("unknown font")));
}

#[test]
fn missing_file_is_a_font_error() {
    let mut lib = FontLibrary::new();
    lib.register("Ghost", scratch("missing.ttf"));
    assert!(matches!(lib.load("Ghost"), Err(SigError::Font(_))));
}

#[test]
fn bytes_are_read_once_per_path() {
    let path = scratch("cached.ttf");
    std::fs::write(&path, b"font bytes").unwrap();

    let mut lib = FontLibrary::new();
    lib.register("A", &path);
    lib.register("B", &path);
    let a = lib.load("A").unwrap();

    std::fs::remove_file(&path).unwrap();
    let b = lib.load("B").unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(lib.names().collect::<Vec<_>>(), vec!["A", "B"]);
}

#[test]
fn outline_surfaces_parse_failures() {
    let path = scratch("garbage.ttf");
    std::fs::write(&path, b"garbage").unwrap();
    let mut lib = FontLibrary::from_paths(BTreeMap::from([("G".to_string(), path.clone())]));
    assert_eq!(lib.path_of("G"), Some(path.as_path()));
    assert!(matches!(
        lib.outline("G", "Ada", &OutlineOptions::default()),
        Err(SigError::Font(_))
    ));
    let _ = std::fs::remove_file(&path);
}
