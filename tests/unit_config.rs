// tests/unit_config.rs
//! Setup validation and the optional `locsmith.toml` overlay.

use std::fs;
use std::path::PathBuf;

use locsmith_core::analysis::Engine;
use locsmith_core::config::Config;
use locsmith_core::discovery;
use locsmith_core::error::LocsmithError;

#[test]
fn test_missing_root_is_fatal() {
    let config = Config::load(
        PathBuf::from("/definitely/not/a/real/path"),
        "c,py",
        PathBuf::from("results"),
        false,
    )
    .unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(err, LocsmithError::RootNotFound(_)));
}

#[test]
fn test_unknown_tags_resolve_to_empty_set() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load(
        dir.path().to_path_buf(),
        "fortran,cobol",
        PathBuf::from("results"),
        false,
    )
    .unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(err, LocsmithError::EmptyLanguageSet(_)));
}

#[test]
fn test_unknown_tags_next_to_known_ones_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load(
        dir.path().to_path_buf(),
        "fortran,py",
        PathBuf::from("results"),
        false,
    )
    .unwrap();
    let classifier = config.validate().unwrap();
    assert!(classifier.matches(&PathBuf::from("x.py")));
    assert!(!classifier.matches(&PathBuf::from("x.f90")));
}

#[test]
fn test_toml_overlay_extends_extensions_and_thresholds() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("locsmith.toml"),
        "[languages]\npy = [\"py\", \".pyi\"]\n\n[smells]\nlong_function_lines = 2\n",
    )
    .unwrap();

    let config = Config::load(
        dir.path().to_path_buf(),
        "py",
        PathBuf::from("results"),
        false,
    )
    .unwrap();
    assert_eq!(config.smells.long_function_lines, 2);
    // Unlisted thresholds keep their defaults.
    assert_eq!(config.smells.large_file_logical, 400);

    let classifier = config.validate().unwrap();
    assert!(classifier.matches(&PathBuf::from("x.py")));
    assert!(classifier.matches(&PathBuf::from("x.pyi")));
}

#[test]
fn test_lowered_smell_threshold_flags_short_functions() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("locsmith.toml"),
        "[smells]\nlong_function_lines = 2\n",
    )
    .unwrap();
    // Four-line function: span 4 exceeds the lowered threshold of 2.
    fs::write(
        dir.path().join("app.py"),
        "def f():\n    a()\n    b()\n    c()\n",
    )
    .unwrap();

    let config = Config::load(
        dir.path().to_path_buf(),
        "py",
        PathBuf::from("results"),
        false,
    )
    .unwrap();
    let classifier = config.validate().unwrap();
    let files = discovery::discover(&config, &classifier);
    let report = Engine::new(config).scan(&files);

    assert_eq!(report.files.len(), 1);
    assert_eq!(report.files[0].code_smells, 1);
}

#[test]
fn test_io_errors_carry_the_offending_path() {
    let err = LocsmithError::Io {
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        path: PathBuf::from("locsmith.toml"),
    };
    assert!(err.to_string().contains("locsmith.toml"));
}

#[test]
fn test_malformed_toml_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("locsmith.toml"), "[languages\npy = ").unwrap();

    let result = Config::load(
        dir.path().to_path_buf(),
        "py",
        PathBuf::from("results"),
        false,
    );
    assert!(matches!(result, Err(LocsmithError::Config(_))));
}
