// tests/integration_artifacts.rs
//! Artifact writing and handler-level exit codes.

use std::fs;
use std::path::PathBuf;

use locsmith_core::cli::args::Cli;
use locsmith_core::cli::handlers;
use locsmith_core::exit::LocsmithExit;

fn cli_for(root: PathBuf, outdir: PathBuf) -> Cli {
    Cli {
        root,
        langs: "c,py".to_string(),
        outdir,
        json: false,
        no_write: false,
        verbose: false,
    }
}

#[test]
fn test_artifacts_are_written_and_parse() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(root.join("src/app.py"), "def a():\n    b()\ndef c():\n    a()\n").unwrap();

    let outdir = root.join("results");
    let exit = handlers::run(cli_for(root.to_path_buf(), outdir.clone())).unwrap();
    assert_eq!(exit, LocsmithExit::Success);

    for name in [
        "summary.json",
        "callgraph.json",
        "per_file.csv",
        "per_function.csv",
        "per_module.csv",
    ] {
        assert!(outdir.join(name).is_file(), "{name} missing");
    }

    let graph: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(outdir.join("callgraph.json")).unwrap()).unwrap();
    assert_eq!(graph["a"], serde_json::json!(["b"]));
    assert_eq!(graph["c"], serde_json::json!(["a"]));

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(outdir.join("summary.json")).unwrap()).unwrap();
    assert_eq!(summary["file_count"], 1);
    assert_eq!(summary["totals"]["function_count"], 2);

    let per_function = fs::read_to_string(outdir.join("per_function.csv")).unwrap();
    let mut lines = per_function.lines();
    assert_eq!(lines.next(), Some("file,function,cc,fan_in,fan_out"));
    assert_eq!(per_function.lines().count(), 3);
}

#[test]
fn test_missing_root_exits_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    let exit = handlers::run(cli_for(
        PathBuf::from("/definitely/not/a/real/path"),
        dir.path().join("results"),
    ))
    .unwrap();
    assert_eq!(exit, LocsmithExit::InvalidConfig);
}

#[test]
fn test_malformed_toml_exits_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("locsmith.toml"), "[languages\npy = ").unwrap();
    let exit = handlers::run(cli_for(
        dir.path().to_path_buf(),
        dir.path().join("results"),
    ))
    .unwrap();
    assert_eq!(exit, LocsmithExit::InvalidConfig);
}

#[test]
fn test_empty_tree_still_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let exit = handlers::run(cli_for(
        dir.path().to_path_buf(),
        dir.path().join("results"),
    ))
    .unwrap();
    assert_eq!(exit, LocsmithExit::Success);
}
