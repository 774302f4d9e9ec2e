use std::fs;

use crate::cli::support::{algotrace, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_local_config_sets_default_algorithm() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("algotrace.toml"),
        "[sort]\nalgorithm = \"merge\"\n",
    )
    .unwrap();

    algotrace()
        .current_dir(dir.path())
        .args(["sort", "2", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("merge sort of 2 values"));
}

#[test]
fn test_flag_overrides_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("algotrace.toml"),
        "[sort]\nalgorithm = \"merge\"\n",
    )
    .unwrap();

    algotrace()
        .current_dir(dir.path())
        .args(["sort", "--algorithm", "selection", "2", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("selection sort of 2 values"));
}

#[test]
fn test_config_output_format() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("algotrace.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let output = algotrace()
        .current_dir(dir.path())
        .args(["sort", "2", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["algorithm"], "bubble");
}

#[test]
fn test_config_hides_snapshots() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("algotrace.toml"),
        "[output]\nshow_snapshots = false\n",
    )
    .unwrap();

    algotrace()
        .current_dir(dir.path())
        .args(["sort", "2", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1, 2]").not());
}

#[test]
fn test_explicit_config_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[mst]\nalgorithm = \"prim\"\n").unwrap();

    algotrace()
        .arg("--config")
        .arg(&path)
        .args(["mst", "--edge", "0-1:1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("prim requires a source node"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = tempdir().unwrap();

    algotrace()
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .args(["sort", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("algotrace.toml"),
        "[sort]\nalgorithm = \"bogo\"\n",
    )
    .unwrap();

    algotrace()
        .current_dir(dir.path())
        .args(["sort", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}

#[test]
fn test_global_config_dir() {
    let config_dir = tempdir().unwrap();
    fs::write(
        config_dir.path().join("config.toml"),
        "[playback]\ndelay_ms = 0\n[mst]\nalgorithm = \"prim\"\n",
    )
    .unwrap();
    let work = tempdir().unwrap();

    algotrace()
        .current_dir(work.path())
        .env("ALGOTRACE_CONFIG_DIR", config_dir.path())
        .args(["mst", "-s", "0", "--edge", "0-1:1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("prim on 2 nodes"));
}
