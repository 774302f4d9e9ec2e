use std::fs;

use crate::cli::support::{algotrace, stdout_json, TRIANGLE_EDGES};
use predicates::prelude::*;
use serde_json::json;
use tempfile::tempdir;

#[test]
fn test_dijkstra_triangle_human() {
    algotrace()
        .args(["path", "--source", "0"])
        .args(TRIANGLE_EDGES)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. Update distance for node 1: 4 (via node 0)",
        ))
        .stdout(predicate::str::contains(
            "2. Update distance for node 2: 5 (via node 0)",
        ))
        .stdout(predicate::str::contains("node 0: 0"))
        .stdout(predicate::str::contains("node 2: 5 (via 0)"));
}

#[test]
fn test_dijkstra_target_path() {
    algotrace()
        .args(["path", "-s", "1", "-t", "0", "--no-snapshots"])
        .args(TRIANGLE_EDGES)
        .assert()
        .success()
        .stdout(predicate::str::contains("Path to 0: 1 -> 0 (cost 4)"));
}

#[test]
fn test_dijkstra_unreachable_target() {
    algotrace()
        .args([
            "path", "-s", "0", "-t", "2", "--nodes", "3", "--edge", "0-1:1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Node 2 is unreachable from node 0"));
}

#[test]
fn test_directed_edge_is_one_way() {
    algotrace()
        .args(["path", "-s", "0", "-t", "1", "--edge", "1>0:3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Node 1 is unreachable from node 0"));
}

#[test]
fn test_dijkstra_requires_source() {
    algotrace()
        .arg("path")
        .args(TRIANGLE_EDGES)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("dijkstra requires a source node"));
}

#[test]
fn test_unknown_target() {
    algotrace()
        .args(["path", "-s", "0", "-t", "9"])
        .args(TRIANGLE_EDGES)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path target references node 9"));
}

#[test]
fn test_negative_weight_rejected() {
    algotrace()
        .args(["--format", "json", "path", "-s", "0", "--edge", "0>1:-2"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "\"type\":\"negative_weight_unsupported\"",
        ));
}

#[test]
fn test_negative_weight_allowed_by_flag() {
    algotrace()
        .args(["-q", "path", "-s", "0", "-t", "1", "--allow-negative", "--edge", "0>1:-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path to 1: 0 -> 1 (cost -2)"));
}

#[test]
fn test_negative_weight_allowed_by_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("algotrace.toml"),
        "[shortest_path]\nreject_negative_weights = false\n",
    )
    .unwrap();

    algotrace()
        .current_dir(dir.path())
        .args(["path", "-s", "0", "--edge", "0>1:-2"])
        .assert()
        .success();
}

#[test]
fn test_dijkstra_json_output() {
    let output = algotrace()
        .args(["--format", "json", "path", "-s", "0", "-t", "2", "--nodes", "4"])
        .args(TRIANGLE_EDGES)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["source"], 0);
    assert_eq!(json["distances"], json!([0, 4, 5, null]));
    assert_eq!(json["predecessors"], json!([null, 0, 0, null]));
    assert_eq!(json["tree_edges"], json!([0, 2]));
    assert_eq!(json["target"]["path"], json!([0, 2]));
    assert_eq!(json["steps"][0]["kind"], "distance_update");
    assert_eq!(
        json["steps"][0]["snapshot"]["distances"],
        json!([0, 4, null, null])
    );
}

#[test]
fn test_dijkstra_records_output() {
    algotrace()
        .args(["--format", "records", "path", "-s", "0", "-t", "2"])
        .args(TRIANGLE_EDGES)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H algotrace=1 records=1 mode=path algorithm=dijkstra source=0 nodes=3 steps=2 target=2",
        ))
        .stdout(predicate::str::contains("D 0 0 pred=-"))
        .stdout(predicate::str::contains("D 2 5 pred=0"))
        .stdout(predicate::str::contains("P 2 5 path=0,2"));
}

#[test]
fn test_overflowing_distance_stays_unreachable() {
    algotrace()
        .args(["path", "--source", "0", "--no-snapshots"])
        .args([
            "--edge",
            "0-1:5000000000000000000",
            "--edge",
            "1-2:5000000000000000000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("node 1: 5000000000000000000 (via 0)"))
        .stdout(predicate::str::contains("node 2: unreachable"))
        .stdout(predicate::str::contains("-8446744073709551616").not());
}
