use std::fs;

use crate::cli::support::{algotrace, stdout_json, TRIANGLE_EDGES};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_kruskal_inline_triangle() {
    algotrace()
        .args(["mst", "--nodes", "3"])
        .args(TRIANGLE_EDGES)
        .assert()
        .success()
        .stdout(predicate::str::contains("kruskal on 3 nodes, 3 edges"))
        .stdout(predicate::str::contains(
            "1. Add edge from node 1 to node 2 with weight 2",
        ))
        .stdout(predicate::str::contains(
            "2. Add edge from node 0 to node 1 with weight 4",
        ))
        .stdout(predicate::str::contains("Total weight: 6 (spanning tree)"));
}

#[test]
fn test_prim_requires_source() {
    algotrace()
        .args(["mst", "--algorithm", "prim"])
        .args(TRIANGLE_EDGES)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("prim requires a source node"));
}

#[test]
fn test_prim_from_source() {
    algotrace()
        .args(["mst", "-a", "prim", "-s", "0"])
        .args(TRIANGLE_EDGES)
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Start from node 0"))
        .stdout(predicate::str::contains("Total weight: 6 (spanning tree)"));
}

#[test]
fn test_prim_unknown_source() {
    algotrace()
        .args(["mst", "-a", "prim", "-s", "7"])
        .args(TRIANGLE_EDGES)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("references node 7"));
}

#[test]
fn test_prim_disconnected_graph() {
    algotrace()
        .args([
            "mst", "-a", "prim", "-s", "0", "--nodes", "4", "--edge", "0-1:1", "--edge", "2-3:1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No valid edge found"))
        .stdout(predicate::str::contains("forest, graph is disconnected"));
}

#[test]
fn test_inline_edge_outside_graph() {
    algotrace()
        .args(["mst", "--nodes", "2", "--edge", "0-5:1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("references node 5"));
}

#[test]
fn test_malformed_edge_spec_is_usage_error() {
    algotrace()
        .args(["mst", "--edge", "0:1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid edge spec"));
}

#[test]
fn test_no_graph_is_usage_error() {
    algotrace()
        .args(["--format", "json", "mst"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_json_graph_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("triangle.json");
    fs::write(
        &path,
        r#"{
  "nodes": 3,
  "edges": [
    {"from": 0, "to": 1, "weight": 4},
    {"from": 1, "to": 2, "weight": 2},
    {"from": 0, "to": 2, "weight": 5}
  ]
}"#,
    )
    .unwrap();

    let output = algotrace()
        .args(["--format", "json", "mst", "--graph"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["algorithm"], "kruskal");
    assert_eq!(json["total_weight"], 6);
    assert_eq!(json["spanning"], true);
    assert_eq!(json["tree"].as_array().unwrap().len(), 2);
    assert_eq!(json["tree"][0]["id"], 1);
    assert_eq!(json["steps"][0]["kind"], "edge_accepted");
    assert_eq!(json["steps"][1]["snapshot"]["tree"], serde_json::json!([1, 0]));
}

#[test]
fn test_toml_graph_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("square.toml");
    fs::write(
        &path,
        r#"
nodes = 4

[[edges]]
from = 0
to = 1
weight = 1

[[edges]]
from = 1
to = 2
weight = 1

[[edges]]
from = 2
to = 3
weight = 1

[[edges]]
from = 3
to = 0
weight = 9
"#,
    )
    .unwrap();

    algotrace()
        .args(["mst", "-q", "--graph"])
        .arg(&path)
        .assert()
        .success()
        .stdout("Total weight: 3 (spanning tree)\n");
}

#[test]
fn test_yaml_graph_document_with_positions() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("line.yaml");
    fs::write(
        &path,
        r#"
nodes:
  - { id: 0, x: 10.0, y: 10.0 }
  - { id: 1, x: 50.0, y: 10.0 }
edges:
  - { from: 0, to: 1, weight: 3 }
"#,
    )
    .unwrap();

    algotrace()
        .args(["mst", "-a", "prim", "-s", "1", "--graph"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Add edge from node 0 to node 1 with weight 3",
        ));
}

#[test]
fn test_malformed_graph_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{\"nodes\": 3, \"edges\": [").unwrap();

    algotrace()
        .args(["--format", "json", "mst", "--graph"])
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"invalid_graph_document\""));
}

#[test]
fn test_mst_records_output() {
    algotrace()
        .args(["--format", "records", "mst", "--nodes", "3"])
        .args(TRIANGLE_EDGES)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H algotrace=1 records=1 mode=mst algorithm=kruskal nodes=3 edges=3 total_weight=6 spanning=true steps=2",
        ))
        .stdout(predicate::str::contains(
            "S 0 edge_accepted hl=1,2 \"Add edge from node 1 to node 2 with weight 2\"",
        ))
        .stdout(predicate::str::contains("E 1 1 2 2"))
        .stdout(predicate::str::contains("E 0 0 1 4"));
}

#[test]
fn test_total_weight_overflow_is_data_error() {
    algotrace()
        .args([
            "--format",
            "json",
            "mst",
            "--edge",
            "0-1:5000000000000000000",
            "--edge",
            "1-2:5000000000000000000",
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"weight_overflow\""));
}

#[test]
fn test_edge_endpoint_at_usize_max() {
    algotrace()
        .args(["mst", "--edge", "0-18446744073709551615:1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("references node 18446744073709551615"));
}
