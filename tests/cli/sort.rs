use crate::cli::support::{algotrace, stdout_json};
use predicates::prelude::*;
use serde_json::json;

#[test]
fn test_sort_bubble_human() {
    algotrace()
        .args(["sort", "5", "3", "4", "1", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bubble sort of 5 values"))
        .stdout(predicate::str::contains("1. Initial array: 5, 3, 4, 1, 2"))
        .stdout(predicate::str::contains(
            "2. Comparing 5 at position 0 with 3 at position 1",
        ))
        .stdout(predicate::str::contains("Swapped 5 and 3 (positions 0 and 1)"))
        .stdout(predicate::str::contains("Sorted: 1, 2, 3, 4, 5"));
}

#[test]
fn test_sort_comma_separated_values() {
    algotrace()
        .args(["sort", "--algorithm", "merge", "5,3,4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("merge sort of 3 values"))
        .stdout(predicate::str::contains("Dividing array"))
        .stdout(predicate::str::contains("Sorted: 3, 4, 5"));
}

#[test]
fn test_sort_negative_and_fractional_values() {
    algotrace()
        .args(["sort", "-a", "quick", "2", "-3", "-1.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pivot selected"))
        .stdout(predicate::str::contains("Sorted: -3, -1.5, 2"));
}

#[test]
fn test_sort_non_numeric_entry() {
    algotrace()
        .args(["sort", "1", "abc", "3"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("array entry 1 is not a number"));
}

#[test]
fn test_sort_non_numeric_entry_json_error() {
    algotrace()
        .args(["--format", "json", "sort", "1", "abc"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"invalid_numeric_input\""));
}

#[test]
fn test_sort_unknown_algorithm() {
    algotrace()
        .args(["sort", "--algorithm", "heap", "2", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported sort algorithm"));
}

#[test]
fn test_sort_requires_values() {
    algotrace().arg("sort").assert().code(2);
}

#[test]
fn test_sort_json_output() {
    let output = algotrace()
        .args(["--format", "json", "sort", "--algorithm", "quick", "3", "1", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["algorithm"], "quick");
    assert_eq!(json["input"], json!([3.0, 1.0, 2.0]));
    assert_eq!(json["sorted"], json!([1.0, 2.0, 3.0]));
    assert_eq!(json["snapshots"][0], json!([3.0, 1.0, 2.0]));

    let steps = json["steps"].as_array().unwrap();
    assert_eq!(steps[0]["kind"], "initial");
    assert_eq!(steps[1]["kind"], "pivot_selected");
    assert_eq!(steps[1]["text"], "Pivot selected: 2 at position 2");
}

#[test]
fn test_sort_records_output() {
    algotrace()
        .args(["--format", "records", "sort", "-a", "insertion", "3", "1", "2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H algotrace=1 records=1 mode=sort algorithm=insertion values=3",
        ))
        .stdout(predicate::str::contains(
            "S 0 initial hl=- \"Initial array: 3, 1, 2\"",
        ))
        .stdout(predicate::str::contains(
            "key_selected hl=1 \"Preparing to insert 1 into the sorted portion of the array\"",
        ))
        .stdout(predicate::str::contains("\nA 1,2,3\n"));
}

#[test]
fn test_sort_quiet_prints_only_result() {
    algotrace()
        .args(["-q", "sort", "3", "1", "2"])
        .assert()
        .success()
        .stdout("Sorted: 1, 2, 3\n");
}

#[test]
fn test_sort_snapshots_can_be_hidden() {
    algotrace()
        .args(["sort", "2", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1, 2]"));

    algotrace()
        .args(["--no-snapshots", "sort", "2", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1, 2]").not());
}

#[test]
fn test_sort_delay_keeps_output() {
    algotrace()
        .args(["--delay-ms", "1", "sort", "-a", "selection", "2", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorted: 1, 2"));
}
