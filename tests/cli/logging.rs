use crate::cli::support::algotrace;
use predicates::prelude::*;

// ============================================================================
// Logging flag tests
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    algotrace()
        .args(["--log-level", "debug", "sort", "2", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_level_warn_hides_debug_messages() {
    algotrace()
        .args(["--log-level", "warn", "sort", "2", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_shows_debug_messages() {
    algotrace()
        .args(["--verbose", "sort", "2", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_json_produces_valid_json() {
    algotrace()
        .args(["--log-json", "--log-level", "debug", "sort", "2", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"timestamp\""))
        .stderr(predicate::str::contains("\"level\""))
        .stderr(predicate::str::contains("\"message\""));
}

#[test]
fn test_trace_level_reports_timings() {
    algotrace()
        .args(["--log-level", "trace", "sort", "2", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("run_sort"));
}

#[test]
fn test_env_filter_wins_over_flags() {
    algotrace()
        .env("ALGOTRACE_LOG", "algotrace=debug")
        .args(["--log-level", "error", "sort", "2", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_logs_stay_off_stdout() {
    algotrace()
        .args(["-q", "--log-level", "debug", "sort", "2", "1"])
        .assert()
        .success()
        .stdout("Sorted: 1, 2\n");
}

#[test]
fn test_negative_weight_warning_when_allowed() {
    algotrace()
        .args(["path", "-s", "0", "--allow-negative", "--edge", "0>1:-2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("negative weights"));
}
