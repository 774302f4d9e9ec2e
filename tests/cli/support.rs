use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::process::Output;

/// Get a Command for algotrace, isolated from the caller's logging and
/// config environment
pub fn algotrace() -> Command {
    let mut cmd = cargo_bin_cmd!("algotrace");
    cmd.env_remove("RUST_LOG")
        .env_remove("ALGOTRACE_LOG")
        .env_remove("ALGOTRACE_CONFIG")
        .env(
            "ALGOTRACE_CONFIG_DIR",
            std::env::temp_dir().join("algotrace-tests-no-global-config"),
        );
    cmd
}

/// Parse stdout as a JSON document
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not JSON ({}): {}",
            e,
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

/// Triangle used across graph tests: (0,1,4), (1,2,2), (0,2,5)
pub const TRIANGLE_EDGES: [&str; 6] = [
    "--edge", "0-1:4", "--edge", "1-2:2", "--edge", "0-2:5",
];
