// crates/adapter-contract-cli/tests/cli_commands.rs
// ============================================================================
// Module: CLI Command Tests
// Description: End-to-end runs of the adapter-contract binary.
// Purpose: Pin stdout, stderr and exit codes of every subcommand.
// Dependencies: adapter-contract-cli binary, serde_json, tempfile
// ============================================================================

//! Runs the built binary against fixture files in a scratch directory.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::fs;
use std::path::Path;
use std::process::Command;
use std::process::Output;

use serde_json::Value;
use serde_json::json;
use tempfile::TempDir;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn run_cli(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_adapter-contract"))
        .args(args)
        .current_dir(cwd)
        .env_remove("ADAPTER_CONTRACT_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("run adapter-contract")
}

fn write_json(dir: &Path, name: &str, value: &Value) {
    fs::write(dir.join(name), serde_json::to_vec(value).unwrap()).unwrap();
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout).lines().map(str::to_string).collect()
}

fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn service_info() -> Value {
    json!({
        "version": 3,
        "resources": {
            "cores": { "topology": "flat", "hasCapacity": true, "hasQuota": true },
            "ram": { "unit": "MiB", "topology": "az-aware", "hasCapacity": true, "hasQuota": true }
        },
        "rates": {
            "launches": { "topology": "flat", "hasUsage": true }
        }
    })
}

fn scratch() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_json(dir.path(), "info.json", &service_info());
    dir
}

// ============================================================================
// SECTION: Info
// ============================================================================

#[test]
fn info_validate_accepts_conforming_manifest() {
    let dir = scratch();
    let output = run_cli(dir.path(), &["info", "validate", "--info", "info.json"]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_text(&output));
    assert!(stdout_lines(&output).is_empty());
}

#[test]
fn info_validate_prints_each_violation() {
    let dir = scratch();
    write_json(
        dir.path(),
        "bad-info.json",
        &json!({
            "version": 1,
            "resources": { "Bad Name": { "topology": "flat" } },
            "rates": { "launches": { "topology": "flat" } }
        }),
    );
    let output = run_cli(dir.path(), &["info", "validate", "--info", "bad-info.json"]);
    assert_eq!(output.status.code(), Some(1));
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with(r#".Resources["Bad Name"] has invalid name"#));
    assert_eq!(lines[1], r#".Rates["launches"] declared with HasUsage = false, but must be true"#);
}

#[test]
fn unreadable_input_exits_with_error_code() {
    let dir = scratch();
    let output = run_cli(dir.path(), &["info", "validate", "--info", "missing.json"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_text(&output).contains("failed to read service info missing.json"));
}

// ============================================================================
// SECTION: Capacity
// ============================================================================

#[test]
fn capacity_validate_uses_zone_flags() {
    let dir = scratch();
    write_json(
        dir.path(),
        "capacity.json",
        &json!({
            "infoVersion": 3,
            "resources": {
                "cores": { "perAZ": { "any": { "capacity": 100 } } },
                "ram": { "perAZ": { "az-one": { "capacity": 1024 } } }
            }
        }),
    );
    let args = [
        "capacity",
        "validate",
        "--info",
        "info.json",
        "--report",
        "capacity.json",
        "--az",
        "az-one",
        "--az",
        "az-two",
    ];
    let output = run_cli(dir.path(), &args);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_lines(&output),
        vec![
            r#".Resources["ram"].PerAZ has entries for ["az-one"], which is invalid for topology "az-aware" (expected entries for ["az-one", "az-two"])"#
                .to_string()
        ]
    );
}

#[test]
fn capacity_validate_takes_zones_from_request() {
    let dir = scratch();
    write_json(dir.path(), "request.json", &json!({ "allAZs": ["az-one"] }));
    write_json(
        dir.path(),
        "capacity.json",
        &json!({
            "infoVersion": 3,
            "resources": {
                "cores": { "perAZ": { "any": { "capacity": 100 } } },
                "ram": { "perAZ": { "az-one": { "capacity": 1024 } } }
            }
        }),
    );
    let args = [
        "capacity",
        "validate",
        "--info",
        "info.json",
        "--report",
        "capacity.json",
        "--request",
        "request.json",
    ];
    let output = run_cli(dir.path(), &args);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_text(&output));
    assert!(stdout_lines(&output).is_empty());
}

#[test]
fn capacity_validate_without_zones_is_an_error() {
    let dir = scratch();
    write_json(dir.path(), "capacity.json", &json!({ "infoVersion": 3 }));
    let args = ["capacity", "validate", "--info", "info.json", "--report", "capacity.json"];
    let output = run_cli(dir.path(), &args);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_text(&output).contains("no availability zones given"));
}

// ============================================================================
// SECTION: Usage
// ============================================================================

#[test]
fn usage_validate_takes_zones_from_default_config() {
    let dir = scratch();
    fs::write(dir.path().join("adapter-contract.toml"), "[zones]\nall = [\"az-one\", \"az-two\"]\n")
        .unwrap();
    write_json(
        dir.path(),
        "usage.json",
        &json!({
            "infoVersion": 3,
            "resources": {
                "cores": { "quota": 10, "perAZ": { "any": { "usage": 4 } } },
                "ram": {
                    "quota": 4096,
                    "perAZ": { "az-one": { "usage": 512 }, "az-two": { "usage": 0 } }
                }
            },
            "rates": {
                "launches": { "perAZ": { "any": { "usage": "12" } } }
            }
        }),
    );
    let args = ["usage", "validate", "--info", "info.json", "--report", "usage.json"];
    let output = run_cli(dir.path(), &args);
    assert_eq!(output.status.code(), Some(0), "stdout: {:?}", stdout_lines(&output));
}

#[test]
fn usage_validate_reports_stale_info_version_only() {
    let dir = scratch();
    write_json(dir.path(), "usage.json", &json!({ "infoVersion": 2 }));
    let args =
        ["usage", "validate", "--info", "info.json", "--report", "usage.json", "--az", "az-one"];
    let output = run_cli(dir.path(), &args);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_lines(&output),
        vec![
            "received ServiceUsageReport is invalid: expected .InfoVersion = 3, but got 2"
                .to_string()
        ]
    );
}

// ============================================================================
// SECTION: Commitments
// ============================================================================

fn commitment_request(confirmed_after: u64) -> Value {
    json!({
        "az": "az-one",
        "infoVersion": 3,
        "byProject": {
            "4d2a3c1e-0000-4000-8000-000000000001": {
                "byResource": {
                    "cores": {
                        "totalConfirmedBefore": 10,
                        "totalConfirmedAfter": confirmed_after,
                        "commitments": [{
                            "uuid": "9b1f0c2e-0000-4000-8000-000000000002",
                            "newStatus": "confirmed",
                            "amount": 5,
                            "expiresAt": "2027-01-01T00:00:00Z"
                        }]
                    }
                }
            }
        }
    })
}

#[test]
fn commitment_check_reports_required_confirmation() {
    let dir = scratch();
    write_json(dir.path(), "change.json", &commitment_request(15));
    let output = run_cli(dir.path(), &["commitment", "check", "--request", "change.json"]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_text(&output));
    assert_eq!(stdout_lines(&output), vec!["confirmation required".to_string()]);

    let output = run_cli(
        dir.path(),
        &["commitment", "check", "--request", "change.json", "--deny-confirmation"],
    );
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn commitment_check_passes_non_growing_change() {
    let dir = scratch();
    write_json(dir.path(), "change.json", &commitment_request(10));
    let output = run_cli(
        dir.path(),
        &["commitment", "check", "--request", "change.json", "--deny-confirmation"],
    );
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_text(&output));
    assert_eq!(stdout_lines(&output), vec!["confirmation not required".to_string()]);
}

// ============================================================================
// SECTION: Config
// ============================================================================

#[test]
fn config_validate_prints_effective_config() {
    let dir = scratch();
    fs::write(dir.path().join("custom.toml"), "[zones]\nall = [\"az-one\"]\n").unwrap();
    let output = run_cli(dir.path(), &["config", "validate", "--config", "custom.toml"]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_text(&output));
    let rendered = String::from_utf8_lossy(&output.stdout);
    assert!(rendered.contains("all = [\"az-one\"]"));
    assert!(rendered.contains("max_input_bytes = 4194304"));
    assert!(rendered.contains("level = \"info\""));
}

#[test]
fn invalid_config_fails_every_command() {
    let dir = scratch();
    fs::write(dir.path().join("adapter-contract.toml"), "[zones]\nall = [\"any\"]\n").unwrap();
    let output = run_cli(dir.path(), &["info", "validate", "--info", "info.json"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_text(&output).starts_with("failed to load config: invalid config:"));
}

#[test]
fn input_limit_from_config_is_enforced() {
    let dir = scratch();
    fs::write(dir.path().join("adapter-contract.toml"), "[limits]\nmax_input_bytes = 16\n")
        .unwrap();
    let output = run_cli(dir.path(), &["info", "validate", "--info", "info.json"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_text(&output).contains("exceeding the limit of 16 bytes"));
}
