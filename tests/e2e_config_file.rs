/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from a config file on disk through CLI
/// invocation to output, using `assert_cmd` and `tempfile` for isolated test
/// environments.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

/// Command running in `dir` against the before/after fixtures.
fn command_in(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("dep-tree-diff");
    cmd.current_dir(dir)
        .arg(fixture("before.txt"))
        .arg(fixture("after.txt"));
    cmd
}

// ============================================================================
// Config discovery
// ============================================================================

#[test]
fn test_discovered_config_sets_mode() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        &temp_dir.path().join("dep-tree-diff.config.yml"),
        "mode: flattened\n",
    );

    command_in(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "=== Dependency Diff (flattened by resolved coordinates) ===",
        ));
}

#[test]
fn test_no_config_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();

    command_in(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(" +--- project :core\n"));
}

#[test]
fn test_cli_mode_overrides_config() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        &temp_dir.path().join("dep-tree-diff.config.yml"),
        "mode: flattened\nformat: markdown\n",
    );

    command_in(temp_dir.path())
        .args(["-m", "only-changes", "-f", "text"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("-|    +--- androidx.core:core-ktx"));
}

#[test]
fn test_config_format_applies() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        &temp_dir.path().join("dep-tree-diff.config.yml"),
        "format: json\n",
    );

    let output = command_in(temp_dir.path()).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["strategy"], "full");
}

#[test]
fn test_config_fail_on_changes() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        &temp_dir.path().join("dep-tree-diff.config.yml"),
        "fail_on_changes: true\n",
    );

    command_in(temp_dir.path()).assert().code(1);
}

#[test]
fn test_config_lenient_parsing() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        &temp_dir.path().join("dep-tree-diff.config.yml"),
        "strict: false\n",
    );

    cargo_bin_cmd!("dep-tree-diff")
        .current_dir(temp_dir.path())
        .arg(fixture("malformed.txt"))
        .arg(fixture("malformed.txt"))
        .assert()
        .success();
}

#[test]
fn test_cli_strict_overrides_lenient_config() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        &temp_dir.path().join("dep-tree-diff.config.yml"),
        "strict: false\n",
    );

    cargo_bin_cmd!("dep-tree-diff")
        .current_dir(temp_dir.path())
        .arg(fixture("malformed.txt"))
        .arg(fixture("malformed.txt"))
        .arg("--strict")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Malformed dependency line"));
}

#[test]
fn test_config_thresholds_emit_warnings() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        &temp_dir.path().join("dep-tree-diff.config.yml"),
        "thresholds:\n  max_lines: 5\n",
    );

    command_in(temp_dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: before.txt is large"))
        .stderr(predicate::str::contains("(threshold 5 lines)"));
}

#[test]
fn test_unknown_field_is_tolerated() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        &temp_dir.path().join("dep-tree-diff.config.yml"),
        "mode: full\nshiny_new_option: 1\n",
    );

    command_in(temp_dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Unknown config field 'shiny_new_option' will be ignored",
        ));
}

// ============================================================================
// Explicit config path
// ============================================================================

#[test]
fn test_explicit_config_path() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("custom.yml");
    write_config(&config_path, "mode: legacy\n");

    command_in(temp_dir.path())
        .arg("-c")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("retrofit").not());
}

#[test]
fn test_explicit_config_missing_file() {
    let temp_dir = TempDir::new().unwrap();

    command_in(temp_dir.path())
        .args(["-c", "does-not-exist.yml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to read config file"));
}

// ============================================================================
// Invalid configs
// ============================================================================

#[test]
fn test_invalid_yaml_fails() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        &temp_dir.path().join("dep-tree-diff.config.yml"),
        "mode: [unclosed\n",
    );

    command_in(temp_dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_invalid_mode_in_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        &temp_dir.path().join("dep-tree-diff.config.yml"),
        "mode: sideways\n",
    );

    command_in(temp_dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid mode: sideways"));
}

#[test]
fn test_zero_threshold_in_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        &temp_dir.path().join("dep-tree-diff.config.yml"),
        "thresholds:\n  max_bytes: 0\n",
    );

    command_in(temp_dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid config: thresholds"));
}
