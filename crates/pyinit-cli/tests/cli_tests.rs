//! Binary-level tests for the `pyinit` command.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn pyinit() -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("pyinit");
    cmd.env_remove("RUST_LOG")
        .env_remove("NO_COLOR")
        .env_remove("PYINIT_OUTPUT__FORMAT")
        .env_remove("PYINIT_OUTPUT__NO_COLOR");
    cmd
}

#[test]
fn help_describes_arguments() {
    pyinit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("NAME"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn version_flag() {
    pyinit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn creates_project_in_output_dir() {
    let temp = TempDir::new().unwrap();

    pyinit()
        .args(["widget", "-o"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created project"))
        .stdout(predicate::str::contains("widget/"))
        .stdout(predicate::str::contains("cd widget"))
        .stdout(predicate::str::contains("uv sync"));

    let project = temp.path().join("widget");
    let manifest = fs::read_to_string(project.join("pyproject.toml")).unwrap();
    assert!(manifest.contains("name = \"widget\""));
    assert!(project.join("src/widget/infrastructure/__init__.py").is_file());
}

#[test]
fn defaults_to_current_directory() {
    let temp = TempDir::new().unwrap();

    pyinit()
        .current_dir(temp.path())
        .arg("my-project")
        .assert()
        .success();

    assert!(temp.path().join("my-project/src/my_project/config.py").is_file());
}

#[test]
fn rerun_succeeds_and_keeps_markers() {
    let temp = TempDir::new().unwrap();
    let run = || {
        pyinit()
            .args(["widget", "--output"])
            .arg(temp.path())
            .assert()
            .success()
    };

    run();
    let marker = temp.path().join("widget/src/widget/entities/__init__.py");
    fs::write(&marker, "\"\"\"Domain entities.\"\"\"\n").unwrap();

    run().stdout(predicate::str::contains("Kept 4 existing"));
    assert_eq!(
        fs::read_to_string(&marker).unwrap(),
        "\"\"\"Domain entities.\"\"\"\n"
    );
}

#[test]
fn missing_name_is_a_usage_error() {
    pyinit().args(["-o", "/tmp"]).assert().code(2);
}

#[test]
fn invalid_name_exits_with_user_error() {
    let temp = TempDir::new().unwrap();

    pyinit()
        .arg("..")
        .arg("-o")
        .arg(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"));

    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn missing_output_dir_exits_with_not_found() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope");

    pyinit()
        .arg("widget")
        .arg("-o")
        .arg(&missing)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("does not exist"))
        .stderr(predicate::str::contains("mkdir -p"));

    assert!(!missing.exists());
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();

    pyinit()
        .args(["my-project", "--dry-run", "-o"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("pyproject.toml"))
        .stdout(predicate::str::contains("my_project/"))
        .stdout(predicate::str::contains("would fail").not());

    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn json_output_is_the_report() {
    let temp = TempDir::new().unwrap();

    let assert = pyinit()
        .args(["my-project", "--output-format", "json", "-o"])
        .arg(temp.path())
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["package"], "my_project");
    assert_eq!(report["preserved"].as_array().map(Vec::len), Some(0));
    assert!(
        report["written"]
            .as_array()
            .unwrap()
            .iter()
            .any(|p| p == "pyproject.toml")
    );
}

#[test]
fn quiet_prints_nothing_on_success() {
    let temp = TempDir::new().unwrap();

    pyinit()
        .args(["widget", "-q", "-o"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn completions_need_no_name() {
    pyinit()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pyinit"));
}

#[test]
fn missing_config_file_is_a_configuration_error() {
    let temp = TempDir::new().unwrap();

    pyinit()
        .arg("widget")
        .arg("-o")
        .arg(temp.path())
        .arg("--config")
        .arg(temp.path().join("absent.toml"))
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));

    assert!(!temp.path().join("widget").exists());
}

#[test]
fn no_color_env_accepts_any_value() {
    let temp = TempDir::new().unwrap();

    pyinit()
        .env("NO_COLOR", "1")
        .args(["widget", "--output-format", "human", "-o"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created project"))
        .stdout(predicate::str::contains("\u{1b}[").not());

    assert!(temp.path().join("widget/pyproject.toml").is_file());
}

#[test]
fn falsey_no_color_keeps_color() {
    let temp = TempDir::new().unwrap();

    pyinit()
        .env("NO_COLOR", "0")
        .args(["widget", "--output-format", "human", "-o"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}["));
}

fn write_config(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("pyinit.toml");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn env_format_overrides_config_file() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, "[output]\nformat = \"plain\"\n");
    let out = temp.path().join("out");
    fs::create_dir(&out).unwrap();

    let assert = pyinit()
        .env("PYINIT_OUTPUT__FORMAT", "json")
        .args(["widget", "--config"])
        .arg(&config)
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["package"], "widget");
}

#[test]
fn format_flag_beats_env() {
    let temp = TempDir::new().unwrap();

    pyinit()
        .env("PYINIT_OUTPUT__FORMAT", "json")
        .args(["widget", "--output-format", "human", "-o"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created project"))
        .stdout(predicate::str::starts_with("{").not());
}

#[test]
fn env_no_color_overrides_config_file() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, "[output]\nno_color = false\n");
    let out = temp.path().join("out");
    fs::create_dir(&out).unwrap();

    pyinit()
        .env("PYINIT_OUTPUT__NO_COLOR", "true")
        .args(["widget", "--output-format", "human", "--config"])
        .arg(&config)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created project"))
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn dry_run_warns_about_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope");

    pyinit()
        .args(["widget", "--dry-run", "-o"])
        .arg(&missing)
        .assert()
        .success()
        .stdout(predicate::str::contains("a real run would fail"));

    assert!(!missing.exists());
}
