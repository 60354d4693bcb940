//! Integration tests for the jobxml binary

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

fn jobxml(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("jobxml"));
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

const FREESTYLE_JOB: &str = r#"
name: web-app
job_type: freestyle
description: Builds the web frontend.
assigned_node: linux
steps:
  - type: shell
    command: npm ci && npm test
scm:
  strategy: git
  repositories:
    - url: git@example.com:web/app.git
      branch: main
triggers:
  - kind: scm_poll
    spec: H/5 * * * *
"#;

const MAVEN_JOB: &str = r#"
name = "core-lib"
job_type = "maven"

[maven]
goals = "clean deploy"

[deploy]
url = "https://repo.example.com/snapshots"
"#;

#[test]
fn test_generate_to_stdout() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("web-app.yaml"), FREESTYLE_JOB).unwrap();

    jobxml(&dir)
        .args(["generate", "web-app.yaml", "--timestamp", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<?xml version='1.0' encoding='UTF-8'?>"))
        .stdout(predicate::str::contains("Generated by jobxml from web-app.yaml"))
        .stdout(predicate::str::contains("<assignedNode>linux</assignedNode>"))
        .stdout(predicate::str::contains("<command>npm ci &amp;&amp; npm test</command>"))
        .stdout(predicate::str::contains("on 2024-01-01."))
        .stdout(predicate::str::ends_with("</project>\n"));
}

#[test]
fn test_generate_to_file_with_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("core-lib.toml"), MAVEN_JOB).unwrap();
    fs::write(
        dir.path().join("jobxml.toml"),
        "indent = \"\\t\"\nline_separator = \"crlf\"\n",
    )
    .unwrap();

    jobxml(&dir)
        .args(["generate", "core-lib.toml", "-o", "out/core-lib/config.xml"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let xml = fs::read_to_string(dir.path().join("out/core-lib/config.xml")).unwrap();
    assert!(xml.contains("<maven2-moduleset>\r\n\t<actions/>\r\n"));
    assert!(xml.contains("<goals>clean deploy</goals>"));
    assert!(xml.contains("<hudson.maven.RedeployPublisher>"));
}

#[test]
fn test_flags_override_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("web-app.yaml"), FREESTYLE_JOB).unwrap();
    fs::write(dir.path().join("jobxml.toml"), "line_separator = \"crlf\"\n").unwrap();

    jobxml(&dir)
        .args(["generate", "web-app.yaml", "--line-separator", "lf", "--indent", "    "])
        .assert()
        .success()
        .stdout(predicate::str::contains("\r\n").not())
        .stdout(predicate::str::contains("<project>\n    <actions/>\n"));
}

#[test]
fn test_validate_reports_success() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("web-app.yaml"), FREESTYLE_JOB).unwrap();

    jobxml(&dir)
        .args(["validate", "web-app.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("web-app.yaml: ok (freestyle job 'web-app'"));
}

#[test]
fn test_validate_reports_unknown_strategy() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("broken.json"),
        r#"{"name": "broken", "scm": {"strategy": "darcs", "repositories": []}}"#,
    )
    .unwrap();

    jobxml(&dir)
        .args(["validate", "broken.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown SCM strategy 'darcs'"))
        .stderr(predicate::str::contains("git, subversion"));
}

#[test]
fn test_missing_job_file() {
    let dir = TempDir::new().unwrap();

    jobxml(&dir)
        .args(["generate", "absent.yaml"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("job.ini"), "name=app").unwrap();

    jobxml(&dir)
        .args(["validate", "job.ini"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ini"));
}

#[test]
fn test_invalid_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("web-app.yaml"), FREESTYLE_JOB).unwrap();
    fs::write(dir.path().join("settings.toml"), "indent = [\n").unwrap();

    jobxml(&dir)
        .args(["generate", "web-app.yaml", "--config", "settings.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration parsing failed"));
}

#[test]
fn test_strategies_lists_builtins() {
    let dir = TempDir::new().unwrap();

    jobxml(&dir)
        .arg("strategies")
        .assert()
        .success()
        .stdout(predicate::str::contains("git"))
        .stdout(predicate::str::contains("subversion"));
}

#[test]
fn test_debug_level_logs_to_stderr() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("web-app.yaml"), FREESTYLE_JOB).unwrap();

    jobxml(&dir)
        .args(["--level", "debug", "generate", "web-app.yaml"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"))
        .stdout(predicate::str::starts_with("<?xml"));
}
