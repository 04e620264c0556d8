//! Integration tests for the `otelgen` binary against a local catalog.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const CATALOG: &str = r"
dist:
  version: 0.92.0
receivers:
  - gomod: go.opentelemetry.io/collector/receiver/otlpreceiver v0.92.0
processors:
  - gomod: go.opentelemetry.io/collector/processor/batchprocessor v0.92.0
exporters:
  - gomod: go.opentelemetry.io/collector/exporter/otlpexporter v0.92.0
";

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("failed to write");
    path
}

fn otelgen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_otelgen"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to run otelgen")
}

#[test]
fn writes_manifest_with_catalog_version() {
    let dir = tempfile::tempdir().expect("failed to create tempdir");
    let catalog = write(dir.path(), "catalog.yaml", CATALOG);
    let config = write(
        dir.path(),
        "config.yaml",
        "receivers:\n  otlp: {}\n  kafka: {}\nexporters:\n  otlp: {}\n",
    );
    let out = dir.path().join("builder-config.yaml");

    let result = otelgen(&[
        "--catalog",
        catalog.to_str().unwrap(),
        "--otel-version",
        "0.119.0",
        "-o",
        out.to_str().unwrap(),
        config.to_str().unwrap(),
    ]);

    assert!(result.status.success(), "stderr: {}", String::from_utf8_lossy(&result.stderr));
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("0.92.0"), "stdout: {stdout}");
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("kafka"), "stderr: {stderr}");
    assert!(stderr.contains("0.119.0"), "stderr: {stderr}");

    let manifest: serde_yaml::Value =
        serde_yaml::from_str(&std::fs::read_to_string(&out).expect("read manifest"))
            .expect("parse manifest");
    assert_eq!(manifest["dist"]["otelcol_version"].as_str(), Some("0.92.0"));
    assert_eq!(
        manifest["receivers"].as_sequence().map(Vec::len),
        Some(1)
    );
}

#[test]
fn stdout_mode_prints_manifest() {
    let dir = tempfile::tempdir().expect("failed to create tempdir");
    let catalog = write(dir.path(), "catalog.yaml", CATALOG);
    let config = write(dir.path(), "config.yaml", "processors:\n  batch: {}\n");

    let result = otelgen(&[
        "--catalog",
        catalog.to_str().unwrap(),
        "--stdout",
        config.to_str().unwrap(),
    ]);

    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("batchprocessor v0.92.0"), "stdout: {stdout}");
    assert!(!dir.path().join("builder-config.yaml").exists());
}

#[test]
fn broken_reference_fails_without_output() {
    let dir = tempfile::tempdir().expect("failed to create tempdir");
    let catalog = write(dir.path(), "catalog.yaml", CATALOG);
    let valid = write(dir.path(), "valid.yaml", "receivers:\n  otlp: {}\n");
    let broken = write(dir.path(), "broken.yaml", "exporters: ${file:missing.yaml}\n");
    let out = dir.path().join("builder-config.yaml");

    let result = otelgen(&[
        "--catalog",
        catalog.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
        valid.to_str().unwrap(),
        broken.to_str().unwrap(),
    ]);

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("${file:missing.yaml}"), "stderr: {stderr}");
    assert!(!out.exists());
}

#[test]
fn unreachable_catalog_fails() {
    let dir = tempfile::tempdir().expect("failed to create tempdir");
    let config = write(dir.path(), "config.yaml", "receivers:\n  otlp: {}\n");

    let result = otelgen(&[
        "--catalog",
        dir.path().join("absent.yaml").to_str().unwrap(),
        config.to_str().unwrap(),
    ]);

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("absent.yaml"), "stderr: {stderr}");
}
