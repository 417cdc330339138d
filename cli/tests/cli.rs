#![cfg(test)]

use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::*;

fn cli_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rdf-deref"))
}

#[test]
fn cli_help() {
    cli_command()
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn cli_serve_requires_endpoint_for_sparql() {
    cli_command()
        .args(["serve", "--source", "sparql", "--uri-host", "http://example.org"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--endpoint"));
}

#[test]
fn cli_serve_requires_hdt_file_for_hdt() {
    cli_command()
        .args(["serve", "--source", "hdt", "--uri-host", "http://example.org"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--hdt-file"));
}

#[test]
fn cli_serve_rejects_missing_hdt_file() {
    let dir = TempDir::new().unwrap();
    cli_command()
        .args(["serve", "--source", "hdt", "--uri-host", "http://example.org"])
        .arg("--hdt-file")
        .arg(dir.path().join("missing.hdt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn cli_serve_rejects_unsafe_uri_host() {
    cli_command()
        .args([
            "serve",
            "--source",
            "sparql",
            "--uri-host",
            "http://example.org/a;b",
            "--endpoint",
            "http://localhost:9999/sparql",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not allowed"));
}
