//! Integration tests for file arguments and the priority report.

use predicates::prelude::*;

use super::jcol;

#[test]
fn reads_files_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("a.jsonl");
    let second = dir.path().join("b.jsonl");
    std::fs::write(&first, "{\"api\":\"one\"}\n").unwrap();
    std::fs::write(&second, "{\"api\":\"two\"}\n").unwrap();

    jcol()
        .args(["--no-header", "--columns=api"])
        .arg(&first)
        .arg(&second)
        .assert()
        .success()
        .stdout("one\ntwo\n");
}

#[test]
fn dash_reads_stdin() {
    jcol()
        .args(["--no-header", "--columns=api", "-"])
        .write_stdin("{\"api\":\"in\"}")
        .assert()
        .success()
        .stdout("in\n");
}

#[test]
fn missing_file_is_io_error() {
    jcol()
        .arg("/nonexistent/input.jsonl")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot open"));
}

#[test]
fn priority_report() {
    jcol()
        .args(["--priority", "access.jsonl", "access.log", "UPPER.JSONL"])
        .assert()
        .success()
        .stdout("access.jsonl\twell-supported\naccess.log\tnot-supported\nUPPER.JSONL\twell-supported\n");
}

#[test]
fn priority_uses_configured_extension() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "extension = \"ndjson\"\n").unwrap();

    jcol()
        .arg("--config")
        .arg(&config)
        .args(["--priority", "x.ndjson", "x.jsonl"])
        .assert()
        .success()
        .stdout("x.ndjson\twell-supported\nx.jsonl\tnot-supported\n");
}
