//! Integration tests for config file handling.

use std::io::Write;

use predicates::prelude::*;

use super::jcol;

fn config_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn config_file_columns_and_format() {
    let config = config_file("columns = [\"level\", \"msg\"]\nformat = \"json\"\n");
    jcol()
        .arg("--config")
        .arg(config.path())
        .write_stdin(r#"{"msg":"hi","level":"info"}"#)
        .assert()
        .success()
        .stdout("{\"level\":\"info\",\"msg\":\"hi\"}\n");
}

#[test]
fn cli_flags_override_config_file() {
    let config = config_file("columns = [\"level\", \"msg\"]\nheader = true\n");
    jcol()
        .arg("--config")
        .arg(config.path())
        .args(["--columns=msg", "--no-header"])
        .write_stdin(r#"{"msg":"hi","level":"info"}"#)
        .assert()
        .success()
        .stdout("hi\n");
}

#[test]
fn config_from_xdg_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("jcol")).unwrap();
    let config = dir.path().join("jcol").join("config.toml");
    std::fs::write(&config, "columns = [\"a\"]\nheader = false\n").unwrap();

    jcol()
        .env("XDG_CONFIG_HOME", dir.path())
        .write_stdin(r#"{"a":1}"#)
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn empty_column_list_rejected() {
    let config = config_file("columns = []\n");
    jcol()
        .arg("--config")
        .arg(config.path())
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("at least one column"));
}

#[test]
fn malformed_config_rejected() {
    let config = config_file("columns = \"not a list\"\n");
    jcol()
        .arg("--config")
        .arg(config.path())
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config file error"));
}

#[test]
fn missing_config_file_rejected() {
    jcol()
        .args(["--config", "/nonexistent/jcol/config.toml"])
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot read config file"));
}
