//! Integration tests for mixed JSON + non-JSON input.

use predicates::prelude::*;

use super::jcol;

#[test]
fn plain_text_goes_to_last_column() {
    jcol()
        .arg("--no-header")
        .write_stdin("not json at all")
        .assert()
        .success()
        .stdout("\t\t\t\t\t\tnot json at all\n");
}

#[test]
fn every_row_has_the_same_width() {
    let input = "Starting application...\n\
{\"api\":\"orders\"}\n\
{\"api\":\"orders\", \"msg\":}\n\
[1, 2, 3]\n\
{}\n\
\n\
42";

    let output = jcol().arg("--no-header").write_stdin(input).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let rows: Vec<&str> = stdout.lines().collect();
    assert_eq!(rows.len(), 7);
    for row in &rows {
        assert_eq!(row.split('\t').count(), 7, "row {row:?}");
    }
    assert!(rows[0].ends_with("\tStarting application..."));
    assert_eq!(rows[1], "\torders\t\t\t\t\t");
    assert!(rows[2].ends_with("\t{\"api\":\"orders\", \"msg\":}"));
    assert!(rows[3].ends_with("\t[1, 2, 3]"));
    assert_eq!(rows[4], "\t\t\t\t\t\t");
    assert_eq!(rows[5], "\t\t\t\t\t\t");
    assert!(rows[6].ends_with("\t42"));
}

#[test]
fn invalid_utf8_is_tolerated() {
    let mut input = b"{\"api\":\"ok\"}\n".to_vec();
    input.extend_from_slice(&[0xff, 0xfe, b'x', b'\n']);

    let output = jcol().arg("--no-header").write_stdin(input).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let rows: Vec<&str> = stdout.lines().collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[1].ends_with("\u{fffd}\u{fffd}x"));
}

#[test]
fn crlf_line_endings_stripped() {
    jcol()
        .args(["--no-header", "--columns=api"])
        .write_stdin("{\"api\":\"a\"}\r\nplain\r\n")
        .assert()
        .success()
        .stdout("a\nplain\n");
}

#[test]
fn verbose_logs_fallback_lines() {
    jcol()
        .args(["--no-header", "--verbose"])
        .write_stdin("oops\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("line kept as raw text"));
}

#[test]
fn quiet_by_default() {
    jcol()
        .arg("--no-header")
        .write_stdin("oops\n")
        .assert()
        .success()
        .stderr("");
}
