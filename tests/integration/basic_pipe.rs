//! Integration tests for basic stdin->stdout piping.

use predicates::prelude::*;

use super::jcol;

#[test]
fn empty_stdin_prints_header_only() {
    jcol()
        .write_stdin("")
        .assert()
        .success()
        .stdout("@timestamp\tapi\trequest.url\tresponse.body\trequest.body\tcontext.siteurl\toperationName\n");
}

#[test]
fn empty_stdin_no_header_prints_nothing() {
    jcol().arg("--no-header").write_stdin("").assert().success().stdout("");
}

#[test]
fn api_line_projected_in_schema_order() {
    let input = r#"{"operationName":"Get","api":"users","request":{"url":"/u/1"}}"#;
    jcol()
        .arg("--no-header")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("\tusers\t/u/1\t\t\t\tGet\n");
}

#[test]
fn nested_field_reaches_its_column() {
    let input = r#"{"context":{"siteurl":"http://x"}}"#;
    jcol()
        .args(["--no-header", "--columns=context.siteurl"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("http://x\n");
}

#[test]
fn prefix_path_does_not_match() {
    let input = r#"{"request":{"body":{"id":1}}}"#;
    jcol()
        .args(["--no-header", "--columns=request.body,request.body.id"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("\t1\n");
}

#[test]
fn json_output_format() {
    let input = r#"{"api":"a","x":null}"#;
    jcol()
        .args(["--format=json", "--columns=api,x", "--null=literal"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("{\"api\":\"a\",\"x\":\"null\"}\n");
}

#[test]
fn table_output_with_truncation() {
    let input = r#"{"a":"0123456789","b":"ok"}"#;
    jcol()
        .args(["--format=table", "--columns=a,b", "-M", "4", "--color=never"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("a | b\n0123… | ok\n");
}

#[test]
fn colored_header_when_forced() {
    jcol()
        .args(["--color=always", "--columns=a"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}["));
}
