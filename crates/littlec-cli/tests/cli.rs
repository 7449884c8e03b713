//! CLI end-to-end tests
//!
//! These run the `littlec` binary against temporary source files and
//! check the token listing, diagnostics and exit status.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn littlec_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_littlec"))
}

/// Writes `source` into a fresh temp dir and returns both
fn source_file(source: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("prog.lc");
    fs::write(&path, source).expect("Failed to write source file");
    (dir, path)
}

#[test]
fn test_missing_argument_prints_usage() {
    Command::new(littlec_bin())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_unreadable_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.lc");

    Command::new(littlec_bin())
        .arg(&missing)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cannot open input file"));
}

#[test]
fn test_text_listing() {
    let (_dir, path) = source_file("if (x >= 10) { y = x + 1; }\n");

    let expected = "\
Next token is: 50 (      IF_KEY), next lexeme is if
Next token is: 40 (  LEFT_PAREN), next lexeme is (
Next token is: 11 (       IDENT), next lexeme is x
Next token is: 29 (     GTEQ_OP), next lexeme is >=
Next token is: 10 (     INT_LIT), next lexeme is 10
Next token is: 41 ( RIGHT_PAREN), next lexeme is )
Next token is: 45 (OPEN_BRACKET), next lexeme is {
Next token is: 11 (       IDENT), next lexeme is y
Next token is: 20 (   ASSIGN_OP), next lexeme is =
Next token is: 11 (       IDENT), next lexeme is x
Next token is: 21 (      ADD_OP), next lexeme is +
Next token is: 10 (     INT_LIT), next lexeme is 1
Next token is: 42 ( SCOLON_TERM), next lexeme is ;
Next token is: 46 (CLOSE_BRACKET), next lexeme is }
Next token is: -1 (         EOF), next lexeme is EOF
";

    Command::new(littlec_bin())
        .arg(&path)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_json_listing() {
    let (_dir, path) = source_file("float -2.5");

    let output = Command::new(littlec_bin())
        .args(["--format", "json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            r#"{"code":53,"name":"FLOAT_KEY","lexeme":"float","line":1,"column":1}"#,
            r#"{"code":14,"name":"NEG_FLOAT_LIT","lexeme":"-2.5","line":1,"column":7}"#,
            r#"{"code":-1,"name":"EOF","lexeme":"EOF","line":1,"column":11}"#,
        ]
    );
}

#[test]
fn test_contextual_minus_flag() {
    let (_dir, path) = source_file("a - 1");

    Command::new(littlec_bin())
        .arg("--contextual-minus")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("(      SUB_OP), next lexeme is -"))
        .stdout(predicate::str::contains("(     INT_LIT), next lexeme is 1"));
}

#[test]
fn test_long_lexeme_is_reported_but_not_fatal() {
    let (_dir, path) = source_file(&format!("{};", "z".repeat(150)));

    Command::new(littlec_bin())
        .args(["--no-color"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "next lexeme is {}\n",
            "z".repeat(99)
        )))
        .stdout(predicate::str::contains("SCOLON_TERM"))
        .stderr(predicate::str::contains("error[EL001]"))
        .stderr(predicate::str::contains("prog.lc:1:1"));
}

#[test]
fn test_unknown_characters_are_listed() {
    let (_dir, path) = source_file("a ! b @");

    Command::new(littlec_bin())
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Next token is: 99 (     UNKNOWN), next lexeme is !"))
        .stdout(predicate::str::contains("Next token is: 99 (     UNKNOWN), next lexeme is @"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_non_ascii_bytes_are_escaped() {
    let (_dir, path) = source_file("x \u{e9}");

    Command::new(littlec_bin())
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Next token is: 99 (     UNKNOWN), next lexeme is \\xC3\n",
        ))
        .stdout(predicate::str::contains(
            "Next token is: 99 (     UNKNOWN), next lexeme is \\xA9\n",
        ));
}

#[test]
fn test_cli_version() {
    Command::new(littlec_bin())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("littlec"));
}
