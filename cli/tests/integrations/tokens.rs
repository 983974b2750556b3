use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_tokens_table() {
    let mut cmd = Command::cargo_bin("numeric").unwrap();
    cmd.arg("tokens").arg("3ft 6in");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Literal, Numeric"))
        .stdout(predicate::str::contains("Unit"))
        .stdout(predicate::str::contains("Postfix"))
        .stdout(predicate::str::contains("3 ft 6 in j+"));
}

#[test]
fn test_cli_tokens_shows_unary_forms() {
    let mut cmd = Command::cargo_bin("numeric").unwrap();
    cmd.arg("tokens").arg("3*-4");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("3 4 u- *"));
}

#[test]
fn test_cli_tokens_scan_error() {
    let mut cmd = Command::cargo_bin("numeric").unwrap();
    cmd.arg("tokens").arg("(1+2");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not balanced"));
}
