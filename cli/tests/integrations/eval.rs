use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_eval_metric_by_default() {
    let mut cmd = Command::cargo_bin("numeric").unwrap();
    cmd.arg("eval").arg("12in");

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("304.8mm\n"));
}

#[test]
fn test_cli_eval_imperial() {
    let mut cmd = Command::cargo_bin("numeric").unwrap();
    cmd.arg("eval")
        .arg("3ft 6in + 2'")
        .arg("--system")
        .arg("imperial");

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("5'6\"\n"));
}

#[test]
fn test_cli_eval_without_fractions() {
    let mut cmd = Command::cargo_bin("numeric").unwrap();
    cmd.args(["--system", "imperial", "--no-fractions", "eval", "1.125in"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("1.125in\n"));
}

#[test]
fn test_cli_eval_decimal_point() {
    let mut cmd = Command::cargo_bin("numeric").unwrap();
    cmd.args(["eval", "1,5m", "--decimal-point", ","]);

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("1,5m\n"));
}

#[test]
fn test_cli_eval_leading_minus() {
    let mut cmd = Command::cargo_bin("numeric").unwrap();
    cmd.args(["eval", "-3+4", "--system", "generic"]);

    cmd.assert().success().stdout(predicate::str::diff("1\n"));
}

#[test]
fn test_cli_eval_json() {
    let mut cmd = Command::cargo_bin("numeric").unwrap();
    cmd.args(["eval", "0x1F * 2", "--system", "generic", "--json"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"input\": \"0x1F * 2\""))
        .stdout(predicate::str::contains("\"value\": 62.0"))
        .stdout(predicate::str::contains("\"system\": \"Generic\""))
        .stdout(predicate::str::contains("\"display\": \"62\""));
}

#[test]
fn test_cli_eval_parse_error() {
    let mut cmd = Command::cargo_bin("numeric").unwrap();
    cmd.arg("eval").arg("2 $ 3");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown character '$'"));
}

#[test]
fn test_cli_eval_solve_error() {
    let mut cmd = Command::cargo_bin("numeric").unwrap();
    cmd.arg("eval").arg("1 2");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("[SOLVE] Indeterminate Expression"));
}

#[test]
fn test_cli_rejects_unknown_system() {
    let mut cmd = Command::cargo_bin("numeric").unwrap();
    cmd.args(["eval", "1", "--system", "nautical"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown unit system"));
}

#[test]
fn test_cli_rejects_reserved_decimal_point() {
    for reserved in ["5", "m", "-", "'", "ab"] {
        let mut cmd = Command::cargo_bin("numeric").unwrap();
        cmd.args(["eval", "1", "--decimal-point", reserved]);

        cmd.assert().failure().code(2);
    }
}
