use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_repl_session() {
    let mut cmd = Command::cargo_bin("numeric").unwrap();
    cmd.arg("repl")
        .write_stdin("3ft 6in + 2'\nimperial\n3ft 6in + 2'\n5\n\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Input > "))
        .stdout(predicate::str::contains("The edit box shows: 1.6764m"))
        .stdout(predicate::str::contains("System units were set to Imperial"))
        .stdout(predicate::str::contains("The edit box shows: 5'6\""))
        .stdout(predicate::str::contains("The edit box shows: 5ft"));
}

#[test]
fn test_repl_reports_errors_tersely() {
    let mut cmd = Command::cargo_bin("numeric").unwrap();
    cmd.arg("repl").write_stdin("1 +\n\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(" - Error."));
}

#[test]
fn test_repl_verbose_errors() {
    let mut cmd = Command::cargo_bin("numeric").unwrap();
    cmd.args(["repl", "--verbose"]).write_stdin("1 +\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("*** ERROR *** [SOLVE] Expression is malformed"));
}

#[test]
fn test_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("numeric").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("eval"))
        .stdout(predicate::str::contains("tokens"))
        .stdout(predicate::str::contains("repl"));
}
