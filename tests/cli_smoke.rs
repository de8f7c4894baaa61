//! CLI smoke tests: the `revsel` script driver end to end.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn revsel() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("revsel"))
}

#[test]
fn default_run_prints_initial_state() {
    revsel()
        .assert()
        .success()
        .stdout(predicate::str::contains("mode: Normal"))
        .stdout(predicate::str::contains("frontend-app"));
}

#[test]
fn script_navigates_and_wraps() {
    revsel()
        .args(["--script", "down,down,down,down", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""selected_name":"ml-service""#));

    revsel()
        .args(["--script", "down,down,down,down,down", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""selected_name":"frontend-app""#));
}

#[test]
fn script_filters_then_switches_via_palette() {
    revsel()
        .args([
            "--script",
            "type:app,down,ctrl+k,type:Switch to mobile-app,enter",
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""mode":"normal""#))
        .stdout(predicate::str::contains(r#""selected_name":"mobile-app""#))
        .stdout(predicate::str::contains(r#""query":"""#));
}

#[test]
fn palette_stays_open_on_empty_commit() {
    revsel()
        .args(["--script", "ctrl+k,type:xyz,enter", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""mode":"palette""#))
        .stdout(predicate::str::contains(r#""visible_commands":0"#));
}

#[test]
fn unknown_token_fails_with_message() {
    revsel()
        .args(["--script", "frobnicate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown script token"));
}

#[test]
fn loads_custom_catalog_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"name":"alpha","updated":"1 day ago"}},{{"name":"omega","updated":"2 days ago"}}]"#
    )
    .unwrap();

    revsel()
        .args(["--items", file.path().to_str().unwrap(), "--script", "down", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""selected_name":"omega""#));
}

#[test]
fn rejects_malformed_catalog() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    revsel()
        .args(["--items", file.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading catalog"));
}
