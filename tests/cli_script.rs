mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

use common::{seeded_store, temp_store_path};

fn pb() -> Command {
    let mut cmd = Command::cargo_bin("pb").unwrap();
    cmd.env("PB_CLI_SCRIPT", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn script_mode_runs_basic_flow() {
    let path = temp_store_path();
    pb().env("PB_FILE", &path)
        .write_stdin("2\n1\ne\nelectronics\n1\n1\ne\nlaptop\n\nw\n\n4\n")
        .assert()
        .success()
        .stdout(contains("Category added: e → electronics"))
        .stdout(contains("OK: Added: e-laptop-w"));

    let yaml = std::fs::read_to_string(&path).unwrap();
    assert!(yaml.contains("e: electronics"));
    assert!(yaml.contains("- e-laptop-w"));
}

#[test]
fn show_prints_uncolored_yaml_when_disabled() {
    let path = seeded_store();
    pb().env("PB_FILE", &path)
        .env("PB_COLOR", "0")
        .write_stdin("3\n\n\n")
        .assert()
        .success()
        .stdout(contains("=== items (yaml) ==="))
        .stdout(contains("  e: electronics"))
        .stdout(contains("- e-laptop-mb-w"))
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn warnings_keep_the_session_alive() {
    let path = temp_store_path();
    pb().env("PB_FILE", &path)
        .env("NO_COLOR", "1")
        .write_stdin("shwo\n1\n1\n\n\n")
        .assert()
        .success()
        .stdout(contains("WARNING: Invalid choice. Did you mean `show`?"))
        .stdout(contains("WARNING: No category chosen."));
}

#[test]
fn corrupt_catalog_fails_startup() {
    let path = temp_store_path();
    std::fs::write(&path, "categories: [broken\n").unwrap();
    pb().env("PB_FILE", &path)
        .write_stdin("4\n")
        .assert()
        .failure()
        .stderr(contains("failed to load catalog"));
}

#[test]
fn failed_save_is_reported_once() {
    let path = temp_store_path();
    let blocker = path.with_file_name("blocker");
    std::fs::write(&blocker, "").unwrap();
    pb().env("PB_FILE", blocker.join("pb.yaml"))
        .env("NO_COLOR", "1")
        .write_stdin("1\n\n4\n")
        .assert()
        .success()
        .stdout(contains("ERROR: Failed to save catalog"))
        .stderr(predicate::str::contains("saving catalog failed").not());
}
