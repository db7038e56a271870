use std::{fs, path::PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn day12() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("day12").unwrap();
    cmd.current_dir(env!("CARGO_MANIFEST_DIR"));
    cmd.env_remove("DAY12_LOG");
    cmd
}

fn write_input(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("day12-{}-{}.txt", name, std::process::id()));
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_example_defaults_to_part_two() {
    day12().arg("-e").assert().success().stdout("36\n");
}

#[test]
fn test_example_part_one() {
    day12().args(["1", "--example"]).assert().success().stdout("10\n");
}

#[test]
fn test_explicit_input_file() {
    let path = write_input(
        "medium",
        "dc-end\nHN-start\nstart-kj\ndc-start\ndc-HN\nLN-dc\nHN-end\nkj-sa\nkj-HN\nkj-dc\n",
    );
    day12().arg("1").arg("-i").arg(&path).assert().success().stdout("19\n");
    day12().arg("2").arg("--input").arg(&path).assert().success().stdout("103\n");
    fs::remove_file(path).unwrap();
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    day12()
        .args(["-e", "-v"])
        .assert()
        .success()
        .stdout("36\n")
        .stderr(predicate::str::contains("search finished"));
}

#[test]
fn test_missing_file_fails() {
    day12()
        .args(["-i", "does/not/exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read does/not/exist.txt"));
}

#[test]
fn test_malformed_input_fails() {
    let path = write_input("malformed", "start-A\nA:end\n");
    day12()
        .arg("-i")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
    fs::remove_file(path).unwrap();
}

#[test]
fn test_example_conflicts_with_input() {
    day12().args(["-e", "-i", "x.txt"]).assert().failure();
}

#[test]
fn test_invalid_part_is_rejected() {
    day12().args(["3", "-e"]).assert().failure();
}
