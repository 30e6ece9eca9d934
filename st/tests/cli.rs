//! End-to-end tests for the `st` binary
//!
//! Each test runs inside its own temp dir so the default `progress_state.json`
//! and any `.studytrack.yml` stay isolated.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

use studytrack::{ProgressState, ProgressStore};

fn st_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("st"));
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"));
    cmd
}

fn load_state(dir: &Path) -> ProgressState {
    ProgressStore::open(dir.join("progress_state.json"))
        .load()
        .expect("load state")
}

#[test]
fn bare_invocation_shows_default_status() {
    let temp = TempDir::new().expect("temp dir");

    st_cmd(temp.path())
        .assert()
        .success()
        .stdout(contains("Current Position: Week 1, Day 1"))
        .stdout(contains("Last Updated: Never"))
        .stdout(contains("Set up development environment and start Calculator project"));

    assert!(!temp.path().join("progress_state.json").exists());
}

#[test]
fn complete_writes_progress_file() {
    let temp = TempDir::new().expect("temp dir");

    st_cmd(temp.path())
        .args(["complete", "task", "Calculator"])
        .assert()
        .success()
        .stdout(contains("Marked task 'Calculator' as complete"));

    st_cmd(temp.path())
        .args(["complete", "task", "Calculator"])
        .assert()
        .success()
        .stdout(contains("already complete"));

    assert_eq!(load_state(temp.path()).completed_tasks, ["Calculator"]);
}

#[test]
fn set_then_status_reports_position() {
    let temp = TempDir::new().expect("temp dir");

    st_cmd(temp.path())
        .args(["set", "2", "3"])
        .assert()
        .success()
        .stdout(contains("Set current position to Week 2, Day 3"));

    st_cmd(temp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(contains("Week 2, Day 3"))
        .stdout(contains("Continue with current week's tasks"));
}

#[test]
fn set_with_non_numeric_args_fails_without_writing() {
    let temp = TempDir::new().expect("temp dir");
    st_cmd(temp.path()).args(["set", "1", "4"]).assert().success();
    let before = fs::read_to_string(temp.path().join("progress_state.json")).expect("read state");

    st_cmd(temp.path())
        .args(["set", "x", "y"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains("Failed to set position"))
        .stderr(contains("week must be an integer"));

    let after = fs::read_to_string(temp.path().join("progress_state.json")).expect("read state");
    assert_eq!(before, after);
}

#[test]
fn note_joins_words_and_status_shows_recent_three() {
    let temp = TempDir::new().expect("temp dir");

    st_cmd(temp.path())
        .args(["note", "templates", "are", "fun"])
        .assert()
        .success()
        .stdout(contains("Added note: templates are fun"));
    for text in ["second", "third", "fourth"] {
        st_cmd(temp.path()).args(["note", text]).assert().success();
    }

    st_cmd(temp.path())
        .assert()
        .success()
        .stdout(contains("  - second\n  - third\n  - fourth\n"))
        .stdout(contains("templates are fun").not());

    assert_eq!(load_state(temp.path()).notes.len(), 4);
}

#[test]
fn resume_uses_configured_root() {
    let temp = TempDir::new().expect("temp dir");
    fs::write(
        temp.path().join(".studytrack.yml"),
        "curriculum_root: /srv/cpp-mastery\n",
    )
    .expect("write config");
    st_cmd(temp.path()).args(["set", "3", "2"]).assert().success();

    st_cmd(temp.path())
        .arg("resume")
        .assert()
        .success()
        .stdout(contains("cd /srv/cpp-mastery\ncd week-3\n"))
        .stdout(contains("st complete theory 'theory_file'"));
}

#[test]
fn file_flag_overrides_location() {
    let temp = TempDir::new().expect("temp dir");
    let custom = temp.path().join("custom").join("state.json");

    st_cmd(temp.path())
        .args(["--file", custom.to_str().expect("utf8 path"), "complete", "project", "Memory Pool"])
        .assert()
        .success();

    assert!(custom.exists());
    assert!(!temp.path().join("progress_state.json").exists());
}

#[test]
fn note_starting_with_option_names_is_note_text() {
    let temp = TempDir::new().expect("temp dir");

    st_cmd(temp.path())
        .args(["note", "-f", "is", "a", "flag"])
        .assert()
        .success()
        .stdout(contains("Added note: -f is a flag"));

    assert!(!temp.path().join("is").exists());
    let state = load_state(temp.path());
    assert_eq!(state.notes.last().expect("one note").text, "-f is a flag");
}

#[test]
fn broken_local_config_is_warned_and_skipped() {
    let temp = TempDir::new().expect("temp dir");
    fs::write(temp.path().join(".studytrack.yml"), "curriculum_root: [unclosed\n").expect("write config");

    st_cmd(temp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(contains("Current Position: Week 1, Day 1"))
        .stderr(contains("Failed to load config from .studytrack.yml"));
}

#[test]
fn unknown_command_prints_usage() {
    let temp = TempDir::new().expect("temp dir");

    st_cmd(temp.path())
        .arg("frobnicate")
        .assert()
        .success()
        .stdout(contains("Usage:"))
        .stdout(contains("st complete [task|theory|project] 'name'"));
}

#[test]
fn missing_args_print_usage() {
    let temp = TempDir::new().expect("temp dir");

    st_cmd(temp.path()).args(["set", "2"]).assert().success().stdout(contains("Usage:"));
    st_cmd(temp.path()).arg("note").assert().success().stdout(contains("Usage:"));
    st_cmd(temp.path())
        .args(["complete", "homework", "x"])
        .assert()
        .success()
        .stdout(contains("Usage:"));

    assert!(!temp.path().join("progress_state.json").exists());
}

#[test]
fn malformed_progress_file_is_reported() {
    let temp = TempDir::new().expect("temp dir");
    fs::write(temp.path().join("progress_state.json"), "not json").expect("write state");

    st_cmd(temp.path())
        .arg("status")
        .assert()
        .failure()
        .stderr(contains("Malformed progress file"));
}
