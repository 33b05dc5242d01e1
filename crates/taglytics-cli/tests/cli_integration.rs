use assert_cmd::Command;
use predicates::prelude::*;

fn taglytics() -> Command {
    Command::cargo_bin("taglytics").unwrap()
}

#[test]
fn test_help_lists_subcommands() {
    taglytics()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tags"))
        .stdout(predicate::str::contains("query"))
        .stdout(predicate::str::contains("run"));
}

#[test]
fn test_query_list_on_fresh_store() {
    let dir = tempfile::tempdir().unwrap();

    taglytics()
        .args(["--data-dir", dir.path().to_str().unwrap()])
        .args(["query", "list", "--project", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No query found"));
}

#[test]
fn test_query_list_json_on_fresh_store() {
    let dir = tempfile::tempdir().unwrap();

    taglytics()
        .args(["--data-dir", dir.path().to_str().unwrap()])
        .args(["--format", "json"])
        .args(["query", "list", "--project", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn test_run_with_unknown_index_fails() {
    let dir = tempfile::tempdir().unwrap();

    taglytics()
        .args(["--data-dir", dir.path().to_str().unwrap()])
        .args(["run", "--project", "42", "--index", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No saved query at index 0"));
}

#[test]
fn test_create_requires_a_group() {
    let dir = tempfile::tempdir().unwrap();

    taglytics()
        .args(["--data-dir", dir.path().to_str().unwrap()])
        .args([
            "query",
            "create",
            "--project",
            "42",
            "--access-key",
            "key-123",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--group"));
}
