use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

fn backlog(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("backlog").unwrap();
    cmd.arg("--data-dir")
        .arg(dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env_remove("BACKLOG_DIR")
        .env_remove("BACKLOG_DEBUG_LOG");
    cmd
}

fn parse_json_output(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("Failed to parse JSON output")
}

fn read_items(dir: &Path, file: &str) -> Value {
    let raw = fs::read_to_string(dir.join(file)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

/// Adds an item in JSON mode and returns its full id.
fn add_item(dir: &Path, title: &str) -> String {
    let output = backlog(dir)
        .args(["--json", "add", title])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    parse_json_output(&output)["data"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}

fn setup() -> TempDir {
    tempdir().unwrap()
}

mod add_tests {
    use super::*;

    #[test]
    fn test_add_writes_item_with_tags() {
        let dir = setup();

        backlog(dir.path())
            .args(["add", "Write spec", "--tags", "a, b", "--due", "01-02-2025"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("✓ Added backlog item: Write spec (ID: "));

        let saved = read_items(dir.path(), "items.json");
        let items = saved["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["title"], "Write spec");
        assert_eq!(items[0]["status"], "todo");
        assert_eq!(items[0]["due_date"], "01-02-2025");
        assert_eq!(items[0]["tags"], serde_json::json!(["a", "b"]));
    }

    #[test]
    fn test_add_rejects_impossible_date() {
        let dir = setup();

        backlog(dir.path())
            .args(["add", "Task", "--due", "31-02-2024"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid date format '31-02-2024'"));

        assert!(!dir.path().join("items.json").exists());
    }

    #[test]
    fn test_add_rejects_blank_title() {
        let dir = setup();

        backlog(dir.path())
            .args(["add", "   "])
            .assert()
            .failure()
            .stderr(predicate::str::contains("title is required"));
    }
}

mod update_tests {
    use super::*;

    #[test]
    fn test_update_by_prefix() {
        let dir = setup();
        let id = add_item(dir.path(), "Draft");

        backlog(dir.path())
            .args(["update", &id[..13], "--title", "Final", "--status", "in-progress"])
            .assert()
            .success()
            .stdout("✓ Updated backlog item: Final\n");

        let saved = read_items(dir.path(), "items.json");
        assert_eq!(saved["items"][0]["title"], "Final");
        assert_eq!(saved["items"][0]["status"], "in-progress");
        assert_eq!(saved["items"][0]["id"], id.as_str());
    }

    #[test]
    fn test_update_unknown_prefix_leaves_file_untouched() {
        let dir = setup();
        add_item(dir.path(), "Keep me");
        let before = fs::read(dir.path().join("items.json")).unwrap();

        backlog(dir.path())
            .args(["update", "zzzz", "--title", "Nope"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("item with ID zzzz not found"));

        assert_eq!(fs::read(dir.path().join("items.json")).unwrap(), before);
    }

    #[test]
    fn test_update_rejects_blank_title() {
        let dir = setup();
        let id = add_item(dir.path(), "Keep title");
        let before = fs::read(dir.path().join("items.json")).unwrap();

        backlog(dir.path())
            .args(["update", &id, "--title", "   "])
            .assert()
            .failure()
            .stderr(predicate::str::contains("title is required"));

        assert_eq!(fs::read(dir.path().join("items.json")).unwrap(), before);
    }

    #[test]
    fn test_update_rejects_bad_status() {
        let dir = setup();
        let id = add_item(dir.path(), "Task");

        backlog(dir.path())
            .args(["update", &id, "--status", "blocked"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid status 'blocked'"));
    }
}

mod delete_tests {
    use super::*;

    #[test]
    fn test_delete_removes_item() {
        let dir = setup();
        let id = add_item(dir.path(), "Remove me");
        add_item(dir.path(), "Stay");

        backlog(dir.path())
            .args(["delete", &id])
            .assert()
            .success()
            .stdout("✓ Deleted backlog item: Remove me\n");

        let saved = read_items(dir.path(), "items.json");
        let items = saved["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["title"], "Stay");
    }

    #[test]
    fn test_delete_unknown_prefix_in_json_mode() {
        let dir = setup();

        let output = backlog(dir.path())
            .args(["--json", "delete", "missing"])
            .assert()
            .failure()
            .get_output()
            .stderr
            .clone();

        let json = parse_json_output(&output);
        assert_eq!(json["success"], false);
        assert!(json["error"]
            .as_str()
            .unwrap()
            .contains("item with ID missing not found"));
    }
}

mod archive_tests {
    use super::*;

    #[test]
    fn test_archive_moves_done_items_once() {
        let dir = setup();
        let done = add_item(dir.path(), "Shipped");
        add_item(dir.path(), "Pending");
        backlog(dir.path())
            .args(["update", &done, "--status", "done"])
            .assert()
            .success();

        backlog(dir.path())
            .arg("archive")
            .assert()
            .success()
            .stdout("✓ Archived 1 completed item(s)\n");

        let active = read_items(dir.path(), "items.json");
        assert_eq!(active["items"].as_array().unwrap().len(), 1);
        assert_eq!(active["items"][0]["title"], "Pending");

        let archive = read_items(dir.path(), "archive.json");
        assert_eq!(archive["items"].as_array().unwrap().len(), 1);
        assert_eq!(archive["items"][0]["title"], "Shipped");

        backlog(dir.path())
            .arg("archive")
            .assert()
            .success()
            .stdout("No completed items to archive\n");
        let archive = read_items(dir.path(), "archive.json");
        assert_eq!(archive["items"].as_array().unwrap().len(), 1);
    }
}

mod query_tests {
    use super::*;

    #[test]
    fn test_search_is_case_insensitive() {
        let dir = setup();
        add_item(dir.path(), "Urgent fix");
        add_item(dir.path(), "Routine chore");

        backlog(dir.path())
            .args(["search", "URGENT"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Found 1 item(s) matching 'URGENT':"))
            .stdout(predicate::str::contains("Title: Urgent fix"))
            .stdout(predicate::str::contains("Routine").not());
    }

    #[test]
    fn test_search_without_matches() {
        let dir = setup();

        backlog(dir.path())
            .args(["search", "nothing"])
            .assert()
            .success()
            .stdout("No items found matching 'nothing'\n");
    }

    #[test]
    fn test_list_prints_board_and_totals() {
        let dir = setup();
        add_item(dir.path(), "First");
        add_item(dir.path(), "Second");

        backlog(dir.path())
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("IN PROGRESS"))
            .stdout(predicate::str::contains("] First"))
            .stdout(predicate::str::contains(
                "Total: 2 items (2 todo, 0 in-progress, 0 done)",
            ));
    }

    #[test]
    fn test_list_json_on_empty_store() {
        let dir = setup();

        let output = backlog(dir.path())
            .args(["list", "--json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&output);
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["count"], 0);
    }

    #[test]
    fn test_corrupt_store_fails_cleanly() {
        let dir = setup();
        fs::write(dir.path().join("items.json"), "{ broken").unwrap();

        backlog(dir.path())
            .arg("list")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to read"));
    }
}

#[test]
fn test_data_dir_from_env() {
    let dir = setup();

    Command::cargo_bin("backlog")
        .unwrap()
        .env("BACKLOG_DIR", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("config"))
        .args(["add", "From env"])
        .assert()
        .success();

    assert!(dir.path().join("items.json").exists());
}

#[test]
fn test_completions_generate() {
    let dir = setup();

    backlog(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("backlog"));
}
