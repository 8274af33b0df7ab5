//! Tests for the `actions` CLI command

use crate::common::{assert_contains, assert_json_type, assert_valid_json, TestRepo};

#[test]
fn test_actions_for_missing_semicolon() {
    let repo = TestRepo::new();
    repo.with_mixed_project();

    let output = repo.run_cli_success(&["actions", "src/missing.js", "--line", "1"]);
    assert_contains(
        &output,
        "1:11 E [missing-semicolon] Missing semicolon.",
        true,
        "diagnostic",
    );
    assert_contains(&output, "  1. Add semicolon", true, "primary fix");
    assert_contains(&output, "  2. Ignore this line", true, "line ignore");
    assert_contains(&output, "  3. Ignore this file", true, "file ignore");
}

#[test]
fn test_actions_titles_for_removals() {
    let repo = TestRepo::new();
    repo.with_mixed_project();

    let output = repo.run_cli_success(&["actions", "src/unnecessary.ts", "-l", "2"]);
    assert_contains(&output, "Remove unnecessary semicolon", true, "unnecessary");

    let output = repo.run_cli_success(&["actions", "src/extra.mjs", "-l", "1"]);
    assert_contains(&output, "Remove extra semicolon", true, "extra");
}

#[test]
fn test_actions_json_carries_edits() {
    let repo = TestRepo::new();
    repo.with_mixed_project();

    let output = repo.run_cli_success(&["actions", "src/missing.js", "-l", "2", "-f", "json"]);
    let json = assert_valid_json(&output, "actions json");
    assert_json_type(&json, "actions");

    let entry = &json["diagnostics"][0];
    assert_eq!(entry["diagnostic"]["code"], "missing-semicolon");
    let actions = entry["actions"].as_array().unwrap();
    assert_eq!(actions.len(), 3);
    assert_eq!(actions[0]["edit"]["new_text"], ";");
    assert_eq!(actions[0]["edit"]["range"]["start"]["line"], 1);
    assert_eq!(actions[0]["edit"]["range"]["start"]["character"], 14);
}

#[test]
fn test_actions_clean_line() {
    let repo = TestRepo::new();
    repo.with_mixed_project();

    let output = repo.run_cli_success(&["actions", "src/clean.ts", "-l", "4"]);
    assert_contains(&output, "no diagnostics on line 4", true, "clean line");
}
