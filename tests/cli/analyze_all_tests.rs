//! Tests for the `analyze-all` CLI command

use crate::common::{
    assert_contains, assert_json_type, assert_not_contains, assert_valid_json, TestRepo,
};

#[test]
fn test_analyze_all_json_summary() {
    let repo = TestRepo::new();
    repo.with_mixed_project();

    let output = repo.run_cli_success(&["analyze-all", "-f", "json"]);
    let json = assert_valid_json(&output, "analyze-all json");
    assert_json_type(&json, "analyze_all");

    assert_eq!(json["files_checked"], 4);
    assert_eq!(json["files_with_issues"], 3);
    assert_eq!(json["total"], 5);
    assert_eq!(json["by_severity"]["error"], 5);

    let paths: Vec<&str> = json["files"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|f| f["path"].as_str())
        .collect();
    assert!(paths.iter().all(|p| !p.contains("node_modules")));
    assert!(paths.contains(&"src/missing.js"));
}

#[test]
fn test_analyze_all_text_output() {
    let repo = TestRepo::new();
    repo.with_mixed_project();

    let dir = repo.path().to_string_lossy().to_string();
    let output = repo.run_cli_success(&["analyze-all", &dir]);
    assert_contains(&output, "files: 4 | with issues: 3 | diagnostics: 5", true, "summary");
    assert_contains(&output, "[src/extra.mjs]", true, "file section");
    assert_not_contains(&output, "node_modules", "node_modules skipped");
}

#[test]
fn test_analyze_all_summary_only() {
    let repo = TestRepo::new();
    repo.with_mixed_project();

    let output = repo.run_cli_success(&["analyze-all", "--summary-only"]);
    assert_contains(&output, "diagnostics: 5", true, "summary");
    assert_not_contains(&output, "[src/", "no file sections");
}

#[test]
fn test_analyze_all_includes_html_when_enabled() {
    let repo = TestRepo::new();
    repo.add_file("index.html", "<script>\ngo()\n</script>\n");
    repo.add_file("app.js", "go();\n");

    let output = repo.run_cli_success(&["analyze-all", "-f", "json"]);
    let json = assert_valid_json(&output, "without html");
    assert_eq!(json["files_checked"], 1);

    repo.with_config("extractHtmlScripts = true\n");
    let output = repo.run_cli_success(&["analyze-all", "-f", "json"]);
    let json = assert_valid_json(&output, "with html");
    assert_eq!(json["files_checked"], 2);
    assert_eq!(json["total"], 1);
}
