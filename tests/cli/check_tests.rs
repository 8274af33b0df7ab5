//! Tests for the `check` CLI command

use crate::common::{
    assert_contains, assert_json_type, assert_not_contains, assert_valid_json, assert_valid_toon,
    diagnostic_codes, TestRepo,
};

#[test]
fn test_check_reports_missing_semicolons() {
    let repo = TestRepo::new();
    repo.with_mixed_project();

    let output = repo.run_cli_success(&["check", "src/missing.js"]);
    assert_contains(&output, "checked 1 file(s), 2 diagnostic(s)", true, "summary");
    assert_contains(&output, "[src/missing.js]", true, "file header");
    assert_contains(
        &output,
        "1:11 E [missing-semicolon] Missing semicolon.",
        true,
        "first diagnostic",
    );
    assert_contains(&output, "2:14 E [missing-semicolon]", true, "second diagnostic");
}

#[test]
fn test_check_json_lists_codes() {
    let repo = TestRepo::new();
    repo.with_mixed_project();

    let output = repo.run_cli_success(&[
        "check",
        "src/unnecessary.ts",
        "src/extra.mjs",
        "src/clean.ts",
        "-f",
        "json",
    ]);
    let json = assert_valid_json(&output, "check json");
    assert_json_type(&json, "check");

    assert_eq!(
        diagnostic_codes(&json),
        vec![
            "unnecessary-semicolon",
            "unnecessary-semicolon",
            "extra-semicolon"
        ]
    );
    assert_eq!(json["total"], 3);
    assert_eq!(json["files"][2]["diagnostics"].as_array().unwrap().len(), 0);

    // Positions in structured output are 0-based
    let first = &json["files"][0]["diagnostics"][0];
    assert_eq!(first["range"]["start"]["line"], 0);
    assert_eq!(first["range"]["start"]["character"], 14);
    assert_eq!(first["source"], "force-semicolon");
}

#[test]
fn test_check_toon_output() {
    let repo = TestRepo::new();
    repo.with_mixed_project();

    let output = repo.run_cli_success(&["check", "src/missing.js", "-f", "toon"]);
    assert_valid_toon(&output, "check toon");
    assert_contains(&output, "missing-semicolon", true, "toon diagnostics");
}

#[test]
fn test_check_language_id_override() {
    let repo = TestRepo::new();
    repo.add_file("snippet.txt", "run()\n");

    let output = repo.run_cli_success(&[
        "check",
        "snippet.txt",
        "--language-id",
        "javascript",
        "-f",
        "json",
    ]);
    let json = assert_valid_json(&output, "language id");
    assert_eq!(json["files"][0]["language"], "javascript");
    assert_eq!(diagnostic_codes(&json), vec!["missing-semicolon"]);
}

#[test]
fn test_check_respects_workspace_config() {
    let repo = TestRepo::new();
    repo.with_mixed_project();
    repo.with_config(
        "missingSemicolonLintType = \"off\"\nunnecessarySemicolonLintType = \"warn\"\n",
    );

    let output = repo.run_cli_success(&[
        "check",
        "src/missing.js",
        "src/unnecessary.ts",
        "-f",
        "json",
    ]);
    let json = assert_valid_json(&output, "config");
    assert_eq!(
        diagnostic_codes(&json),
        vec!["unnecessary-semicolon", "unnecessary-semicolon"]
    );
    assert_eq!(json["by_severity"]["warning"], 2);
}

#[test]
fn test_check_explicit_config_path() {
    let repo = TestRepo::new();
    repo.with_mixed_project();
    repo.add_file("conf/lint.toml", "lintType = \"hint\"\n");

    let output = repo.run_cli_success(&["--config", "conf/lint.toml", "check", "src/extra.mjs"]);
    assert_contains(&output, "1:10 H [extra-semicolon]", true, "hint severity");
}

#[test]
fn test_check_inline_ignore_comments() {
    let repo = TestRepo::new();
    repo.add_file(
        "a.ts",
        "// force-semicolon: ignore\nconst a = 1\nconst b = 2\n",
    );
    repo.add_file(
        "b.ts",
        "const a = 1\n// force-semicolon: ignore-all\nconst b = 2\n",
    );

    let output = repo.run_cli_success(&["check", "a.ts", "b.ts", "-f", "json"]);
    let json = assert_valid_json(&output, "ignore comments");
    assert_eq!(diagnostic_codes(&json), vec!["missing-semicolon"]);
    assert_eq!(json["files"][0]["diagnostics"][0]["range"]["start"]["line"], 2);
}

#[test]
fn test_check_html_skipped_unless_enabled() {
    let repo = TestRepo::new();
    repo.add_file("page.html", "<p>hi</p>\n<script>\nstart()\n</script>\n");

    let output = repo.run_cli_success(&["check", "page.html"]);
    assert_contains(&output, "skipped: script extraction disabled", true, "html skipped");

    repo.with_config("extractHtmlScripts = true\n");
    let output = repo.run_cli_success(&["check", "page.html", "-f", "json"]);
    let json = assert_valid_json(&output, "html enabled");
    assert_eq!(json["files"][0]["synthetic"], true);
    assert_eq!(diagnostic_codes(&json), vec!["missing-semicolon"]);
}

#[test]
fn test_check_clean_file_text() {
    let repo = TestRepo::new();
    repo.with_mixed_project();

    let output = repo.run_cli_success(&["check", "src/clean.ts"]);
    assert_contains(&output, "0 diagnostic(s)", true, "clean summary");
    assert_not_contains(&output, "[src/clean.ts]", "no file section");
}
