//! Error handling and exit code tests

use crate::common::{assert_contains, assert_valid_json, diagnostic_codes, TestRepo};

#[test]
fn test_missing_file_exit_code() {
    let repo = TestRepo::new();
    let (code, stderr) = repo.run_cli_failure(&["check", "nope.ts"]);
    assert_eq!(code, 1);
    assert_contains(&stderr, "Error:", true, "error prefix");
}

#[test]
fn test_unsupported_language_exit_code() {
    let repo = TestRepo::new();
    repo.with_mixed_project();
    let (code, _) = repo.run_cli_failure(&["check", "README.md"]);
    assert_eq!(code, 2);

    let (code, _) = repo.run_cli_failure(&["check", "src/clean.ts", "--language-id", "python"]);
    assert_eq!(code, 2);
}

#[test]
fn test_malformed_config_exit_code() {
    let repo = TestRepo::new();
    repo.with_mixed_project();
    repo.with_config("debug = = true\n");

    let (code, stderr) = repo.run_cli_failure(&["check", "src/clean.ts"]);
    assert_eq!(code, 4);
    assert_contains(&stderr, "config", false, "config error");
}

#[test]
fn test_line_out_of_range_exit_code() {
    let repo = TestRepo::new();
    repo.with_mixed_project();
    let (code, _) = repo.run_cli_failure(&["actions", "src/missing.js", "--line", "99"]);
    assert_eq!(code, 5);
}

#[test]
fn test_unknown_severity_falls_back_to_default() {
    let repo = TestRepo::new();
    repo.with_mixed_project();
    repo.with_config("missingSemicolonLintType = \"loud\"\n");

    let output = repo.run_cli_success(&["check", "src/missing.js", "-f", "json"]);
    let json = assert_valid_json(&output, "unknown severity");
    assert_eq!(json["by_severity"]["error"], 2);
}

#[test]
fn test_diagnostics_do_not_fail_the_process() {
    let repo = TestRepo::new();
    repo.with_mixed_project();
    let output = repo.run_cli(&["check", "src/extra.mjs"]).unwrap();
    assert!(output.status.success());
}

#[test]
fn test_syntax_errors_produce_no_false_positives() {
    let repo = TestRepo::new();
    repo.add_file("broken.ts", "const a = (1 +\nfunction f( {\n");

    let output = repo.run_cli_success(&["check", "broken.ts", "-f", "json"]);
    let json = assert_valid_json(&output, "broken file");
    assert!(diagnostic_codes(&json)
        .iter()
        .all(|code| code != "unnecessary-semicolon"));
}

#[test]
fn test_empty_file() {
    let repo = TestRepo::new();
    repo.add_file("empty.js", "");
    let output = repo.run_cli_success(&["check", "empty.js"]);
    assert_contains(&output, "0 diagnostic(s)", true, "empty file");
}
