//! Tests for the `ignore` CLI command

use crate::common::{assert_contains, assert_valid_json, diagnostic_codes, TestRepo};

#[test]
fn test_ignore_line_inserts_comment() {
    let repo = TestRepo::new();
    repo.add_file("a.js", "function go() {\n    const a = 1\n    run(a)\n}\n");

    let output = repo.run_cli_success(&["ignore", "line", "a.js", "2"]);
    assert_contains(&output, "inserted line ignore comment at a.js:2", true, "inserted");
    assert_eq!(
        repo.read_file("a.js"),
        "function go() {\n    // force-semicolon: ignore\n    const a = 1\n    run(a)\n}\n"
    );

    let output = repo.run_cli_success(&["check", "a.js", "-f", "json"]);
    let json = assert_valid_json(&output, "after ignore");
    assert_eq!(diagnostic_codes(&json), vec!["missing-semicolon"]);
    assert_eq!(json["files"][0]["diagnostics"][0]["range"]["start"]["line"], 3);
}

#[test]
fn test_ignore_line_twice_is_noop() {
    let repo = TestRepo::new();
    repo.with_mixed_project();

    repo.run_cli_success(&["ignore", "line", "src/missing.js", "1"]);
    let output = repo.run_cli_success(&["ignore", "line", "src/missing.js", "2"]);
    assert_contains(&output, "already ignored", true, "second insert skipped");
    assert_eq!(
        repo.read_file("src/missing.js"),
        "// force-semicolon: ignore\nconst a = 1\nconsole.log(a)\n"
    );
}

#[test]
fn test_ignore_file_silences_everything() {
    let repo = TestRepo::new();
    repo.with_mixed_project();

    repo.run_cli_success(&["ignore", "file", "src/unnecessary.ts"]);
    assert!(repo
        .read_file("src/unnecessary.ts")
        .starts_with("// force-semicolon: ignore-all\n"));

    let output = repo.run_cli_success(&["check", "src/unnecessary.ts"]);
    assert_contains(&output, "checked 1 file(s), 0 diagnostic(s)", true, "ignored file");

    let output = repo.run_cli_success(&["ignore", "file", "src/unnecessary.ts", "-f", "json"]);
    let json = assert_valid_json(&output, "repeat ignore");
    assert_eq!(json["inserted"], false);
}

#[test]
fn test_ignore_refuses_markup() {
    let repo = TestRepo::new();
    repo.add_file("page.html", "<script>\ngo()\n</script>\n");

    let (code, stderr) = repo.run_cli_failure(&["ignore", "file", "page.html"]);
    assert_eq!(code, 5);
    assert_contains(&stderr, "markup document", true, "markup refused");
}
