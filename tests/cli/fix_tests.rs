//! Tests for the `fix` CLI command

use crate::common::{assert_contains, assert_json_type, assert_valid_json, TestRepo};

#[test]
fn test_fix_current_file() {
    let repo = TestRepo::new();
    repo.with_mixed_project();

    let output = repo.run_cli_success(&["fix", "current", "src/missing.js"]);
    assert_contains(&output, "applied 2 edit(s) in 1 of 1 file(s)", true, "summary");
    assert_eq!(
        repo.read_file("src/missing.js"),
        "const a = 1;\nconsole.log(a);\n"
    );
}

#[test]
fn test_fix_all_workspace() {
    let repo = TestRepo::new();
    repo.with_mixed_project();

    let output = repo.run_cli_success(&["fix", "all", "-f", "json"]);
    let json = assert_valid_json(&output, "fix all");
    assert_json_type(&json, "fix");
    assert_eq!(json["edits_applied"], 5);
    assert_eq!(json["files_changed"], 3);

    assert_eq!(repo.read_file("src/unnecessary.ts"), "function f() {}\nclass C {}\n");
    assert_eq!(repo.read_file("src/extra.mjs"), "let x = 1;\n");
    assert_eq!(
        repo.read_file("node_modules/dep/index.js"),
        "module.exports = 1\n"
    );

    // A second run has nothing left to do
    let output = repo.run_cli_success(&["fix", "all"]);
    assert_contains(&output, "applied 0 edit(s)", true, "idempotent");
}

#[test]
fn test_fix_dry_run_leaves_files() {
    let repo = TestRepo::new();
    repo.with_mixed_project();

    let output = repo.run_cli_success(&["fix", "--dry-run", "open", "src/missing.js", "src/extra.mjs"]);
    assert_contains(&output, "would apply 3 edit(s) in 2 of 2 file(s)", true, "dry run");
    assert_eq!(repo.read_file("src/missing.js"), "const a = 1\nconsole.log(a)\n");
    assert_eq!(repo.read_file("src/extra.mjs"), "let x = 1;;\n");
}

#[test]
fn test_fix_kind_filter() {
    let repo = TestRepo::new();
    repo.add_file("a.js", "run()\nfunction f() {};\n");

    repo.run_cli_success(&["fix", "--kind", "unnecessary", "current", "a.js"]);
    assert_eq!(repo.read_file("a.js"), "run()\nfunction f() {}\n");

    repo.run_cli_success(&["fix", "--kind", "missing", "current", "a.js"]);
    assert_eq!(repo.read_file("a.js"), "run();\nfunction f() {}\n");
}

#[test]
fn test_fix_repeats_for_runs_of_semicolons() {
    let repo = TestRepo::new();
    repo.add_file("a.ts", "go();;;;\n");

    repo.run_cli_success(&["fix", "current", "a.ts"]);
    assert_eq!(repo.read_file("a.ts"), "go();\n");
}

#[test]
fn test_fix_never_rewrites_markup() {
    let repo = TestRepo::new();
    repo.with_config("extractHtmlScripts = true\n");
    repo.add_file("page.html", "<script>\ngo()\n</script>\n");

    let output = repo.run_cli_success(&["fix", "current", "page.html"]);
    assert_contains(&output, "skipped (markup)", true, "markup skipped");
    assert_eq!(repo.read_file("page.html"), "<script>\ngo()\n</script>\n");
}
