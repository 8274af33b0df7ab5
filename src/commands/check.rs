//! Check command handler - lint documents given on the command line

use crate::cli::{CheckArgs, OutputFormat};
use crate::commands::{
    diagnostic_json, push_diagnostics_text, render_structured, resolve_dir, severity_counts,
    CommandContext,
};
use crate::error::Result;
use crate::fs_utils::display_path;
use crate::lint::{lint_document, Diagnostic};
use crate::workspace::load_document;

/// Run the check command
pub fn run_check(args: &CheckArgs, ctx: &CommandContext) -> Result<String> {
    let root = resolve_dir(None)?;
    let config = ctx.load_config(&root)?;

    let mut files = Vec::new();
    let mut all_diagnostics: Vec<Diagnostic> = Vec::new();
    let mut text = String::new();

    for path in &args.paths {
        let doc = load_document(path, args.language_id.as_deref())?;
        let outcome = lint_document(&doc, &config);

        if ctx.verbose {
            eprintln!(
                "{}: {} ({} statements, {} diagnostics)",
                path.display(),
                doc.lang().name(),
                outcome.report.statements_classified,
                outcome.diagnostics.len()
            );
        }

        match outcome.skipped {
            Some(reason) => {
                text.push_str(&format!(
                    "\n[{}] skipped: {}\n",
                    display_path(path, &root),
                    reason.as_str()
                ));
            }
            None => push_diagnostics_text(&mut text, path, &root, &outcome.diagnostics),
        }

        files.push(serde_json::json!({
            "path": display_path(path, &root),
            "language": doc.lang().name(),
            "skipped": outcome.skipped.map(|r| r.as_str()),
            "synthetic": outcome.synthetic,
            "diagnostics": outcome.diagnostics.iter().map(diagnostic_json).collect::<Vec<_>>(),
        }));
        all_diagnostics.extend(outcome.diagnostics);
    }

    match ctx.format {
        OutputFormat::Text => {
            let mut output = String::new();
            output.push_str(&format!(
                "checked {} file(s), {} diagnostic(s)\n",
                args.paths.len(),
                all_diagnostics.len()
            ));
            output.push_str(&text);
            Ok(output)
        }
        format => {
            let value = serde_json::json!({
                "_type": "check",
                "files": files,
                "total": all_diagnostics.len(),
                "by_severity": severity_counts(&all_diagnostics),
            });
            Ok(format!("{}\n", render_structured(&value, format)))
        }
    }
}
