//! Analyze-all command handler - lint every matching file in a workspace

use std::time::Instant;

use crate::cli::{AnalyzeAllArgs, OutputFormat};
use crate::commands::{
    diagnostic_json, push_diagnostics_text, render_structured, resolve_dir, severity_counts,
    CommandContext,
};
use crate::error::Result;
use crate::fs_utils::display_path;
use crate::lint::Diagnostic;
use crate::store::DiagnosticStore;
use crate::workspace::analyze_all;

/// Run the analyze-all command
pub fn run_analyze_all(args: &AnalyzeAllArgs, ctx: &CommandContext) -> Result<String> {
    let root = resolve_dir(args.dir.as_deref())?;
    let config = ctx.load_config(&root)?;
    let store = DiagnosticStore::new();

    let start = Instant::now();
    let reports = analyze_all(&root, &config, &store)?;
    let duration_ms = start.elapsed().as_millis() as u64;

    let snapshot = store.snapshot();
    let all: Vec<Diagnostic> = snapshot
        .iter()
        .flat_map(|(_, diagnostics)| diagnostics.iter().cloned())
        .collect();
    let files_with_issues = snapshot.iter().filter(|(_, d)| !d.is_empty()).count();

    match ctx.format {
        OutputFormat::Text => {
            let mut output = String::new();
            output.push_str("═══════════════════════════════════════════\n");
            output.push_str("  FORCE-SEMICOLON: WORKSPACE\n");
            output.push_str("═══════════════════════════════════════════\n\n");
            output.push_str(&format!("path: {}\n", root.display()));
            output.push_str(&format!(
                "files: {} | with issues: {} | diagnostics: {} | duration: {}ms\n",
                reports.len(),
                files_with_issues,
                all.len(),
                duration_ms
            ));

            if !args.summary_only {
                for (path, diagnostics) in &snapshot {
                    push_diagnostics_text(&mut output, path, &root, diagnostics);
                }
            }
            Ok(output)
        }
        format => {
            let files: Vec<serde_json::Value> = snapshot
                .iter()
                .filter(|(_, d)| !args.summary_only && !d.is_empty())
                .map(|(path, diagnostics)| {
                    serde_json::json!({
                        "path": display_path(path, &root),
                        "diagnostics": diagnostics.iter().map(diagnostic_json).collect::<Vec<_>>(),
                    })
                })
                .collect();

            let value = serde_json::json!({
                "_type": "analyze_all",
                "path": root.to_string_lossy(),
                "files_checked": reports.len(),
                "files_with_issues": files_with_issues,
                "total": all.len(),
                "by_severity": severity_counts(&all),
                "duration_ms": duration_ms,
                "files": files,
            });
            Ok(format!("{}\n", render_structured(&value, format)))
        }
    }
}
