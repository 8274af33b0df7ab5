//! Watch command handler - re-lint files as they change
//!
//! Output is streamed: each event is printed as soon as it is handled.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use crate::cli::{OutputFormat, WatchArgs};
use crate::commands::{diagnostic_json, push_diagnostics_text, resolve_dir, CommandContext};
use crate::error::Result;
use crate::fs_utils::display_path;
use crate::store::DiagnosticStore;
use crate::watch::{LintWatcher, WatchEvent};
use crate::workspace::{analyze_all, FileReport};

/// Run the watch command (blocks until interrupted)
pub fn run_watch(args: &WatchArgs, ctx: &CommandContext) -> Result<String> {
    let root = resolve_dir(args.dir.as_deref())?;
    let config = ctx.load_config(&root)?;
    let store = Arc::new(DiagnosticStore::new());

    if args.initial {
        for report in analyze_all(&root, &config, &store)? {
            emit(&format_report(&report, &root, ctx.format));
        }
    }

    if ctx.format == OutputFormat::Text {
        emit(&format!("watching {} (Ctrl-C to stop)\n", root.display()));
    }

    let watcher = LintWatcher::new(root.clone(), config, Arc::clone(&store));
    watcher.run(|event| {
        let text = match &event {
            WatchEvent::Linted(report) => format_report(report, &root, ctx.format),
            WatchEvent::Removed(path) => format_removed(path, &root, ctx.format),
        };
        emit(&text);
    })?;

    Ok(String::new())
}

fn emit(text: &str) {
    let mut stdout = std::io::stdout().lock();
    let _ = stdout.write_all(text.as_bytes());
    let _ = stdout.flush();
}

fn format_report(report: &FileReport, root: &Path, format: OutputFormat) -> String {
    let diagnostics = &report.outcome.diagnostics;
    match format {
        OutputFormat::Text => {
            if diagnostics.is_empty() {
                return format!("[{}] clean\n", display_path(&report.path, root));
            }
            let mut output = String::new();
            push_diagnostics_text(&mut output, &report.path, root, diagnostics);
            output
        }
        // One JSON object per line so the stream stays parseable
        OutputFormat::Json | OutputFormat::Toon => {
            let value = serde_json::json!({
                "_type": "linted",
                "path": display_path(&report.path, root),
                "diagnostics": diagnostics.iter().map(diagnostic_json).collect::<Vec<_>>(),
            });
            format!("{}\n", value)
        }
    }
}

fn format_removed(path: &Path, root: &Path, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("[{}] removed\n", display_path(path, root)),
        OutputFormat::Json | OutputFormat::Toon => {
            let value = serde_json::json!({
                "_type": "removed",
                "path": display_path(path, root),
            });
            format!("{}\n", value)
        }
    }
}
