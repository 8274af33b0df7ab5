//! Fix command handler - apply semicolon fixes to one file, a list of files,
//! or a whole workspace

use std::path::Path;

use crate::cli::{FixArgs, FixTarget, OutputFormat};
use crate::commands::{diagnostic_json, render_structured, resolve_dir, CommandContext};
use crate::error::Result;
use crate::fs_utils::display_path;
use crate::workspace::{fix_all, fix_file, fix_files, FileFix};

/// Run the fix command
pub fn run_fix(args: &FixArgs, ctx: &CommandContext) -> Result<String> {
    let selection = args.kind.selection();

    let (root, results) = match &args.target {
        FixTarget::Current { file } => {
            let root = resolve_dir(None)?;
            let config = ctx.load_config(&root)?;
            let result = fix_file(file, &config, &selection, args.dry_run)?;
            (root, vec![result])
        }
        FixTarget::Open { files } => {
            let root = resolve_dir(None)?;
            let config = ctx.load_config(&root)?;
            (root, fix_files(files, &config, &selection, args.dry_run))
        }
        FixTarget::All { dir } => {
            let root = resolve_dir(dir.as_deref())?;
            let config = ctx.load_config(&root)?;
            let results = fix_all(&root, &config, &selection, args.dry_run)?;
            (root, results)
        }
    };

    format_results(&root, &results, args, ctx)
}

fn format_results(
    root: &Path,
    results: &[FileFix],
    args: &FixArgs,
    ctx: &CommandContext,
) -> Result<String> {
    let edits: usize = results.iter().map(|r| r.fix.edits_applied).sum();
    let changed = results.iter().filter(|r| r.fix.changed()).count();

    match ctx.format {
        OutputFormat::Text => {
            let verb = if args.dry_run { "would apply" } else { "applied" };
            let mut output = format!(
                "{} {} edit(s) in {} of {} file(s)\n",
                verb,
                edits,
                changed,
                results.len()
            );
            for result in results {
                let path = display_path(&result.path, root);
                if result.fix.skipped_markup {
                    output.push_str(&format!("  {}: skipped (markup)\n", path));
                    continue;
                }
                if result.fix.changed() || ctx.verbose {
                    output.push_str(&format!(
                        "  {}: {} edit(s), {} round(s)\n",
                        path, result.fix.edits_applied, result.fix.rounds
                    ));
                }
                for d in &result.fix.remaining {
                    output.push_str(&format!(
                        "    unresolved {}:{} [{}]\n",
                        d.range.start.line + 1,
                        d.range.start.character + 1,
                        d.code
                    ));
                }
            }
            Ok(output)
        }
        format => {
            let value = serde_json::json!({
                "_type": "fix",
                "kind": format!("{:?}", args.kind).to_lowercase(),
                "dry_run": args.dry_run,
                "edits_applied": edits,
                "files_changed": changed,
                "files": results.iter().map(|r| serde_json::json!({
                    "path": display_path(&r.path, root),
                    "edits_applied": r.fix.edits_applied,
                    "rounds": r.fix.rounds,
                    "written": r.written,
                    "skipped_markup": r.fix.skipped_markup,
                    "remaining": r.fix.remaining.iter().map(diagnostic_json).collect::<Vec<_>>(),
                })).collect::<Vec<_>>(),
            });
            Ok(format!("{}\n", render_structured(&value, format)))
        }
    }
}
