//! Actions command handler - list the code actions offered on a line

use crate::cli::{ActionsArgs, OutputFormat};
use crate::commands::{diagnostic_json, render_structured, CommandContext};
use crate::error::{Result, SemicolonError};
use crate::lint::{code_actions, lint_document, CodeAction, Diagnostic};
use crate::workspace::load_document;

/// Run the actions command
pub fn run_actions(args: &ActionsArgs, ctx: &CommandContext) -> Result<String> {
    let root = crate::commands::resolve_dir(None)?;
    let config = ctx.load_config(&root)?;
    let doc = load_document(&args.file, None)?;

    if args.line == 0 || args.line > doc.line_count() {
        return Err(SemicolonError::InvalidArgument {
            message: format!(
                "line {} is outside {} (1..={})",
                args.line,
                args.file.display(),
                doc.line_count()
            ),
        });
    }
    let line = args.line - 1;

    let outcome = lint_document(&doc, &config);
    if outcome.synthetic {
        return Err(SemicolonError::InvalidArgument {
            message: "code actions are not available for markup documents".to_string(),
        });
    }

    let entries: Vec<(Diagnostic, Vec<CodeAction>)> = outcome
        .diagnostics
        .into_iter()
        .filter(|d| d.range.start.line == line)
        .map(|d| {
            let actions = code_actions(&doc, &d);
            (d, actions)
        })
        .collect();

    match ctx.format {
        OutputFormat::Text => {
            if entries.is_empty() {
                return Ok(format!("no diagnostics on line {}\n", args.line));
            }
            let mut output = String::new();
            for (diagnostic, actions) in &entries {
                output.push_str(&format!(
                    "{}:{} {} [{}] {}\n",
                    diagnostic.range.start.line + 1,
                    diagnostic.range.start.character + 1,
                    diagnostic.severity.code(),
                    diagnostic.code,
                    diagnostic.message
                ));
                for (i, action) in actions.iter().enumerate() {
                    output.push_str(&format!("  {}. {}\n", i + 1, action.title));
                }
            }
            Ok(output)
        }
        format => {
            let value = serde_json::json!({
                "_type": "actions",
                "path": args.file.to_string_lossy(),
                "line": args.line,
                "diagnostics": entries.iter().map(|(d, actions)| serde_json::json!({
                    "diagnostic": diagnostic_json(d),
                    "actions": actions,
                })).collect::<Vec<_>>(),
            });
            Ok(format!("{}\n", render_structured(&value, format)))
        }
    }
}
