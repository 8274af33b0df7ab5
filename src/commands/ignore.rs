//! Ignore command handler - insert line or file ignore comments

use std::path::Path;

use crate::cli::{IgnoreArgs, IgnoreTarget, OutputFormat};
use crate::commands::{render_structured, CommandContext};
use crate::document::SourceDocument;
use crate::error::{Result, SemicolonError};
use crate::fs_utils::write_atomic;
use crate::lint::suppression::{IGNORE_FILE_MARKER, IGNORE_LINE_COMMENT};
use crate::lint::{apply_edits, TextEdit};
use crate::lint::fixes::{ignore_file_edit, ignore_line_edit};
use crate::workspace::load_document;

/// Run the ignore command
pub fn run_ignore(args: &IgnoreArgs, ctx: &CommandContext) -> Result<String> {
    let (file, scope, line, inserted) = match &args.target {
        IgnoreTarget::Line { file, line } => {
            let inserted = ignore_line(file, *line)?;
            (file, "line", Some(*line), inserted)
        }
        IgnoreTarget::File { file } => {
            let inserted = ignore_file(file)?;
            (file, "file", None, inserted)
        }
    };

    match ctx.format {
        OutputFormat::Text => {
            let target = match line {
                Some(line) => format!("{}:{}", file.display(), line),
                None => file.display().to_string(),
            };
            if inserted {
                Ok(format!("inserted {} ignore comment at {}\n", scope, target))
            } else {
                Ok(format!("{} already ignored\n", target))
            }
        }
        format => {
            let value = serde_json::json!({
                "_type": "ignore",
                "path": file.to_string_lossy(),
                "scope": scope,
                "line": line,
                "inserted": inserted,
            });
            Ok(format!("{}\n", render_structured(&value, format)))
        }
    }
}

fn load_script(file: &Path) -> Result<SourceDocument> {
    let doc = load_document(file, None)?;
    if doc.lang().is_markup() {
        return Err(SemicolonError::InvalidArgument {
            message: format!("{} is a markup document", file.display()),
        });
    }
    Ok(doc)
}

/// Insert a line-ignore comment above a 1-based line. Returns false when the
/// line is already annotated.
fn ignore_line(file: &Path, line: usize) -> Result<bool> {
    let doc = load_script(file)?;
    if line == 0 || line > doc.line_count() {
        return Err(SemicolonError::InvalidArgument {
            message: format!(
                "line {} is outside {} (1..={})",
                line,
                file.display(),
                doc.line_count()
            ),
        });
    }
    let line = line - 1;

    let already = line > 0
        && doc
            .line_text(line - 1)
            .is_some_and(|prev| prev.trim() == IGNORE_LINE_COMMENT);
    if already {
        return Ok(false);
    }

    write_edit(file, &doc, ignore_line_edit(&doc, line))?;
    Ok(true)
}

/// Insert a file-ignore comment at the top. Returns false when the file
/// already carries one.
fn ignore_file(file: &Path) -> Result<bool> {
    let doc = load_script(file)?;
    if doc.text().contains(IGNORE_FILE_MARKER) {
        return Ok(false);
    }

    write_edit(file, &doc, ignore_file_edit())?;
    Ok(true)
}

fn write_edit(file: &Path, doc: &SourceDocument, edit: TextEdit) -> Result<()> {
    let text = apply_edits(doc, &[edit])?;
    write_atomic(file, &text)?;
    Ok(())
}
