//! Quick fixes for semicolon diagnostics.
//!
//! Every diagnostic offers three actions, in this order: the primary fix
//! (insert or delete a `;`), "Ignore this line" and "Ignore this file".

use serde::Serialize;

use crate::document::{Position, Range, SourceDocument};
use crate::error::{Result, SemicolonError};
use crate::lint::suppression::{IGNORE_FILE_COMMENT, IGNORE_LINE_COMMENT};
use crate::lint::types::{Diagnostic, DiagnosticCode};

/// A replacement of `range` with `new_text`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextEdit {
    pub range: Range,
    pub new_text: String,
}

impl TextEdit {
    pub fn insert(at: Position, text: impl Into<String>) -> Self {
        Self {
            range: Range::empty(at),
            new_text: text.into(),
        }
    }

    pub fn delete(range: Range) -> Self {
        Self {
            range,
            new_text: String::new(),
        }
    }
}

/// What a code action does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    AddSemicolon,
    RemoveSemicolon,
    IgnoreLine,
    IgnoreFile,
}

/// A titled edit attached to a diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeAction {
    pub title: String,
    pub kind: ActionKind,
    /// Code of the diagnostic the action resolves
    pub diagnostic: DiagnosticCode,
    pub edit: TextEdit,
}

/// The edit that resolves a diagnostic.
///
/// Missing semicolons are inserted at the end of the diagnostic range.
/// Unnecessary and extra semicolons are deleted one character after the
/// range start; `None` when that character is not a `;` in `doc`.
pub fn primary_fix(doc: &SourceDocument, diagnostic: &Diagnostic) -> Option<TextEdit> {
    match diagnostic.code {
        DiagnosticCode::MissingSemicolon => Some(TextEdit::insert(diagnostic.range.end, ";")),
        DiagnosticCode::UnnecessarySemicolon | DiagnosticCode::ExtraSemicolon => {
            let start = diagnostic.range.start;
            let first = doc.text().get(doc.offset_at(start)?..)?.chars().next()?;
            let column = start.character + first.len_utf8();
            let offset = doc.offset_at(Position::new(start.line, column))?;
            if doc.text().as_bytes().get(offset) != Some(&b';') {
                tracing::debug!(
                    "no semicolon at {}:{}, skipping fix",
                    start.line + 1,
                    column + 1
                );
                return None;
            }
            Some(TextEdit::delete(Range::on_line(start.line, column, column + 1)))
        }
    }
}

/// Insert a line-ignore comment above `line`, matching its indentation
pub fn ignore_line_edit(doc: &SourceDocument, line: usize) -> TextEdit {
    let indentation = doc.indentation(line);
    TextEdit::insert(
        Position::new(line, 0),
        format!("{}{}\n", indentation, IGNORE_LINE_COMMENT),
    )
}

/// Insert a file-ignore comment at the top of the document
pub fn ignore_file_edit() -> TextEdit {
    TextEdit::insert(Position::new(0, 0), format!("{}\n", IGNORE_FILE_COMMENT))
}

/// All code actions for a diagnostic, primary fix first
pub fn code_actions(doc: &SourceDocument, diagnostic: &Diagnostic) -> Vec<CodeAction> {
    let mut actions = Vec::with_capacity(3);

    if let Some(edit) = primary_fix(doc, diagnostic) {
        let (title, kind) = match diagnostic.code {
            DiagnosticCode::MissingSemicolon => ("Add semicolon", ActionKind::AddSemicolon),
            DiagnosticCode::UnnecessarySemicolon => {
                ("Remove unnecessary semicolon", ActionKind::RemoveSemicolon)
            }
            DiagnosticCode::ExtraSemicolon => {
                ("Remove extra semicolon", ActionKind::RemoveSemicolon)
            }
        };
        actions.push(CodeAction {
            title: title.to_string(),
            kind,
            diagnostic: diagnostic.code,
            edit,
        });
    }

    actions.push(CodeAction {
        title: "Ignore this line".to_string(),
        kind: ActionKind::IgnoreLine,
        diagnostic: diagnostic.code,
        edit: ignore_line_edit(doc, diagnostic.statement_range.start.line),
    });
    actions.push(CodeAction {
        title: "Ignore this file".to_string(),
        kind: ActionKind::IgnoreFile,
        diagnostic: diagnostic.code,
        edit: ignore_file_edit(),
    });

    actions
}

/// Apply edits to a document's text.
///
/// Edits are applied back to front so earlier offsets stay valid. An edit
/// overlapping one that was already applied is skipped.
pub fn apply_edits(doc: &SourceDocument, edits: &[TextEdit]) -> Result<String> {
    let mut resolved = Vec::with_capacity(edits.len());
    for edit in edits {
        let (Some(start), Some(end)) = (
            doc.offset_at(edit.range.start),
            doc.offset_at(edit.range.end),
        ) else {
            return Err(SemicolonError::InvalidArgument {
                message: format!(
                    "edit at {}:{} is outside the document",
                    edit.range.start.line + 1,
                    edit.range.start.character + 1
                ),
            });
        };
        if start > end {
            return Err(SemicolonError::InvalidArgument {
                message: "edit range ends before it starts".to_string(),
            });
        }
        resolved.push((start, end, edit.new_text.as_str()));
    }

    resolved.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));

    let mut text = doc.text().to_string();
    let mut applied_floor = usize::MAX;
    for (start, end, new_text) in resolved {
        if end > applied_floor {
            tracing::debug!("skipping overlapping edit at byte {}", start);
            continue;
        }
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            tracing::debug!("skipping edit inside a character at byte {}", start);
            continue;
        }
        text.replace_range(start..end, new_text);
        applied_floor = start;
    }

    Ok(text)
}
