//! Source documents and line/column addressing.
//!
//! Positions are zero-based. `character` is a byte column within the line,
//! which is what tree-sitter reports in its points.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::lang::Lang;

/// A zero-based line / byte-column position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

impl From<tree_sitter::Point> for Position {
    fn from(point: tree_sitter::Point) -> Self {
        Self::new(point.row, point.column)
    }
}

/// A half-open range between two positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Range covering a single point
    pub fn empty(at: Position) -> Self {
        Self { start: at, end: at }
    }

    /// Single-line range on `line` between two columns
    pub fn on_line(line: usize, start: usize, end: usize) -> Self {
        Self::new(Position::new(line, start), Position::new(line, end))
    }
}

/// Immutable view of a document's text together with its language kind.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    path: Option<PathBuf>,
    lang: Lang,
    text: String,
    line_starts: Vec<usize>,
}

impl SourceDocument {
    pub fn new(text: impl Into<String>, lang: Lang) -> Self {
        let text = text.into();
        let line_starts = compute_line_starts(&text);
        Self {
            path: None,
            lang,
            text,
            line_starts,
        }
    }

    /// Attach the on-disk path the text was read from
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset where `line` starts
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Byte offset where the content of `line` ends (before `\r\n` / `\n`)
    pub fn line_end(&self, line: usize) -> Option<usize> {
        let start = self.line_start(line)?;
        let next = self
            .line_starts
            .get(line + 1)
            .copied()
            .unwrap_or(self.text.len());
        let raw = &self.text.as_bytes()[start..next];
        let mut len = raw.len();
        if len > 0 && raw[len - 1] == b'\n' {
            len -= 1;
        }
        if len > 0 && raw[len - 1] == b'\r' {
            len -= 1;
        }
        Some(start + len)
    }

    /// Text of `line` without its line terminator
    pub fn line_text(&self, line: usize) -> Option<&str> {
        let start = self.line_start(line)?;
        let end = self.line_end(line)?;
        self.text.get(start..end)
    }

    /// Convert a position into a byte offset. Columns past the end of the
    /// line are clamped to the line end.
    pub fn offset_at(&self, position: Position) -> Option<usize> {
        let start = self.line_start(position.line)?;
        let end = self.line_end(position.line)?;
        Some((start + position.character).min(end))
    }

    /// Convert a byte offset into a position
    pub fn position_at(&self, offset: usize) -> Position {
        let offset = offset.min(self.text.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next.saturating_sub(1),
        };
        Position::new(line, offset - self.line_starts[line])
    }

    /// Leading whitespace of `line`, verbatim
    pub fn indentation(&self, line: usize) -> &str {
        let text = self.line_text(line).unwrap_or("");
        let trimmed = text.trim_start_matches([' ', '\t']);
        &text[..text.len() - trimmed.len()]
    }
}

fn compute_line_starts(text: &str) -> Vec<usize> {
    let mut starts = vec![0];
    starts.extend(
        text.bytes()
            .enumerate()
            .filter(|(_, b)| *b == b'\n')
            .map(|(i, _)| i + 1),
    );
    starts
}
