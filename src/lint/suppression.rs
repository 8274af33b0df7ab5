//! Comment annotations that silence or re-grade diagnostics.
//!
//! - `// force-semicolon: ignore-all` anywhere in a comment drops every
//!   diagnostic of the file
//! - `// force-semicolon: ignore` on its own line, directly before a
//!   statement, suppresses that statement
//! - `// force-semicolon lint-type: warning` changes the severity of
//!   diagnostics that follow it

use once_cell::sync::Lazy;
use regex::Regex;
use tree_sitter::Node;

use crate::document::Position;
use crate::lint::LintSeverity;

pub const IGNORE_FILE_MARKER: &str = "force-semicolon: ignore-all";
pub const IGNORE_LINE_MARKER: &str = "force-semicolon: ignore";

/// Comment inserted by the "Ignore this line" action
pub const IGNORE_LINE_COMMENT: &str = "// force-semicolon: ignore";
/// Comment inserted by the "Ignore this file" action
pub const IGNORE_FILE_COMMENT: &str = "// force-semicolon: ignore-all";

static LINT_TYPE: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"(?i)force-semicolon\s+lint-type\s*:\s*([a-z]+)").ok()
});

/// Severity set by an inline comment, effective from `from` onwards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityOverride {
    pub from: Position,
    pub severity: LintSeverity,
}

/// Find the most recent override that applies at `position`
pub fn override_at(overrides: &[SeverityOverride], position: Position) -> Option<LintSeverity> {
    overrides
        .iter()
        .take_while(|o| o.from <= position)
        .last()
        .map(|o| o.severity)
}

pub fn is_comment(node: &Node) -> bool {
    node.kind() == "comment"
}

fn node_text<'s>(node: &Node, source: &'s str) -> &'s str {
    source.get(node.start_byte()..node.end_byte()).unwrap_or("")
}

/// True if any comment in the tree carries the file-ignore marker
pub fn file_is_ignored(root: &Node, source: &str) -> bool {
    let mut found = false;
    visit_comments(root, |comment| {
        if node_text(&comment, source).contains(IGNORE_FILE_MARKER) {
            found = true;
        }
    });
    found
}

/// Collect inline severity overrides in document order.
///
/// Unrecognized values are logged and skipped; `off` is not accepted inline.
pub fn severity_overrides(root: &Node, source: &str) -> Vec<SeverityOverride> {
    let Some(re) = LINT_TYPE.as_ref() else {
        return Vec::new();
    };

    let mut overrides = Vec::new();
    visit_comments(root, |comment| {
        let text = node_text(&comment, source);
        let Some(value) = re.captures(text).and_then(|caps| caps.get(1)) else {
            return;
        };
        match value.as_str().parse::<LintSeverity>() {
            Ok(severity) => overrides.push(SeverityOverride {
                from: comment.end_position().into(),
                severity,
            }),
            Err(()) => {
                tracing::warn!(
                    "ignoring unknown lint-type '{}' on line {}",
                    value.as_str(),
                    comment.start_position().row + 1
                );
            }
        }
    });
    overrides
}

/// True if `node` is directly preceded by a line-ignore comment that sits
/// alone on its line
pub fn has_ignore_annotation(node: &Node, source: &str) -> bool {
    let Some(prev) = node.prev_sibling() else {
        return false;
    };
    if !is_comment(&prev) || prev.end_position().row >= node.start_position().row {
        return false;
    }

    let start = prev.start_byte();
    let line_start = source
        .get(..start)
        .and_then(|before| before.rfind('\n'))
        .map(|i| i + 1)
        .unwrap_or(0);
    let leading = source.get(line_start..start).unwrap_or("");
    if !leading.trim().is_empty() {
        return false;
    }

    node_text(&prev, source).contains(IGNORE_LINE_MARKER)
}

/// Visit every comment node in document order (iterative)
fn visit_comments<'t, F>(root: &Node<'t>, mut visitor: F)
where
    F: FnMut(Node<'t>),
{
    let mut cursor = root.walk();
    let mut did_visit_children = false;

    loop {
        if !did_visit_children {
            let node = cursor.node();
            if is_comment(&node) {
                visitor(node);
            } else if cursor.goto_first_child() {
                continue;
            }
        }

        if cursor.goto_next_sibling() {
            did_visit_children = false;
            continue;
        }

        if !cursor.goto_parent() {
            break;
        }
        did_visit_children = true;
    }
}
