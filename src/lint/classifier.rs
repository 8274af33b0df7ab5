//! Statement classification.
//!
//! Walks the syntax tree once, depth first, and assigns every candidate node
//! a [`Policy`] together with the anchor where its terminating semicolon
//! would sit. Context (enclosing suppression) flows down the recursion as an
//! immutable value; results and counters go into a pass accumulator that the
//! caller owns.
//!
//! Policy rules:
//! - statements ending in an expression require a semicolon
//! - statements ending in a block forbid one
//! - an unbraced `if`/loop body is judged by the inner statement
//! - declarations in a `for (...)` head, callbacks, arrow functions and
//!   export wrappers are neutral
//! - a node that looks like both (only possible around `ERROR` nodes) is
//!   neutral

use tree_sitter::Node;

use crate::document::{Position, Range, SourceDocument};
use crate::lint::suppression::{has_ignore_annotation, is_comment};
use crate::lint::types::{Anchor, Candidacy, ClassifiedStatement, NodeKind, PassReport, Policy};

/// Per-pass accumulator threaded through the walk
#[derive(Debug, Default)]
pub struct Classification {
    pub statements: Vec<ClassifiedStatement>,
    pub report: PassReport,
}

/// Context handed from a node to its children
#[derive(Debug, Clone, Copy, Default)]
struct Scope {
    /// Start row of an enclosing suppressed statement
    suppressed_row: Option<usize>,
}

/// A policy decision and the node whose end anchors it
struct Resolved<'t> {
    policy: Policy,
    anchor_node: Node<'t>,
}

/// Classify every candidate node below `root`
pub fn classify(root: &Node, doc: &SourceDocument) -> Classification {
    let mut acc = Classification::default();
    visit(*root, Scope::default(), doc, &mut acc);
    acc.report.statements_classified = acc.statements.len();
    acc
}

fn visit(node: Node, scope: Scope, doc: &SourceDocument, acc: &mut Classification) {
    acc.report.nodes_visited += 1;

    if node.is_missing() {
        acc.report.skipped_nodes += 1;
        return;
    }
    if is_comment(&node) {
        return;
    }

    let mut child_scope = scope;
    if let Some(kind) = NodeKind::from_node_kind(node.kind()) {
        let start_row = node.start_position().row;
        let suppressed = scope.suppressed_row == Some(start_row)
            || has_ignore_annotation(&node, doc.text());

        let resolved = if suppressed {
            child_scope.suppressed_row = Some(start_row);
            acc.report.suppressed += 1;
            Resolved {
                policy: Policy::Suppressed,
                anchor_node: node,
            }
        } else {
            resolve(node, kind, doc.text())
        };

        match anchor_for(&resolved.anchor_node, doc) {
            Some(anchor) => acc.statements.push(ClassifiedStatement {
                kind,
                policy: resolved.policy,
                anchor,
                source_span: node_range(&node),
                anchor_span: node_range(&resolved.anchor_node),
            }),
            None => {
                tracing::debug!(
                    "skipping {} at {}:{} without a usable location",
                    node.kind(),
                    start_row + 1,
                    node.start_position().column + 1
                );
                acc.report.skipped_nodes += 1;
            }
        }
    }

    let mut cursor = node.walk();
    let children: Vec<Node> = node.named_children(&mut cursor).collect();
    for child in children {
        visit(child, child_scope, doc, acc);
    }
}

/// Decide the policy of a candidate node
fn resolve<'t>(node: Node<'t>, kind: NodeKind, source: &str) -> Resolved<'t> {
    if kind.candidacy() == Candidacy::Forbid {
        if let Some(body) = unbraced_body(&node, kind) {
            return resolve_inner(body, source);
        }
    }

    let malformed = has_error_child(&node);
    let (require, forbid) = match kind.candidacy() {
        Candidacy::Require => (!require_excluded(&node, kind, source), false),
        Candidacy::Forbid => (false, !forbid_excluded(&node, kind)),
    };

    Resolved {
        policy: Policy::from_shape(require || malformed, forbid || malformed),
        anchor_node: node,
    }
}

/// Classify the single statement body of an `if`/loop in its parent's place
fn resolve_inner<'t>(body: Node<'t>, source: &str) -> Resolved<'t> {
    if has_ignore_annotation(&body, source) {
        return Resolved {
            policy: Policy::Suppressed,
            anchor_node: body,
        };
    }
    match NodeKind::from_node_kind(body.kind()) {
        Some(kind) => resolve(body, kind, source),
        None => Resolved {
            policy: Policy::Neutral,
            anchor_node: body,
        },
    }
}

/// The trailing statement of an `if`/loop when it is not a `{}` block.
///
/// For an `if` with an `else`, the trailing statement is the else body.
fn unbraced_body<'t>(node: &Node<'t>, kind: NodeKind) -> Option<Node<'t>> {
    let tail = match kind {
        NodeKind::If => match node.child_by_field_name("alternate") {
            Some(else_clause) => else_body(&else_clause)?,
            None => node.child_by_field_name("consequence")?,
        },
        NodeKind::For | NodeKind::ForIn | NodeKind::While => node.child_by_field_name("body")?,
        _ => return None,
    };
    (tail.kind() != "statement_block").then_some(tail)
}

fn else_body<'t>(else_clause: &Node<'t>) -> Option<Node<'t>> {
    let mut cursor = else_clause.walk();
    let body = else_clause
        .named_children(&mut cursor)
        .find(|child| !is_comment(child));
    body
}

/// Context rules that make a semicolon-requiring node neutral
fn require_excluded(node: &Node, kind: NodeKind, source: &str) -> bool {
    if in_for_head(node) {
        return true;
    }
    match kind {
        NodeKind::ArrowFunction => true,
        NodeKind::FunctionExpression => {
            let is_callback = node.parent().is_some_and(|p| p.kind() == "arguments");
            is_callback || !ends_enclosing_statement(node, source)
        }
        NodeKind::Export => is_export_wrapper(node),
        _ => false,
    }
}

/// Context rules that make a semicolon-forbidding node neutral
fn forbid_excluded(node: &Node, kind: NodeKind) -> bool {
    match kind {
        // `else if` chains are judged through the inner `if`
        NodeKind::Else => {
            let Some(parent) = node.parent() else {
                return true;
            };
            if parent.kind() != "if_statement" {
                return true;
            }
            !else_body(node).is_some_and(|body| body.kind() == "statement_block")
        }
        _ => false,
    }
}

/// Initializer, condition or update of a `for (...)` header
fn in_for_head(node: &Node) -> bool {
    let Some(parent) = node.parent() else {
        return false;
    };
    if !matches!(parent.kind(), "for_statement" | "for_in_statement") {
        return false;
    }
    parent
        .child_by_field_name("body")
        .map_or(true, |body| body.id() != node.id())
}

/// `export` that only wraps a declaration or a function/class expression
fn is_export_wrapper(node: &Node) -> bool {
    if node.child_by_field_name("declaration").is_some() {
        return true;
    }
    node.child_by_field_name("value").is_some_and(|value| {
        matches!(
            value.kind(),
            "function_expression" | "function" | "generator_function" | "class" | "arrow_function"
        )
    })
}

/// True when a function expression is the last thing in its statement, as in
/// `const f = function () {}` or `x.y = function () {}`. Its end then
/// coincides with the statement's semicolon position.
fn ends_enclosing_statement(node: &Node, source: &str) -> bool {
    let mut current = *node;
    while let Some(parent) = current.parent() {
        match parent.kind() {
            "variable_declarator" | "assignment_expression" => {
                if code_end(parent).end_byte() != code_end(current).end_byte() {
                    return false;
                }
                current = parent;
            }
            "lexical_declaration" | "variable_declaration" | "expression_statement" => {
                let rest = source
                    .get(code_end(current).end_byte()..code_end(parent).end_byte())
                    .unwrap_or("");
                return rest.chars().all(|c| c == ';' || c.is_whitespace());
            }
            _ => return false,
        }
    }
    false
}

fn has_error_child(node: &Node) -> bool {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).any(|child| child.is_error());
    found
}

fn node_range(node: &Node) -> Range {
    Range::new(node.start_position().into(), node.end_position().into())
}

/// Last non-comment token under `node`. A statement closed by automatic
/// semicolon insertion absorbs a trailing comment on its line, so the
/// node's own end can sit past the code.
fn code_end<'t>(node: Node<'t>) -> Node<'t> {
    let mut current = node;
    loop {
        let mut cursor = current.walk();
        let last = current
            .children(&mut cursor)
            .filter(|child| !is_comment(child))
            .last();
        match last {
            Some(child) => current = child,
            None => return current,
        }
    }
}

/// Window of one character either side of the code's end, clamped to its
/// line. Columns are byte offsets.
fn anchor_for(node: &Node, doc: &SourceDocument) -> Option<Anchor> {
    if node.start_byte() == node.end_byte() {
        return None;
    }

    let tail = code_end(*node);
    let end = tail.end_position();
    let line_start = doc.line_start(end.row)?;
    let line_end = doc.line_end(end.row)?;
    let end_byte = tail.end_byte().clamp(line_start, line_end);

    let text = doc.text();
    let mut window_start = end_byte.saturating_sub(1).max(line_start);
    while !text.is_char_boundary(window_start) {
        window_start -= 1;
    }
    let mut window_end = (end_byte + 1).min(line_end);
    while !text.is_char_boundary(window_end) {
        window_end += 1;
    }

    Some(Anchor {
        end: Position::new(end.row, end_byte - line_start),
        window: Range::on_line(end.row, window_start - line_start, window_end - line_start),
        window_start_byte: window_start,
        window_end_byte: window_end,
    })
}
