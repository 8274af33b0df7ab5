//! Core types for the lint module.
//!
//! - `NodeKind` - closed set of syntactic constructs the classifier cares about
//! - `Policy` - what a construct expects after it (semicolon or not)
//! - `ClassifiedStatement` - one classified candidate node
//! - `Finding` - a policy compared against the literal source
//! - `Diagnostic` - the external, user-facing result

use serde::{Deserialize, Serialize};

use crate::document::{Position, Range};

/// Value of `Diagnostic::source`
pub const DIAGNOSTIC_SOURCE: &str = "force-semicolon";

// ============================================================================
// Classification Types
// ============================================================================

/// Statement and expression categories that can carry a semicolon policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    // Constructs that end with a semicolon
    ExpressionStatement,
    VariableDeclaration,
    Return,
    Throw,
    Break,
    Continue,
    Debugger,
    Import,
    Export,
    DoWhile,
    TypeAlias,
    FunctionExpression,
    ArrowFunction,

    // Constructs that end with a block
    If,
    For,
    ForIn,
    While,
    Switch,
    Try,
    ClassDeclaration,
    ClassMethod,
    FunctionDeclaration,
    Else,
    Interface,
    Enum,
}

/// Which side of the policy a kind starts on before context is considered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidacy {
    Require,
    Forbid,
}

impl NodeKind {
    /// Map a tree-sitter node kind onto a candidate kind
    pub fn from_node_kind(kind: &str) -> Option<Self> {
        let kind = match kind {
            "expression_statement" => NodeKind::ExpressionStatement,
            "lexical_declaration" | "variable_declaration" => NodeKind::VariableDeclaration,
            "return_statement" => NodeKind::Return,
            "throw_statement" => NodeKind::Throw,
            "break_statement" => NodeKind::Break,
            "continue_statement" => NodeKind::Continue,
            "debugger_statement" => NodeKind::Debugger,
            "import_statement" => NodeKind::Import,
            "export_statement" => NodeKind::Export,
            "do_statement" => NodeKind::DoWhile,
            "type_alias_declaration" => NodeKind::TypeAlias,
            "function_expression" | "function" => NodeKind::FunctionExpression,
            "arrow_function" => NodeKind::ArrowFunction,
            "if_statement" => NodeKind::If,
            "for_statement" => NodeKind::For,
            "for_in_statement" => NodeKind::ForIn,
            "while_statement" => NodeKind::While,
            "switch_statement" => NodeKind::Switch,
            "try_statement" => NodeKind::Try,
            "class_declaration" | "abstract_class_declaration" => NodeKind::ClassDeclaration,
            "method_definition" => NodeKind::ClassMethod,
            "function_declaration" | "generator_function_declaration" => {
                NodeKind::FunctionDeclaration
            }
            "else_clause" => NodeKind::Else,
            "interface_declaration" => NodeKind::Interface,
            "enum_declaration" => NodeKind::Enum,
            _ => return None,
        };
        Some(kind)
    }

    pub fn candidacy(self) -> Candidacy {
        match self {
            NodeKind::ExpressionStatement
            | NodeKind::VariableDeclaration
            | NodeKind::Return
            | NodeKind::Throw
            | NodeKind::Break
            | NodeKind::Continue
            | NodeKind::Debugger
            | NodeKind::Import
            | NodeKind::Export
            | NodeKind::DoWhile
            | NodeKind::TypeAlias
            | NodeKind::FunctionExpression
            | NodeKind::ArrowFunction => Candidacy::Require,

            NodeKind::If
            | NodeKind::For
            | NodeKind::ForIn
            | NodeKind::While
            | NodeKind::Switch
            | NodeKind::Try
            | NodeKind::ClassDeclaration
            | NodeKind::ClassMethod
            | NodeKind::FunctionDeclaration
            | NodeKind::Else
            | NodeKind::Interface
            | NodeKind::Enum => Candidacy::Forbid,
        }
    }
}

/// Semicolon policy of a classified statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    Require,
    Forbid,
    Neutral,
    Suppressed,
}

impl Policy {
    /// Resolve the two structural predicates into a policy. A node that
    /// matches both (only reachable through malformed trees) or neither is
    /// neutral.
    pub fn from_shape(require: bool, forbid: bool) -> Self {
        match (require, forbid) {
            (true, false) => Policy::Require,
            (false, true) => Policy::Forbid,
            (true, true) | (false, false) => Policy::Neutral,
        }
    }
}

/// Where a semicolon would sit after a statement.
///
/// `window` spans one column before and one column after the statement's
/// end, clamped to its line. The verifier reads exactly that text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anchor {
    /// Syntactic end of the anchoring node
    pub end: Position,
    pub window: Range,
    pub window_start_byte: usize,
    pub window_end_byte: usize,
}

/// A candidate node with its policy. Created once per pass, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedStatement {
    pub kind: NodeKind,
    pub policy: Policy,
    pub anchor: Anchor,
    /// Range of the visited node
    pub source_span: Range,
    /// Range of the node whose end produced the anchor. Differs from
    /// `source_span` when an unbraced body was classified in its parent's place.
    pub anchor_span: Range,
}

// ============================================================================
// Finding Types
// ============================================================================

/// Outcome of checking a statement against its source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    None,
    Missing,
    Unnecessary,
    Extra,
}

impl DiagnosticKind {
    /// Diagnostic code for a reportable kind
    pub fn code(self) -> Option<DiagnosticCode> {
        match self {
            DiagnosticKind::None => None,
            DiagnosticKind::Missing => Some(DiagnosticCode::MissingSemicolon),
            DiagnosticKind::Unnecessary => Some(DiagnosticCode::UnnecessarySemicolon),
            DiagnosticKind::Extra => Some(DiagnosticCode::ExtraSemicolon),
        }
    }
}

/// A statement whose source disagrees with its policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub statement: ClassifiedStatement,
    pub kind: DiagnosticKind,
    /// Literal text of the anchor window
    pub span: String,
}

impl Finding {
    /// Range reported to the user. A missing semicolon points at the last
    /// character of the statement so that the range end is the insertion
    /// point; unnecessary and extra semicolons report the whole window.
    pub fn range(&self) -> Range {
        let window = self.statement.anchor.window;
        match self.kind {
            DiagnosticKind::Missing => Range::new(window.start, self.statement.anchor.end),
            _ => window,
        }
    }
}

// ============================================================================
// Diagnostic Types
// ============================================================================

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LintSeverity {
    /// Informational hint
    Hint,
    /// Style suggestion
    Info,
    /// Warning (should fix)
    Warning,
    /// Error (must fix)
    Error,
}

impl LintSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            LintSeverity::Hint => "hint",
            LintSeverity::Info => "info",
            LintSeverity::Warning => "warning",
            LintSeverity::Error => "error",
        }
    }

    /// Short code for compact output
    pub fn code(&self) -> char {
        match self {
            LintSeverity::Hint => 'H',
            LintSeverity::Info => 'I',
            LintSeverity::Warning => 'W',
            LintSeverity::Error => 'E',
        }
    }
}

impl std::str::FromStr for LintSeverity {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hint" => Ok(LintSeverity::Hint),
            "info" | "information" => Ok(LintSeverity::Info),
            "warning" | "warn" => Ok(LintSeverity::Warning),
            "error" | "err" => Ok(LintSeverity::Error),
            _ => Err(()),
        }
    }
}

/// Stable diagnostic identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticCode {
    MissingSemicolon,
    UnnecessarySemicolon,
    ExtraSemicolon,
}

impl DiagnosticCode {
    pub const ALL: [DiagnosticCode; 3] = [
        DiagnosticCode::MissingSemicolon,
        DiagnosticCode::UnnecessarySemicolon,
        DiagnosticCode::ExtraSemicolon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::MissingSemicolon => "missing-semicolon",
            DiagnosticCode::UnnecessarySemicolon => "unnecessary-semicolon",
            DiagnosticCode::ExtraSemicolon => "extra-semicolon",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            DiagnosticCode::MissingSemicolon => "Missing semicolon.",
            DiagnosticCode::UnnecessarySemicolon => "Unnecessary semicolon.",
            DiagnosticCode::ExtraSemicolon => "Extra semicolon.",
        }
    }
}

impl std::str::FromStr for DiagnosticCode {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "missing-semicolon" | "missing" => Ok(DiagnosticCode::MissingSemicolon),
            "unnecessary-semicolon" | "unnecessary" => Ok(DiagnosticCode::UnnecessarySemicolon),
            "extra-semicolon" | "extra" => Ok(DiagnosticCode::ExtraSemicolon),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single diagnostic, immutable once emitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub range: Range,
    pub message: String,
    pub severity: LintSeverity,
    pub code: DiagnosticCode,
    pub source: &'static str,
    /// Statement the diagnostic belongs to; "ignore this line" targets its
    /// first line
    pub statement_range: Range,
}

// ============================================================================
// Pass Report
// ============================================================================

/// Trace counters for one pass. Advisory only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PassReport {
    /// Whether a syntax tree was produced
    pub parsed: bool,
    pub file_ignored: bool,
    pub nodes_visited: usize,
    pub statements_classified: usize,
    pub suppressed: usize,
    /// Nodes skipped because they carry no usable location
    pub skipped_nodes: usize,
    pub findings: usize,
    pub diagnostics: usize,
}
