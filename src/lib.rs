//! force-semicolon: semicolon policy linter for JavaScript and TypeScript
//!
//! Reports statements that are missing a terminating semicolon, block
//! constructs followed by an unnecessary one, and doubled semicolons. Every
//! diagnostic comes with quick fixes. Sources are parsed with tree-sitter,
//! so the verdict follows the syntax tree rather than line heuristics.
//!
//! # Supported Languages
//!
//! - TypeScript, TSX, JavaScript, JSX
//! - `<script>` regions of HTML documents (opt-in, read-only)
//!
//! # Example
//!
//! ```ignore
//! use force_semicolon::{lint_document, Lang, LintConfig, SourceDocument};
//!
//! let doc = SourceDocument::new("if (ready) start()\n", Lang::JavaScript);
//! let outcome = lint_document(&doc, &LintConfig::default());
//!
//! for d in &outcome.diagnostics {
//!     println!("{}:{} {}", d.range.start.line + 1, d.range.start.character + 1, d.message);
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod fs_utils;
pub mod lang;
pub mod lint;
pub mod parsing;
pub mod store;
pub mod watch;
pub mod workspace;

// Re-export commonly used types
pub use cli::{Cli, OutputFormat};
pub use config::{LintConfig, RuleSeverity};
pub use document::{Position, Range, SourceDocument};
pub use error::{Result, SemicolonError};
pub use lang::Lang;
pub use lint::{
    code_actions, lint_document, lint_source, CodeAction, Diagnostic, DiagnosticCode,
    LintOutcome, LintSeverity, PassReport, TextEdit,
};
pub use store::DiagnosticStore;
