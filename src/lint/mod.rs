//! Semicolon linting.
//!
//! A pass runs the same steps for every document:
//!
//! 1. extract lintable script text ([`crate::extract`])
//! 2. build a syntax tree ([`crate::parsing`])
//! 3. classify candidate statements ([`classifier`])
//! 4. compare each policy with the source around its anchor ([`verifier`])
//! 5. assemble diagnostics under the configuration ([`assembler`])
//!
//! Quick fixes for the resulting diagnostics live in [`fixes`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use force_semicolon::lint::lint_document;
//! use force_semicolon::{Lang, LintConfig, SourceDocument};
//!
//! let doc = SourceDocument::new("const a = 1\n", Lang::JavaScript);
//! let outcome = lint_document(&doc, &LintConfig::default());
//! assert_eq!(outcome.diagnostics.len(), 1);
//! ```

pub mod assembler;
pub mod classifier;
pub mod fixes;
pub mod suppression;
mod types;
pub mod verifier;

pub use fixes::{apply_edits, code_actions, primary_fix, ActionKind, CodeAction, TextEdit};
pub use types::{
    Anchor, Candidacy, ClassifiedStatement, Diagnostic, DiagnosticCode, DiagnosticKind, Finding,
    LintSeverity, NodeKind, PassReport, Policy, DIAGNOSTIC_SOURCE,
};

use crate::config::LintConfig;
use crate::document::SourceDocument;
use crate::extract::{extract_source, Extraction, SkipReason};
use crate::lang::Lang;
use crate::parsing::build_tree;

/// Result of linting one document
#[derive(Debug, Clone, Default)]
pub struct LintOutcome {
    pub diagnostics: Vec<Diagnostic>,
    pub report: PassReport,
    /// Set when the document produced no lintable text
    pub skipped: Option<SkipReason>,
    /// True when diagnostics refer to an extracted buffer rather than the
    /// document itself
    pub synthetic: bool,
}

/// Lint a document, extracting script regions from markup when enabled
pub fn lint_document(doc: &SourceDocument, config: &LintConfig) -> LintOutcome {
    match extract_source(doc, config) {
        Extraction::Source(source) => {
            let mut outcome = lint_source(&source.text, source.lang, config);
            outcome.synthetic = source.synthetic;
            outcome
        }
        Extraction::Skip(reason) => {
            tracing::debug!(
                "skipping {}: {}",
                doc.path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "<buffer>".to_string()),
                reason.as_str()
            );
            LintOutcome {
                skipped: Some(reason),
                ..LintOutcome::default()
            }
        }
    }
}

/// Lint plain script text
pub fn lint_source(text: &str, lang: Lang, config: &LintConfig) -> LintOutcome {
    let Some(tree) = build_tree(text, lang) else {
        return LintOutcome::default();
    };
    let script = SourceDocument::new(text, lang);
    let root = tree.root_node();

    let file_ignored = suppression::file_is_ignored(&root, text);
    let overrides = suppression::severity_overrides(&root, text);

    let classification = classifier::classify(&root, &script);
    let mut report = classification.report;
    report.parsed = true;
    report.file_ignored = file_ignored;

    let findings = verifier::verify_all(&classification.statements, text, &mut report);
    let diagnostics = assembler::assemble(findings, config, &overrides, file_ignored);
    report.diagnostics = diagnostics.len();

    if config.debug {
        tracing::debug!(
            "pass: {} nodes, {} statements, {} suppressed, {} skipped, {} findings, {} diagnostics{}",
            report.nodes_visited,
            report.statements_classified,
            report.suppressed,
            report.skipped_nodes,
            report.findings,
            report.diagnostics,
            if file_ignored { " (file ignored)" } else { "" }
        );
    }

    LintOutcome {
        diagnostics,
        report,
        skipped: None,
        synthetic: false,
    }
}
