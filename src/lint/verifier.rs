//! Span verification: compare a statement's policy with the literal text
//! around its anchor.

use crate::lint::types::{ClassifiedStatement, DiagnosticKind, Finding, PassReport, Policy};

/// Judge a single anchor window
pub fn verify(policy: Policy, span: &str) -> DiagnosticKind {
    match policy {
        Policy::Require => {
            if span.contains(";;") {
                DiagnosticKind::Extra
            } else if span.contains(';') {
                DiagnosticKind::None
            } else {
                DiagnosticKind::Missing
            }
        }
        Policy::Forbid => {
            if span.contains(';') {
                DiagnosticKind::Unnecessary
            } else {
                DiagnosticKind::None
            }
        }
        Policy::Neutral | Policy::Suppressed => DiagnosticKind::None,
    }
}

/// Verify every classified statement against `source`, keeping only the
/// statements that disagree with their policy
pub fn verify_all(
    statements: &[ClassifiedStatement],
    source: &str,
    report: &mut PassReport,
) -> Vec<Finding> {
    let mut findings = Vec::new();

    for statement in statements {
        if matches!(statement.policy, Policy::Neutral | Policy::Suppressed) {
            continue;
        }

        let anchor = statement.anchor;
        let Some(span) = source.get(anchor.window_start_byte..anchor.window_end_byte) else {
            tracing::debug!(
                "anchor window {}..{} is not addressable",
                anchor.window_start_byte,
                anchor.window_end_byte
            );
            continue;
        };

        let kind = verify(statement.policy, span);
        if kind != DiagnosticKind::None {
            findings.push(Finding {
                statement: *statement,
                kind,
                span: span.to_string(),
            });
        }
    }

    report.findings = findings.len();
    findings
}
