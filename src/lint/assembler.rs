//! Diagnostic assembly: turn findings into user-facing diagnostics.
//!
//! Applies, in order: file-level ignore, per-code configuration (`off`
//! drops the finding), inline `lint-type` overrides, then removes duplicates
//! that share a range and code. The first occurrence in traversal order wins.

use std::collections::HashSet;

use crate::config::LintConfig;
use crate::document::Range;
use crate::lint::suppression::{override_at, SeverityOverride};
use crate::lint::types::{Diagnostic, DiagnosticCode, Finding, DIAGNOSTIC_SOURCE};

/// Assemble the final diagnostic list for one pass
pub fn assemble(
    findings: Vec<Finding>,
    config: &LintConfig,
    overrides: &[SeverityOverride],
    file_ignored: bool,
) -> Vec<Diagnostic> {
    if file_ignored {
        return Vec::new();
    }

    let mut seen: HashSet<(Range, DiagnosticCode)> = HashSet::new();
    let mut diagnostics = Vec::with_capacity(findings.len());

    for finding in findings {
        let Some(code) = finding.kind.code() else {
            tracing::error!(
                "finding without a reportable kind at {}:{}",
                finding.statement.anchor.end.line + 1,
                finding.statement.anchor.end.character + 1
            );
            continue;
        };

        let Some(configured) = config.severity_for(code).severity() else {
            continue;
        };

        let range = finding.range();
        if !seen.insert((range, code)) {
            continue;
        }

        let severity = override_at(overrides, range.start).unwrap_or(configured);
        diagnostics.push(Diagnostic {
            range,
            message: code.message().to_string(),
            severity,
            code,
            source: DIAGNOSTIC_SOURCE,
            statement_range: finding.statement.anchor_span,
        });
    }

    diagnostics
}
