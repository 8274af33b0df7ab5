//! Workspace-wide operations: file matching, analyze-all and fix-all.
//!
//! Files are discovered with `ignore::WalkBuilder` (respecting `.gitignore`,
//! never descending into `node_modules`) and processed in parallel with
//! rayon. A failure on one file is logged and does not stop the others.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use rayon::prelude::*;

use crate::config::LintConfig;
use crate::document::SourceDocument;
use crate::error::{Result, SemicolonError};
use crate::fs_utils::write_atomic;
use crate::lang::Lang;
use crate::lint::{
    apply_edits, lint_document, primary_fix, Diagnostic, DiagnosticCode, LintOutcome, TextEdit,
};
use crate::store::DiagnosticStore;

/// Upper bound on lint-and-fix rounds for one document
pub const MAX_FIX_ROUNDS: usize = 8;

const SKIPPED_DIRS: &[&str] = &["node_modules"];

/// Check if a path has an extension the linter handles under `config`
pub fn is_lintable(path: &Path, config: &LintConfig) -> bool {
    match Lang::from_path(path) {
        Ok(lang) if lang.is_markup() => config.extract_html_scripts,
        Ok(_) => true,
        Err(_) => false,
    }
}

/// True if any component of `path` is a directory the walker never enters
pub fn in_skipped_dir(path: &Path) -> bool {
    path.components().any(|c| {
        c.as_os_str()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
    })
}

/// Collect lintable files below `root`, sorted by path
pub fn collect_files(root: &Path, config: &LintConfig) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(SemicolonError::FileNotFound {
            path: root.display().to_string(),
        });
    }

    let mut builder = WalkBuilder::new(root);
    builder.git_ignore(true);
    builder.git_global(true);
    builder.git_exclude(true);
    builder.follow_links(false);
    builder.hidden(true);
    builder.filter_entry(|entry| {
        let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
        !(is_dir && entry.file_name().to_str().is_some_and(|n| SKIPPED_DIRS.contains(&n)))
    });

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.into_path();
        if is_lintable(&path, config) {
            files.push(path);
        }
    }

    files.sort();
    tracing::debug!("found {} lintable files under {}", files.len(), root.display());
    Ok(files)
}

/// Read a document from disk. `language_id` overrides extension detection.
pub fn load_document(path: &Path, language_id: Option<&str>) -> Result<SourceDocument> {
    if !path.is_file() {
        return Err(SemicolonError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let lang = match language_id {
        Some(id) => Lang::from_language_id(id)?,
        None => Lang::from_path(path)?,
    };

    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::InvalidData => SemicolonError::ParseFailure {
            message: format!("{} is not valid UTF-8", path.display()),
        },
        _ => SemicolonError::Io(e),
    })?;

    Ok(SourceDocument::new(text, lang).with_path(path))
}

/// Lint result for one file
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub lang: Lang,
    pub outcome: LintOutcome,
}

/// Lint one file and publish its diagnostics
pub fn lint_file(
    path: &Path,
    language_id: Option<&str>,
    config: &LintConfig,
    store: &DiagnosticStore,
) -> Result<FileReport> {
    let ticket = store.begin_pass();
    let doc = load_document(path, language_id)?;
    let outcome = lint_document(&doc, config);
    store.publish(path, ticket, outcome.diagnostics.clone());

    Ok(FileReport {
        path: path.to_path_buf(),
        lang: doc.lang(),
        outcome,
    })
}

/// Lint every matching file below `root` in parallel
pub fn analyze_all(
    root: &Path,
    config: &LintConfig,
    store: &DiagnosticStore,
) -> Result<Vec<FileReport>> {
    let files = collect_files(root, config)?;

    let results: Vec<Result<FileReport>> = files
        .par_iter()
        .map(|path| lint_file(path, None, config, store))
        .collect();

    Ok(collect_successes(results))
}

/// Diagnostic codes a fix run is allowed to resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixSelection {
    codes: HashSet<DiagnosticCode>,
}

impl FixSelection {
    pub fn all() -> Self {
        Self {
            codes: DiagnosticCode::ALL.into_iter().collect(),
        }
    }

    pub fn only(code: DiagnosticCode) -> Self {
        Self {
            codes: HashSet::from([code]),
        }
    }

    pub fn includes(&self, code: DiagnosticCode) -> bool {
        self.codes.contains(&code)
    }
}

/// Outcome of fixing one document in memory
#[derive(Debug, Clone)]
pub struct DocumentFix {
    /// Text after all rounds
    pub text: String,
    pub edits_applied: usize,
    pub rounds: usize,
    /// Selected diagnostics that are still present after the last round
    pub remaining: Vec<Diagnostic>,
    /// Markup document; never rewritten
    pub skipped_markup: bool,
}

impl DocumentFix {
    pub fn changed(&self) -> bool {
        self.edits_applied > 0
    }
}

/// Apply primary fixes for the selected codes until none remain or the
/// round limit is hit
pub fn fix_document(
    doc: &SourceDocument,
    config: &LintConfig,
    selection: &FixSelection,
) -> Result<DocumentFix> {
    if doc.lang().is_markup() {
        return Ok(DocumentFix {
            text: doc.text().to_string(),
            edits_applied: 0,
            rounds: 0,
            remaining: Vec::new(),
            skipped_markup: true,
        });
    }

    let mut current = SourceDocument::new(doc.text(), doc.lang());
    let mut edits_applied = 0;
    let mut rounds = 0;

    loop {
        let selected: Vec<Diagnostic> = lint_document(&current, config)
            .diagnostics
            .into_iter()
            .filter(|d| selection.includes(d.code))
            .collect();
        let edits: Vec<TextEdit> = selected
            .iter()
            .filter_map(|d| primary_fix(&current, d))
            .collect();

        if edits.is_empty() || rounds == MAX_FIX_ROUNDS {
            if !selected.is_empty() {
                tracing::debug!(
                    "{} diagnostics left after {} rounds",
                    selected.len(),
                    rounds
                );
            }
            return Ok(DocumentFix {
                text: current.text().to_string(),
                edits_applied,
                rounds,
                remaining: selected,
                skipped_markup: false,
            });
        }

        let fixed = apply_edits(&current, &edits)?;
        edits_applied += edits.len();
        rounds += 1;
        current = SourceDocument::new(fixed, doc.lang());
    }
}

/// Fix result for one file on disk
#[derive(Debug, Clone)]
pub struct FileFix {
    pub path: PathBuf,
    pub fix: DocumentFix,
    /// True when the fixed text was written back
    pub written: bool,
}

/// Fix one file, writing it back atomically unless `dry_run`
pub fn fix_file(
    path: &Path,
    config: &LintConfig,
    selection: &FixSelection,
    dry_run: bool,
) -> Result<FileFix> {
    let doc = load_document(path, None)?;
    let fix = fix_document(&doc, config, selection)?;

    let written = fix.changed() && !dry_run;
    if written {
        write_atomic(path, &fix.text)?;
        tracing::debug!("wrote {} edits to {}", fix.edits_applied, path.display());
    }

    Ok(FileFix {
        path: path.to_path_buf(),
        fix,
        written,
    })
}

/// Fix a list of files in parallel
pub fn fix_files(
    paths: &[PathBuf],
    config: &LintConfig,
    selection: &FixSelection,
    dry_run: bool,
) -> Vec<FileFix> {
    let results: Vec<Result<FileFix>> = paths
        .par_iter()
        .map(|path| fix_file(path, config, selection, dry_run))
        .collect();
    collect_successes(results)
}

/// Fix every matching file below `root`
pub fn fix_all(
    root: &Path,
    config: &LintConfig,
    selection: &FixSelection,
    dry_run: bool,
) -> Result<Vec<FileFix>> {
    let files = collect_files(root, config)?;
    Ok(fix_files(&files, config, selection, dry_run))
}

fn collect_successes<T>(results: Vec<Result<T>>) -> Vec<T> {
    let mut successes = Vec::with_capacity(results.len());
    for result in results {
        match result {
            Ok(value) => successes.push(value),
            Err(e) => tracing::warn!("skipping file: {}", e),
        }
    }
    successes
}
