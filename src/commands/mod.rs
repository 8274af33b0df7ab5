//! Command modules for the force-semicolon CLI
//!
//! Each command module implements a single top-level command:
//! - `check` - Lint documents given on the command line
//! - `analyze_all` - Lint every matching file in a workspace
//! - `fix` - Apply primary fixes (current file, a file list, or the workspace)
//! - `actions` - List code actions for a line
//! - `ignore` - Insert ignore comments
//! - `watch` - Re-lint on change
//!
//! All command handlers take their respective `Args` struct from `cli.rs`
//! and a shared `CommandContext`, and return the text to print.

pub mod actions;
pub mod analyze_all;
pub mod check;
pub mod fix;
pub mod ignore;
pub mod watch;

pub use actions::run_actions;
pub use analyze_all::run_analyze_all;
pub use check::run_check;
pub use fix::run_fix;
pub use ignore::run_ignore;
pub use watch::run_watch;

use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::config::LintConfig;
use crate::error::Result;
use crate::fs_utils::display_path;
use crate::lint::Diagnostic;

/// Shared context passed to all command handlers
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Output format (text, toon, or json)
    pub format: OutputFormat,
    /// Show verbose output
    pub verbose: bool,
    /// Explicit configuration file
    pub config_path: Option<PathBuf>,
    /// Force per-pass trace output
    pub debug: bool,
}

impl Default for CommandContext {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            verbose: false,
            config_path: None,
            debug: false,
        }
    }
}

impl CommandContext {
    /// Create a new CommandContext from CLI args
    pub fn from_cli(
        format: OutputFormat,
        verbose: bool,
        config_path: Option<PathBuf>,
        debug: bool,
    ) -> Self {
        Self {
            format,
            verbose,
            config_path,
            debug,
        }
    }

    /// Resolve the configuration for a workspace root
    pub fn load_config(&self, workspace: &Path) -> Result<LintConfig> {
        let mut config = LintConfig::discover(self.config_path.as_deref(), workspace)?;
        if self.debug {
            config.debug = true;
        }
        Ok(config)
    }
}

/// Encode a JSON value as proper TOON using the rtoon library
pub fn encode_toon(value: &serde_json::Value) -> String {
    rtoon::encode_default(value).unwrap_or_else(|e| format!("TOON encoding error: {}", e))
}

/// Render a JSON value in the non-text formats
pub fn render_structured(value: &serde_json::Value, format: OutputFormat) -> String {
    match format {
        OutputFormat::Toon => encode_toon(value),
        OutputFormat::Json | OutputFormat::Text => {
            serde_json::to_string_pretty(value).unwrap_or_default()
        }
    }
}

/// Directory argument or the current directory
pub fn resolve_dir(dir: Option<&Path>) -> Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => Ok(std::env::current_dir()?),
    }
}

/// JSON shape of a diagnostic. Positions are 0-based.
pub fn diagnostic_json(diagnostic: &Diagnostic) -> serde_json::Value {
    serde_json::json!({
        "range": diagnostic.range,
        "severity": diagnostic.severity.as_str(),
        "code": diagnostic.code.as_str(),
        "message": diagnostic.message,
        "source": diagnostic.source,
    })
}

/// Text lines for one file's diagnostics, 1-based `line:column`
pub fn push_diagnostics_text(
    output: &mut String,
    path: &Path,
    root: &Path,
    diagnostics: &[Diagnostic],
) {
    if diagnostics.is_empty() {
        return;
    }
    output.push_str(&format!("\n[{}]\n", display_path(path, root)));
    for d in diagnostics {
        output.push_str(&format!(
            "  {}:{} {} [{}] {}\n",
            d.range.start.line + 1,
            d.range.start.character + 1,
            d.severity.code(),
            d.code,
            d.message
        ));
    }
}

/// Count diagnostics by severity name
pub fn severity_counts(diagnostics: &[Diagnostic]) -> serde_json::Value {
    let mut counts = serde_json::Map::new();
    for d in diagnostics {
        let entry = counts
            .entry(d.severity.as_str().to_string())
            .or_insert(serde_json::Value::from(0u64));
        *entry = serde_json::Value::from(entry.as_u64().unwrap_or(0) + 1);
    }
    serde_json::Value::Object(counts)
}
