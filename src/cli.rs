//! CLI argument definitions using clap with subcommand architecture
//!
//! Lines given on the command line are 1-based; everything inside the crate
//! is 0-based.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::workspace::FixSelection;
use crate::DiagnosticCode;

/// Semicolon policy linter for JavaScript and TypeScript
#[derive(Parser, Debug)]
#[command(name = "force-semicolon")]
#[command(about = "Reports missing, unnecessary and extra semicolons in JavaScript and TypeScript")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (applies to all commands)
    #[arg(short, long, default_value = "text", value_enum, global = true)]
    pub format: OutputFormat,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to .force-semicolon.toml in the workspace)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log a trace of every pass (overrides the `debug` config key)
    #[arg(long, global = true)]
    pub debug: bool,
}

// ============================================
// Main Commands Enum
// ============================================

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lint documents and print their diagnostics
    #[command(visible_alias = "c")]
    Check(CheckArgs),

    /// Lint every matching file in a workspace
    #[command(visible_alias = "a")]
    AnalyzeAll(AnalyzeAllArgs),

    /// Apply semicolon fixes
    Fix(FixArgs),

    /// List the code actions available on a line
    Actions(ActionsArgs),

    /// Insert an ignore comment
    Ignore(IgnoreArgs),

    /// Re-lint files whenever they change
    #[command(visible_alias = "w")]
    Watch(WatchArgs),
}

// ============================================
// Check Subcommand
// ============================================

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files to lint
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Editor language identifier (javascript, typescriptreact, ...),
    /// overriding detection from the file extension
    #[arg(long, value_name = "ID")]
    pub language_id: Option<String>,
}

// ============================================
// Analyze-all Subcommand
// ============================================

/// Arguments for the analyze-all command
#[derive(Args, Debug)]
pub struct AnalyzeAllArgs {
    /// Workspace directory (defaults to current directory)
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Only print the summary
    #[arg(long)]
    pub summary_only: bool,
}

// ============================================
// Fix Subcommand
// ============================================

/// Arguments for the fix command
#[derive(Args, Debug)]
pub struct FixArgs {
    /// Which diagnostics to fix
    #[arg(long, value_enum, default_value = "all", global = true)]
    pub kind: FixKind,

    /// Report what would change without writing files
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub target: FixTarget,
}

/// Files a fix run applies to
#[derive(Subcommand, Debug)]
pub enum FixTarget {
    /// Fix a single document
    Current {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Fix a set of documents
    Open {
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },

    /// Fix every matching file in a workspace
    All {
        /// Workspace directory (defaults to current directory)
        #[arg(value_name = "DIR")]
        dir: Option<PathBuf>,
    },
}

/// Diagnostic kind selector for fix runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum FixKind {
    Missing,
    Unnecessary,
    Extra,
    #[default]
    All,
}

impl FixKind {
    pub fn selection(self) -> FixSelection {
        match self {
            FixKind::Missing => FixSelection::only(DiagnosticCode::MissingSemicolon),
            FixKind::Unnecessary => FixSelection::only(DiagnosticCode::UnnecessarySemicolon),
            FixKind::Extra => FixSelection::only(DiagnosticCode::ExtraSemicolon),
            FixKind::All => FixSelection::all(),
        }
    }
}

// ============================================
// Actions Subcommand
// ============================================

/// Arguments for the actions command
#[derive(Args, Debug)]
pub struct ActionsArgs {
    /// Document to inspect
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Line to list actions for (1-based)
    #[arg(long, short = 'l', value_name = "N")]
    pub line: usize,
}

// ============================================
// Ignore Subcommand
// ============================================

/// Arguments for the ignore command
#[derive(Args, Debug)]
pub struct IgnoreArgs {
    #[command(subcommand)]
    pub target: IgnoreTarget,
}

/// Scope of an inserted ignore comment
#[derive(Subcommand, Debug)]
pub enum IgnoreTarget {
    /// Suppress diagnostics of the statement on a line
    Line {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Line to suppress (1-based)
        #[arg(value_name = "LINE")]
        line: usize,
    },

    /// Suppress every diagnostic in a file
    File {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

// ============================================
// Watch Subcommand
// ============================================

/// Arguments for the watch command
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Workspace directory (defaults to current directory)
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Lint every file once before watching
    #[arg(long)]
    pub initial: bool,
}

// ============================================
// Output Format
// ============================================

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// TOON format (token-efficient)
    Toon,
    /// JSON format
    Json,
}
