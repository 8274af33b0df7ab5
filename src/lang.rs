//! Language detection and tree-sitter grammar loading

use std::path::Path;
use tree_sitter::Language;

use crate::error::{Result, SemicolonError};

/// Document languages the linter knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    TypeScript,
    Tsx,
    JavaScript,
    Jsx,
    /// Markup document whose `<script>` regions can be linted
    Html,
}

impl Lang {
    /// Detect language from file path extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| SemicolonError::UnsupportedLanguage {
                language: "none".to_string(),
            })?;

        Self::from_extension(ext)
    }

    /// Detect language from file extension string
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_lowercase().as_str() {
            "ts" | "mts" | "cts" => Ok(Self::TypeScript),
            "tsx" => Ok(Self::Tsx),
            "js" | "mjs" | "cjs" => Ok(Self::JavaScript),
            "jsx" => Ok(Self::Jsx),
            "html" | "htm" => Ok(Self::Html),
            _ => Err(SemicolonError::UnsupportedLanguage {
                language: ext.to_string(),
            }),
        }
    }

    /// Detect language from an editor language identifier
    /// (`javascript`, `typescriptreact`, ...)
    pub fn from_language_id(id: &str) -> Result<Self> {
        match id.to_lowercase().as_str() {
            "typescript" => Ok(Self::TypeScript),
            "typescriptreact" | "tsx" => Ok(Self::Tsx),
            "javascript" => Ok(Self::JavaScript),
            "javascriptreact" | "jsx" => Ok(Self::Jsx),
            "html" => Ok(Self::Html),
            _ => Err(SemicolonError::UnsupportedLanguage {
                language: id.to_string(),
            }),
        }
    }

    /// Get the canonical name of the language
    pub fn name(&self) -> &'static str {
        match self {
            Self::TypeScript => "typescript",
            Self::Tsx => "typescriptreact",
            Self::JavaScript => "javascript",
            Self::Jsx => "javascriptreact",
            Self::Html => "html",
        }
    }

    /// Grammar native to this language.
    ///
    /// Script sources are first parsed with the TSX grammar (see
    /// [`crate::parsing`]); this grammar is the fallback offered when that
    /// parse contains errors.
    pub fn tree_sitter_language(&self) -> Language {
        match self {
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            Self::JavaScript | Self::Jsx => tree_sitter_javascript::LANGUAGE.into(),
            Self::Html => tree_sitter_html::LANGUAGE.into(),
        }
    }

    /// Markup documents need script extraction before linting
    pub fn is_markup(&self) -> bool {
        matches!(self, Self::Html)
    }
}
