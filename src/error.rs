//! Error types and exit codes for force-semicolon

use std::process::ExitCode;
use thiserror::Error;

/// Main error type for force-semicolon operations
#[derive(Error, Debug)]
pub enum SemicolonError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Unsupported language: {language}")]
    UnsupportedLanguage { language: String },

    #[error("Failed to parse file: {message}")]
    ParseFailure { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Watcher error: {message}")]
    WatchError { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SemicolonError {
    /// Convert error to appropriate exit code:
    /// - 0: Success
    /// - 1: File not found / IO error
    /// - 2: Unsupported language
    /// - 3: Parse failure
    /// - 4: Configuration error
    /// - 5: Invalid argument
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileNotFound { .. } => ExitCode::from(1),
            Self::UnsupportedLanguage { .. } => ExitCode::from(2),
            Self::ParseFailure { .. } => ExitCode::from(3),
            Self::ConfigError { .. } => ExitCode::from(4),
            Self::InvalidArgument { .. } => ExitCode::from(5),
            Self::WatchError { .. } => ExitCode::from(1),
            Self::Io(_) => ExitCode::from(1),
        }
    }
}

/// Result type alias for force-semicolon operations
pub type Result<T> = std::result::Result<T, SemicolonError>;
