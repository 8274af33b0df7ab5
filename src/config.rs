//! Linter configuration.
//!
//! Loaded from TOML, looked up in this order:
//! - an explicit path (`--config`)
//! - `.force-semicolon.toml` in the workspace root
//! - `<config dir>/force-semicolon/config.toml` (e.g. `~/.config` on Linux)
//!
//! Keys mirror the editor extension settings:
//!
//! ```toml
//! missingSemicolonLintType = "error"
//! unnecessarySemicolonLintType = "warning"
//! extraSemicolonLintType = "off"
//! debug = false
//! extractHtmlScripts = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, SemicolonError};
use crate::lint::{DiagnosticCode, LintSeverity};

/// File name looked up in the workspace root
pub const WORKSPACE_CONFIG_FILE: &str = ".force-semicolon.toml";

/// Severity used when a key is absent or unparseable
pub const DEFAULT_SEVERITY: RuleSeverity = RuleSeverity::Error;

/// Configured level for one diagnostic code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSeverity {
    Off,
    Hint,
    Info,
    Warning,
    Error,
}

impl RuleSeverity {
    /// Severity attached to emitted diagnostics, `None` when the rule is off
    pub fn severity(self) -> Option<LintSeverity> {
        match self {
            RuleSeverity::Off => None,
            RuleSeverity::Hint => Some(LintSeverity::Hint),
            RuleSeverity::Info => Some(LintSeverity::Info),
            RuleSeverity::Warning => Some(LintSeverity::Warning),
            RuleSeverity::Error => Some(LintSeverity::Error),
        }
    }

    /// Parse a configured value, falling back to [`DEFAULT_SEVERITY`]
    pub fn parse_or_default(value: &str, key: &str) -> Self {
        match value.parse::<RuleSeverity>() {
            Ok(severity) => severity,
            Err(()) => {
                tracing::warn!(
                    "unknown severity '{}' for {}, using '{}'",
                    value,
                    key,
                    DEFAULT_SEVERITY.as_str()
                );
                DEFAULT_SEVERITY
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RuleSeverity::Off => "off",
            RuleSeverity::Hint => "hint",
            RuleSeverity::Info => "info",
            RuleSeverity::Warning => "warning",
            RuleSeverity::Error => "error",
        }
    }
}

impl std::str::FromStr for RuleSeverity {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("off") {
            return Ok(RuleSeverity::Off);
        }
        match s.parse::<LintSeverity>()? {
            LintSeverity::Hint => Ok(RuleSeverity::Hint),
            LintSeverity::Info => Ok(RuleSeverity::Info),
            LintSeverity::Warning => Ok(RuleSeverity::Warning),
            LintSeverity::Error => Ok(RuleSeverity::Error),
        }
    }
}

/// On-disk shape of the config file. Severity values stay strings so an
/// unknown value degrades to the default instead of failing the load.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    lint_type: Option<String>,
    missing_semicolon_lint_type: Option<String>,
    unnecessary_semicolon_lint_type: Option<String>,
    extra_semicolon_lint_type: Option<String>,
    #[serde(default)]
    debug: bool,
    #[serde(default)]
    extract_html_scripts: bool,
}

/// Resolved linter configuration, read once per pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintConfig {
    pub missing: RuleSeverity,
    pub unnecessary: RuleSeverity,
    pub extra: RuleSeverity,
    /// Emit per-pass trace output
    pub debug: bool,
    /// Lint `<script>` regions of HTML documents
    pub extract_html_scripts: bool,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            missing: DEFAULT_SEVERITY,
            unnecessary: DEFAULT_SEVERITY,
            extra: DEFAULT_SEVERITY,
            debug: false,
            extract_html_scripts: false,
        }
    }
}

impl LintConfig {
    /// Configured level for a diagnostic code
    pub fn severity_for(&self, code: DiagnosticCode) -> RuleSeverity {
        match code {
            DiagnosticCode::MissingSemicolon => self.missing,
            DiagnosticCode::UnnecessarySemicolon => self.unnecessary,
            DiagnosticCode::ExtraSemicolon => self.extra,
        }
    }

    /// Override the level for one diagnostic code
    pub fn set_severity(&mut self, code: DiagnosticCode, severity: RuleSeverity) {
        match code {
            DiagnosticCode::MissingSemicolon => self.missing = severity,
            DiagnosticCode::UnnecessarySemicolon => self.unnecessary = severity,
            DiagnosticCode::ExtraSemicolon => self.extra = severity,
        }
    }

    /// Check if a code is switched off
    pub fn is_disabled(&self, code: DiagnosticCode) -> bool {
        self.severity_for(code) == RuleSeverity::Off
    }

    /// Parse TOML config text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content).map_err(|e| SemicolonError::ConfigError {
            message: format!("Failed to parse config: {}", e),
        })?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawConfig) -> Self {
        let fallback = raw.lint_type.as_deref();
        let resolve = |value: Option<&str>, key: &str| -> RuleSeverity {
            match value.or(fallback) {
                Some(value) => RuleSeverity::parse_or_default(value, key),
                None => DEFAULT_SEVERITY,
            }
        };

        Self {
            missing: resolve(
                raw.missing_semicolon_lint_type.as_deref(),
                "missingSemicolonLintType",
            ),
            unnecessary: resolve(
                raw.unnecessary_semicolon_lint_type.as_deref(),
                "unnecessarySemicolonLintType",
            ),
            extra: resolve(
                raw.extra_semicolon_lint_type.as_deref(),
                "extraSemicolonLintType",
            ),
            debug: raw.debug,
            extract_html_scripts: raw.extract_html_scripts,
        }
    }

    /// Load configuration from a specific path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Resolve and load the configuration for a workspace root
    pub fn discover(explicit: Option<&Path>, workspace: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(SemicolonError::FileNotFound {
                    path: path.display().to_string(),
                });
            }
            tracing::debug!("loading config from {}", path.display());
            return Self::load_from(path);
        }

        let local = workspace.join(WORKSPACE_CONFIG_FILE);
        if local.exists() {
            tracing::debug!("loading config from {}", local.display());
            return Self::load_from(&local);
        }

        if let Some(user) = user_config_path() {
            if user.exists() {
                tracing::debug!("loading config from {}", user.display());
                return Self::load_from(&user);
            }
        }

        Ok(Self::default())
    }
}

/// Platform config file location (`~/.config/force-semicolon/config.toml`)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("force-semicolon").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_error() {
        let config = LintConfig::default();
        assert_eq!(config.missing, RuleSeverity::Error);
        assert_eq!(config.unnecessary, RuleSeverity::Error);
        assert_eq!(config.extra, RuleSeverity::Error);
        assert!(!config.debug);
        assert!(!config.extract_html_scripts);
    }

    #[test]
    fn test_parse_keys() {
        let config = LintConfig::from_toml_str(
            r#"
missingSemicolonLintType = "warning"
unnecessarySemicolonLintType = "Hint"
extraSemicolonLintType = "off"
debug = true
"#,
        )
        .unwrap();

        assert_eq!(config.missing, RuleSeverity::Warning);
        assert_eq!(config.unnecessary, RuleSeverity::Hint);
        assert_eq!(config.extra, RuleSeverity::Off);
        assert!(config.debug);
        assert!(config.is_disabled(DiagnosticCode::ExtraSemicolon));
        assert!(!config.is_disabled(DiagnosticCode::MissingSemicolon));
    }

    #[test]
    fn test_legacy_lint_type_fills_absent_keys() {
        let config = LintConfig::from_toml_str(
            r#"
lintType = "warn"
extraSemicolonLintType = "info"
"#,
        )
        .unwrap();

        assert_eq!(config.missing, RuleSeverity::Warning);
        assert_eq!(config.unnecessary, RuleSeverity::Warning);
        assert_eq!(config.extra, RuleSeverity::Info);
    }

    #[test]
    fn test_unknown_severity_falls_back() {
        let config = LintConfig::from_toml_str(r#"missingSemicolonLintType = "loud""#).unwrap();
        assert_eq!(config.missing, DEFAULT_SEVERITY);
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let err = LintConfig::from_toml_str("debug = = true").unwrap_err();
        assert!(matches!(err, SemicolonError::ConfigError { .. }));
    }

    #[test]
    fn test_discover_prefers_workspace_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(WORKSPACE_CONFIG_FILE),
            "missingSemicolonLintType = \"hint\"\n",
        )
        .unwrap();

        let config = LintConfig::discover(None, dir.path()).unwrap();
        assert_eq!(config.missing, RuleSeverity::Hint);
    }

    #[test]
    fn test_discover_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(LintConfig::discover(Some(&missing), dir.path()).is_err());
    }
}
