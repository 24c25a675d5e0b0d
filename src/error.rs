//! Error types and handling for mcpforge
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

#![allow(dead_code)]

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mcpforge operations
#[derive(Error, Diagnostic, Debug)]
pub enum ForgeError {
    // Classification / LLM errors
    #[error("Language model endpoint unreachable: {reason}")]
    #[diagnostic(
        code(mcpforge::llm::unreachable),
        help("Check LLM_API_URL and your network connection; classification falls back to local rules")
    )]
    LlmUnreachable { reason: String },

    #[error("Language model returned an unusable response: {reason}")]
    #[diagnostic(code(mcpforge::llm::malformed))]
    LlmMalformed { reason: String },

    #[error("LLM_API_KEY is not set")]
    #[diagnostic(
        code(mcpforge::llm::missing_key),
        help("Export LLM_API_KEY (or MCPFORGE_API_KEY) before running online classification")
    )]
    LlmMissingKey,

    // Catalog errors
    #[error("Invalid catalog entry '{name}': {reason}")]
    #[diagnostic(
        code(mcpforge::catalog::invalid),
        help("The built-in service catalog is corrupt; this is a bug in mcpforge itself")
    )]
    CatalogInvalid { name: String, reason: String },

    // Registry search errors
    #[error("Package search failed: {reason}")]
    #[diagnostic(
        code(mcpforge::registry::search_failed),
        help("Check that npm is installed and on PATH")
    )]
    SearchFailed { reason: String },

    // Install errors
    #[error("Failed to install package '{package}': {reason}")]
    #[diagnostic(
        code(mcpforge::install::failed),
        help("Check that npm is installed and the package name is correct")
    )]
    InstallFailed { package: String, reason: String },

    #[error("Installing '{package}' timed out after {seconds}s")]
    #[diagnostic(code(mcpforge::install::timed_out))]
    InstallTimedOut { package: String, seconds: u64 },

    // Generation errors
    #[error("Failed to generate service project '{name}': {reason}")]
    #[diagnostic(code(mcpforge::generate::failed))]
    GenerationFailed { name: String, reason: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(mcpforge::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(mcpforge::config::invalid))]
    ConfigInvalid { message: String },

    // Workspace / file system errors
    #[error("Failed to create workspace directory: {path}")]
    #[diagnostic(
        code(mcpforge::workspace::create_failed),
        help("Check permissions on the workspace directory (see --workspace)")
    )]
    WorkspaceCreateFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(mcpforge::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(mcpforge::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for ForgeError {
    fn from(err: std::io::Error) -> Self {
        ForgeError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ForgeError {
    fn from(err: serde_yaml::Error) -> Self {
        ForgeError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ForgeError {
    fn from(err: serde_json::Error) -> Self {
        ForgeError::LlmMalformed {
            reason: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for ForgeError {
    fn from(err: reqwest::Error) -> Self {
        ForgeError::LlmUnreachable {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ForgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ForgeError::InstallFailed {
            package: "weather-js".to_string(),
            reason: "exit code 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to install package 'weather-js': exit code 1"
        );
    }

    #[test]
    fn test_error_code() {
        let err = ForgeError::SearchFailed {
            reason: "npm missing".to_string(),
        };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("mcpforge::registry::search_failed".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let forge_err: ForgeError = io_err.into();
        assert!(matches!(forge_err, ForgeError::IoError { .. }));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_result: std::result::Result<serde_json::Value, _> =
            serde_json::from_str("not json");
        let forge_err: ForgeError = parse_result.unwrap_err().into();
        assert!(matches!(forge_err, ForgeError::LlmMalformed { .. }));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let parse_result: std::result::Result<serde_yaml::Value, _> =
            serde_yaml::from_str("invalid: yaml: [unclosed");
        let forge_err: ForgeError = parse_result.unwrap_err().into();
        assert!(matches!(forge_err, ForgeError::ConfigParseFailed { .. }));
    }

    #[test]
    fn test_catalog_invalid_error() {
        let err = ForgeError::CatalogInvalid {
            name: "mcp-server-weather".to_string(),
            reason: "empty keyword set".to_string(),
        };
        assert!(err.to_string().contains("Invalid catalog entry"));
        assert!(err.to_string().contains("mcp-server-weather"));
    }

    #[test]
    fn test_install_timed_out_error() {
        let err = ForgeError::InstallTimedOut {
            package: "sqlite3".to_string(),
            seconds: 60,
        };
        assert!(err.to_string().contains("timed out after 60s"));
    }
}
