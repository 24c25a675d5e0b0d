//! Runtime configuration
//!
//! All ambient state (API endpoint, workspace path, timeouts) is collected
//! into a single `Config` constructed once in `main` and passed by reference.
//! Sources, in priority order: CLI flags, environment, an optional
//! `mcpforge.yaml` in the current directory, then built-in defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{ForgeError, Result};

pub const DEFAULT_API_URL: &str = "https://api.deepseek.com/chat/completions";
pub const DEFAULT_MODEL: &str = "deepseek-chat";
pub const DEFAULT_WORKSPACE: &str = "mcp-workspace";
pub const CONFIG_FILE: &str = "mcpforge.yaml";

/// Finite deadlines for every blocking external call
#[derive(Debug, Clone, Copy)]
pub struct Timeouts {
    /// Online classification call
    pub classify: Duration,
    /// Online code generation call
    pub generate: Duration,
    /// npm registry search
    pub search: Duration,
    /// npm install of the main package
    pub install: Duration,
    /// MCP installer tool invocation
    pub installer_tool: Duration,
    /// npm init of a fresh install directory
    pub npm_init: Duration,
    /// Best-effort install of a single extra dependency
    pub dep_install: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            classify: Duration::from_secs(15),
            generate: Duration::from_secs(60),
            search: Duration::from_secs(5),
            install: Duration::from_secs(60),
            installer_tool: Duration::from_secs(30),
            npm_init: Duration::from_secs(10),
            dep_install: Duration::from_secs(30),
        }
    }
}

/// Process-wide configuration, immutable after startup
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenAI-compatible chat completions endpoint
    pub api_url: String,
    /// Bearer token for the endpoint; empty means offline-only operation
    pub api_key: String,
    /// Model identifier sent with each request
    pub model: String,
    /// Root directory for installed and generated services
    pub workspace: PathBuf,
    /// Verbose diagnostics on stderr
    pub verbose: bool,
    pub timeouts: Timeouts,
}

/// Optional on-disk overrides (`mcpforge.yaml`)
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    api_url: Option<String>,
    model: Option<String>,
    workspace: Option<PathBuf>,
    classify_timeout_secs: Option<u64>,
    generate_timeout_secs: Option<u64>,
}

impl ConfigFile {
    fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ForgeError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        serde_yaml::from_str(&raw).map_err(|e| ForgeError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

impl Config {
    /// Build the configuration from CLI flags, environment and config file
    pub fn load(workspace_flag: Option<PathBuf>, verbose: bool) -> Result<Self> {
        let file = if Path::new(CONFIG_FILE).is_file() {
            ConfigFile::load(Path::new(CONFIG_FILE))?
        } else {
            ConfigFile::default()
        };

        let api_key = std::env::var("MCPFORGE_API_KEY")
            .or_else(|_| std::env::var("LLM_API_KEY"))
            .unwrap_or_default();

        let api_url = std::env::var("LLM_API_URL")
            .ok()
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let model = std::env::var("LLM_MODEL")
            .ok()
            .or(file.model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let workspace = workspace_flag
            .or(file.workspace)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WORKSPACE));

        let mut timeouts = Timeouts::default();
        if let Some(secs) = file.classify_timeout_secs {
            timeouts.classify = nonzero_secs("classify_timeout_secs", secs)?;
        }
        if let Some(secs) = file.generate_timeout_secs {
            timeouts.generate = nonzero_secs("generate_timeout_secs", secs)?;
        }

        Ok(Self {
            api_url,
            api_key,
            model,
            workspace,
            verbose,
            timeouts,
        })
    }

    /// Directory for packages installed from the registry
    pub fn installed_dir(&self) -> PathBuf {
        self.workspace.join("installed")
    }

    /// Directory for generated service projects
    pub fn created_dir(&self) -> PathBuf {
        self.workspace.join("created")
    }

    /// Whether online LLM calls are possible at all
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

fn nonzero_secs(field: &str, secs: u64) -> Result<Duration> {
    if secs == 0 {
        return Err(ForgeError::ConfigInvalid {
            message: format!("{field} must be greater than zero"),
        });
    }
    Ok(Duration::from_secs(secs))
}
