//! npm registry search collaborator
//!
//! Wraps `npm search --json` behind a short deadline. The registry is opaque:
//! parameters in, exit status and JSON out. Truncated or otherwise unparseable
//! output is a degraded result (no hits), not something to repair byte by
//! byte.

use serde::Deserialize;

use crate::config::Config;
use crate::error::{ForgeError, Result};
use crate::process::run_with_deadline;
use crate::ui;

const MAX_RESULTS: usize = 5;

/// One package hit from the registry
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PackageHit {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Registry search bound to the configured deadlines
pub struct RegistrySearch<'a> {
    config: &'a Config,
}

impl<'a> RegistrySearch<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Search the registry for MCP packages matching the query.
    ///
    /// Returns an empty list on timeout or unparseable output; only a failure
    /// to invoke npm at all surfaces as an error.
    pub fn search(&self, query: &str) -> Result<Vec<PackageHit>> {
        let term = search_term(query);

        let outcome = run_with_deadline(
            "npm",
            &["search", &term, "--json"],
            std::path::Path::new("."),
            self.config.timeouts.search,
        )
        .map_err(|e| ForgeError::SearchFailed {
            reason: e.to_string(),
        })?;

        if outcome.timed_out() {
            ui::verbose(
                self.config,
                &format!(
                    "registry search timed out after {}s",
                    self.config.timeouts.search.as_secs()
                ),
            );
            return Ok(Vec::new());
        }
        if !outcome.success() {
            ui::verbose(self.config, "registry search exited nonzero");
            return Ok(Vec::new());
        }

        Ok(filter_hits(parse_results(self.config, outcome.stdout())))
    }
}

/// Build the single search term actually sent to the registry.
fn search_term(query: &str) -> String {
    if query.to_lowercase().contains("mcp") {
        format!("@modelcontextprotocol {query}")
    } else {
        format!("mcp {query}")
    }
}

fn parse_results(config: &Config, raw: &str) -> Vec<PackageHit> {
    match serde_json::from_str::<Vec<PackageHit>>(raw) {
        Ok(hits) => hits,
        Err(e) => {
            // Known to truncate under load; treat as a miss rather than repairing
            ui::verbose(config, &format!("registry output unparseable: {e}"));
            Vec::new()
        }
    }
}

/// Keep only MCP-looking packages from the head of the result list.
fn filter_hits(hits: Vec<PackageHit>) -> Vec<PackageHit> {
    hits.into_iter()
        .take(MAX_RESULTS)
        .filter(|hit| {
            let name = hit.name.to_lowercase();
            name.contains("mcp") || name.contains("modelcontextprotocol")
        })
        .collect()
}
