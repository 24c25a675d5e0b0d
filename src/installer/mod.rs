//! Package install runner
//!
//! Installs an MCP package into the workspace via the external package
//! manager. Two strategies are tried over at most two attempts: the MCP
//! installer tool first, then a plain `npm init` + `npm install`. Every
//! subprocess runs under a finite deadline; a deadline on the final attempt
//! surfaces as a timeout so the dispatcher can fall through to generation.

mod deps;
mod launcher;

use std::path::PathBuf;

use crate::config::Config;
use crate::error::{ForgeError, Result};
use crate::process::run_with_deadline;
use crate::progress::Spinner;
use crate::ui;

const MAX_ATTEMPTS: usize = 2;
const INSTALLER_TOOL: &str = "@anaisbetts/mcp-installer";

/// Result of a completed install
#[derive(Debug)]
pub struct InstallReport {
    pub package: String,
    pub install_dir: PathBuf,
    /// Extra dependencies that were installed alongside the package
    pub dependencies: Vec<String>,
}

/// Install runner bound to the runtime configuration
pub struct InstallRunner<'a> {
    config: &'a Config,
}

impl<'a> InstallRunner<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Install `package` and its service-type dependencies into the workspace.
    pub fn install(
        &self,
        package: &str,
        service_type: &str,
        required_packages: &[String],
    ) -> Result<InstallReport> {
        let install_dir = self.config.installed_dir().join(sanitize_name(package));
        std::fs::create_dir_all(&install_dir).map_err(|e| ForgeError::WorkspaceCreateFailed {
            path: install_dir.display().to_string(),
            reason: e.to_string(),
        })?;

        let spinner = Spinner::new(&format!("Installing {package}..."));
        let installed = self.try_install(package, &install_dir, &spinner);
        spinner.clear();
        installed?;

        let dependencies = self.install_dependencies(package, service_type, required_packages, &install_dir);

        let description = if service_type.is_empty() {
            "MCP service".to_string()
        } else {
            format!("{service_type} MCP service")
        };
        launcher::write_launcher(&install_dir, package)?;
        launcher::write_client_config(&install_dir, package, &description)?;

        Ok(InstallReport {
            package: package.to_string(),
            install_dir,
            dependencies,
        })
    }

    fn try_install(
        &self,
        package: &str,
        install_dir: &std::path::Path,
        spinner: &Spinner,
    ) -> Result<()> {
        let timeouts = &self.config.timeouts;
        let mut last_timeout = false;

        for attempt in 0..MAX_ATTEMPTS {
            if attempt > 0 {
                ui::verbose(self.config, "retrying install");
            }

            // Strategy 1: the MCP installer tool, first attempt only
            if attempt == 0 {
                spinner.update(&format!("Installing {package} via installer tool..."));
                let outcome = run_with_deadline(
                    "npx",
                    &["-y", INSTALLER_TOOL, "install", package],
                    install_dir,
                    timeouts.installer_tool,
                )?;
                if outcome.success() {
                    return Ok(());
                }
                last_timeout = outcome.timed_out();
            }

            // Strategy 2: plain npm. Init failures are tolerated; a
            // package.json may already exist from a previous attempt.
            spinner.update(&format!("Installing {package} via npm..."));
            let _ = run_with_deadline("npm", &["init", "-y"], install_dir, timeouts.npm_init)?;

            let outcome = run_with_deadline(
                "npm",
                &["install", package],
                install_dir,
                timeouts.install,
            )?;
            if outcome.success() || outcome.stdout().contains("packages") {
                return Ok(());
            }
            last_timeout = outcome.timed_out();

            if !last_timeout && attempt + 1 == MAX_ATTEMPTS {
                return Err(ForgeError::InstallFailed {
                    package: package.to_string(),
                    reason: short_reason(outcome.stderr()),
                });
            }
        }

        if last_timeout {
            return Err(ForgeError::InstallTimedOut {
                package: package.to_string(),
                seconds: timeouts.install.as_secs(),
            });
        }
        Err(ForgeError::InstallFailed {
            package: package.to_string(),
            reason: "all install strategies failed".to_string(),
        })
    }

    /// Best-effort install of companion dependencies; failures are skipped.
    fn install_dependencies(
        &self,
        package: &str,
        service_type: &str,
        required_packages: &[String],
        install_dir: &std::path::Path,
    ) -> Vec<String> {
        let wanted = deps::analyze(service_type, required_packages);
        if wanted.is_empty() {
            return Vec::new();
        }

        ui::verbose(
            self.config,
            &format!("installing dependencies for {package}: {}", wanted.join(", ")),
        );

        let mut installed = Vec::new();
        for dep in wanted {
            let result = run_with_deadline(
                "npm",
                &["install", &dep],
                install_dir,
                self.config.timeouts.dep_install,
            );
            match result {
                Ok(outcome) if outcome.success() => installed.push(dep),
                _ => ui::warn(&format!("dependency {dep} failed to install, skipping")),
            }
        }
        installed
    }
}

/// Sanitize a package name into a directory name.
fn sanitize_name(package: &str) -> String {
    package
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn short_reason(stderr: &str) -> String {
    let line = stderr.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
    if line.is_empty() {
        "nonzero exit status".to_string()
    } else {
        line.trim().to_string()
    }
}
