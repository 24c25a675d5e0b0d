//! Launcher and client configuration files for installed packages
//!
//! Installed packages vary in where their entry point lives, so a small
//! launcher script probes the usual locations and falls back to npx. The
//! generated `mcp-config.json` points MCP clients at that launcher.

use std::path::{Path, PathBuf};

use crate::error::{ForgeError, Result};

const LAUNCHER_TEMPLATE: &str = r#"#!/usr/bin/env node
// Launcher for __PACKAGE__

import { spawn } from 'child_process';
import { fileURLToPath } from 'url';
import { dirname, join } from 'path';
import fs from 'fs';

const __filename = fileURLToPath(import.meta.url);
const __dirname = dirname(__filename);

const possibleEntries = [
    join(__dirname, 'node_modules', '__PACKAGE__', 'index.js'),
    join(__dirname, 'node_modules', '__PACKAGE__', 'dist', 'index.js'),
    join(__dirname, 'node_modules', '.bin', '__PACKAGE__'),
];

let mainEntry = null;
for (const entry of possibleEntries) {
    if (fs.existsSync(entry)) {
        mainEntry = entry;
        break;
    }
}

if (!mainEntry) {
    const mcp = spawn('npx', ['__PACKAGE__'], { stdio: 'inherit', shell: true });
    mcp.on('exit', (code) => process.exit(code));
} else {
    const mcp = spawn('node', [mainEntry], { stdio: 'inherit' });
    mcp.on('error', (err) => console.error('failed to start:', err));
}
"#;

/// Write the launcher script, returning its path.
pub fn write_launcher(install_dir: &Path, package: &str) -> Result<PathBuf> {
    let launcher_path = install_dir.join("start.js");
    let content = LAUNCHER_TEMPLATE.replace("__PACKAGE__", package);
    std::fs::write(&launcher_path, content).map_err(|e| ForgeError::FileWriteFailed {
        path: launcher_path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(launcher_path)
}

/// Write the MCP client configuration pointing at the launcher.
pub fn write_client_config(install_dir: &Path, package: &str, description: &str) -> Result<PathBuf> {
    let launcher_path = install_dir.join("start.js");
    let config = serde_json::json!({
        "name": package,
        "description": description,
        "command": "node",
        "args": [launcher_path.display().to_string()],
        "env": {},
    });

    let config_path = install_dir.join("mcp-config.json");
    let rendered =
        serde_json::to_string_pretty(&config).map_err(|e| ForgeError::FileWriteFailed {
            path: config_path.display().to_string(),
            reason: e.to_string(),
        })?;
    std::fs::write(&config_path, rendered).map_err(|e| ForgeError::FileWriteFailed {
        path: config_path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_launcher_substitutes_package() {
        let temp = TempDir::new().unwrap();
        let path = write_launcher(temp.path(), "mcp-server-weather").unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("'mcp-server-weather'"));
        assert!(!content.contains("__PACKAGE__"));
    }

    #[test]
    fn test_write_client_config_points_at_launcher() {
        let temp = TempDir::new().unwrap();
        let path = write_client_config(temp.path(), "mcp-server-weather", "Weather service").unwrap();
        let parsed: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(parsed["name"], "mcp-server-weather");
        assert_eq!(parsed["command"], "node");
        assert!(
            parsed["args"][0]
                .as_str()
                .unwrap()
                .ends_with("start.js")
        );
    }
}
