//! Generated service projects
//!
//! Materializes a [`ProjectSpec`] into a runnable project directory:
//! manifest, entry point, README, environment example and MCP client
//! configuration. Dependency installation afterwards is best effort.

pub mod codegen;
pub mod name;

use std::path::{Path, PathBuf};

use crate::classifier::ProjectSpec;
use crate::config::Config;
use crate::error::{ForgeError, Result};
use crate::process::run_with_deadline;
use crate::progress::Spinner;
use crate::ui;

/// Result of a completed generation
#[derive(Debug)]
pub struct ScaffoldReport {
    pub name: String,
    pub project_dir: PathBuf,
    /// True when the entry point came from the built-in template
    pub from_template: bool,
    /// True when `npm install` succeeded inside the project
    pub dependencies_installed: bool,
}

/// Project generator bound to the runtime configuration
pub struct Scaffolder<'a> {
    config: &'a Config,
}

impl<'a> Scaffolder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Generate a service project for the spec and install its dependencies.
    pub fn create(&self, spec: &ProjectSpec, offline: bool) -> Result<ScaffoldReport> {
        let project_name = spec
            .name
            .clone()
            .unwrap_or_else(|| name::derive(&spec.description));
        let project_dir = self.config.created_dir().join(&project_name);
        std::fs::create_dir_all(&project_dir).map_err(|e| ForgeError::WorkspaceCreateFailed {
            path: project_dir.display().to_string(),
            reason: e.to_string(),
        })?;

        let spinner = Spinner::new("Generating service code...");
        let code = codegen::generate(self.config, spec, offline);
        spinner.update("Writing project files...");
        let write_result = write_project(&project_dir, &project_name, spec, &code.source);
        spinner.clear();
        write_result?;

        let dependencies_installed = self.install_dependencies(&project_dir);

        Ok(ScaffoldReport {
            name: project_name,
            project_dir,
            from_template: code.from_template,
            dependencies_installed,
        })
    }

    /// Best-effort `npm install` inside the project.
    fn install_dependencies(&self, project_dir: &Path) -> bool {
        let spinner = Spinner::new("Installing project dependencies...");
        let result = run_with_deadline(
            "npm",
            &["install"],
            project_dir,
            self.config.timeouts.install,
        );
        spinner.clear();

        match result {
            Ok(outcome) if outcome.success() => true,
            Ok(_) => {
                ui::warn("some dependencies may need manual installation");
                false
            }
            Err(e) => {
                ui::warn(&format!("npm install failed: {e}"));
                false
            }
        }
    }
}

/// Write every project file. Pure file output, no subprocesses.
pub fn write_project(
    project_dir: &Path,
    project_name: &str,
    spec: &ProjectSpec,
    code: &str,
) -> Result<()> {
    write(project_dir, "package.json", &manifest(project_name, spec)?)?;
    write(project_dir, "index.js", code)?;
    write(project_dir, "README.md", &readme(project_name, spec, project_dir))?;
    write(project_dir, ".env.example", &env_example(&spec.service_type))?;
    write(
        project_dir,
        "mcp-config.json",
        &client_config(project_name, project_dir)?,
    )?;
    Ok(())
}

fn write(dir: &Path, file: &str, content: &str) -> Result<()> {
    let path = dir.join(file);
    std::fs::write(&path, content).map_err(|e| ForgeError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn manifest(project_name: &str, spec: &ProjectSpec) -> Result<String> {
    let mut dependencies = serde_json::Map::new();
    dependencies.insert(
        "@modelcontextprotocol/sdk".to_string(),
        serde_json::Value::String("latest".to_string()),
    );
    for dep in &spec.dependencies {
        dependencies.insert(dep.clone(), serde_json::Value::String("latest".to_string()));
    }

    let manifest = serde_json::json!({
        "name": project_name,
        "version": "1.0.0",
        "description": spec.description,
        "main": "index.js",
        "type": "module",
        "scripts": {
            "start": "node index.js",
            "dev": "node --watch index.js",
        },
        "dependencies": dependencies,
    });
    serde_json::to_string_pretty(&manifest).map_err(|e| ForgeError::FileWriteFailed {
        path: "package.json".to_string(),
        reason: e.to_string(),
    })
}

fn readme(project_name: &str, spec: &ProjectSpec, project_dir: &Path) -> String {
    let features = if spec.features.is_empty() {
        "- Basic MCP tooling\n".to_string()
    } else {
        spec.features.iter().map(|f| format!("- {f}\n")).collect()
    };

    format!(
        r#"# {project_name}

{description}

## Features

{features}
## Install

```bash
npm install
```

## Usage

Run directly:

```bash
npm start
```

Or add the service to your MCP client configuration:

```json
{{
    "{project_name}": {{
        "command": "node",
        "args": ["{entry}"]
    }}
}}
```

## Environment

Copy `.env.example` to `.env` and fill in any keys your setup needs.

## License

MIT
"#,
        description = spec.description,
        entry = project_dir.join("index.js").display(),
    )
}

fn env_example(service_type: &str) -> String {
    let mut content = String::from("# Environment configuration\n\n");
    match service_type {
        "weather" => content.push_str("# Weather API key\nWEATHER_API_KEY=your_api_key_here\n"),
        "translation" => {
            content.push_str("# Translation API key\nTRANSLATE_API_KEY=your_api_key_here\n");
        }
        "database" => content.push_str("# Database location\nDB_PATH=./data.db\n"),
        _ => {}
    }
    content.push_str("\n# MCP service configuration\nMCP_PORT=3000\nMCP_HOST=localhost\n");
    content
}

fn client_config(project_name: &str, project_dir: &Path) -> Result<String> {
    let config = serde_json::json!({
        "name": project_name,
        "command": "node",
        "args": [project_dir.join("index.js").display().to_string()],
    });
    serde_json::to_string_pretty(&config).map_err(|e| ForgeError::FileWriteFailed {
        path: "mcp-config.json".to_string(),
        reason: e.to_string(),
    })
}
