//! Classified intent and project specification types

use std::collections::BTreeSet;

/// What the user wants done, with everything needed to act on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Look for an existing service matching the query
    Search {
        query: String,
        /// Match terms derived from the query (and service type, when known)
        terms: Vec<String>,
        service_type: String,
    },
    /// Install a specific package
    Install {
        package: String,
        service_type: String,
        required_packages: Vec<String>,
    },
    /// Generate a new service project
    Create(ProjectSpec),
}

impl Intent {
    /// Short label for diagnostics
    pub fn action_name(&self) -> &'static str {
        match self {
            Intent::Search { .. } => "search",
            Intent::Install { .. } => "install",
            Intent::Create(_) => "create",
        }
    }
}

/// Specification for a generated service project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectSpec {
    /// Project name; derived from the description when absent
    pub name: Option<String>,
    pub description: String,
    pub service_type: String,
    /// npm dependencies beyond the MCP SDK
    pub dependencies: BTreeSet<String>,
    /// Feature bullet points, in the order they were requested
    pub features: Vec<String>,
}

impl ProjectSpec {
    pub fn add_dependencies<I, S>(&mut self, deps: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for dep in deps {
            let dep = dep.into();
            if !dep.is_empty() {
                self.dependencies.insert(dep);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_names() {
        let search = Intent::Search {
            query: "q".to_string(),
            terms: vec![],
            service_type: String::new(),
        };
        assert_eq!(search.action_name(), "search");
        assert_eq!(Intent::Create(ProjectSpec::default()).action_name(), "create");
    }

    #[test]
    fn test_dependencies_deduplicate() {
        let mut spec = ProjectSpec::default();
        spec.add_dependencies(["axios", "weather-js", "axios", ""]);
        assert_eq!(spec.dependencies.len(), 2);
        assert!(spec.dependencies.contains("axios"));
        assert!(spec.dependencies.contains("weather-js"));
    }
}
