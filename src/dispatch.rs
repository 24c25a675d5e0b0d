//! Action dispatch
//!
//! One-shot flow per request: a classified [`Intent`] lands on exactly one
//! terminal action (install or create), possibly via the search path:
//! knowledge table first, then the scored catalog matcher, then a registry
//! search, and unconditionally generation when nothing matches. Collaborator
//! failures fail the current action only; callers keep their loop alive.

use crate::catalog::ServiceDescriptor;
use crate::classifier::{Intent, ProjectSpec};
use crate::config::Config;
use crate::error::{ForgeError, Result};
use crate::installer::{InstallReport, InstallRunner};
use crate::knowledge::{self, CategoryInfo};
use crate::matcher;
use crate::progress::Spinner;
use crate::registry::{PackageHit, RegistrySearch};
use crate::scaffold::{ScaffoldReport, Scaffolder};
use crate::ui;

/// Terminal result of one dispatched request
#[derive(Debug)]
pub enum Outcome {
    Installed(InstallReport),
    Created(ScaffoldReport),
}

/// Operator decision when a search finds a usable match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchChoice {
    /// Install the suggested existing package
    InstallSuggested,
    /// Generate a custom service instead
    CreateCustom,
}

/// Terminal action planned for a search hit
#[derive(Debug, Clone, PartialEq, Eq)]
enum Plan {
    Install {
        package: String,
        service_type: String,
        required_packages: Vec<String>,
    },
    Create(ProjectSpec),
}

/// Dispatcher bound to the configuration and catalog for one process run
pub struct Dispatcher<'a> {
    config: &'a Config,
    catalog: &'a [ServiceDescriptor],
    /// Bypass the interactive choice (from `--prefer`)
    prefer: Option<SearchChoice>,
    /// Skip online LLM calls (code generation)
    offline: bool,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        config: &'a Config,
        catalog: &'a [ServiceDescriptor],
        prefer: Option<SearchChoice>,
        offline: bool,
    ) -> Self {
        Self {
            config,
            catalog,
            prefer,
            offline,
        }
    }

    /// Execute one intent to its terminal action.
    pub fn dispatch(&self, intent: Intent) -> Result<Outcome> {
        match intent {
            Intent::Search {
                query,
                terms,
                service_type,
            } => self.run_search(&query, &terms, &service_type),
            Intent::Install {
                package,
                service_type,
                required_packages,
            } => self.execute(Plan::Install {
                package,
                service_type,
                required_packages,
            }),
            Intent::Create(spec) => self.run_create(&spec),
        }
    }

    fn run_search(&self, query: &str, terms: &[String], service_type: &str) -> Result<Outcome> {
        // Cheap pre-check: a knowledge-table hit skips scoring entirely
        if let Some(category) = knowledge::lookup(query, service_type) {
            ui::print_category_hit(category);
            let choice = self.choose(category.packages[0]);
            return self.execute(category_plan(category, query, choice));
        }

        if let Some(result) = matcher::best_match(self.catalog, terms) {
            ui::print_catalog_match(self.config, &result);
            let choice = self.choose(result.descriptor.package);
            return self.execute(descriptor_plan(
                result.descriptor,
                query,
                service_type,
                choice,
            ));
        }

        let hits = self.registry_hits(query);
        if hits.is_empty() {
            println!("No matching service found, generating a custom one.");
            return self.run_create(&query_spec(query, service_type));
        }

        ui::print_registry_hits(&hits);
        match self.choose_registry_hit(&hits) {
            Some(package) => self.install_with_fallback(
                &package,
                service_type,
                &[],
                query_spec(query, service_type),
            ),
            None => self.run_create(&query_spec(query, service_type)),
        }
    }

    /// Registry search; a failed or degraded search is an empty hit list.
    fn registry_hits(&self, query: &str) -> Vec<PackageHit> {
        let spinner = Spinner::new("Searching the package registry...");
        let result = RegistrySearch::new(self.config).search(query);
        spinner.clear();
        match result {
            Ok(hits) => hits,
            Err(e) => {
                ui::warn(&e.to_string());
                Vec::new()
            }
        }
    }

    fn execute(&self, plan: Plan) -> Result<Outcome> {
        match plan {
            Plan::Install {
                package,
                service_type,
                required_packages,
            } => {
                // The fall-through spec mirrors what the create choice would have built
                let mut fallback = ProjectSpec {
                    name: None,
                    description: package.clone(),
                    service_type: service_type.clone(),
                    ..ProjectSpec::default()
                };
                fallback.add_dependencies(required_packages.iter().cloned());
                self.install_with_fallback(&package, &service_type, &required_packages, fallback)
            }
            Plan::Create(spec) => self.run_create(&spec),
        }
    }

    /// Install, falling through to generation when the install times out.
    fn install_with_fallback(
        &self,
        package: &str,
        service_type: &str,
        required_packages: &[String],
        fallback: ProjectSpec,
    ) -> Result<Outcome> {
        match self.run_install(package, service_type, required_packages) {
            Err(ForgeError::InstallTimedOut { .. }) => {
                ui::warn("install timed out; generating a custom service instead");
                self.run_create(&fallback)
            }
            other => other,
        }
    }

    fn run_install(
        &self,
        package: &str,
        service_type: &str,
        required_packages: &[String],
    ) -> Result<Outcome> {
        let report = InstallRunner::new(self.config).install(
            package,
            service_type,
            required_packages,
        )?;
        Ok(Outcome::Installed(report))
    }

    fn run_create(&self, spec: &ProjectSpec) -> Result<Outcome> {
        let report = Scaffolder::new(self.config).create(spec, self.offline)?;
        Ok(Outcome::Created(report))
    }

    /// Ask the operator what to do with a match. Defaults to creating a
    /// custom service; a failed or impossible prompt takes the default.
    fn choose(&self, suggested_package: &str) -> SearchChoice {
        if let Some(choice) = self.prefer {
            return choice;
        }

        let install = format!("Install {suggested_package}");
        let create = "Create a custom service".to_string();
        let options = vec![install.clone(), create];

        match inquire::Select::new("Found a match. What next?", options)
            .with_starting_cursor(1)
            .prompt()
        {
            Ok(selection) if selection == install => SearchChoice::InstallSuggested,
            _ => SearchChoice::CreateCustom,
        }
    }

    /// Pick one registry hit to install, or `None` to generate instead.
    fn choose_registry_hit(&self, hits: &[PackageHit]) -> Option<String> {
        match self.prefer {
            Some(SearchChoice::InstallSuggested) => return Some(hits[0].name.clone()),
            Some(SearchChoice::CreateCustom) => return None,
            None => {}
        }

        let create = "Create a custom service instead".to_string();
        let mut options: Vec<String> = hits.iter().map(|h| h.name.clone()).collect();
        options.push(create.clone());
        let default_cursor = options.len() - 1;

        match inquire::Select::new("Install one of these?", options)
            .with_starting_cursor(default_cursor)
            .prompt()
        {
            Ok(selection) if selection != create => Some(selection),
            _ => None,
        }
    }
}

/// Plan the terminal action for a knowledge-table hit.
fn category_plan(category: &CategoryInfo, query: &str, choice: SearchChoice) -> Plan {
    match choice {
        SearchChoice::InstallSuggested => Plan::Install {
            package: category.packages[0].to_string(),
            service_type: category.key.to_string(),
            required_packages: category
                .dependencies
                .iter()
                .map(|d| (*d).to_string())
                .collect(),
        },
        SearchChoice::CreateCustom => {
            let mut spec = ProjectSpec {
                name: None,
                description: query.to_string(),
                service_type: category.key.to_string(),
                ..ProjectSpec::default()
            };
            spec.add_dependencies(category.dependencies.iter().copied());
            Plan::Create(spec)
        }
    }
}

/// Plan the terminal action for a scored catalog hit.
fn descriptor_plan(
    descriptor: &ServiceDescriptor,
    query: &str,
    service_type: &str,
    choice: SearchChoice,
) -> Plan {
    match choice {
        SearchChoice::InstallSuggested => Plan::Install {
            package: descriptor.package.to_string(),
            service_type: service_type.to_string(),
            required_packages: Vec::new(),
        },
        SearchChoice::CreateCustom => Plan::Create(query_spec(query, service_type)),
    }
}

/// A bare generation spec built from the query alone.
fn query_spec(query: &str, service_type: &str) -> ProjectSpec {
    ProjectSpec {
        name: None,
        description: query.to_string(),
        service_type: service_type.to_string(),
        ..ProjectSpec::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::KNOWN_SERVICES;

    fn weather_category() -> &'static CategoryInfo {
        knowledge::lookup("天气", "").unwrap()
    }

    #[test]
    fn test_category_install_plan_carries_package_unchanged() {
        let category = weather_category();
        let plan = category_plan(category, "我需要查天气的工具", SearchChoice::InstallSuggested);
        match plan {
            Plan::Install {
                package,
                service_type,
                required_packages,
            } => {
                assert_eq!(package, "@modelcontextprotocol/server-weather");
                assert_eq!(service_type, "weather");
                assert_eq!(required_packages, vec!["axios", "weather-js"]);
            }
            other => panic!("expected install plan, got {other:?}"),
        }
    }

    #[test]
    fn test_category_create_plan_carries_dependencies() {
        let category = weather_category();
        let plan = category_plan(category, "我需要查天气的工具", SearchChoice::CreateCustom);
        match plan {
            Plan::Create(spec) => {
                assert_eq!(spec.service_type, "weather");
                assert_eq!(spec.description, "我需要查天气的工具");
                assert!(spec.dependencies.contains("axios"));
                assert!(spec.dependencies.contains("weather-js"));
            }
            other => panic!("expected create plan, got {other:?}"),
        }
    }

    #[test]
    fn test_descriptor_install_plan_carries_package_unchanged() {
        let filesystem = &KNOWN_SERVICES[0];
        let plan = descriptor_plan(
            filesystem,
            "file manager",
            "file",
            SearchChoice::InstallSuggested,
        );
        match plan {
            Plan::Install { package, .. } => {
                assert_eq!(package, "@modelcontextprotocol/server-filesystem");
            }
            other => panic!("expected install plan, got {other:?}"),
        }
    }

    #[test]
    fn test_descriptor_create_plan_uses_query_as_description() {
        let filesystem = &KNOWN_SERVICES[0];
        let plan = descriptor_plan(filesystem, "file manager", "file", SearchChoice::CreateCustom);
        match plan {
            Plan::Create(spec) => {
                assert_eq!(spec.description, "file manager");
                assert_eq!(spec.service_type, "file");
                assert!(spec.dependencies.is_empty());
            }
            other => panic!("expected create plan, got {other:?}"),
        }
    }

    #[test]
    fn test_query_spec_is_request_local() {
        let a = query_spec("weather", "weather");
        let b = query_spec("weather", "weather");
        assert_eq!(a, b);
        assert!(a.name.is_none());
    }
}
