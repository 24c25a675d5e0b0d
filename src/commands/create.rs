//! Create command implementation
//!
//! Direct generation of a service project from a description. The knowledge
//! table still enriches the spec with category dependencies when the
//! description names a known category.

use crate::catalog::KNOWN_SERVICES;
use crate::classifier::{Intent, ProjectSpec};
use crate::cli::CreateArgs;
use crate::commands::helpers;
use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::knowledge;
use crate::ui;

/// Run the create command
pub fn run(config: &Config, args: CreateArgs) -> Result<()> {
    let description = args.description.trim();
    if description.is_empty() {
        ui::warn("nothing to do: the description is empty");
        return Ok(());
    }

    let mut spec = ProjectSpec {
        name: args.name,
        description: description.to_string(),
        service_type: "custom".to_string(),
        ..ProjectSpec::default()
    };
    if let Some(category) = knowledge::lookup(description, "") {
        spec.service_type = category.key.to_string();
        spec.add_dependencies(category.dependencies.iter().copied());
    }

    let dispatcher = Dispatcher::new(config, KNOWN_SERVICES, None, args.offline);
    let outcome = dispatcher.dispatch(Intent::Create(spec))?;
    helpers::report_outcome(config, &outcome);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_enrichment_from_knowledge_table() {
        let mut spec = ProjectSpec {
            description: "天气助手".to_string(),
            service_type: "custom".to_string(),
            ..ProjectSpec::default()
        };
        if let Some(category) = knowledge::lookup(&spec.description, "") {
            spec.service_type = category.key.to_string();
            spec.add_dependencies(category.dependencies.iter().copied());
        }
        assert_eq!(spec.service_type, "weather");
        assert!(spec.dependencies.contains("weather-js"));
    }
}
