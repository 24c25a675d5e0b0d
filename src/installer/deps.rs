//! Dependency analysis for installed services
//!
//! Service types map to a fixed set of companion packages that the bare
//! install usually needs. Classifier-required packages are merged in and the
//! result is deduplicated.

use std::collections::BTreeSet;

/// Companion dependencies for a service type, merged with explicit requirements.
pub fn analyze(service_type: &str, required_packages: &[String]) -> Vec<String> {
    let mut deps: BTreeSet<String> = BTreeSet::new();

    let common: &[&str] = match service_type {
        "weather" => &["axios", "weather-js", "node-weather-api"],
        "translation" => &["@vitalets/google-translate-api", "axios"],
        "database" => &["sqlite3", "knex"],
        "api" => &["axios", "node-fetch"],
        _ => &[],
    };

    for dep in common {
        deps.insert((*dep).to_string());
    }
    for dep in required_packages {
        if !dep.is_empty() {
            deps.insert(dep.clone());
        }
    }

    deps.into_iter().collect()
}
