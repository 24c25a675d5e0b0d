//! Shared plumbing between the one-shot commands and the interactive loop

use crate::catalog::KNOWN_SERVICES;
use crate::classifier::Classifier;
use crate::cli::Preference;
use crate::config::Config;
use crate::dispatch::{Dispatcher, Outcome, SearchChoice};
use crate::error::Result;
use crate::ui;

/// Map the CLI `--prefer` flag onto a dispatch choice.
pub fn choice_from_preference(prefer: Option<Preference>) -> Option<SearchChoice> {
    prefer.map(|p| match p {
        Preference::Install => SearchChoice::InstallSuggested,
        Preference::Create => SearchChoice::CreateCustom,
    })
}

/// Classify one request and run it to a terminal action.
pub fn handle_request(
    config: &Config,
    text: &str,
    prefer: Option<SearchChoice>,
    offline: bool,
) -> Result<()> {
    let classifier = Classifier::new(config);
    let intent = classifier.classify(text, offline);
    ui::verbose(config, &format!("classified as {}", intent.action_name()));

    let dispatcher = Dispatcher::new(config, KNOWN_SERVICES, prefer, offline);
    let outcome = dispatcher.dispatch(intent)?;
    report_outcome(config, &outcome);
    Ok(())
}

/// Print the result of a terminal action.
pub fn report_outcome(config: &Config, outcome: &Outcome) {
    match outcome {
        Outcome::Installed(report) => {
            ui::success(&format!("Installed {}", report.package));
            println!("  Location: {}", report.install_dir.display());
            if !report.dependencies.is_empty() {
                ui::verbose(
                    config,
                    &format!("extra dependencies: {}", report.dependencies.join(", ")),
                );
            }
            ui::print_install_usage(&report.package, &report.install_dir);
        }
        Outcome::Created(report) => {
            ui::success(&format!("Created {}", report.name));
            println!("  Location: {}", report.project_dir.display());
            if report.from_template {
                println!("  Entry point uses the built-in template; edit index.js to taste.");
            }
            if !report.dependencies_installed {
                println!("  Run `npm install` inside the project before starting it.");
            }
            ui::print_created_usage(&report.name, &report.project_dir);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_mapping() {
        assert_eq!(
            choice_from_preference(Some(Preference::Install)),
            Some(SearchChoice::InstallSuggested)
        );
        assert_eq!(
            choice_from_preference(Some(Preference::Create)),
            Some(SearchChoice::CreateCustom)
        );
        assert_eq!(choice_from_preference(None), None);
    }
}
