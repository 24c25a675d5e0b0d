//! Search command implementation
//!
//! Runs the search flow directly, skipping classification: knowledge table,
//! scored catalog matcher, then the package registry.

use crate::catalog::KNOWN_SERVICES;
use crate::classifier::Intent;
use crate::cli::SearchArgs;
use crate::commands::helpers;
use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::matcher;
use crate::ui;

/// Run the search command
pub fn run(config: &Config, args: SearchArgs) -> Result<()> {
    let query = args.query.trim();
    if query.is_empty() {
        ui::warn("nothing to do: the query is empty");
        return Ok(());
    }

    let intent = Intent::Search {
        query: query.to_string(),
        terms: matcher::tokenize(query),
        service_type: String::new(),
    };

    let dispatcher = Dispatcher::new(
        config,
        KNOWN_SERVICES,
        helpers::choice_from_preference(args.prefer),
        false,
    );
    let outcome = dispatcher.dispatch(intent)?;
    helpers::report_outcome(config, &outcome);
    Ok(())
}
