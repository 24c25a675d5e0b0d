//! Install command implementation
//!
//! Direct install of a named package, skipping classification. A timed-out
//! install falls through to generating a custom service; other failures are
//! reported as failures.

use crate::catalog::KNOWN_SERVICES;
use crate::classifier::Intent;
use crate::cli::InstallArgs;
use crate::commands::helpers;
use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::error::Result;

/// Run the install command
pub fn run(config: &Config, args: InstallArgs) -> Result<()> {
    let intent = Intent::Install {
        package: args.package,
        service_type: args.service_type.unwrap_or_default(),
        required_packages: Vec::new(),
    };

    let dispatcher = Dispatcher::new(config, KNOWN_SERVICES, None, false);
    let outcome = dispatcher.dispatch(intent)?;
    helpers::report_outcome(config, &outcome);
    Ok(())
}
