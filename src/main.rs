//! mcpforge - MCP service assistant
//!
//! A command line tool that turns a natural-language request into a running
//! MCP service package: classify the request, match it against a local
//! catalog and the package registry, then install an existing package or
//! generate a new service project.

use clap::Parser;

mod catalog;
mod classifier;
mod cli;
mod commands;
mod config;
mod dispatch;
mod error;
mod installer;
mod knowledge;
mod llm;
mod matcher;
mod process;
mod progress;
mod registry;
mod scaffold;
mod ui;

use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn run(cli: Cli) -> Result<()> {
    // A broken catalog is a programming error; fail before touching anything
    catalog::validate(catalog::KNOWN_SERVICES)?;

    let config = Config::load(cli.workspace, cli.verbose)?;

    match cli.command {
        Some(Commands::Need(args)) => commands::need::run(&config, args),
        Some(Commands::Search(args)) => commands::search::run(&config, args),
        Some(Commands::Install(args)) => commands::install::run(&config, args),
        Some(Commands::Create(args)) => commands::create::run(&config, args),
        Some(Commands::List(args)) => commands::list::run(args),
        Some(Commands::Version) => commands::version::run(),
        Some(Commands::Completions(args)) => commands::completions::run(args),
        None => commands::repl::run(&config),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[serial_test::serial]
    fn test_run_list_command() {
        let cli = Cli::try_parse_from(["mcpforge", "list"]).unwrap();
        assert!(run(cli).is_ok());
    }

    #[test]
    #[serial_test::serial]
    fn test_run_version_command() {
        let cli = Cli::try_parse_from(["mcpforge", "version"]).unwrap();
        assert!(run(cli).is_ok());
    }
}
