//! Styled terminal output
//!
//! All user-facing presentation goes through here so commands stay thin and
//! the wording stays consistent between the one-shot commands and the
//! interactive loop.

use console::Style;

use crate::catalog::ServiceDescriptor;
use crate::config::Config;
use crate::knowledge::CategoryInfo;
use crate::matcher::MatchResult;
use crate::registry::PackageHit;

const RULE_WIDTH: usize = 50;

fn rule() -> String {
    "─".repeat(RULE_WIDTH)
}

/// Verbose-only diagnostic line on stderr
pub fn verbose(config: &Config, message: &str) {
    if config.verbose {
        eprintln!("{} {}", Style::new().dim().apply_to("→"), message);
    }
}

/// Non-fatal warning on stderr
pub fn warn(message: &str) {
    eprintln!(
        "{} {}",
        Style::new().yellow().bold().apply_to("Warning:"),
        message
    );
}

/// Recoverable request failure on stderr (the loop keeps going)
pub fn failure(message: &str) {
    eprintln!(
        "{} {}",
        Style::new().red().bold().apply_to("Failed:"),
        message
    );
}

pub fn success(message: &str) {
    println!("{} {}", Style::new().green().bold().apply_to("✓"), message);
}

/// Present a local knowledge category hit
pub fn print_category_hit(category: &CategoryInfo) {
    println!("\nFound a matching service category:");
    println!("{}", rule());
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Category:"),
        Style::new().yellow().apply_to(category.label)
    );
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Suggested:"),
        category.packages.join(", ")
    );
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Description:"),
        category.description
    );
    println!("{}", rule());
}

/// Present a scored catalog match
pub fn print_catalog_match(config: &Config, result: &MatchResult<'_>) {
    println!("\nFound a known MCP service:");
    println!("{}", rule());
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Service:"),
        Style::new().yellow().apply_to(result.descriptor.name)
    );
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Description:"),
        result.descriptor.description
    );
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Package:"),
        Style::new().cyan().apply_to(result.descriptor.package)
    );
    println!("{}", rule());
    verbose(config, &format!("match score {}", result.score));
}

/// Present registry search hits, numbered for selection
pub fn print_registry_hits(hits: &[PackageHit]) {
    println!("\nFound {} package(s) on the registry:", hits.len());
    println!("{}", rule());
    for (i, hit) in hits.iter().enumerate() {
        println!(
            "  {}. {}",
            i + 1,
            Style::new().cyan().apply_to(&hit.name)
        );
        if !hit.description.is_empty() {
            println!("     {}", Style::new().dim().apply_to(&hit.description));
        }
    }
    println!("{}", rule());
}

/// Usage guide after a successful package install
pub fn print_install_usage(package: &str, install_dir: &std::path::Path) {
    println!("\nUsage:");
    println!("  Add to your MCP client configuration:");
    println!(
        "    {}",
        Style::new().dim().apply_to(format!(
            "\"{}\": {{ \"command\": \"node\", \"args\": [\"{}/start.js\"] }}",
            package,
            install_dir.display()
        ))
    );
    println!("  Or run directly:");
    println!(
        "    {}",
        Style::new()
            .dim()
            .apply_to(format!("cd {} && node start.js", install_dir.display()))
    );
}

/// Usage guide after generating a project
pub fn print_created_usage(name: &str, project_dir: &std::path::Path) {
    println!("\nUsage:");
    println!(
        "    {}",
        Style::new()
            .dim()
            .apply_to(format!("cd {} && npm start", project_dir.display()))
    );
    println!("  Add to your MCP client configuration:");
    println!(
        "    {}",
        Style::new().dim().apply_to(format!(
            "\"{}\": {{ \"command\": \"node\", \"args\": [\"{}/index.js\"] }}",
            name,
            project_dir.display()
        ))
    );
}

/// Print the built-in catalog (list command)
pub fn print_catalog(entries: &[ServiceDescriptor], detailed: bool) {
    println!("Known MCP services:");
    for entry in entries {
        println!("  {}", Style::new().bold().yellow().apply_to(entry.name));
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Description:"),
            entry.description
        );
        if detailed {
            println!(
                "    {} {}",
                Style::new().bold().apply_to("Keywords:"),
                entry.keywords.join(", ")
            );
        }
    }
}
