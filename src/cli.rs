//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// mcpforge - MCP service assistant
///
/// Turn a natural-language request into an installed or generated MCP service package.
#[derive(Parser, Debug)]
#[command(
    name = "mcpforge",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "MCP service assistant: find, install or generate MCP services from plain language",
    long_about = "mcpforge classifies a natural-language request (search, install or create), \
                  matches it against a local catalog of known MCP services and the npm registry, \
                  and either installs an existing package or generates a new service project.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  mcpforge                          (interactive mode)\n    \
                  mcpforge need \"I need a weather tool\"\n    \
                  mcpforge search \"file manager\"\n    \
                  mcpforge install @modelcontextprotocol/server-filesystem\n    \
                  mcpforge create \"a subway timetable service\"\n    \
                  mcpforge list"
)]
pub struct Cli {
    /// Workspace directory for installed and generated services
    #[arg(long, short = 'w', global = true, env = "MCPFORGE_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Without a subcommand, mcpforge starts an interactive prompt
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Handle a natural-language request (classify, then search/install/create)
    Need(NeedArgs),

    /// Search known services and the npm registry for a query
    Search(SearchArgs),

    /// Install an MCP service package by name
    Install(InstallArgs),

    /// Generate a new MCP service project from a description
    Create(CreateArgs),

    /// List the built-in catalog of known MCP services
    List(ListArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Which terminal action to take when a search finds a known service
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preference {
    /// Install the suggested existing package
    Install,
    /// Generate a custom service project
    Create,
}

/// Arguments for the need command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Handle a request end to end:\n    mcpforge need \"我需要查天气的工具\"\n\n\
                  Skip the interactive choice on a search hit:\n    mcpforge need \"weather tool\" --prefer install\n\n\
                  Classify without the online model:\n    mcpforge need \"find a translation service\" --offline")]
pub struct NeedArgs {
    /// The request, in plain language
    pub text: String,

    /// Skip the install-or-create prompt when a search finds a match
    #[arg(long, value_enum)]
    pub prefer: Option<Preference>,

    /// Skip the online classification call and use local rules only
    #[arg(long)]
    pub offline: bool,
}

/// Arguments for the search command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Search the catalog and registry:\n    mcpforge search \"file manager\"\n\n\
                  Take the suggested package without prompting:\n    mcpforge search weather --prefer install")]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Skip the install-or-create prompt when a match is found
    #[arg(long, value_enum)]
    pub prefer: Option<Preference>,
}

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Install a known server package:\n    mcpforge install @modelcontextprotocol/server-filesystem\n\n\
                  Install with extra dependencies for a service type:\n    mcpforge install weather-js --service-type weather")]
pub struct InstallArgs {
    /// Package name to install
    pub package: String,

    /// Service type used for dependency analysis (e.g. weather, translation)
    #[arg(long)]
    pub service_type: Option<String>,
}

/// Arguments for the create command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate a service from a description:\n    mcpforge create \"a weather lookup service\"\n\n\
                  Pin the project name:\n    mcpforge create \"笔记管理\" --name mcp-notes\n\n\
                  Skip code generation and use the built-in template:\n    mcpforge create \"time service\" --offline")]
pub struct CreateArgs {
    /// Description of the service to generate
    pub description: String,

    /// Project name (derived from the description when omitted)
    #[arg(long)]
    pub name: Option<String>,

    /// Skip the online code generation call and use the built-in template
    #[arg(long)]
    pub offline: bool,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Show keywords for each catalog entry
    #[arg(long)]
    pub detailed: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    mcpforge completions --shell bash > ~/.bash_completion.d/mcpforge\n\n\
                  Generate zsh completions:\n    mcpforge completions --shell zsh > ~/.zfunc/_mcpforge")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
