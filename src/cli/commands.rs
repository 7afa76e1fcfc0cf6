use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Repository introspection engine for tech stack and toolchain discovery
#[derive(Parser, Debug)]
#[command(
    name = "stackscout",
    about = "Repository introspection engine for tech stack and toolchain discovery",
    version,
    author,
    long_about = "stackscout scans a project root for static evidence (marker files, \
                  dependency manifests, file extensions) and produces a structured \
                  discovery report covering tech stacks, frameworks, test tooling, \
                  infrastructure, CI systems, and monorepo conventions."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Increase verbosity")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Scan a repository and produce a discovery report",
        long_about = "Scans the project root for marker files, dependency manifests, and \
                      file extensions, then prints the assembled discovery report.\n\n\
                      Examples:\n  \
                      stackscout discover\n  \
                      stackscout discover /path/to/repo\n  \
                      stackscout discover --format json\n  \
                      stackscout discover --format markdown /path/to/repo"
    )]
    Discover(DiscoverArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct DiscoverArgs {
    #[arg(
        value_name = "PATH",
        help = "Path to the project root (defaults to current directory)"
    )]
    pub project_root: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "yaml",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        long,
        value_name = "DIR",
        help = "Toolkit overlay root (defaults to <PATH>/.stackscout)"
    )]
    pub toolkit_root: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Yaml,
    Json,
    Markdown,
}

impl From<OutputFormatArg> for crate::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Yaml => crate::output::OutputFormat::Yaml,
            OutputFormatArg::Json => crate::output::OutputFormat::Json,
            OutputFormatArg::Markdown => crate::output::OutputFormat::Markdown,
        }
    }
}
