use clap::{Parser, Subcommand};

/// Dependency resolution and settings linting for project generation.
#[derive(Debug, Parser)]
#[clap(version)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub cmd: Command,
    /// Location of the manifest describing projects, targets and dependencies
    #[clap(short, long, env = "XCGEN_MANIFEST", default_value = "xcgen.toml")]
    pub manifest_location: String,
    /// Project root directory, defaults to the current directory
    #[clap(short, long)]
    pub root: Option<String>,
    /// Treat linting warnings as errors
    #[clap(long)]
    pub strict: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Lints the settings of every project and target in the manifest
    Lint,
    /// Lints, then prints the resolved dependency references of every target
    References,
}
