//! Common functionality shared across the CLI and the library

use std::path::PathBuf;

use clap::Args;
use regex::Regex;

use crate::cli::{GraphDirection, OutputType};
use crate::error::Deps2MermaidError;

/// Zoom arguments
#[derive(Args, Debug, Clone, Default)]
pub struct ZoomArgs {
    /// Regular expression selecting the packages to zoom in on
    #[arg(
        short,
        long,
        value_name = "REGEX",
        conflicts_with = "project_root",
        env = "DEPS2MERMAID_ZOOM"
    )]
    pub zoom: Option<String>,

    /// Zoom in on the root project of every assets file
    #[arg(short = 'r', long, env = "DEPS2MERMAID_PROJECT_ROOT")]
    pub project_root: bool,

    /// How many dependency hops to follow from the zoomed packages
    #[arg(long, value_name = "DEPTH", env = "DEPS2MERMAID_FORWARD")]
    pub forward: Option<usize>,

    /// How many dependent hops to follow towards the zoomed packages
    #[arg(long, value_name = "DEPTH", env = "DEPS2MERMAID_BACKWARD")]
    pub backward: Option<usize>,
}

/// Edge filter arguments
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Keep edges where either end matches
    #[arg(short, long, value_name = "REGEX", env = "DEPS2MERMAID_FILTER")]
    pub filter: Option<String>,

    /// Keep only edges where both ends match
    #[arg(long, value_name = "REGEX", env = "DEPS2MERMAID_STRONG_FILTER")]
    pub strong_filter: Option<String>,

    /// Drop edges where either end matches
    #[arg(short = 'x', long, value_name = "REGEX", env = "DEPS2MERMAID_EXCLUDE")]
    pub exclude: Option<String>,

    /// Drop only edges where both ends match
    #[arg(long, value_name = "REGEX", env = "DEPS2MERMAID_WEAK_EXCLUDE")]
    pub weak_exclude: Option<String>,
}

/// Output arguments
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// What to produce
    #[arg(
        short = 't',
        long,
        value_enum,
        default_value = crate::constants::output::DEFAULT_OUTPUT_TYPE,
        env = "DEPS2MERMAID_OUTPUT_TYPE"
    )]
    pub output_type: OutputType,

    /// Output file (stdout if not specified)
    #[arg(short, long, env = "DEPS2MERMAID_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Layout direction of the graph
    #[arg(
        long,
        value_enum,
        ignore_case = true,
        default_value = crate::constants::output::DEFAULT_DIRECTION,
        env = "DEPS2MERMAID_DIRECTION"
    )]
    pub direction: GraphDirection,
}

/// Compile a user-supplied pattern, naming the option it came from on failure
pub fn compile_pattern(option: &str, pattern: &str) -> Result<Regex, Deps2MermaidError> {
    Regex::new(pattern).map_err(|source| Deps2MermaidError::InvalidPattern {
        option: option.to_string(),
        pattern: pattern.to_string(),
        source,
    })
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, Deps2MermaidError>;
}

/// Trait for configurations that can be created from the parsed command line
pub trait FromCli: Sized {
    fn from_cli(cli: crate::cli::Cli) -> Result<Self, Deps2MermaidError>;
}
