//! Graph command implementation

use miette::{Result, WrapErr};

use crate::cli::Cli;
use crate::common::{ConfigBuilder, FromCli};
use crate::config::{FilterOptions, GraphOptions, ZoomOptions};
use crate::error::Deps2MermaidError;

impl FromCli for GraphOptions {
    fn from_cli(cli: Cli) -> Result<Self, Deps2MermaidError> {
        let paths = cli.get_paths();
        GraphOptions::builder()
            .with_paths(paths)
            .with_output_type(cli.output.output_type)
            .with_output(cli.output.output)
            .with_direction(cli.output.direction)
            .with_zoom(ZoomOptions::from(cli.zoom))
            .with_filter(FilterOptions::from(cli.filter))
            .with_verbose(cli.verbose)
            .build()
    }
}

/// Execute the graph command
pub fn execute_graph_command(cli: Cli) -> Result<()> {
    let config =
        GraphOptions::from_cli(cli).wrap_err("Failed to parse command line configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::graph::GraphExecutor;
    GraphExecutor::execute(config)
}
