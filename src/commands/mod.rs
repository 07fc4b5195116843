//! Command implementations for the deps2mermaid CLI

pub mod graph;

use miette::Result;

use crate::cli::Cli;

/// Execute the command described by the parsed command line
pub fn execute_command(cli: Cli) -> Result<()> {
    graph::execute_graph_command(cli)
}
