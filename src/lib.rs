//! # deps2mermaid - NuGet Dependency Graphs as Mermaid Diagrams
//!
//! deps2mermaid reads the `project.assets.json` files that `dotnet restore`
//! leaves in a project's `obj/` directory and draws the package dependency
//! graph as a Mermaid flowchart. Every package becomes one node listing all
//! the version ranges seen for it, so conflicting requirements stand out.
//!
//! ## Main Components
//!
//! - **Version**: NuGet versions and version ranges
//! - **Manifest**: discovery and reading of assets files
//! - **Graph**: aggregation into nodes, zoom, and Mermaid rendering
//! - **Dependency filter**: include/exclude patterns on edge endpoints
//! - **Output**: mermaid.ink / mermaid.live links with the compressed diagram
//!
//! ## Usage
//!
//! ### Example: Rendering an assets file
//!
//! ```no_run
//! use std::path::Path;
//!
//! use deps2mermaid::dependency_filter::EdgeFilter;
//! use deps2mermaid::graph::{DependencyGraph, GraphRenderer};
//! use deps2mermaid::manifest::Manifest;
//!
//! # fn main() -> miette::Result<()> {
//! let manifest = Manifest::load(Path::new("src/App/obj/project.assets.json"))?;
//! let graph = DependencyGraph::from_dependencies(manifest.dependencies);
//!
//! let (text, _) =
//!     GraphRenderer::default().render_to_string(&graph, graph.dependencies(), &EdgeFilter::new())?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Zooming and linking to the live editor
//!
//! ```
//! use deps2mermaid::core::{Component, Dependency, Reference};
//! use deps2mermaid::dependency_filter::EdgeFilter;
//! use deps2mermaid::graph::{DependencyGraph, DepthBounds, GraphRenderer, zoom};
//! use deps2mermaid::output::{encode_payload, live_edit_url};
//! use regex::Regex;
//!
//! # fn main() -> miette::Result<()> {
//! let graph = DependencyGraph::from_dependencies(vec![
//!     Dependency::new(Component::parse("Api/1.0.0")?, Reference::parse("Serilog/[3.0.0,)")?),
//!     Dependency::new(Component::parse("Worker/1.0.0")?, Reference::parse("Serilog/[2.0.0,)")?),
//!     Dependency::new(Component::parse("Worker/1.0.0")?, Reference::parse("Polly/8.0.0")?),
//! ]);
//!
//! // Who depends on Serilog?
//! let seeds = Regex::new("^Serilog$").unwrap();
//! let edges = zoom(&graph, &seeds, DepthBounds::limited(0, 1));
//! assert_eq!(edges.len(), 2);
//!
//! let (text, _) = GraphRenderer::default().render_to_string(&graph, edges, &EdgeFilter::new())?;
//! let url = live_edit_url(&encode_payload(&text)?);
//! assert!(url.starts_with("https://mermaid.live/edit#pako:"));
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;
mod verbose;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod dependency_filter;
pub mod error;
pub mod executors;
pub mod graph;
pub mod manifest;
pub mod output;
pub mod version;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    execute_command(Cli::parse())
}
