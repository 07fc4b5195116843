//! # Graph Construction and Rendering Module
//!
//! Builds the package graph from dependency edges, narrows it with a zoom,
//! and renders it as a Mermaid flowchart.
//!
//! ## Components
//!
//! ### Graph Building
//! - **DependencyGraphBuilder**: deduplicates edges and aggregates every
//!   version range seen for a package into its **ComponentNode**
//! - **DependencyGraph**: the resulting directed graph with forward and
//!   backward lookups by package name
//!
//! ### Zoom
//! - **zoom**: the edges within a forward and backward hop limit of the nodes
//!   matching a pattern
//!
//! ### Rendering
//! - **GraphRenderer**: writes the Mermaid text for a sequence of edges,
//!   skipping those rejected by an edge filter
//!
//! ## Example
//!
//! ```
//! use deps2mermaid::core::{Component, Dependency, Reference};
//! use deps2mermaid::dependency_filter::EdgeFilter;
//! use deps2mermaid::graph::{DependencyGraph, DepthBounds, GraphRenderer, zoom};
//! use regex::Regex;
//!
//! # fn main() -> miette::Result<()> {
//! let graph = DependencyGraph::from_dependencies(vec![
//!     Dependency::new(Component::parse("App/1.0.0")?, Reference::parse("Lib/[1.0.0,2.0.0)")?),
//!     Dependency::new(Component::parse("Lib/1.5.0")?, Reference::parse("Core/[1.0.0,)")?),
//! ]);
//!
//! let seeds = Regex::new("^Lib$").unwrap();
//! let edges = zoom(&graph, &seeds, DepthBounds::limited(1, 0));
//!
//! let (text, summary) =
//!     GraphRenderer::default().render_to_string(&graph, edges, &EdgeFilter::new())?;
//! assert_eq!(summary.rendered, 1);
//! assert!(text.starts_with("graph LR\n  Lib[\"Lib"));
//! # Ok(())
//! # }
//! ```

mod builder;
mod renderer;
mod types;
mod zoom;

pub use builder::DependencyGraphBuilder;
pub use renderer::{GraphRenderer, RenderSummary};
pub use types::{ComponentNode, DependencyGraph};
pub use zoom::{Depth, DepthBounds, project_root_pattern, zoom};
