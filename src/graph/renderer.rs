use std::collections::HashSet;
use std::io::Write;

use miette::Result;

use crate::cli::GraphDirection;
use crate::core::Dependency;
use crate::dependency_filter::EdgeFilter;
use crate::error::Deps2MermaidError;
use crate::graph::{ComponentNode, DependencyGraph};

// Helper macro for write operations that converts IO errors
macro_rules! write_out {
    ($dst:expr, $($arg:tt)*) => {
        write!($dst, $($arg)*).map_err(Deps2MermaidError::from)
    };
}

macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(Deps2MermaidError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(Deps2MermaidError::from)
    };
}

/// Outcome of a render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSummary {
    /// Number of edges written
    pub rendered: usize,
    /// Edges rejected by the filter, in input order
    pub skipped: Vec<String>,
}

pub struct GraphRenderer {
    direction: GraphDirection,
}

impl Default for GraphRenderer {
    fn default() -> Self {
        Self::new(GraphDirection::default())
    }
}

impl GraphRenderer {
    pub fn new(direction: GraphDirection) -> Self {
        Self { direction }
    }

    /// Write a Mermaid flowchart with one line per accepted edge
    ///
    /// Each node is declared with its label the first time it appears and
    /// referenced by bare name afterwards.
    pub fn render_mermaid<'d, I>(
        &self,
        graph: &DependencyGraph,
        dependencies: I,
        filter: &EdgeFilter,
        output: &mut dyn Write,
    ) -> Result<RenderSummary>
    where
        I: IntoIterator<Item = &'d Dependency>,
    {
        let mut summary = RenderSummary::default();
        let mut declared: HashSet<&str> = HashSet::new();

        writeln_out!(output, "graph {}", self.direction)?;

        for dependency in dependencies {
            if !filter.accepts(dependency) {
                summary.skipped.push(dependency.to_string());
                continue;
            }

            let from = node_of(graph, dependency.from_name())?;
            let to = node_of(graph, dependency.to_name())?;

            write_out!(output, "  ")?;
            self.write_node(output, from, &mut declared)?;
            self.write_link(output, dependency, from, to)?;
            self.write_node(output, to, &mut declared)?;
            writeln_out!(output)?;

            summary.rendered += 1;
        }

        Ok(summary)
    }

    /// Render into a string
    pub fn render_to_string<'d, I>(
        &self,
        graph: &DependencyGraph,
        dependencies: I,
        filter: &EdgeFilter,
    ) -> Result<(String, RenderSummary)>
    where
        I: IntoIterator<Item = &'d Dependency>,
    {
        let mut buffer = Vec::new();
        let summary = self.render_mermaid(graph, dependencies, filter, &mut buffer)?;
        let text = String::from_utf8(buffer).map_err(|e| Deps2MermaidError::GraphError {
            message: format!("Rendered graph is not valid UTF-8: {e}"),
        })?;
        Ok((text, summary))
    }

    fn write_node<'g>(
        &self,
        output: &mut dyn Write,
        node: &'g ComponentNode,
        declared: &mut HashSet<&'g str>,
    ) -> Result<()> {
        if declared.insert(node.name()) {
            let ranges = node
                .sorted_ranges()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            write_out!(output, "{}[\"{}\n    {}\"]", node.name(), node.name(), ranges)?;
        } else {
            write_out!(output, "{}", node.name())?;
        }
        Ok(())
    }

    fn write_link(
        &self,
        output: &mut dyn Write,
        dependency: &Dependency,
        from: &ComponentNode,
        to: &ComponentNode,
    ) -> Result<()> {
        if from.is_pinned() && to.is_pinned() {
            write_out!(output, " --> ")?;
            return Ok(());
        }

        let left = if from.is_pinned() {
            String::new()
        } else {
            dependency.component.version.to_string()
        };
        let right = if to.is_pinned() {
            String::new()
        } else {
            dependency.reference.version_range.to_string()
        };
        write_out!(output, " -- \"{left} -> {right}\"--> ")?;
        Ok(())
    }
}

fn node_of<'g>(graph: &'g DependencyGraph, name: &str) -> Result<&'g ComponentNode> {
    graph.node(name).ok_or_else(|| {
        Deps2MermaidError::GraphError {
            message: format!("Dependency endpoint '{name}' is not part of the graph"),
        }
        .into()
    })
}
