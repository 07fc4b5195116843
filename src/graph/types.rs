//! Core graph types
//!
//! The aggregated per-package nodes and the directed graph that holds them.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use regex::Regex;

use crate::core::Dependency;
use crate::version::VersionRange;

/// A package name together with every distinct version range seen for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentNode {
    pub name: String,
    pub version_ranges: Vec<VersionRange>,
}

impl ComponentNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version_ranges: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version_ranges(&self) -> &[VersionRange] {
        &self.version_ranges
    }

    /// Record a range; returns `false` if it was already known
    pub(crate) fn add_range(&mut self, range: VersionRange) -> bool {
        if self.version_ranges.contains(&range) {
            return false;
        }
        self.version_ranges.push(range);
        true
    }

    /// A node is pinned when only a single version range was ever seen for it
    pub fn is_pinned(&self) -> bool {
        self.version_ranges.len() == 1
    }

    /// Ranges ordered by their lower bound, for display
    pub fn sorted_ranges(&self) -> Vec<&VersionRange> {
        let mut ranges: Vec<&VersionRange> = self.version_ranges.iter().collect();
        ranges.sort_by(|a, b| VersionRange::compare_by_minimum(a, b));
        ranges
    }
}

/// Deduplicated dependency edges between aggregated component nodes
///
/// Outgoing edges of a node form the forward index (the node is the
/// depending side), incoming edges form the backward index.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    pub(super) graph: DiGraph<ComponentNode, Dependency>,
    pub(super) node_indices: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    pub fn graph(&self) -> &DiGraph<ComponentNode, Dependency> {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn node(&self, name: &str) -> Option<&ComponentNode> {
        self.node_indices.get(name).map(|&idx| &self.graph[idx])
    }

    pub fn node_index(&self, name: &str) -> Option<NodeIndex> {
        self.node_indices.get(name).copied()
    }

    /// Nodes in first-seen order
    pub fn nodes(&self) -> impl Iterator<Item = &ComponentNode> {
        self.graph.node_weights()
    }

    /// Dependencies in first-seen order
    pub fn dependencies(&self) -> impl Iterator<Item = &Dependency> {
        self.graph.edge_weights()
    }

    pub fn dependency(&self, edge: EdgeIndex) -> Option<&Dependency> {
        self.graph.edge_weight(edge)
    }

    /// Indices of every node whose name matches `pattern`
    pub fn nodes_matching<'a>(
        &'a self,
        pattern: &'a Regex,
    ) -> impl Iterator<Item = NodeIndex> + 'a {
        self.graph
            .node_indices()
            .filter(move |&idx| pattern.is_match(self.graph[idx].name()))
    }

    /// Edges where `name` is the depending component
    pub fn outgoing(&self, name: &str) -> Vec<&Dependency> {
        self.edges_directed(name, Direction::Outgoing)
    }

    /// Edges where `name` is the referenced component
    pub fn incoming(&self, name: &str) -> Vec<&Dependency> {
        self.edges_directed(name, Direction::Incoming)
    }

    fn edges_directed(&self, name: &str, direction: Direction) -> Vec<&Dependency> {
        let Some(idx) = self.node_index(name) else {
            return Vec::new();
        };
        let mut edges: Vec<_> = self.graph.edges_directed(idx, direction).collect();
        edges.sort_by_key(|edge| edge.id());
        edges.into_iter().map(|edge| edge.weight()).collect()
    }
}
