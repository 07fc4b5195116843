use std::collections::{HashMap, HashSet};

use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{ComponentNode, DependencyGraph};
use crate::core::Dependency;
use crate::version::VersionRange;

/// Builder for constructing dependency graphs
///
/// Edges are deduplicated by full equality as they arrive. Every edge adds
/// the depending component (as an exact range) and the referenced range to
/// the nodes of their respective names.
pub struct DependencyGraphBuilder {
    graph: DiGraph<ComponentNode, Dependency>,
    node_indices: HashMap<String, NodeIndex>,
    seen: HashSet<Dependency>,
    duplicates: usize,
}

impl Default for DependencyGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyGraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_indices: HashMap::new(),
            seen: HashSet::new(),
            duplicates: 0,
        }
    }

    /// Add one edge; returns `false` for a duplicate
    pub fn add_dependency(&mut self, dependency: Dependency) -> bool {
        if self.seen.contains(&dependency) {
            self.duplicates += 1;
            return false;
        }

        let from = self.node_for(&dependency.component.name);
        self.graph[from].add_range(VersionRange::exact(dependency.component.version.clone()));

        let to = self.node_for(&dependency.reference.name);
        self.graph[to].add_range(dependency.reference.version_range.clone());

        self.seen.insert(dependency.clone());
        self.graph.add_edge(from, to, dependency);
        true
    }

    /// Add every edge, returning how many were new
    pub fn add_dependencies<I>(&mut self, dependencies: I) -> usize
    where
        I: IntoIterator<Item = Dependency>,
    {
        let mut added = 0;
        for dependency in dependencies {
            if self.add_dependency(dependency) {
                added += 1;
            }
        }
        added
    }

    /// Number of duplicate edges dropped so far
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn build(self) -> DependencyGraph {
        DependencyGraph {
            graph: self.graph,
            node_indices: self.node_indices,
        }
    }

    fn node_for(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(ComponentNode::new(name));
        self.node_indices.insert(name.to_string(), idx);
        idx
    }
}

impl DependencyGraph {
    /// Build a graph from a raw, possibly repetitive, edge list
    pub fn from_dependencies<I>(dependencies: I) -> Self
    where
        I: IntoIterator<Item = Dependency>,
    {
        let mut builder = DependencyGraphBuilder::new();
        builder.add_dependencies(dependencies);
        builder.build()
    }
}
