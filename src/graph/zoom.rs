//! Bounded bidirectional reachability ("zoom")
//!
//! Restricts a graph to the edges reachable from a set of seed nodes within a
//! forward and a backward hop limit. The forward and backward sweeps run
//! independently and their results are unioned.

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::fmt;

use petgraph::Direction;
use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use regex::Regex;

use super::DependencyGraph;
use crate::core::{Component, Dependency};

/// Remaining number of hops a sweep may take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    Limited(usize),
    Unbounded,
}

impl Depth {
    fn is_exhausted(self) -> bool {
        self == Depth::Limited(0)
    }

    fn step(self) -> Self {
        match self {
            Depth::Limited(n) => Depth::Limited(n.saturating_sub(1)),
            Depth::Unbounded => Depth::Unbounded,
        }
    }
}

impl From<usize> for Depth {
    fn from(value: usize) -> Self {
        Depth::Limited(value)
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Depth::Limited(n) => write!(f, "{n}"),
            Depth::Unbounded => f.write_str("∞"),
        }
    }
}

/// Forward and backward hop limits of a zoom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthBounds {
    pub forward: Depth,
    pub backward: Depth,
}

impl Default for DepthBounds {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl DepthBounds {
    pub fn new(forward: Depth, backward: Depth) -> Self {
        Self { forward, backward }
    }

    pub fn limited(forward: usize, backward: usize) -> Self {
        Self::new(Depth::Limited(forward), Depth::Limited(backward))
    }

    pub fn unbounded() -> Self {
        Self::new(Depth::Unbounded, Depth::Unbounded)
    }

    /// Resolve user-supplied limits. When neither is given the zoom covers
    /// everything reachable; when only one is given the other is zero.
    pub fn from_options(forward: Option<usize>, backward: Option<usize>) -> Self {
        match (forward, backward) {
            (None, None) => Self::unbounded(),
            (forward, backward) => Self::limited(forward.unwrap_or(0), backward.unwrap_or(0)),
        }
    }
}

impl fmt::Display for DepthBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "forward {}, backward {}", self.forward, self.backward)
    }
}

/// Edges reachable from every node matching `seeds` within `bounds`, in
/// graph order
pub fn zoom<'g>(
    graph: &'g DependencyGraph,
    seeds: &Regex,
    bounds: DepthBounds,
) -> Vec<&'g Dependency> {
    let seed_nodes: Vec<NodeIndex> = graph.nodes_matching(seeds).collect();

    let mut selected = sweep(graph, &seed_nodes, bounds.forward, Direction::Outgoing);
    selected.extend(sweep(
        graph,
        &seed_nodes,
        bounds.backward,
        Direction::Incoming,
    ));

    selected
        .into_iter()
        .filter_map(|edge| graph.dependency(edge))
        .collect()
}

/// Breadth-first so that each node is expanded first at its shortest distance
/// from the seeds; the result does not depend on visitation order.
fn sweep(
    graph: &DependencyGraph,
    seeds: &[NodeIndex],
    depth: Depth,
    direction: Direction,
) -> BTreeSet<EdgeIndex> {
    let mut reached = BTreeSet::new();
    let mut queue: VecDeque<(Depth, NodeIndex)> =
        seeds.iter().map(|&node| (depth, node)).collect();

    while let Some((remaining, node)) = queue.pop_front() {
        if remaining.is_exhausted() {
            continue;
        }

        for edge in graph.graph().edges_directed(node, direction) {
            if reached.insert(edge.id()) {
                let far_end = match direction {
                    Direction::Outgoing => edge.target(),
                    Direction::Incoming => edge.source(),
                };
                queue.push_back((remaining.step(), far_end));
            }
        }
    }

    reached
}

/// Seed pattern selecting exactly the given root components
///
/// Returns `None` when there are no roots, since an empty pattern would match
/// every node.
pub fn project_root_pattern(roots: &[Component]) -> Option<String> {
    if roots.is_empty() {
        return None;
    }

    let mut seen = HashSet::new();
    let names: Vec<&str> = roots
        .iter()
        .map(|root| root.name.as_str())
        .filter(|name| seen.insert(*name))
        .collect();
    Some(
        names
            .iter()
            .map(|name| format!("^{}$", regex::escape(name)))
            .collect::<Vec<_>>()
            .join("|"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Reference;

    fn dep(from: &str, to: &str) -> Dependency {
        Dependency::new(
            Component::parse(from).unwrap(),
            Reference::parse(to).unwrap(),
        )
    }

    /// A -> B -> C -> D, plus E -> B
    fn chain() -> DependencyGraph {
        DependencyGraph::from_dependencies(vec![
            dep("A/1.0.0", "B/1.0.0"),
            dep("B/1.0.0", "C/1.0.0"),
            dep("C/1.0.0", "D/1.0.0"),
            dep("E/1.0.0", "B/1.0.0"),
        ])
    }

    fn edges(selected: &[&Dependency]) -> Vec<String> {
        selected
            .iter()
            .map(|d| format!("{}->{}", d.from_name(), d.to_name()))
            .collect()
    }

    fn re(pattern: &str) -> Regex {
        Regex::new(pattern).unwrap()
    }

    #[test]
    fn test_zero_depth_selects_nothing() {
        let graph = chain();
        assert!(zoom(&graph, &re("^B$"), DepthBounds::limited(0, 0)).is_empty());
    }

    #[test]
    fn test_depth_one_selects_incident_edges() {
        let graph = chain();

        let forward = zoom(&graph, &re("^B$"), DepthBounds::limited(1, 0));
        assert_eq!(edges(&forward), ["B->C"]);

        let backward = zoom(&graph, &re("^B$"), DepthBounds::limited(0, 1));
        assert_eq!(edges(&backward), ["A->B", "E->B"]);

        let both = zoom(&graph, &re("^B$"), DepthBounds::limited(1, 1));
        assert_eq!(edges(&both), ["A->B", "B->C", "E->B"]);
    }

    #[test]
    fn test_forward_depth_limits_hops() {
        let graph = chain();
        let selected = zoom(&graph, &re("^A$"), DepthBounds::limited(2, 0));
        assert_eq!(edges(&selected), ["A->B", "B->C"]);
    }

    #[test]
    fn test_unbounded_reaches_everything_connected() {
        let graph = chain();
        let selected = zoom(&graph, &re("^A$"), DepthBounds::unbounded());
        // E->B is only reachable backwards from B, not from A
        assert_eq!(edges(&selected), ["A->B", "B->C", "C->D"]);
    }

    #[test]
    fn test_no_bounds_means_unbounded() {
        let graph = chain();
        let default = zoom(&graph, &re("^C$"), DepthBounds::from_options(None, None));
        let huge = zoom(&graph, &re("^C$"), DepthBounds::limited(usize::MAX, usize::MAX));
        assert_eq!(edges(&default), edges(&huge));
        assert_eq!(edges(&default), ["A->B", "B->C", "C->D", "E->B"]);
    }

    #[test]
    fn test_single_bound_zeroes_the_other() {
        assert_eq!(
            DepthBounds::from_options(Some(2), None),
            DepthBounds::limited(2, 0)
        );
        assert_eq!(
            DepthBounds::from_options(None, Some(3)),
            DepthBounds::limited(0, 3)
        );
    }

    #[test]
    fn test_increasing_depth_never_shrinks_result() {
        let graph = chain();
        let pattern = re("B|D");
        for forward in 0..4usize {
            for backward in 0..4usize {
                let smaller = edges(&zoom(&graph, &pattern, DepthBounds::limited(forward, backward)));
                let wider = edges(&zoom(&graph, &pattern, DepthBounds::limited(forward + 1, backward)));
                let deeper = edges(&zoom(&graph, &pattern, DepthBounds::limited(forward, backward + 1)));
                assert!(smaller.iter().all(|e| wider.contains(e)));
                assert!(smaller.iter().all(|e| deeper.contains(e)));
            }
        }
    }

    #[test]
    fn test_cycles_terminate() {
        let graph = DependencyGraph::from_dependencies(vec![
            dep("A/1.0.0", "B/1.0.0"),
            dep("B/1.0.0", "A/1.0.0"),
        ]);
        let selected = zoom(&graph, &re("A"), DepthBounds::unbounded());
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn test_unmatched_pattern_selects_nothing() {
        let graph = chain();
        assert!(zoom(&graph, &re("^Nope$"), DepthBounds::unbounded()).is_empty());
    }

    #[test]
    fn test_project_root_pattern() {
        let roots = vec![
            Component::parse("My.App/1.0.0").unwrap(),
            Component::parse("My.App/1.0.0").unwrap(),
            Component::parse("Tests/1.0.0").unwrap(),
            Component::parse("My.App/1.0.0").unwrap(),
        ];
        let pattern = project_root_pattern(&roots).unwrap();
        assert_eq!(pattern, r"^My\.App$|^Tests$");

        let regex = re(&pattern);
        assert!(regex.is_match("My.App"));
        assert!(!regex.is_match("MyXApp"));
        assert!(!regex.is_match("My.App.Core"));

        assert_eq!(project_root_pattern(&[]), None);
    }
}
