//! Relation edges between concepts, derived from each concept's `related`
//! list after layout has completed.

use crate::{node::ConceptNode, types::ConceptIndex};

/// A directed listing `from -> to` with a strength weight.
///
/// Edges are not deduplicated: if two concepts list each other, the graph
/// carries two edges. Rendering treats them as unordered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: ConceptIndex,
    pub to: ConceptIndex,
    pub strength: f32,
}

/// Builds the edge list from the nodes' `related` ids.
///
/// For each node, every related id that resolves to a cataloged concept
/// yields one edge; dangling ids silently yield none. Mutual listings are
/// kept as two separate edges.
///
/// ### Parameters
/// - `nodes` - All concept nodes, in catalog order.
/// - `strength` - Weight stored on every created edge.
pub fn build_edges(nodes: &[ConceptNode], strength: f32) -> Vec<Edge> {
    let mut edges = Vec::new();

    for (from, node) in nodes.iter().enumerate() {
        for related in &node.concept.related {
            if let Some(to) = nodes.iter().position(|n| n.concept.id == *related) {
                edges.push(Edge { from, to, strength });
            }
        }
    }

    edges
}

/// Returns the indices (into `edges`) of every edge incident to `index`.
pub fn edges_touching(edges: &[Edge], index: ConceptIndex) -> Vec<usize> {
    edges
        .iter()
        .enumerate()
        .filter(|(_, e)| e.from == index || e.to == index)
        .map(|(i, _)| i)
        .collect()
}
