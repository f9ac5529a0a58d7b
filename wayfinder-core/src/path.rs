//! Single-pair shortest paths.
//!
//! [`shortest_path`] is a plain O(V²) Dijkstra: the graphs handled here have
//! tens of nodes, so a linear scan of the frontier is cheaper than keeping a
//! heap. The scan picks the lowest node index among equal tentative
//! distances, and node indices follow the lexicographic order of
//! [`NodeId`]s, so results are reproducible when several equal-length paths
//! exist.

use thiserror::Error;

use crate::{Graph, NodeId};

/// A resolved path and its length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortestPath {
    /// Nodes from source to target, both included.
    pub nodes: Vec<NodeId>,
    /// Sum of edge weights along `nodes`, in kilometres.
    pub distance_km: f64,
}

/// Errors returned by [`shortest_path`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// An endpoint is not part of the graph.
    #[error("node {0} is not part of the graph")]
    UnknownNode(NodeId),
    /// No sequence of edges links the endpoints.
    #[error("no path from {from} to {to}")]
    NotReachable {
        /// Start of the requested path.
        from: NodeId,
        /// End of the requested path.
        to: NodeId,
    },
}

/// Find the shortest path from `source` to `target`.
///
/// The search stops as soon as `target` is settled, or when every remaining
/// node is at infinite distance.
///
/// # Examples
/// ```
/// use wayfinder_core::{Edge, Graph, NodeId, shortest_path};
///
/// let edges = vec![
///     Edge::new("a", "b", 1.0)?,
///     Edge::new("b", "c", 1.0)?,
///     Edge::new("a", "c", 3.0)?,
/// ];
/// let graph = Graph::from_edges(Vec::<NodeId>::new(), &edges);
/// let path = shortest_path(&graph, &"a".into(), &"c".into())?;
///
/// let ids: Vec<_> = path.nodes.iter().map(NodeId::as_str).collect();
/// assert_eq!(ids, ["a", "b", "c"]);
/// assert_eq!(path.distance_km, 2.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "tentative distances accumulate floating-point edge weights"
)]
pub fn shortest_path(
    graph: &Graph,
    source: &NodeId,
    target: &NodeId,
) -> Result<ShortestPath, PathError> {
    let start = graph
        .index_of(source)
        .ok_or_else(|| PathError::UnknownNode(source.clone()))?;
    let goal = graph
        .index_of(target)
        .ok_or_else(|| PathError::UnknownNode(target.clone()))?;

    let node_count = graph.len();
    let mut distances = vec![f64::INFINITY; node_count];
    let mut previous: Vec<Option<usize>> = vec![None; node_count];
    let mut settled = vec![false; node_count];
    if let Some(slot) = distances.get_mut(start) {
        *slot = 0.0;
    }

    while let Some(current) = closest_unsettled(&distances, &settled) {
        let current_distance = distances.get(current).copied().unwrap_or(f64::INFINITY);
        if current == goal || current_distance.is_infinite() {
            break;
        }
        if let Some(flag) = settled.get_mut(current) {
            *flag = true;
        }

        for &(next, weight) in graph.adjacent(current) {
            let candidate = current_distance + weight;
            if let Some(best) = distances.get_mut(next)
                && candidate < *best
            {
                *best = candidate;
                if let Some(link) = previous.get_mut(next) {
                    *link = Some(current);
                }
            }
        }
    }

    let distance_km = distances.get(goal).copied().unwrap_or(f64::INFINITY);
    if distance_km.is_infinite() {
        return Err(PathError::NotReachable {
            from: source.clone(),
            to: target.clone(),
        });
    }

    let nodes = rebuild_path(graph, &previous, goal);
    Ok(ShortestPath { nodes, distance_km })
}

/// Lowest-distance unsettled node; ties go to the lowest index.
fn closest_unsettled(distances: &[f64], settled: &[bool]) -> Option<usize> {
    distances
        .iter()
        .zip(settled)
        .enumerate()
        .filter(|(_, (_, done))| !**done)
        .fold(None, |best: Option<(usize, f64)>, (position, (&distance, _))| {
            match best {
                Some((_, best_distance)) if best_distance <= distance => best,
                _ => Some((position, distance)),
            }
        })
        .map(|(position, _)| position)
}

fn rebuild_path(graph: &Graph, previous: &[Option<usize>], goal: usize) -> Vec<NodeId> {
    let mut reversed = Vec::new();
    let mut cursor = Some(goal);
    while let Some(position) = cursor {
        if let Some(id) = graph.node_at(position) {
            reversed.push(id.clone());
        }
        cursor = previous.get(position).copied().flatten();
    }
    reversed.reverse();
    reversed
}
