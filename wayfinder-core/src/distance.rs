//! Distance summation along explicit paths.

use thiserror::Error;

use crate::{Graph, NodeId};

/// Tolerance used when comparing accumulated route distances.
///
/// Two totals closer than this are treated as equal and resolved by node
/// order instead. Summing the same legs in a different order can disagree in
/// the last bits, which must not decide between routes.
pub const DISTANCE_EPSILON: f64 = 1e-9;

/// Errors returned by [`total_distance`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistanceError {
    /// Two consecutive nodes share no direct edge.
    #[error("no direct edge between {from} and {to}")]
    MissingEdge {
        /// Node before the gap.
        from: NodeId,
        /// Node after the gap.
        to: NodeId,
    },
}

/// Sum the direct edge weights between consecutive nodes of `path`.
///
/// Empty and single-node paths have length zero. The route optimiser keeps
/// its own running total; this helper exists to audit resolved paths.
///
/// # Examples
/// ```
/// use wayfinder_core::{Edge, Graph, NodeId, total_distance};
///
/// let edges = vec![Edge::new("a", "b", 1.25)?, Edge::new("b", "c", 0.75)?];
/// let graph = Graph::from_edges(Vec::<NodeId>::new(), &edges);
/// let path: Vec<NodeId> = ["a", "b", "c"].into_iter().map(NodeId::from).collect();
///
/// assert_eq!(total_distance(&graph, &path)?, 2.0);
/// assert!(total_distance(&graph, &[NodeId::from("a"), NodeId::from("c")]).is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "path length is a floating-point sum of edge weights"
)]
pub fn total_distance(graph: &Graph, path: &[NodeId]) -> Result<f64, DistanceError> {
    path.windows(2).try_fold(0.0, |total, pair| {
        let [from, to] = pair else {
            return Ok(total);
        };
        graph
            .edge_weight(from, to)
            .map(|weight| total + weight)
            .ok_or_else(|| DistanceError::MissingEdge {
                from: from.clone(),
                to: to.clone(),
            })
    })
}
