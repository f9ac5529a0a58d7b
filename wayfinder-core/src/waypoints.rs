//! Pass-through nodes of a resolved path.

use crate::NodeId;

/// Nodes a resolved path passes through without having been selected.
///
/// Returned in path order. A route may pass the same node twice; both
/// passes are reported.
///
/// # Examples
/// ```
/// use wayfinder_core::{NodeId, intermediate_points};
///
/// let path: Vec<NodeId> = ["A", "X", "B"].into_iter().map(NodeId::from).collect();
/// let selected = [NodeId::from("A"), NodeId::from("B")];
///
/// assert_eq!(intermediate_points(&path, &selected), vec![NodeId::from("X")]);
/// ```
#[must_use]
pub fn intermediate_points(path: &[NodeId], selected: &[NodeId]) -> Vec<NodeId> {
    path.iter()
        .filter(|node| !selected.contains(node))
        .cloned()
        .collect()
}
