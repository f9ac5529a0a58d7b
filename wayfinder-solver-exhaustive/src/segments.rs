//! Per-search memo of shortest paths between stops.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use wayfinder_core::{Graph, NodeId, PathError, PlanError, ShortestPath, shortest_path};

/// Shortest paths between ordered stop pairs, computed on first use.
///
/// Pairs are keyed by direction: the reverse path has the same length but
/// may take a different route among equal-length alternatives. Unreachable
/// pairs are cached as `None`. A cache belongs to one search and is dropped
/// with it.
#[derive(Debug)]
pub(crate) struct SegmentCache<'g> {
    graph: &'g Graph,
    segments: HashMap<(NodeId, NodeId), Option<ShortestPath>>,
    queries: u64,
}

impl<'g> SegmentCache<'g> {
    pub(crate) fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            segments: HashMap::new(),
            queries: 0,
        }
    }

    /// Dijkstra runs performed so far.
    pub(crate) const fn queries(&self) -> u64 {
        self.queries
    }

    /// Path from `from` to `to`, or `None` when no path exists.
    pub(crate) fn segment(
        &mut self,
        from: &NodeId,
        to: &NodeId,
    ) -> Result<Option<&ShortestPath>, PlanError> {
        match self.segments.entry((from.clone(), to.clone())) {
            Entry::Occupied(entry) => Ok(entry.into_mut().as_ref()),
            Entry::Vacant(entry) => {
                self.queries += 1;
                let resolved = match shortest_path(self.graph, from, to) {
                    Ok(path) => Some(path),
                    Err(PathError::NotReachable { .. }) => None,
                    Err(PathError::UnknownNode(node)) => return Err(PlanError::UnknownNode(node)),
                };
                Ok(entry.insert(resolved).as_ref())
            }
        }
    }

    /// Length of the path from `from` to `to`, or `None` when unreachable.
    pub(crate) fn distance(&mut self, from: &NodeId, to: &NodeId) -> Result<Option<f64>, PlanError> {
        Ok(self.segment(from, to)?.map(|path| path.distance_km))
    }
}
