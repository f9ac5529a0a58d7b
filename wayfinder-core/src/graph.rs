//! Immutable adjacency structure built from the edge catalog.

use std::collections::{BTreeSet, HashMap};

use crate::{Catalog, Edge, NodeId};

/// Undirected weighted graph over catalog locations.
///
/// Nodes are kept in lexicographic order so that index order doubles as the
/// tie-break order used by [`shortest_path`](crate::shortest_path). Every
/// edge is inserted in both directions; neighbour lists preserve edge
/// catalog order.
///
/// # Examples
/// ```
/// use wayfinder_core::{Edge, Graph, NodeId};
///
/// let edges = vec![Edge::new("a", "b", 1.0)?, Edge::new("b", "c", 2.0)?];
/// let graph = Graph::from_edges([NodeId::from("lonely")], &edges);
///
/// assert_eq!(graph.len(), 4);
/// assert_eq!(graph.edge_weight(&"c".into(), &"b".into()), Some(2.0));
/// assert_eq!(graph.neighbours(&"lonely".into()).map(Iterator::count), Some(0));
/// # Ok::<(), wayfinder_core::EdgeError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    nodes: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    adjacency: Vec<Vec<(usize, f64)>>,
}

impl Graph {
    /// Build a graph from every catalog location and edge.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let nodes = catalog.locations().iter().map(|location| location.id.clone());
        Self::from_edges(nodes, catalog.edges())
    }

    /// Build a graph from explicit nodes plus the endpoints of `edges`.
    ///
    /// Nodes without edges are kept as isolated vertices.
    pub fn from_edges<I>(nodes: I, edges: &[Edge]) -> Self
    where
        I: IntoIterator<Item = NodeId>,
    {
        let mut all: BTreeSet<NodeId> = nodes.into_iter().collect();
        for edge in edges {
            all.insert(edge.from().clone());
            all.insert(edge.to().clone());
        }

        let nodes: Vec<NodeId> = all.into_iter().collect();
        let index: HashMap<NodeId, usize> = nodes
            .iter()
            .enumerate()
            .map(|(position, id)| (id.clone(), position))
            .collect();
        let mut adjacency = vec![Vec::new(); nodes.len()];

        for edge in edges {
            let (Some(&from), Some(&to)) = (index.get(edge.from()), index.get(edge.to())) else {
                continue;
            };
            if let Some(list) = adjacency.get_mut(from) {
                list.push((to, edge.distance_km()));
            }
            if let Some(list) = adjacency.get_mut(to) {
                list.push((from, edge.distance_km()));
            }
        }

        log::debug!(
            "built graph with {} nodes and {} edges",
            nodes.len(),
            edges.len()
        );

        Self {
            nodes,
            index,
            adjacency,
        }
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `id` is a node of this graph.
    #[must_use]
    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    /// All nodes in lexicographic order.
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Neighbours of `id` with their edge weights, or `None` for unknown
    /// nodes.
    pub fn neighbours<'a>(
        &'a self,
        id: &NodeId,
    ) -> Option<impl Iterator<Item = (&'a NodeId, f64)> + use<'a>> {
        let position = self.index_of(id)?;
        let list = self.adjacency.get(position)?;
        Some(
            list.iter()
                .filter_map(|&(next, weight)| self.nodes.get(next).map(|node| (node, weight))),
        )
    }

    /// Weight of the direct edge between `a` and `b`, if any.
    #[must_use]
    pub fn edge_weight(&self, a: &NodeId, b: &NodeId) -> Option<f64> {
        let from = self.index_of(a)?;
        let to = self.index_of(b)?;
        self.adjacency
            .get(from)?
            .iter()
            .find(|(next, _)| *next == to)
            .map(|&(_, weight)| weight)
    }

    pub(crate) fn index_of(&self, id: &NodeId) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(crate) fn node_at(&self, position: usize) -> Option<&NodeId> {
        self.nodes.get(position)
    }

    pub(crate) fn adjacent(&self, position: usize) -> &[(usize, f64)] {
        self.adjacency
            .get(position)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
