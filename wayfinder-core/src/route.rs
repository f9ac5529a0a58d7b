//! Resolved routes through the graph.
//!
//! A route carries the full node path, including pass-through nodes, and the
//! selected stops it visits.

use crate::NodeId;

/// An ordered path with its total distance.
///
/// # Examples
/// ```
/// use wayfinder_core::{NodeId, Route};
///
/// let path: Vec<NodeId> = ["A", "X", "B"].into_iter().map(NodeId::from).collect();
/// let stops = vec![NodeId::from("A"), NodeId::from("B")];
/// let route = Route::new(path, 3.5, stops);
///
/// assert_eq!(route.path().len(), 3);
/// assert_eq!(route.stops().len(), 2);
/// assert!(!route.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    path: Vec<NodeId>,
    total_distance_km: f64,
    stops: Vec<NodeId>,
}

impl Route {
    /// Construct a route from its path, length and visited stops.
    #[must_use]
    pub const fn new(path: Vec<NodeId>, total_distance_km: f64, stops: Vec<NodeId>) -> Self {
        Self {
            path,
            total_distance_km,
            stops,
        }
    }

    /// The route used to signal "no route": no nodes, zero distance.
    ///
    /// # Examples
    /// ```
    /// use wayfinder_core::Route;
    ///
    /// let route = Route::empty();
    /// assert!(route.is_empty());
    /// assert_eq!(route.total_distance_km(), 0.0);
    /// ```
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new(), 0.0, Vec::new())
    }

    /// Every node walked, in order, including pass-through nodes.
    #[must_use]
    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    /// Total length in kilometres.
    #[must_use]
    pub const fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    /// Selected stops in visiting order.
    #[must_use]
    pub fn stops(&self) -> &[NodeId] {
        &self.stops
    }

    /// Whether the route has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}
