//! Static catalog of locations and the weighted edges between them.
//!
//! A [`Catalog`] is immutable configuration injected into the engine. It is
//! validated once on construction: every edge must join two distinct, known
//! locations with a positive finite weight, and no pair may be listed twice.

use std::collections::{BTreeSet, HashMap, HashSet};

use thiserror::Error;

use crate::{Location, NodeId};

/// An undirected, weighted connection between two locations.
///
/// # Examples
/// ```
/// use wayfinder_core::Edge;
///
/// let edge = Edge::new("hk1", "hk2", 0.8)?;
/// assert!(edge.joins(&"hk2".into(), &"hk1".into()));
/// assert!(Edge::new("hk1", "hk1", 1.0).is_err());
/// # Ok::<(), wayfinder_core::EdgeError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "EdgeRecord"))]
pub struct Edge {
    from: NodeId,
    to: NodeId,
    distance_km: f64,
}

/// Errors returned by [`Edge::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EdgeError {
    /// Both endpoints were the same node.
    #[error("edge cannot join {0} to itself")]
    SelfLoop(NodeId),
    /// The weight was zero, negative or not finite.
    #[error("edge {from}-{to} has invalid distance {distance_km} km")]
    InvalidDistance {
        /// First endpoint.
        from: NodeId,
        /// Second endpoint.
        to: NodeId,
        /// Rejected weight.
        distance_km: f64,
    },
}

impl Edge {
    /// Validate and construct an edge.
    ///
    /// # Errors
    /// Returns [`EdgeError::SelfLoop`] when both endpoints match and
    /// [`EdgeError::InvalidDistance`] unless the weight is positive and
    /// finite.
    pub fn new(
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
        distance_km: f64,
    ) -> Result<Self, EdgeError> {
        let from = from.into();
        let to = to.into();
        if from == to {
            return Err(EdgeError::SelfLoop(from));
        }
        if !distance_km.is_finite() || distance_km <= 0.0 {
            return Err(EdgeError::InvalidDistance {
                from,
                to,
                distance_km,
            });
        }
        Ok(Self {
            from,
            to,
            distance_km,
        })
    }

    /// First endpoint as listed in the catalog.
    #[must_use]
    pub const fn from(&self) -> &NodeId {
        &self.from
    }

    /// Second endpoint as listed in the catalog.
    #[must_use]
    pub const fn to(&self) -> &NodeId {
        &self.to
    }

    /// Edge weight in kilometres.
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Whether the edge connects `a` and `b`, in either direction.
    #[must_use]
    pub fn joins(&self, a: &NodeId, b: &NodeId) -> bool {
        (&self.from == a && &self.to == b) || (&self.from == b && &self.to == a)
    }

    fn unordered_key(&self) -> (&NodeId, &NodeId) {
        if self.from <= self.to {
            (&self.from, &self.to)
        } else {
            (&self.to, &self.from)
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct EdgeRecord {
    from: NodeId,
    to: NodeId,
    distance_km: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<EdgeRecord> for Edge {
    type Error = EdgeError;

    fn try_from(record: EdgeRecord) -> Result<Self, Self::Error> {
        Self::new(record.from, record.to, record.distance_km)
    }
}

/// Errors returned by [`Catalog::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two locations shared an identifier.
    #[error("location {0} is listed more than once")]
    DuplicateLocation(NodeId),
    /// An edge referenced a location missing from the catalog.
    #[error("edge {from}-{to} references unknown location {missing}")]
    UnknownEndpoint {
        /// First endpoint of the offending edge.
        from: NodeId,
        /// Second endpoint of the offending edge.
        to: NodeId,
        /// The endpoint that is not a catalog location.
        missing: NodeId,
    },
    /// The same unordered pair appeared twice in the edge list.
    #[error("edge {from}-{to} is listed more than once")]
    DuplicateEdge {
        /// First endpoint.
        from: NodeId,
        /// Second endpoint.
        to: NodeId,
    },
}

/// Validated locations plus the undirected edges between them.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfinder_core::{Catalog, Edge, Location};
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let catalog = Catalog::new(
///     vec![
///         Location::new("a", "Alpha", "North", origin),
///         Location::new("b", "Bravo", "South", origin),
///     ],
///     vec![Edge::new("a", "b", 1.5)?],
/// )?;
///
/// assert_eq!(catalog.direct_distance(&"b".into(), &"a".into()), Some(1.5));
/// assert_eq!(catalog.districts(), vec!["North", "South"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "CatalogRecord", into = "CatalogRecord")
)]
pub struct Catalog {
    locations: Vec<Location>,
    index: HashMap<NodeId, usize>,
    edges: Vec<Edge>,
}

impl Catalog {
    /// Validate and construct a catalog.
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateLocation`] when two locations share
    /// an id. Edges naming a missing location fail with
    /// [`CatalogError::UnknownEndpoint`]; a pair joined twice fails with
    /// [`CatalogError::DuplicateEdge`].
    pub fn new(locations: Vec<Location>, edges: Vec<Edge>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(locations.len());
        for (position, location) in locations.iter().enumerate() {
            if index.insert(location.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateLocation(location.id.clone()));
            }
        }

        let mut seen = HashSet::with_capacity(edges.len());
        for edge in &edges {
            for endpoint in [edge.from(), edge.to()] {
                if !index.contains_key(endpoint) {
                    return Err(CatalogError::UnknownEndpoint {
                        from: edge.from().clone(),
                        to: edge.to().clone(),
                        missing: endpoint.clone(),
                    });
                }
            }
            if !seen.insert(edge.unordered_key()) {
                return Err(CatalogError::DuplicateEdge {
                    from: edge.from().clone(),
                    to: edge.to().clone(),
                });
            }
        }

        Ok(Self {
            locations,
            index,
            edges,
        })
    }

    /// Look up a location by identifier.
    #[must_use]
    pub fn location(&self, id: &NodeId) -> Option<&Location> {
        self.index
            .get(id)
            .and_then(|position| self.locations.get(*position))
    }

    /// All locations in catalog order.
    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// All edges in catalog order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Whether `id` names a catalog location.
    #[must_use]
    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    /// Sorted, de-duplicated district names.
    #[must_use]
    pub fn districts(&self) -> Vec<&str> {
        self.locations
            .iter()
            .map(|location| location.district.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Locations belonging to `district`, in catalog order.
    pub fn locations_in_district<'a>(
        &'a self,
        district: &'a str,
    ) -> impl Iterator<Item = &'a Location> + 'a {
        self.locations
            .iter()
            .filter(move |location| location.district == district)
    }

    /// Weight of the direct edge between `a` and `b`, if one exists.
    #[must_use]
    pub fn direct_distance(&self, a: &NodeId, b: &NodeId) -> Option<f64> {
        self.edges
            .iter()
            .find(|edge| edge.joins(a, b))
            .map(Edge::distance_km)
    }

    /// Whether `a` and `b` share a direct edge.
    #[must_use]
    pub fn is_connected(&self, a: &NodeId, b: &NodeId) -> bool {
        self.direct_distance(a, b).is_some()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct CatalogRecord {
    locations: Vec<Location>,
    #[serde(default)]
    edges: Vec<Edge>,
}

#[cfg(feature = "serde")]
impl TryFrom<CatalogRecord> for Catalog {
    type Error = CatalogError;

    fn try_from(record: CatalogRecord) -> Result<Self, Self::Error> {
        Self::new(record.locations, record.edges)
    }
}

#[cfg(feature = "serde")]
impl From<Catalog> for CatalogRecord {
    fn from(catalog: Catalog) -> Self {
        Self {
            locations: catalog.locations,
            edges: catalog.edges,
        }
    }
}
