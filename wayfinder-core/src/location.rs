use geo::Coord;

use crate::NodeId;

/// A place worth visiting.
///
/// Only [`Location::id`] takes part in route planning. The remaining fields
/// are display data carried through for front ends. `position` is expressed
/// in the catalog's map units (`x` to the right, `y` downwards).
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfinder_core::Location;
///
/// let lake = Location::new("hk1", "Hoan Kiem Lake", "Hoan Kiem", Coord { x: 300.0, y: 250.0 })
///     .with_description("Symbol of the city")
///     .with_image("images/pic1.jpg");
///
/// assert_eq!(lake.id.as_str(), "hk1");
/// assert_eq!(lake.image.as_deref(), Some("images/pic1.jpg"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Identifier used by the graph.
    pub id: NodeId,
    /// Human-readable name.
    pub name: String,
    /// District the location belongs to.
    pub district: String,
    /// Position on the catalog's map.
    pub position: Coord<f64>,
    /// Free-form description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Reference to an image asset, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub image: Option<String>,
}

impl Location {
    /// Construct a location without description or image.
    pub fn new(
        id: impl Into<NodeId>,
        name: impl Into<String>,
        district: impl Into<String>,
        position: Coord<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            district: district.into(),
            position,
            description: String::new(),
            image: None,
        }
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach an image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}
