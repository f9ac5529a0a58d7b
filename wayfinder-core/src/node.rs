//! Opaque identifiers for points of interest.

use std::borrow::Borrow;
use std::fmt;

/// Identifier of a point of interest.
///
/// Identifiers are opaque strings. Their lexicographic order is the total
/// order used for every deterministic tie-break in the engine.
///
/// # Examples
/// ```
/// use wayfinder_core::NodeId;
///
/// let lake = NodeId::from("hk1");
/// let temple = NodeId::from("th2");
/// assert!(lake < temple);
/// assert_eq!(lake.as_str(), "hk1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(String);

impl NodeId {
    /// Construct an identifier from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a", "b")]
    #[case("bd4", "dd1")]
    #[case("hbt1", "hbt2")]
    fn ordering_is_lexicographic(#[case] lower: &str, #[case] higher: &str) {
        assert!(NodeId::from(lower) < NodeId::from(higher));
    }

    #[rstest]
    fn displays_raw_identifier() {
        assert_eq!(NodeId::new(String::from("hk3")).to_string(), "hk3");
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn serialises_as_bare_string() {
        let json = serde_json::to_string(&NodeId::from("th1")).expect("serialise id");
        assert_eq!(json, "\"th1\"");
    }
}
