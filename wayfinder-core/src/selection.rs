//! Caller-owned selection state.
//!
//! A [`Selection`] records which locations the visitor picked, which one the
//! walk starts from and which ones must not be dropped. The engine only reads
//! it; the mutators mirror the interactions a front end offers (toggling a
//! location, marking the start or a mandatory stop, bulk-unmarking stops the
//! budget cannot accommodate).

use thiserror::Error;

use crate::NodeId;

/// Result of [`Selection::toggle_mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkChange {
    /// The node became the start (and is now mandatory).
    StartSet,
    /// The node was the start; it is now neither start nor mandatory.
    StartCleared,
    /// The node is now mandatory.
    MandatoryMarked,
    /// The node is no longer mandatory.
    MandatoryUnmarked,
}

/// Errors returned by [`Selection::toggle_mark`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Only selected nodes can be marked.
    #[error("{0} is not selected")]
    NotSelected(NodeId),
}

/// Selected nodes plus the optional start and the mandatory subset.
///
/// The start, when present, is always treated as mandatory, whether or not it
/// is listed in [`Selection::mandatory`].
///
/// # Examples
/// ```
/// use wayfinder_core::{NodeId, Selection};
///
/// let ids = |names: &[&str]| names.iter().copied().map(NodeId::from).collect::<Vec<_>>();
/// let selection = Selection::new(ids(&["a", "b", "c", "d"]))
///     .with_start("a")
///     .with_mandatory(ids(&["c"]));
///
/// assert_eq!(selection.effective_mandatory(), ids(&["a", "c"]));
/// assert_eq!(selection.optional(), ids(&["b", "d"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    #[cfg_attr(feature = "serde", serde(default))]
    selected: Vec<NodeId>,
    #[cfg_attr(feature = "serde", serde(default))]
    start: Option<NodeId>,
    #[cfg_attr(feature = "serde", serde(default))]
    mandatory: Vec<NodeId>,
}

impl Selection {
    /// Select `nodes`, with no start and nothing mandatory.
    #[must_use]
    pub const fn new(selected: Vec<NodeId>) -> Self {
        Self {
            selected,
            start: None,
            mandatory: Vec::new(),
        }
    }

    /// Fix the start node.
    #[must_use]
    pub fn with_start(mut self, start: impl Into<NodeId>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Replace the mandatory list.
    #[must_use]
    pub fn with_mandatory(mut self, mandatory: Vec<NodeId>) -> Self {
        self.mandatory = mandatory;
        self
    }

    /// Selected nodes in selection order.
    #[must_use]
    pub fn selected(&self) -> &[NodeId] {
        &self.selected
    }

    /// The start node, if any.
    #[must_use]
    pub const fn start(&self) -> Option<&NodeId> {
        self.start.as_ref()
    }

    /// Explicitly mandatory nodes, as recorded.
    #[must_use]
    pub fn mandatory(&self) -> &[NodeId] {
        &self.mandatory
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Mandatory nodes with the start first, without duplicates.
    #[must_use]
    pub fn effective_mandatory(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = Vec::with_capacity(self.mandatory.len() + 1);
        for node in self.start.iter().chain(&self.mandatory) {
            if !nodes.contains(node) {
                nodes.push(node.clone());
            }
        }
        nodes
    }

    /// Selected nodes that are not mandatory, in selection order.
    #[must_use]
    pub fn optional(&self) -> Vec<NodeId> {
        let mandatory = self.effective_mandatory();
        self.selected
            .iter()
            .filter(|node| !mandatory.contains(node))
            .cloned()
            .collect()
    }

    /// Select `node`, or deselect it if already selected.
    ///
    /// Deselecting also clears it as start and drops it from the mandatory
    /// list. Returns whether the node is selected afterwards.
    pub fn toggle(&mut self, node: &NodeId) -> bool {
        if self.selected.contains(node) {
            self.selected.retain(|selected| selected != node);
            self.mandatory.retain(|mandatory| mandatory != node);
            if self.start.as_ref() == Some(node) {
                self.start = None;
            }
            false
        } else {
            self.selected.push(node.clone());
            true
        }
    }

    /// Cycle the marking of a selected node.
    ///
    /// With no start, the node becomes the start. Marking the start again
    /// clears it. Any other node flips between mandatory and optional.
    ///
    /// # Errors
    /// Returns [`SelectionError::NotSelected`] when `node` is not selected.
    pub fn toggle_mark(&mut self, node: &NodeId) -> Result<MarkChange, SelectionError> {
        if !self.selected.contains(node) {
            return Err(SelectionError::NotSelected(node.clone()));
        }
        let change = match self.start.as_ref() {
            None => {
                self.start = Some(node.clone());
                if !self.mandatory.contains(node) {
                    self.mandatory.push(node.clone());
                }
                MarkChange::StartSet
            }
            Some(start) if start == node => {
                self.start = None;
                self.mandatory.retain(|mandatory| mandatory != node);
                MarkChange::StartCleared
            }
            Some(_) if self.mandatory.contains(node) => {
                self.mandatory.retain(|mandatory| mandatory != node);
                MarkChange::MandatoryUnmarked
            }
            Some(_) => {
                self.mandatory.push(node.clone());
                MarkChange::MandatoryMarked
            }
        };
        log::debug!("selection mark on {node}: {change:?}");
        Ok(change)
    }

    /// Drop `nodes` from the mandatory list, clearing the start if included.
    pub fn unmark_mandatory(&mut self, nodes: &[NodeId]) {
        self.mandatory.retain(|mandatory| !nodes.contains(mandatory));
        if self.start.as_ref().is_some_and(|start| nodes.contains(start)) {
            self.start = None;
        }
    }

    /// Forget every selection and mark.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.start = None;
        self.mandatory.clear();
    }
}
