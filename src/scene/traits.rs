//! # Scene Graph Traits
//!
//! The capability a host scene must provide for a clip plane to drive it.

use std::fmt::Debug;

use thiserror::Error;

use super::attribute::{Attribute, AttributeValue, NodeKind};
use crate::geometry::BoundingVolume;

/// Error reported by a host scene graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error("unknown scene node {0}")]
    UnknownNode(String),
    #[error("scene subtree {0} has no geometry to bound")]
    EmptyScope(String),
    #[error("cannot append node {child} to {parent}: {reason}")]
    InvalidHierarchy {
        parent: String,
        child: String,
        reason: String,
    },
    /// Failure raised by the host itself (a rejected write, a lost document)
    #[error("host scene error: {0}")]
    Host(String),
}

/// Host scene graph the clip plane reads bounds from and writes nodes into.
///
/// Implementations translate the structured [`AttributeValue`]s into whatever
/// the host expects (attribute strings for a DOM-backed X3D runtime, typed
/// fields for a native engine). The clip plane never inspects the host
/// representation.
///
/// ## Examples
///
/// ```no_run
/// use clipscope::prelude::*;
///
/// fn place_marker<S: SceneGraph>(
///     scene: &mut S,
///     parent: &S::Node,
/// ) -> std::result::Result<S::Node, SceneError> {
///     let transform = scene.create_node(NodeKind::Transform)?;
///     scene.set_attribute(
///         &transform,
///         Attribute::Translation,
///         AttributeValue::Vec3(Vector3::new(0.0, 1.0, 0.0)),
///     )?;
///     scene.append_child(parent, &transform)?;
///     Ok(transform)
/// }
/// ```
pub trait SceneGraph {
    /// Handle to a node owned by the host
    type Node: Clone + Debug;

    /// Bounding volume of everything below `scope`.
    fn bounding_volume(&self, scope: &Self::Node) -> Result<BoundingVolume, SceneError>;

    /// Create a detached node of the given kind.
    fn create_node(&mut self, kind: NodeKind) -> Result<Self::Node, SceneError>;

    /// Set (or overwrite) an attribute on a node.
    fn set_attribute(
        &mut self,
        node: &Self::Node,
        attribute: Attribute,
        value: AttributeValue,
    ) -> Result<(), SceneError>;

    /// Append `child` as the last child of `parent`.
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node) -> Result<(), SceneError>;
}
