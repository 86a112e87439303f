//! # In-Memory X3D Scene
//!
//! A small X3D document that implements [`SceneGraph`]. Nodes live in an
//! arena and are addressed by [`NodeId`]; attribute values are stored as the
//! text an X3D runtime would receive. Hosts use it to stage a scene, drive a
//! clip plane against it and serialize the result as X3D markup.
//!
//! ## Usage
//!
//! ```no_run
//! use clipscope::prelude::*;
//!
//! let mut scene = X3dScene::new();
//! let model = scene.add_group(scene.root()).unwrap();
//! scene
//!     .set_bounds(model, BoundingVolume::new(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0)))
//!     .unwrap();
//! println!("{}", scene.to_xml());
//! ```

use std::fmt;

use super::attribute::{Attribute, AttributeValue, NodeKind};
use super::traits::{SceneError, SceneGraph};
use crate::geometry::BoundingVolume;

/// Handle to a node in an [`X3dScene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

struct X3dNode {
    kind: NodeKind,
    attributes: Vec<(String, String)>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    bounds: Option<BoundingVolume>,
}

impl X3dNode {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            attributes: Vec::new(),
            children: Vec::new(),
            parent: None,
            bounds: None,
        }
    }
}

/// Arena-backed X3D scene graph
pub struct X3dScene {
    nodes: Vec<X3dNode>,
    root: NodeId,
}

impl X3dScene {
    /// Creates an empty scene holding only the `Scene` root element
    pub fn new() -> Self {
        Self {
            nodes: vec![X3dNode::new(NodeKind::Scene)],
            root: NodeId(0),
        }
    }

    /// The `Scene` root element
    pub fn root(&self) -> NodeId {
        self.root
    }

    fn node(&self, id: NodeId) -> Result<&X3dNode, SceneError> {
        self.nodes
            .get(id.0)
            .ok_or_else(|| SceneError::UnknownNode(id.to_string()))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut X3dNode, SceneError> {
        self.nodes
            .get_mut(id.0)
            .ok_or_else(|| SceneError::UnknownNode(id.to_string()))
    }

    /// Creates a `Group` under `parent`
    pub fn add_group(&mut self, parent: NodeId) -> Result<NodeId, SceneError> {
        let group = self.create_node(NodeKind::Group)?;
        self.append_child(&parent, &group)?;
        Ok(group)
    }

    /// Registers the geometric extent of a node
    ///
    /// Stands in for the geometry a rendering runtime would measure itself.
    pub fn set_bounds(&mut self, node: NodeId, bounds: BoundingVolume) -> Result<(), SceneError> {
        self.node_mut(node)?.bounds = Some(bounds);
        Ok(())
    }

    /// Current text of an attribute
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes.get(node.0).and_then(|n| {
            n.attributes
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str())
        })
    }

    /// Children of a node in insertion order
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Parent of a node, if attached
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|n| n.parent)
    }

    /// Kind of a node
    pub fn kind(&self, node: NodeId) -> Option<NodeKind> {
        self.nodes.get(node.0).map(|n| n.kind)
    }

    /// All nodes of a kind, in creation order
    pub fn find_all(&self, kind: NodeKind) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.kind == kind)
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    fn is_ancestor(&self, candidate: NodeId, mut node: NodeId) -> bool {
        while let Some(parent) = self.parent(node) {
            if parent == candidate {
                return true;
            }
            node = parent;
        }
        false
    }

    /// Serializes the tree below the root as X3D markup
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        self.write_node(&mut out, self.root, 0);
        out
    }

    fn write_node(&self, out: &mut String, id: NodeId, depth: usize) {
        let node = &self.nodes[id.0];
        let indent = "  ".repeat(depth);

        out.push_str(&indent);
        out.push('<');
        out.push_str(node.kind.tag());
        for (name, value) in &node.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape(value));
            out.push('"');
        }

        if node.children.is_empty() {
            out.push_str("/>\n");
            return;
        }

        out.push_str(">\n");
        for child in &node.children {
            self.write_node(out, *child, depth + 1);
        }
        out.push_str(&indent);
        out.push_str("</");
        out.push_str(node.kind.tag());
        out.push_str(">\n");
    }
}

impl Default for X3dScene {
    fn default() -> Self {
        Self::new()
    }
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl SceneGraph for X3dScene {
    type Node = NodeId;

    fn bounding_volume(&self, scope: &NodeId) -> Result<BoundingVolume, SceneError> {
        self.node(*scope)?;

        let mut merged: Option<BoundingVolume> = None;
        let mut stack = vec![*scope];
        while let Some(id) = stack.pop() {
            let node = self.node(id)?;
            if let Some(bounds) = &node.bounds {
                merged = Some(match merged {
                    Some(acc) => acc.union(bounds),
                    None => *bounds,
                });
            }
            stack.extend(node.children.iter().copied());
        }

        merged.ok_or_else(|| SceneError::EmptyScope(scope.to_string()))
    }

    fn create_node(&mut self, kind: NodeKind) -> Result<NodeId, SceneError> {
        self.nodes.push(X3dNode::new(kind));
        Ok(NodeId(self.nodes.len() - 1))
    }

    fn set_attribute(
        &mut self,
        node: &NodeId,
        attribute: Attribute,
        value: AttributeValue,
    ) -> Result<(), SceneError> {
        let text = value.to_string();
        let attributes = &mut self.node_mut(*node)?.attributes;

        match attributes.iter_mut().find(|(key, _)| key == attribute.name()) {
            Some((_, existing)) => *existing = text,
            None => attributes.push((attribute.name().to_string(), text)),
        }
        Ok(())
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), SceneError> {
        self.node(*parent)?;
        let existing_parent = self.node(*child)?.parent;

        let reject = |reason: &str| SceneError::InvalidHierarchy {
            parent: parent.to_string(),
            child: child.to_string(),
            reason: reason.to_string(),
        };

        if parent == child {
            return Err(reject("a node cannot contain itself"));
        }
        if *child == self.root {
            return Err(reject("the scene root cannot be reparented"));
        }
        if existing_parent.is_some() {
            return Err(reject("node is already attached"));
        }
        if self.is_ancestor(*child, *parent) {
            return Err(reject("node is an ancestor of the parent"));
        }

        self.node_mut(*child)?.parent = Some(*parent);
        self.node_mut(*parent)?.children.push(*child);
        Ok(())
    }
}
