//! # Proxy Plane
//!
//! The visible outline that follows the clip plane. The clip plane itself
//! has no geometry, so the proxy is a transform holding a closed line loop
//! around the volume's cross-section.

use cgmath::Vector3;

use crate::scene::{Attribute, AttributeValue, NodeKind, SceneError, SceneGraph};

/// Number of points in the closed outline (four corners plus the first again)
pub const OUTLINE_VERTEX_COUNT: i32 = 5;

/// Handles to the proxy nodes the clip plane keeps updating
#[derive(Debug, Clone)]
pub struct ProxyPlane<N> {
    transform: N,
    material: N,
    coordinates: N,
}

impl<N> ProxyPlane<N> {
    /// Builds the proxy subtree, detached from the scene
    ///
    /// The subtree stays invisible until [`attach`](Self::attach) hangs it
    /// under a parent.
    ///
    /// ```text
    /// Transform
    /// └── Shape
    ///     ├── Appearance
    ///     │   └── Material (emissiveColor, transparency)
    ///     └── LineSet (vertexCount)
    ///         └── Coordinate (point)
    /// ```
    pub fn build<S>(
        scene: &mut S,
        color: [f64; 3],
        outline: &[Vector3<f64>],
    ) -> Result<Self, SceneError>
    where
        S: SceneGraph<Node = N>,
    {
        let transform = scene.create_node(NodeKind::Transform)?;
        let shape = scene.create_node(NodeKind::Shape)?;
        let appearance = scene.create_node(NodeKind::Appearance)?;

        let material = scene.create_node(NodeKind::Material)?;
        scene.set_attribute(&material, Attribute::EmissiveColor, AttributeValue::Color(color))?;
        scene.set_attribute(&material, Attribute::Transparency, AttributeValue::Float(0.0))?;

        let line = scene.create_node(NodeKind::LineSet)?;
        scene.set_attribute(
            &line,
            Attribute::VertexCount,
            AttributeValue::Int(OUTLINE_VERTEX_COUNT),
        )?;

        let coordinates = scene.create_node(NodeKind::Coordinate)?;
        scene.set_attribute(
            &coordinates,
            Attribute::Point,
            AttributeValue::Points(outline.to_vec()),
        )?;

        scene.append_child(&transform, &shape)?;
        scene.append_child(&shape, &appearance)?;
        scene.append_child(&appearance, &material)?;
        scene.append_child(&shape, &line)?;
        scene.append_child(&line, &coordinates)?;

        Ok(Self {
            transform,
            material,
            coordinates,
        })
    }

    /// Appends the proxy transform to `parent`
    pub fn attach<S>(&self, scene: &mut S, parent: &N) -> Result<(), SceneError>
    where
        S: SceneGraph<Node = N>,
    {
        scene.append_child(parent, &self.transform)
    }

    /// The transform carrying rotation and translation
    pub fn transform(&self) -> &N {
        &self.transform
    }

    /// The material whose transparency hides the outline
    pub fn material(&self) -> &N {
        &self.material
    }

    /// The coordinate node holding the outline points
    pub fn coordinates(&self) -> &N {
        &self.coordinates
    }
}
