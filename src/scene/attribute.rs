//! # Scene Attributes
//!
//! Typed node kinds, attribute names and attribute values. The clip plane
//! only ever emits these structured values; turning them into the host's
//! attribute text happens in the [`Display`](std::fmt::Display) impls here.

use std::fmt;

use cgmath::{Vector3, Vector4};

/// Kind of scene node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Scene,
    ClipPlane,
    Transform,
    Shape,
    Appearance,
    Material,
    LineSet,
    Coordinate,
    Group,
}

impl NodeKind {
    /// X3D element name
    pub fn tag(&self) -> &'static str {
        match self {
            NodeKind::Scene => "Scene",
            NodeKind::ClipPlane => "ClipPlane",
            NodeKind::Transform => "Transform",
            NodeKind::Shape => "Shape",
            NodeKind::Appearance => "Appearance",
            NodeKind::Material => "Material",
            NodeKind::LineSet => "LineSet",
            NodeKind::Coordinate => "Coordinate",
            NodeKind::Group => "Group",
        }
    }
}

/// Attribute written by the clip plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Enabled,
    Plane,
    CappingStrength,
    CappingColor,
    EmissiveColor,
    Transparency,
    Rotation,
    Translation,
    VertexCount,
    Point,
}

impl Attribute {
    /// X3D attribute name
    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Enabled => "enabled",
            Attribute::Plane => "plane",
            Attribute::CappingStrength => "cappingStrength",
            Attribute::CappingColor => "cappingColor",
            Attribute::EmissiveColor => "emissiveColor",
            Attribute::Transparency => "transparency",
            Attribute::Rotation => "rotation",
            Attribute::Translation => "translation",
            Attribute::VertexCount => "vertexCount",
            Attribute::Point => "point",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Structured attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Bool(bool),
    Int(i32),
    Float(f64),
    Vec3(Vector3<f64>),
    /// RGB color with components in [0, 1]
    Color([f64; 3]),
    /// Plane equation `(a, b, c, d)` with `a*x + b*y + c*z + d = 0`
    Plane(Vector4<f64>),
    /// Axis-angle rotation, angle in radians
    Rotation { axis: Vector3<f64>, angle: f64 },
    Points(Vec<Vector3<f64>>),
}

// Negative zero prints as "-0", which hosts read back as a different string.
fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value == 0.0 {
        f.write_str("0")
    } else {
        write!(f, "{}", value)
    }
}

fn write_components(f: &mut fmt::Formatter<'_>, components: &[f64]) -> fmt::Result {
    for (i, value) in components.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write_float(f, *value)?;
    }
    Ok(())
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Bool(value) => write!(f, "{}", value),
            AttributeValue::Int(value) => write!(f, "{}", value),
            AttributeValue::Float(value) => write_float(f, *value),
            AttributeValue::Vec3(v) => write_components(f, &[v.x, v.y, v.z]),
            AttributeValue::Color(rgb) => write_components(f, rgb),
            AttributeValue::Plane(p) => write_components(f, &[p.x, p.y, p.z, p.w]),
            AttributeValue::Rotation { axis, angle } => {
                write_components(f, &[axis.x, axis.y, axis.z, *angle])
            }
            AttributeValue::Points(points) => {
                for (i, p) in points.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_components(f, &[p.x, p.y, p.z])?;
                }
                Ok(())
            }
        }
    }
}
