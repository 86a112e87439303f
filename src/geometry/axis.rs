//! # Clipping Axes
//!
//! The active axis decides which volume extent a slider maps onto, which
//! axis the plane rotates around, and which two volume dimensions the proxy
//! outline spans. All of that lives in one lookup table so every operation
//! consults the same layout.

use std::fmt;
use std::str::FromStr;

use cgmath::{Deg, Matrix3, Rad, Vector3};

use super::bounds::BoundingVolume;
use crate::error::ClipPlaneError;

/// Axis the clip plane is perpendicular to before any rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Per-axis geometry used by the clip plane
struct AxisLayout {
    index: usize,
    rotation_axis: [f64; 3],
    outline: fn(&BoundingVolume) -> [Vector3<f64>; 5],
}

// Corner order walks the rectangle without crossing itself.
fn outline_x(v: &BoundingVolume) -> [Vector3<f64>; 5] {
    [
        Vector3::new(0.0, v.max.y, v.min.z),
        Vector3::new(0.0, v.min.y, v.min.z),
        Vector3::new(0.0, v.min.y, v.max.z),
        Vector3::new(0.0, v.max.y, v.max.z),
        Vector3::new(0.0, v.max.y, v.min.z),
    ]
}

fn outline_y(v: &BoundingVolume) -> [Vector3<f64>; 5] {
    [
        Vector3::new(v.min.x, 0.0, v.max.z),
        Vector3::new(v.min.x, 0.0, v.min.z),
        Vector3::new(v.max.x, 0.0, v.min.z),
        Vector3::new(v.max.x, 0.0, v.max.z),
        Vector3::new(v.min.x, 0.0, v.max.z),
    ]
}

fn outline_z(v: &BoundingVolume) -> [Vector3<f64>; 5] {
    [
        Vector3::new(v.min.x, v.max.y, 0.0),
        Vector3::new(v.min.x, v.min.y, 0.0),
        Vector3::new(v.max.x, v.min.y, 0.0),
        Vector3::new(v.max.x, v.max.y, 0.0),
        Vector3::new(v.min.x, v.max.y, 0.0),
    ]
}

const LAYOUTS: [AxisLayout; 3] = [
    AxisLayout {
        index: 0,
        rotation_axis: [0.0, 1.0, 0.0],
        outline: outline_x,
    },
    AxisLayout {
        index: 1,
        rotation_axis: [0.0, 0.0, 1.0],
        outline: outline_y,
    },
    AxisLayout {
        index: 2,
        rotation_axis: [1.0, 0.0, 0.0],
        outline: outline_z,
    },
];

impl Axis {
    /// All axes in X, Y, Z order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    fn layout(self) -> &'static AxisLayout {
        &LAYOUTS[self as usize]
    }

    /// Component index of this axis (0 for X, 1 for Y, 2 for Z)
    pub fn index(self) -> usize {
        self.layout().index
    }

    /// Unit vector along this axis scaled by the clipping side
    pub fn normal(self, side: ClipSide) -> Vector3<f64> {
        let mut normal = Vector3::new(0.0, 0.0, 0.0);
        normal[self.index()] = side.sign();
        normal
    }

    /// Axis the clip plane rotates around while this axis is active
    ///
    /// X rotates around Y, Y around Z and Z around X.
    pub fn rotation_axis(self) -> Vector3<f64> {
        Vector3::from(self.layout().rotation_axis)
    }

    /// Rotation of `delta` radians around [`Axis::rotation_axis`]
    pub fn rotation(self, delta: f64) -> Matrix3<f64> {
        Matrix3::from_axis_angle(self.rotation_axis(), Rad(delta))
    }

    /// Closed outline of the volume's cross-section at zero offset
    ///
    /// Returns the four corners spanning the two dimensions orthogonal to
    /// this axis, followed by the first corner again.
    pub fn outline(self, volume: &BoundingVolume) -> [Vector3<f64>; 5] {
        (self.layout().outline)(volume)
    }

    /// Upper-case axis letter
    pub fn as_str(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = ClipPlaneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Axis::X),
            "Y" | "y" => Ok(Axis::Y),
            "Z" | "z" => Ok(Axis::Z),
            other => Err(ClipPlaneError::UnknownAxis(other.to_string())),
        }
    }
}

/// Which half-space the clip plane removes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipSide {
    /// Normal points along the negative axis direction
    Negative,
    /// Normal points along the positive axis direction
    Positive,
}

impl ClipSide {
    /// Signed scalar multiplied into the plane normal
    pub fn sign(self) -> f64 {
        match self {
            ClipSide::Negative => -1.0,
            ClipSide::Positive => 1.0,
        }
    }

    /// The opposite side
    pub fn flipped(self) -> Self {
        match self {
            ClipSide::Negative => ClipSide::Positive,
            ClipSide::Positive => ClipSide::Negative,
        }
    }
}

impl TryFrom<f64> for ClipSide {
    type Error = ClipPlaneError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value == -1.0 {
            Ok(ClipSide::Negative)
        } else if value == 1.0 {
            Ok(ClipSide::Positive)
        } else {
            Err(ClipPlaneError::InvalidClipSide(value))
        }
    }
}

impl TryFrom<i32> for ClipSide {
    type Error = ClipPlaneError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(ClipSide::Negative),
            1 => Ok(ClipSide::Positive),
            other => Err(ClipPlaneError::InvalidClipSide(other as f64)),
        }
    }
}

/// Round half toward positive infinity, the way the host UI rounds
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round a distance to one decimal place
pub fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// Convert radians to whole degrees
pub fn round_degrees(radians: f64) -> i32 {
    let Deg(degrees) = Deg::from(Rad(radians));
    round_half_up(degrees) as i32
}
