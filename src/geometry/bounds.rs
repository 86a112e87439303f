//! # Bounding Volumes
//!
//! Axis-aligned bounding boxes as reported by the host scene. The clip plane
//! uses the volume to map slider positions onto distances and to size the
//! proxy outline.

use cgmath::{Vector3, Zero};

use super::axis::Axis;

/// Axis-aligned bounding volume of a scene subtree
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingVolume {
    /// Minimum corner of the bounding box
    pub min: Vector3<f64>,
    /// Maximum corner of the bounding box
    pub max: Vector3<f64>,
}

impl BoundingVolume {
    /// Create a new bounding volume from its corners
    pub fn new(min: Vector3<f64>, max: Vector3<f64>) -> Self {
        Self { min, max }
    }

    /// Create a bounding volume enclosing a set of points
    ///
    /// An empty slice yields a zero-sized volume at the origin.
    pub fn from_points(points: &[[f64; 3]]) -> Self {
        let mut corners = points.iter().map(|p| Vector3::from(*p));
        let Some(first) = corners.next() else {
            return Self::new(Vector3::zero(), Vector3::zero());
        };

        corners.fold(Self::new(first, first), |volume, p| {
            volume.union(&Self::new(p, p))
        })
    }

    /// Smallest volume enclosing both `self` and `other`
    pub fn union(&self, other: &BoundingVolume) -> Self {
        Self::new(
            Vector3::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            Vector3::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        )
    }

    /// Minimum and maximum coordinate along `axis`
    pub fn extent(&self, axis: Axis) -> (f64, f64) {
        let index = axis.index();
        (self.min[index], self.max[index])
    }

    /// Edge lengths of the box
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Center point of the box
    pub fn center(&self) -> Vector3<f64> {
        (self.min + self.max) * 0.5
    }

    /// Whether every component satisfies `min <= max` and is finite
    pub fn is_valid(&self) -> bool {
        (0..3).all(|i| {
            self.min[i].is_finite() && self.max[i].is_finite() && self.min[i] <= self.max[i]
        })
    }
}
