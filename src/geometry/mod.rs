//! # Geometry
//!
//! Plain geometric building blocks for the clip plane: bounding volumes,
//! the axis lookup table and the rounding used by the public accessors.

pub mod axis;
pub mod bounds;

pub use axis::{round_degrees, round_to_tenth, Axis, ClipSide};
pub use bounds::BoundingVolume;
