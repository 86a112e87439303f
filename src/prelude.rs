//! # Clipscope Prelude
//!
//! Commonly used types in one import.
//!
//! ## Usage
//!
//! ```no_run
//! use clipscope::prelude::*;
//!
//! fn main() -> clipscope::Result<()> {
//!     let mut scene = X3dScene::new();
//!     let root = scene.root();
//!     let model = scene.add_group(root)?;
//!     scene.set_bounds(
//!         model,
//!         BoundingVolume::new(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0)),
//!     )?;
//!
//!     let mut plane = ClipPlane::new(&mut scene, &model, &root, ClipPlaneConfig::default())?;
//!     plane.set_axis(&mut scene, Axis::Z)?;
//!     plane.move_plane(&mut scene, 0.25)?;
//!     Ok(())
//! }
//! ```

// Re-export the controller
pub use crate::clipping::{ClipPlane, ClipPlaneConfig, ProxyPlane};
pub use crate::error::{ClipPlaneError, Result};

// Re-export geometry types
pub use crate::geometry::{Axis, BoundingVolume, ClipSide};

// Re-export scene access
pub use crate::scene::{
    Attribute, AttributeValue, NodeId, NodeKind, SceneError, SceneGraph, X3dScene,
};

// Re-export common external dependencies
pub use cgmath::{Vector3, Vector4};
