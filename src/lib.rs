// src/lib.rs
//! Clipscope
//!
//! An interactive clipping-plane controller for X3D scene viewers. A
//! [`ClipPlane`] hides geometry on one side of a plane and keeps a visible
//! proxy outline aligned with it while the plane is moved, rotated, flipped
//! and switched between axes.

pub mod clipping;
pub mod error;
pub mod geometry;
pub mod prelude;
pub mod scene;

// Re-export main types for convenience
pub use clipping::{ClipPlane, ClipPlaneConfig};
pub use error::{ClipPlaneError, Result};
