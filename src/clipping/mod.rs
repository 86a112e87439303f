//! # Interactive Clipping
//!
//! A clip plane that hides scene geometry on one side, together with a
//! visible proxy outline that tracks it.
//!
//! ## Key Components
//!
//! - [`ClipPlane`] - State and operations of one clip plane
//! - [`ClipPlaneConfig`] - Initial axis, side, color and capping settings
//! - [`ProxyPlane`] - Handles to the outline nodes
//!
//! All operations take the host scene as `&mut S` where `S: SceneGraph`; the
//! clip plane itself only stores node handles.

pub mod config;
pub mod controller;
pub mod proxy;

#[cfg(test)]
mod tests;

pub use config::ClipPlaneConfig;
pub use controller::ClipPlane;
pub use proxy::{ProxyPlane, OUTLINE_VERTEX_COUNT};
