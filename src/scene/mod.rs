//! # Scene Graph Access
//!
//! The clip plane talks to the host scene only through the [`SceneGraph`]
//! trait and emits structured [`AttributeValue`]s. [`X3dScene`] is an
//! in-memory X3D document implementing the trait, used by the demo binary,
//! the tests and hosts that assemble X3D markup server-side.

pub mod attribute;
pub mod traits;
pub mod x3d;

pub use attribute::{Attribute, AttributeValue, NodeKind};
pub use traits::{SceneError, SceneGraph};
pub use x3d::{NodeId, X3dScene};
