//! # Error Types
//!
//! Errors raised while building or driving a clip plane. Host scene failures
//! are wrapped so callers only match on [`ClipPlaneError`].

use thiserror::Error;

use crate::scene::SceneError;

/// Result type returned by fallible clip plane routines.
pub type Result<T> = std::result::Result<T, ClipPlaneError>;

/// Error encountered while configuring or updating a clip plane.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClipPlaneError {
    #[error("unknown axis {0:?}, expected one of X, Y, Z")]
    UnknownAxis(String),
    #[error("invalid clipping side {0}, expected -1 or 1")]
    InvalidClipSide(f64),
    #[error("degenerate bounding volume: min {min:?} exceeds max {max:?}")]
    DegenerateVolume { min: [f64; 3], max: [f64; 3] },
    #[error("invalid clip plane configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Scene(#[from] SceneError),
}
