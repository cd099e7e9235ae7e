//! Error types for the simulation's public surface.

use thiserror::Error;

/// Failure modes exposed by [`crate::Grid`]'s public API.
///
/// Material behaviors invoked during a tick never fail — an out-of-bounds
/// neighbor read is treated as impassable and never propagates. Only a
/// write driven by an unrecognized material name surfaces an error, and it
/// does so without mutating any state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("unknown material: {0}")]
    UnknownMaterial(String),
}
