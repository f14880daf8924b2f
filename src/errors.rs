//! Error types for editing operations.
//!
//! The geometry resolvers are deliberately infallible (degenerate input
//! produces degenerate output); errors only arise at the editing boundary,
//! where an operation can reference state that does not exist.

use thiserror::Error;

use crate::freehand::ShapeId;

/// Errors from [`crate::freehand::session::EditSession`] operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    #[error("no shape with id {0}")]
    UnknownShape(ShapeId),

    #[error("nothing is selected")]
    NoSelection,
}
