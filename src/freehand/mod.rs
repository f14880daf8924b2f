//! Freehand stroke authoring: primitives, merging, and the editing session.
//!
//! This subsystem is organized into submodules:
//! - `defaults`: canvas bounds and editing constants
//! - `shape`: the `Stroke`/`Path` primitives and path command emission
//! - `merge`: fusing two strokes into one tangent-continuous path
//! - `session`: the immutable editing-session value and its operations
//!
//! Everything operates on raw canvas-space points; nothing here knows
//! about jamo or layouts.

pub mod defaults;
pub mod merge;
pub mod session;
pub mod shape;

pub use merge::{MergeOutcome, merge};
pub use session::{DragSession, EditSession, PointKey};
pub use shape::{PathCommand, PathNode, PathShape, Shape, ShapeId, Stroke};
