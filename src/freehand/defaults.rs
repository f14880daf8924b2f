//! Canvas bounds and editing constants (all in canvas pixel units).

/// Editing canvas width.
pub const CANVAS_W: f64 = 500.0;

/// Editing canvas height.
pub const CANVAS_H: f64 = 500.0;

/// Snap grid pitch.
pub const GRID: f64 = 20.0;

/// How far control handles may extend beyond the canvas. Anchor points are
/// confined to the canvas itself.
pub const CTRL_MARGIN: f64 = 300.0;

/// Two endpoints closer than this are considered touching for a merge.
pub const MERGE_EPS: f64 = 12.0;

/// Corner handle length as a fraction of the shorter adjoining segment.
pub const CORNER_HANDLE_RATIO: f64 = 0.4;

/// Stroke width newly added strokes render with.
pub const DEFAULT_STROKE_WIDTH: f64 = 18.0;
