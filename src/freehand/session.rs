//! The editing session: an immutable value threaded through operations.
//!
//! A session owns one shape list and one selection. Every operation
//! returns a new session, so host UIs hold plain snapshots and never share
//! mutable state with the geometry core. Numeric edits are clamped here,
//! at the point of commit; the resolvers downstream never validate.
//!
//! Whole-shape dragging uses a [`DragSession`]: an immutable snapshot
//! taken at drag start, with every update computed as snapshot plus the
//! *cumulative* delta. Chaining per-frame deltas would accumulate
//! floating-point drift; re-deriving from the snapshot cannot.

use glam::{DVec2, dvec2};

use super::defaults::{CANVAS_H, CANVAS_W, CTRL_MARGIN, GRID};
use super::merge::{self, MergeOutcome};
use super::shape::{Shape, ShapeId, Stroke};
use crate::errors::EditError;

/// Addressable points of a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointKey {
    P0,
    P1,
    C1,
    C2,
}

impl PointKey {
    fn is_control(self) -> bool {
        matches!(self, PointKey::C1 | PointKey::C2)
    }
}

/// Clamp with the upper bound winning on inverted ranges, so oversized
/// shapes pin to the canvas edge instead of panicking.
fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    v.max(lo).min(hi)
}

/// Anchors live on the canvas proper.
fn clamp_anchor(p: DVec2) -> DVec2 {
    dvec2(clamp(p.x, 0.0, CANVAS_W), clamp(p.y, 0.0, CANVAS_H))
}

/// Control points may extend into a bounded margin outside the canvas.
fn clamp_control(p: DVec2) -> DVec2 {
    dvec2(
        clamp(p.x, -CTRL_MARGIN, CANVAS_W + CTRL_MARGIN),
        clamp(p.y, -CTRL_MARGIN, CANVAS_H + CTRL_MARGIN),
    )
}

fn clamp_key(key: PointKey, p: DVec2) -> DVec2 {
    if key.is_control() {
        clamp_control(p)
    } else {
        clamp_anchor(p)
    }
}

/// Round each coordinate to the snap grid.
pub fn snap_to_grid(p: DVec2) -> DVec2 {
    (p / GRID).round() * GRID
}

/// One editing session's complete state.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    shapes: Vec<Shape>,
    selected: Option<ShapeId>,
    next_id: ShapeId,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditSession {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            selected: None,
            next_id: 1,
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    pub fn find(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// Change the selection. Any drag in progress must be discarded by the
    /// caller (a [`DragSession`] snapshot is only valid for the selection
    /// it was started under).
    pub fn with_selection(&self, selected: Option<ShapeId>) -> Self {
        Self {
            selected,
            ..self.clone()
        }
    }

    /// Add a straight stroke, anchors clamped to the canvas.
    pub fn add_stroke(&self, p0: DVec2, p1: DVec2) -> (Self, ShapeId) {
        let id = self.next_id;
        let mut next = self.clone();
        next.next_id += 1;
        next.shapes
            .push(Shape::Stroke(Stroke::line(id, clamp_anchor(p0), clamp_anchor(p1))));
        (next, id)
    }

    /// Toggle the selected stroke between line and cubic. Becoming cubic
    /// seeds the controls at the anchors, which renders identically to the
    /// line until the handles move. Selected paths are left unchanged.
    pub fn toggle_cubic(&self) -> Result<Self, EditError> {
        let selected = self.selected.ok_or(EditError::NoSelection)?;
        let mut next = self.clone();
        for shape in &mut next.shapes {
            let Shape::Stroke(stroke) = shape else {
                continue;
            };
            if stroke.id != selected {
                continue;
            }
            stroke.control = match stroke.control {
                Some(_) => None,
                None => Some((stroke.p0, stroke.p1)),
            };
        }
        Ok(next)
    }

    /// Delete the selected shape and clear the selection. Without a
    /// selection this is the identity.
    pub fn remove_selected(&self) -> Self {
        let Some(selected) = self.selected else {
            return self.clone();
        };
        let mut next = self.clone();
        next.shapes.retain(|s| s.id() != selected);
        next.selected = None;
        next
    }

    /// Move one point of a stroke by `delta`, clamping at commit; with
    /// `snap`, the result lands on the grid before clamping. Moving a
    /// control of a straight stroke, or any point of a path, changes
    /// nothing.
    pub fn move_point(
        &self,
        id: ShapeId,
        key: PointKey,
        delta: DVec2,
        snap: bool,
    ) -> Result<Self, EditError> {
        let index = self
            .shapes
            .iter()
            .position(|s| s.id() == id)
            .ok_or(EditError::UnknownShape(id))?;
        let mut next = self.clone();
        if let Shape::Stroke(stroke) = &mut next.shapes[index] {
            let current = match (key, stroke.control) {
                (PointKey::P0, _) => Some(stroke.p0),
                (PointKey::P1, _) => Some(stroke.p1),
                (PointKey::C1, Some((c1, _))) => Some(c1),
                (PointKey::C2, Some((_, c2))) => Some(c2),
                (PointKey::C1 | PointKey::C2, None) => None,
            };
            if let Some(current) = current {
                let mut moved = current + delta;
                if snap {
                    moved = snap_to_grid(moved);
                }
                let moved = clamp_key(key, moved);
                match (key, &mut stroke.control) {
                    (PointKey::P0, _) => stroke.p0 = moved,
                    (PointKey::P1, _) => stroke.p1 = moved,
                    (PointKey::C1, Some((c1, _))) => *c1 = moved,
                    (PointKey::C2, Some((_, c2))) => *c2 = moved,
                    (PointKey::C1 | PointKey::C2, None) => unreachable!(),
                }
            }
        }
        Ok(next)
    }

    /// Merge the selected stroke with its nearest neighbor (see
    /// [`merge::merge`]). On success the sources are removed and the new
    /// path becomes the selection. The outcome is returned so callers can
    /// distinguish a merge from a no-op.
    pub fn merge_selected(&self) -> (Self, MergeOutcome) {
        let Some(selected) = self.selected else {
            return (self.clone(), MergeOutcome::NoOp);
        };
        match merge::merge(selected, &self.shapes, self.next_id) {
            MergeOutcome::NoOp => (self.clone(), MergeOutcome::NoOp),
            MergeOutcome::Merged { path, removed } => {
                let mut next = self.clone();
                next.shapes.retain(|s| !removed.contains(&s.id()));
                next.shapes.push(Shape::Path(path.clone()));
                next.selected = Some(path.id);
                next.next_id += 1;
                (next, MergeOutcome::Merged { path, removed })
            }
        }
    }
}

/// A whole-shape drag in progress: the snapshot taken at drag start.
///
/// Dropping the value cancels the drag; [`DragSession::commit`] consumes
/// it, so a stale snapshot cannot outlive its gesture.
#[derive(Debug, Clone)]
pub struct DragSession {
    snapshot: Shape,
}

impl DragSession {
    pub fn begin(session: &EditSession, id: ShapeId) -> Result<Self, EditError> {
        let shape = session.find(id).ok_or(EditError::UnknownShape(id))?;
        Ok(Self {
            snapshot: shape.clone(),
        })
    }

    pub fn shape_id(&self) -> ShapeId {
        self.snapshot.id()
    }

    /// The dragged shape after moving by the cumulative `total` delta from
    /// drag start. With `snap`, the delta is adjusted so the shape's first
    /// anchor lands on the grid. The delta is then clamped so every anchor
    /// stays on canvas; handles follow the same delta and may leave it.
    pub fn preview(&self, total: DVec2, snap: bool) -> Shape {
        let anchors = self.snapshot.anchors();
        let mut delta = total;
        if snap {
            if let Some(&anchor) = anchors.first() {
                delta = snap_to_grid(anchor + total) - anchor;
            }
        }

        let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
        for a in &anchors {
            min_x = min_x.min(a.x);
            max_x = max_x.max(a.x);
            min_y = min_y.min(a.y);
            max_y = max_y.max(a.y);
        }
        if !anchors.is_empty() {
            delta.x = clamp(delta.x, -min_x, CANVAS_W - max_x);
            delta.y = clamp(delta.y, -min_y, CANVAS_H - max_y);
        }

        self.snapshot.translated(delta)
    }

    /// Finish the drag: replace the dragged shape in `session` with its
    /// final position and discard the snapshot.
    pub fn commit(self, session: &EditSession, total: DVec2, snap: bool) -> EditSession {
        let result = self.preview(total, snap);
        let mut next = session.clone();
        for shape in &mut next.shapes {
            if shape.id() == result.id() {
                *shape = result;
                break;
            }
        }
        next
    }
}
