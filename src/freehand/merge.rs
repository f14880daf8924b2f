//! Fusing two strokes into one tangent-continuous path.
//!
//! The merge re-orients both strokes so the result always flows
//! first stroke → joint → second stroke, then synthesizes a pair of corner
//! handles at the joint along the incoming and outgoing tangents. Handle
//! length is proportional to the shorter adjoining segment, which keeps
//! the visual curvature consistent across strokes of different scale.

use glam::DVec2;

use super::defaults::{CORNER_HANDLE_RATIO, MERGE_EPS};
use super::shape::{PathNode, PathShape, Shape, ShapeId, Stroke};
use crate::log::debug;

/// Result of a merge request. A request that finds nothing close enough
/// (or targets a shape that is already a path) is a no-op, observable but
/// not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum MergeOutcome {
    Merged {
        path: PathShape,
        removed: [ShapeId; 2],
    },
    NoOp,
}

impl MergeOutcome {
    pub fn is_noop(&self) -> bool {
        matches!(self, MergeOutcome::NoOp)
    }
}

/// Which endpoint of a stroke took part in the closest pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum End {
    P0,
    P1,
}

fn endpoint(stroke: &Stroke, end: End) -> DVec2 {
    match end {
        End::P0 => stroke.p0,
        End::P1 => stroke.p1,
    }
}

/// Direction and length of the segment arriving at a stroke's end: from
/// `c2` to `p1` for a cubic, from `p0` to `p1` for a line.
fn incoming(stroke: &Stroke) -> DVec2 {
    match stroke.control {
        Some((_, c2)) => stroke.p1 - c2,
        None => stroke.p1 - stroke.p0,
    }
}

/// Direction and length of the segment leaving a stroke's start: from `p0`
/// to `c1` for a cubic, from `p0` to `p1` for a line.
fn outgoing(stroke: &Stroke) -> DVec2 {
    match stroke.control {
        Some((c1, _)) => c1 - stroke.p0,
        None => stroke.p1 - stroke.p0,
    }
}

/// Merge the selected stroke with the globally closest other stroke.
///
/// Over every other stroke and both endpoints of each, the minimum
/// Euclidean distance to either endpoint of the selected stroke decides
/// the candidate (never the first pair found, so the result is
/// deterministic when several candidates are in range). Exact ties resolve
/// to the earliest shape in `shapes` (creation order). A minimum above
/// [`MERGE_EPS`] is a no-op.
///
/// `new_id` names the merged path if one is produced.
pub fn merge(selected: ShapeId, shapes: &[Shape], new_id: ShapeId) -> MergeOutcome {
    // Only a stroke may initiate a merge.
    let Some(Shape::Stroke(first)) = shapes.iter().find(|s| s.id() == selected) else {
        return MergeOutcome::NoOp;
    };

    let mut best: Option<(&Stroke, End, End, f64)> = None;
    for shape in shapes {
        let Shape::Stroke(candidate) = shape else {
            continue;
        };
        if candidate.id == first.id {
            continue;
        }
        for a_end in [End::P0, End::P1] {
            for b_end in [End::P0, End::P1] {
                let d = endpoint(first, a_end).distance(endpoint(candidate, b_end));
                // Strict < keeps the earliest candidate on exact ties.
                if best.is_none_or(|(_, _, _, bd)| d < bd) {
                    best = Some((candidate, a_end, b_end, d));
                }
            }
        }
    }

    let Some((second, a_end, b_end, d)) = best else {
        return MergeOutcome::NoOp;
    };
    if d > MERGE_EPS {
        debug!("closest endpoint pair is {}px apart; not merging", d);
        return MergeOutcome::NoOp;
    }

    // Re-orient so the selected stroke ends at the joint and the matched
    // stroke starts there.
    let a = if a_end == End::P0 {
        first.reversed()
    } else {
        first.clone()
    };
    let b = if b_end == End::P1 {
        second.reversed()
    } else {
        second.clone()
    };

    let joint = a.p1;

    let tan_in = incoming(&a);
    let tan_out = outgoing(&b);
    let dir_in = tan_in.normalize_or_zero();
    let dir_out = tan_out.normalize_or_zero();

    let handle_len = CORNER_HANDLE_RATIO * tan_in.length().min(tan_out.length());
    let corner_h1 = joint - dir_in * handle_len;
    let corner_h2 = joint + dir_out * handle_len;

    let nodes = vec![
        // Start of the first stroke, keeping its original outgoing handle
        // if it was a curve.
        PathNode {
            p: a.p0,
            h1: None,
            h2: a.control.map(|(c1, _)| c1),
        },
        // The joint, smooth on both sides.
        PathNode {
            p: joint,
            h1: Some(corner_h1),
            h2: Some(corner_h2),
        },
        // End of the second stroke, keeping its original incoming handle.
        PathNode {
            p: b.p1,
            h1: b.control.map(|(_, c2)| c2),
            h2: None,
        },
    ];

    MergeOutcome::Merged {
        path: PathShape { id: new_id, nodes },
        removed: [a.id, b.id],
    }
}
