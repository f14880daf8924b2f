//! End-to-end editing workflow over the public API: author strokes, bend
//! one into a curve, drag, merge, and serialize the result.

use glam::dvec2;
use hanru::freehand::defaults::{CANVAS_W, GRID};
use hanru::freehand::{DragSession, EditSession, MergeOutcome, PointKey, Shape};
use hanru::serialize;

#[test]
fn author_merge_and_serialize() {
    let session = EditSession::new();

    // Two straight strokes meeting at (260, 240), like the first two
    // strokes of a ㄱ.
    let (session, horizontal) = session.add_stroke(dvec2(120.0, 240.0), dvec2(260.0, 240.0));
    let (session, vertical) = session.add_stroke(dvec2(260.0, 240.0), dvec2(260.0, 360.0));

    // Bend the vertical stroke into a cubic and pull its first control.
    let session = session.with_selection(Some(vertical));
    let session = session.toggle_cubic().unwrap();
    let session = session
        .move_point(vertical, PointKey::C1, dvec2(40.0, 0.0), false)
        .unwrap();
    let session = session
        .move_point(vertical, PointKey::C2, dvec2(0.0, -20.0), false)
        .unwrap();

    // Merge from the horizontal stroke; the joint is its end point.
    let session = session.with_selection(Some(horizontal));
    let (session, outcome) = session.merge_selected();
    let MergeOutcome::Merged { removed, .. } = outcome else {
        panic!("expected the touching strokes to merge");
    };
    assert_eq!(removed, [horizontal, vertical]);
    assert_eq!(session.shapes().len(), 1);

    let path_id = session.selected().expect("merge selects the new path");
    let Some(Shape::Path(path)) = session.find(path_id) else {
        panic!("merged shape is a path");
    };
    assert_eq!(path.nodes.len(), 3);
    assert_eq!(path.nodes[0].p, dvec2(120.0, 240.0));
    assert_eq!(path.nodes[1].p, dvec2(260.0, 240.0));
    assert_eq!(path.nodes[2].p, dvec2(260.0, 360.0));
    // The curve's incoming handle survived the merge.
    assert_eq!(path.nodes[2].h1, Some(dvec2(260.0, 340.0)));

    // The path renders as a move plus two curves (the joint is smooth on
    // both sides, the first segment picked up no outgoing handle).
    let d = session.find(path_id).unwrap().svg_path_d();
    assert!(d.starts_with("M 120 240 L 260 240 C "));

    // Serialized text is pastable source in the same shape as the tables.
    let out = serialize::session_source(&session);
    assert!(out.contains("Shape::Path(PathShape {"));
    assert!(out.contains("PathNode { p: dvec2(120.0, 240.0), h1: None, h2: None },"));
}

#[test]
fn drag_stays_cumulative_and_clamped() {
    let session = EditSession::new();
    let (session, id) = session.add_stroke(dvec2(100.0, 100.0), dvec2(220.0, 100.0));

    let drag = DragSession::begin(&session, id).unwrap();

    // A long wander that nets out to (+60, +40); only the total matters.
    let totals = [
        dvec2(200.0, -30.0),
        dvec2(-80.0, 90.0),
        dvec2(60.0, 40.0),
    ];
    let mut last = None;
    for total in totals {
        last = Some(drag.preview(total, false));
    }
    let Some(Shape::Stroke(s)) = last else {
        panic!("stroke expected");
    };
    assert_eq!(s.p0, dvec2(160.0, 140.0));
    assert_eq!(s.p1, dvec2(280.0, 140.0));

    // Snapped commit lands the first anchor on the grid.
    let session = drag.commit(&session, dvec2(63.0, 41.0), true);
    let Some(Shape::Stroke(s)) = session.find(id) else {
        panic!("stroke missing");
    };
    assert_eq!(s.p0.x % GRID, 0.0);
    assert_eq!(s.p0.y % GRID, 0.0);

    // Dragging off the right edge pins the far anchor to the canvas.
    let drag = DragSession::begin(&session, id).unwrap();
    let Shape::Stroke(pinned) = drag.preview(dvec2(1e6, 0.0), false) else {
        panic!("stroke expected");
    };
    assert_eq!(pinned.p1.x, CANVAS_W);
}

#[test]
fn merge_noop_is_observable_and_harmless() {
    let session = EditSession::new();
    let (session, a) = session.add_stroke(dvec2(0.0, 0.0), dvec2(100.0, 0.0));
    let (session, _) = session.add_stroke(dvec2(200.0, 200.0), dvec2(300.0, 200.0));
    let session = session.with_selection(Some(a));

    let before = session.clone();
    let (after, outcome) = session.merge_selected();
    assert!(outcome.is_noop());
    assert_eq!(after, before);
}
