//! Freehand primitives and path command emission.
//!
//! Two shape kinds exist: a [`Stroke`] (one segment, line or cubic) and a
//! [`PathShape`] (multi-node, produced by merging). They form a closed sum
//! type so every consumer matches exhaustively; adding a third primitive
//! kind is a compile-time-checked change.

use glam::DVec2;

use crate::serialize::fmt_num;

/// Identifier for a shape within one editing session.
pub type ShapeId = u64;

/// A single authored segment: a line between `p0` and `p1`, or a cubic
/// Bézier when the control pair is present (`c1` near `p0`, `c2` near
/// `p1`). The pair is all-or-nothing; a half-specified cubic is
/// unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub id: ShapeId,
    pub p0: DVec2,
    pub p1: DVec2,
    pub control: Option<(DVec2, DVec2)>,
}

impl Stroke {
    pub fn line(id: ShapeId, p0: DVec2, p1: DVec2) -> Self {
        Self {
            id,
            p0,
            p1,
            control: None,
        }
    }

    pub fn cubic(id: ShapeId, p0: DVec2, p1: DVec2, c1: DVec2, c2: DVec2) -> Self {
        Self {
            id,
            p0,
            p1,
            control: Some((c1, c2)),
        }
    }

    pub fn is_cubic(&self) -> bool {
        self.control.is_some()
    }

    /// The same stroke flowing the other way: endpoints swapped, controls
    /// swapped so the curve is unchanged.
    pub fn reversed(&self) -> Stroke {
        Stroke {
            id: self.id,
            p0: self.p1,
            p1: self.p0,
            control: self.control.map(|(c1, c2)| (c2, c1)),
        }
    }

    pub fn translated(&self, delta: DVec2) -> Stroke {
        Stroke {
            id: self.id,
            p0: self.p0 + delta,
            p1: self.p1 + delta,
            control: self.control.map(|(c1, c2)| (c1 + delta, c2 + delta)),
        }
    }
}

/// One anchor of a merged path. `h1` is the incoming control point (end of
/// the previous segment), `h2` the outgoing one (start of the next).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathNode {
    pub p: DVec2,
    pub h1: Option<DVec2>,
    pub h2: Option<DVec2>,
}

impl PathNode {
    pub fn new(p: DVec2) -> Self {
        Self {
            p,
            h1: None,
            h2: None,
        }
    }

    fn translated(&self, delta: DVec2) -> PathNode {
        PathNode {
            p: self.p + delta,
            h1: self.h1.map(|h| h + delta),
            h2: self.h2.map(|h| h + delta),
        }
    }
}

/// An ordered sequence of anchors. The segment between two consecutive
/// nodes is a cubic when the left node has an outgoing handle and the
/// right node an incoming one; a line otherwise. A path always has at
/// least one node; a single node renders nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct PathShape {
    pub id: ShapeId,
    pub nodes: Vec<PathNode>,
}

impl PathShape {
    pub fn translated(&self, delta: DVec2) -> PathShape {
        PathShape {
            id: self.id,
            nodes: self.nodes.iter().map(|n| n.translated(delta)).collect(),
        }
    }
}

/// Any freehand shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Stroke(Stroke),
    Path(PathShape),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Stroke(s) => s.id,
            Shape::Path(p) => p.id,
        }
    }

    /// Anchor points only (no control handles). These are what must stay
    /// on canvas when the shape moves.
    pub fn anchors(&self) -> Vec<DVec2> {
        match self {
            Shape::Stroke(s) => vec![s.p0, s.p1],
            Shape::Path(p) => p.nodes.iter().map(|n| n.p).collect(),
        }
    }

    pub fn translated(&self, delta: DVec2) -> Shape {
        match self {
            Shape::Stroke(s) => Shape::Stroke(s.translated(delta)),
            Shape::Path(p) => Shape::Path(p.translated(delta)),
        }
    }

    /// Emit absolute draw commands for this shape.
    pub fn to_path_data(&self) -> Vec<PathCommand> {
        match self {
            Shape::Stroke(s) => {
                let mut cmds = vec![PathCommand::MoveTo(s.p0)];
                match s.control {
                    Some((c1, c2)) => cmds.push(PathCommand::CurveTo {
                        c1,
                        c2,
                        to: s.p1,
                    }),
                    None => cmds.push(PathCommand::LineTo(s.p1)),
                }
                cmds
            }
            Shape::Path(path) => {
                let Some(first) = path.nodes.first() else {
                    return Vec::new();
                };
                let mut cmds = vec![PathCommand::MoveTo(first.p)];
                for pair in path.nodes.windows(2) {
                    let (a, b) = (&pair[0], &pair[1]);
                    match (a.h2, b.h1) {
                        (Some(c1), Some(c2)) => cmds.push(PathCommand::CurveTo {
                            c1,
                            c2,
                            to: b.p,
                        }),
                        _ => cmds.push(PathCommand::LineTo(b.p)),
                    }
                }
                cmds
            }
        }
    }

    /// The SVG `d` attribute for this shape.
    pub fn svg_path_d(&self) -> String {
        let mut d = String::new();
        for cmd in self.to_path_data() {
            if !d.is_empty() {
                d.push(' ');
            }
            match cmd {
                PathCommand::MoveTo(p) => {
                    d.push_str(&format!("M {} {}", fmt_num(p.x), fmt_num(p.y)));
                }
                PathCommand::LineTo(p) => {
                    d.push_str(&format!("L {} {}", fmt_num(p.x), fmt_num(p.y)));
                }
                PathCommand::CurveTo { c1, c2, to } => {
                    d.push_str(&format!(
                        "C {} {} {} {} {} {}",
                        fmt_num(c1.x),
                        fmt_num(c1.y),
                        fmt_num(c2.x),
                        fmt_num(c2.y),
                        fmt_num(to.x),
                        fmt_num(to.y)
                    ));
                }
            }
        }
        d
    }
}

/// An absolute draw command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(DVec2),
    LineTo(DVec2),
    CurveTo { c1: DVec2, c2: DVec2, to: DVec2 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn reversing_a_cubic_swaps_controls() {
        let s = Stroke::cubic(
            1,
            dvec2(0.0, 0.0),
            dvec2(100.0, 0.0),
            dvec2(20.0, 10.0),
            dvec2(80.0, -10.0),
        );
        let r = s.reversed();
        assert_eq!(r.p0, dvec2(100.0, 0.0));
        assert_eq!(r.p1, dvec2(0.0, 0.0));
        assert_eq!(r.control, Some((dvec2(80.0, -10.0), dvec2(20.0, 10.0))));
        // Reversing twice is the identity.
        assert_eq!(r.reversed(), s);
    }

    #[test]
    fn line_stroke_emits_move_and_line() {
        let s = Shape::Stroke(Stroke::line(1, dvec2(10.0, 20.0), dvec2(30.0, 40.0)));
        assert_eq!(
            s.to_path_data(),
            vec![
                PathCommand::MoveTo(dvec2(10.0, 20.0)),
                PathCommand::LineTo(dvec2(30.0, 40.0)),
            ]
        );
        assert_eq!(s.svg_path_d(), "M 10 20 L 30 40");
    }

    #[test]
    fn cubic_stroke_emits_curve() {
        let s = Shape::Stroke(Stroke::cubic(
            1,
            dvec2(0.0, 0.0),
            dvec2(10.0, 0.0),
            dvec2(2.0, 5.0),
            dvec2(8.0, 5.0),
        ));
        assert_eq!(s.svg_path_d(), "M 0 0 C 2 5 8 5 10 0");
    }

    #[test]
    fn path_mixes_lines_and_curves_per_handle_presence() {
        let path = Shape::Path(PathShape {
            id: 1,
            nodes: vec![
                PathNode {
                    p: dvec2(0.0, 0.0),
                    h1: None,
                    h2: None,
                },
                PathNode {
                    p: dvec2(50.0, 0.0),
                    h1: Some(dvec2(40.0, 0.0)),
                    h2: Some(dvec2(60.0, 0.0)),
                },
                PathNode {
                    p: dvec2(100.0, 50.0),
                    h1: Some(dvec2(100.0, 30.0)),
                    h2: None,
                },
            ],
        });
        let cmds = path.to_path_data();
        assert_eq!(cmds.len(), 3);
        // First segment: left node has no outgoing handle, so a line even
        // though the right node carries an incoming one.
        assert!(matches!(cmds[1], PathCommand::LineTo(_)));
        assert!(matches!(cmds[2], PathCommand::CurveTo { .. }));
    }

    #[test]
    fn single_node_path_renders_only_the_move() {
        let path = Shape::Path(PathShape {
            id: 1,
            nodes: vec![PathNode::new(dvec2(5.0, 5.0))],
        });
        assert_eq!(path.to_path_data(), vec![PathCommand::MoveTo(dvec2(5.0, 5.0))]);
    }

    #[test]
    fn translation_moves_handles_with_anchors() {
        let path = PathShape {
            id: 1,
            nodes: vec![PathNode {
                p: dvec2(10.0, 10.0),
                h1: Some(dvec2(5.0, 10.0)),
                h2: None,
            }],
        };
        let moved = path.translated(dvec2(3.0, -2.0));
        assert_eq!(moved.nodes[0].p, dvec2(13.0, 8.0));
        assert_eq!(moved.nodes[0].h1, Some(dvec2(8.0, 8.0)));
    }
}
