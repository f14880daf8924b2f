//! Textual serialization of authored data.
//!
//! The authoring workflow is deliberately manual: edited stroke tables,
//! schemas and freehand shapes are emitted as source-shaped text for a
//! human to paste back into the static tables. Every function here is a
//! pure value-to-`String` conversion with no output sink of its own.

use std::fmt::Write;

use glam::DVec2;

use crate::freehand::{EditSession, Shape};
use crate::jamo::{JamoData, JamoKind, StrokeDirection, StrokeRel, Strokes};
use crate::layout::{LayoutSchema, LayoutType};
use crate::types::{Axis, Padding, Part, Split};

/// Shortest display form, for SVG path data: `100` rather than `100.0`,
/// rounded to 1e-4 to keep drag arithmetic artifacts out of the output.
pub(crate) fn fmt_num(v: f64) -> String {
    let rounded = (v * 10_000.0).round() / 10_000.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}

/// A valid `f64` literal for emitted source text: `2.0` rather than `2`.
fn lit(v: f64) -> String {
    let rounded = (v * 10_000.0).round() / 10_000.0;
    if rounded == rounded.trunc() {
        format!("{:.1}", rounded)
    } else {
        format!("{}", rounded)
    }
}

fn dvec_lit(v: DVec2) -> String {
    format!("dvec2({}, {})", lit(v.x), lit(v.y))
}

fn kind_lit(kind: JamoKind) -> &'static str {
    match kind {
        JamoKind::Choseong => "JamoKind::Choseong",
        JamoKind::Jungseong => "JamoKind::Jungseong",
        JamoKind::Jongseong => "JamoKind::Jongseong",
    }
}

fn part_lit(part: Part) -> &'static str {
    match part {
        Part::Ch => "Part::Ch",
        Part::Ju => "Part::Ju",
        Part::JuH => "Part::JuH",
        Part::JuV => "Part::JuV",
        Part::Jo => "Part::Jo",
    }
}

fn layout_lit(layout: LayoutType) -> &'static str {
    match layout {
        LayoutType::ChoseongOnly => "LayoutType::ChoseongOnly",
        LayoutType::JungseongVerticalOnly => "LayoutType::JungseongVerticalOnly",
        LayoutType::JungseongHorizontalOnly => "LayoutType::JungseongHorizontalOnly",
        LayoutType::JungseongMixedOnly => "LayoutType::JungseongMixedOnly",
        LayoutType::ChoseongJungseongVertical => "LayoutType::ChoseongJungseongVertical",
        LayoutType::ChoseongJungseongHorizontal => "LayoutType::ChoseongJungseongHorizontal",
        LayoutType::ChoseongJungseongMixed => "LayoutType::ChoseongJungseongMixed",
        LayoutType::ChoseongJungseongVerticalJongseong => {
            "LayoutType::ChoseongJungseongVerticalJongseong"
        }
        LayoutType::ChoseongJungseongHorizontalJongseong => {
            "LayoutType::ChoseongJungseongHorizontalJongseong"
        }
        LayoutType::ChoseongJungseongMixedJongseong => {
            "LayoutType::ChoseongJungseongMixedJongseong"
        }
    }
}

fn split_lit(split: Split) -> String {
    match split.axis {
        Axis::X => format!("Split::x({})", lit(split.value)),
        Axis::Y => format!("Split::y({})", lit(split.value)),
    }
}

fn stroke_rel_line(out: &mut String, stroke: &StrokeRel, indent: &str) {
    let ctor = match stroke.direction {
        StrokeDirection::Horizontal => "h",
        StrokeDirection::Vertical => "v",
    };
    writeln!(
        out,
        "{}StrokeRel::{}(\"{}\", {}, {}, {}, {}),",
        indent,
        ctor,
        stroke.id,
        lit(stroke.x),
        lit(stroke.y),
        lit(stroke.width),
        lit(stroke.height)
    )
    .unwrap();
}

/// Emit one jamo's glyph data in the shape of the static table entries.
pub fn jamo_source(data: &JamoData) -> String {
    let mut out = String::new();
    writeln!(out, "JamoData {{").unwrap();
    writeln!(out, "    ch: '{}',", data.ch).unwrap();
    writeln!(out, "    kind: {},", kind_lit(data.kind)).unwrap();
    writeln!(
        out,
        "    legacy_box: GlyphBox {{ x: {}, y: {}, width: {}, height: {} }},",
        lit(data.legacy_box.x),
        lit(data.legacy_box.y),
        lit(data.legacy_box.width),
        lit(data.legacy_box.height)
    )
    .unwrap();
    match &data.strokes {
        Strokes::Flat(strokes) => {
            writeln!(out, "    strokes: Strokes::Flat(vec![").unwrap();
            for stroke in strokes {
                stroke_rel_line(&mut out, stroke, "        ");
            }
            writeln!(out, "    ]),").unwrap();
        }
        Strokes::Split {
            horizontal,
            vertical,
        } => {
            writeln!(out, "    strokes: Strokes::Split {{").unwrap();
            writeln!(out, "        horizontal: vec![").unwrap();
            for stroke in horizontal {
                stroke_rel_line(&mut out, stroke, "            ");
            }
            writeln!(out, "        ],").unwrap();
            writeln!(out, "        vertical: vec![").unwrap();
            for stroke in vertical {
                stroke_rel_line(&mut out, stroke, "            ");
            }
            writeln!(out, "        ],").unwrap();
            writeln!(out, "    }},").unwrap();
        }
    }
    out.push_str("},");
    out
}

/// Emit a layout schema in the shape of the default-schema table.
pub fn schema_source(schema: &LayoutSchema) -> String {
    let mut out = String::new();
    writeln!(out, "LayoutSchema {{").unwrap();
    writeln!(out, "    id: {},", layout_lit(schema.id)).unwrap();
    let slots: Vec<&str> = schema.slots.iter().map(|&p| part_lit(p)).collect();
    writeln!(out, "    slots: vec![{}],", slots.join(", ")).unwrap();
    let splits: Vec<String> = schema.splits.iter().map(|&s| split_lit(s)).collect();
    writeln!(out, "    splits: vec![{}],", splits.join(", ")).unwrap();
    match schema.padding {
        Some(Padding {
            top,
            bottom,
            left,
            right,
        }) => writeln!(
            out,
            "    padding: Some(Padding::new({}, {}, {}, {})),",
            lit(top),
            lit(bottom),
            lit(left),
            lit(right)
        )
        .unwrap(),
        None => writeln!(out, "    padding: None,").unwrap(),
    }
    out.push_str("},");
    out
}

fn shape_source(out: &mut String, shape: &Shape) {
    match shape {
        Shape::Stroke(s) => match s.control {
            None => writeln!(
                out,
                "    Shape::Stroke(Stroke::line({}, {}, {})),",
                s.id,
                dvec_lit(s.p0),
                dvec_lit(s.p1)
            )
            .unwrap(),
            Some((c1, c2)) => writeln!(
                out,
                "    Shape::Stroke(Stroke::cubic({}, {}, {}, {}, {})),",
                s.id,
                dvec_lit(s.p0),
                dvec_lit(s.p1),
                dvec_lit(c1),
                dvec_lit(c2)
            )
            .unwrap(),
        },
        Shape::Path(path) => {
            writeln!(out, "    Shape::Path(PathShape {{").unwrap();
            writeln!(out, "        id: {},", path.id).unwrap();
            writeln!(out, "        nodes: vec![").unwrap();
            for node in &path.nodes {
                let h = |v: Option<DVec2>| match v {
                    Some(p) => format!("Some({})", dvec_lit(p)),
                    None => "None".to_string(),
                };
                writeln!(
                    out,
                    "            PathNode {{ p: {}, h1: {}, h2: {} }},",
                    dvec_lit(node.p),
                    h(node.h1),
                    h(node.h2)
                )
                .unwrap();
            }
            writeln!(out, "        ],").unwrap();
            writeln!(out, "    }}),").unwrap();
        }
    }
}

/// Emit an editing session's shape list as pastable source text.
pub fn session_source(session: &EditSession) -> String {
    let mut out = String::from("vec![\n");
    for shape in session.shapes() {
        shape_source(&mut out, shape);
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jamo::{self, JamoKind};
    use glam::dvec2;

    #[test]
    fn jamo_source_matches_table_shape() {
        let data = jamo::glyph(JamoKind::Choseong, 'ㄱ').unwrap();
        insta::assert_snapshot!(jamo_source(data), @r#"
        JamoData {
            ch: 'ㄱ',
            kind: JamoKind::Choseong,
            legacy_box: GlyphBox { x: 2.0, y: 2.0, width: 20.0, height: 20.0 },
            strokes: Strokes::Flat(vec![
                StrokeRel::h("ㄱ-1", 0.1, 0.1, 0.7, 0.15),
                StrokeRel::v("ㄱ-2", 0.85, 0.1, 0.15, 0.8),
            ]),
        },
        "#);
    }

    #[test]
    fn mixed_jamo_source_keeps_both_groups() {
        let data = jamo::glyph(JamoKind::Jungseong, 'ㅢ').unwrap();
        let out = jamo_source(data);
        assert!(out.contains("strokes: Strokes::Split {"));
        assert!(out.contains("horizontal: vec!["));
        assert!(out.contains("vertical: vec!["));
        assert!(out.contains("StrokeRel::h(\"ㅢ-h1\""));
        assert!(out.contains("StrokeRel::v(\"ㅢ-v1\""));
    }

    #[test]
    fn schema_source_round_trips_the_default_table_shape() {
        let schema = LayoutType::ChoseongJungseongVertical.default_schema();
        insta::assert_snapshot!(schema_source(&schema), @r#"
        LayoutSchema {
            id: LayoutType::ChoseongJungseongVertical,
            slots: vec![Part::Ch, Part::Ju],
            splits: vec![Split::x(0.63)],
            padding: Some(Padding::new(0.1, 0.1, 0.08, 0.08)),
        },
        "#);
    }

    #[test]
    fn session_source_serializes_all_shape_kinds() {
        let session = EditSession::new();
        let (session, a) = session.add_stroke(dvec2(0.0, 100.0), dvec2(100.0, 100.0));
        let (session, _) = session.add_stroke(dvec2(100.0, 100.0), dvec2(100.0, 200.0));
        let (session, c) = session.add_stroke(dvec2(300.0, 300.0), dvec2(400.0, 300.0));
        let session = session.with_selection(Some(c));
        let session = session.toggle_cubic().unwrap();
        let session = session.with_selection(Some(a));
        let (session, _) = session.merge_selected();

        let out = session_source(&session);
        assert!(out.starts_with("vec![\n"));
        assert!(out.contains("Shape::Stroke(Stroke::cubic(3, dvec2(300.0, 300.0)"));
        assert!(out.contains("Shape::Path(PathShape {"));
        // The synthesized corner handles: both source segments are 100
        // long, so the handles sit 40 from the joint.
        assert!(out.contains("h1: Some(dvec2(60.0, 100.0))"));
        assert!(out.contains("h2: Some(dvec2(100.0, 140.0))"));
        assert!(out.ends_with("]"));
    }

    #[test]
    fn numbers_round_to_four_decimals() {
        assert_eq!(fmt_num(100.0), "100");
        assert_eq!(fmt_num(0.39000000000000007), "0.39");
        assert_eq!(lit(2.0), "2.0");
        assert_eq!(lit(0.15), "0.15");
        assert_eq!(lit(0.55000000000000004), "0.55");
    }
}
