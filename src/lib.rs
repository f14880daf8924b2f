//! Hangul syllable-block composition.
//!
//! A syllable block is assembled from up to three jamo glyph fragments
//! placed into slots of a fixed canvas. This crate owns the geometric
//! core of that pipeline:
//!
//! - [`layout`]: resolves a declarative schema (axis splits + padding)
//!   into normalized, non-overlapping boxes for each slot, for all ten
//!   structural syllable layouts.
//! - [`jamo`]: the authored glyph tables, vowel shape classes, and
//!   syllable decomposition/classification.
//! - [`compose`]: maps every stroke of a decomposed syllable through its
//!   slot box into absolute canvas rectangles, holding stroke thickness
//!   constant under non-uniform scaling.
//! - [`freehand`]: line/cubic stroke primitives for authoring new glyph
//!   fragments, the tangent-continuous merge into multi-node paths, and
//!   the immutable editing session.
//! - [`serialize`]: source-shaped text output for the manual copy-back
//!   authoring workflow.
//!
//! Everything is a pure function over immutable values; host UIs hold the
//! state and call in with plain snapshots.
//!
//! ```
//! use hanru::{Scaler, Syllable, calculate_boxes, compose};
//!
//! let syllable = Syllable::decompose('가').unwrap();
//! let schema = syllable.layout_type().default_schema();
//! let boxes = calculate_boxes(&schema);
//! let composition = compose(&syllable, &boxes, &Scaler::default());
//! assert!(!composition.rects.is_empty());
//! ```

pub mod compose;
pub mod errors;
pub mod freehand;
pub mod jamo;
pub mod layout;
pub mod log;
pub mod serialize;
pub mod types;

pub use compose::{Composition, Scaler, StrokeRect, compose};
pub use errors::EditError;
pub use freehand::{
    EditSession, MergeOutcome, PathCommand, PathNode, PathShape, Shape, Stroke, merge,
};
pub use jamo::{JamoData, JamoKind, StrokeRel, Syllable, VowelClass};
pub use layout::{LayoutSchema, LayoutType, SlotBoxes, calculate_boxes};
pub use types::{Axis, BoxConfig, Padding, Part, Split};

/// Render a single character end to end with the default schemas: the
/// composition for a syllable or lone jamo, `None` for anything that is
/// not Hangul.
pub fn render_syllable(ch: char) -> Option<Composition> {
    let syllable = Syllable::decompose(ch)?;
    let schema = syllable.layout_type().default_schema();
    let boxes = calculate_boxes(&schema);
    Some(compose(&syllable, &boxes, &Scaler::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_a_representative_of_every_layout() {
        // All characters here decompose into jamo with authored glyphs.
        let cases = [
            ('가', LayoutType::ChoseongJungseongVertical),
            ('고', LayoutType::ChoseongJungseongHorizontal),
            ('과', LayoutType::ChoseongJungseongMixed),
            ('간', LayoutType::ChoseongJungseongVerticalJongseong),
            ('곰', LayoutType::ChoseongJungseongHorizontalJongseong),
            ('관', LayoutType::ChoseongJungseongMixedJongseong),
            ('ㄱ', LayoutType::ChoseongOnly),
            ('ㅣ', LayoutType::JungseongVerticalOnly),
            ('ㅡ', LayoutType::JungseongHorizontalOnly),
            ('ㅢ', LayoutType::JungseongMixedOnly),
        ];
        for (ch, expected) in cases {
            let comp = render_syllable(ch).unwrap();
            assert_eq!(comp.layout, expected, "wrong layout for {}", ch);
            assert!(!comp.rects.is_empty(), "{} rendered no strokes", ch);
        }
    }

    #[test]
    fn non_hangul_renders_nothing() {
        assert!(render_syllable('A').is_none());
        assert!(render_syllable('漢').is_none());
    }

    #[test]
    fn rendering_is_deterministic() {
        let first = render_syllable('관').unwrap();
        let second = render_syllable('관').unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn every_rect_stays_on_the_canvas() {
        for ch in ['가', '고', '과', '간', '곰', '관'] {
            let comp = render_syllable(ch).unwrap();
            for rect in &comp.rects {
                assert!(rect.x >= 0.0 && rect.y >= 0.0, "{} rect {:?}", ch, rect);
                assert!(
                    rect.x + rect.width <= compose::VIEW_BOX_SIZE + 1e-9,
                    "{} rect {:?} overflows",
                    ch,
                    rect
                );
                assert!(
                    rect.y + rect.height <= compose::VIEW_BOX_SIZE + 1e-9,
                    "{} rect {:?} overflows",
                    ch,
                    rect
                );
            }
        }
    }
}
