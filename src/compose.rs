//! Glyph composition: normalized strokes into absolute canvas rectangles.
//!
//! Every authored stroke is a fraction of its jamo's slot box. Composition
//! places the slot boxes (resolved by [`crate::layout`]) on a view box and
//! maps each stroke through its box, except that one dimension, chosen by
//! the stroke's direction, is held at a fixed visual thickness instead of
//! scaling with the box. Naive bounding-box stretching makes strokes fat
//! in wide boxes and hairline in short ones; holding the cross dimension
//! keeps the glyph weight even across all ten layouts.

use crate::jamo::{self, JamoKind, StrokeDirection, StrokeRel, Strokes, Syllable};
use crate::layout::{LayoutType, SlotBoxes};
use crate::log::{debug, warn};
use crate::types::{BoxConfig, Part};

/// Default view box edge, in canvas units.
pub const VIEW_BOX_SIZE: f64 = 100.0;

/// Rendered stroke thickness at the default view box size.
pub const STROKE_THICKNESS: f64 = 2.0;

/// Converts normalized unit-square coordinates to canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaler {
    view: f64,
}

impl Scaler {
    pub fn new(view: f64) -> Self {
        Self { view }
    }

    /// Scale a normalized length to canvas units.
    pub fn len(&self, v: f64) -> f64 {
        v * self.view
    }

    /// The held stroke thickness in canvas units. Proportional to the view
    /// box, never to any slot box.
    pub fn thickness(&self) -> f64 {
        STROKE_THICKNESS * self.view / VIEW_BOX_SIZE
    }
}

impl Default for Scaler {
    fn default() -> Self {
        Self::new(VIEW_BOX_SIZE)
    }
}

/// One stroke placed on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeRect {
    pub id: String,
    pub part: Part,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A fully composed syllable: the layout that was applied and one absolute
/// rectangle per stroke of every present jamo.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub layout: LayoutType,
    pub rects: Vec<StrokeRect>,
}

/// Compose a decomposed syllable against resolved slot boxes.
///
/// Jamo without an authored glyph are skipped, leaving their slot empty;
/// this is how unknown characters degrade rather than fail.
pub fn compose(syllable: &Syllable, boxes: &SlotBoxes, scaler: &Scaler) -> Composition {
    let layout = syllable.layout_type();
    let mut rects = Vec::new();

    if let Some(ch) = syllable.choseong {
        map_slot(&mut rects, JamoKind::Choseong, ch, Part::Ch, boxes, scaler);
    }
    if let Some(ch) = syllable.jungseong {
        map_jungseong(&mut rects, ch, boxes, scaler);
    }
    if let Some(ch) = syllable.jongseong {
        map_slot(&mut rects, JamoKind::Jongseong, ch, Part::Jo, boxes, scaler);
    }

    Composition { layout, rects }
}

/// Map a single-box jamo (initial or final) into its slot.
fn map_slot(
    rects: &mut Vec<StrokeRect>,
    kind: JamoKind,
    ch: char,
    part: Part,
    boxes: &SlotBoxes,
    scaler: &Scaler,
) {
    let Some(data) = jamo::glyph(kind, ch) else {
        debug!("no authored glyph for {:?} {}; slot left empty", kind, ch);
        return;
    };
    let Some(bounds) = boxes.get(part) else {
        debug!("layout has no {} box; skipping {}", part, ch);
        return;
    };
    for stroke in data.strokes.all() {
        rects.push(stroke_rect(stroke, part, bounds, scaler));
    }
}

/// Map a vowel. Mixed vowels own two disjoint stroke groups, each mapped
/// against its own sub-box; the combined preview box is never used here.
fn map_jungseong(rects: &mut Vec<StrokeRect>, ch: char, boxes: &SlotBoxes, scaler: &Scaler) {
    let Some(data) = jamo::glyph(JamoKind::Jungseong, ch) else {
        debug!("no authored glyph for vowel {}; slot left empty", ch);
        return;
    };

    match &data.strokes {
        Strokes::Flat(strokes) => {
            let Some(bounds) = boxes.get(Part::Ju) else {
                warn!("vowel {} has flat strokes but the layout has no JU box", ch);
                return;
            };
            for stroke in strokes {
                rects.push(stroke_rect(stroke, Part::Ju, bounds, scaler));
            }
        }
        Strokes::Split {
            horizontal,
            vertical,
        } => {
            for (group, part) in [(horizontal, Part::JuH), (vertical, Part::JuV)] {
                let Some(bounds) = boxes.get(part) else {
                    warn!("mixed vowel {} but the layout has no {} box", ch, part);
                    continue;
                };
                for stroke in group {
                    rects.push(stroke_rect(stroke, part, bounds, scaler));
                }
            }
        }
    }
}

/// Place one stroke. The position and the lengthwise dimension scale with
/// the box; the cross dimension is the held thickness.
fn stroke_rect(stroke: &StrokeRel, part: Part, bounds: BoxConfig, scaler: &Scaler) -> StrokeRect {
    let x = scaler.len(bounds.x + stroke.x * bounds.width);
    let y = scaler.len(bounds.y + stroke.y * bounds.height);
    let (width, height) = match stroke.direction {
        StrokeDirection::Horizontal => {
            (scaler.len(stroke.width * bounds.width), scaler.thickness())
        }
        StrokeDirection::Vertical => {
            (scaler.thickness(), scaler.len(stroke.height * bounds.height))
        }
    };
    StrokeRect {
        id: stroke.id.clone(),
        part,
        x,
        y,
        width,
        height,
    }
}
