//! Slot layout resolution.
//!
//! A [`LayoutSchema`] describes one of the ten structural Hangul layouts
//! declaratively: which slots it has, an ordered list of axis splits, and a
//! padding. [`calculate_boxes`] turns a schema into concrete normalized
//! boxes, one per slot, using a closed-form recipe per layout kind. The ten
//! syllable shapes are a fixed, enumerable set, so no iterative layout
//! solver is needed: each recipe partitions the padded interior directly.
//!
//! The resolver never validates split or padding ranges. A degenerate
//! schema produces degenerate boxes; keeping values sane is the job of the
//! editing boundary (see [`crate::freehand::session`]).

use std::fmt;

use crate::types::{Axis, BoxConfig, Padding, Part, Split};

/// Padding applied when a multi-slot schema has none of its own.
pub const DEFAULT_PADDING: Padding = Padding::uniform(0.05);

/// Wider padding reserved for single-slot (split-less) schemas.
pub const SINGLE_SLOT_PADDING: Padding = Padding::uniform(0.15);

/// Gap on each side of a cut separating slots in two-axis layouts.
const SLOT_GAP: f64 = 0.02;

/// Tighter gap between stacked bands in the three-band layout.
const BAND_GAP: f64 = 0.01;

/// The ten structural syllable layouts.
///
/// Which one applies to a syllable depends on which slots are present and,
/// when a vowel is present, on its shape class (see
/// [`crate::jamo::VowelClass`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutType {
    ChoseongOnly,
    JungseongVerticalOnly,
    JungseongHorizontalOnly,
    JungseongMixedOnly,
    ChoseongJungseongVertical,
    ChoseongJungseongHorizontal,
    ChoseongJungseongMixed,
    ChoseongJungseongVerticalJongseong,
    ChoseongJungseongHorizontalJongseong,
    ChoseongJungseongMixedJongseong,
}

impl LayoutType {
    pub const ALL: [LayoutType; 10] = [
        LayoutType::ChoseongOnly,
        LayoutType::JungseongVerticalOnly,
        LayoutType::JungseongHorizontalOnly,
        LayoutType::JungseongMixedOnly,
        LayoutType::ChoseongJungseongVertical,
        LayoutType::ChoseongJungseongHorizontal,
        LayoutType::ChoseongJungseongMixed,
        LayoutType::ChoseongJungseongVerticalJongseong,
        LayoutType::ChoseongJungseongHorizontalJongseong,
        LayoutType::ChoseongJungseongMixedJongseong,
    ];

    /// The stable kebab-case identifier used in serialized schema tables.
    pub fn id(self) -> &'static str {
        match self {
            LayoutType::ChoseongOnly => "choseong-only",
            LayoutType::JungseongVerticalOnly => "jungseong-vertical-only",
            LayoutType::JungseongHorizontalOnly => "jungseong-horizontal-only",
            LayoutType::JungseongMixedOnly => "jungseong-mixed-only",
            LayoutType::ChoseongJungseongVertical => "choseong-jungseong-vertical",
            LayoutType::ChoseongJungseongHorizontal => "choseong-jungseong-horizontal",
            LayoutType::ChoseongJungseongMixed => "choseong-jungseong-mixed",
            LayoutType::ChoseongJungseongVerticalJongseong => {
                "choseong-jungseong-vertical-jongseong"
            }
            LayoutType::ChoseongJungseongHorizontalJongseong => {
                "choseong-jungseong-horizontal-jongseong"
            }
            LayoutType::ChoseongJungseongMixedJongseong => "choseong-jungseong-mixed-jongseong",
        }
    }

    /// The hand-tuned default schema for this layout. These values were
    /// authored interactively and are part of the contract; editors start
    /// from them and reset back to them.
    pub fn default_schema(self) -> LayoutSchema {
        match self {
            LayoutType::ChoseongOnly => LayoutSchema {
                id: self,
                slots: vec![Part::Ch],
                splits: vec![],
                padding: Some(Padding::uniform(0.15)),
            },
            LayoutType::JungseongVerticalOnly => LayoutSchema {
                id: self,
                slots: vec![Part::Ju],
                splits: vec![],
                padding: Some(Padding::new(0.1, 0.1, 0.25, 0.25)),
            },
            LayoutType::JungseongHorizontalOnly => LayoutSchema {
                id: self,
                slots: vec![Part::Ju],
                splits: vec![],
                padding: Some(Padding::new(0.3, 0.3, 0.1, 0.1)),
            },
            LayoutType::JungseongMixedOnly => LayoutSchema {
                id: self,
                slots: vec![Part::JuH, Part::JuV],
                splits: vec![Split::x(0.5), Split::y(0.5)],
                padding: Some(Padding::uniform(0.15)),
            },
            LayoutType::ChoseongJungseongVertical => LayoutSchema {
                id: self,
                slots: vec![Part::Ch, Part::Ju],
                splits: vec![Split::x(0.63)],
                padding: Some(Padding::new(0.1, 0.1, 0.08, 0.08)),
            },
            LayoutType::ChoseongJungseongHorizontal => LayoutSchema {
                id: self,
                slots: vec![Part::Ch, Part::Ju],
                splits: vec![Split::y(0.55)],
                padding: Some(Padding::new(0.05, 0.05, 0.1, 0.1)),
            },
            LayoutType::ChoseongJungseongMixed => LayoutSchema {
                id: self,
                slots: vec![Part::Ch, Part::JuH, Part::JuV],
                splits: vec![Split::x(0.58), Split::y(0.55)],
                padding: Some(Padding::new(0.1, 0.1, 0.08, 0.07)),
            },
            LayoutType::ChoseongJungseongVerticalJongseong => LayoutSchema {
                id: self,
                slots: vec![Part::Ch, Part::Ju, Part::Jo],
                splits: vec![Split::x(0.62), Split::y(0.55)],
                padding: Some(Padding::new(0.05, 0.05, 0.08, 0.08)),
            },
            LayoutType::ChoseongJungseongHorizontalJongseong => LayoutSchema {
                id: self,
                slots: vec![Part::Ch, Part::Ju, Part::Jo],
                splits: vec![Split::y(0.37), Split::y(0.60)],
                padding: Some(Padding::new(0.02, 0.03, 0.1, 0.1)),
            },
            LayoutType::ChoseongJungseongMixedJongseong => LayoutSchema {
                id: self,
                slots: vec![Part::Ch, Part::JuH, Part::JuV, Part::Jo],
                splits: vec![Split::x(0.58), Split::y(0.55), Split::y(0.76)],
                padding: Some(Padding::new(0.05, 0.05, 0.08, 0.06)),
            },
        }
    }
}

impl fmt::Display for LayoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A declarative layout description: slots, ordered splits, padding.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSchema {
    pub id: LayoutType,
    pub slots: Vec<Part>,
    pub splits: Vec<Split>,
    pub padding: Option<Padding>,
}

impl LayoutSchema {
    /// First split on `axis`, if any.
    fn split(&self, axis: Axis) -> Option<f64> {
        self.splits.iter().find(|s| s.axis == axis).map(|s| s.value)
    }

    /// `n`-th split on `axis` in schema order. Order matters: in the
    /// three-band and mixed-with-jongseong layouts the second Y split
    /// subdivides a region bounded by the first.
    fn nth_split(&self, axis: Axis, n: usize) -> Option<f64> {
        self.splits
            .iter()
            .filter(|s| s.axis == axis)
            .nth(n)
            .map(|s| s.value)
    }
}

/// Resolved boxes for a schema, one per slot that the layout defines.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlotBoxes {
    ch: Option<BoxConfig>,
    ju: Option<BoxConfig>,
    ju_h: Option<BoxConfig>,
    ju_v: Option<BoxConfig>,
    jo: Option<BoxConfig>,
}

impl SlotBoxes {
    pub fn get(&self, part: Part) -> Option<BoxConfig> {
        match part {
            Part::Ch => self.ch,
            Part::Ju => self.ju,
            Part::JuH => self.ju_h,
            Part::JuV => self.ju_v,
            Part::Jo => self.jo,
        }
    }

    fn set(&mut self, part: Part, config: BoxConfig) {
        match part {
            Part::Ch => self.ch = Some(config),
            Part::Ju => self.ju = Some(config),
            Part::JuH => self.ju_h = Some(config),
            Part::JuV => self.ju_v = Some(config),
            Part::Jo => self.jo = Some(config),
        }
    }

    /// Iterate over assigned slots in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Part, BoxConfig)> + '_ {
        Part::ALL
            .iter()
            .filter_map(|&part| self.get(part).map(|b| (part, b)))
    }

    /// Union of the two mixed-vowel sub-boxes. Exposed for preview and
    /// selection outlines only; per-stroke mapping always uses the
    /// individual `JuH`/`JuV` boxes.
    pub fn jungseong_union(&self) -> Option<BoxConfig> {
        match (self.ju_h, self.ju_v) {
            (Some(h), Some(v)) => Some(h.union(v)),
            (Some(b), None) | (None, Some(b)) => Some(b),
            (None, None) => self.ju,
        }
    }
}

/// Compute the normalized box for every slot of `schema`.
///
/// Deterministic and infallible: degenerate splits yield degenerate boxes
/// rather than errors.
pub fn calculate_boxes(schema: &LayoutSchema) -> SlotBoxes {
    let padding = schema.padding.unwrap_or(DEFAULT_PADDING);

    if schema.splits.is_empty() {
        return single_slot(schema);
    }

    match schema.id {
        LayoutType::ChoseongJungseongVertical => vertical_split(schema, padding),
        LayoutType::ChoseongJungseongHorizontal => horizontal_split(schema, padding),
        LayoutType::ChoseongJungseongVerticalJongseong => {
            vertical_with_jongseong(schema, padding)
        }
        LayoutType::ChoseongJungseongHorizontalJongseong => {
            horizontal_with_jongseong(schema, padding)
        }
        LayoutType::ChoseongJungseongMixed => mixed_jungseong(schema, padding),
        LayoutType::ChoseongJungseongMixedJongseong => {
            mixed_jungseong_with_jongseong(schema, padding)
        }
        LayoutType::JungseongMixedOnly => mixed_jungseong_only(schema, padding),
        // Single-slot layouts carrying stray splits still resolve as a
        // single padded slot.
        LayoutType::ChoseongOnly
        | LayoutType::JungseongVerticalOnly
        | LayoutType::JungseongHorizontalOnly => single_slot(schema),
    }
}

/// Whole padded interior assigned to the schema's one slot.
fn single_slot(schema: &LayoutSchema) -> SlotBoxes {
    let mut boxes = SlotBoxes::default();
    let padding = schema.padding.unwrap_or(SINGLE_SLOT_PADDING);
    if let Some(&slot) = schema.slots.first() {
        boxes.set(slot, padding.to_box());
    }
    boxes
}

/// Choseong + vertical vowel: one X cut, CH left, JU right, full height.
fn vertical_split(schema: &LayoutSchema, padding: Padding) -> SlotBoxes {
    let split_x = schema.split(Axis::X).unwrap_or(0.6);
    let mut boxes = SlotBoxes::default();
    boxes.set(
        Part::Ch,
        BoxConfig::new(
            padding.left,
            padding.top,
            split_x - padding.left - padding.right * 0.5,
            1.0 - padding.top - padding.bottom,
        ),
    );
    boxes.set(
        Part::Ju,
        BoxConfig::new(
            split_x + padding.left * 0.5,
            padding.top,
            1.0 - split_x - padding.right - padding.left * 0.5,
            1.0 - padding.top - padding.bottom,
        ),
    );
    boxes
}

/// Choseong + horizontal vowel: one Y cut, CH above, JU below, full width.
fn horizontal_split(schema: &LayoutSchema, padding: Padding) -> SlotBoxes {
    let split_y = schema.split(Axis::Y).unwrap_or(0.55);
    let mut boxes = SlotBoxes::default();
    boxes.set(
        Part::Ch,
        BoxConfig::new(
            padding.left,
            padding.top,
            1.0 - padding.left - padding.right,
            split_y - padding.top - padding.bottom * 0.5,
        ),
    );
    boxes.set(
        Part::Ju,
        BoxConfig::new(
            padding.left,
            split_y + padding.top * 0.5,
            1.0 - padding.left - padding.right,
            1.0 - split_y - padding.bottom - padding.top * 0.5,
        ),
    );
    boxes
}

/// Choseong + vertical vowel + jongseong: X and Y cuts. CH top-left, JU
/// top-right, JO spans the full width below.
fn vertical_with_jongseong(schema: &LayoutSchema, padding: Padding) -> SlotBoxes {
    let split_x = schema.split(Axis::X).unwrap_or(0.6);
    let split_y = schema.split(Axis::Y).unwrap_or(0.55);
    let mut boxes = SlotBoxes::default();
    boxes.set(
        Part::Ch,
        BoxConfig::new(
            padding.left,
            padding.top,
            split_x - padding.left - SLOT_GAP,
            split_y - padding.top - SLOT_GAP,
        ),
    );
    boxes.set(
        Part::Ju,
        BoxConfig::new(
            split_x + SLOT_GAP,
            padding.top,
            1.0 - split_x - padding.right - SLOT_GAP,
            split_y - padding.top - SLOT_GAP,
        ),
    );
    boxes.set(
        Part::Jo,
        BoxConfig::new(
            padding.left,
            split_y + SLOT_GAP,
            1.0 - padding.left - padding.right,
            1.0 - split_y - padding.bottom - SLOT_GAP,
        ),
    );
    boxes
}

/// Choseong + horizontal vowel + jongseong: two ordered Y cuts making
/// three full-width bands.
fn horizontal_with_jongseong(schema: &LayoutSchema, padding: Padding) -> SlotBoxes {
    let split_y1 = schema.nth_split(Axis::Y, 0).unwrap_or(0.37);
    let split_y2 = schema.nth_split(Axis::Y, 1).unwrap_or(0.60);
    let width = 1.0 - padding.left - padding.right;
    let mut boxes = SlotBoxes::default();
    boxes.set(
        Part::Ch,
        BoxConfig::new(
            padding.left,
            padding.top,
            width,
            split_y1 - padding.top - BAND_GAP,
        ),
    );
    boxes.set(
        Part::Ju,
        BoxConfig::new(
            padding.left,
            split_y1 + BAND_GAP,
            width,
            split_y2 - split_y1 - 2.0 * BAND_GAP,
        ),
    );
    boxes.set(
        Part::Jo,
        BoxConfig::new(
            padding.left,
            split_y2 + BAND_GAP,
            width,
            1.0 - split_y2 - padding.bottom - BAND_GAP,
        ),
    );
    boxes
}

/// Choseong + mixed vowel: CH top-left, JU_H below it, JU_V a full-height
/// column on the right.
fn mixed_jungseong(schema: &LayoutSchema, padding: Padding) -> SlotBoxes {
    let split_x = schema.split(Axis::X).unwrap_or(0.55);
    let split_y = schema.split(Axis::Y).unwrap_or(0.5);
    let left_width = split_x - padding.left - SLOT_GAP;
    let mut boxes = SlotBoxes::default();
    boxes.set(
        Part::Ch,
        BoxConfig::new(
            padding.left,
            padding.top,
            left_width,
            split_y - padding.top - SLOT_GAP,
        ),
    );
    boxes.set(
        Part::JuH,
        BoxConfig::new(
            padding.left,
            split_y + SLOT_GAP,
            left_width,
            1.0 - split_y - padding.bottom - SLOT_GAP,
        ),
    );
    boxes.set(
        Part::JuV,
        BoxConfig::new(
            split_x + SLOT_GAP,
            padding.top,
            1.0 - split_x - padding.right - SLOT_GAP,
            1.0 - padding.top - padding.bottom,
        ),
    );
    boxes
}

/// Choseong + mixed vowel + jongseong. The vertical vowel column spans the
/// combined CH + JU_H height; JO sits bottom-left under the column start.
fn mixed_jungseong_with_jongseong(schema: &LayoutSchema, padding: Padding) -> SlotBoxes {
    let split_x = schema.split(Axis::X).unwrap_or(0.55);
    let split_y1 = schema.nth_split(Axis::Y, 0).unwrap_or(0.5);
    let split_y2 = schema.nth_split(Axis::Y, 1).unwrap_or(0.75);
    let left_width = split_x - padding.left - SLOT_GAP;
    let mut boxes = SlotBoxes::default();
    boxes.set(
        Part::Ch,
        BoxConfig::new(
            padding.left,
            padding.top,
            left_width,
            split_y1 - padding.top - SLOT_GAP,
        ),
    );
    boxes.set(
        Part::JuH,
        BoxConfig::new(
            padding.left,
            split_y1 + SLOT_GAP,
            left_width,
            split_y2 - split_y1 - 2.0 * SLOT_GAP,
        ),
    );
    boxes.set(
        Part::JuV,
        BoxConfig::new(
            split_x + SLOT_GAP,
            padding.top,
            1.0 - split_x - padding.right - SLOT_GAP,
            split_y2 - padding.top - SLOT_GAP,
        ),
    );
    boxes.set(
        Part::Jo,
        BoxConfig::new(
            padding.left,
            split_y2 + SLOT_GAP,
            left_width,
            1.0 - split_y2 - padding.bottom - SLOT_GAP,
        ),
    );
    boxes
}

/// Mixed vowel standing alone: JU_H bottom-left, JU_V full-height right.
fn mixed_jungseong_only(schema: &LayoutSchema, padding: Padding) -> SlotBoxes {
    let split_x = schema.split(Axis::X).unwrap_or(0.5);
    let split_y = schema.split(Axis::Y).unwrap_or(0.5);
    let mut boxes = SlotBoxes::default();
    boxes.set(
        Part::JuH,
        BoxConfig::new(
            padding.left,
            split_y + SLOT_GAP,
            split_x - padding.left - SLOT_GAP,
            1.0 - split_y - padding.bottom - SLOT_GAP,
        ),
    );
    boxes.set(
        Part::JuV,
        BoxConfig::new(
            split_x + SLOT_GAP,
            padding.top,
            1.0 - split_x - padding.right - SLOT_GAP,
            1.0 - padding.top - padding.bottom,
        ),
    );
    boxes
}
