//! Jamo inventories, glyph stroke tables, and syllable classification.
//!
//! The glyph tables are the sole authoritative source of stroke geometry:
//! hand-authored rectangles, each normalized to its jamo's own bounding
//! box. The rest of the crate only reads them. Editing flows serialize
//! back to the same table shape (see [`crate::serialize`]) for manual
//! copy-back into this module.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::layout::LayoutType;
use crate::log::debug;

/// Which syllable slot a jamo occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JamoKind {
    Choseong,
    Jungseong,
    Jongseong,
}

/// The dimension a stroke holds at constant visual thickness when its box
/// is scaled non-uniformly. A `Horizontal` stroke keeps its height fixed
/// and stretches in width; a `Vertical` stroke the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeDirection {
    Horizontal,
    Vertical,
}

/// One authored stroke, normalized to the owning jamo's box.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeRel {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub direction: StrokeDirection,
}

impl StrokeRel {
    /// A horizontal stroke (height held constant when rendered).
    pub fn h(id: &str, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.to_string(),
            x,
            y,
            width,
            height,
            direction: StrokeDirection::Horizontal,
        }
    }

    /// A vertical stroke (width held constant when rendered).
    pub fn v(id: &str, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.to_string(),
            x,
            y,
            width,
            height,
            direction: StrokeDirection::Vertical,
        }
    }
}

/// Legacy absolute authoring box, in the units the glyph data was first
/// drawn in. Kept verbatim for round-tripping edited tables; never used
/// for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Stroke storage for one jamo.
///
/// Mixed vowels carry two disjoint groups: the strokes mapped against the
/// `JU_H` box and those mapped against `JU_V`. Group membership is about
/// box ownership, not the stroke's own direction; the vertical bar of a
/// diphthong's ㅗ component still lives in the horizontal group.
#[derive(Debug, Clone, PartialEq)]
pub enum Strokes {
    Flat(Vec<StrokeRel>),
    Split {
        horizontal: Vec<StrokeRel>,
        vertical: Vec<StrokeRel>,
    },
}

impl Strokes {
    /// All strokes regardless of grouping.
    pub fn all(&self) -> impl Iterator<Item = &StrokeRel> {
        let (flat, h, v) = match self {
            Strokes::Flat(s) => (Some(s.iter()), None, None),
            Strokes::Split {
                horizontal,
                vertical,
            } => (None, Some(horizontal.iter()), Some(vertical.iter())),
        };
        flat.into_iter()
            .flatten()
            .chain(h.into_iter().flatten())
            .chain(v.into_iter().flatten())
    }

    pub fn len(&self) -> usize {
        match self {
            Strokes::Flat(s) => s.len(),
            Strokes::Split {
                horizontal,
                vertical,
            } => horizontal.len() + vertical.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One jamo's glyph data.
#[derive(Debug, Clone, PartialEq)]
pub struct JamoData {
    pub ch: char,
    pub kind: JamoKind,
    pub legacy_box: GlyphBox,
    pub strokes: Strokes,
}

/// The 19 modern initial consonants, in codepoint order.
pub const CHOSEONG: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ',
    'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// The 21 vowels.
pub const JUNGSEONG: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ',
    'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// The 28 final-consonant slots; index 0 is the empty (no jongseong) slot.
pub const JONGSEONG: [Option<char>; 28] = [
    None,
    Some('ㄱ'),
    Some('ㄲ'),
    Some('ㄳ'),
    Some('ㄴ'),
    Some('ㄵ'),
    Some('ㄶ'),
    Some('ㄷ'),
    Some('ㄹ'),
    Some('ㄺ'),
    Some('ㄻ'),
    Some('ㄼ'),
    Some('ㄽ'),
    Some('ㄾ'),
    Some('ㄿ'),
    Some('ㅀ'),
    Some('ㅁ'),
    Some('ㅂ'),
    Some('ㅄ'),
    Some('ㅅ'),
    Some('ㅆ'),
    Some('ㅇ'),
    Some('ㅈ'),
    Some('ㅊ'),
    Some('ㅋ'),
    Some('ㅌ'),
    Some('ㅍ'),
    Some('ㅎ'),
];

/// Vowels drawn as a vertical bar beside the initial.
const VERTICAL_VOWELS: [char; 9] = ['ㅏ', 'ㅑ', 'ㅓ', 'ㅕ', 'ㅣ', 'ㅐ', 'ㅒ', 'ㅔ', 'ㅖ'];

/// Vowels drawn as a horizontal bar under the initial.
const HORIZONTAL_VOWELS: [char; 5] = ['ㅗ', 'ㅛ', 'ㅜ', 'ㅠ', 'ㅡ'];

/// Shape class of a vowel. Membership in the three classes is fixed and
/// disjoint; anything outside the vertical and horizontal sets is a mixed
/// (two-component) vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VowelClass {
    Vertical,
    Horizontal,
    Mixed,
}

impl VowelClass {
    pub fn of(vowel: char) -> VowelClass {
        if VERTICAL_VOWELS.contains(&vowel) {
            VowelClass::Vertical
        } else if HORIZONTAL_VOWELS.contains(&vowel) {
            VowelClass::Horizontal
        } else {
            VowelClass::Mixed
        }
    }
}

const SYLLABLE_BASE: u32 = 0xAC00;
const SYLLABLE_LAST: u32 = 0xD7A3;
const JUNGSEONG_COUNT: u32 = 21;
const JONGSEONG_COUNT: u32 = 28;

/// A decomposed syllable: which jamo occupy which slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Syllable {
    pub choseong: Option<char>,
    pub jungseong: Option<char>,
    pub jongseong: Option<char>,
}

impl Syllable {
    /// Split a character into slot jamo.
    ///
    /// Precomposed syllables (U+AC00..=U+D7A3) decompose arithmetically;
    /// a lone compat jamo occupies its natural slot (a bare consonant is
    /// treated as an initial). Returns `None` for anything else.
    pub fn decompose(ch: char) -> Option<Syllable> {
        let code = ch as u32;
        if (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&code) {
            let n = code - SYLLABLE_BASE;
            let cho = (n / (JUNGSEONG_COUNT * JONGSEONG_COUNT)) as usize;
            let jung = ((n / JONGSEONG_COUNT) % JUNGSEONG_COUNT) as usize;
            let jong = (n % JONGSEONG_COUNT) as usize;
            return Some(Syllable {
                choseong: Some(CHOSEONG[cho]),
                jungseong: Some(JUNGSEONG[jung]),
                jongseong: JONGSEONG[jong],
            });
        }
        if CHOSEONG.contains(&ch) {
            return Some(Syllable {
                choseong: Some(ch),
                ..Syllable::default()
            });
        }
        if JUNGSEONG.contains(&ch) {
            return Some(Syllable {
                jungseong: Some(ch),
                ..Syllable::default()
            });
        }
        None
    }

    /// Which of the ten layouts this syllable renders with.
    ///
    /// Purely a function of slot presence plus the vowel's shape class.
    /// Combinations outside the ten known shapes (a final with no vowel,
    /// a vowel-final pair with no initial) fall back to the nearest
    /// single-slot layout instead of failing.
    pub fn layout_type(&self) -> LayoutType {
        match (self.choseong, self.jungseong, self.jongseong) {
            (Some(_), Some(v), Some(_)) => match VowelClass::of(v) {
                VowelClass::Vertical => LayoutType::ChoseongJungseongVerticalJongseong,
                VowelClass::Horizontal => LayoutType::ChoseongJungseongHorizontalJongseong,
                VowelClass::Mixed => LayoutType::ChoseongJungseongMixedJongseong,
            },
            (Some(_), Some(v), None) => match VowelClass::of(v) {
                VowelClass::Vertical => LayoutType::ChoseongJungseongVertical,
                VowelClass::Horizontal => LayoutType::ChoseongJungseongHorizontal,
                VowelClass::Mixed => LayoutType::ChoseongJungseongMixed,
            },
            (None, Some(v), jong) => {
                if jong.is_some() {
                    debug!("final consonant without an initial; laying out the vowel alone");
                }
                match VowelClass::of(v) {
                    VowelClass::Vertical => LayoutType::JungseongVerticalOnly,
                    VowelClass::Horizontal => LayoutType::JungseongHorizontalOnly,
                    VowelClass::Mixed => LayoutType::JungseongMixedOnly,
                }
            }
            (Some(_), None, jong) => {
                if jong.is_some() {
                    debug!("final consonant without a vowel; laying out the initial alone");
                }
                LayoutType::ChoseongOnly
            }
            (None, None, _) => {
                debug!("syllable with no classifiable slots; using the full single-slot layout");
                LayoutType::ChoseongOnly
            }
        }
    }
}

// ============================================================================
// Glyph tables
// ============================================================================

static CHOSEONG_MAP: Lazy<HashMap<char, JamoData>> = Lazy::new(|| {
    let glyphs = [
        JamoData {
            ch: 'ㄱ',
            kind: JamoKind::Choseong,
            legacy_box: GlyphBox {
                x: 2.0,
                y: 2.0,
                width: 20.0,
                height: 20.0,
            },
            strokes: Strokes::Flat(vec![
                StrokeRel::h("ㄱ-1", 0.1, 0.1, 0.7, 0.15),
                StrokeRel::v("ㄱ-2", 0.85, 0.1, 0.15, 0.8),
            ]),
        },
        JamoData {
            ch: 'ㄴ',
            kind: JamoKind::Choseong,
            legacy_box: GlyphBox {
                x: 2.0,
                y: 2.0,
                width: 20.0,
                height: 20.0,
            },
            strokes: Strokes::Flat(vec![
                StrokeRel::v("ㄴ-1", 0.1, 0.1, 0.15, 0.75),
                StrokeRel::h("ㄴ-2", 0.1, 0.85, 0.8, 0.15),
            ]),
        },
        JamoData {
            ch: 'ㅁ',
            kind: JamoKind::Choseong,
            legacy_box: GlyphBox {
                x: 2.0,
                y: 2.0,
                width: 20.0,
                height: 20.0,
            },
            strokes: Strokes::Flat(vec![
                StrokeRel::h("ㅁ-1", 0.1, 0.1, 0.8, 0.12),
                StrokeRel::v("ㅁ-2", 0.1, 0.1, 0.12, 0.8),
                StrokeRel::v("ㅁ-3", 0.78, 0.1, 0.12, 0.8),
                StrokeRel::h("ㅁ-4", 0.1, 0.78, 0.8, 0.12),
            ]),
        },
    ];
    glyphs.into_iter().map(|g| (g.ch, g)).collect()
});

static JUNGSEONG_MAP: Lazy<HashMap<char, JamoData>> = Lazy::new(|| {
    let glyphs = [
        JamoData {
            ch: 'ㅣ',
            kind: JamoKind::Jungseong,
            legacy_box: GlyphBox {
                x: 2.0,
                y: 2.0,
                width: 20.0,
                height: 20.0,
            },
            strokes: Strokes::Flat(vec![StrokeRel::v("ㅣ-1", 0.7, 0.0, 0.1, 1.0)]),
        },
        JamoData {
            ch: 'ㅏ',
            kind: JamoKind::Jungseong,
            legacy_box: GlyphBox {
                x: 2.0,
                y: 2.0,
                width: 20.0,
                height: 20.0,
            },
            strokes: Strokes::Flat(vec![
                StrokeRel::v("ㅏ-1", 0.45, 0.0, 0.1, 1.0),
                StrokeRel::h("ㅏ-2", 0.55, 0.45, 0.35, 0.1),
            ]),
        },
        JamoData {
            ch: 'ㅡ',
            kind: JamoKind::Jungseong,
            legacy_box: GlyphBox {
                x: 2.0,
                y: 2.0,
                width: 20.0,
                height: 20.0,
            },
            strokes: Strokes::Flat(vec![StrokeRel::h("ㅡ-1", 0.0, 0.45, 1.0, 0.1)]),
        },
        JamoData {
            ch: 'ㅗ',
            kind: JamoKind::Jungseong,
            legacy_box: GlyphBox {
                x: 2.0,
                y: 2.0,
                width: 20.0,
                height: 20.0,
            },
            strokes: Strokes::Flat(vec![
                StrokeRel::h("ㅗ-1", 0.0, 0.6, 1.0, 0.1),
                StrokeRel::v("ㅗ-2", 0.45, 0.1, 0.1, 0.5),
            ]),
        },
        JamoData {
            ch: 'ㅢ',
            kind: JamoKind::Jungseong,
            legacy_box: GlyphBox {
                x: 2.0,
                y: 2.0,
                width: 20.0,
                height: 20.0,
            },
            strokes: Strokes::Split {
                horizontal: vec![StrokeRel::h("ㅢ-h1", 0.0, 0.45, 1.0, 0.1)],
                vertical: vec![StrokeRel::v("ㅢ-v1", 0.45, 0.0, 0.1, 1.0)],
            },
        },
        JamoData {
            ch: 'ㅘ',
            kind: JamoKind::Jungseong,
            legacy_box: GlyphBox {
                x: 2.0,
                y: 2.0,
                width: 20.0,
                height: 20.0,
            },
            strokes: Strokes::Split {
                // The ㅗ component; its short upright belongs to the
                // horizontal group because the JU_H box owns it.
                horizontal: vec![
                    StrokeRel::h("ㅘ-h1", 0.0, 0.6, 1.0, 0.1),
                    StrokeRel::v("ㅘ-h2", 0.45, 0.15, 0.1, 0.45),
                ],
                // The ㅏ component.
                vertical: vec![
                    StrokeRel::v("ㅘ-v1", 0.45, 0.0, 0.1, 1.0),
                    StrokeRel::h("ㅘ-v2", 0.6, 0.45, 0.3, 0.1),
                ],
            },
        },
    ];
    glyphs.into_iter().map(|g| (g.ch, g)).collect()
});

static JONGSEONG_MAP: Lazy<HashMap<char, JamoData>> = Lazy::new(|| {
    let glyphs = [
        JamoData {
            ch: 'ㄱ',
            kind: JamoKind::Jongseong,
            legacy_box: GlyphBox {
                x: 2.0,
                y: 2.0,
                width: 20.0,
                height: 20.0,
            },
            strokes: Strokes::Flat(vec![
                StrokeRel::h("ㄱ-1", 0.1, 0.15, 0.7, 0.2),
                StrokeRel::v("ㄱ-2", 0.7, 0.15, 0.2, 0.7),
            ]),
        },
        JamoData {
            ch: 'ㄴ',
            kind: JamoKind::Jongseong,
            legacy_box: GlyphBox {
                x: 2.0,
                y: 2.0,
                width: 20.0,
                height: 20.0,
            },
            strokes: Strokes::Flat(vec![
                StrokeRel::v("ㄴ-1", 0.15, 0.1, 0.2, 0.6),
                StrokeRel::h("ㄴ-2", 0.15, 0.7, 0.7, 0.2),
            ]),
        },
        JamoData {
            ch: 'ㅁ',
            kind: JamoKind::Jongseong,
            legacy_box: GlyphBox {
                x: 2.0,
                y: 2.0,
                width: 20.0,
                height: 20.0,
            },
            strokes: Strokes::Flat(vec![
                StrokeRel::h("ㅁ-1", 0.15, 0.1, 0.7, 0.15),
                StrokeRel::v("ㅁ-2", 0.15, 0.1, 0.15, 0.8),
                StrokeRel::v("ㅁ-3", 0.7, 0.1, 0.15, 0.8),
                StrokeRel::h("ㅁ-4", 0.15, 0.75, 0.7, 0.15),
            ]),
        },
    ];
    glyphs.into_iter().map(|g| (g.ch, g)).collect()
});

/// Look up the authored glyph for a jamo in a given slot. Unknown jamo
/// simply have no entry; composition skips them.
pub fn glyph(kind: JamoKind, ch: char) -> Option<&'static JamoData> {
    match kind {
        JamoKind::Choseong => CHOSEONG_MAP.get(&ch),
        JamoKind::Jungseong => JUNGSEONG_MAP.get(&ch),
        JamoKind::Jongseong => JONGSEONG_MAP.get(&ch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decompose_standard_syllables() {
        assert_eq!(
            Syllable::decompose('가'),
            Some(Syllable {
                choseong: Some('ㄱ'),
                jungseong: Some('ㅏ'),
                jongseong: None,
            })
        );
        assert_eq!(
            Syllable::decompose('한'),
            Some(Syllable {
                choseong: Some('ㅎ'),
                jungseong: Some('ㅏ'),
                jongseong: Some('ㄴ'),
            })
        );
        assert_eq!(
            Syllable::decompose('궝'),
            Some(Syllable {
                choseong: Some('ㄱ'),
                jungseong: Some('ㅝ'),
                jongseong: Some('ㅇ'),
            })
        );
    }

    #[test]
    fn decompose_lone_jamo() {
        assert_eq!(
            Syllable::decompose('ㄱ'),
            Some(Syllable {
                choseong: Some('ㄱ'),
                ..Syllable::default()
            })
        );
        assert_eq!(
            Syllable::decompose('ㅢ'),
            Some(Syllable {
                jungseong: Some('ㅢ'),
                ..Syllable::default()
            })
        );
        assert_eq!(Syllable::decompose('x'), None);
        assert_eq!(Syllable::decompose('漢'), None);
    }

    #[test]
    fn vowel_classes_are_disjoint_and_total() {
        for v in JUNGSEONG {
            let class = VowelClass::of(v);
            let vertical = VERTICAL_VOWELS.contains(&v);
            let horizontal = HORIZONTAL_VOWELS.contains(&v);
            match class {
                VowelClass::Vertical => assert!(vertical && !horizontal),
                VowelClass::Horizontal => assert!(horizontal && !vertical),
                VowelClass::Mixed => assert!(!vertical && !horizontal),
            }
        }
        assert_eq!(VowelClass::of('ㅢ'), VowelClass::Mixed);
        assert_eq!(VowelClass::of('ㅘ'), VowelClass::Mixed);
    }

    #[test]
    fn layout_classification_matches_reference_syllables() {
        let cases = [
            ('가', LayoutType::ChoseongJungseongVertical),
            ('고', LayoutType::ChoseongJungseongHorizontal),
            ('괘', LayoutType::ChoseongJungseongMixed),
            ('한', LayoutType::ChoseongJungseongVerticalJongseong),
            ('공', LayoutType::ChoseongJungseongHorizontalJongseong),
            ('궝', LayoutType::ChoseongJungseongMixedJongseong),
        ];
        for (ch, expected) in cases {
            let syl = Syllable::decompose(ch).unwrap();
            assert_eq!(syl.layout_type(), expected, "wrong layout for {}", ch);
        }

        let lone = Syllable::decompose('ㅡ').unwrap();
        assert_eq!(lone.layout_type(), LayoutType::JungseongHorizontalOnly);
        let lone = Syllable::decompose('ㅣ').unwrap();
        assert_eq!(lone.layout_type(), LayoutType::JungseongVerticalOnly);
        let lone = Syllable::decompose('ㅢ').unwrap();
        assert_eq!(lone.layout_type(), LayoutType::JungseongMixedOnly);
        let lone = Syllable::decompose('ㄱ').unwrap();
        assert_eq!(lone.layout_type(), LayoutType::ChoseongOnly);
    }

    #[test]
    fn unclassifiable_combinations_fall_back() {
        let odd = Syllable {
            choseong: None,
            jungseong: None,
            jongseong: Some('ㄴ'),
        };
        assert_eq!(odd.layout_type(), LayoutType::ChoseongOnly);

        let vowel_with_final = Syllable {
            choseong: None,
            jungseong: Some('ㅏ'),
            jongseong: Some('ㄴ'),
        };
        assert_eq!(
            vowel_with_final.layout_type(),
            LayoutType::JungseongVerticalOnly
        );
    }

    #[test]
    fn split_strokes_iterate_both_groups() {
        let glyph = glyph(JamoKind::Jungseong, 'ㅘ').unwrap();
        assert_eq!(glyph.strokes.len(), 4);
        let ids: Vec<&str> = glyph.strokes.all().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["ㅘ-h1", "ㅘ-h2", "ㅘ-v1", "ㅘ-v2"]);
    }

    #[test]
    fn unknown_jamo_has_no_glyph() {
        assert!(glyph(JamoKind::Choseong, 'ㅎ').is_none());
        assert!(glyph(JamoKind::Jungseong, 'ㅏ').is_some());
    }
}
