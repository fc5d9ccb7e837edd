//! Word-circle layout
//!
//! Groups a word's token stream into drawable letters (attaching each
//! vowel to the consonant immediately before it), then places the
//! letters into equal angular sectors of the word circle.

use std::f64::consts::TAU;

use crate::models::alphabet::SymbolDescriptor;
use crate::models::elements::{
    ConsonantBase, MarkSide, Ornament, Phoneme, PhonemeToken, TokenClass, Vowel, VowelMark,
};

use super::geometry::Point;
use super::{word_radius, LETTER_SPAN_MAX, MARK_SEPARATION, WORD_START_ANGLE};

/// A vowel resolved to its mark, attached or standalone
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttachedVowel {
    pub phoneme: Phoneme,
    pub vowel: Vowel,
    pub doubled: bool,
    pub mark: VowelMark,
}

/// One drawable letter: a consonant (possibly carrying a vowel mark) or
/// a standalone vowel
#[derive(Clone, Debug, PartialEq)]
pub enum Letter {
    Consonant {
        phoneme: Phoneme,
        base: ConsonantBase,
        ornament: Option<Ornament>,
        vowel: Option<AttachedVowel>,
    },
    Vowel(AttachedVowel),
}

/// A letter with its assigned place on the word circle
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedSymbol {
    pub letter: Letter,
    /// Sector midpoint, radians clockwise from the top
    pub angle: f64,
    /// Full angular width of the sector
    pub sector: f64,
    /// Angular half-width of the rim span the letter occupies
    pub span_half: f64,
}

/// One word's circle of placed symbols
#[derive(Clone, Debug, PartialEq)]
pub struct WordLayout {
    pub symbols: Vec<PlacedSymbol>,
    /// Word-circle radius
    pub radius: f64,
    /// Center within the sentence, filled in by the sentence layout
    pub center: Point,
}

fn resolve_vowel(phoneme: Phoneme, angular_offset: f64) -> AttachedVowel {
    let (vowel, doubled) = match phoneme.descriptor() {
        SymbolDescriptor::Vowel { vowel, doubled } => (vowel, doubled),
        SymbolDescriptor::Consonant { .. } => unreachable!("vowel phoneme expected"),
    };
    AttachedVowel {
        phoneme,
        vowel,
        doubled,
        mark: VowelMark {
            kind: vowel.mark_kind(doubled),
            side: vowel.side(),
            angular_offset,
        },
    }
}

/// Group tokens into letters, attaching each vowel that immediately
/// follows a consonant. A vowel with no preceding consonant, or one
/// following a consonant already carrying a mark, stands alone.
pub fn group_letters(tokens: &[PhonemeToken]) -> Vec<Letter> {
    let mut letters: Vec<Letter> = Vec::new();

    for token in tokens {
        match token.class {
            TokenClass::Consonant => {
                let (base, ornament) = match token.phoneme.descriptor() {
                    SymbolDescriptor::Consonant { base, ornament } => (base, ornament),
                    SymbolDescriptor::Vowel { .. } => unreachable!("consonant phoneme expected"),
                };
                letters.push(Letter::Consonant {
                    phoneme: token.phoneme,
                    base,
                    ornament,
                    vowel: None,
                });
            }
            TokenClass::Vowel => {
                if let Some(Letter::Consonant {
                    ornament, vowel, ..
                }) = letters.last_mut()
                {
                    if vowel.is_none() {
                        let offset = vowel_offset(token.phoneme, *ornament);
                        *vowel = Some(resolve_vowel(token.phoneme, offset));
                        continue;
                    }
                }
                letters.push(Letter::Vowel(resolve_vowel(token.phoneme, 0.0)));
            }
        }
    }

    letters
}

/// When a consonant's ornament and its vowel mark would occupy the same
/// side of the shape, step the vowel aside by a fixed angular delta.
/// Ornaments always sit inside the host, so only inside-attaching
/// vowels clash.
fn vowel_offset(vowel_phoneme: Phoneme, ornament: Option<Ornament>) -> f64 {
    let side = match vowel_phoneme.descriptor() {
        SymbolDescriptor::Vowel { vowel, .. } => vowel.side(),
        SymbolDescriptor::Consonant { .. } => unreachable!("vowel phoneme expected"),
    };
    if ornament.is_some() && side == MarkSide::Inside {
        MARK_SEPARATION
    } else {
        0.0
    }
}

/// Place a word's letters into equal angular sectors, first symbol at
/// the bottom of the circle, proceeding clockwise.
pub fn compute_word(letters: Vec<Letter>) -> WordLayout {
    let count = letters.len();
    let radius = word_radius(count);

    if count == 0 {
        return WordLayout {
            symbols: Vec::new(),
            radius,
            center: Point::origin(),
        };
    }

    let sector = TAU / count as f64;
    let span_half = (sector / 4.0).min(LETTER_SPAN_MAX / 2.0);

    let symbols = letters
        .into_iter()
        .enumerate()
        .map(|(i, letter)| PlacedSymbol {
            letter,
            angle: WORD_START_ANGLE + i as f64 * sector,
            sector,
            span_half,
        })
        .collect();

    WordLayout {
        symbols,
        radius,
        center: Point::origin(),
    }
}
