//! The alphabet table
//!
//! Static, read-only mapping from phonemic units to symbol descriptors.
//! Lookup is longest-match over the pattern list, so digraphs like "ch"
//! and doubled vowels like "aa" win over their single-letter prefixes.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::elements::{ConsonantBase, Ornament, Phoneme, Vowel};

/// The shape specification of one phoneme, prior to positioning
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SymbolDescriptor {
    Consonant {
        base: ConsonantBase,
        ornament: Option<Ornament>,
    },
    Vowel {
        vowel: Vowel,
        doubled: bool,
    },
}

/// Spelling → phoneme patterns, longest first so that prefix scanning
/// implements longest match. Order within a length group is irrelevant.
static PATTERNS: &[(&str, Phoneme)] = &[
    // Digraphs (2 chars)
    ("ch", Phoneme::Ch),
    ("nd", Phoneme::Nd),
    ("ph", Phoneme::Ph),
    ("wh", Phoneme::Wh),
    ("sh", Phoneme::Sh),
    ("nt", Phoneme::Nt),
    ("th", Phoneme::Th),
    ("gh", Phoneme::Gh),
    ("qu", Phoneme::Qu),
    ("ng", Phoneme::Ng),
    // Doubled vowels (2 chars)
    ("aa", Phoneme::Aa),
    ("ee", Phoneme::Ee),
    ("ii", Phoneme::Ii),
    ("oo", Phoneme::Oo),
    ("uu", Phoneme::Uu),
    // Single letters
    ("a", Phoneme::A),
    ("e", Phoneme::E),
    ("i", Phoneme::I),
    ("o", Phoneme::O),
    ("u", Phoneme::U),
    ("b", Phoneme::B),
    ("d", Phoneme::D),
    ("g", Phoneme::G),
    ("h", Phoneme::H),
    ("f", Phoneme::F),
    ("j", Phoneme::J),
    ("k", Phoneme::K),
    ("l", Phoneme::L),
    ("c", Phoneme::C),
    ("n", Phoneme::N),
    ("p", Phoneme::P),
    ("m", Phoneme::M),
    ("t", Phoneme::T),
    ("r", Phoneme::R),
    ("v", Phoneme::V),
    ("w", Phoneme::W),
    ("s", Phoneme::S),
    ("y", Phoneme::Y),
    ("z", Phoneme::Z),
    ("q", Phoneme::Q),
    ("x", Phoneme::X),
];

/// Descriptor table, built once and never mutated
static DESCRIPTORS: Lazy<HashMap<Phoneme, SymbolDescriptor>> = Lazy::new(|| {
    use ConsonantBase::*;
    use Phoneme as P;

    fn consonant(base: ConsonantBase, ornament: Option<Ornament>) -> SymbolDescriptor {
        SymbolDescriptor::Consonant { base, ornament }
    }
    fn vowel(vowel: Vowel, doubled: bool) -> SymbolDescriptor {
        SymbolDescriptor::Vowel { vowel, doubled }
    }

    HashMap::from([
        // Vowels
        (P::A, vowel(Vowel::A, false)),
        (P::E, vowel(Vowel::E, false)),
        (P::I, vowel(Vowel::I, false)),
        (P::O, vowel(Vowel::O, false)),
        (P::U, vowel(Vowel::U, false)),
        (P::Aa, vowel(Vowel::A, true)),
        (P::Ee, vowel(Vowel::E, true)),
        (P::Ii, vowel(Vowel::I, true)),
        (P::Oo, vowel(Vowel::O, true)),
        (P::Uu, vowel(Vowel::U, true)),
        // Deep-arc row
        (P::B, consonant(DeepArc, None)),
        (P::Ch, consonant(DeepArc, Some(Ornament::Dots(2)))),
        (P::D, consonant(DeepArc, Some(Ornament::Dots(3)))),
        (P::Nd, consonant(DeepArc, Some(Ornament::Dots(4)))),
        (P::G, consonant(DeepArc, Some(Ornament::Strokes(1)))),
        (P::H, consonant(DeepArc, Some(Ornament::Strokes(2)))),
        (P::F, consonant(DeepArc, Some(Ornament::Strokes(3)))),
        // Inner-circle row
        (P::J, consonant(InnerCircle, None)),
        (P::Ph, consonant(InnerCircle, Some(Ornament::Dots(1)))),
        (P::K, consonant(InnerCircle, Some(Ornament::Dots(2)))),
        (P::L, consonant(InnerCircle, Some(Ornament::Dots(3)))),
        (P::C, consonant(InnerCircle, Some(Ornament::Dots(4)))),
        (P::N, consonant(InnerCircle, Some(Ornament::Strokes(1)))),
        (P::P, consonant(InnerCircle, Some(Ornament::Strokes(2)))),
        (P::M, consonant(InnerCircle, Some(Ornament::Strokes(3)))),
        // Shallow-arc row
        (P::T, consonant(ShallowArc, None)),
        (P::Wh, consonant(ShallowArc, Some(Ornament::Dots(1)))),
        (P::Sh, consonant(ShallowArc, Some(Ornament::Dots(2)))),
        (P::R, consonant(ShallowArc, Some(Ornament::Dots(3)))),
        (P::Nt, consonant(ShallowArc, Some(Ornament::Dots(4)))),
        (P::V, consonant(ShallowArc, Some(Ornament::Strokes(1)))),
        (P::W, consonant(ShallowArc, Some(Ornament::Strokes(2)))),
        (P::S, consonant(ShallowArc, Some(Ornament::Strokes(3)))),
        // Rim-circle row
        (P::Th, consonant(RimCircle, None)),
        (P::Gh, consonant(RimCircle, Some(Ornament::Dots(1)))),
        (P::Y, consonant(RimCircle, Some(Ornament::Dots(2)))),
        (P::Z, consonant(RimCircle, Some(Ornament::Dots(3)))),
        (P::Q, consonant(RimCircle, Some(Ornament::Dots(4)))),
        (P::Qu, consonant(RimCircle, Some(Ornament::Strokes(1)))),
        (P::X, consonant(RimCircle, Some(Ornament::Strokes(2)))),
        (P::Ng, consonant(RimCircle, Some(Ornament::Strokes(3)))),
    ])
});

/// Longest-match lookup at the start of `input`.
///
/// Returns the matched phoneme and the number of bytes consumed, or
/// `None` when no pattern matches. `input` must already be lowercased.
pub fn lookup(input: &str) -> Option<(Phoneme, usize)> {
    if input.is_empty() {
        return None;
    }
    for (pattern, phoneme) in PATTERNS {
        if input.starts_with(pattern) {
            return Some((*phoneme, pattern.len()));
        }
    }
    None
}

impl Phoneme {
    /// The static shape specification of this phoneme
    pub fn descriptor(self) -> SymbolDescriptor {
        DESCRIPTORS[&self]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_match() {
        assert_eq!(lookup("ch"), Some((Phoneme::Ch, 2)));
        assert_eq!(lookup("chat"), Some((Phoneme::Ch, 2)));
        assert_eq!(lookup("cat"), Some((Phoneme::C, 1)));
        assert_eq!(lookup("the"), Some((Phoneme::Th, 2)));
        assert_eq!(lookup("qux"), Some((Phoneme::Qu, 2)));
        assert_eq!(lookup("aardvark"), Some((Phoneme::Aa, 2)));
        assert_eq!(lookup("and"), Some((Phoneme::A, 1)));
    }

    #[test]
    fn test_unmapped() {
        assert_eq!(lookup(""), None);
        assert_eq!(lookup("!"), None);
        assert_eq!(lookup("é"), None);
        assert_eq!(lookup("3"), None);
    }

    #[test]
    fn test_every_letter_maps() {
        for c in 'a'..='z' {
            let s = c.to_string();
            let (phoneme, consumed) = lookup(&s).expect("letter must map");
            assert_eq!(consumed, 1);
            // And every mapped phoneme must carry a descriptor
            let _ = phoneme.descriptor();
        }
    }

    #[test]
    fn test_row_assignment() {
        assert_eq!(
            Phoneme::B.descriptor(),
            SymbolDescriptor::Consonant {
                base: ConsonantBase::DeepArc,
                ornament: None
            }
        );
        assert_eq!(
            Phoneme::L.descriptor(),
            SymbolDescriptor::Consonant {
                base: ConsonantBase::InnerCircle,
                ornament: Some(Ornament::Dots(3))
            }
        );
        assert_eq!(
            Phoneme::S.descriptor(),
            SymbolDescriptor::Consonant {
                base: ConsonantBase::ShallowArc,
                ornament: Some(Ornament::Strokes(3))
            }
        );
        assert_eq!(
            Phoneme::Ng.descriptor(),
            SymbolDescriptor::Consonant {
                base: ConsonantBase::RimCircle,
                ornament: Some(Ornament::Strokes(3))
            }
        );
        assert_eq!(
            Phoneme::Oo.descriptor(),
            SymbolDescriptor::Vowel {
                vowel: Vowel::O,
                doubled: true
            }
        );
    }
}
