//! Tokenizer: text → per-word phoneme token streams
//!
//! Normalizes case, splits on whitespace, and scans each word left to
//! right with longest-match lookup against the alphabet table, so
//! digraphs ("ch", "th", …) and doubled vowels ("aa", …) are recognized
//! before their single-letter prefixes. Words written entirely in
//! digits become number tokens instead.

use crate::errors::{ConvertError, UnmappedCharacter};
use crate::models::alphabet;
use crate::models::config::{ConvertOptions, UnmappedPolicy};
use crate::models::elements::{DigitToken, NumberToken, PhonemeToken, WordTokens};

/// Result of tokenizing one input string
#[derive(Clone, Debug, PartialEq)]
pub struct TokenizedText {
    pub words: Vec<WordTokens>,
    pub warnings: Vec<UnmappedCharacter>,
}

impl TokenizedText {
    /// Total token count across all words
    pub fn token_count(&self) -> usize {
        self.words.iter().map(WordTokens::token_count).sum()
    }
}

/// Tokenize `text` under the given options.
///
/// Pure function of the input and the alphabet table. Per-character
/// failures recover locally; the only fatal outcomes are the size cap
/// and (in strict mode) a wholly unconvertible input.
pub fn tokenize(text: &str, options: &ConvertOptions) -> Result<TokenizedText, ConvertError> {
    let len = text.chars().count();
    if len > options.max_chars {
        return Err(ConvertError::InputTooLarge {
            len,
            max: options.max_chars,
        });
    }

    let normalized = text.to_lowercase();
    let mut words = Vec::new();
    let mut warnings = Vec::new();

    for (word_index, word) in normalized.split_whitespace().enumerate() {
        if let Some(number) = scan_number(word) {
            words.push(WordTokens::Number(number));
            continue;
        }
        let tokens = scan_word(word, word_index, options.unmapped, &mut warnings);
        if !tokens.is_empty() {
            words.push(WordTokens::Letters(tokens));
        }
    }

    let tokenized = TokenizedText { words, warnings };

    if options.strict && tokenized.token_count() == 0 && !normalized.trim().is_empty() {
        return Err(ConvertError::InvalidInput);
    }

    log::debug!(
        "tokenized {} chars into {} words ({} tokens, {} warnings)",
        len,
        tokenized.words.len(),
        tokenized.token_count(),
        tokenized.warnings.len()
    );

    Ok(tokenized)
}

/// Scan one word into phoneme tokens, recording or skipping unmapped
/// characters per policy.
fn scan_word(
    word: &str,
    word_index: usize,
    policy: UnmappedPolicy,
    warnings: &mut Vec<UnmappedCharacter>,
) -> Vec<PhonemeToken> {
    let mut tokens = Vec::new();
    let mut byte_pos = 0;
    let mut char_pos = 0;

    while byte_pos < word.len() {
        let rest = &word[byte_pos..];
        match alphabet::lookup(rest) {
            Some((phoneme, consumed)) => {
                tokens.push(PhonemeToken::new(&rest[..consumed], phoneme));
                byte_pos += consumed;
                char_pos += rest[..consumed].chars().count();
            }
            None => {
                let ch = rest.chars().next().expect("non-empty remainder");
                if policy == UnmappedPolicy::Report {
                    warnings.push(UnmappedCharacter {
                        ch,
                        word: word_index,
                        offset: char_pos,
                    });
                    log::warn!("skipping unsupported character {:?} in word {}", ch, word_index);
                }
                byte_pos += ch.len_utf8();
                char_pos += 1;
            }
        }
    }

    tokens
}

/// Recognize a word written entirely in digits, with an optional
/// leading `-` and at most one `.`. Anything else is not a number word.
fn scan_number(word: &str) -> Option<NumberToken> {
    let (negative, digits_part) = match word.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, word),
    };
    if digits_part.is_empty() || digits_part.matches('.').count() > 1 {
        return None;
    }
    // A bare "." or "-." is not a number
    if digits_part.chars().all(|c| c == '.') {
        return None;
    }

    let mut digits = Vec::new();
    let mut fractional = false;
    for c in digits_part.chars() {
        if c == '.' {
            fractional = true;
            continue;
        }
        let value = c.to_digit(10)? as u8;
        digits.push(DigitToken { value, fractional });
    }

    Some(NumberToken {
        negative,
        whole: !fractional,
        digits,
    })
}
