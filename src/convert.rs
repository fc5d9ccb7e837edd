//! The conversion pipeline
//!
//! Single entry point wiring the stages together: tokenize → layout →
//! render → assemble. Pure and synchronous; every call recomputes from
//! scratch, so identical text always yields identical markup.

use serde::{Deserialize, Serialize};

use crate::errors::{ConvertError, UnmappedCharacter};
use crate::layout::number::compute_number;
use crate::layout::sentence::{compute_sentence, WordUnit};
use crate::layout::word::{compute_word, group_letters};
use crate::models::config::ConvertOptions;
use crate::models::elements::WordTokens;
use crate::parse::tokenize;
use crate::renderers::render_svg;

/// A finished conversion: the markup plus any recoverable diagnostics
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub svg: String,
    pub warnings: Vec<UnmappedCharacter>,
}

/// Convert text under default options.
pub fn convert(text: &str) -> Result<Conversion, ConvertError> {
    convert_with(text, &ConvertOptions::default())
}

/// Convert text under the given options.
pub fn convert_with(text: &str, options: &ConvertOptions) -> Result<Conversion, ConvertError> {
    let tokenized = tokenize(text, options)?;

    let words = tokenized
        .words
        .iter()
        .map(|word| match word {
            WordTokens::Letters(tokens) => WordUnit::Script(compute_word(group_letters(tokens))),
            WordTokens::Number(number) => WordUnit::Number(compute_number(number)),
        })
        .collect();

    let sentence = compute_sentence(words);
    let svg = render_svg(&sentence);

    log::debug!(
        "converted {} words into {} bytes of markup",
        sentence.words.len(),
        svg.len()
    );

    Ok(Conversion {
        svg,
        warnings: tokenized.warnings,
    })
}
