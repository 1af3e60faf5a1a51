// src/core/types.rs
use serde::{Deserialize, Serialize};

/// One row of the class-definition resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassEntry {
    pub unit: String,
    pub class: String,
}

impl ClassEntry {
    pub fn new(unit: impl Into<String>, class: impl Into<String>) -> Self {
        Self { unit: unit.into(), class: class.into() }
    }
}

/// A phonological unit produced by the segmenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    /// The unit as written, in decomposed form, marks included.
    pub text: String,
    /// The unit with all diacritics removed.
    pub stripped: String,
    pub is_vowel: bool,
}

/// The result of decoding one raw form.
///
/// `alternants[i]` is the cleaned reconstruction that produced `codes[i]`;
/// both keep the left-to-right order of the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedForm {
    pub alternants: Vec<String>,
    pub codes: Vec<String>,
}

impl DecodedForm {
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterates `(alternant, code)` pairs in input order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.alternants
            .iter()
            .zip(self.codes.iter())
            .map(|(alternant, code)| (alternant.as_str(), code.as_str()))
    }
}
