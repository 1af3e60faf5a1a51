// src/core/encoder.rs
use crate::core::segmenter::UnitSegmenter;
use crate::core::table::ClassTable;

/// Reduces a segment to its sequence of class codes.
///
/// Vowels are dropped except in onset position, where a vowel with no
/// consonant before it stands in for the zero onset. Consonants each emit
/// their own class, so clusters and repeated classes survive as written.
pub struct ClassEncoder<'t> {
    table: &'t ClassTable,
}

impl<'t> ClassEncoder<'t> {
    pub fn new(table: &'t ClassTable) -> Self {
        Self { table }
    }

    /// Encodes one segment. `is_segment_initial` opens the segment with an
    /// empty onset slot, so a leading vowel yields the zero-onset class.
    pub fn encode(&self, segment: &str, is_segment_initial: bool) -> Vec<&'t str> {
        let mut letters = Vec::new();
        let mut onset_pending = is_segment_initial;

        for unit in UnitSegmenter::new(self.table, segment) {
            if unit.is_vowel {
                if onset_pending {
                    letters.push(self.table.zero_onset());
                }
            } else {
                letters.push(self.table.classify(&unit));
            }
            onset_pending = false;
        }
        letters
    }

    pub fn contains_vowel(&self, segment: &str) -> bool {
        UnitSegmenter::new(self.table, segment).any(|unit| unit.is_vowel)
    }
}
