// src/core/segmenter.rs
use crate::core::normalize::{decompose, is_modifier, letter_groups, strip_marks};
use crate::core::table::ClassTable;
use crate::core::types::Unit;

/// Walks one morpheme segment and yields its phonological units.
///
/// Multi-letter units known to the table (digraphs, affricates) are matched
/// greedily, longest first. Anything else is one base letter with whatever
/// marks are attached to it. The segment is normalized once, on creation.
pub struct UnitSegmenter<'t> {
    table: &'t ClassTable,
    groups: Vec<String>,
    pos: usize,
}

impl<'t> UnitSegmenter<'t> {
    pub fn new(table: &'t ClassTable, segment: &str) -> Self {
        Self {
            table,
            groups: letter_groups(&decompose(segment)),
            pos: 0,
        }
    }

    fn make_unit(&self, text: String) -> Unit {
        let stripped = strip_marks(&text);
        let is_vowel = self.table.is_vowel(&stripped);
        Unit { text, stripped, is_vowel }
    }
}

impl<'t> Iterator for UnitSegmenter<'t> {
    type Item = Unit;

    fn next(&mut self) -> Option<Unit> {
        // whitespace and marks with no letter to sit on
        while self.groups.get(self.pos)?.chars().all(|c| c.is_whitespace() || is_modifier(c)) {
            self.pos += 1;
        }

        let remaining = self.groups.len() - self.pos;
        let longest = self.table.max_unit_len().min(remaining);
        for len in (2..=longest).rev() {
            let candidate: String = self.groups[self.pos..self.pos + len].concat();
            if strip_marks(&candidate).chars().count() >= 2 && self.table.contains(&candidate) {
                self.pos += len;
                return Some(self.make_unit(candidate));
            }
        }

        let single = self.groups[self.pos].clone();
        self.pos += 1;
        Some(self.make_unit(single))
    }
}
