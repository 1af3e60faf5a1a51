// src/core/table.rs
use crate::core::normalize::{decompose, strip_marks};
use crate::core::types::{ClassEntry, Unit};
use crate::error::{LoadError, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Class value that marks a row as a vowel grapheme rather than a consonant.
pub const VOWEL_CLASS: &str = "V";
/// Reserved unit key whose row overrides the zero-onset class.
pub const ZERO_ONSET_KEY: &str = "∅";
pub const DEFAULT_ZERO_ONSET: &str = "H";
/// Emitted for units the table does not know.
pub const UNKNOWN_MARKER: &str = "?";
/// Used when a resource declares no vowel rows.
pub const DEFAULT_VOWELS: &[&str] = &[
    "a", "e", "i", "o", "u", "ə", "ɛ", "ɔ", "ɨ", "ʉ", "ɪ", "ʊ", "æ", "ɐ", "V",
];

/// Characters a class code may never contain, so codes stay free of
/// reconstruction syntax.
const RESERVED_CHARS: &[char] = &['*', '~', '-', '='];

/// Immutable mapping from phonological unit to sound class.
///
/// Keys are stored decomposed (see [`crate::core::normalize`]) so precomposed
/// and combining spellings of the same letter hit the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassTable {
    classes: HashMap<String, String>,
    vowels: HashSet<String>,
    zero_onset: String,
    /// Longest known unit, counted in base letters.
    max_unit_len: usize,
}

impl ClassTable {
    /// Builds the table from resource rows. Later rows override earlier
    /// rows for the same unit.
    pub fn build<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = ClassEntry>,
    {
        let mut classes = HashMap::new();
        let mut vowels = HashSet::new();
        let mut zero_onset = DEFAULT_ZERO_ONSET.to_string();
        let mut max_unit_len = 1;

        for (index, entry) in rows.into_iter().enumerate() {
            let row = index + 1;
            let unit = decompose(entry.unit.trim());
            let class = entry.class.trim().to_string();

            if unit.is_empty() {
                return Err(LoadError::MalformedRow { row, reason: "empty unit".into() });
            }
            if class.is_empty() {
                return Err(LoadError::MalformedRow { row, reason: format!("no class for '{}'", unit) });
            }
            if class == UNKNOWN_MARKER || class.contains(RESERVED_CHARS) {
                return Err(LoadError::MalformedRow {
                    row,
                    reason: format!("class '{}' uses a reserved symbol", class),
                });
            }

            if unit == ZERO_ONSET_KEY {
                zero_onset = class;
                continue;
            }
            if class == VOWEL_CLASS {
                vowels.insert(strip_marks(&unit));
                continue;
            }

            max_unit_len = max_unit_len.max(strip_marks(&unit).chars().count());
            if let Some(previous) = classes.insert(unit.clone(), class.clone()) {
                if previous != class {
                    warn!("unit '{}' listed twice ({} then {}); keeping {}", unit, previous, class, class);
                }
            }
        }

        if classes.is_empty() {
            return Err(LoadError::EmptyTable);
        }
        if vowels.is_empty() {
            debug!("no vowel rows in resource, using the default vowel inventory");
            vowels.extend(DEFAULT_VOWELS.iter().map(|v| v.to_string()));
        }

        info!(
            "class table built: {} units, {} vowels, zero onset '{}'",
            classes.len(),
            vowels.len(),
            zero_onset
        );
        Ok(Self { classes, vowels, zero_onset, max_unit_len })
    }

    /// Two-stage lookup: the unit as written, then with diacritics stripped.
    /// Falls back to [`UNKNOWN_MARKER`] instead of failing.
    pub fn lookup(&self, unit: &str) -> &str {
        let exact = decompose(unit);
        self.lookup_parts(&exact, &strip_marks(&exact))
            .unwrap_or_else(|| {
                debug!("no class for unit '{}'", unit);
                UNKNOWN_MARKER
            })
    }

    /// Same as [`lookup`](Self::lookup) for an already segmented unit.
    pub fn classify(&self, unit: &Unit) -> &str {
        self.lookup_parts(&unit.text, &unit.stripped).unwrap_or_else(|| {
            debug!("no class for unit '{}'", unit.text);
            UNKNOWN_MARKER
        })
    }

    fn lookup_parts(&self, exact: &str, stripped: &str) -> Option<&str> {
        self.classes
            .get(exact)
            .or_else(|| self.classes.get(stripped))
            .map(String::as_str)
    }

    /// True if the unit, as written or stripped, is a consonant entry.
    pub fn contains(&self, unit: &str) -> bool {
        let exact = decompose(unit);
        self.lookup_parts(&exact, &strip_marks(&exact)).is_some()
    }

    pub fn is_vowel(&self, unit: &str) -> bool {
        self.vowels.contains(&strip_marks(unit))
    }

    pub fn zero_onset(&self) -> &str {
        &self.zero_onset
    }

    pub fn unknown_marker(&self) -> &str {
        UNKNOWN_MARKER
    }

    pub fn max_unit_len(&self) -> usize {
        self.max_unit_len
    }

    /// Number of consonant units.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
