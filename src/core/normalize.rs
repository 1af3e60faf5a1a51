// src/core/normalize.rs
//! Diacritic folding for reconstruction strings.
//!
//! Reconstructions arrive with a mix of precomposed letters (`á`, `ọ`, `ḿ`)
//! and base letters followed by combining marks (`ə̀`). Everything is brought
//! to canonical decomposition (NFD) here, once, so the table and the
//! segmenter compare like with like. The inventory of marks stripped for
//! lookup is fixed: the combining diacritics blocks, the IPA length marks and
//! the Chao tone letters.

use unicode_normalization::UnicodeNormalization;

/// Returns true for characters that modify the preceding base letter rather
/// than standing on their own.
pub fn is_modifier(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}'   // combining diacritical marks
        | '\u{1DC0}'..='\u{1DFF}' // combining diacritical marks supplement
        | 'ː' | 'ˑ'               // length
        | '˥'..='˩'               // tone letters
    )
}

/// Canonical decomposition: precomposed letters become base letter plus
/// combining marks, in canonical mark order.
pub fn decompose(input: &str) -> String {
    input.nfd().collect()
}

/// Removes every tone, length and other diacritic mark.
pub fn strip_marks(input: &str) -> String {
    decompose(input).chars().filter(|&c| !is_modifier(c)).collect()
}

/// Groups a decomposed string into base letters, each carrying the marks
/// that follow it. Marks with no preceding letter form their own group.
pub fn letter_groups(decomposed: &str) -> Vec<String> {
    let mut groups: Vec<String> = Vec::new();
    for c in decomposed.chars() {
        if is_modifier(c) {
            if let Some(last) = groups.last_mut() {
                last.push(c);
                continue;
            }
        }
        groups.push(c.to_string());
    }
    groups
}
