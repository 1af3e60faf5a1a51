// src/core/splitter.rs
use crate::config::Markers;

/// Splits a raw form into its co-listed reconstructions.
///
/// Each alternant comes back trimmed, with the leading reconstruction and
/// clitic markers removed. Empty pieces (a doubled `~`, a bare `*`) are
/// dropped. Order is preserved.
pub fn split_alternants<'a>(raw: &'a str, markers: &Markers) -> Vec<&'a str> {
    raw.trim()
        .split(markers.alternation)
        .map(|piece| clean_alternant(piece, markers))
        .filter(|alternant| !alternant.is_empty())
        .collect()
}

/// Strips whitespace, reconstruction markers and a clitic marker from the
/// front of one alternant. Applying it twice is the same as applying it once.
pub fn clean_alternant<'a>(piece: &'a str, markers: &Markers) -> &'a str {
    piece
        .trim()
        .trim_start_matches(markers.reconstruction)
        .trim_start()
        .trim_start_matches(markers.clitic)
        .trim()
}

/// Splits an alternant into morpheme segments on boundary and clitic
/// markers. A trailing boundary (open stem) and other empty segments
/// produce nothing.
pub fn split_segments<'a>(alternant: &'a str, markers: &Markers) -> Vec<&'a str> {
    alternant
        .split(|c: char| c == markers.boundary || c == markers.clitic)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers() -> Markers {
        Markers::default()
    }

    #[test]
    fn alternants_keep_their_order() {
        assert_eq!(split_alternants("*átá-pá- ~ *kúrá-", &markers()), vec!["átá-pá-", "kúrá-"]);
        assert_eq!(split_alternants("*na- ~ *=an-", &markers()), vec!["na-", "an-"]);
        assert_eq!(split_alternants("  *múina ", &markers()), vec!["múina"]);
    }

    #[test]
    fn empty_alternants_are_dropped() {
        assert_eq!(split_alternants("*pa ~~ *ta", &markers()), vec!["pa", "ta"]);
        assert_eq!(split_alternants("*pa ~ * ~", &markers()), vec!["pa"]);
        assert!(split_alternants("", &markers()).is_empty());
        assert!(split_alternants(" ~ ", &markers()).is_empty());
    }

    #[test]
    fn cleaning_is_idempotent() {
        let once = clean_alternant(" * =an- ", &markers());
        assert_eq!(once, "an-");
        assert_eq!(clean_alternant(once, &markers()), once);
    }

    #[test]
    fn open_stems_and_stray_hyphens() {
        assert_eq!(split_segments("átá-pá-", &markers()), vec!["átá", "pá"]);
        assert_eq!(split_segments("-kái--n-púri", &markers()), vec!["kái", "n", "púri"]);
        assert_eq!(split_segments("na=ka", &markers()), vec!["na", "ka"]);
        assert!(split_segments("-", &markers()).is_empty());
    }
}
