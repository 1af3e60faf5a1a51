// src/core/decoder.rs
use crate::config::{DecoderConfig, SegmentPolicy};
use crate::core::encoder::ClassEncoder;
use crate::core::splitter::{split_alternants, split_segments};
use crate::core::table::ClassTable;
use crate::core::types::DecodedForm;
use crate::error::Result;
use crate::loader::{self, DEFAULT_TABLE_TSV};
use log::debug;
use std::path::Path;

/// Turns reconstructions into sound-class codes.
///
/// The class table is loaded once and never changes afterwards, so a single
/// `Decoder` can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct Decoder {
    table: ClassTable,
    config: DecoderConfig,
}

impl Decoder {
    /// Loads the class table from a resource file (TSV, CSV or JSON).
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let rows = loader::load_rows(path)?;
        Ok(Self::from_table(ClassTable::build(rows)?))
    }

    /// Uses the class table bundled with the crate.
    pub fn with_default_table() -> Result<Self> {
        let rows = loader::parse_delimited(DEFAULT_TABLE_TSV, '\t')?;
        Ok(Self::from_table(ClassTable::build(rows)?))
    }

    pub fn from_table(table: ClassTable) -> Self {
        Self { table, config: DecoderConfig::default() }
    }

    pub fn with_config(table: ClassTable, config: DecoderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { table, config })
    }

    pub fn table(&self) -> &ClassTable {
        &self.table
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decodes every alternant of `raw`, returning the cleaned alternants and
    /// their codes side by side. Never fails: unknown sounds come out as the
    /// table's unknown marker.
    pub fn decode_form(&self, raw: &str) -> DecodedForm {
        let mut decoded = DecodedForm::default();
        for alternant in split_alternants(raw, &self.config.markers) {
            decoded.codes.push(self.encode_alternant(alternant));
            decoded.alternants.push(alternant.to_string());
        }
        decoded
    }

    /// Like [`decode_form`](Self::decode_form), keeping only the codes.
    pub fn decode_codes(&self, raw: &str) -> Vec<String> {
        self.decode_form(raw).codes
    }

    fn encode_alternant(&self, alternant: &str) -> String {
        let encoder = ClassEncoder::new(&self.table);
        let mut letters: Vec<&str> = Vec::new();

        for (index, segment) in split_segments(alternant, &self.config.markers).into_iter().enumerate() {
            if index > 0 && !self.includes_affix(&encoder, segment) {
                debug!("skipping segment '{}' of '{}'", segment, alternant);
                continue;
            }
            letters.extend(encoder.encode(segment, true));
        }

        let min_len = self.config.min_code_len.max(1);
        while letters.len() < min_len {
            letters.push(self.table.zero_onset());
        }
        letters.concat()
    }

    fn includes_affix(&self, encoder: &ClassEncoder<'_>, segment: &str) -> bool {
        match self.config.segment_policy {
            SegmentPolicy::RootOnly => false,
            SegmentPolicy::VowelBearing => encoder.contains_vowel(segment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoder() -> Decoder {
        Decoder::with_default_table().unwrap()
    }

    #[test]
    fn single_alternant() {
        assert_eq!(decoder().decode_codes("*múina"), vec!["MN"]);
        assert_eq!(decoder().decode_codes("*náŋ"), vec!["NN"]);
    }

    #[test]
    fn alternants_pair_with_codes() {
        let decoded = decoder().decode_form("*átá-pá- ~ *kúrá-");
        assert_eq!(decoded.alternants, vec!["átá-pá-", "kúrá-"]);
        assert_eq!(decoded.codes, vec!["HT", "KR"]);
        let pairs: Vec<_> = decoded.pairs().collect();
        assert_eq!(pairs, vec![("átá-pá-", "HT"), ("kúrá-", "KR")]);
    }

    #[test]
    fn short_codes_are_padded_with_zero_onset() {
        assert_eq!(decoder().decode_codes("*tí"), vec!["TH"]);
        assert_eq!(decoder().decode_codes("*a"), vec!["HH"]);
    }

    #[test]
    fn padding_can_be_turned_off() {
        let config = DecoderConfig { min_code_len: 0, ..DecoderConfig::default() };
        let decoder = Decoder::with_config(decoder().table().clone(), config).unwrap();
        assert_eq!(decoder.decode_codes("*tí"), vec!["T"]);
        assert_eq!(decoder.decode_codes("*-"), vec!["H"]);
    }

    #[test]
    fn vowel_bearing_policy_keeps_root_like_segments() {
        let config = DecoderConfig {
            segment_policy: SegmentPolicy::VowelBearing,
            ..DecoderConfig::default()
        };
        let decoder = Decoder::with_config(decoder().table().clone(), config).unwrap();
        assert_eq!(decoder.decode_codes("*sú-ná"), vec!["SN"]);
        assert_eq!(decoder.decode_codes("*kə́rə-s-"), vec!["KR"]);
        assert_eq!(decoder.decode_codes("*àmpùr-à"), vec!["HMPRH"]);
    }

    #[test]
    fn root_only_policy_drops_affixes() {
        assert_eq!(decoder().decode_codes("*sú-ná"), vec!["SH"]);
        assert_eq!(decoder().decode_codes("*àmpùr-à"), vec!["HMPR"]);
    }

    #[test]
    fn identical_codes_are_not_merged() {
        assert_eq!(decoder().decode_codes("*pa ~ *ba"), vec!["PH", "PH"]);
    }

    #[test]
    fn empty_input_has_no_alternants() {
        assert!(decoder().decode_form("").is_empty());
        assert!(decoder().decode_form("  ~ * ").is_empty());
    }
}
