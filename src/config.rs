// File: src/config.rs
//! Decoder configuration.
//!
//! Everything here has a default that reproduces the reference decodings, so
//! most callers never touch it. A JSON file can override any subset of fields:
//!
//! ```json
//! { "segment_policy": "vowel_bearing", "min_code_len": 0 }
//! ```

use crate::error::{LoadError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Punctuation that carries reconstruction syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    pub reconstruction: char,
    pub clitic: char,
    pub alternation: char,
    pub boundary: char,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            reconstruction: '*',
            clitic: '=',
            alternation: '~',
            boundary: '-',
        }
    }
}

/// Which morpheme segments after the first contribute to a code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentPolicy {
    /// Only the root (first) segment is encoded.
    #[default]
    RootOnly,
    /// Later segments are encoded when they contain a vowel; purely
    /// consonantal affix segments are skipped.
    VowelBearing,
}

/// Upper bound for `min_code_len`; padding never produces longer codes.
pub const MAX_MIN_CODE_LEN: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    pub markers: Markers,
    pub segment_policy: SegmentPolicy,
    /// Codes shorter than this are padded with the zero-onset class.
    pub min_code_len: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            markers: Markers::default(),
            segment_policy: SegmentPolicy::default(),
            min_code_len: 2,
        }
    }
}

impl DecoderConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    /// Markers must be distinct, visible characters, and the padding length
    /// stays within [`MAX_MIN_CODE_LEN`].
    pub fn validate(&self) -> Result<()> {
        if self.min_code_len > MAX_MIN_CODE_LEN {
            return Err(LoadError::Config(format!(
                "min_code_len {} exceeds {}",
                self.min_code_len, MAX_MIN_CODE_LEN
            )));
        }

        let m = &self.markers;
        let all = [m.reconstruction, m.clitic, m.alternation, m.boundary];
        if let Some(c) = all.iter().find(|c| c.is_whitespace() || c.is_alphanumeric()) {
            return Err(LoadError::Config(format!("marker {:?} is not punctuation", c)));
        }
        for (i, a) in all.iter().enumerate() {
            if all[i + 1..].contains(a) {
                return Err(LoadError::Config(format!("marker {:?} is used twice", a)));
            }
        }
        Ok(())
    }
}
