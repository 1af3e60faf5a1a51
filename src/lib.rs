// src/lib.rs
//! Sound-class codes for reconstructed proto-language word forms.
//!
//! A reconstruction such as `*átá-pá- ~ *kúrá-` is split into its
//! alternants, each alternant is reduced to the classes of its root
//! consonants, and the codes (`HT`, `KR`) come back in input order.
//!
//! ```
//! use sound_classes::Decoder;
//!
//! let decoder = Decoder::with_default_table().unwrap();
//! assert_eq!(decoder.decode_codes("*na- ~ *=an-"), vec!["NH", "HN"]);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod loader;
pub mod persistence;

pub use crate::config::{DecoderConfig, Markers, SegmentPolicy};
pub use crate::core::decoder::Decoder;
pub use crate::core::table::ClassTable;
pub use crate::core::types::{ClassEntry, DecodedForm, Unit};
pub use crate::error::{LoadError, Result};
