// src/core/mod.rs
pub mod decoder;
pub mod encoder;
pub mod normalize;
pub mod segmenter;
pub mod splitter;
pub mod table;
pub mod types;
