//! localrec-text
//!
//! Text handling for the recommender: accent/case normalization, keyword
//! tagging, document assembly, and the tokenizer the vector space is built on.

pub mod analyzer;
pub mod document;
pub mod normalize;
pub mod tags;

pub use analyzer::Analyzer;
pub use document::build_document;
pub use normalize::normalize;
pub use tags::{TagExtractor, TagRule, TagTable};
