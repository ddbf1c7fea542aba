//! localrec-vector
//!
//! In-memory TF-IDF vector space: a sorted vocabulary with smoothed IDF
//! weights and one L2-normalized sparse row per catalog document.

pub mod index;
pub mod sparse;

pub use index::{smoothed_idf, VectorIndex};
pub use sparse::SparseVector;
