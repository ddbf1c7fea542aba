//! localrec-engine
//!
//! Ties tagging, documents and the TF-IDF space together into queryable
//! snapshots, and publishes them to concurrent readers.

pub mod recommender;
pub mod snapshot;

pub use recommender::Recommender;
pub use snapshot::Snapshot;
