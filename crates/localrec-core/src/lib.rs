//! localrec-core
//!
//! Domain types, error taxonomy, configuration and the collaborator seams
//! (`Tagger`, `CatalogSource`) shared by the recommendation crates.

#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod sample;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::{CatalogSource, Tagger};
pub use types::{CatalogItem, CatalogRecord, ItemId, QueryResult};
