use crate::error::Result;
use crate::types::CatalogRecord;

/// Maps free text to an ordered, deduplicated list of tags.
pub trait Tagger: Send + Sync {
    fn extract_tags(&self, text: &str) -> Vec<String>;
}

/// Produces a full, ordered snapshot of the catalog on demand.
pub trait CatalogSource {
    fn snapshot(&self) -> Result<Vec<CatalogRecord>>;
}

impl CatalogSource for Vec<CatalogRecord> {
    fn snapshot(&self) -> Result<Vec<CatalogRecord>> { Ok(self.clone()) }
}

impl CatalogSource for [CatalogRecord] {
    fn snapshot(&self) -> Result<Vec<CatalogRecord>> { Ok(self.to_vec()) }
}
