//! Domain types shared by the tagging, vector and engine crates.

use serde::{Deserialize, Serialize};

use crate::traits::Tagger;

pub type ItemId = String;

/// One catalog entry as delivered by the catalog collaborator.
///
/// This is the only row shape downstream code sees; raw storage rows are
/// converted once at the ingestion boundary (see `catalog`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub description: String,
    pub discount: String,
    pub city: String,
}

impl CatalogRecord {
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        discount: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            description: description.into(),
            discount: discount.into(),
            city: city.into(),
        }
    }
}

/// A catalog record together with the tags derived from its description.
///
/// Tags can only be produced by [`CatalogItem::derive`], so they always
/// match what the tagger returns for the description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogItem {
    #[serde(flatten)]
    record: CatalogRecord,
    tags: Vec<String>,
}

impl CatalogItem {
    pub fn derive<T: Tagger + ?Sized>(record: CatalogRecord, tagger: &T) -> Self {
        let tags = tagger.extract_tags(&record.description);
        Self { record, tags }
    }

    pub fn id(&self) -> &str { &self.record.id }
    pub fn name(&self) -> &str { &self.record.name }
    pub fn category(&self) -> &str { &self.record.category }
    pub fn description(&self) -> &str { &self.record.description }
    pub fn discount(&self) -> &str { &self.record.discount }
    pub fn city(&self) -> &str { &self.record.city }
    pub fn tags(&self) -> &[String] { &self.tags }
    pub fn record(&self) -> &CatalogRecord { &self.record }
}

/// A single ranked recommendation.
///
/// `position` is the item's row in the snapshot that produced the result.
/// `score` is the cosine similarity, always within `[0, 1]`. `shared_tags`
/// lists the tags common to the query and the item, sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub item_id: ItemId,
    pub position: usize,
    pub score: f64,
    pub shared_tags: Vec<String>,
}
