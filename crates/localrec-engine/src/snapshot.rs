use std::sync::Arc;

use rayon::prelude::*;
use tracing::debug;

use localrec_core::{CatalogItem, CatalogRecord, Error, QueryResult, Result, Tagger};
use localrec_text::{build_document, Analyzer, TagExtractor};
use localrec_vector::VectorIndex;

/// An immutable, queryable view of one catalog version.
///
/// Bundles the fitted [`VectorIndex`], the tagged items in row order and
/// the tagger that tagged them, so a query always explains its results with
/// the same table the items were tagged with.
#[derive(Debug)]
pub struct Snapshot<T: Tagger = TagExtractor> {
    generation: u64,
    tagger: Arc<T>,
    items: Vec<CatalogItem>,
    index: VectorIndex,
}

impl<T: Tagger> Snapshot<T> {
    pub fn build(records: Vec<CatalogRecord>, tagger: Arc<T>, analyzer: Analyzer, generation: u64) -> Self {
        let items: Vec<CatalogItem> = records
            .into_par_iter()
            .map(|record| CatalogItem::derive(record, tagger.as_ref()))
            .collect();
        let documents: Vec<String> = items.par_iter().map(build_document).collect();
        let index = VectorIndex::fit_with(analyzer, &documents);
        Self { generation, tagger, items, index }
    }

    /// Rank every item against `text` and return the best `top_k`.
    ///
    /// Scores are cosine similarities in `[0, 1]`. Equal scores keep corpus
    /// order, so a query with no known terms returns the first `top_k` items
    /// as they were fitted.
    pub fn query(&self, text: &str, top_k: usize) -> Result<Vec<QueryResult>> {
        if top_k == 0 {
            return Err(Error::InvalidArgument("top_k must be a positive integer".into()));
        }
        let query_tags = self.tagger.extract_tags(text);
        let query_vec = self.index.transform(text);

        let mut ranked: Vec<(usize, f64)> = self
            .index
            .similarities(&query_vec)
            .into_iter()
            .map(clamp_unit)
            .enumerate()
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(top_k);

        let results: Vec<QueryResult> = ranked
            .into_iter()
            .map(|(position, score)| {
                let item = &self.items[position];
                QueryResult {
                    item_id: item.id().to_string(),
                    position,
                    score,
                    shared_tags: shared_tags(&query_tags, item.tags()),
                }
            })
            .collect();
        debug!(
            generation = self.generation,
            query_terms = query_vec.nnz(),
            query_tags = ?query_tags,
            returned = results.len(),
            "ranked catalog"
        );
        Ok(results)
    }

    pub fn generation(&self) -> u64 { self.generation }

    pub fn items(&self) -> &[CatalogItem] { &self.items }

    pub fn item(&self, position: usize) -> Option<&CatalogItem> { self.items.get(position) }

    pub fn index(&self) -> &VectorIndex { &self.index }

    pub fn tagger(&self) -> &T { &self.tagger }

    pub fn len(&self) -> usize { self.items.len() }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }
}

fn clamp_unit(score: f64) -> f64 {
    if score > 0.0 { score.min(1.0) } else { 0.0 }
}

/// Tags present on both sides, sorted.
fn shared_tags(query_tags: &[String], item_tags: &[String]) -> Vec<String> {
    let mut shared: Vec<String> = item_tags.iter().filter(|t| query_tags.contains(*t)).cloned().collect();
    shared.sort();
    shared.dedup();
    shared
}
