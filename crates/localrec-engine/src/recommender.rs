use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{info, warn};

use localrec_core::{CatalogItem, CatalogRecord, CatalogSource, Error, QueryResult, Result, Tagger};
use localrec_text::{build_document, Analyzer, TagExtractor};

use crate::snapshot::Snapshot;

/// Builds catalog snapshots and serves queries against the latest one.
///
/// Builds run without holding any lock. Publishing swaps an `Arc` behind a
/// lock held only for the swap, and readers clone the `Arc` and query it
/// lock-free, so a query in flight finishes against the snapshot it started on.
#[derive(Debug)]
pub struct Recommender<T: Tagger = TagExtractor> {
    tagger: Arc<T>,
    analyzer: Analyzer,
    published: RwLock<Option<Arc<Snapshot<T>>>>,
    generation: AtomicU64,
}

impl Default for Recommender<TagExtractor> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Recommender<TagExtractor> {
    /// A recommender using the built-in tag table and default analyzer.
    pub fn builtin() -> Self {
        Self::new(TagExtractor::builtin())
    }
}

impl<T: Tagger> Recommender<T> {
    pub fn new(tagger: T) -> Self {
        Self::with_analyzer(tagger, Analyzer::default())
    }

    pub fn with_analyzer(tagger: T, analyzer: Analyzer) -> Self {
        Self {
            tagger: Arc::new(tagger),
            analyzer,
            published: RwLock::new(None),
            generation: AtomicU64::new(0),
        }
    }

    pub fn tagger(&self) -> &T {
        &self.tagger
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Fit a new snapshot over `records` without publishing it.
    pub fn build(&self, records: Vec<CatalogRecord>) -> Snapshot<T> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        Snapshot::build(records, Arc::clone(&self.tagger), self.analyzer.clone(), generation)
    }

    /// Make `snapshot` the one queries see and return its handle.
    ///
    /// Generations only move forward: a snapshot built before the one
    /// currently published is dropped and the current handle is returned.
    pub fn publish(&self, snapshot: Snapshot<T>) -> Arc<Snapshot<T>> {
        let mut slot = self.published.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(current) = slot.as_ref() {
            if current.generation() > snapshot.generation() {
                warn!(
                    stale = snapshot.generation(),
                    current = current.generation(),
                    "discarding snapshot older than the published one"
                );
                return Arc::clone(current);
            }
        }
        let snapshot = Arc::new(snapshot);
        *slot = Some(Arc::clone(&snapshot));
        drop(slot);
        info!(
            generation = snapshot.generation(),
            items = snapshot.len(),
            terms = snapshot.index().vocabulary_len(),
            "published catalog snapshot"
        );
        snapshot
    }

    pub fn fit(&self, records: Vec<CatalogRecord>) -> Arc<Snapshot<T>> {
        let snapshot = self.build(records);
        self.publish(snapshot)
    }

    /// Pull a fresh catalog from `source`, fit it and publish it.
    ///
    /// When the source fails nothing is published and the previous snapshot
    /// stays current.
    pub fn rebuild<S: CatalogSource + ?Sized>(&self, source: &S) -> Result<Arc<Snapshot<T>>> {
        let records = source.snapshot().map_err(|e| {
            warn!(error = %e, "catalog source failed, keeping the published snapshot");
            e
        })?;
        Ok(self.fit(records))
    }

    pub fn current(&self) -> Result<Arc<Snapshot<T>>> {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(Arc::clone)
            .ok_or_else(|| Error::NotReady("no catalog has been fitted yet".into()))
    }

    pub fn query(&self, text: &str, top_k: usize) -> Result<Vec<QueryResult>> {
        self.current()?.query(text, top_k)
    }

    pub fn tags_for(&self, record: &CatalogRecord) -> Vec<String> {
        self.tagger.extract_tags(&record.description)
    }

    pub fn document_for(&self, record: &CatalogRecord) -> String {
        build_document(&CatalogItem::derive(record.clone(), self.tagger.as_ref()))
    }
}
