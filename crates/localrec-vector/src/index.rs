use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use rayon::prelude::*;
use tracing::debug;

use localrec_text::Analyzer;

use crate::sparse::SparseVector;

/// A fitted TF-IDF space.
///
/// Holds the vocabulary (term to column, lexicographic order), one smoothed
/// IDF weight per column, and one L2-normalized row per fitted document in
/// input order. Immutable once built; refitting produces a new value.
#[derive(Debug, Clone)]
pub struct VectorIndex {
    analyzer: Analyzer,
    // the position of a term is its column
    vocabulary: IndexMap<String, f64>,
    rows: Vec<SparseVector>,
}

impl Default for VectorIndex {
    /// The fitted-on-nothing index: empty vocabulary, no rows.
    fn default() -> Self {
        Self { analyzer: Analyzer::default(), vocabulary: IndexMap::new(), rows: Vec::new() }
    }
}

/// `ln((1 + n) / (1 + df)) + 1`
pub fn smoothed_idf(n_documents: usize, document_frequency: usize) -> f64 {
    ((1.0 + n_documents as f64) / (1.0 + document_frequency as f64)).ln() + 1.0
}

impl VectorIndex {
    pub fn fit<S: AsRef<str> + Sync>(documents: &[S]) -> Self {
        Self::fit_with(Analyzer::default(), documents)
    }

    pub fn fit_with<S: AsRef<str> + Sync>(analyzer: Analyzer, documents: &[S]) -> Self {
        let counts: Vec<HashMap<String, u32>> = documents
            .par_iter()
            .map(|doc| term_counts(&analyzer, doc.as_ref()))
            .collect();

        let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        for doc in &counts {
            for term in doc.keys() {
                *document_frequency.entry(term.as_str()).or_insert(0) += 1;
            }
        }
        let vocabulary: IndexMap<String, f64> = document_frequency
            .into_iter()
            .map(|(term, df)| (term.to_string(), smoothed_idf(documents.len(), df)))
            .collect();

        let rows: Vec<SparseVector> = counts.par_iter().map(|doc| weigh(&vocabulary, doc)).collect();
        debug!(documents = rows.len(), terms = vocabulary.len(), "fitted tf-idf space");
        Self { analyzer, vocabulary, rows }
    }

    /// Project `text` into the fitted space. Unknown terms are ignored; text
    /// with no known terms maps to the zero vector.
    pub fn transform(&self, text: &str) -> SparseVector {
        weigh(&self.vocabulary, &term_counts(&self.analyzer, text))
    }

    /// Dot product of `query` with every row, in row order. For a normalized
    /// query this is the cosine similarity.
    pub fn similarities(&self, query: &SparseVector) -> Vec<f64> {
        self.rows.par_iter().map(|row| row.dot(query)).collect()
    }

    pub fn analyzer(&self) -> &Analyzer { &self.analyzer }

    /// Number of fitted documents.
    pub fn len(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn vocabulary_len(&self) -> usize { self.vocabulary.len() }

    pub fn column(&self, term: &str) -> Option<usize> { self.vocabulary.get_index_of(term) }

    pub fn term(&self, column: usize) -> Option<&str> {
        self.vocabulary.get_index(column).map(|(t, _)| t.as_str())
    }

    pub fn idf(&self, term: &str) -> Option<f64> { self.vocabulary.get(term).copied() }

    /// Terms in column order.
    pub fn terms(&self) -> impl Iterator<Item = &str> { self.vocabulary.keys().map(String::as_str) }

    pub fn row(&self, i: usize) -> Option<&SparseVector> { self.rows.get(i) }

    pub fn rows(&self) -> &[SparseVector] { &self.rows }
}

fn term_counts(analyzer: &Analyzer, text: &str) -> HashMap<String, u32> {
    let mut counts = HashMap::new();
    for token in analyzer.tokens(text) {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

fn weigh(vocabulary: &IndexMap<String, f64>, counts: &HashMap<String, u32>) -> SparseVector {
    let entries = counts
        .iter()
        .filter_map(|(term, &count)| {
            vocabulary
                .get_full(term.as_str())
                .map(|(col, _, idf)| (col, f64::from(count) * idf))
        })
        .collect();
    SparseVector::from_entries(entries).normalized()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idf_uses_the_smoothed_formula() {
        assert!((smoothed_idf(3, 2) - 1.287_682_072_451_780_8).abs() < 1e-12);
        assert!((smoothed_idf(3, 1) - 1.693_147_180_559_945_4).abs() < 1e-12);
        assert_eq!(smoothed_idf(5, 5), 1.0);
    }

    #[test]
    fn vocabulary_is_sorted_and_complete() {
        let index = VectorIndex::fit(&["tacos al pastor", "Sushi y ramen", "café de olla"]);
        let terms: Vec<&str> = index.terms().collect();
        assert_eq!(terms, vec!["al", "café", "de", "olla", "pastor", "ramen", "sushi", "tacos"]);
        assert_eq!(index.column("sushi"), Some(6));
        assert_eq!(index.term(6), Some("sushi"));
        assert_eq!(index.column("y"), None, "single-character tokens are not terms");
    }

    #[test]
    fn empty_corpus_is_a_valid_index() {
        let index = VectorIndex::fit::<&str>(&[]);
        assert!(index.is_empty());
        assert_eq!(index.vocabulary_len(), 0);
        assert!(index.transform("anything at all").is_zero());
        assert!(index.similarities(&SparseVector::zero()).is_empty());
    }

    #[test]
    fn document_without_terms_has_a_zero_row() {
        let index = VectorIndex::fit(&["a b c", "tacos"]);
        assert!(index.row(0).unwrap().is_zero());
        assert!((index.row(1).unwrap().norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn transform_ignores_unknown_terms() {
        let index = VectorIndex::fit(&["sushi barato", "tacos caros"]);
        let known = index.transform("sushi");
        let mixed = index.transform("sushi pizza hamburguesa");
        assert_eq!(known, mixed);
        assert!(index.transform("pizza").is_zero());
    }
}
