use tdsearch_core::Index;

use crate::query::vectorize;
use crate::rank::{rank, SimilarityPair};
use crate::similarity::cosine_similarity;

/// Ranks the documents of a loaded [`Index`] against queries.
///
/// The matrix is transposed into per-document vectors once, on
/// construction.
#[derive(Debug)]
pub struct SearchEngine<'a> {
    index: &'a Index,
    document_vectors: Vec<Vec<f64>>,
}

impl<'a> SearchEngine<'a> {
    #[must_use]
    pub fn new(index: &'a Index) -> Self {
        let document_vectors = index
            .matrix
            .document_vectors(index.vocabulary.len(), index.documents.len());
        Self {
            index,
            document_vectors,
        }
    }

    pub fn document_vectors(&self) -> &[Vec<f64>] {
        &self.document_vectors
    }

    /// Score every document against `query_vector`, in document order.
    pub fn score(&self, query_vector: &[f64]) -> Vec<SimilarityPair> {
        self.index
            .documents
            .iter()
            .zip(&self.document_vectors)
            .map(|(document, vector)| {
                SimilarityPair::new(cosine_similarity(query_vector, vector), document)
            })
            .collect()
    }

    /// Rank every document against the free-text `query`.
    pub fn search(&self, query: &str) -> Vec<SimilarityPair> {
        let query_vector = vectorize(query, &self.index.vocabulary);
        log::debug!(
            "Query vector has {} non-zero terms",
            query_vector.iter().filter(|f| **f != 0.0).count()
        );
        rank(self.score(&query_vector))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tdsearch_core::{DocumentSet, TermDocumentMatrix, Vocabulary};

    fn pets_index() -> Index {
        Index::new(
            Vocabulary::from_terms(["cat", "dog"]),
            DocumentSet::from_ids(["d1", "d2"]),
            TermDocumentMatrix::from_rows(vec![vec![1, 0], vec![0, 2]]),
        )
    }

    #[test]
    fn test_search_single_term() {
        let index = pets_index();
        let engine = SearchEngine::new(&index);
        let results = engine.search("cat");
        assert_eq!(
            results,
            vec![SimilarityPair::new(1.0, "d1"), SimilarityPair::new(0.0, "d2")]
        );
    }

    #[test]
    fn test_search_empty_query_scores_zero() {
        let index = pets_index();
        let engine = SearchEngine::new(&index);
        let results = engine.search("");
        assert!(results.iter().all(|p| p.score == 0.0));
        // ties fall back to descending identifiers
        assert_eq!(results[0].document, "d2");
    }

    #[test]
    fn test_score_keeps_document_order() {
        let index = pets_index();
        let engine = SearchEngine::new(&index);
        let scores = engine.score(&[0.0, 1.0]);
        assert_eq!(
            scores,
            vec![SimilarityPair::new(0.0, "d1"), SimilarityPair::new(1.0, "d2")]
        );
    }

    #[test]
    fn test_no_documents() {
        let index = Index::new(
            Vocabulary::from_terms(["cat"]),
            DocumentSet::default(),
            TermDocumentMatrix::default(),
        );
        let engine = SearchEngine::new(&index);
        assert!(engine.search("cat").is_empty());
    }
}
