use std::cmp::Ordering;
use std::fmt;
use std::io::{self, Write};

/// A document's similarity to the current query.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityPair {
    pub score: f64,
    pub document: String,
}

impl SimilarityPair {
    #[must_use]
    pub fn new(score: f64, document: impl Into<String>) -> Self {
        Self {
            score,
            document: document.into(),
        }
    }

    /// Ranking order: higher score first, ties broken by the
    /// lexicographically greater document identifier first.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.document.cmp(&self.document))
    }
}

impl fmt::Display for SimilarityPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5} {}", self.score, self.document)
    }
}

/// Sort pairs into ranking order.
pub fn rank(mut pairs: Vec<SimilarityPair>) -> Vec<SimilarityPair> {
    pairs.sort_by(SimilarityPair::rank_cmp);
    pairs
}

/// Write one line per pair, in the given order.
pub fn write_ranking<W: Write>(mut out: W, pairs: &[SimilarityPair]) -> io::Result<()> {
    for pair in pairs {
        writeln!(out, "{pair}")?;
    }
    out.flush()
}
