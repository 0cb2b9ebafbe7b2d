//! Vector-space ranking for tdsearch.
//!
//! Turns free-text queries into term-frequency vectors over an index
//! vocabulary and ranks the index's documents by cosine similarity.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod engine;
pub mod query;
pub mod rank;
pub mod similarity;

pub use engine::SearchEngine;
pub use query::{read_query, term_frequencies, vectorize};
pub use rank::{rank, write_ranking, SimilarityPair};
pub use similarity::cosine_similarity;
