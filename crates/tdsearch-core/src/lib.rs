//! Core index model for tdsearch.
//!
//! This crate defines the term vocabulary, the document set, the
//! term-document frequency matrix, and the loader that reads all three
//! from an index directory.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod index;
pub mod model;

pub use error::{Error, Result};
pub use index::{Index, IndexFiles};
pub use model::{DocumentSet, TermDocumentMatrix, Vocabulary};
