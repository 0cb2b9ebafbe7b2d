pub mod documents;
pub mod matrix;
pub mod vocabulary;

pub use documents::DocumentSet;
pub use matrix::TermDocumentMatrix;
pub use vocabulary::Vocabulary;
