use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::{DocumentSet, TermDocumentMatrix, Vocabulary};

pub const TERMS_FILE: &str = "sorted_terms.txt";
pub const DOCUMENTS_FILE: &str = "sorted_documents.txt";
pub const MATRIX_FILE: &str = "td_matrix.txt";

/// File names of the three artifacts inside an index directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IndexFiles {
    pub terms: String,
    pub documents: String,
    pub matrix: String,
}

impl Default for IndexFiles {
    fn default() -> Self {
        Self {
            terms: TERMS_FILE.to_string(),
            documents: DOCUMENTS_FILE.to_string(),
            matrix: MATRIX_FILE.to_string(),
        }
    }
}

/// A loaded term-document index.
///
/// Loaded once and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    pub vocabulary: Vocabulary,
    pub documents: DocumentSet,
    pub matrix: TermDocumentMatrix,
}

impl Index {
    #[must_use]
    pub fn new(vocabulary: Vocabulary, documents: DocumentSet, matrix: TermDocumentMatrix) -> Self {
        Self {
            vocabulary,
            documents,
            matrix,
        }
    }

    /// Load an index using the standard artifact names.
    pub fn load(dir: &Path) -> Result<Self> {
        Self::load_with(dir, &IndexFiles::default())
    }

    /// Load an index from `dir`.
    ///
    /// Artifacts are read in order (terms, documents, matrix) and loading
    /// stops at the first one that is missing.
    pub fn load_with(dir: &Path, files: &IndexFiles) -> Result<Self> {
        let vocabulary = Vocabulary::from_terms(read_tokens(&dir.join(&files.terms))?);
        let documents = DocumentSet::from_ids(read_tokens(&dir.join(&files.documents))?);
        let matrix = read_matrix(&dir.join(&files.matrix))?;

        log::info!(
            "Loaded index from {}: {} terms, {} documents, {} matrix rows",
            dir.display(),
            vocabulary.len(),
            documents.len(),
            matrix.row_count()
        );

        Ok(Self::new(vocabulary, documents, matrix))
    }
}

/// Read all whitespace-separated tokens from `path`, in file order.
pub fn read_tokens(path: &Path) -> Result<Vec<String>> {
    let contents = read_artifact(path)?;
    Ok(contents.split_whitespace().map(str::to_string).collect())
}

/// Read a frequency matrix: one row per non-empty line.
pub fn read_matrix(path: &Path) -> Result<TermDocumentMatrix> {
    let contents = read_artifact(path)?;
    let mut rows = Vec::new();

    for (line_index, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse::<i64>().map_err(|source| Error::MatrixParse {
                    path: path.to_path_buf(),
                    line: line_index + 1,
                    token: token.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        rows.push(row);
    }

    Ok(TermDocumentMatrix::from_rows(rows))
}

fn read_artifact(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    log::debug!("Reading {}", path.display());
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
