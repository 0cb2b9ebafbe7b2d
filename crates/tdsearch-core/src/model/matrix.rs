/// Raw term-by-document frequency matrix.
///
/// Row `i` holds the frequencies of vocabulary term `i`, one column per
/// document. Rows are kept exactly as read; shape checks happen when the
/// matrix is turned into per-document vectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermDocumentMatrix {
    rows: Vec<Vec<i64>>,
}

impl TermDocumentMatrix {
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Self {
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<i64>] {
        &self.rows
    }

    /// Transpose the matrix into one dense vector per document.
    ///
    /// Every vector is `term_count` long. A row whose length differs from
    /// `document_count` is skipped, leaving zeros in its term slot for every
    /// document. Missing rows are zeros and rows past `term_count` are
    /// ignored.
    pub fn document_vectors(&self, term_count: usize, document_count: usize) -> Vec<Vec<f64>> {
        let mut vectors = vec![vec![0.0; term_count]; document_count];

        for (term_index, row) in self.rows.iter().enumerate() {
            if row.len() != document_count {
                log::debug!(
                    "Skipping matrix row {}: {} columns, expected {}",
                    term_index + 1,
                    row.len(),
                    document_count
                );
                continue;
            }
            if term_index >= term_count {
                log::debug!(
                    "Ignoring matrix row {}: vocabulary has {} terms",
                    term_index + 1,
                    term_count
                );
                continue;
            }
            for (vector, &frequency) in vectors.iter_mut().zip(row) {
                vector[term_index] = frequency as f64;
            }
        }

        vectors
    }
}
