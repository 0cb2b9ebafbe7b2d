use std::collections::HashMap;

/// The ordered term vocabulary of an index.
///
/// Term order defines the dimension order shared by query and document
/// vectors. Lookups resolve to the first position a term occupies, so a
/// malformed index with duplicate terms still maps each term to one slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
    positions: HashMap<String, usize>,
}

impl Vocabulary {
    #[must_use]
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms: Vec<String> = terms.into_iter().map(Into::into).collect();
        let mut positions = HashMap::with_capacity(terms.len());
        for (index, term) in terms.iter().enumerate() {
            positions.entry(term.clone()).or_insert(index);
        }
        Self { terms, positions }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Position of the first occurrence of `term`, if present.
    pub fn position(&self, term: &str) -> Option<usize> {
        self.positions.get(term).copied()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}
