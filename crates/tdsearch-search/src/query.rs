use std::collections::HashMap;
use std::io::{self, BufRead};

use tdsearch_core::Vocabulary;

/// Query token that is never counted.
pub const IGNORED_TOKEN: &str = "1";

/// Read a query from `reader` until end of stream.
///
/// Lines are trimmed and joined with single spaces.
pub fn read_query<R: BufRead>(reader: R) -> io::Result<String> {
    let lines = reader
        .lines()
        .map(|line| line.map(|l| l.trim().to_string()))
        .collect::<io::Result<Vec<_>>>()?;
    Ok(lines.join(" "))
}

/// Count lower-cased, whitespace-separated query terms.
pub fn term_frequencies(query: &str) -> HashMap<String, usize> {
    let mut frequencies = HashMap::new();
    for term in query.to_lowercase().split_whitespace() {
        if term == IGNORED_TOKEN {
            continue;
        }
        *frequencies.entry(term.to_string()).or_insert(0) += 1;
    }
    frequencies
}

/// Project term frequencies onto the vocabulary's dimension order.
///
/// Terms missing from the vocabulary contribute nothing.
pub fn project(frequencies: &HashMap<String, usize>, vocabulary: &Vocabulary) -> Vec<f64> {
    let mut vector = vec![0.0; vocabulary.len()];
    for (term, &frequency) in frequencies {
        match vocabulary.position(term) {
            Some(index) => vector[index] += frequency as f64,
            None => log::debug!("Query term {:?} is not in the vocabulary", term),
        }
    }
    vector
}

/// Build the dense query vector for `query`.
pub fn vectorize(query: &str, vocabulary: &Vocabulary) -> Vec<f64> {
    project(&term_frequencies(query), vocabulary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_query_joins_lines() {
        let input = "  Cat dog \nemu\n\n";
        let query = read_query(input.as_bytes()).unwrap();
        assert_eq!(query, "Cat dog emu ");
    }

    #[test]
    fn test_read_query_empty_input() {
        let query = read_query(io::empty()).unwrap();
        assert_eq!(query, "");
    }

    #[test]
    fn test_term_frequencies_lowercases_and_counts() {
        let freqs = term_frequencies("Cat cat DOG");
        assert_eq!(freqs.len(), 2);
        assert_eq!(freqs["cat"], 2);
        assert_eq!(freqs["dog"], 1);
    }

    #[test]
    fn test_term_frequencies_ignores_literal_one() {
        let freqs = term_frequencies("cat 1 1");
        assert_eq!(freqs.len(), 1);
        assert_eq!(freqs["cat"], 1);
        assert!(!freqs.contains_key("1"));
    }

    #[test]
    fn test_other_numerals_are_counted() {
        let freqs = term_frequencies("2 11 1");
        assert_eq!(freqs["2"], 1);
        assert_eq!(freqs["11"], 1);
        assert_eq!(freqs.len(), 2);
    }

    #[test]
    fn test_vectorize_drops_unknown_terms() {
        let vocab = Vocabulary::from_terms(["cat", "dog"]);
        assert_eq!(vectorize("cat yak cat", &vocab), vec![2.0, 0.0]);
        assert_eq!(vectorize("yak", &vocab), vec![0.0, 0.0]);
    }

    #[test]
    fn test_vectorize_ignored_token_in_vocabulary() {
        let vocab = Vocabulary::from_terms(["1", "cat"]);
        assert_eq!(vectorize("1 cat", &vocab), vec![0.0, 1.0]);
    }

    #[test]
    fn test_vectorize_duplicate_vocabulary_term() {
        let vocab = Vocabulary::from_terms(["cat", "dog", "cat"]);
        assert_eq!(vectorize("cat cat", &vocab), vec![2.0, 0.0, 0.0]);
    }
}
