use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found - {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("I/O error reading {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid matrix entry {token:?} at {}:{line}", path.display())]
    MatrixParse {
        path: PathBuf,
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
}

impl Error {
    /// Returns `true` when an index artifact is missing from disk.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_message() {
        let err = Error::FileNotFound {
            path: PathBuf::from("/idx/sorted_terms.txt"),
        };
        assert_eq!(err.to_string(), "File not found - /idx/sorted_terms.txt");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_matrix_parse_message() {
        let source = "x".parse::<i64>().unwrap_err();
        let err = Error::MatrixParse {
            path: PathBuf::from("td_matrix.txt"),
            line: 3,
            token: "x".to_string(),
            source,
        };
        let message = err.to_string();
        assert!(message.starts_with("invalid matrix entry \"x\" at td_matrix.txt:3"));
        assert!(!message.contains("invalid digit"));
        assert!(!err.is_not_found());
    }
}
