use std::io;

use thiserror::Error;

/// Errors surfaced by corpus loading and the evaluation harness.
///
/// Correction itself is total and never fails; only construction-time
/// corpus handling and test-set parsing can go wrong.
#[derive(Error, Debug)]
pub enum SpellError {
    /// Corpus or test-set file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The corpus produced zero tokens, so no probability can be defined.
    #[error("corpus produced no tokens")]
    EmptyCorpus,

    /// A test-set line did not match the `correct: wrong1 wrong2 ...` shape.
    #[error("malformed test-set line: {line:?}")]
    MalformedTestSet { line: String },
}

pub type Result<T> = std::result::Result<T, SpellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            SpellError::EmptyCorpus.to_string(),
            "corpus produced no tokens"
        );
        let err = SpellError::MalformedTestSet {
            line: "no colon here".to_string(),
        };
        assert!(err.to_string().contains("no colon here"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err: SpellError = io_err.into();
        assert!(matches!(err, SpellError::Io(_)));
    }
}
