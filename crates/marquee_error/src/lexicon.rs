//! Sentiment lexicon error types.

/// Kinds of lexicon errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum LexiconErrorKind {
    /// Failed to read a lexicon file
    #[display("Failed to read lexicon file: {}", _0)]
    FileRead(String),
    /// A line is missing its tab-separated valence column
    #[display("Malformed lexicon entry on line {}: '{}'", line, entry)]
    MalformedEntry {
        /// 1-based line number in the lexicon source
        line: usize,
        /// Offending line content
        entry: String,
    },
    /// A valence column is not a number in `-4.0..=4.0`
    #[display("Invalid valence '{}' for word '{}'", value, word)]
    InvalidValence {
        /// Lexicon word
        word: String,
        /// Raw valence text
        value: String,
    },
    /// The lexicon source contained no entries
    #[display("Lexicon contains no entries")]
    Empty,
}

/// Lexicon error with location tracking.
///
/// # Examples
///
/// ```
/// use marquee_error::{LexiconError, LexiconErrorKind};
///
/// let err = LexiconError::new(LexiconErrorKind::Empty);
/// assert!(format!("{}", err).contains("no entries"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Lexicon Error: {} at line {} in {}", kind, line, file)]
pub struct LexiconError {
    /// The kind of error that occurred
    pub kind: LexiconErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl LexiconError {
    /// Create a new lexicon error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: LexiconErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
