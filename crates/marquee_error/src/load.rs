//! Script loading error types.

/// Specific error conditions when loading a script from disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum LoadErrorKind {
    /// Failed to read the input file
    #[display("Failed to read file: {}", _0)]
    FileRead(String),
    /// File extension is not a supported plain-text format
    #[display("Unsupported script format: {}", _0)]
    UnsupportedFormat(String),
    /// File contents are not valid UTF-8
    #[display("Script is not valid UTF-8: {}", _0)]
    InvalidEncoding(String),
}

/// Error type for script loading.
///
/// # Examples
///
/// ```
/// use marquee_error::{LoadError, LoadErrorKind};
///
/// let err = LoadError::new(LoadErrorKind::UnsupportedFormat("pdf".to_string()));
/// assert!(format!("{}", err).contains("Unsupported"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Load Error: {} at line {} in {}", kind, line, file)]
pub struct LoadError {
    /// The specific error condition
    pub kind: LoadErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl LoadError {
    /// Create a new LoadError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: LoadErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
