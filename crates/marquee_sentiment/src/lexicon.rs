//! Word polarity lexicon.

use marquee_error::{LexiconError, LexiconErrorKind};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, instrument};

const BUNDLED_LEXICON: &str = include_str!("../data/lexicon.tsv");

/// Largest valence magnitude an entry may carry.
const MAX_VALENCE: f64 = 4.0;

/// Maps lowercase words to valences on the -4..=4 scale.
///
/// The text format is one `word<TAB>valence` entry per line. Blank lines and
/// lines starting with `#` are skipped, and columns after the valence are ignored.
///
/// # Examples
///
/// ```
/// use marquee_sentiment::Lexicon;
///
/// let lexicon = Lexicon::parse("# custom\nsplendid\t2.8\nDreary\t-1.9\n").unwrap();
/// assert_eq!(lexicon.valence("splendid"), Some(2.8));
/// assert_eq!(lexicon.valence("dreary"), Some(-1.9));
/// assert_eq!(lexicon.valence("table"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Lexicon {
    entries: HashMap<String, f64>,
}

impl Lexicon {
    /// The lexicon shipped with the crate.
    pub fn bundled() -> Self {
        Self::parse(BUNDLED_LEXICON).expect("Bundled lexicon is well-formed")
    }

    /// Parse lexicon text.
    ///
    /// # Errors
    ///
    /// Fails on a line without a valence column, on a valence that is not a number
    /// in `-4.0..=4.0`, or when the source holds no entries at all.
    #[instrument(skip(source), fields(source_len = source.len()))]
    pub fn parse(source: &str) -> Result<Self, LexiconError> {
        let mut entries = HashMap::new();

        for (i, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut columns = line.split('\t');
            let word = columns.next().unwrap_or_default().trim();
            let Some(raw) = columns.next().map(str::trim).filter(|_| !word.is_empty()) else {
                return Err(LexiconError::new(LexiconErrorKind::MalformedEntry {
                    line: i + 1,
                    entry: line.to_string(),
                }));
            };

            let valence = raw
                .parse::<f64>()
                .ok()
                .filter(|v| (-MAX_VALENCE..=MAX_VALENCE).contains(v))
                .ok_or_else(|| {
                    LexiconError::new(LexiconErrorKind::InvalidValence {
                        word: word.to_string(),
                        value: raw.to_string(),
                    })
                })?;

            entries.insert(word.to_lowercase(), valence);
        }

        if entries.is_empty() {
            return Err(LexiconError::new(LexiconErrorKind::Empty));
        }

        debug!(entries = entries.len(), "Parsed sentiment lexicon");
        Ok(Self { entries })
    }

    /// Read and parse a lexicon file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or does not parse.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let source = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            LexiconError::new(LexiconErrorKind::FileRead(format!(
                "{}: {}",
                path.as_ref().display(),
                e
            )))
        })?;
        Self::parse(&source)
    }

    /// Valence for a word, case-insensitive.
    pub fn valence(&self, word: &str) -> Option<f64> {
        match self.entries.get(word) {
            Some(v) => Some(*v),
            None => self.entries.get(&word.to_lowercase()).copied(),
        }
    }

    /// Whether the lexicon has an entry for a lowercase word.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon has no entries. Parsed lexicons never do.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::bundled()
    }
}
