//! Narrative units extracted from a script.

use serde::{Deserialize, Serialize};

const SCENE_MARKERS: [&str; 2] = ["INT.", "EXT."];

/// Which tier of the segmenter produced a segmentation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum SegmentationStrategy {
    /// Split on line-initial `INT.` / `EXT.` scene headings
    #[display("scene headings")]
    SceneHeadings,
    /// Split on blank lines
    #[display("paragraphs")]
    Paragraphs,
    /// The script had no extractable content
    #[display("empty")]
    Empty,
}

/// A contiguous, trimmed, non-empty unit of narrative text.
///
/// # Examples
///
/// ```
/// use marquee_core::Segment;
///
/// let segment = Segment::new(1, "INT. HOUSE - NIGHT\nRain on the windows.");
/// assert_eq!(*segment.index(), 1);
/// assert_eq!(segment.heading(), Some("INT. HOUSE - NIGHT"));
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct Segment {
    /// 1-based position in the script
    index: usize,
    /// Trimmed segment text
    raw_text: String,
}

impl Segment {
    /// Create a segment. The text is stored as given; the segmenter trims it first.
    pub fn new(index: usize, raw_text: impl Into<String>) -> Self {
        Self {
            index,
            raw_text: raw_text.into(),
        }
    }

    /// The first line, when the segment opens with a scene heading.
    pub fn heading(&self) -> Option<&str> {
        let first = self.raw_text.lines().next()?;
        SCENE_MARKERS
            .iter()
            .any(|marker| first.starts_with(marker))
            .then_some(first.trim_end())
    }
}

/// A segment paired with its valence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ScoredSegment {
    /// The scored segment
    segment: Segment,
    /// Valence in `[-1.0, 1.0]`
    valence: f64,
}

impl ScoredSegment {
    /// Pair a segment with its score.
    pub fn new(segment: Segment, valence: f64) -> Self {
        Self { segment, valence }
    }
}
