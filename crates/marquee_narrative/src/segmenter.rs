//! Two-tier screenplay segmentation.
//!
//! Line-initial `INT.` / `EXT.` headings are trusted as scene boundaries when they
//! yield at least two segments. Otherwise the script is split on blank lines.
//! Neither tier guarantees true scene boundaries.

use marquee_core::{Segment, SegmentationStrategy};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::{debug, instrument};

/// A newline immediately followed by a scene heading marker. Case-sensitive.
static SCENE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:INT\.|EXT\.)").expect("Valid scene boundary regex"));

const PARAGRAPH_DELIMITER: &str = "\n\n";

/// Segments of a script together with the tier that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Segmentation {
    /// Which tier produced the segments
    strategy: SegmentationStrategy,
    /// Segments in source order, indexed from 1
    segments: Vec<Segment>,
}

impl Segmentation {
    fn from_chunks(strategy: SegmentationStrategy, chunks: Vec<&str>) -> Self {
        let segments = chunks
            .into_iter()
            .enumerate()
            .map(|(i, chunk)| Segment::new(i + 1, chunk))
            .collect();
        Self { strategy, segments }
    }

    /// Consume the segmentation, keeping only the segments.
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }
}

/// Split script text into ordered, trimmed, non-empty segments.
///
/// # Examples
///
/// ```
/// use marquee_narrative::segment;
///
/// let segments = segment("INT. HOUSE\nhello\nEXT. PARK\nworld");
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].raw_text(), "INT. HOUSE\nhello");
/// assert_eq!(segments[1].raw_text(), "EXT. PARK\nworld");
///
/// assert!(segment("  \n\n ").is_empty());
/// ```
pub fn segment(text: &str) -> Vec<Segment> {
    segment_script(text).into_segments()
}

/// Split script text and report which tier was used.
#[instrument(skip(text), fields(text_len = text.len()))]
pub fn segment_script(text: &str) -> Segmentation {
    if text.trim().is_empty() {
        debug!("Script has no content to segment");
        return Segmentation::from_chunks(SegmentationStrategy::Empty, Vec::new());
    }

    let scenes = split_on_scene_headings(text);
    if scenes.len() >= 2 {
        debug!(segments = scenes.len(), "Segmented on scene headings");
        return Segmentation::from_chunks(SegmentationStrategy::SceneHeadings, scenes);
    }

    let paragraphs = non_empty_trimmed(text.split(PARAGRAPH_DELIMITER));
    debug!(
        segments = paragraphs.len(),
        "No usable scene headings, segmented on paragraphs"
    );
    Segmentation::from_chunks(SegmentationStrategy::Paragraphs, paragraphs)
}

/// Chunks starting at each line-initial heading. Text before the first heading
/// is kept as its own chunk.
fn split_on_scene_headings(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    for boundary in SCENE_BOUNDARY.find_iter(text) {
        chunks.push(&text[start..boundary.start()]);
        start = boundary.start();
    }
    chunks.push(&text[start..]);
    non_empty_trimmed(chunks)
}

fn non_empty_trimmed<'a>(chunks: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    chunks
        .into_iter()
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect()
}
