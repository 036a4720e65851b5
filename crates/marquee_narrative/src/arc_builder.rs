//! Emotional arc construction.

use crate::segment;
use marquee_core::{EmotionalArc, ScoredSegment, Segment, ValenceScorer};
use tracing::{debug, instrument};

/// Scores script segments with a borrowed scorer.
///
/// The builder holds no state of its own; one scorer can back any number of
/// builders on any number of threads.
///
/// # Examples
///
/// ```
/// use marquee_narrative::ArcBuilder;
///
/// let constant = |_: &str| 0.25;
/// let builder = ArcBuilder::new(&constant);
/// let arc = builder.build("one\n\ntwo\n\nthree");
/// assert_eq!(arc.valences(), vec![0.25, 0.25, 0.25]);
/// ```
#[derive(Debug)]
pub struct ArcBuilder<'a, S: ValenceScorer + ?Sized> {
    scorer: &'a S,
}

impl<'a, S: ValenceScorer + ?Sized> ArcBuilder<'a, S> {
    /// Create a builder around a scorer.
    pub fn new(scorer: &'a S) -> Self {
        Self { scorer }
    }

    /// Score already-segmented text, keeping segment order.
    pub fn score_segments(&self, segments: &[Segment]) -> Vec<ScoredSegment> {
        segments
            .iter()
            .map(|s| ScoredSegment::new(s.clone(), self.scorer.score(s.raw_text())))
            .collect()
    }

    /// Segment and score a script.
    pub fn score_script(&self, text: &str) -> Vec<ScoredSegment> {
        self.score_segments(&segment(text))
    }

    /// Build the emotional arc of a script.
    ///
    /// An empty arc means the script had no usable content.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn build(&self, text: &str) -> EmotionalArc {
        let scored = self.score_script(text);
        if scored.is_empty() {
            debug!("Insufficient content for an emotional arc");
            return EmotionalArc::insufficient();
        }
        debug!(points = scored.len(), "Built emotional arc");
        EmotionalArc::from_scored(&scored)
    }
}

/// Build the emotional arc of a script with the given scorer.
pub fn build_arc<S: ValenceScorer + ?Sized>(text: &str, scorer: &S) -> EmotionalArc {
    ArcBuilder::new(scorer).build(text)
}
