//! The scoring seam between segmentation and sentiment analysis.

/// Maps a span of text to a valence in `[-1.0, 1.0]`.
///
/// Implementations must be deterministic and must not fail: empty or neutral text
/// scores `0.0`. A scorer is constructed once and shared read-only, so `score`
/// takes `&self`.
///
/// Closures work as scorers, which keeps arc tests independent of any lexicon:
///
/// ```
/// use marquee_core::ValenceScorer;
///
/// let by_length = |text: &str| (text.len() as f64 / 100.0).min(1.0);
/// assert_eq!(by_length.score("abcd"), 0.04);
/// ```
pub trait ValenceScorer {
    /// Score a span of text.
    fn score(&self, text: &str) -> f64;
}

impl<F> ValenceScorer for F
where
    F: Fn(&str) -> f64,
{
    fn score(&self, text: &str) -> f64 {
        self(text)
    }
}
