//! Compound valence scoring.

use crate::Lexicon;
use crate::rules::{
    C_INCR, DISTANCE_DAMPING, N_SCALAR, booster, is_all_caps, is_negation, normalize,
    punctuation_emphasis,
};
use marquee_core::ValenceScorer;
use marquee_error::LexiconError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{instrument, trace};

/// Proportions of negative, neutral and positive sentiment, plus the compound valence.
///
/// The three proportions sum to 1 whenever the text has at least one scorable
/// word, and are all zero otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct PolarityScores {
    /// Share of negative sentiment
    negative: f64,
    /// Share of neutral words
    neutral: f64,
    /// Share of positive sentiment
    positive: f64,
    /// Normalized overall valence in `[-1.0, 1.0]`
    compound: f64,
}

/// Lexicon and rule based valence scorer.
///
/// Immutable once built; share it by reference across call sites and threads.
#[derive(Debug, Clone, Default)]
pub struct SentimentAnalyzer {
    lexicon: Lexicon,
}

impl SentimentAnalyzer {
    /// Analyzer backed by the bundled lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer backed by a caller-supplied lexicon.
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Analyzer backed by a lexicon file.
    ///
    /// # Errors
    ///
    /// Fails if the lexicon file cannot be read or parsed.
    pub fn from_lexicon_file(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        Lexicon::from_file(path).map(Self::with_lexicon)
    }

    /// Analyzer backed by lexicon text.
    ///
    /// # Errors
    ///
    /// Fails if the lexicon text does not parse.
    pub fn from_lexicon_str(source: &str) -> Result<Self, LexiconError> {
        Lexicon::parse(source).map(Self::with_lexicon)
    }

    /// The lexicon in use.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Compound valence of `text` in `[-1.0, 1.0]`; `0.0` for empty or neutral text.
    pub fn compound(&self, text: &str) -> f64 {
        *self.polarity_scores(text).compound()
    }

    /// Full polarity breakdown of `text`.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return PolarityScores::default();
        }

        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let caps_count = tokens.iter().filter(|t| is_all_caps(t)).count();
        let cap_differential = caps_count > 0 && caps_count < tokens.len();

        let mut sentiments: Vec<f64> = (0..tokens.len())
            .map(|i| self.word_valence(i, &tokens, &lowered, cap_differential))
            .collect();
        apply_but_contrast(&lowered, &mut sentiments);

        let scores = sift(&sentiments, punctuation_emphasis(text));
        trace!(compound = scores.compound, "Scored text");
        scores
    }

    fn word_valence(
        &self,
        i: usize,
        tokens: &[&str],
        lowered: &[String],
        cap_differential: bool,
    ) -> f64 {
        let word = lowered[i].as_str();
        if booster(word).is_some() {
            return 0.0;
        }
        let Some(mut valence) = self.lexicon.valence(word) else {
            return 0.0;
        };

        if cap_differential && is_all_caps(tokens[i]) {
            valence += C_INCR.copysign(valence);
        }

        for (distance, damping) in DISTANCE_DAMPING.iter().enumerate() {
            if i <= distance {
                break;
            }
            let prev = i - distance - 1;
            if self.lexicon.contains(&lowered[prev]) {
                continue;
            }
            valence += modifier_boost(tokens[prev], &lowered[prev], valence, cap_differential)
                * damping;
            if is_negation(&lowered[prev]) {
                valence *= N_SCALAR;
            }
        }

        valence
    }
}

impl ValenceScorer for SentimentAnalyzer {
    fn score(&self, text: &str) -> f64 {
        self.compound(text)
    }
}

/// Split on whitespace and strip surrounding punctuation, dropping one-character leftovers.
fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|raw| raw.trim_matches(|c: char| c.is_ascii_punctuation() || c == '\u{2019}'))
        .filter(|token| token.chars().count() > 1)
        .collect()
}

fn modifier_boost(token: &str, lowered: &str, valence: f64, cap_differential: bool) -> f64 {
    let Some(mut scalar) = booster(lowered) else {
        return 0.0;
    };
    if valence < 0.0 {
        scalar = -scalar;
    }
    if cap_differential && is_all_caps(token) {
        scalar += C_INCR.copysign(valence);
    }
    scalar
}

/// Sentiment before "but" is halved and sentiment after it is weighted by 1.5.
fn apply_but_contrast(lowered: &[String], sentiments: &mut [f64]) {
    let Some(pivot) = lowered.iter().position(|w| w == "but") else {
        return;
    };
    for (i, s) in sentiments.iter_mut().enumerate() {
        if i < pivot {
            *s *= 0.5;
        } else if i > pivot {
            *s *= 1.5;
        }
    }
}

fn sift(sentiments: &[f64], emphasis: f64) -> PolarityScores {
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let compound = normalize(sum);

    let mut positive = 0.0;
    let mut negative = 0.0;
    let mut neutral = 0.0;
    for &s in sentiments {
        if s > 0.0 {
            positive += s + 1.0;
        } else if s < 0.0 {
            negative += s - 1.0;
        } else {
            neutral += 1.0;
        }
    }
    if positive > negative.abs() {
        positive += emphasis;
    } else if positive < negative.abs() {
        negative -= emphasis;
    }

    let total = positive + negative.abs() + neutral;
    if total == 0.0 {
        return PolarityScores {
            compound,
            ..PolarityScores::default()
        };
    }

    PolarityScores {
        negative: negative.abs() / total,
        neutral: neutral / total,
        positive: positive / total,
        compound,
    }
}
