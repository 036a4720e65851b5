//! Lexicon and rule based sentiment scoring.
//!
//! [`SentimentAnalyzer`] looks up word-level polarity in a [`Lexicon`] and adjusts it
//! for negation, degree modifiers, contrastive "but", capitalization and
//! punctuation emphasis, producing a compound valence in `[-1.0, 1.0]`.
//!
//! Construct an analyzer once and share it by reference. It is immutable after
//! construction and safe to use from any number of threads.
//!
//! # Example
//!
//! ```
//! use marquee_sentiment::SentimentAnalyzer;
//!
//! let analyzer = SentimentAnalyzer::new();
//! assert!(analyzer.compound("I love this wonderful day") > 0.0);
//! assert!(analyzer.compound("I hate this terrible day") < 0.0);
//! assert_eq!(analyzer.compound(""), 0.0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod lexicon;
mod rules;

pub use analyzer::{PolarityScores, SentimentAnalyzer};
pub use lexicon::Lexicon;
