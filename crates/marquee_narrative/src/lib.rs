//! Narrative analysis for Marquee.
//!
//! This crate turns screenplay text into an emotional arc and turns a sectioned
//! analysis report into an ordered set of titled sections.
//!
//! # Features
//!
//! - **Segmentation**: scene headings first, blank-line paragraphs as fallback
//! - **Emotional arcs**: one valence per segment, from any [`ValenceScorer`](marquee_core::ValenceScorer)
//! - **Report sectioning**: exact header-block grammar with a single-section fallback
//! - **Report layout**: snapshot promotion and tab ordering for display
//! - **Configuration**: bundled defaults layered with user `marquee.toml` files
//!
//! # Example
//!
//! ```
//! use marquee_narrative::{build_arc, parse_report};
//! use marquee_sentiment::SentimentAnalyzer;
//!
//! let analyzer = SentimentAnalyzer::new();
//! let arc = build_arc("INT. HOUSE\nThey laugh.\nEXT. PARK\nShe cries.", &analyzer);
//! assert_eq!(arc.indices(), vec![1, 2]);
//!
//! let report = parse_report("no headers here");
//! assert!(report.is_fallback());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod arc_builder;
mod config;
mod layout;
mod report_parser;
mod script_loader;
mod segmenter;

pub use arc_builder::{ArcBuilder, build_arc};
pub use config::{ArcConfig, MarqueeConfig, ReportConfig, SentimentConfig};
pub use layout::{ReportLayout, ReportTab};
pub use report_parser::{SEPARATOR, parse_report, production_requirements, render_report};
pub use script_loader::load_script;
pub use segmenter::{Segmentation, segment, segment_script};
